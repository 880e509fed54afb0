//! Date and time codecs.
//!
//! Timestamps keep their own UTC offset through a round trip. Parsing is
//! lenient about trailing precision: a missing seconds or milliseconds field
//! is filled with zero rather than rejected.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc,
};

use crate::codec::{AttributeCodec, CodecError, Result};

/// Canonical calendar date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical local date-time format (millisecond precision, no offset).
pub const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Accepted date-time layouts, longest first.
const DATE_TIME_PARSE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Formats a timestamp as ISO-8601 with millisecond precision and its offset.
///
/// A zero offset is written as `Z`. The stored form carries the offset to the
/// minute only, so an offset with a seconds component is rejected.
pub fn format_timestamp(value: &DateTime<FixedOffset>) -> Result<String> {
    let offset_seconds = value.offset().local_minus_utc();
    if offset_seconds % 60 != 0 {
        tracing::debug!(offset_seconds, "Rejected offset with seconds");
        return Err(CodecError::Serialization(format!(
            "Offset {} has a seconds component",
            value.offset()
        )));
    }
    Ok(value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Parses an ISO-8601 timestamp, preserving the offset it carries.
///
/// Accepts `YYYY-MM-DDTHH:mm[:ss[.fraction]]` followed by `Z` or `±HH[:MM]`.
/// A string without any offset is read at UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let value = value.trim();
    let (local, offset) = split_offset(value)?;
    let naive = parse_naive_date_time(local)?;

    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| malformed("timestamp", value))
}

/// Formats a local date-time in the canonical offset-free layout.
pub fn format_local_date_time(value: &NaiveDateTime) -> String {
    value.format(LOCAL_DATE_TIME_FORMAT).to_string()
}

/// Parses a local date-time; any offset suffix makes the input malformed.
pub fn parse_local_date_time(value: &str) -> Result<NaiveDateTime> {
    parse_naive_date_time(value.trim())
}

fn parse_naive_date_time(value: &str) -> Result<NaiveDateTime> {
    DATE_TIME_PARSE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| malformed("date-time", value))
}

/// Splits `value` into its local part and offset.
fn split_offset(value: &str) -> Result<(&str, FixedOffset)> {
    let utc = FixedOffset::east_opt(0).ok_or_else(|| malformed("offset", value))?;

    if let Some(local) = value.strip_suffix(['Z', 'z']) {
        return Ok((local, utc));
    }

    // The offset sign can only appear after the time separator.
    let time_start = value.find('T').map(|i| i + 1).unwrap_or(value.len());
    match value[time_start..].rfind(['+', '-']) {
        Some(i) => {
            let split = time_start + i;
            let offset =
                parse_offset(&value[split..]).ok_or_else(|| malformed("offset", value))?;
            Ok((&value[..split], offset))
        }
        None => Ok((value, utc)),
    }
}

/// Parses `±HH`, `±HHMM` or `±HH:MM`.
fn parse_offset(value: &str) -> Option<FixedOffset> {
    let (sign, digits) = match value.split_at(1) {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };
    let digits = digits.replacen(':', "", 1);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes): (i32, i32) = match digits.len() {
        2 => (digits.parse().ok()?, 0),
        4 => (digits[..2].parse().ok()?, digits[2..].parse().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn malformed(kind: &str, value: &str) -> CodecError {
    tracing::debug!(kind, value, "Rejected unparseable date/time");
    CodecError::MalformedPayload(format!("Invalid {kind}: {value}"))
}

/// Timestamp with offset ⇄ ISO-8601 string.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeCodec;

impl AttributeCodec for DateTimeCodec {
    type Value = DateTime<FixedOffset>;
    type Stored = String;

    fn convert(&self, value: Option<&DateTime<FixedOffset>>) -> Result<Option<String>> {
        value.map(format_timestamp).transpose()
    }

    fn unconvert(&self, stored: Option<&String>) -> Result<Option<DateTime<FixedOffset>>> {
        stored.map(|s| parse_timestamp(s)).transpose()
    }
}

/// Calendar date ⇄ `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateCodec;

impl AttributeCodec for LocalDateCodec {
    type Value = NaiveDate;
    type Stored = String;

    fn convert(&self, value: Option<&NaiveDate>) -> Result<Option<String>> {
        Ok(value.map(|date| date.format(DATE_FORMAT).to_string()))
    }

    fn unconvert(&self, stored: Option<&String>) -> Result<Option<NaiveDate>> {
        stored
            .map(|s| {
                NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| malformed("date", s))
            })
            .transpose()
    }
}

/// Local date-time ⇄ `YYYY-MM-DDTHH:mm:ss.SSS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateTimeCodec;

impl AttributeCodec for LocalDateTimeCodec {
    type Value = NaiveDateTime;
    type Stored = String;

    fn convert(&self, value: Option<&NaiveDateTime>) -> Result<Option<String>> {
        Ok(value.map(format_local_date_time))
    }

    fn unconvert(&self, stored: Option<&String>) -> Result<Option<NaiveDateTime>> {
        stored.map(|s| parse_local_date_time(s)).transpose()
    }
}

/// UTC instant ⇄ milliseconds since the Unix epoch.
///
/// Unlike [`DateTimeCodec`] this discards any offset: values always come back
/// at UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpochMillisCodec;

impl AttributeCodec for EpochMillisCodec {
    type Value = DateTime<Utc>;
    type Stored = i64;

    fn convert(&self, value: Option<&DateTime<Utc>>) -> Result<Option<i64>> {
        Ok(value.map(DateTime::timestamp_millis))
    }

    fn unconvert(&self, stored: Option<&i64>) -> Result<Option<DateTime<Utc>>> {
        stored
            .map(|&millis| {
                DateTime::<Utc>::from_timestamp_millis(millis)
                    .ok_or_else(|| malformed("epoch millis", &millis.to_string()))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveTime, Timelike};

    fn pacific() -> FixedOffset {
        FixedOffset::west_opt(8 * 3600).unwrap()
    }

    fn christmas_morning() -> DateTime<FixedOffset> {
        let naive = NaiveDate::from_ymd_opt(2014, 12, 25)
            .unwrap()
            .and_hms_milli_opt(10, 12, 37, 22)
            .unwrap();
        pacific().from_local_datetime(&naive).unwrap()
    }

    #[test]
    fn test_timestamp_canonical_form() {
        let stored = DateTimeCodec.convert(Some(&christmas_morning())).unwrap();
        assert_eq!(stored.as_deref(), Some("2014-12-25T10:12:37.022-08:00"));
    }

    #[test]
    fn test_timestamp_round_trip_keeps_offset() {
        let original = christmas_morning();
        let stored = DateTimeCodec.convert(Some(&original)).unwrap();
        let parsed = DateTimeCodec.unconvert(stored.as_ref()).unwrap().unwrap();

        assert_eq!(parsed, original);
        assert_eq!(parsed.offset(), original.offset());
    }

    #[test]
    fn test_timestamp_utc_written_with_z() {
        let utc = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2015, 1, 1, 0, 0, 0)
            .unwrap();
        let stored = DateTimeCodec.convert(Some(&utc)).unwrap().unwrap();
        assert_eq!(stored, "2015-01-01T00:00:00.000Z");
        assert_eq!(DateTimeCodec.unconvert(Some(&stored)).unwrap(), Some(utc));
    }

    #[test]
    fn test_partial_timestamp_zero_fills() {
        let parsed = parse_timestamp("2014-10-31T10:12-08:00").unwrap();

        assert_eq!(parsed.year(), 2014);
        assert_eq!(parsed.month(), 10);
        assert_eq!(parsed.day(), 31);
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.minute(), 12);
        assert_eq!(parsed.second(), 0);
        assert_eq!(parsed.timestamp_subsec_millis(), 0);
        assert_eq!(*parsed.offset(), pacific());
    }

    #[test]
    fn test_timestamp_without_millis() {
        let parsed = parse_timestamp("2014-10-31T10:12:45+05:30").unwrap();
        assert_eq!(parsed.second(), 45);
        assert_eq!(parsed.timestamp_subsec_millis(), 0);
        assert_eq!(parsed.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
    }

    #[test]
    fn test_timestamp_compact_offset_and_missing_offset() {
        let compact = parse_timestamp("2014-10-31T10:12:45.123-0800").unwrap();
        assert_eq!(*compact.offset(), pacific());
        assert_eq!(compact.timestamp_subsec_millis(), 123);

        let bare = parse_timestamp("2014-10-31T10:12:45").unwrap();
        assert_eq!(bare.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_timestamp_truncates_to_millis() {
        let parsed = parse_timestamp("2014-10-31T10:12:45.123456Z").unwrap();
        assert_eq!(format_timestamp(&parsed).unwrap(), "2014-10-31T10:12:45.123Z");
    }

    #[test]
    fn test_timestamp_offset_with_seconds_rejected() {
        let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60 + 15).unwrap();
        let value = christmas_morning().with_timezone(&offset);

        let result = DateTimeCodec.convert(Some(&value));
        assert!(matches!(result, Err(CodecError::Serialization(_))));
    }

    #[test]
    fn test_timestamp_malformed() {
        for input in ["not a date", "2014-10-31", "2014-13-31T10:12Z", "2014-10-31T10:12+25:00"] {
            let result = DateTimeCodec.unconvert(Some(&input.to_string()));
            assert!(
                matches!(result, Err(CodecError::MalformedPayload(_))),
                "expected malformed for {input}"
            );
        }
    }

    #[test]
    fn test_local_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2017, 2, 28).unwrap();
        let stored = LocalDateCodec.convert(Some(&date)).unwrap();
        assert_eq!(stored.as_deref(), Some("2017-02-28"));
        assert_eq!(LocalDateCodec.unconvert(stored.as_ref()).unwrap(), Some(date));
    }

    #[test]
    fn test_local_date_malformed() {
        let result = LocalDateCodec.unconvert(Some(&"2017-02-30".to_string()));
        assert!(matches!(result, Err(CodecError::MalformedPayload(_))));
    }

    #[test]
    fn test_local_date_time_round_trip() {
        let value = NaiveDate::from_ymd_opt(2016, 7, 4)
            .unwrap()
            .and_hms_milli_opt(23, 5, 9, 7)
            .unwrap();
        let stored = LocalDateTimeCodec.convert(Some(&value)).unwrap();
        assert_eq!(stored.as_deref(), Some("2016-07-04T23:05:09.007"));
        assert_eq!(
            LocalDateTimeCodec.unconvert(stored.as_ref()).unwrap(),
            Some(value)
        );
    }

    #[test]
    fn test_local_date_time_partial_input() {
        let parsed = LocalDateTimeCodec
            .unconvert(Some(&"2016-07-04T23:05".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.time(), NaiveTime::from_hms_opt(23, 5, 0).unwrap());
    }

    #[test]
    fn test_local_date_time_rejects_offset() {
        let result = LocalDateTimeCodec.unconvert(Some(&"2016-07-04T23:05:09.007-07:00".to_string()));
        assert!(matches!(result, Err(CodecError::MalformedPayload(_))));
    }

    #[test]
    fn test_epoch_millis_round_trip() {
        let instant = christmas_morning().with_timezone(&Utc);
        let stored = EpochMillisCodec.convert(Some(&instant)).unwrap();
        assert_eq!(stored, Some(1_419_531_157_022));
        assert_eq!(EpochMillisCodec.unconvert(stored.as_ref()).unwrap(), Some(instant));
    }

    #[test]
    fn test_epoch_millis_discards_offset() {
        let stored = EpochMillisCodec
            .convert(Some(&christmas_morning().with_timezone(&Utc)))
            .unwrap();
        let parsed = EpochMillisCodec.unconvert(stored.as_ref()).unwrap().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2014-12-25T18:12:37.022+00:00");
    }

    #[test]
    fn test_epoch_millis_out_of_range() {
        let result = EpochMillisCodec.unconvert(Some(&i64::MAX));
        assert!(matches!(result, Err(CodecError::MalformedPayload(_))));
    }

    #[test]
    fn test_null_symmetry() {
        assert_eq!(DateTimeCodec.convert(None).unwrap(), None);
        assert_eq!(DateTimeCodec.unconvert(None).unwrap(), None);
        assert_eq!(LocalDateCodec.convert(None).unwrap(), None);
        assert_eq!(LocalDateCodec.unconvert(None).unwrap(), None);
        assert_eq!(LocalDateTimeCodec.convert(None).unwrap(), None);
        assert_eq!(LocalDateTimeCodec.unconvert(None).unwrap(), None);
        assert_eq!(EpochMillisCodec.convert(None).unwrap(), None);
        assert_eq!(EpochMillisCodec.unconvert(None).unwrap(), None);
    }
}

//! Serde helpers that write date/time fields in their canonical stored form.
//!
//! Use with `#[serde(with = "...")]` on fields of types that travel through the
//! JSON codecs, so nested timestamps look the same as top-level attributes.

/// `Option<DateTime<FixedOffset>>` as `2014-12-25T10:12:37.022-08:00`.
///
/// Pair with `#[serde(default, skip_serializing_if = "Option::is_none")]` to
/// leave unset timestamps out of the document.
pub mod canonical_timestamp {
    use chrono::{DateTime, FixedOffset};
    use serde::{ser, Deserialize, Deserializer, Serializer};

    use crate::scalar::{format_timestamp, parse_timestamp};

    pub fn serialize<S>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => {
                let s = format_timestamp(v).map_err(<S::Error as ser::Error>::custom)?;
                serializer.serialize_str(&s)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        s.map(|s| parse_timestamp(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

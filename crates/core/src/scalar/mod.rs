mod datetime;
mod enums;

pub use datetime::{
    format_local_date_time, format_timestamp, parse_local_date_time, parse_timestamp,
    DateTimeCodec, EpochMillisCodec, LocalDateCodec, LocalDateTimeCodec, DATE_FORMAT,
    LOCAL_DATE_TIME_FORMAT,
};
pub use enums::{EnumCodec, NamedEnum};

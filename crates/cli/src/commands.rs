//! Decoding a stored value and re-encoding it canonically.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use dynamarshal_core::domain::EventUpdateTypeMapCodec;
use dynamarshal_core::{
    AttributeCodec, DateTimeCodec, EpochMillisCodec, JsonMapper, JsonNodeCodec, LocalDateCodec,
    LocalDateTimeCodec, NamedEnum, StringListCodec, StringSetCodec,
};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};

/// A stored value as the store keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StoredForm {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for StoredForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoredForm::Text(s) => f.write_str(s),
            StoredForm::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Result of decoding one stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Canonical {
    pub codec: &'static str,
    pub input: StoredForm,
    pub canonical: StoredForm,
    /// False when the input was already canonical.
    pub changed: bool,
    /// Extra facts about the decoded value, by label.
    pub details: BTreeMap<String, String>,
}

impl Canonical {
    fn new(codec: &'static str, input: StoredForm, canonical: StoredForm) -> Self {
        Self {
            codec,
            changed: input != canonical,
            input,
            canonical,
            details: BTreeMap::new(),
        }
    }

    fn with_detail(mut self, label: &str, value: impl Into<String>) -> Self {
        self.details.insert(label.to_string(), value.into());
        self
    }
}

/// Decode the command's value and re-encode it with the same codec.
pub fn run(cli: &Cli) -> Result<Canonical> {
    let mapper = Arc::new(JsonMapper::new(cli.mapper_config()?));
    let codec_name = cli.command.codec_name();
    tracing::debug!(codec = codec_name, "Decoding stored value");

    let canonical = match &cli.command {
        Commands::Timestamp { value } => {
            let (decoded, canonical) = round_trip(&DateTimeCodec, value.clone())?;
            Canonical::new(codec_name, text(value), StoredForm::Text(canonical))
                .with_detail("offset", decoded.offset().to_string())
                .with_detail(
                    "utc",
                    decoded
                        .with_timezone(&Utc)
                        .to_rfc3339_opts(SecondsFormat::Millis, true),
                )
                .with_detail("epoch_millis", decoded.timestamp_millis().to_string())
        }
        Commands::Date { value } => {
            let (decoded, canonical) = round_trip(&LocalDateCodec, value.clone())?;
            Canonical::new(codec_name, text(value), StoredForm::Text(canonical))
                .with_detail("weekday", decoded.format("%A").to_string())
        }
        Commands::LocalDateTime { value } => {
            let (_, canonical) = round_trip(&LocalDateTimeCodec, value.clone())?;
            Canonical::new(codec_name, text(value), StoredForm::Text(canonical))
        }
        Commands::EpochMillis { value } => {
            let (decoded, canonical) = round_trip(&EpochMillisCodec, *value)?;
            Canonical::new(
                codec_name,
                StoredForm::Number(*value),
                StoredForm::Number(canonical),
            )
            .with_detail("utc", decoded.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Commands::StringSet { value } => {
            let codec = StringSetCodec::new(mapper);
            let (decoded, canonical) = round_trip(&codec, value.clone())?;
            Canonical::new(codec_name, text(value), StoredForm::Text(canonical))
                .with_detail("members", decoded.len().to_string())
        }
        Commands::StringList { value } => {
            let codec = StringListCodec::new(mapper);
            let (decoded, canonical) = round_trip(&codec, value.clone())?;
            Canonical::new(codec_name, text(value), StoredForm::Text(canonical))
                .with_detail("elements", decoded.len().to_string())
        }
        Commands::Json { value } => {
            let codec = JsonNodeCodec::new(mapper);
            let (decoded, canonical) = round_trip(&codec, value.clone())?;
            Canonical::new(codec_name, text(value), StoredForm::Text(canonical))
                .with_detail("kind", json_kind(&decoded))
        }
        Commands::EventUpdateTypes { value } => {
            let codec = EventUpdateTypeMapCodec::new(mapper);
            let (decoded, canonical) = round_trip(&codec, value.clone())?;
            decoded.iter().fold(
                Canonical::new(codec_name, text(value), StoredForm::Text(canonical)),
                |acc, (event, update_type)| {
                    acc.with_detail(&format!("event.{event}"), update_type.name())
                },
            )
        }
    };

    tracing::info!(
        codec = codec_name,
        changed = canonical.changed,
        "Decoded stored value"
    );
    Ok(canonical)
}

/// Unconverts `stored`, then converts the result back.
fn round_trip<C: AttributeCodec>(codec: &C, stored: C::Stored) -> Result<(C::Value, C::Stored)> {
    let value = codec
        .unconvert(Some(&stored))?
        .ok_or_else(|| CliError::InvalidInput("value decoded to nothing".to_string()))?;
    let canonical = codec
        .convert(Some(&value))?
        .ok_or_else(|| CliError::InvalidInput("value encoded to nothing".to_string()))?;
    Ok((value, canonical))
}

fn text(value: &str) -> StoredForm {
    StoredForm::Text(value.to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use dynamarshal_core::MapperConfig;

/// Decode stored attribute values and print their canonical form.
#[derive(Debug, Parser)]
#[command(name = "dynamarshal")]
#[command(about = "Decode stored attribute values and print their canonical form", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Largest JSON text a codec may emit, in bytes.
    /// Defaults to `DYNAMARSHAL_MAX_PAYLOAD_BYTES`, then 400 KiB.
    #[arg(long)]
    pub max_payload_bytes: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Mapper configuration from the environment, overridden by flags.
    pub fn mapper_config(&self) -> dynamarshal_core::Result<MapperConfig> {
        match self.max_payload_bytes {
            Some(max_payload_bytes) => MapperConfig::new(max_payload_bytes),
            None => MapperConfig::from_env(),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands. Each takes one stored value.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Timestamp with offset, e.g. `2014-12-25T10:12:37.022-08:00`.
    Timestamp { value: String },
    /// Calendar date, e.g. `2024-01-15`.
    Date { value: String },
    /// Local date-time without offset, e.g. `2024-01-15T09:30:00.000`.
    LocalDateTime { value: String },
    /// Milliseconds since the Unix epoch.
    EpochMillis {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// JSON array of unique strings.
    StringSet { value: String },
    /// JSON array of strings, order preserved.
    StringList { value: String },
    /// Any JSON document.
    Json { value: String },
    /// JSON object of event name to update type.
    EventUpdateTypes { value: String },
}

impl Commands {
    /// Name of the codec the command decodes with.
    pub fn codec_name(&self) -> &'static str {
        match self {
            Commands::Timestamp { .. } => "timestamp",
            Commands::Date { .. } => "date",
            Commands::LocalDateTime { .. } => "local-date-time",
            Commands::EpochMillis { .. } => "epoch-millis",
            Commands::StringSet { .. } => "string-set",
            Commands::StringList { .. } => "string-list",
            Commands::Json { .. } => "json",
            Commands::EventUpdateTypes { .. } => "event-update-types",
        }
    }
}

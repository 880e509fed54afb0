//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;
use crate::commands::Canonical;

/// Format a decoded value for output.
pub fn format_output(canonical: &Canonical, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(canonical).unwrap_or_default(),
        OutputFormat::Pretty => pretty::format_canonical(canonical),
    }
}

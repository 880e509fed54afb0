//! CLI error types.

use dynamarshal_core::CodecError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while decoding a stored value.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

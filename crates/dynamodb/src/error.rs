use dynamarshal_core::CodecError;
use thiserror::Error;

/// Errors that can occur while mapping items to and from entities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Wraps a codec failure for a named attribute.
    pub fn for_field(field: &str, err: CodecError) -> Self {
        match err {
            CodecError::MalformedPayload(_) | CodecError::UnknownVariant { .. } => {
                RepositoryError::InvalidData(format!("{field}: {err}"))
            }
            CodecError::Serialization(_)
            | CodecError::PayloadTooLarge { .. }
            | CodecError::InvalidConfig(_) => {
                RepositoryError::Serialization(format!("{field}: {err}"))
            }
        }
    }
}

impl From<CodecError> for RepositoryError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::MalformedPayload(_) | CodecError::UnknownVariant { .. } => {
                RepositoryError::InvalidData(err.to_string())
            }
            _ => RepositoryError::Serialization(err.to_string()),
        }
    }
}

/// Result type for item mapping operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

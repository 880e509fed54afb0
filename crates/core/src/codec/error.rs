use thiserror::Error;

/// Errors that can occur while converting attribute values.
///
/// A `None` input is never an error: every codec maps it to `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The stored representation could not be parsed into the target type.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    /// An enum name outside the declared variant set.
    #[error("Unknown variant for {type_name}: {name}")]
    UnknownVariant {
        type_name: &'static str,
        name: String,
    },
    /// The value could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),
    #[error("Payload too large: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl CodecError {
    /// Returns true if the stored representation was rejected while decoding.
    pub fn is_malformed(&self) -> bool {
        matches!(self, CodecError::MalformedPayload(_))
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

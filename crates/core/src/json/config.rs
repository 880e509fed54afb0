use std::env;

use crate::codec::{CodecError, Result};

/// DynamoDB's maximum item size, used as the default payload limit.
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 400 * 1024;

pub const MAX_PAYLOAD_BYTES_VAR: &str = "DYNAMARSHAL_MAX_PAYLOAD_BYTES";

/// Configuration for the shared [`JsonMapper`](super::JsonMapper).
///
/// Whether an unset field is written as `null` or left out is decided by each
/// type's serde attributes, never by the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    /// Largest JSON text a codec may emit, in bytes.
    pub max_payload_bytes: usize,
}

impl MapperConfig {
    /// Create and validate a mapper config.
    pub fn new(max_payload_bytes: usize) -> Result<Self> {
        if max_payload_bytes == 0 {
            return Err(CodecError::InvalidConfig(
                "max_payload_bytes must be at least 1".to_string(),
            ));
        }

        Ok(Self { max_payload_bytes })
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMARSHAL_MAX_PAYLOAD_BYTES` - Payload limit in bytes (default: 409600)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// An unparseable value falls back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_payload_bytes = lookup(MAX_PAYLOAD_BYTES_VAR)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_PAYLOAD_BYTES);

        Self::new(max_payload_bytes)
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

//! The shared JSON facility.
//!
//! Every structured codec does its textual JSON work through a [`JsonMapper`].
//! A mapper is built once from a [`MapperConfig`] and is read-only afterwards,
//! so it is shared behind an `Arc` by all codecs of a process.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::MapperConfig;
use crate::codec::{CodecError, Result};

/// Immutable, process-wide JSON reader/writer.
#[derive(Debug, Clone, Default)]
pub struct JsonMapper {
    config: MapperConfig,
}

impl JsonMapper {
    /// Creates a mapper with the given configuration.
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this mapper was built with.
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Serializes a typed value to compact JSON text.
    ///
    /// Goes through a tree so object keys come out sorted.
    pub fn write_value_as_string<T>(&self, value: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        let tree = self.value_to_tree(value)?;
        self.write_tree_as_string(&tree)
    }

    /// Serializes a JSON tree to compact JSON text.
    pub fn write_tree_as_string(&self, tree: &Value) -> Result<String> {
        let json =
            serde_json::to_string(tree).map_err(|e| CodecError::Serialization(e.to_string()))?;
        self.check_size(json)
    }

    /// Parses JSON text into a tree.
    pub fn read_tree(&self, json: &str) -> Result<Value> {
        serde_json::from_str(json).map_err(malformed)
    }

    /// Parses JSON text directly into a typed value.
    pub fn read_value<T>(&self, json: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(json).map_err(malformed)
    }

    /// Converts a tree into a typed value.
    pub fn tree_to_value<T>(&self, tree: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(tree).map_err(malformed)
    }

    /// Converts a typed value into a tree.
    pub fn value_to_tree<T>(&self, value: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(value).map_err(|e| CodecError::Serialization(e.to_string()))
    }

    /// Converts one typed value into another through a tree.
    pub fn convert_value<S, T>(&self, value: &S) -> Result<T>
    where
        S: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let tree = self.value_to_tree(value)?;
        self.tree_to_value(tree)
    }

    fn check_size(&self, json: String) -> Result<String> {
        let max = self.config.max_payload_bytes;
        if json.len() > max {
            tracing::debug!(size = json.len(), max, "Rejected oversized payload");
            return Err(CodecError::PayloadTooLarge {
                size: json.len(),
                max,
            });
        }
        Ok(json)
    }
}

fn malformed(err: serde_json::Error) -> CodecError {
    tracing::debug!(error = %err, "Rejected malformed JSON payload");
    CodecError::MalformedPayload(err.to_string())
}

use std::{fmt, marker::PhantomData, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::JsonMapper;
use crate::codec::{AttributeCodec, Result};

/// Stores any serde-serializable value as a JSON string.
///
/// The target type is fixed by the type parameter, so a concrete codec is
/// simply `JsonCodec<MyType>`.
pub struct JsonCodec<T> {
    mapper: Arc<JsonMapper>,
    _target: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    pub fn new(mapper: Arc<JsonMapper>) -> Self {
        Self {
            mapper,
            _target: PhantomData,
        }
    }

    /// The mapper this codec writes through.
    pub fn mapper(&self) -> &Arc<JsonMapper> {
        &self.mapper
    }
}

impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.mapper))
    }
}

impl<T> fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonCodec")
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> AttributeCodec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = T;
    type Stored = String;

    fn convert(&self, value: Option<&T>) -> Result<Option<String>> {
        value
            .map(|v| self.mapper.write_value_as_string(v))
            .transpose()
    }

    fn unconvert(&self, stored: Option<&String>) -> Result<Option<T>> {
        stored.map(|json| self.mapper.read_value(json)).transpose()
    }
}

/// Stores an open-ended JSON document whose shape is not known statically.
///
/// Trees are written verbatim, including `null` members, so a round trip is
/// structurally equal to the input.
#[derive(Debug, Clone)]
pub struct JsonNodeCodec {
    mapper: Arc<JsonMapper>,
}

impl JsonNodeCodec {
    pub fn new(mapper: Arc<JsonMapper>) -> Self {
        Self { mapper }
    }
}

impl AttributeCodec for JsonNodeCodec {
    type Value = Value;
    type Stored = String;

    fn convert(&self, value: Option<&Value>) -> Result<Option<String>> {
        value
            .map(|tree| self.mapper.write_tree_as_string(tree))
            .transpose()
    }

    fn unconvert(&self, stored: Option<&String>) -> Result<Option<Value>> {
        stored.map(|json| self.mapper.read_tree(json)).transpose()
    }
}

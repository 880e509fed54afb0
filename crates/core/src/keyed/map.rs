//! Maps keyed by domain identifiers, stored as a single JSON object.
//!
//! Map values are persisted through a reduced view ([`PersistedValue::Stored`])
//! that leaves out references back to the owning aggregate. After
//! unmarshalling, such references are unset; the caller re-attaches them.

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    marker::PhantomData,
    sync::Arc,
};

use serde::{de::DeserializeOwned, Serialize};

use crate::codec::{AttributeCodec, Result};
use crate::json::JsonMapper;

/// A map value with an explicit persisted view.
pub trait PersistedValue: Sized {
    /// What is actually written: every field except back-references.
    type Stored: Serialize + DeserializeOwned;

    fn to_stored(&self) -> Self::Stored;

    /// Rebuilds the value with back-references unset.
    fn from_stored(stored: Self::Stored) -> Self;
}

/// `HashMap<String, V>` ⇄ JSON object.
pub struct KeyedMapCodec<V> {
    mapper: Arc<JsonMapper>,
    _value: PhantomData<fn() -> V>,
}

impl<V> KeyedMapCodec<V> {
    pub fn new(mapper: Arc<JsonMapper>) -> Self {
        Self {
            mapper,
            _value: PhantomData,
        }
    }
}

impl<V> Clone for KeyedMapCodec<V> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.mapper))
    }
}

impl<V> fmt::Debug for KeyedMapCodec<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedMapCodec")
            .field("value", &std::any::type_name::<V>())
            .finish()
    }
}

impl<V: PersistedValue> AttributeCodec for KeyedMapCodec<V> {
    type Value = HashMap<String, V>;
    type Stored = String;

    fn convert(&self, value: Option<&HashMap<String, V>>) -> Result<Option<String>> {
        value
            .map(|map| {
                // Keys in sorted order so equal maps always produce equal text.
                let stored: BTreeMap<&str, V::Stored> = map
                    .iter()
                    .map(|(key, v)| (key.as_str(), v.to_stored()))
                    .collect();
                self.mapper.write_value_as_string(&stored)
            })
            .transpose()
    }

    fn unconvert(&self, stored: Option<&String>) -> Result<Option<HashMap<String, V>>> {
        stored
            .map(|json| {
                let stored: HashMap<String, V::Stored> = self.mapper.read_value(json)?;
                Ok(stored
                    .into_iter()
                    .map(|(key, v)| (key, V::from_stored(v)))
                    .collect())
            })
            .transpose()
    }
}

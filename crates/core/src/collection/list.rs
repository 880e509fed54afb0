use std::{fmt, marker::PhantomData, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};

use crate::codec::{AttributeCodec, Result};
use crate::json::JsonMapper;

/// Ordered sequence ⇄ JSON array. Element order is preserved exactly.
pub struct ListCodec<T> {
    mapper: Arc<JsonMapper>,
    _element: PhantomData<fn() -> T>,
}

/// List of plain strings.
pub type StringListCodec = ListCodec<String>;

impl<T> ListCodec<T> {
    pub fn new(mapper: Arc<JsonMapper>) -> Self {
        Self {
            mapper,
            _element: PhantomData,
        }
    }
}

impl<T> Clone for ListCodec<T> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.mapper))
    }
}

impl<T> fmt::Debug for ListCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListCodec")
            .field("element", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> AttributeCodec for ListCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = Vec<T>;
    type Stored = String;

    fn convert(&self, value: Option<&Vec<T>>) -> Result<Option<String>> {
        value
            .map(|items| self.mapper.write_value_as_string(items.as_slice()))
            .transpose()
    }

    fn unconvert(&self, stored: Option<&String>) -> Result<Option<Vec<T>>> {
        stored.map(|json| self.mapper.read_value(json)).transpose()
    }
}

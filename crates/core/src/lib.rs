//! dynamarshal_core - attribute codecs for a schemaless key-value store.
//!
//! Each codec converts one typed value to the string or number the store
//! keeps, and back. Codecs are stateless and `Send + Sync`; structured codecs
//! share one immutable [`json::JsonMapper`].

pub mod codec;
pub mod collection;
pub mod domain;
pub mod json;
pub mod keyed;
pub mod scalar;
pub mod serde_helpers;

pub use codec::{AttributeCodec, CodecError, Result};
pub use collection::{ListCodec, StringListCodec, StringSetCodec};
pub use json::{JsonCodec, JsonMapper, JsonNodeCodec, MapperConfig};
pub use keyed::{KeyedMapCodec, PersistedValue};
pub use scalar::{
    DateTimeCodec, EnumCodec, EpochMillisCodec, LocalDateCodec, LocalDateTimeCodec, NamedEnum,
};

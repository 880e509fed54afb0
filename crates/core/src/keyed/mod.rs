mod map;

pub use map::{KeyedMapCodec, PersistedValue};

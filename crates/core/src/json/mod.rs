mod codec;
mod config;
mod mapper;

pub use codec::{JsonCodec, JsonNodeCodec};
pub use config::{MapperConfig, DEFAULT_MAX_PAYLOAD_BYTES, MAX_PAYLOAD_BYTES_VAR};
pub use mapper::JsonMapper;

mod error;
mod traits;

pub use error::{CodecError, Result};
pub use traits::AttributeCodec;

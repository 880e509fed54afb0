mod list;
mod set;

pub use list::{ListCodec, StringListCodec};
pub use set::{canonical_order, StringSetCodec};

use super::Result;

/// A stateless converter between a typed value and its storable scalar.
///
/// `None` stands for an absent attribute. Implementations map `None` to
/// `None` in both directions unless documented otherwise, and must be safe to
/// share across threads: one instance per type is typically built at startup
/// and used for every marshalling call.
pub trait AttributeCodec: Send + Sync {
    /// The in-memory type.
    type Value;
    /// The scalar written to the store (`String` or `i64`).
    type Stored;

    /// Converts a value into its stored representation.
    fn convert(&self, value: Option<&Self::Value>) -> Result<Option<Self::Stored>>;

    /// Reconstructs a value from its stored representation.
    fn unconvert(&self, stored: Option<&Self::Stored>) -> Result<Option<Self::Value>>;
}

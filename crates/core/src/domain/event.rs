use serde::{Deserialize, Serialize};

use crate::keyed::PersistedValue;
use crate::scalar::NamedEnum;

/// How a custom activity event may be updated once it has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityEventUpdateType {
    /// Any new value replaces the current one.
    Mutable,
    /// Recorded once, never changed.
    Immutable,
    /// Only a later timestamp replaces the current one.
    FutureOnly,
}

impl NamedEnum for ActivityEventUpdateType {
    const TYPE_NAME: &'static str = "ActivityEventUpdateType";
    const VARIANTS: &'static [Self] = &[
        ActivityEventUpdateType::Mutable,
        ActivityEventUpdateType::Immutable,
        ActivityEventUpdateType::FutureOnly,
    ];

    fn name(&self) -> &'static str {
        match self {
            ActivityEventUpdateType::Mutable => "MUTABLE",
            ActivityEventUpdateType::Immutable => "IMMUTABLE",
            ActivityEventUpdateType::FutureOnly => "FUTURE_ONLY",
        }
    }
}

impl PersistedValue for ActivityEventUpdateType {
    type Stored = Self;

    fn to_stored(&self) -> Self {
        *self
    }

    fn from_stored(stored: Self) -> Self {
        stored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_name_matches_declared_name() {
        for variant in ActivityEventUpdateType::VARIANTS {
            let json = serde_json::to_value(variant).unwrap();
            assert_eq!(json, variant.name());
        }
    }
}

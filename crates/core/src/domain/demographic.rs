use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::keyed::PersistedValue;

/// Reference from a demographic entry back to the participant record that
/// owns it. Never persisted inside the entry itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicUserRef {
    pub id: String,
    /// `None` for app-level demographics.
    pub study_id: Option<String>,
    pub user_id: String,
}

/// A single reported value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DemographicValue(pub String);

impl DemographicValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One demographic category reported by a participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographic {
    pub id: String,
    /// Back-reference to the owner. Unset after unmarshalling.
    pub demographic_user: Option<DemographicUserRef>,
    pub multiple_select: bool,
    pub values: Vec<DemographicValue>,
    pub units: Option<String>,
}

impl Demographic {
    /// Creates a single-select demographic with no values.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            demographic_user: None,
            multiple_select: false,
            values: Vec::new(),
            units: None,
        }
    }

    pub fn with_multiple_select(mut self, multiple_select: bool) -> Self {
        self.multiple_select = multiple_select;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(DemographicValue::new(value));
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn with_user(mut self, user: DemographicUserRef) -> Self {
        self.demographic_user = Some(user);
        self
    }

    /// Re-attaches the owning participant record.
    pub fn attach(&mut self, user: DemographicUserRef) {
        self.demographic_user = Some(user);
    }
}

/// Re-attaches `user` to every entry of a category map.
pub fn attach_demographic_user(
    demographics: &mut HashMap<String, Demographic>,
    user: &DemographicUserRef,
) {
    for demographic in demographics.values_mut() {
        demographic.attach(user.clone());
    }
}

/// Persisted view of [`Demographic`]: everything but the back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDemographic {
    pub id: String,
    pub multiple_select: bool,
    #[serde(default)]
    pub values: Vec<DemographicValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl PersistedValue for Demographic {
    type Stored = StoredDemographic;

    fn to_stored(&self) -> StoredDemographic {
        StoredDemographic {
            id: self.id.clone(),
            multiple_select: self.multiple_select,
            values: self.values.clone(),
            units: self.units.clone(),
        }
    }

    fn from_stored(stored: StoredDemographic) -> Self {
        Self {
            id: stored.id,
            demographic_user: None,
            multiple_select: stored.multiple_select,
            values: stored.values,
            units: stored.units,
        }
    }
}

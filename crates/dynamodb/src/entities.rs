use std::collections::{HashMap, HashSet};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use dynamarshal_core::domain::{
    ActivityEventUpdateType, Demographic, DemographicUserRef, ExportedRecordInfo, StudyPhase,
};
use serde_json::Value;

/// A study and its configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Study {
    pub identifier: String,
    pub name: String,
    pub phase: StudyPhase,
    pub data_groups: HashSet<String>,
    /// Custom event name → update policy.
    pub custom_events: HashMap<String, ActivityEventUpdateType>,
    /// Free-form document supplied by study designers.
    pub client_data: Option<Value>,
    pub created_on: DateTime<FixedOffset>,
    /// Stored as epoch millis; always UTC.
    pub modified_on: DateTime<Utc>,
}

/// A participant's demographics within one study (or app-wide).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemographicUser {
    pub id: String,
    pub study_id: Option<String>,
    pub user_id: String,
    /// Category → demographic. Every entry points back at this record.
    pub demographics: HashMap<String, Demographic>,
}

impl DemographicUser {
    /// The back-reference carried by each owned demographic.
    pub fn user_ref(&self) -> DemographicUserRef {
        DemographicUserRef {
            id: self.id.clone(),
            study_id: self.study_id.clone(),
            user_id: self.user_id.clone(),
        }
    }

    /// Inserts a demographic, pointing it at this record.
    pub fn add_demographic(&mut self, category: impl Into<String>, mut demographic: Demographic) {
        demographic.attach(self.user_ref());
        self.demographics.insert(category.into(), demographic);
    }
}

/// An uploaded health data record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthDataRecord {
    pub id: String,
    pub health_code: String,
    pub upload_date: NaiveDate,
    /// Local wall-clock time the activity was scheduled for, if any.
    pub scheduled_on: Option<NaiveDateTime>,
    /// Schema ids in the order the uploader listed them.
    pub schema_ids: Vec<String>,
    /// Study id → export record.
    pub exported_records: HashMap<String, ExportedRecordInfo>,
}

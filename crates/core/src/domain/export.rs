use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::keyed::PersistedValue;

/// Where a health data record was exported for one study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedRecordInfo {
    pub parent_project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_helpers::canonical_timestamp"
    )]
    pub exported_on: Option<DateTime<FixedOffset>>,
}

impl ExportedRecordInfo {
    pub fn new(parent_project_id: impl Into<String>) -> Self {
        Self {
            parent_project_id: parent_project_id.into(),
            raw_folder_id: None,
            file_entity_id: None,
            s3_bucket: None,
            s3_key: None,
            exported_on: None,
        }
    }

    pub fn with_file_entity(
        mut self,
        raw_folder_id: impl Into<String>,
        file_entity_id: impl Into<String>,
    ) -> Self {
        self.raw_folder_id = Some(raw_folder_id.into());
        self.file_entity_id = Some(file_entity_id.into());
        self
    }

    pub fn with_s3_location(mut self, bucket: impl Into<String>, key: impl Into<String>) -> Self {
        self.s3_bucket = Some(bucket.into());
        self.s3_key = Some(key.into());
        self
    }

    pub fn with_exported_on(mut self, exported_on: DateTime<FixedOffset>) -> Self {
        self.exported_on = Some(exported_on);
        self
    }
}

impl PersistedValue for ExportedRecordInfo {
    type Stored = Self;

    fn to_stored(&self) -> Self {
        self.clone()
    }

    fn from_stored(stored: Self) -> Self {
        stored
    }
}

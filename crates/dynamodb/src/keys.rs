//! DynamoDB key generation functions.
//!
//! Pure functions for generating partition and sort keys following the single-table design.

use chrono::NaiveDate;

// ============================================================================
// Key prefixes
// ============================================================================

pub const STUDY_PREFIX: &str = "STUDY#";
pub const USER_PREFIX: &str = "USER#";
pub const DEMOGRAPHICS_PREFIX: &str = "DEMOGRAPHICS#";
pub const HEALTH_CODE_PREFIX: &str = "HEALTH_CODE#";
pub const RECORD_PREFIX: &str = "RECORD#";

/// Scope used for demographics that are not tied to a study.
pub const APP_SCOPE: &str = "APP";

// ============================================================================
// Study keys
// ============================================================================

/// Pattern: `STUDY#<identifier>`
pub fn study_pk(identifier: &str) -> String {
    format!("{STUDY_PREFIX}{identifier}")
}

/// Pattern: `STUDY#<identifier>` (same as PK for single-item queries)
pub fn study_sk(identifier: &str) -> String {
    format!("{STUDY_PREFIX}{identifier}")
}

// ============================================================================
// Demographic user keys
// ============================================================================

/// Pattern: `USER#<user_id>`
pub fn demographic_user_pk(user_id: &str) -> String {
    format!("{USER_PREFIX}{user_id}")
}

/// Pattern: `DEMOGRAPHICS#<study_id>` or `DEMOGRAPHICS#APP`
pub fn demographic_user_sk(study_id: Option<&str>) -> String {
    format!("{DEMOGRAPHICS_PREFIX}{}", study_id.unwrap_or(APP_SCOPE))
}

// ============================================================================
// Health data record keys
// ============================================================================

/// Pattern: `HEALTH_CODE#<health_code>`
pub fn record_pk(health_code: &str) -> String {
    format!("{HEALTH_CODE_PREFIX}{health_code}")
}

/// Pattern: `RECORD#<upload_date>#<record_id>`
///
/// The date is in ISO 8601 format (YYYY-MM-DD) for lexicographic sorting.
pub fn record_sk(upload_date: NaiveDate, record_id: &str) -> String {
    format!("{RECORD_PREFIX}{}#{record_id}", upload_date.format("%Y-%m-%d"))
}

//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and entities.
//! Typed attributes go through the codecs in [`AttributeCodecs`].

use aws_sdk_dynamodb::types::AttributeValue;
use dynamarshal_core::domain::attach_demographic_user;

use crate::attributes::{
    get_attribute, get_optional_string, get_required_attribute, get_string, put_attribute, Item,
};
use crate::codecs::AttributeCodecs;
use crate::entities::{DemographicUser, HealthDataRecord, Study};
use crate::error::Result;
use crate::keys;

// ============================================================================
// Entity type constants
// ============================================================================

pub const ENTITY_TYPE_STUDY: &str = "STUDY";
pub const ENTITY_TYPE_DEMOGRAPHIC_USER: &str = "DEMOGRAPHIC_USER";
pub const ENTITY_TYPE_HEALTH_DATA_RECORD: &str = "HEALTH_DATA_RECORD";

// ============================================================================
// Study conversions
// ============================================================================

/// Convert a Study to DynamoDB item.
pub fn study_to_item(codecs: &AttributeCodecs, study: &Study) -> Result<Item> {
    let mut item = Item::new();

    // Keys
    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::study_pk(&study.identifier)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::study_sk(&study.identifier)),
    );

    // Entity type
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_STUDY.to_string()),
    );

    // Data
    item.insert(
        "identifier".to_string(),
        AttributeValue::S(study.identifier.clone()),
    );
    item.insert("name".to_string(), AttributeValue::S(study.name.clone()));
    put_attribute(&mut item, "phase", &codecs.study_phase, Some(&study.phase))?;
    put_attribute(
        &mut item,
        "dataGroups",
        &codecs.string_set,
        Some(&study.data_groups),
    )?;
    put_attribute(
        &mut item,
        "customEvents",
        &codecs.event_update_types,
        Some(&study.custom_events),
    )?;
    put_attribute(
        &mut item,
        "clientData",
        &codecs.client_data,
        study.client_data.as_ref(),
    )?;
    put_attribute(
        &mut item,
        "createdOn",
        &codecs.timestamp,
        Some(&study.created_on),
    )?;
    put_attribute(
        &mut item,
        "modifiedOn",
        &codecs.epoch_millis,
        Some(&study.modified_on),
    )?;

    Ok(item)
}

/// Convert a DynamoDB item to Study.
pub fn item_to_study(codecs: &AttributeCodecs, item: &Item) -> Result<Study> {
    Ok(Study {
        identifier: get_string(item, "identifier")?,
        name: get_string(item, "name")?,
        phase: get_required_attribute(item, "phase", &codecs.study_phase)?,
        data_groups: get_attribute(item, "dataGroups", &codecs.string_set)?.unwrap_or_default(),
        custom_events: get_attribute(item, "customEvents", &codecs.event_update_types)?
            .unwrap_or_default(),
        client_data: get_attribute(item, "clientData", &codecs.client_data)?,
        created_on: get_required_attribute(item, "createdOn", &codecs.timestamp)?,
        modified_on: get_required_attribute(item, "modifiedOn", &codecs.epoch_millis)?,
    })
}

// ============================================================================
// Demographic user conversions
// ============================================================================

/// Convert a DemographicUser to DynamoDB item.
///
/// The demographics map is written without its back-references.
pub fn demographic_user_to_item(codecs: &AttributeCodecs, user: &DemographicUser) -> Result<Item> {
    let mut item = Item::new();

    // Keys
    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::demographic_user_pk(&user.user_id)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::demographic_user_sk(user.study_id.as_deref())),
    );

    // Entity type
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_DEMOGRAPHIC_USER.to_string()),
    );

    // Data
    item.insert("id".to_string(), AttributeValue::S(user.id.clone()));
    if let Some(study_id) = &user.study_id {
        item.insert("studyId".to_string(), AttributeValue::S(study_id.clone()));
    }
    item.insert("userId".to_string(), AttributeValue::S(user.user_id.clone()));
    put_attribute(
        &mut item,
        "demographics",
        &codecs.demographics,
        Some(&user.demographics),
    )?;

    Ok(item)
}

/// Convert a DynamoDB item to DemographicUser.
///
/// Re-attaches the owning record to every demographic after unmarshalling.
pub fn item_to_demographic_user(codecs: &AttributeCodecs, item: &Item) -> Result<DemographicUser> {
    let mut user = DemographicUser {
        id: get_string(item, "id")?,
        study_id: get_optional_string(item, "studyId"),
        user_id: get_string(item, "userId")?,
        demographics: get_attribute(item, "demographics", &codecs.demographics)?
            .unwrap_or_default(),
    };

    let user_ref = user.user_ref();
    attach_demographic_user(&mut user.demographics, &user_ref);

    Ok(user)
}

// ============================================================================
// Health data record conversions
// ============================================================================

/// Convert a HealthDataRecord to DynamoDB item.
pub fn record_to_item(codecs: &AttributeCodecs, record: &HealthDataRecord) -> Result<Item> {
    let mut item = Item::new();

    // Keys
    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::record_pk(&record.health_code)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::record_sk(record.upload_date, &record.id)),
    );

    // Entity type
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_HEALTH_DATA_RECORD.to_string()),
    );

    // Data
    item.insert("id".to_string(), AttributeValue::S(record.id.clone()));
    item.insert(
        "healthCode".to_string(),
        AttributeValue::S(record.health_code.clone()),
    );
    put_attribute(
        &mut item,
        "uploadDate",
        &codecs.local_date,
        Some(&record.upload_date),
    )?;
    put_attribute(
        &mut item,
        "scheduledOn",
        &codecs.local_date_time,
        record.scheduled_on.as_ref(),
    )?;
    put_attribute(
        &mut item,
        "schemaIds",
        &codecs.string_list,
        Some(&record.schema_ids),
    )?;
    if !record.exported_records.is_empty() {
        put_attribute(
            &mut item,
            "exportedRecords",
            &codecs.exported_records,
            Some(&record.exported_records),
        )?;
    }

    Ok(item)
}

/// Convert a DynamoDB item to HealthDataRecord.
pub fn item_to_record(codecs: &AttributeCodecs, item: &Item) -> Result<HealthDataRecord> {
    Ok(HealthDataRecord {
        id: get_string(item, "id")?,
        health_code: get_string(item, "healthCode")?,
        upload_date: get_required_attribute(item, "uploadDate", &codecs.local_date)?,
        scheduled_on: get_attribute(item, "scheduledOn", &codecs.local_date_time)?,
        schema_ids: get_attribute(item, "schemaIds", &codecs.string_list)?.unwrap_or_default(),
        exported_records: get_attribute(item, "exportedRecords", &codecs.exported_records)?
            .unwrap_or_default(),
    })
}

//! Placing codec output into DynamoDB items and reading it back.
//!
//! Pure functions over `HashMap<String, AttributeValue>`; no DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use dynamarshal_core::AttributeCodec;

use crate::error::{RepositoryError, Result};

/// A DynamoDB item.
pub type Item = HashMap<String, AttributeValue>;

/// A codec output type that maps onto a single DynamoDB attribute.
pub trait StoredScalar: Sized {
    fn into_attribute(self) -> AttributeValue;

    /// Returns `None` if the attribute has a different type.
    fn from_attribute(value: &AttributeValue) -> Option<Self>;
}

impl StoredScalar for String {
    fn into_attribute(self) -> AttributeValue {
        AttributeValue::S(self)
    }

    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        value.as_s().ok().cloned()
    }
}

impl StoredScalar for i64 {
    fn into_attribute(self) -> AttributeValue {
        AttributeValue::N(self.to_string())
    }

    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        value.as_n().ok().and_then(|n| n.parse().ok())
    }
}

/// Converts `value` and stores it under `name`.
///
/// A `None` conversion result leaves the attribute absent.
pub fn put_attribute<C>(
    item: &mut Item,
    name: &str,
    codec: &C,
    value: Option<&C::Value>,
) -> Result<()>
where
    C: AttributeCodec,
    C::Stored: StoredScalar,
{
    let stored = codec.convert(value).map_err(|e| {
        tracing::debug!(field = name, error = %e, "Failed to convert attribute");
        RepositoryError::for_field(name, e)
    })?;

    match stored {
        Some(stored) => {
            tracing::trace!(field = name, "Converted attribute");
            item.insert(name.to_string(), stored.into_attribute());
        }
        None => {
            item.remove(name);
        }
    }
    Ok(())
}

/// Reads and unconverts the attribute `name`.
///
/// A missing attribute (or an explicit DynamoDB `NULL`) yields `Ok(None)`.
pub fn get_attribute<C>(item: &Item, name: &str, codec: &C) -> Result<Option<C::Value>>
where
    C: AttributeCodec,
    C::Stored: StoredScalar,
{
    let stored = match item.get(name) {
        None | Some(AttributeValue::Null(_)) => None,
        Some(attribute) => {
            let stored = <C::Stored as StoredScalar>::from_attribute(attribute).ok_or_else(|| {
                RepositoryError::InvalidData(format!("Unexpected attribute type for field: {name}"))
            })?;
            Some(stored)
        }
    };

    codec.unconvert(stored.as_ref()).map_err(|e| {
        tracing::debug!(field = name, error = %e, "Failed to unconvert attribute");
        RepositoryError::for_field(name, e)
    })
}

/// Like [`get_attribute`], but the attribute must be present.
pub fn get_required_attribute<C>(item: &Item, name: &str, codec: &C) -> Result<C::Value>
where
    C: AttributeCodec,
    C::Stored: StoredScalar,
{
    get_attribute(item, name, codec)?
        .ok_or_else(|| RepositoryError::MissingField(name.to_string()))
}

/// Get a required string attribute.
pub fn get_string(item: &Item, key: &str) -> Result<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::MissingField(key.to_string()))
}

/// Get an optional string attribute.
pub fn get_optional_string(item: &Item, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use dynamarshal_core::{DateTimeCodec, EpochMillisCodec, StringSetCodec};
    use std::{collections::HashSet, sync::Arc};

    #[test]
    fn test_string_codec_writes_s_attribute() {
        let mut item = Item::new();
        let created_on = DateTime::parse_from_rfc3339("2014-12-25T10:12:37.022-08:00").unwrap();

        put_attribute(&mut item, "createdOn", &DateTimeCodec, Some(&created_on)).unwrap();

        assert_eq!(
            item.get("createdOn").unwrap().as_s().unwrap(),
            "2014-12-25T10:12:37.022-08:00"
        );
        assert_eq!(
            get_attribute(&item, "createdOn", &DateTimeCodec).unwrap(),
            Some(created_on)
        );
    }

    #[test]
    fn test_epoch_codec_writes_n_attribute() {
        let mut item = Item::new();
        let modified_on = DateTime::<Utc>::from_timestamp_millis(1_419_531_157_022).unwrap();

        put_attribute(&mut item, "modifiedOn", &EpochMillisCodec, Some(&modified_on)).unwrap();

        assert_eq!(
            item.get("modifiedOn").unwrap().as_n().unwrap(),
            "1419531157022"
        );
        assert_eq!(
            get_required_attribute(&item, "modifiedOn", &EpochMillisCodec).unwrap(),
            modified_on
        );
    }

    #[test]
    fn test_none_leaves_attribute_absent() {
        let mut item = Item::new();
        item.insert("createdOn".to_string(), AttributeValue::S("stale".to_string()));

        put_attribute(&mut item, "createdOn", &DateTimeCodec, None).unwrap();

        assert!(!item.contains_key("createdOn"));
        assert_eq!(get_attribute(&item, "createdOn", &DateTimeCodec).unwrap(), None);
    }

    #[test]
    fn test_null_attribute_reads_as_none() {
        let mut item = Item::new();
        item.insert("createdOn".to_string(), AttributeValue::Null(true));
        assert_eq!(get_attribute(&item, "createdOn", &DateTimeCodec).unwrap(), None);
    }

    #[test]
    fn test_empty_set_is_stored() {
        let codec = StringSetCodec::new(Arc::new(Default::default()));
        let mut item = Item::new();

        put_attribute(&mut item, "dataGroups", &codec, Some(&HashSet::new())).unwrap();

        assert_eq!(item.get("dataGroups").unwrap().as_s().unwrap(), "[]");
    }

    #[test]
    fn test_wrong_attribute_type() {
        let mut item = Item::new();
        item.insert("modifiedOn".to_string(), AttributeValue::S("yesterday".to_string()));

        let result = get_attribute(&item, "modifiedOn", &EpochMillisCodec);
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn test_malformed_value_is_invalid_data() {
        let mut item = Item::new();
        item.insert("createdOn".to_string(), AttributeValue::S("not a date".to_string()));

        let result = get_attribute(&item, "createdOn", &DateTimeCodec);
        assert!(matches!(
            result,
            Err(RepositoryError::InvalidData(msg)) if msg.starts_with("createdOn: ")
        ));
    }

    #[test]
    fn test_required_attribute_missing() {
        let result = get_required_attribute(&Item::new(), "createdOn", &DateTimeCodec);
        assert_eq!(
            result,
            Err(RepositoryError::MissingField("createdOn".to_string()))
        );
    }

    #[test]
    fn test_get_optional_string() {
        let mut item = Item::new();
        assert!(get_optional_string(&item, "missing").is_none());

        item.insert(
            "present".to_string(),
            AttributeValue::S("value".to_string()),
        );
        assert_eq!(
            get_optional_string(&item, "present"),
            Some("value".to_string())
        );
        assert!(get_string(&item, "missing").is_err());
    }
}

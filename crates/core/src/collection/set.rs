use std::{collections::HashSet, sync::Arc};

use crate::codec::{AttributeCodec, Result};
use crate::json::JsonMapper;

/// Unordered string set ⇄ JSON array in ascending lexicographic order.
///
/// The stored array is always sorted, whatever order the set iterates in, so
/// two writers holding equal sets produce identical bytes. An empty set is
/// written as `[]`, never as an absent attribute.
#[derive(Debug, Clone)]
pub struct StringSetCodec {
    mapper: Arc<JsonMapper>,
}

impl StringSetCodec {
    pub fn new(mapper: Arc<JsonMapper>) -> Self {
        Self { mapper }
    }
}

/// Returns the set's elements in canonical (ascending byte-wise) order.
pub fn canonical_order(set: &HashSet<String>) -> Vec<&str> {
    let mut items: Vec<&str> = set.iter().map(String::as_str).collect();
    items.sort_unstable();
    items
}

impl AttributeCodec for StringSetCodec {
    type Value = HashSet<String>;
    type Stored = String;

    fn convert(&self, value: Option<&HashSet<String>>) -> Result<Option<String>> {
        value
            .map(|set| self.mapper.write_value_as_string(&canonical_order(set)))
            .transpose()
    }

    fn unconvert(&self, stored: Option<&String>) -> Result<Option<HashSet<String>>> {
        stored
            .map(|json| self.mapper.read_value::<Vec<String>>(json))
            .transpose()
            .map(|items| items.map(|items| items.into_iter().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecError;

    fn codec() -> StringSetCodec {
        StringSetCodec::new(Arc::new(JsonMapper::default()))
    }

    fn set_of(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_output_is_sorted() {
        let stored = codec()
            .convert(Some(&set_of(&["Paris", "Brussels", "London"])))
            .unwrap();
        assert_eq!(stored.as_deref(), Some(r#"["Brussels","London","Paris"]"#));
    }

    #[test]
    fn test_output_independent_of_insertion_order() {
        let codec = codec();
        let first = codec
            .convert(Some(&set_of(&["sdk-int-1", "group_b", "Group_A", "a"])))
            .unwrap();
        let second = codec
            .convert(Some(&set_of(&["a", "Group_A", "group_b", "sdk-int-1"])))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.as_deref(),
            Some(r#"["Group_A","a","group_b","sdk-int-1"]"#)
        );
    }

    #[test]
    fn test_round_trip_content_equality() {
        let codec = codec();
        let set = set_of(&["Paris", "Brussels", "London"]);
        let stored = codec.convert(Some(&set)).unwrap();
        assert_eq!(codec.unconvert(stored.as_ref()).unwrap(), Some(set));
    }

    #[test]
    fn test_empty_set_is_empty_array() {
        let codec = codec();
        let stored = codec.convert(Some(&HashSet::new())).unwrap();
        assert_eq!(stored.as_deref(), Some("[]"));
        assert_eq!(
            codec.unconvert(stored.as_ref()).unwrap(),
            Some(HashSet::new())
        );
    }

    #[test]
    fn test_null_set_is_null() {
        assert_eq!(codec().convert(None).unwrap(), None);
        assert_eq!(codec().unconvert(None).unwrap(), None);
    }

    #[test]
    fn test_duplicates_collapse() {
        let parsed = codec()
            .unconvert(Some(&r#"["a","b","a"]"#.to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(parsed, set_of(&["a", "b"]));
    }

    #[test]
    fn test_non_string_elements_are_malformed() {
        let result = codec().unconvert(Some(&"[1, 2]".to_string()));
        assert!(matches!(result, Err(CodecError::MalformedPayload(_))));
    }
}

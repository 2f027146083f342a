//! Pure derivation helpers for extending base settings
//!
//! Everything here takes a base value by reference and returns a fresh
//! value; bases are never mutated. There is deliberately no generic
//! deep-merge: rule option schemas are heterogeneous, and a wrong deep-merge
//! would silently produce a shape the consuming tool misinterprets. Call
//! sites that need to re-derive a nested field do an explicit per-field
//! copy instead.

use serde_json::{Map, Value};

use crate::error::RulestackError;
use crate::result::Result;

/// Concatenate `extras` onto `base`, preserving both orders
///
/// Duplicates are kept; whether a list needs set semantics is rule-specific,
/// so call sites that want dedup use [`list_append_unique`].
pub fn list_append<T: Clone>(base: &[T], extras: &[T]) -> Vec<T> {
    let mut appended = Vec::with_capacity(base.len() + extras.len());
    appended.extend_from_slice(base);
    appended.extend_from_slice(extras);
    appended
}

/// Concatenate `extras` onto `base`, skipping extras already present
pub fn list_append_unique<T: Clone + PartialEq>(base: &[T], extras: &[T]) -> Vec<T> {
    let mut appended = base.to_vec();
    for extra in extras {
        if !appended.contains(extra) {
            appended.push(extra.clone());
        }
    }
    appended
}

/// Shallow-merge `overrides` onto a copy of `base`
///
/// Top-level keys from `overrides` win; identically named nested structures
/// are replaced wholesale, never merged recursively.
pub fn payload_patch(base: &Map<String, Value>, overrides: Map<String, Value>) -> Map<String, Value> {
    let mut patched = base.clone();
    for (key, value) in overrides {
        patched.insert(key, value);
    }
    patched
}

/// Read a value as a JSON object, failing at build time otherwise
pub fn as_object<'a>(context: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| RulestackError::derivation(context, "expected a JSON object"))
}

/// Read a value as a list of strings, failing at build time otherwise
pub fn as_string_list(context: &str, value: &Value) -> Result<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| RulestackError::derivation(context, "expected an array of strings"))?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                RulestackError::derivation(context, format!("expected a string, got {item}"))
            })
        })
        .collect()
}

/// Read the option at `index` of a payload as a JSON object
pub fn object_option<'a>(
    context: &str,
    options: &'a [Value],
    index: usize,
) -> Result<&'a Map<String, Value>> {
    let value = options.get(index).ok_or_else(|| {
        RulestackError::derivation(context, format!("missing option at index {index}"))
    })?;
    value.as_object().ok_or_else(|| {
        RulestackError::derivation(context, format!("expected an object at option index {index}"))
    })
}

/// Lift a list of strings back into a JSON array value
pub fn string_list(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_append_preserves_order() {
        let appended = list_append(&["a", "b"], &["c"]);
        assert_eq!(appended, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_list_append_empty_extras_is_noop() {
        let base = vec!["a".to_string(), "b".to_string()];
        let appended = list_append(&base, &[]);
        assert_eq!(appended, base);
        let appended = list_append(&appended, &[]);
        assert_eq!(appended, base);
    }

    #[test]
    fn test_list_append_two_steps_equals_one() {
        let base = vec![1, 2];
        let stepwise = list_append(&list_append(&base, &[3, 4]), &[5]);
        let at_once = list_append(&base, &[3, 4, 5]);
        assert_eq!(stepwise, at_once);
    }

    #[test]
    fn test_list_append_keeps_duplicates() {
        assert_eq!(list_append(&["a"], &["a"]), vec!["a", "a"]);
        assert_eq!(list_append_unique(&["a"], &["a", "b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_payload_patch_replaces_nested_wholesale() {
        let base = json!({
            "arrays": "always-multiline",
            "nested": {"keep": true, "drop": true}
        });
        let overrides = json!({"nested": {"replaced": true}, "enums": "always-multiline"});
        let patched = payload_patch(
            base.as_object().unwrap(),
            overrides.as_object().unwrap().clone(),
        );
        assert_eq!(patched["arrays"], json!("always-multiline"));
        assert_eq!(patched["enums"], json!("always-multiline"));
        // nested object replaced wholesale, not merged
        assert_eq!(patched["nested"], json!({"replaced": true}));
    }

    #[test]
    fn test_payload_patch_does_not_alias_base() {
        let base = json!({"list": ["x"]});
        let base_map = base.as_object().unwrap();
        let mut patched = payload_patch(base_map, Map::new());
        patched.insert("list".to_string(), json!(["x", "y"]));
        assert_eq!(base_map["list"], json!(["x"]));
    }

    #[test]
    fn test_shape_readers_fail_at_build_time() {
        assert!(as_object("ctx", &json!("not an object")).is_err());
        assert!(as_string_list("ctx", &json!([1, 2])).is_err());
        assert!(object_option("ctx", &[json!("single")], 1).is_err());
        assert!(object_option("ctx", &[json!("single")], 0).is_err());
    }

    #[test]
    fn test_string_list_round_trip() {
        let items = vec![".js".to_string(), ".ts".to_string()];
        let value = string_list(&items);
        assert_eq!(as_string_list("ctx", &value).unwrap(), items);
    }
}

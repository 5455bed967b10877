//! Value helpers: blank detection and dotted-path nesting.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Returns whether a value counts as "not provided".
///
/// `Null` is the unset sentinel and the empty string is blank. Numeric `0`
/// and `false` are provided values and do not count as blank, so required
/// numeric and boolean fields accept them.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Expands a flat map with dotted keys into a nested JSON object.
///
/// `{"ticketQuantities.VIP": 2}` becomes `{"ticketQuantities": {"VIP": 2}}`.
/// Keys are inserted in sorted order; a scalar sitting at an intermediate
/// path is replaced by an object.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use samf_form_core::nest;
/// use serde_json::json;
///
/// let mut flat = HashMap::new();
/// flat.insert("name".to_string(), json!("Ada"));
/// flat.insert("tickets.vip".to_string(), json!(2));
/// flat.insert("tickets.standard".to_string(), json!(0));
///
/// assert_eq!(
///     nest(&flat),
///     json!({"name": "Ada", "tickets": {"vip": 2, "standard": 0}})
/// );
/// ```
#[must_use]
pub fn nest(flat: &HashMap<String, Value>) -> Value {
    let mut entries: Vec<(&str, &Value)> = flat
        .iter()
        .map(|(key, value)| (key.as_str(), value))
        .collect();
    entries.sort_by_key(|(key, _)| *key);

    let mut root = Map::new();
    for (key, value) in entries {
        insert_path(&mut root, key, value.clone());
    }
    Value::Object(root)
}

fn insert_path(object: &mut Map<String, Value>, path: &str, value: Value) {
    if let Some((head, rest)) = path.split_once('.') {
        let slot = object
            .entry(head.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        if let Value::Object(child) = slot {
            insert_path(child, rest, value);
        }
    } else {
        object.insert(path.to_string(), value);
    }
}

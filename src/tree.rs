//! Helpers for digging values out of loosely structured JSON exports.
//!
//! Export documents nest the same field at different depths from one record
//! to the next. These helpers find a field without knowing its exact path.

use std::collections::VecDeque;

use serde_json::Value;

/// A flattened JSON tree: `(dash-joined path, scalar)` pairs in traversal order.
pub type Denested = Vec<(String, Value)>;

/// Breadth-first search for the first object holding `key`.
///
/// Returns that key's value, or `fallback` when the key is absent or its
/// value is empty (`null`, `""`, `[]` or `{}`).
///
/// ```rust
/// use ddpack::tree::find_first_bfs;
/// use serde_json::json;
///
/// let doc = json!({"data": {"title": "deep"}, "items": [{"title": "nested"}]});
/// assert_eq!(find_first_bfs(&doc, "title", &json!("")), &json!("deep"));
/// assert_eq!(find_first_bfs(&doc, "missing", &json!("n/a")), &json!("n/a"));
/// ```
pub fn find_first_bfs<'v>(value: &'v Value, key: &str, fallback: &'v Value) -> &'v Value {
    let mut queue = VecDeque::from([value]);

    while let Some(current) = queue.pop_front() {
        match current {
            Value::Object(map) => {
                if let Some(found) = map.get(key) {
                    return if is_empty(found) { fallback } else { found };
                }
                queue.extend(map.values());
            }
            Value::Array(items) => queue.extend(items),
            _ => {}
        }
    }

    fallback
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Flattens a JSON tree into path/scalar pairs.
///
/// Object keys and array indices are joined with `-`; empty containers
/// contribute nothing. A scalar root yields a single pair with an empty path.
///
/// ```rust
/// use ddpack::tree::denest;
/// use serde_json::json;
///
/// let flat = denest(&json!({"a": {"b": [{"c": 1}]}}));
/// assert_eq!(flat, vec![("a-b-0-c".to_string(), json!(1))]);
/// ```
pub fn denest(value: &Value) -> Denested {
    let mut out = Vec::new();
    denest_into(value, String::new(), &mut out);
    out
}

fn denest_into(value: &Value, path: String, out: &mut Denested) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                denest_into(v, join(&path, k), out);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                denest_into(v, join(&path, &i.to_string()), out);
            }
        }
        scalar => out.push((path, scalar.clone())),
    }
}

fn join(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{path}-{segment}")
    }
}

/// Value of the shallowest key containing `needle`, as text.
///
/// Depth is the number of `-` separators in the key; among equally shallow
/// keys the first one wins. Returns `""` when nothing matches. Strings are
/// returned as-is, `null` as `""`, other scalars in their JSON form.
pub fn find_least_nested(denested: &[(String, Value)], needle: &str) -> String {
    denested
        .iter()
        .filter(|(key, _)| key.contains(needle))
        .min_by_key(|(key, _)| key.matches('-').count())
        .map(|(_, value)| scalar_text(value))
        .unwrap_or_default()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

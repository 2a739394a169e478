//! Nested token objects flattened into dash-joined paths.

use serde_json::{Map, Value};

/// Reserved key whose value belongs to the parent path itself.
///
/// `{ "surface": { "DEFAULT": "#fff", "muted": "#eee" } }` names two
/// tokens, `surface` and `surface-muted`.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Joins a token key onto a path.
///
/// `DEFAULT` collapses to the path itself; an empty path yields the key.
///
/// # Example
///
/// ```rust
/// use snowball::tokens::join_path;
///
/// assert_eq!(join_path("surface", "muted"), "surface-muted");
/// assert_eq!(join_path("surface", "DEFAULT"), "surface");
/// assert_eq!(join_path("", "ink"), "ink");
/// ```
pub fn join_path(prefix: &str, key: &str) -> String {
    if key == DEFAULT_KEY {
        prefix.to_string()
    } else if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}-{}", prefix, key)
    }
}

/// Flattens a nested token object into a single-level map.
///
/// Walks depth first in the object's own key order. Objects are descended
/// into; every other value (strings, numbers, booleans, null and arrays) is
/// a leaf and is cloned into the result under its joined path. The prefix
/// is applied at every level, so nested leaves carry it too.
///
/// Later paths overwrite earlier ones when two keys join to the same path
/// (`{"a-b": 1, "a": {"b": 2}}`); generated names are assumed unique.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use snowball::tokens::flatten;
///
/// let surface = json!({ "DEFAULT": "#fff", "muted": "#eee", "raised": { "hover": "#ddd" } });
/// let flat = flatten(surface.as_object().unwrap(), "surface");
///
/// let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["surface", "surface-muted", "surface-raised-hover"]);
/// ```
pub fn flatten(object: &Map<String, Value>, prefix: &str) -> Map<String, Value> {
    let mut result = Map::new();
    flatten_into(object, prefix, &mut result);
    result
}

fn flatten_into(object: &Map<String, Value>, prefix: &str, out: &mut Map<String, Value>) {
    for (key, value) in object {
        let path = join_path(prefix, key);
        match value {
            Value::Object(nested) => flatten_into(nested, &path, out),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

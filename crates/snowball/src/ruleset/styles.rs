//! Style variants merged over a shared base.

use serde_json::{Map, Value};

use crate::error::BuildError;
use crate::host::Declarations;
use crate::tokens::DEFAULT_KEY;

/// Reserved style variant holding the shared base.
pub const BASE_KEY: &str = "_";

/// Selector for style variant `variant` of `group`.
pub fn component_selector(group: &str, variant: &str) -> String {
    if variant == DEFAULT_KEY {
        format!(".sb-{}", group)
    } else {
        format!(".sb-{}-{}", group, variant)
    }
}

/// Merges `base` underneath `declarations`.
///
/// Keys already in `declarations` win; nested objects present on both sides
/// merge recursively; everything else from `base` fills the gaps.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use snowball::ruleset::merge_under;
///
/// let mut hover = json!({ "color": "blue" }).as_object().cloned().unwrap();
/// let base = json!({ "color": "red", "padding": "1rem" }).as_object().cloned().unwrap();
/// merge_under(&mut hover, &base);
///
/// assert_eq!(hover["color"], "blue");
/// assert_eq!(hover["padding"], "1rem");
/// ```
pub fn merge_under(declarations: &mut Map<String, Value>, base: &Map<String, Value>) {
    for (key, base_value) in base {
        match (declarations.get_mut(key), base_value) {
            (None, _) => {
                declarations.insert(key.clone(), base_value.clone());
            }
            (Some(Value::Object(existing)), Value::Object(nested)) => merge_under(existing, nested),
            (Some(_), _) => {}
        }
    }
}

/// Component rules for one snowball's `styles` field.
///
/// The `_` base is read from the configuration but never emitted; the
/// configuration itself is left untouched. Every faulty variant is
/// reported.
pub fn style_components(
    group: &str,
    styles: &Map<String, Value>,
) -> Result<Declarations, Vec<BuildError>> {
    let invalid = |variant: &str| BuildError::InvalidField {
        group: group.to_string(),
        field: format!("styles.{}", variant),
        expected: "a mapping of declarations".to_string(),
    };

    let mut errors = Vec::new();
    let base = match styles.get(BASE_KEY) {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(base)) => base.clone(),
        Some(_) => {
            errors.push(invalid(BASE_KEY));
            Map::new()
        }
    };

    let mut components = Declarations::new();
    for (variant, declarations) in styles.iter().filter(|(variant, _)| *variant != BASE_KEY) {
        let Value::Object(declarations) = declarations else {
            errors.push(invalid(variant));
            continue;
        };
        let mut merged = declarations.clone();
        merge_under(&mut merged, &base);
        components.insert(component_selector(group, variant), Value::Object(merged));
    }

    if errors.is_empty() {
        Ok(components)
    } else {
        Err(errors)
    }
}

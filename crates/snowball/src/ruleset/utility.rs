//! Utilities driven by configured value maps (`spacing`, `borderRadius`, ...).

use std::sync::Arc;

use serde_json::{Map, Value};

use super::palette::utility_name;
use super::table::Category;
use crate::error::BuildError;
use crate::host::{Declarations, MatchOptions, MatchSet, Matcher};

/// One `sb-<group>_<suffix>` utility per rule of `category`.
///
/// Generators are invoked with a value *key*; the CSS value is looked up in
/// `values` and assigned literally to every target property. The match
/// domain is exactly the configured key set, so `sb-card_p-huge` does not
/// exist unless `huge` is configured.
///
/// # Errors
///
/// [`BuildError::InvalidField`] when `values` is not an object.
pub fn category_utilities(
    group: &str,
    category: &Category,
    values: &Value,
) -> Result<MatchSet, BuildError> {
    let values = values
        .as_object()
        .ok_or_else(|| BuildError::InvalidField {
            group: group.to_string(),
            field: format!("utility.{}", category.name),
            expected: "a mapping of value names to CSS values".to_string(),
        })?;
    let lookup: Arc<Map<String, Value>> = Arc::new(values.clone());

    let matchers = category
        .rules
        .iter()
        .map(|rule| {
            let properties = rule.properties.clone();
            let lookup = Arc::clone(&lookup);
            Matcher::new(utility_name(group, &rule.suffix), move |key| {
                let Some(value) = key.as_str().and_then(|key| lookup.get(key)) else {
                    return Declarations::new();
                };
                properties
                    .iter()
                    .map(|property| (property.clone(), value.clone()))
                    .collect()
            })
        })
        .collect();

    let domain = values
        .keys()
        .map(|key| (key.clone(), Value::String(key.clone())))
        .collect();

    Ok(MatchSet::new(matchers, MatchOptions::new(domain)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::table::RULESETS;
    use serde_json::json;

    fn decls(value: Value) -> Declarations {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_spacing_accepts_only_configured_keys() {
        let spacing = RULESETS.category("spacing").unwrap();
        let set =
            category_utilities("g", spacing, &json!({ "small": "4px", "large": "16px" })).unwrap();

        assert_eq!(
            set.apply("sb-g_p", "small").unwrap(),
            decls(json!({ "padding": "4px" }))
        );
        assert_eq!(
            set.apply("sb-g_p", "large").unwrap(),
            decls(json!({ "padding": "16px" }))
        );
        assert!(set.apply("sb-g_p", "medium").is_none());

        let domain: Vec<&String> = set.options.values.keys().collect();
        assert_eq!(domain, ["small", "large"]);
    }

    #[test]
    fn test_generator_rejects_unknown_key() {
        let spacing = RULESETS.category("spacing").unwrap();
        let set = category_utilities("g", spacing, &json!({ "small": "4px" })).unwrap();
        let p = set.matcher("sb-g_p").unwrap();
        assert!(p.call(&json!("medium")).is_empty());
        assert!(p.call(&json!(4)).is_empty());
    }

    #[test]
    fn test_one_matcher_per_rule() {
        let radius = RULESETS.category("borderRadius").unwrap();
        let set = category_utilities("g", radius, &json!({ "lg": "0.5rem" })).unwrap();
        assert_eq!(set.matchers.len(), radius.rules.len());
        assert!(set.matcher("sb-g_rounded").is_some());
    }

    #[test]
    fn test_multi_property_rule_assigns_each_target() {
        let radius = RULESETS.category("borderRadius").unwrap();
        let set = category_utilities("g", radius, &json!({ "lg": "0.5rem" })).unwrap();
        assert_eq!(
            set.apply("sb-g_rounded-t", "lg").unwrap(),
            decls(json!({
                "borderTopLeftRadius": "0.5rem",
                "borderTopRightRadius": "0.5rem"
            }))
        );
    }

    #[test]
    fn test_values_are_assigned_literally() {
        let fonts = RULESETS.category("fontFamily").unwrap();
        let set =
            category_utilities("g", fonts, &json!({ "body": ["Inter", "sans-serif"] })).unwrap();
        assert_eq!(
            set.apply("sb-g_font", "body").unwrap(),
            decls(json!({ "fontFamily": ["Inter", "sans-serif"] }))
        );
    }

    #[test]
    fn test_values_must_be_mapping() {
        let spacing = RULESETS.category("spacing").unwrap();
        let err = category_utilities("g", spacing, &json!("4px")).unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidField { ref field, .. } if field == "utility.spacing"
        ));
    }
}

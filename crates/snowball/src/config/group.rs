//! One snowball's configuration fields.

use serde_json::{Map, Value};

use crate::error::BuildError;

/// A single snowball: palette variants, utility values and style variants.
///
/// Every field is optional. Maps keep the author's key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    /// Palette variant name (`light`, `dark`, ...) to palette object.
    pub color: Option<Map<String, Value>>,

    /// Ruleset category (`spacing`, `borderRadius`, ...) to value map.
    pub utility: Option<Map<String, Value>>,

    /// Style variant name to declaration tree. `_` is the shared base.
    pub styles: Option<Map<String, Value>>,
}

impl Group {
    /// Parses a group, reporting every field with the wrong shape.
    pub fn from_value(name: &str, value: &Value) -> Result<Self, Vec<BuildError>> {
        let (group, errors) = Self::checked(name, value);
        if errors.is_empty() {
            Ok(group)
        } else {
            Err(errors)
        }
    }

    /// Parses a group, keeping the well-shaped fields.
    ///
    /// Fields with the wrong shape are left out of the returned group and
    /// reported instead, so the remaining fields can still be checked.
    pub fn checked(name: &str, value: &Value) -> (Self, Vec<BuildError>) {
        let mut errors = Vec::new();
        let Some(object) = value.as_object() else {
            errors.push(BuildError::InvalidField {
                group: name.to_string(),
                field: name.to_string(),
                expected: "a mapping".to_string(),
            });
            return (Self::default(), errors);
        };

        let mut field = |key: &str| match object.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map.clone()),
            Some(_) => {
                errors.push(BuildError::InvalidField {
                    group: name.to_string(),
                    field: key.to_string(),
                    expected: "a mapping".to_string(),
                });
                None
            }
        };

        let group = Self {
            color: field("color"),
            utility: field("utility"),
            styles: field("styles"),
        };
        (group, errors)
    }

    /// Returns `true` when the group defines none of its fields.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.utility.is_none() && self.styles.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_all_fields() {
        let group = Group::from_value(
            "card",
            &json!({
                "color": { "light": { "ink": "#000" } },
                "utility": { "spacing": { "sm": "4px" } },
                "styles": { "DEFAULT": { "padding": "1rem" } }
            }),
        )
        .unwrap();

        assert!(group.color.is_some());
        assert!(group.utility.is_some());
        assert!(group.styles.is_some());
        assert!(!group.is_empty());
    }

    #[test]
    fn test_group_fields_optional() {
        let group = Group::from_value("card", &json!({})).unwrap();
        assert!(group.is_empty());

        let group = Group::from_value("card", &json!({ "color": null })).unwrap();
        assert!(group.color.is_none());
    }

    #[test]
    fn test_group_ignores_unknown_fields() {
        let group = Group::from_value("card", &json!({ "notes": "x" })).unwrap();
        assert!(group.is_empty());
    }

    #[test]
    fn test_group_not_a_mapping() {
        let errors = Group::from_value("card", &json!("blue")).unwrap_err();
        assert!(matches!(errors[0], BuildError::InvalidField { ref field, .. } if field == "card"));
    }

    #[test]
    fn test_group_field_wrong_shape() {
        let errors = Group::from_value("card", &json!({ "styles": ["a"] })).unwrap_err();
        assert_eq!(
            errors,
            [BuildError::InvalidField {
                group: "card".to_string(),
                field: "styles".to_string(),
                expected: "a mapping".to_string(),
            }]
        );
    }

    #[test]
    fn test_group_reports_every_misshaped_field() {
        let errors =
            Group::from_value("card", &json!({ "utility": "4px", "styles": ["x"], "color": 3 }))
                .unwrap_err();
        let fields: Vec<String> = errors
            .into_iter()
            .map(|err| match err {
                BuildError::InvalidField { field, .. } => field,
                other => panic!("unexpected error {other:?}"),
            })
            .collect();
        assert_eq!(fields, ["color", "utility", "styles"]);
    }

    #[test]
    fn test_checked_keeps_well_shaped_fields() {
        let (group, errors) = Group::checked(
            "card",
            &json!({ "utility": "4px", "color": { "light": { "ink": "#000" } } }),
        );
        assert_eq!(errors.len(), 1);
        assert!(group.color.is_some());
        assert!(group.utility.is_none());
    }

    #[test]
    fn test_group_preserves_key_order() {
        let group = Group::from_value(
            "card",
            &json!({ "color": { "dark": { "ink": "#fff" }, "light": { "ink": "#000" } } }),
        )
        .unwrap();
        let variants: Vec<&String> = group.color.as_ref().unwrap().keys().collect();
        assert_eq!(variants, ["dark", "light"]);
    }
}

//! Palette schemas, palette components and color utilities.
//!
//! A snowball's `color` field holds several palette variants that share
//! one shape. The first variant is taken as the schema sample; its tokens
//! decide which custom properties a palette component declares and which
//! value keys the color utilities accept. Every other variant is checked
//! against the sample so a missing or extra token is reported instead of
//! silently dropped.

use serde_json::{Map, Value};

use super::table::Rule;
use crate::error::BuildError;
use crate::host::css::value_text;
use crate::host::{Declarations, MatchOptions, MatchSet, Matcher};
use crate::tokens::flatten;

/// Custom property holding palette token `token` of snowball `group`.
///
/// # Example
///
/// ```rust
/// use snowball::ruleset::custom_property;
///
/// assert_eq!(custom_property("card", "surface-muted"), "--card--color--surface-muted");
/// ```
pub fn custom_property(group: &str, token: &str) -> String {
    format!("--{}--color--{}", group, token)
}

/// Expands one palette into `token → value`.
///
/// Scalars keep their property name; objects are flattened under it, with
/// `DEFAULT` naming the property itself.
pub fn palette_tokens(palette: &Map<String, Value>) -> Map<String, Value> {
    let mut tokens = Map::new();
    for (property, value) in palette {
        append_tokens(property, value, &mut tokens);
    }
    tokens
}

fn append_tokens(property: &str, value: &Value, tokens: &mut Map<String, Value>) {
    match value {
        Value::Object(nested) => tokens.extend(flatten(nested, property)),
        scalar => {
            tokens.insert(property.to_string(), scalar.clone());
        }
    }
}

/// The token shape shared by all palette variants of one snowball.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSchema {
    group: String,
    sample: String,
    properties: Vec<String>,
    tokens: Vec<String>,
}

impl PaletteSchema {
    /// Derives the schema from the first variant of `variants`.
    ///
    /// # Errors
    ///
    /// [`BuildError::MissingField`] when there are no variants, and
    /// [`BuildError::InvalidField`] when the sample is not an object.
    pub fn derive(group: &str, variants: &Map<String, Value>) -> Result<Self, BuildError> {
        let (sample, palette) = variants.iter().next().ok_or_else(|| BuildError::MissingField {
            group: group.to_string(),
            field: "palette variants in 'color'".to_string(),
        })?;
        let palette = palette_object(group, sample, palette)?;

        Ok(Self {
            group: group.to_string(),
            sample: sample.clone(),
            properties: palette.keys().cloned().collect(),
            tokens: palette_tokens(palette).keys().cloned().collect(),
        })
    }

    /// Name of the variant the schema was taken from.
    pub fn sample(&self) -> &str {
        &self.sample
    }

    /// Top-level palette properties (`ink`, `surface`, ...).
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Flattened token names (`ink`, `surface`, `surface-muted`, ...).
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Compares a variant against the sample.
    ///
    /// Missing tokens are reported before unexpected ones, each in the
    /// order they appear.
    pub fn check(&self, variant: &str, palette: &Value) -> Vec<BuildError> {
        let palette = match palette_object(&self.group, variant, palette) {
            Ok(palette) => palette,
            Err(err) => return vec![err],
        };
        let tokens = palette_tokens(palette);

        let missing = self
            .tokens
            .iter()
            .filter(|token| !tokens.contains_key(token.as_str()))
            .map(|token| self.mismatch(variant, token, true));
        let extra = tokens
            .keys()
            .filter(|token| !self.tokens.contains(*token))
            .map(|token| self.mismatch(variant, token, false));

        missing.chain(extra).collect()
    }

    /// Custom-property declarations for one palette variant.
    ///
    /// Only schema properties are read; properties the variant lacks are
    /// skipped.
    pub fn declarations(&self, palette: &Value) -> Declarations {
        let mut declarations = Declarations::new();
        for property in &self.properties {
            let Some(value) = palette.get(property) else {
                continue;
            };
            let mut tokens = Map::new();
            append_tokens(property, value, &mut tokens);
            for (token, value) in tokens {
                declarations.insert(custom_property(&self.group, &token), value);
            }
        }
        declarations
    }

    /// Utility value key → custom property, one entry per schema token.
    pub fn utility_values(&self) -> Map<String, Value> {
        self.tokens
            .iter()
            .map(|token| {
                (
                    token.clone(),
                    Value::String(custom_property(&self.group, token)),
                )
            })
            .collect()
    }

    fn mismatch(&self, variant: &str, token: &str, missing: bool) -> BuildError {
        BuildError::SchemaMismatch {
            group: self.group.clone(),
            sample: self.sample.clone(),
            variant: variant.to_string(),
            token: token.to_string(),
            missing,
        }
    }
}

fn palette_object<'a>(
    group: &str,
    variant: &str,
    palette: &'a Value,
) -> Result<&'a Map<String, Value>, BuildError> {
    palette.as_object().ok_or_else(|| BuildError::InvalidField {
        group: group.to_string(),
        field: format!("color.{}", variant),
        expected: "a palette mapping".to_string(),
    })
}

/// Name of the palette component of `group`.
pub fn palette_component_name(group: &str) -> String {
    format!("sb-{}-palette", group)
}

/// The `sb-<group>-palette` component, invocable with any color variant.
pub fn palette_component(schema: &PaletteSchema, variants: &Map<String, Value>) -> MatchSet {
    let owned = schema.clone();
    let matcher = Matcher::new(palette_component_name(&schema.group), move |palette| {
        owned.declarations(palette)
    });
    MatchSet::new(vec![matcher], MatchOptions::new(variants.clone()))
}

/// One `sb-<group>_<suffix>` utility per color rule, keyed by schema token.
///
/// Each generator takes a custom-property reference and assigns
/// `var(<reference>)` to every target property of its rule.
pub fn color_utilities(schema: &PaletteSchema, rules: &[Rule]) -> MatchSet {
    let matchers = rules
        .iter()
        .map(|rule| {
            let properties = rule.properties.clone();
            Matcher::new(
                utility_name(&schema.group, &rule.suffix),
                move |reference| {
                    let Some(reference) = value_text(reference) else {
                        return Declarations::new();
                    };
                    properties
                        .iter()
                        .map(|property| {
                            (property.clone(), Value::String(format!("var({})", reference)))
                        })
                        .collect()
                },
            )
        })
        .collect();

    MatchSet::new(matchers, MatchOptions::new(schema.utility_values()))
}

/// Name of utility `suffix` of `group`.
pub fn utility_name(group: &str, suffix: &str) -> String {
    format!("sb-{}_{}", group, suffix)
}

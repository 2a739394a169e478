//! Utility categories and the CSS properties each suffix controls.
//!
//! The built-in table is [`RULESETS`], assembled once on first use and
//! never modified. Custom tables can be built with [`RulesetTable::add`]
//! and passed to [`Ruleset::build`](super::Ruleset::build).

use once_cell::sync::Lazy;

/// Suffix → target properties, as written in the built-in table.
pub type RuleSpec = (&'static str, &'static [&'static str]);

/// Category name used for palette-driven color utilities.
pub const COLOR_CATEGORY: &str = "color";

const COLOR: &[RuleSpec] = &[
    ("accent", &["accentColor"]),
    ("bg", &["backgroundColor"]),
    ("border", &["borderColor"]),
    ("border-t", &["borderTopColor"]),
    ("border-l", &["borderLeftColor"]),
    ("border-r", &["borderRightColor"]),
    ("border-b", &["borderBottomColor"]),
    ("caret", &["caretColor"]),
    ("decoration", &["textDecorationColor"]),
    ("divide", &["borderColor"]),
    ("outline", &["outlineColor"]),
    ("ring", &["--tw-ring-color"]),
    ("ring-offset", &["--tw-ring-offset-color"]),
    ("shadow", &["--tw-shadow-color"]),
    ("text", &["color"]),
];

const FONT_FAMILY: &[RuleSpec] = &[("font", &["fontFamily"])];

const BORDER_RADIUS: &[RuleSpec] = &[
    ("rounded", &["borderRadius"]),
    ("rounded-t", &["borderTopLeftRadius", "borderTopRightRadius"]),
    ("rounded-r", &["borderTopRightRadius", "borderBottomRightRadius"]),
    ("rounded-b", &["borderBottomRightRadius", "borderBottomLeftRadius"]),
    ("rounded-l", &["borderTopLeftRadius", "borderBottomLeftRadius"]),
    ("rounded-tl", &["borderTopLeftRadius"]),
    ("rounded-tr", &["borderTopRightRadius"]),
    ("rounded-br", &["borderBottomRightRadius"]),
    ("rounded-bl", &["borderBottomLeftRadius"]),
];

const SPACING: &[RuleSpec] = &[
    ("p", &["padding"]),
    ("px", &["paddingLeft", "paddingRight"]),
    ("py", &["paddingTop", "paddingBottom"]),
    ("pt", &["paddingTop"]),
    ("pr", &["paddingRight"]),
    ("pb", &["paddingBottom"]),
    ("pl", &["paddingLeft"]),
    ("m", &["margin"]),
    ("mx", &["marginLeft", "marginRight"]),
    ("my", &["marginTop", "marginBottom"]),
    ("mt", &["marginTop"]),
    ("mr", &["marginRight"]),
    ("mb", &["marginBottom"]),
    ("ml", &["marginLeft"]),
    ("gap", &["gap"]),
    ("gap-x", &["columnGap"]),
    ("gap-y", &["rowGap"]),
];

/// The built-in ruleset table.
pub static RULESETS: Lazy<RulesetTable> = Lazy::new(RulesetTable::builtin);

/// One utility suffix and the properties it sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub suffix: String,
    pub properties: Vec<String>,
}

/// A named group of rules, e.g. `spacing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub rules: Vec<Rule>,
}

/// Category name → ordered rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulesetTable {
    categories: Vec<Category>,
}

impl RulesetTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the crate: `color`, `fontFamily`,
    /// `borderRadius` and `spacing`.
    pub fn builtin() -> Self {
        Self::new()
            .add(COLOR_CATEGORY, COLOR)
            .add("fontFamily", FONT_FAMILY)
            .add("borderRadius", BORDER_RADIUS)
            .add("spacing", SPACING)
    }

    /// Adds or replaces a category, returning the updated table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snowball::ruleset::RulesetTable;
    ///
    /// let table = RulesetTable::new().add("zIndex", &[("z", &["zIndex"])]);
    /// assert_eq!(table.category("zIndex").unwrap().rules[0].suffix, "z");
    /// ```
    pub fn add(mut self, name: &str, rules: &[(&str, &[&str])]) -> Self {
        let category = Category {
            name: name.to_string(),
            rules: rules
                .iter()
                .map(|(suffix, properties)| Rule {
                    suffix: suffix.to_string(),
                    properties: properties.iter().map(|p| p.to_string()).collect(),
                })
                .collect(),
        };

        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
        self
    }

    /// Looks up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Category names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

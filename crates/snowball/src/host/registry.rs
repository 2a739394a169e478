//! A recording host.
//!
//! [`Registry`] implements [`PluginApi`] by storing every registration as
//! it arrives. It exists so a ruleset can be inspected, tested and turned
//! into CSS without a JavaScript toolchain.
//!
//! # Naming
//!
//! Matched generators expand to one class per value key: `<name>-<key>`,
//! or `<name>` alone when the key is `DEFAULT`. So the `bg` color utility
//! of snowball `card` invoked with `surface-muted` is
//! `.sb-card_bg-surface-muted`.
//!
//! # Output order
//!
//! [`Registry::expand`] and [`Registry::to_css`] emit matched components
//! (palettes) first, then plain components, then utilities, each in
//! registration order. Variants such as `hover:` and on-demand class
//! scanning belong to the real host and are not modelled.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use snowball::{snowball, Config, Registry};
//!
//! let config = Config::from_value(json!({
//!     "card": { "styles": { "DEFAULT": { "padding": "1rem" } } }
//! })).unwrap();
//!
//! let mut registry = Registry::from_config(&config);
//! snowball(&mut registry).unwrap();
//!
//! assert_eq!(registry.to_css(), ".sb-card {\n  padding: 1rem;\n}\n");
//! ```

use serde_json::{Map, Value};

use super::css::{class_selector, write_rule};
use super::{Declarations, MatchOptions, MatchSet, Matcher, PluginApi};
use crate::config::{Config, THEME_NAMESPACE};
use crate::tokens::DEFAULT_KEY;

/// Host that records registrations.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    theme: Map<String, Value>,
    components: Vec<MatchSet>,
    utilities: Vec<MatchSet>,
    plain: Vec<Declarations>,
}

impl Registry {
    /// Creates a registry with an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry answering theme lookups from `theme`.
    pub fn with_theme(theme: Map<String, Value>) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Creates a registry whose `snowball` namespace holds `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut theme = Map::new();
        theme.insert(
            THEME_NAMESPACE.to_string(),
            Value::Object(config.as_map().clone()),
        );
        Self::with_theme(theme)
    }

    /// Matched component registrations, in order.
    pub fn component_sets(&self) -> &[MatchSet] {
        &self.components
    }

    /// Matched utility registrations, in order.
    pub fn utility_sets(&self) -> &[MatchSet] {
        &self.utilities
    }

    /// Plain component registrations, in order.
    pub fn plain_components(&self) -> &[Declarations] {
        &self.plain
    }

    /// Invokes a registered utility with a value key from its domain.
    ///
    /// Returns `None` if no utility called `name` accepts `key`.
    pub fn utility(&self, name: &str, key: &str) -> Option<Declarations> {
        self.utilities.iter().find_map(|set| set.apply(name, key))
    }

    /// Invokes a registered matched component with a value key from its domain.
    pub fn component(&self, name: &str, key: &str) -> Option<Declarations> {
        self.components.iter().find_map(|set| set.apply(name, key))
    }

    /// Looks up a plain component by selector. Later registrations win.
    pub fn plain_component(&self, selector: &str) -> Option<&Declarations> {
        self.plain
            .iter()
            .rev()
            .find_map(|components| components.get(selector))
            .and_then(Value::as_object)
    }

    /// Every rule the registrations produce, as `(selector, declarations)`.
    ///
    /// Generators that produce no declarations are skipped.
    pub fn expand(&self) -> Vec<(String, Declarations)> {
        let mut rules = Vec::new();
        expand_sets(&self.components, &mut rules);
        for components in &self.plain {
            for (selector, tree) in components {
                if let Value::Object(declarations) = tree {
                    rules.push((selector.clone(), declarations.clone()));
                }
            }
        }
        expand_sets(&self.utilities, &mut rules);
        rules
    }

    /// Serializes [`Registry::expand`] as a stylesheet.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (selector, declarations) in self.expand() {
            if !css.is_empty() {
                css.push('\n');
            }
            write_rule(&mut css, &selector, &declarations);
        }
        css
    }
}

impl PluginApi for Registry {
    fn theme(&self, namespace: &str) -> Option<Value> {
        self.theme.get(namespace).cloned()
    }

    fn match_components(&mut self, matchers: Vec<Matcher>, options: MatchOptions) {
        self.components.push(MatchSet::new(matchers, options));
    }

    fn match_utilities(&mut self, matchers: Vec<Matcher>, options: MatchOptions) {
        self.utilities.push(MatchSet::new(matchers, options));
    }

    fn add_components(&mut self, components: Declarations) {
        self.plain.push(components);
    }
}

/// Class name for a matcher invoked with `key`.
pub(crate) fn class_name(name: &str, key: &str) -> String {
    if key == DEFAULT_KEY {
        name.to_string()
    } else {
        format!("{}-{}", name, key)
    }
}

fn expand_sets(sets: &[MatchSet], rules: &mut Vec<(String, Declarations)>) {
    for set in sets {
        for matcher in &set.matchers {
            for (key, value) in &set.options.values {
                let declarations = matcher.call(value);
                if declarations.is_empty() {
                    continue;
                }
                rules.push((class_selector(&class_name(matcher.name(), key)), declarations));
            }
        }
    }
}

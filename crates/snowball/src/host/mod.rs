//! The contract between the transform and the styling framework that hosts it.
//!
//! This module provides:
//!
//! - [`PluginApi`]: what a host offers a plugin (theme lookup and three
//!   registration calls)
//! - [`Matcher`], [`MatchOptions`], [`MatchSet`]: named generators plus the
//!   value domain they may be invoked with
//! - [`Registry`]: a host that records registrations and serializes them
//!   to CSS
//!
//! Declaration trees are plain JSON objects in CSS-in-JS form: camelCase
//! or custom-property keys map to scalar values, and object values are
//! nested rules (`"&:hover"`, `"@media (...)"`, descendant selectors).

pub mod css;
mod registry;

pub use registry::Registry;

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// A declaration tree: property or nested selector → value.
pub type Declarations = Map<String, Value>;

/// A generator invoked with one value from its match domain.
pub type Generator = Arc<dyn Fn(&Value) -> Declarations + Send + Sync>;

/// Host capabilities a plugin is given.
///
/// Mirrors the extension API of utility-first CSS frameworks: a theme
/// lookup, matched components, matched utilities and plain components.
pub trait PluginApi {
    /// Returns the configuration stored under a theme namespace.
    fn theme(&self, namespace: &str) -> Option<Value>;

    /// Registers component generators sharing one value domain.
    fn match_components(&mut self, matchers: Vec<Matcher>, options: MatchOptions);

    /// Registers utility generators sharing one value domain.
    fn match_utilities(&mut self, matchers: Vec<Matcher>, options: MatchOptions);

    /// Registers finished components, keyed by selector.
    fn add_components(&mut self, components: Declarations);
}

/// A named generator.
#[derive(Clone)]
pub struct Matcher {
    name: String,
    generate: Generator,
}

impl Matcher {
    pub fn new<F>(name: impl Into<String>, generate: F) -> Self
    where
        F: Fn(&Value) -> Declarations + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            generate: Arc::new(generate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the generator. Callers are expected to pass a value from the
    /// matcher's domain; see [`MatchSet::apply`] for the checked form.
    pub fn call(&self, value: &Value) -> Declarations {
        (self.generate)(value)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher").field("name", &self.name).finish()
    }
}

/// Options for a match registration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOptions {
    /// Value key → value handed to the generator. Keys outside this map
    /// are not valid invocations.
    pub values: Map<String, Value>,
}

impl MatchOptions {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

/// Matchers registered together with their shared options.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    pub matchers: Vec<Matcher>,
    pub options: MatchOptions,
}

impl MatchSet {
    pub fn new(matchers: Vec<Matcher>, options: MatchOptions) -> Self {
        Self { matchers, options }
    }

    pub fn matcher(&self, name: &str) -> Option<&Matcher> {
        self.matchers.iter().find(|m| m.name == name)
    }

    /// Invokes matcher `name` with the value stored under `key`.
    ///
    /// Returns `None` when either the matcher or the key is unknown.
    pub fn apply(&self, name: &str, key: &str) -> Option<Declarations> {
        let value = self.options.values.get(key)?;
        Some(self.matcher(name)?.call(value))
    }

    /// Names of all matchers, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(|m| m.name.as_str())
    }
}

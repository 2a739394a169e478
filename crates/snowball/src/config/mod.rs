//! Snowball configuration.
//!
//! This module provides:
//!
//! - [`Config`]: the `snowball` theme namespace, keyed by group name
//! - [`Group`]: one snowball's `color`, `utility` and `styles` fields
//!
//! Configurations keep their key order. The first palette variant of a
//! group is its schema sample, and generated rules follow the order the
//! author wrote them in, so order is part of the contract.

mod group;

pub use group::Group;

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{BuildError, ConfigError};

/// Theme namespace the plugin reads its configuration from.
pub const THEME_NAMESPACE: &str = "snowball";

/// All configured snowballs, in declaration order.
///
/// # Example
///
/// ```rust
/// use snowball::Config;
///
/// let config = Config::from_yaml_str(r##"
/// card:
///   color:
///     light: { ink: "#000" }
///     dark: { ink: "#fff" }
/// "##).unwrap();
///
/// assert_eq!(config.names().collect::<Vec<_>>(), ["card"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    groups: Map<String, Value>,
}

impl Config {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-parsed configuration value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAMapping`] unless `value` is an object.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(groups) => Ok(Self { groups }),
            _ => Err(ConfigError::NotAMapping),
        }
    }

    /// Parses a JSON configuration.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Parses a YAML configuration.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(source)?;
        Self::from_value(value)
    }

    /// Loads a configuration file, choosing the format by extension.
    ///
    /// `.json` is parsed as JSON; `.yaml` and `.yml` as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_deref() {
            Some("json") => Self::from_json_str(&read()?),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&read()?),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Adds or replaces a group, returning the updated configuration.
    pub fn add(mut self, name: &str, group: Value) -> Self {
        self.groups.insert(name.to_string(), group);
        self
    }

    /// Group names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Typed views of every group, in declaration order.
    ///
    /// Each entry holds the group's well-shaped fields and an error for
    /// every field with the wrong shape (see [`Group::checked`]).
    pub fn groups(&self) -> impl Iterator<Item = (&str, Group, Vec<BuildError>)> {
        self.groups.iter().map(|(name, value)| {
            let (group, errors) = Group::checked(name, value);
            (name.as_str(), group, errors)
        })
    }

    /// The raw configuration value.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.groups
    }
}

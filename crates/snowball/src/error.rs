//! Build and configuration errors.
//!
//! The transform never signals faults through malformed output. Every
//! problem found while building a [`Ruleset`](crate::Ruleset) becomes a
//! [`BuildError`] naming the offending snowball and field; a build
//! collects all of them and fails once with [`BuildErrors`].

use std::path::PathBuf;

/// A single fault found in a snowball configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The host has no configuration under the requested theme namespace.
    #[error("theme namespace '{namespace}' is not configured")]
    MissingTheme { namespace: String },

    /// The theme namespace holds something other than a mapping.
    #[error("theme namespace '{namespace}' must be a mapping of snowball names")]
    InvalidTheme { namespace: String },

    /// A field is present but lacks required content (e.g. `color: {}`).
    #[error("snowball '{group}': missing {field}")]
    MissingField { group: String, field: String },

    /// A field has the wrong shape.
    #[error("snowball '{group}': '{field}' must be {expected}")]
    InvalidField {
        group: String,
        field: String,
        expected: String,
    },

    /// A palette variant does not define the same tokens as the schema sample.
    #[error(
        "snowball '{group}': palette '{variant}' {} token '{token}' (schema taken from '{sample}')",
        mismatch_verb(.missing)
    )]
    SchemaMismatch {
        group: String,
        sample: String,
        variant: String,
        token: String,
        /// `true` when the variant lacks the token, `false` when it adds one.
        missing: bool,
    },

    /// A `utility` category has no entry in the ruleset table.
    #[error("snowball '{group}': unknown utility category '{category}'")]
    UnknownCategory { group: String, category: String },
}

impl BuildError {
    /// The snowball this error belongs to, if any.
    pub fn group(&self) -> Option<&str> {
        match self {
            BuildError::MissingTheme { .. } | BuildError::InvalidTheme { .. } => None,
            BuildError::MissingField { group, .. }
            | BuildError::InvalidField { group, .. }
            | BuildError::SchemaMismatch { group, .. }
            | BuildError::UnknownCategory { group, .. } => Some(group),
        }
    }
}

/// Every fault found in one build, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", render_all(.0))]
pub struct BuildErrors(pub Vec<BuildError>);

impl BuildErrors {
    pub fn iter(&self) -> std::slice::Iter<'_, BuildError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BuildError> for BuildErrors {
    fn from(err: BuildError) -> Self {
        BuildErrors(vec![err])
    }
}

impl IntoIterator for BuildErrors {
    type Item = BuildError;
    type IntoIter = std::vec::IntoIter<BuildError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn mismatch_verb(missing: &bool) -> &'static str {
    if *missing {
        "is missing"
    } else {
        "defines unexpected"
    }
}

fn render_all(errors: &[BuildError]) -> String {
    match errors {
        [single] => single.to_string(),
        _ => {
            let mut out = format!("{} snowball configuration errors:", errors.len());
            for err in errors {
                out.push_str("\n  - ");
                out.push_str(&err.to_string());
            }
            out
        }
    }
}

/// Error returned when loading a configuration file or string.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported configuration file '{}' (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("snowball configuration must be a mapping of group names")]
    NotAMapping,
}

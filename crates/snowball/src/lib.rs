//! # Snowball - design-token groups compiled to CSS
//!
//! A snowball is a named bundle of design tokens: a color palette with
//! light/dark (or any other) variants, utility values such as spacing and
//! radii, and named style variants. This crate turns a configuration of
//! snowballs into the declarative inputs of a utility-first styling
//! framework:
//!
//! - **Palette components** (`sb-<group>-palette-<variant>`) declaring CSS
//!   custom properties `--<group>--color--<token>`
//! - **Utilities** (`sb-<group>_<suffix>-<key>`) setting CSS properties to
//!   `var(--<group>--color--<token>)` or to configured values
//! - **Components** (`.sb-<group>`, `.sb-<group>-<variant>`) built from
//!   style variants merged over a shared base
//!
//! ## Quick Start
//!
//! ```rust
//! use snowball::{snowball, Config, Registry};
//!
//! let config = Config::from_yaml_str(r##"
//! card:
//!   color:
//!     light: { ink: "#111", surface: { DEFAULT: "#fff", muted: "#f4f4f5" } }
//!     dark:  { ink: "#eee", surface: { DEFAULT: "#18181b", muted: "#27272a" } }
//!   utility:
//!     spacing: { sm: 0.5rem, md: 1rem }
//!   styles:
//!     _: { borderRadius: 8px }
//!     DEFAULT: { padding: 1rem }
//!     compact: { padding: 0.5rem }
//! "##).unwrap();
//!
//! let mut registry = Registry::from_config(&config);
//! snowball(&mut registry).unwrap();
//!
//! let css = registry.to_css();
//! assert!(css.contains(".sb-card-palette-dark {\n  --card--color--ink: #eee;"));
//! assert!(css.contains(".sb-card_bg-surface-muted {\n  background-color: var(--card--color--surface-muted);"));
//! assert!(css.contains(".sb-card_p-sm {\n  padding: 0.5rem;"));
//! assert!(css.contains(".sb-card-compact {\n  padding: 0.5rem;\n  border-radius: 8px;"));
//! ```
//!
//! ## Hosts
//!
//! The transform talks to its host through [`PluginApi`]. [`Registry`] is a
//! recording implementation that can also serialize everything to CSS;
//! framework integrations implement the trait themselves and call
//! [`snowball`] (or [`Ruleset::build`] and [`Ruleset::register`]).
//!
//! ## Errors
//!
//! Configuration faults never produce partial output. A build reports every
//! fault it finds as one [`BuildErrors`], each entry naming the snowball and
//! field involved.

pub mod config;
pub mod error;
pub mod host;
pub mod ruleset;
pub mod tokens;

pub use config::{Config, Group, THEME_NAMESPACE};
pub use error::{BuildError, BuildErrors, ConfigError};
pub use host::{Declarations, MatchOptions, MatchSet, Matcher, PluginApi, Registry};
pub use ruleset::{PaletteSchema, Ruleset, RulesetTable, RULESETS};
pub use tokens::flatten;

/// Plugin entry point.
///
/// Reads the `snowball` theme namespace from `api`, builds the ruleset
/// against the built-in [`RULESETS`] table and registers it.
///
/// # Errors
///
/// [`BuildError::MissingTheme`] when the namespace is absent,
/// [`BuildError::InvalidTheme`] when it is not a mapping, and every
/// configuration fault found by [`Ruleset::build`].
pub fn snowball<A: PluginApi + ?Sized>(api: &mut A) -> Result<(), BuildErrors> {
    snowball_with_table(api, &RULESETS)
}

/// [`snowball`] with a caller-supplied ruleset table.
pub fn snowball_with_table<A: PluginApi + ?Sized>(
    api: &mut A,
    table: &RulesetTable,
) -> Result<(), BuildErrors> {
    let theme = api.theme(THEME_NAMESPACE).ok_or_else(|| BuildError::MissingTheme {
        namespace: THEME_NAMESPACE.to_string(),
    })?;
    let config = Config::from_value(theme).map_err(|_| BuildError::InvalidTheme {
        namespace: THEME_NAMESPACE.to_string(),
    })?;

    let ruleset = Ruleset::build(&config, table)?;
    log::debug!(
        "registering {} snowballs: {} palettes, {} utility sets, {} components",
        config.len(),
        ruleset.palettes.len(),
        ruleset.utilities.len(),
        ruleset.components.len()
    );
    ruleset.register(api);
    Ok(())
}

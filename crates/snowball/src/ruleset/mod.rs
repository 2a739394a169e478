//! The snowball transform.
//!
//! This module provides:
//!
//! - [`Ruleset`]: everything one configuration registers with a host
//! - [`RulesetTable`] and [`RULESETS`]: utility categories and their CSS
//!   properties
//! - [`PaletteSchema`]: the token shape palette variants share
//!
//! # Per-snowball output
//!
//! | Field     | Registration        | Names                                   |
//! |-----------|---------------------|-----------------------------------------|
//! | `color`   | matched component   | `sb-<group>-palette`                    |
//! | `color`   | matched utilities   | `sb-<group>_<suffix>` (color rules)     |
//! | `utility` | matched utilities   | `sb-<group>_<suffix>` (category rules)  |
//! | `styles`  | plain components    | `.sb-<group>`, `.sb-<group>-<variant>`  |
//!
//! Palette components declare custom properties named
//! `--<group>--color--<token>`; color utilities reference them through
//! `var()`, so switching a palette class swaps every color at once.

mod palette;
mod styles;
mod table;
mod utility;

pub use palette::{
    color_utilities, custom_property, palette_component, palette_component_name,
    palette_tokens, utility_name, PaletteSchema,
};
pub use styles::{component_selector, merge_under, style_components, BASE_KEY};
pub use table::{Category, Rule, RuleSpec, RulesetTable, COLOR_CATEGORY, RULESETS};
pub use utility::category_utilities;

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::config::{Config, Group};
use crate::error::{BuildError, BuildErrors};
use crate::host::{Declarations, MatchSet, PluginApi};

/// Everything a snowball configuration registers with a host.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use snowball::{Config, Ruleset, RULESETS};
///
/// let config = Config::from_value(json!({
///     "g": {
///         "color": { "light": { "ink": "#000" } },
///         "styles": { "DEFAULT": { "fontSize": "1rem" } }
///     }
/// })).unwrap();
///
/// let ruleset = Ruleset::build(&config, &RULESETS).unwrap();
/// let light = ruleset.palettes[0].apply("sb-g-palette", "light").unwrap();
/// assert_eq!(light["--g--color--ink"], "#000");
/// assert!(ruleset.components.contains_key(".sb-g"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ruleset {
    /// One `sb-<group>-palette` registration per snowball with `color`.
    pub palettes: Vec<MatchSet>,
    /// Color utilities and configured category utilities, per snowball.
    pub utilities: Vec<MatchSet>,
    /// Style components of every snowball, keyed by selector.
    pub components: Declarations,
}

impl Ruleset {
    /// Builds the ruleset for every snowball in `config`.
    ///
    /// Every snowball is checked; if any of them is faulty the build fails
    /// with all faults at once and no ruleset.
    pub fn build(config: &Config, table: &RulesetTable) -> Result<Self, BuildErrors> {
        let mut ruleset = Ruleset::default();
        let mut errors = Vec::new();

        for (name, group, mut faults) in config.groups() {
            let misshaped = !faults.is_empty();
            errors.append(&mut faults);
            if misshaped && group.is_empty() {
                continue;
            }
            ruleset.add_group(name, &group, table, &mut errors);
        }

        if errors.is_empty() {
            Ok(ruleset)
        } else {
            Err(BuildErrors(errors))
        }
    }

    /// Hands the ruleset to a host.
    ///
    /// Palettes are registered as matched components, utilities as matched
    /// utilities, and all style components in one final call.
    pub fn register<A: PluginApi + ?Sized>(&self, api: &mut A) {
        for set in &self.palettes {
            api.match_components(set.matchers.clone(), set.options.clone());
        }
        for set in &self.utilities {
            api.match_utilities(set.matchers.clone(), set.options.clone());
        }
        api.add_components(self.components.clone());
    }

    fn add_group(
        &mut self,
        name: &str,
        group: &Group,
        table: &RulesetTable,
        errors: &mut Vec<BuildError>,
    ) {
        if group.is_empty() {
            warn!("snowball '{}' defines no color, utility or styles", name);
            return;
        }

        if let Some(color) = &group.color {
            if let Err(mut faults) = self.add_palette(name, color, table) {
                errors.append(&mut faults);
            }
        }

        if let Some(utility) = &group.utility {
            for (category, values) in utility {
                let Some(rules) = table.category(category) else {
                    errors.push(BuildError::UnknownCategory {
                        group: name.to_string(),
                        category: category.clone(),
                    });
                    continue;
                };
                match category_utilities(name, rules, values) {
                    Ok(set) => {
                        debug!(
                            "snowball '{}': {} '{}' utilities over {} values",
                            name,
                            set.matchers.len(),
                            category,
                            set.options.values.len()
                        );
                        self.utilities.push(set);
                    }
                    Err(err) => errors.push(err),
                }
            }
        }

        if let Some(styles) = &group.styles {
            match style_components(name, styles) {
                Ok(components) => {
                    debug!("snowball '{}': {} style components", name, components.len());
                    self.components.extend(components);
                }
                Err(mut faults) => errors.append(&mut faults),
            }
        }
    }

    fn add_palette(
        &mut self,
        name: &str,
        variants: &Map<String, Value>,
        table: &RulesetTable,
    ) -> Result<(), Vec<BuildError>> {
        let schema = PaletteSchema::derive(name, variants).map_err(|err| vec![err])?;

        let mismatches: Vec<BuildError> = variants
            .iter()
            .skip(1)
            .flat_map(|(variant, palette)| schema.check(variant, palette))
            .collect();
        if !mismatches.is_empty() {
            return Err(mismatches);
        }

        debug!(
            "snowball '{}': palette of {} tokens, {} variants (schema from '{}')",
            name,
            schema.tokens().len(),
            variants.len(),
            schema.sample()
        );
        self.palettes.push(palette_component(&schema, variants));

        if let Some(color) = table.category(COLOR_CATEGORY) {
            self.utilities.push(color_utilities(&schema, &color.rules));
        }
        Ok(())
    }
}

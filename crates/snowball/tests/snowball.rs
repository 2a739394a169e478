//! End-to-end tests: configuration in, registrations and CSS out.

use std::path::PathBuf;

use serde_json::{json, Map, Value};
use snowball::{
    snowball, snowball_with_table, BuildError, Config, Declarations, MatchOptions, Matcher,
    PluginApi, Registry, Ruleset, RulesetTable, RULESETS,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn decls(value: Value) -> Declarations {
    value.as_object().cloned().unwrap()
}

fn build_registry(config: &Config) -> Registry {
    let mut registry = Registry::from_config(config);
    snowball(&mut registry).unwrap();
    registry
}

#[test]
fn test_palette_component_from_fixture() {
    let config = Config::from_path(fixture("snowballs.yaml")).unwrap();
    let registry = build_registry(&config);

    assert_eq!(
        registry.component("sb-card-palette", "light"),
        Some(decls(json!({
            "--card--color--ink": "#000",
            "--card--color--surface": "#fff",
            "--card--color--surface-muted": "#eee"
        })))
    );
    assert_eq!(
        registry.component("sb-card-palette", "dark"),
        Some(decls(json!({
            "--card--color--ink": "#fff",
            "--card--color--surface": "#111",
            "--card--color--surface-muted": "#222"
        })))
    );
}

#[test]
fn test_color_utilities_reference_custom_properties() {
    let config = Config::from_path(fixture("snowballs.yaml")).unwrap();
    let registry = build_registry(&config);

    assert_eq!(
        registry.utility("sb-card_bg", "ink"),
        Some(decls(json!({ "backgroundColor": "var(--card--color--ink)" })))
    );
    assert_eq!(
        registry.utility("sb-card_ring", "surface"),
        Some(decls(json!({ "--tw-ring-color": "var(--card--color--surface)" })))
    );
    assert_eq!(registry.utility("sb-card_bg", "paper"), None);
}

#[test]
fn test_configured_utilities() {
    let config = Config::from_path(fixture("snowballs.yaml")).unwrap();
    let registry = build_registry(&config);

    assert_eq!(
        registry.utility("sb-card_p", "small"),
        Some(decls(json!({ "padding": "4px" })))
    );
    assert_eq!(
        registry.utility("sb-card_my", "large"),
        Some(decls(json!({ "marginTop": "16px", "marginBottom": "16px" })))
    );
    assert_eq!(registry.utility("sb-card_p", "medium"), None);
    assert_eq!(
        registry.utility("sb-card_rounded", "DEFAULT"),
        Some(decls(json!({ "borderRadius": "4px" })))
    );
    assert_eq!(
        registry.utility("sb-card_font", "body"),
        Some(decls(json!({ "fontFamily": ["Inter", "sans-serif"] })))
    );
}

#[test]
fn test_style_components_merge_base() {
    let config = Config::from_path(fixture("snowballs.yaml")).unwrap();
    let registry = build_registry(&config);

    assert_eq!(
        registry.plain_component(".sb-card"),
        Some(&decls(json!({
            "fontSize": "1rem",
            "color": "red",
            "&:hover": { "outline": "none" }
        })))
    );
    assert_eq!(
        registry.plain_component(".sb-card-hover"),
        Some(&decls(json!({ "color": "blue", "&:hover": { "outline": "none" } })))
    );
    assert!(registry.plain_component(".sb-card-_").is_none());
    assert!(registry.plain_component(".sb-badge").is_some());
}

#[test]
fn test_all_components_registered_in_one_call() {
    let config = Config::from_path(fixture("snowballs.yaml")).unwrap();
    let registry = build_registry(&config);

    assert_eq!(registry.plain_components().len(), 1);
    let selectors: Vec<&String> = registry.plain_components()[0].keys().collect();
    assert_eq!(selectors, [".sb-card", ".sb-card-hover", ".sb-badge"]);
}

#[test]
fn test_build_is_repeatable() {
    let config = Config::from_path(fixture("snowballs.yaml")).unwrap();
    let first = build_registry(&config.clone());
    let second = build_registry(&config.clone());

    assert_eq!(first.expand(), second.expand());
    assert_eq!(first.to_css(), second.to_css());
}

#[test]
fn test_build_leaves_configuration_untouched() {
    let config = Config::from_path(fixture("snowballs.yaml")).unwrap();
    let before = config.clone();
    let _ = Ruleset::build(&config, &RULESETS).unwrap();

    assert_eq!(config, before);
    assert!(config.as_map()["card"]["styles"].get("_").is_some());
}

#[test]
fn test_faults_reported_together() {
    let config = Config::from_path(fixture("mismatch.yaml")).unwrap();
    let mut registry = Registry::from_config(&config);
    let errors = snowball(&mut registry).unwrap_err();

    assert_eq!(
        errors.0,
        [
            BuildError::SchemaMismatch {
                group: "card".to_string(),
                sample: "light".to_string(),
                variant: "dark".to_string(),
                token: "surface-muted".to_string(),
                missing: true,
            },
            BuildError::UnknownCategory {
                group: "card".to_string(),
                category: "zIndex".to_string(),
            },
        ]
    );
    assert!(errors.to_string().starts_with("2 snowball configuration errors:"));

    // Nothing is registered when the build fails.
    assert!(registry.expand().is_empty());
    assert!(registry.plain_components().is_empty());
}

#[test]
fn test_missing_theme_namespace() {
    let mut registry = Registry::new();
    let errors = snowball(&mut registry).unwrap_err();
    assert_eq!(
        errors.0,
        [BuildError::MissingTheme {
            namespace: "snowball".to_string(),
        }]
    );
}

#[test]
fn test_theme_namespace_not_a_mapping() {
    let mut theme = Map::new();
    theme.insert("snowball".to_string(), json!(["card"]));
    let mut registry = Registry::with_theme(theme);

    let errors = snowball(&mut registry).unwrap_err();
    assert_eq!(
        errors.0,
        [BuildError::InvalidTheme {
            namespace: "snowball".to_string(),
        }]
    );
    assert_eq!(errors.0[0].group(), None);
}

#[test]
fn test_css_output() {
    let config = Config::from_value(json!({
        "g": {
            "color": { "light": { "ink": "#000" } },
            "utility": { "spacing": { "0.5": "2px" } },
            "styles": {
                "_": { "color": "red" },
                "DEFAULT": { "fontSize": "1rem" },
                "hover": { "color": "blue" }
            }
        }
    }))
    .unwrap();

    let mut table_registry = Registry::from_config(&config);
    snowball_with_table(
        &mut table_registry,
        &RulesetTable::new()
            .add("color", &[("bg", &["backgroundColor"])])
            .add("spacing", &[("px", &["paddingLeft", "paddingRight"])]),
    )
    .unwrap();

    assert_eq!(
        table_registry.to_css(),
        "\
.sb-g-palette-light {
  --g--color--ink: #000;
}

.sb-g {
  font-size: 1rem;
  color: red;
}

.sb-g-hover {
  color: blue;
}

.sb-g_bg-ink {
  background-color: var(--g--color--ink);
}

.sb-g_px-0\\.5 {
  padding-left: 2px;
  padding-right: 2px;
}
"
    );
}

#[test]
fn test_css_nested_rules() {
    let config = Config::from_path(fixture("snowballs.yaml")).unwrap();
    let css = build_registry(&config).to_css();

    assert!(css.contains(".sb-card:hover {\n  outline: none;\n}\n"));
    assert!(css.contains(".sb-card-hover:hover {\n  outline: none;\n}\n"));
    assert!(css.contains(
        "@media (min-width: 640px) {\n  .sb-badge {\n    font-size: 0.75rem;\n  }\n}\n"
    ));
    assert!(css.contains(".sb-card_rounded {\n  border-radius: 4px;\n}\n"));
    assert!(css.contains(".sb-card_font-body {\n  font-family: Inter, sans-serif;\n}\n"));
}

/// A host that only counts calls, to check the registration contract
/// independently of [`Registry`].
#[derive(Default)]
struct CountingHost {
    theme: Option<Value>,
    components: usize,
    utilities: usize,
    plain: usize,
}

impl PluginApi for CountingHost {
    fn theme(&self, namespace: &str) -> Option<Value> {
        assert_eq!(namespace, "snowball");
        self.theme.clone()
    }

    fn match_components(&mut self, _: Vec<Matcher>, _: MatchOptions) {
        self.components += 1;
    }

    fn match_utilities(&mut self, _: Vec<Matcher>, _: MatchOptions) {
        self.utilities += 1;
    }

    fn add_components(&mut self, _: Declarations) {
        self.plain += 1;
    }
}

#[test]
fn test_registration_contract() {
    let config = Config::from_path(fixture("snowballs.yaml")).unwrap();
    let mut host = CountingHost {
        theme: Some(Value::Object(config.as_map().clone())),
        ..CountingHost::default()
    };
    snowball(&mut host).unwrap();

    // card: one palette; color + spacing + borderRadius + fontFamily utilities.
    assert_eq!(host.components, 1);
    assert_eq!(host.utilities, 4);
    assert_eq!(host.plain, 1);
}

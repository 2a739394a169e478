//! Declaration trees serialized as CSS text.

use cssparser::serialize_identifier;
use serde_json::Value;

use super::Declarations;

/// Builds a class selector, escaping characters CSS identifiers cannot hold.
///
/// # Example
///
/// ```rust
/// use snowball::host::css::class_selector;
///
/// assert_eq!(class_selector("sb-card_p-sm"), ".sb-card_p-sm");
/// assert_eq!(class_selector("sb-card_p-0.5"), ".sb-card_p-0\\.5");
/// ```
pub fn class_selector(class: &str) -> String {
    let mut selector = String::from(".");
    // fmt::Write into a String never fails.
    let _ = serialize_identifier(class, &mut selector);
    selector
}

/// Converts a CSS-in-JS property key to its CSS name.
///
/// Custom properties pass through; camelCase becomes kebab-case and a
/// leading capital marks a vendor prefix (`WebkitAppearance` →
/// `-webkit-appearance`). The Microsoft prefix is written lowercase
/// (`msTransform` → `-ms-transform`).
pub fn property_name(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_string();
    }

    let mut name = String::with_capacity(key.len() + 4);
    if key
        .strip_prefix("ms")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
    {
        name.push('-');
    }
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

/// Renders a scalar declaration value.
///
/// Arrays join with `, ` (font stacks, `var()` fallbacks). Returns `None`
/// for `null` and for objects, which are nested rules rather than values.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_text).collect();
            Some(parts.join(", "))
        }
    }
}

/// Resolves a nested rule key against its parent selector.
///
/// `&` stands for the parent; any other key is a descendant selector.
/// Selector lists on either side are expanded pairwise, parent-major:
/// `.a, .b` nesting `&:hover, p` gives `.a:hover, .a p, .b:hover, .b p`.
pub fn nest_selector(parent: &str, key: &str) -> String {
    let keys = split_selector_list(key);
    let mut selectors = Vec::new();
    for parent in split_selector_list(parent) {
        for key in &keys {
            if key.contains('&') {
                selectors.push(key.replace('&', parent));
            } else {
                selectors.push(format!("{} {}", parent, key));
            }
        }
    }
    selectors.join(", ")
}

/// Splits a selector list on commas outside parentheses and brackets.
fn split_selector_list(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(list[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(list[start..].trim());
    parts.retain(|part| !part.is_empty());
    parts
}

/// Appends `selector { ... }` and its nested rules to `out`.
///
/// Scalar declarations come first as one block; object values follow as
/// nested rules, with `@` keys wrapping the current selector.
pub fn write_rule(out: &mut String, selector: &str, declarations: &Declarations) {
    write_rule_at(out, selector, declarations, 0);
}

fn write_rule_at(out: &mut String, selector: &str, declarations: &Declarations, depth: usize) {
    let indent = "  ".repeat(depth);

    let flat: Vec<(String, String)> = declarations
        .iter()
        .filter_map(|(key, value)| value_text(value).map(|text| (property_name(key), text)))
        .collect();

    if !flat.is_empty() {
        out.push_str(&format!("{}{} {{\n", indent, selector));
        for (property, text) in flat {
            out.push_str(&format!("{}  {}: {};\n", indent, property, text));
        }
        out.push_str(&format!("{}}}\n", indent));
    }

    for (key, value) in declarations {
        let Value::Object(nested) = value else {
            continue;
        };
        if key.starts_with('@') {
            out.push_str(&format!("{}{} {{\n", indent, key));
            write_rule_at(out, selector, nested, depth + 1);
            out.push_str(&format!("{}}}\n", indent));
        } else {
            write_rule_at(out, &nest_selector(selector, key), nested, depth);
        }
    }
}

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::catalogue::{self, VariableDefinition, VariableType};
use crate::color::parse_css_color;

static SIZE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)?(px|em|rem|%|vh|vw)$").expect("valid regex"));
static SPACING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("valid regex"));
static PIXELS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?px$").expect("valid regex"));
static VAR_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^var\(\s*(--[A-Za-z0-9-]+)\s*\)$").expect("valid regex"));
static CHANNELS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})$").expect("valid regex"));
static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)").expect("valid regex"));

/// Outcome of checking one candidate value against one variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            ..Self::default()
        }
    }

    fn reject(&mut self, error: &str, suggestion: Option<&str>) {
        self.is_valid = false;
        self.errors.push(error.to_string());
        if let Some(suggestion) = suggestion {
            self.suggestions.push(suggestion.to_string());
        }
    }
}

/// Validates `value` for the catalogue variable `name`.
pub fn validate(name: &str, value: &str) -> ValidationResult {
    match catalogue::lookup(name) {
        Some(definition) => validate_definition(definition, value),
        None => ValidationResult {
            is_valid: false,
            errors: vec![format!("Unknown CSS variable: {name}")],
            ..ValidationResult::default()
        },
    }
}

/// Type rule first, then advisory range and option checks that never fail the value.
pub fn validate_definition(definition: &VariableDefinition, value: &str) -> ValidationResult {
    let mut result = ValidationResult::valid();

    match definition.kind {
        VariableType::Color => {
            if !is_color(definition, value) {
                result.reject(
                    "Invalid color value",
                    Some("Use hex (#ffffff), rgb(r, g, b), or named colors"),
                );
            }
        }
        VariableType::Size => {
            if !SIZE.is_match(value) {
                result.reject(
                    "Invalid size value",
                    Some("Use format: number + unit (e.g., 16px, 1.5em, 100%)"),
                );
            }
        }
        VariableType::Font => {
            if value.chars().count() < 3 {
                result.reject("Font value too short", None);
            }
        }
        VariableType::Spacing => {
            if !SPACING.is_match(value) {
                result.reject(
                    "Invalid spacing value",
                    Some("Use numeric values (e.g., 1.5, 2, 0.5)"),
                );
            }
        }
        VariableType::Border => {
            if definition.unit == Some("px") && !PIXELS.is_match(value) {
                result.reject(
                    "Invalid border value",
                    Some("Use format: number + px (e.g., 1px, 2px)"),
                );
            }
        }
        VariableType::Shadow => {
            if value.chars().count() < 5 {
                result.reject(
                    "Shadow value too short",
                    Some("Use format: offset-x offset-y blur-radius color"),
                );
            }
        }
        VariableType::Gradient => {
            if !value.contains("gradient") {
                result.reject(
                    "Invalid gradient value",
                    Some("Use linear-gradient() or radial-gradient()"),
                );
            }
        }
    }

    if let (Some(min), Some(max)) = (definition.min_value, definition.max_value) {
        if let (Some(number), Some(min_number), Some(max_number)) =
            (leading_number(value), leading_number(min), leading_number(max))
        {
            if number < min_number {
                result.warnings.push(format!("Value is below minimum ({min})"));
            }
            if number > max_number {
                result.warnings.push(format!("Value is above maximum ({max})"));
            }
        }
    }

    if !definition.options.is_empty() && !definition.options.contains(&value) {
        result.warnings.push(format!(
            "Value should be one of: {}",
            definition.options.join(", ")
        ));
    }

    result
}

fn is_color(definition: &VariableDefinition, value: &str) -> bool {
    if parse_css_color(value).is_some() || is_bare_hex(value) {
        return true;
    }
    if let Some(captures) = VAR_REFERENCE.captures(value) {
        return catalogue::lookup(&captures[1])
            .is_some_and(|target| target.kind == VariableType::Color);
    }
    definition.name.ends_with("-rgb") && is_channel_triplet(value)
}

/// Hex digits without the leading `#`, e.g. `ffffff`.
fn is_bare_hex(value: &str) -> bool {
    matches!(value.len(), 3 | 4 | 6 | 8)
        && value.chars().all(|ch| ch.is_ascii_hexdigit())
        && parse_css_color(&format!("#{value}")).is_some()
}

/// Bare `r, g, b` lists, used by the `*-rgb` variables inside `rgba(var(..), a)`.
fn is_channel_triplet(value: &str) -> bool {
    CHANNELS.captures(value).is_some_and(|captures| {
        (1..=3).all(|index| captures[index].parse::<u16>().is_ok_and(|channel| channel <= 255))
    })
}

/// Numeric prefix of a CSS value, the way `250px` reads as `250`.
fn leading_number(value: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(value)
        .and_then(|found| found.as_str().trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Category;

    #[test]
    fn unknown_variable_is_invalid_for_any_value() {
        for value in ["#ffffff", "", "14px", "anything"] {
            let result = validate("--not-a-variable", value);
            assert!(!result.is_valid);
            assert_eq!(result.errors, vec!["Unknown CSS variable: --not-a-variable"]);
        }
    }

    #[test]
    fn every_default_passes_its_own_type() {
        for definition in catalogue::all() {
            let result = validate(definition.name, definition.default_value);
            assert!(result.is_valid, "{}: {:?}", definition.name, result.errors);
            assert!(result.warnings.is_empty());
        }
    }

    #[test]
    fn accepts_hex_colors() {
        let digits = ['0', '3', '7', 'a', 'c', 'F'];
        for a in digits {
            for b in digits {
                let short = format!("#{a}{b}{a}");
                let long = format!("#{a}{b}{b}{a}{a}{b}");
                assert!(validate("--text-normal", &short).is_valid, "{short}");
                assert!(validate("--text-normal", &long).is_valid, "{long}");
                assert!(validate("--text-normal", &short[1..]).is_valid, "{short}");
                assert!(validate("--text-normal", &long[1..]).is_valid, "{long}");
            }
        }
    }

    #[test]
    fn hex_without_hash_needs_a_valid_length() {
        for value in ["ffffff", "fff", "FFF0", "1e1e1eff"] {
            assert!(validate("--background-primary", value).is_valid, "{value}");
        }
        for value in ["ff", "fffff", "fffffff", "ggg"] {
            assert!(!validate("--background-primary", value).is_valid, "{value}");
        }
    }

    #[test]
    fn accepts_other_color_grammars() {
        for value in ["rgb(10, 20, 30)", "rgba(0, 0, 0, 0.5)", "hsl(200, 50%, 40%)", "tomato"] {
            assert!(validate("--background-primary", value).is_valid, "{value}");
        }
    }

    #[test]
    fn rejects_unparseable_colors() {
        for value in ["", "#12", "#ggg", "blurple", "rgb(", "14px"] {
            let result = validate("--background-primary", value);
            assert!(!result.is_valid, "{value}");
            assert_eq!(result.errors, vec!["Invalid color value"]);
            assert_eq!(result.suggestions.len(), 1);
        }
    }

    #[test]
    fn color_var_reference_must_target_a_color() {
        assert!(validate("--button-background", "var(--interactive-accent)").is_valid);
        assert!(!validate("--button-background", "var(--radius-m)").is_valid);
        assert!(!validate("--button-background", "var(--unknown)").is_valid);
    }

    #[test]
    fn channel_triplet_only_for_rgb_variables() {
        assert!(validate("--background-modifier-error-rgb", "12, 34, 56").is_valid);
        assert!(!validate("--background-modifier-error-rgb", "300, 0, 0").is_valid);
        assert!(!validate("--background-modifier-error", "12, 34, 56").is_valid);
    }

    #[test]
    fn size_requires_number_and_unit() {
        for value in ["16px", "1.5em", "2rem", "100%", "50vh", "10vw"] {
            assert!(validate("--font-ui", value).is_valid, "{value}");
        }
        let result = validate("--font-ui", "16");
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Invalid size value"]);
        assert!(!validate("--font-ui", "-4px").is_valid);
    }

    #[test]
    fn font_is_permissive() {
        assert!(validate("--font-text", "Inter").is_valid);
        let result = validate("--font-text", "ab");
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Font value too short"]);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn spacing_is_unitless() {
        assert!(validate("--line-height-normal", "1.6").is_valid);
        assert!(!validate("--line-height-normal", "1.6em").is_valid);
    }

    #[test]
    fn border_checks_pixels_only_with_px_unit() {
        assert!(validate("--radius-m", "3px").is_valid);
        let result = validate("--radius-m", "3em");
        assert_eq!(result.errors, vec!["Invalid border value"]);
        assert!(validate("--button-border-radius", "0.5em").is_valid);
    }

    #[test]
    fn shadow_needs_some_length() {
        assert!(validate("--modal-shadow", "0 1px 2px red").is_valid);
        assert!(!validate("--modal-shadow", "none").is_valid);
    }

    #[test]
    fn gradient_must_mention_gradient() {
        let definition = VariableDefinition::new(
            "--test-gradient",
            "Gradient",
            Category::Colors,
            VariableType::Gradient,
            "linear-gradient(red, blue)",
            "",
        );
        assert!(validate_definition(&definition, "radial-gradient(red, blue)").is_valid);
        let result = validate_definition(&definition, "red");
        assert_eq!(result.errors, vec!["Invalid gradient value"]);
    }

    #[test]
    fn range_violations_are_warnings() {
        let definition = VariableDefinition::new(
            "--test-width",
            "Width",
            Category::Layout,
            VariableType::Size,
            "250px",
            "",
        )
        .unit("px")
        .range("150", "600");

        let low = validate_definition(&definition, "100px");
        assert!(low.is_valid);
        assert_eq!(low.warnings, vec!["Value is below minimum (150)"]);

        let high = validate_definition(&definition, "700px");
        assert!(high.is_valid);
        assert_eq!(high.warnings, vec!["Value is above maximum (600)"]);

        let bad = validate_definition(&definition, "wide");
        assert!(!bad.is_valid);
        assert!(bad.warnings.is_empty());
    }

    #[test]
    fn options_mismatch_is_a_warning() {
        let definition = VariableDefinition::new(
            "--test-weight",
            "Weight",
            Category::Typography,
            VariableType::Font,
            "normal",
            "",
        )
        .options(&["normal", "bold"]);

        assert!(validate_definition(&definition, "bold").warnings.is_empty());
        let result = validate_definition(&definition, "heavy");
        assert!(result.is_valid);
        assert_eq!(result.warnings, vec!["Value should be one of: normal, bold"]);
    }

    #[test]
    fn leading_number_reads_prefix() {
        assert_eq!(leading_number("250px"), Some(250.0));
        assert_eq!(leading_number("1.5"), Some(1.5));
        assert_eq!(leading_number("px"), None);
    }
}

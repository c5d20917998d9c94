use std::fmt::Write as _;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::catalogue::Category;
use crate::config::{
    ColorPalette, ThemeConfiguration, ThemeManifest, ThemePatch, TypographySettings,
};
use crate::error::ThemeError;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("valid regex"));
static RGBA_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba?\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*(?:,\s*[\d.]+\s*)?\)$").expect("valid regex")
});
static PIXEL_FONT_SIZE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+px$").expect("valid regex"));

const GENERATED_DESCRIPTION: &str = "Generated from theme configuration";

/// Whole-configuration structural check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ConfigValidation {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// One `--name: value` pair emitted into the generated `:root` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssVariable {
    pub name: String,
    pub value: String,
    pub category: Category,
    pub description: String,
    pub default_value: String,
}

/// The terminal artifact of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeExport {
    pub manifest: ThemeManifest,
    pub css: String,
    pub variables: Vec<CssVariable>,
}

/// File contents ready to be written: pretty-printed `manifest.json` and `theme.css`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFiles {
    pub manifest: String,
    pub css: String,
}

impl ThemeFiles {
    pub fn from_export(export: &ThemeExport) -> Result<Self, ThemeError> {
        Ok(Self {
            manifest: serde_json::to_string_pretty(&export.manifest)?,
            css: export.css.clone(),
        })
    }
}

/// The subset of configuration the live preview reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewData {
    pub colors: ColorPalette,
    pub typography: TypographySettings,
}

/// Owns one theme configuration and renders it into a stylesheet.
#[derive(Debug, Clone, Default)]
pub struct ThemeEngine {
    configuration: ThemeConfiguration,
}

impl ThemeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configuration(configuration: ThemeConfiguration) -> Self {
        Self { configuration }
    }

    /// Returns a copy; edits to it never reach the engine.
    pub fn configuration(&self) -> ThemeConfiguration {
        self.configuration.clone()
    }

    pub fn update_configuration(&mut self, patch: ThemePatch) {
        self.configuration.apply(patch);
    }

    pub fn replace_configuration(&mut self, configuration: ThemeConfiguration) {
        self.configuration = configuration;
    }

    pub fn reset_to_default(&mut self) {
        self.configuration = ThemeConfiguration::default();
        log::debug!("theme configuration reset to defaults");
    }

    pub fn validate_configuration(&self) -> ConfigValidation {
        let mut errors = Vec::new();
        let config = &self.configuration;

        if config.manifest.name.trim().is_empty() {
            errors.push("Theme name is required".to_string());
        }
        if config.manifest.author.trim().is_empty() {
            errors.push("Theme author is required".to_string());
        }

        for (key, value) in config.colors.entries() {
            if !HEX_COLOR.is_match(value) && !RGBA_COLOR.is_match(value) {
                errors.push(format!("Invalid color format for {key}: {value}"));
            }
        }

        if !PIXEL_FONT_SIZE.is_match(&config.typography.font_size) {
            errors.push("Font size must be in pixels (e.g., \"14px\")".to_string());
        }

        ConfigValidation::from_errors(errors)
    }

    /// Maps configuration fields onto the host application's variable names.
    pub fn css_variables(&self) -> Vec<CssVariable> {
        let colors = &self.configuration.colors;
        let typography = &self.configuration.typography;

        let color_mappings = [
            ("--background-primary", &colors.background),
            ("--background-secondary", &colors.surface),
            ("--text-normal", &colors.text),
            ("--text-muted", &colors.text_muted),
            ("--text-accent", &colors.primary),
            ("--text-accent-hover", &colors.accent),
            ("--interactive-accent", &colors.primary),
            ("--interactive-accent-hover", &colors.accent),
            ("--background-modifier-border", &colors.border),
            ("--background-modifier-box-shadow", &colors.shadow),
        ];
        let typography_mappings = [
            ("--font-text", &typography.font_family),
            ("--font-monospace", &typography.font_family_mono),
            ("--font-text-size", &typography.font_size),
            ("--line-height-normal", &typography.line_height),
            ("--font-weight-normal", &typography.font_weight),
            ("--font-weight-bold", &typography.font_weight_bold),
        ];

        let tagged = color_mappings
            .into_iter()
            .map(|mapping| (Category::Colors, mapping))
            .chain(
                typography_mappings
                    .into_iter()
                    .map(|mapping| (Category::Typography, mapping)),
            );

        tagged
            .map(|(category, (name, value))| CssVariable {
                name: name.to_string(),
                value: value.clone(),
                category,
                description: GENERATED_DESCRIPTION.to_string(),
                default_value: value.clone(),
            })
            .collect()
    }

    /// Renders the full stylesheet; identical configurations yield identical bytes.
    pub fn generate_css(&self) -> String {
        let manifest = &self.configuration.manifest;
        let mut css = String::new();

        css.push_str("/* Generated by Obsidian Theme Builder */\n");
        let _ = writeln!(css, "/* Theme: {} */", manifest.name);
        let _ = writeln!(css, "/* Version: {} */\n", manifest.version);

        css.push_str(":root {\n");
        for variable in self.css_variables() {
            let _ = writeln!(css, "  {}: {};", variable.name, variable.value);
        }
        css.push_str("}\n\n");

        css.push_str(&self.component_styles());
        css
    }

    fn component_styles(&self) -> String {
        let components = &self.configuration.components;
        let button = &components.button;
        let input = &components.input;
        let modal = &components.modal;
        let mut css = String::new();

        css.push_str("/* Button Styles */\n");
        css.push_str(".mod-cta {\n");
        let _ = writeln!(css, "  background-color: {};", button.background_color);
        let _ = writeln!(css, "  color: {};", button.text_color);
        let _ = writeln!(css, "  border: 1px solid {};", button.border_color);
        let _ = writeln!(css, "  border-radius: {};", button.border_radius);
        css.push_str("}\n\n");

        css.push_str("/* Input Styles */\n");
        css.push_str("input, textarea, select {\n");
        let _ = writeln!(css, "  background-color: {};", input.background_color);
        let _ = writeln!(css, "  color: {};", input.text_color);
        let _ = writeln!(css, "  border: 1px solid {};", input.border_color);
        css.push_str("}\n\n");
        css.push_str("input:focus, textarea:focus, select:focus {\n");
        let _ = writeln!(css, "  border-color: {};", input.focus_color);
        css.push_str("  outline: none;\n");
        css.push_str("}\n\n");

        css.push_str("/* Modal Styles */\n");
        css.push_str(".modal {\n");
        let _ = writeln!(css, "  background-color: {};", modal.background_color);
        let _ = writeln!(css, "  border: 1px solid {};", modal.border_color);
        let _ = writeln!(css, "  box-shadow: 0 4px 12px {};", modal.shadow_color);
        css.push_str("}\n\n");

        css
    }

    /// Fails with every structural error when the configuration is invalid.
    pub fn export_theme(&self) -> Result<ThemeExport, ThemeError> {
        let validation = self.validate_configuration();
        if !validation.is_valid {
            log::warn!("export rejected: {} validation error(s)", validation.errors.len());
            return Err(ThemeError::Validation(validation.errors));
        }

        let export = ThemeExport {
            manifest: self.configuration.manifest.clone(),
            css: self.generate_css(),
            variables: self.css_variables(),
        };
        log::info!(
            "exported theme {:?} ({} bytes of CSS)",
            export.manifest.name,
            export.css.len()
        );
        Ok(export)
    }

    pub fn export_theme_files(&self) -> Result<ThemeFiles, ThemeError> {
        ThemeFiles::from_export(&self.export_theme()?)
    }

    /// Replaces the manifest from `manifest_json`. The stylesheet is not parsed back.
    pub fn import_theme(&mut self, manifest_json: &str, css: &str) -> Result<(), ThemeError> {
        let manifest = manifest_from_json(manifest_json)?;

        log::info!(
            "imported manifest for {:?}; ignoring {} bytes of CSS",
            manifest.name,
            css.len()
        );
        self.configuration.manifest = manifest;
        Ok(())
    }

    pub fn preview_data(&self) -> PreviewData {
        PreviewData {
            colors: self.configuration.colors.clone(),
            typography: self.configuration.typography.clone(),
        }
    }
}

/// `null` or missing fields read as empty; numbers and booleans keep their JSON text.
fn manifest_from_json(json: &str) -> Result<ThemeManifest, ThemeError> {
    let value: Value =
        serde_json::from_str(json).map_err(|error| ThemeError::Import(error.to_string()))?;
    let text = |key: &str| match value.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(string)) => string.clone(),
        Some(other) => other.to_string(),
    };

    let manifest = ThemeManifest {
        name: text("name"),
        version: text("version"),
        author: text("author"),
        description: text("description"),
        min_app_version: text("minAppVersion"),
    };
    if manifest.name.is_empty() || manifest.author.is_empty() {
        return Err(ThemeError::Import(
            "Invalid manifest: missing required fields".to_string(),
        ));
    }
    Ok(manifest)
}

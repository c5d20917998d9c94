use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Theme package metadata, serialized exactly as the host application's `manifest.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeManifest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub min_app_version: String,
}

impl Default for ThemeManifest {
    fn default() -> Self {
        Self {
            name: "Custom Theme".to_string(),
            version: "1.0.0".to_string(),
            author: "Theme Builder User".to_string(),
            description: "A custom theme created with Obsidian Theme Builder".to_string(),
            min_app_version: "1.0.0".to_string(),
        }
    }
}

// Sub-groups default each missing field to an empty string rather than to the
// shipped value: replacing a group with a partial one drops what was left out.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    #[serde(default)]
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
    #[serde(default)]
    pub accent: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub surface: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub text_muted: String,
    #[serde(default)]
    pub border: String,
    #[serde(default)]
    pub shadow: String,
}

impl ColorPalette {
    /// Field keys paired with their values, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("textMuted", self.text_muted.as_str()),
            ("border", self.border.as_str()),
            ("shadow", self.shadow.as_str()),
        ]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#007acc".to_string(),
            secondary: "#6c757d".to_string(),
            accent: "#28a745".to_string(),
            background: "#ffffff".to_string(),
            surface: "#f8f9fa".to_string(),
            text: "#212529".to_string(),
            text_muted: "#6c757d".to_string(),
            border: "#dee2e6".to_string(),
            shadow: "rgba(0, 0, 0, 0.1)".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypographySettings {
    #[serde(default)]
    pub font_family: String,
    #[serde(default)]
    pub font_family_mono: String,
    #[serde(default)]
    pub font_size: String,
    #[serde(default)]
    pub line_height: String,
    #[serde(default)]
    pub font_weight: String,
    #[serde(default)]
    pub font_weight_bold: String,
}

impl Default for TypographySettings {
    fn default() -> Self {
        Self {
            font_family:
                "Inter, -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif"
                    .to_string(),
            font_family_mono: "JetBrains Mono, Consolas, \"Courier New\", monospace".to_string(),
            font_size: "14px".to_string(),
            line_height: "1.6".to_string(),
            font_weight: "400".to_string(),
            font_weight_bold: "600".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpacingSettings {
    #[serde(default)]
    pub spacing: String,
    #[serde(default)]
    pub border_radius: String,
    #[serde(default)]
    pub border_width: String,
}

impl Default for SpacingSettings {
    fn default() -> Self {
        Self {
            spacing: "8px".to_string(),
            border_radius: "4px".to_string(),
            border_width: "1px".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    #[serde(default)]
    pub sidebar_width: String,
    #[serde(default)]
    pub header_height: String,
    #[serde(default)]
    pub content_padding: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            sidebar_width: "250px".to_string(),
            header_height: "48px".to_string(),
            content_padding: "16px".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    #[serde(default)]
    pub background_color: String,
    #[serde(default)]
    pub text_color: String,
    #[serde(default)]
    pub border_color: String,
    #[serde(default)]
    pub border_radius: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputStyle {
    #[serde(default)]
    pub background_color: String,
    #[serde(default)]
    pub text_color: String,
    #[serde(default)]
    pub border_color: String,
    #[serde(default)]
    pub focus_color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModalStyle {
    #[serde(default)]
    pub background_color: String,
    #[serde(default)]
    pub border_color: String,
    #[serde(default)]
    pub shadow_color: String,
}

/// Per-component overrides rendered into the hand-authored rule blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentSettings {
    #[serde(default)]
    pub button: ButtonStyle,
    #[serde(default)]
    pub input: InputStyle,
    #[serde(default)]
    pub modal: ModalStyle,
}

impl Default for ComponentSettings {
    fn default() -> Self {
        Self {
            button: ButtonStyle {
                background_color: "#007acc".to_string(),
                text_color: "#ffffff".to_string(),
                border_color: "#007acc".to_string(),
                border_radius: "4px".to_string(),
            },
            input: InputStyle {
                background_color: "#ffffff".to_string(),
                text_color: "#212529".to_string(),
                border_color: "#dee2e6".to_string(),
                focus_color: "#007acc".to_string(),
            },
            modal: ModalStyle {
                background_color: "#ffffff".to_string(),
                border_color: "#dee2e6".to_string(),
                shadow_color: "rgba(0, 0, 0, 0.15)".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// The live, user-editable record of theme settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeConfiguration {
    #[serde(default)]
    pub mode: ThemeMode,
    pub manifest: ThemeManifest,
    pub colors: ColorPalette,
    pub typography: TypographySettings,
    pub spacing: SpacingSettings,
    pub layout: LayoutSettings,
    pub components: ComponentSettings,
}

/// A partial update; every present key replaces the whole corresponding group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ThemeManifest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorPalette>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographySettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ThemeMode>,
}

impl ThemePatch {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A patch carrying the full top-level group named `key` from `config`.
    pub fn group(config: &ThemeConfiguration, key: &str) -> Option<Self> {
        let mut patch = Self::default();
        match key {
            "manifest" => patch.manifest = Some(config.manifest.clone()),
            "colors" => patch.colors = Some(config.colors.clone()),
            "typography" => patch.typography = Some(config.typography.clone()),
            "spacing" => patch.spacing = Some(config.spacing.clone()),
            "layout" => patch.layout = Some(config.layout.clone()),
            "components" => patch.components = Some(config.components.clone()),
            "mode" => patch.mode = Some(config.mode),
            _ => return None,
        }
        Some(patch)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ThemeConfiguration {
    /// Replaces each group present in `patch`; nested fields are never merged.
    pub fn apply(&mut self, patch: ThemePatch) {
        if let Some(manifest) = patch.manifest {
            self.manifest = manifest;
        }
        if let Some(colors) = patch.colors {
            self.colors = colors;
        }
        if let Some(typography) = patch.typography {
            self.typography = typography;
        }
        if let Some(spacing) = patch.spacing {
            self.spacing = spacing;
        }
        if let Some(layout) = patch.layout {
            self.layout = layout;
        }
        if let Some(components) = patch.components {
            self.components = components;
        }
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
    }

    fn leaf_mut(&mut self, path: &[&str]) -> Option<&mut String> {
        let leaf = match path {
            ["manifest", "name"] => &mut self.manifest.name,
            ["manifest", "version"] => &mut self.manifest.version,
            ["manifest", "author"] => &mut self.manifest.author,
            ["manifest", "description"] => &mut self.manifest.description,
            ["manifest", "minAppVersion"] => &mut self.manifest.min_app_version,
            ["colors", "primary"] => &mut self.colors.primary,
            ["colors", "secondary"] => &mut self.colors.secondary,
            ["colors", "accent"] => &mut self.colors.accent,
            ["colors", "background"] => &mut self.colors.background,
            ["colors", "surface"] => &mut self.colors.surface,
            ["colors", "text"] => &mut self.colors.text,
            ["colors", "textMuted"] => &mut self.colors.text_muted,
            ["colors", "border"] => &mut self.colors.border,
            ["colors", "shadow"] => &mut self.colors.shadow,
            ["typography", "fontFamily"] => &mut self.typography.font_family,
            ["typography", "fontFamilyMono"] => &mut self.typography.font_family_mono,
            ["typography", "fontSize"] => &mut self.typography.font_size,
            ["typography", "lineHeight"] => &mut self.typography.line_height,
            ["typography", "fontWeight"] => &mut self.typography.font_weight,
            ["typography", "fontWeightBold"] => &mut self.typography.font_weight_bold,
            ["spacing", "spacing"] => &mut self.spacing.spacing,
            ["spacing", "borderRadius"] => &mut self.spacing.border_radius,
            ["spacing", "borderWidth"] => &mut self.spacing.border_width,
            ["layout", "sidebarWidth"] => &mut self.layout.sidebar_width,
            ["layout", "headerHeight"] => &mut self.layout.header_height,
            ["layout", "contentPadding"] => &mut self.layout.content_padding,
            ["components", "button", "backgroundColor"] => {
                &mut self.components.button.background_color
            }
            ["components", "button", "textColor"] => &mut self.components.button.text_color,
            ["components", "button", "borderColor"] => &mut self.components.button.border_color,
            ["components", "button", "borderRadius"] => &mut self.components.button.border_radius,
            ["components", "input", "backgroundColor"] => {
                &mut self.components.input.background_color
            }
            ["components", "input", "textColor"] => &mut self.components.input.text_color,
            ["components", "input", "borderColor"] => &mut self.components.input.border_color,
            ["components", "input", "focusColor"] => &mut self.components.input.focus_color,
            ["components", "modal", "backgroundColor"] => {
                &mut self.components.modal.background_color
            }
            ["components", "modal", "borderColor"] => &mut self.components.modal.border_color,
            ["components", "modal", "shadowColor"] => &mut self.components.modal.shadow_color,
            _ => return None,
        };
        Some(leaf)
    }
}

/// Returns a copy of `config` with the single leaf at `path` set to `value`.
///
/// Keys use the serialized (camelCase) names, e.g. `["colors", "textMuted"]`.
pub fn set_path(
    config: &ThemeConfiguration,
    path: &[&str],
    value: &str,
) -> Result<ThemeConfiguration, ThemeError> {
    let mut next = config.clone();
    if let ["mode"] = path {
        next.mode =
            ThemeMode::from_name(value).ok_or_else(|| ThemeError::UnknownPath(path.join(".")))?;
        return Ok(next);
    }
    let leaf = next
        .leaf_mut(path)
        .ok_or_else(|| ThemeError::UnknownPath(path.join(".")))?;
    *leaf = value.to_string();
    Ok(next)
}

/// Reads a configuration saved with [`save`].
pub fn load(path: &Path) -> Result<ThemeConfiguration, ThemeError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Writes `config` as TOML, creating parent directories as needed.
pub fn save(path: &Path, config: &ThemeConfiguration) -> Result<(), ThemeError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn apply_replaces_whole_group() {
        let mut config = ThemeConfiguration::default();
        let patch = ThemePatch::from_json(r##"{"colors": {"primary": "#fff"}}"##).unwrap();
        config.apply(patch);

        assert_eq!(config.colors.primary, "#fff");
        assert_eq!(config.colors.secondary, "");
        assert_eq!(config.typography, TypographySettings::default());
    }

    #[test]
    fn partial_components_leave_missing_styles_empty() {
        let mut config = ThemeConfiguration::default();
        let patch =
            ThemePatch::from_json(r##"{"components": {"button": {"textColor": "#000"}}}"##)
                .unwrap();
        config.apply(patch);

        assert_eq!(config.components.button.text_color, "#000");
        assert_eq!(config.components.button.background_color, "");
        assert_eq!(config.components.modal, ModalStyle::default());
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut config = ThemeConfiguration::default();
        let patch = ThemePatch::from_json("{}").unwrap();
        assert!(patch.is_empty());
        config.apply(patch);
        assert_eq!(config, ThemeConfiguration::default());
    }

    #[test]
    fn set_path_updates_one_leaf() {
        let config = ThemeConfiguration::default();
        let next = set_path(&config, &["colors", "textMuted"], "#999999").unwrap();

        assert_eq!(next.colors.text_muted, "#999999");
        assert_eq!(next.colors.primary, config.colors.primary);
        assert_eq!(config.colors.text_muted, "#6c757d");
    }

    #[test]
    fn set_path_reaches_nested_components() {
        let config = ThemeConfiguration::default();
        let next = set_path(&config, &["components", "modal", "shadowColor"], "#000").unwrap();
        assert_eq!(next.components.modal.shadow_color, "#000");
    }

    #[test]
    fn set_path_sets_mode() {
        let config = ThemeConfiguration::default();
        let next = set_path(&config, &["mode"], "dark").unwrap();
        assert_eq!(next.mode, ThemeMode::Dark);
        assert!(set_path(&config, &["mode"], "sepia").is_err());
    }

    #[test]
    fn set_path_rejects_unknown_path() {
        let config = ThemeConfiguration::default();
        let result = set_path(&config, &["colors", "nope"], "#fff");
        assert!(matches!(result, Err(ThemeError::UnknownPath(path)) if path == "colors.nope"));
    }

    #[test]
    fn group_patch_carries_full_group() {
        let config = ThemeConfiguration::default();
        let patch = ThemePatch::group(&config, "layout").unwrap();
        assert_eq!(patch.layout, Some(config.layout.clone()));
        assert!(patch.colors.is_none());
        assert!(ThemePatch::group(&config, "nope").is_none());
    }

    #[test]
    fn manifest_serializes_camel_case() {
        let json = serde_json::to_value(ThemeManifest::default()).unwrap();
        assert_eq!(json["minAppVersion"], "1.0.0");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn toml_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("themes/dark.toml");
        let mut config = ThemeConfiguration::default();
        config.mode = ThemeMode::Dark;
        config.colors.background = "#1e1e1e".to_string();

        save(&path, &config).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, config);
    }
}

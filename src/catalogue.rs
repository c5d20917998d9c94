use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::Serialize;

/// Groups the catalogue is organised into, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Colors,
    Typography,
    Spacing,
    Layout,
    Components,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Colors,
        Category::Typography,
        Category::Spacing,
        Category::Layout,
        Category::Components,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Typography => "typography",
            Self::Spacing => "spacing",
            Self::Layout => "layout",
            Self::Components => "components",
        }
    }

    /// Capitalised name used in generated CSS section comments.
    pub fn label(self) -> &'static str {
        match self {
            Self::Colors => "Colors",
            Self::Typography => "Typography",
            Self::Spacing => "Spacing",
            Self::Layout => "Layout",
            Self::Components => "Components",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }
}

/// Semantic type of a variable; decides which validation rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    Color,
    Size,
    Font,
    Spacing,
    Border,
    Shadow,
    Gradient,
}

/// One named style token of the target application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDefinition {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: VariableType,
    pub default_value: &'static str,
    pub unit: Option<&'static str>,
    pub min_value: Option<&'static str>,
    pub max_value: Option<&'static str>,
    pub options: &'static [&'static str],
    pub dependencies: &'static [&'static str],
}

impl VariableDefinition {
    pub const fn new(
        name: &'static str,
        display_name: &'static str,
        category: Category,
        kind: VariableType,
        default_value: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            display_name,
            description,
            category,
            kind,
            default_value,
            unit: None,
            min_value: None,
            max_value: None,
            options: &[],
            dependencies: &[],
        }
    }

    pub const fn unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    pub const fn range(mut self, min: &'static str, max: &'static str) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    pub const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    pub const fn depends_on(mut self, dependencies: &'static [&'static str]) -> Self {
        self.dependencies = dependencies;
        self
    }
}

use Category::{Colors, Components, Layout, Spacing as SpacingCategory, Typography};
use VariableType::{Border, Color, Font, Shadow, Size, Spacing};

const SYSTEM_SANS: &str =
    "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif";

#[rustfmt::skip]
static CATALOGUE: &[VariableDefinition] = &[
    // Backgrounds
    VariableDefinition::new("--background-primary", "Primary Background", Colors, Color, "#ffffff",
        "Main background color for the application"),
    VariableDefinition::new("--background-primary-alt", "Primary Background Alt", Colors, Color, "#f7f6f3",
        "Alternative primary background color"),
    VariableDefinition::new("--background-secondary", "Secondary Background", Colors, Color, "#fafafa",
        "Secondary background color for panels and sidebars"),
    VariableDefinition::new("--background-secondary-alt", "Secondary Background Alt", Colors, Color, "#f0f0f0",
        "Alternative secondary background color"),
    VariableDefinition::new("--background-modifier-border", "Border Background", Colors, Color, "#e0e0e0",
        "Background color for borders and dividers"),
    VariableDefinition::new("--background-modifier-form-field", "Form Field Background", Colors, Color, "#ffffff",
        "Background color for form fields and inputs"),
    VariableDefinition::new("--background-modifier-form-field-highlighted", "Form Field Highlighted Background",
        Colors, Color, "#f0f0f0", "Background color for highlighted form fields"),
    VariableDefinition::new("--background-modifier-box-shadow", "Box Shadow Background", Colors, Color,
        "rgba(0, 0, 0, 0.1)", "Background color for box shadows"),
    VariableDefinition::new("--background-modifier-success", "Success Background", Colors, Color, "#4caf50",
        "Background color for success states"),
    VariableDefinition::new("--background-modifier-error", "Error Background", Colors, Color, "#f44336",
        "Background color for error states"),
    VariableDefinition::new("--background-modifier-error-rgb", "Error Background RGB", Colors, Color, "244, 67, 54",
        "RGB values for error background color"),
    VariableDefinition::new("--background-modifier-cover", "Cover Background", Colors, Color, "rgba(0, 0, 0, 0.05)",
        "Background color for overlays and covers"),
    // Text
    VariableDefinition::new("--text-normal", "Normal Text", Colors, Color, "#2e3338",
        "Primary text color for normal content"),
    VariableDefinition::new("--text-muted", "Muted Text", Colors, Color, "#787774",
        "Secondary text color for less important content"),
    VariableDefinition::new("--text-faint", "Faint Text", Colors, Color, "#9b9a97",
        "Very subtle text color for tertiary content"),
    VariableDefinition::new("--text-accent", "Accent Text", Colors, Color, "#7b68ee",
        "Accent color for highlighted text and links"),
    VariableDefinition::new("--text-accent-hover", "Accent Text Hover", Colors, Color, "#6a5acd",
        "Accent color for hover states"),
    VariableDefinition::new("--text-on-accent", "Text on Accent", Colors, Color, "#ffffff",
        "Text color when on accent backgrounds"),
    VariableDefinition::new("--text-selection", "Selection Text", Colors, Color, "#ffffff",
        "Text color for selected content"),
    VariableDefinition::new("--text-highlight-bg", "Highlight Background", Colors, Color, "#ffeb3b",
        "Background color for highlighted text"),
    VariableDefinition::new("--text-highlight-bg-active", "Active Highlight Background", Colors, Color, "#ffc107",
        "Background color for active highlighted text"),
    // Interactive states
    VariableDefinition::new("--interactive-normal", "Normal Interactive", Colors, Color, "#4a9eff",
        "Color for normal interactive elements"),
    VariableDefinition::new("--interactive-hover", "Hover Interactive", Colors, Color, "#3b8be6",
        "Color for hover states of interactive elements"),
    VariableDefinition::new("--interactive-accent", "Accent Interactive", Colors, Color, "#7b68ee",
        "Accent color for interactive elements"),
    VariableDefinition::new("--interactive-accent-hover", "Accent Interactive Hover", Colors, Color, "#6a5acd",
        "Accent hover color for interactive elements"),
    VariableDefinition::new("--interactive-success", "Success Interactive", Colors, Color, "#4caf50",
        "Success color for interactive elements"),
    // Font families
    VariableDefinition::new("--font-text", "Text Font", Typography, Font, SYSTEM_SANS,
        "Primary font family for text content"),
    VariableDefinition::new("--font-monospace", "Monospace Font", Typography, Font,
        "\"SF Mono\", Monaco, \"Cascadia Code\", \"Roboto Mono\", Consolas, \"Courier New\", monospace",
        "Monospace font family for code and technical content"),
    VariableDefinition::new("--font-interface", "Interface Font", Typography, Font, SYSTEM_SANS,
        "Font family for interface elements"),
    // Font sizes
    VariableDefinition::new("--font-smallest", "Smallest Font Size", Typography, Size, "10px",
        "Smallest font size for very small text").unit("px"),
    VariableDefinition::new("--font-smaller", "Smaller Font Size", Typography, Size, "12px",
        "Smaller font size for secondary text").unit("px"),
    VariableDefinition::new("--font-small", "Small Font Size", Typography, Size, "13px",
        "Small font size for captions and notes").unit("px"),
    VariableDefinition::new("--font-ui", "UI Font Size", Typography, Size, "14px",
        "Standard font size for user interface elements").unit("px"),
    VariableDefinition::new("--font-ui-smaller", "Smaller UI Font Size", Typography, Size, "12px",
        "Smaller font size for compact UI elements").unit("px"),
    VariableDefinition::new("--font-ui-small", "Small UI Font Size", Typography, Size, "13px",
        "Small font size for UI elements").unit("px"),
    VariableDefinition::new("--font-ui-medium", "Medium UI Font Size", Typography, Size, "15px",
        "Medium font size for UI elements").unit("px"),
    VariableDefinition::new("--font-ui-large", "Large UI Font Size", Typography, Size, "16px",
        "Large font size for UI elements").unit("px"),
    VariableDefinition::new("--font-ui-larger", "Larger UI Font Size", Typography, Size, "18px",
        "Larger font size for UI elements").unit("px"),
    // Line heights
    VariableDefinition::new("--line-height-normal", "Normal Line Height", Typography, Spacing, "1.5",
        "Normal line height for text content"),
    VariableDefinition::new("--line-height-tight", "Tight Line Height", Typography, Spacing, "1.3",
        "Tight line height for compact text"),
    VariableDefinition::new("--line-height-loose", "Loose Line Height", Typography, Spacing, "1.7",
        "Loose line height for spacious text"),
    // Spacing scale
    VariableDefinition::new("--size-2-1", "Extra Small Size", SpacingCategory, Size, "2px",
        "Extra small spacing unit").unit("px"),
    VariableDefinition::new("--size-2-2", "Small Size", SpacingCategory, Size, "4px",
        "Small spacing unit").unit("px"),
    VariableDefinition::new("--size-2-3", "Medium Size", SpacingCategory, Size, "6px",
        "Medium spacing unit").unit("px"),
    VariableDefinition::new("--size-2-4", "Large Size", SpacingCategory, Size, "8px",
        "Large spacing unit").unit("px"),
    VariableDefinition::new("--size-2-5", "Extra Large Size", SpacingCategory, Size, "10px",
        "Extra large spacing unit").unit("px"),
    VariableDefinition::new("--size-2-6", "2X Large Size", SpacingCategory, Size, "12px",
        "2X large spacing unit").unit("px"),
    VariableDefinition::new("--size-2-7", "3X Large Size", SpacingCategory, Size, "14px",
        "3X large spacing unit").unit("px"),
    VariableDefinition::new("--size-2-8", "4X Large Size", SpacingCategory, Size, "16px",
        "4X large spacing unit").unit("px"),
    VariableDefinition::new("--size-2-9", "5X Large Size", SpacingCategory, Size, "18px",
        "5X large spacing unit").unit("px"),
    VariableDefinition::new("--size-2-10", "6X Large Size", SpacingCategory, Size, "20px",
        "6X large spacing unit").unit("px"),
    VariableDefinition::new("--size-2-11", "7X Large Size", SpacingCategory, Size, "22px",
        "7X large spacing unit").unit("px"),
    VariableDefinition::new("--size-2-12", "8X Large Size", SpacingCategory, Size, "24px",
        "8X large spacing unit").unit("px"),
    // Radii
    VariableDefinition::new("--radius-s", "Small Border Radius", SpacingCategory, Border, "2px",
        "Small border radius for subtle rounded corners").unit("px"),
    VariableDefinition::new("--radius-m", "Medium Border Radius", SpacingCategory, Border, "4px",
        "Medium border radius for standard rounded corners").unit("px"),
    VariableDefinition::new("--radius-l", "Large Border Radius", SpacingCategory, Border, "6px",
        "Large border radius for prominent rounded corners").unit("px"),
    // Layout
    VariableDefinition::new("--sidebar-width", "Sidebar Width", Layout, Size, "250px",
        "Width of the main sidebar").unit("px"),
    VariableDefinition::new("--sidebar-tab-width", "Sidebar Tab Width", Layout, Size, "30px",
        "Width of sidebar tabs").unit("px"),
    VariableDefinition::new("--header-height", "Header Height", Layout, Size, "40px",
        "Height of the main header").unit("px"),
    VariableDefinition::new("--content-padding", "Content Padding", Layout, Size, "20px",
        "Padding around main content area").unit("px"),
    // Buttons
    VariableDefinition::new("--button-background", "Button Background", Components, Color,
        "var(--interactive-normal)", "Background color for buttons")
        .depends_on(&["--interactive-normal"]),
    VariableDefinition::new("--button-background-hover", "Button Background Hover", Components, Color,
        "var(--interactive-hover)", "Background color for button hover states")
        .depends_on(&["--interactive-hover"]),
    VariableDefinition::new("--button-background-active", "Button Background Active", Components, Color,
        "var(--interactive-accent)", "Background color for active button states")
        .depends_on(&["--interactive-accent"]),
    VariableDefinition::new("--button-border-width", "Button Border Width", Components, Border, "1px",
        "Border width for buttons").unit("px"),
    VariableDefinition::new("--button-border-radius", "Button Border Radius", Components, Border,
        "var(--radius-m)", "Border radius for buttons")
        .depends_on(&["--radius-m"]),
    // Inputs
    VariableDefinition::new("--input-background", "Input Background", Components, Color,
        "var(--background-modifier-form-field)", "Background color for input fields")
        .depends_on(&["--background-modifier-form-field"]),
    VariableDefinition::new("--input-border-width", "Input Border Width", Components, Border, "1px",
        "Border width for input fields").unit("px"),
    VariableDefinition::new("--input-border-radius", "Input Border Radius", Components, Border,
        "var(--radius-s)", "Border radius for input fields")
        .depends_on(&["--radius-s"]),
    // Modals
    VariableDefinition::new("--modal-background", "Modal Background", Components, Color,
        "var(--background-primary)", "Background color for modal dialogs")
        .depends_on(&["--background-primary"]),
    VariableDefinition::new("--modal-border-width", "Modal Border Width", Components, Border, "1px",
        "Border width for modal dialogs").unit("px"),
    VariableDefinition::new("--modal-border-radius", "Modal Border Radius", Components, Border,
        "var(--radius-l)", "Border radius for modal dialogs")
        .depends_on(&["--radius-l"]),
    VariableDefinition::new("--modal-shadow", "Modal Shadow", Components, Shadow,
        "0 4px 12px rgba(0, 0, 0, 0.15)", "Box shadow for modal dialogs"),
];

static BY_NAME: Lazy<HashMap<&'static str, &'static VariableDefinition>> =
    Lazy::new(|| CATALOGUE.iter().map(|definition| (definition.name, definition)).collect());

/// Every variable in declaration order.
pub fn all() -> &'static [VariableDefinition] {
    CATALOGUE
}

pub fn lookup(name: &str) -> Option<&'static VariableDefinition> {
    BY_NAME.get(name).copied()
}

/// Returns the variables of one category, preserving declaration order.
pub fn by_category(category: Category) -> Vec<&'static VariableDefinition> {
    CATALOGUE
        .iter()
        .filter(|definition| definition.category == category)
        .collect()
}

/// Returns the variables whose default refers to `name`.
pub fn dependents(name: &str) -> Vec<&'static VariableDefinition> {
    CATALOGUE
        .iter()
        .filter(|definition| definition.dependencies.contains(&name))
        .collect()
}

pub fn defaults() -> BTreeMap<&'static str, &'static str> {
    CATALOGUE
        .iter()
        .map(|definition| (definition.name, definition.default_value))
        .collect()
}

/// Common values offered next to an input, chosen by the variable's type.
pub fn suggested_values(name: &str) -> Vec<&'static str> {
    let Some(definition) = lookup(name) else {
        return Vec::new();
    };

    match definition.kind {
        VariableType::Color => vec![
            "#ffffff", "#000000", "#f0f0f0", "#333333", "#4a9eff", "#7b68ee", "#4caf50",
            "#ff9800", "#f44336",
        ],
        VariableType::Size => vec!["8px", "12px", "16px", "20px", "24px", "32px", "48px"],
        VariableType::Font => vec![
            "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif",
            "\"SF Mono\", Monaco, \"Cascadia Code\", \"Roboto Mono\", monospace",
            "Georgia, \"Times New Roman\", serif",
            "Arial, Helvetica, sans-serif",
        ],
        VariableType::Spacing => vec!["0.5", "1", "1.5", "2", "2.5", "3"],
        VariableType::Border => vec!["0px", "1px", "2px", "3px", "4px"],
        VariableType::Shadow | VariableType::Gradient => Vec::new(),
    }
}

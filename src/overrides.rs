use std::collections::{BTreeMap, HashMap};

use crate::catalogue::{self, Category};
use crate::error::ThemeError;
use crate::validator::{self, ValidationResult};

/// Per-variable edits layered over catalogue defaults.
///
/// `changes` only ever holds values that differ from the catalogue default.
#[derive(Debug, Clone)]
pub struct VariableOverrides {
    values: BTreeMap<&'static str, String>,
    changes: BTreeMap<&'static str, String>,
    validation: HashMap<&'static str, ValidationResult>,
}

impl Default for VariableOverrides {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableOverrides {
    pub fn new() -> Self {
        VariableOverrides {
            values: catalogue::defaults()
                .into_iter()
                .map(|(name, value)| (name, value.to_string()))
                .collect(),
            changes: BTreeMap::new(),
            validation: HashMap::new(),
        }
    }

    /// Stores `value` even when it fails validation; the result is kept for [`Self::is_valid`].
    pub fn set(&mut self, name: &str, value: &str) -> Result<&ValidationResult, ThemeError> {
        let Some(definition) = catalogue::lookup(name) else {
            log::warn!("Unknown CSS variable: {name}");
            return Err(ThemeError::UnknownVariable(name.to_string()));
        };

        let result = validator::validate_definition(definition, value);
        self.values.insert(definition.name, value.to_string());
        if value == definition.default_value {
            self.changes.remove(definition.name);
        } else {
            self.changes.insert(definition.name, value.to_string());
        }
        self.validation.insert(definition.name, result);
        Ok(&self.validation[definition.name])
    }

    pub fn reset(&mut self, name: &str) -> Result<&ValidationResult, ThemeError> {
        let definition =
            catalogue::lookup(name).ok_or_else(|| ThemeError::UnknownVariable(name.to_string()))?;
        self.set(definition.name, definition.default_value)
    }

    pub fn reset_all(&mut self) {
        *self = Self::new();
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn changes(&self) -> &BTreeMap<&'static str, String> {
        &self.changes
    }

    pub fn validation(&self, name: &str) -> Option<&ValidationResult> {
        self.validation.get(name)
    }

    /// Variables that were never validated count as valid.
    pub fn is_valid(&self, name: &str) -> bool {
        self.validation
            .get(name)
            .map_or(true, |result| result.is_valid)
    }

    pub fn is_modified(&self, name: &str) -> bool {
        self.changes.contains_key(name)
    }

    pub fn generate_css(&self) -> String {
        generate_css_code(&self.changes)
    }
}

/// Renders changed variables grouped under a comment per category.
pub fn generate_css_code(changes: &BTreeMap<&'static str, String>) -> String {
    let mut lines = Vec::new();

    for category in Category::ALL {
        let changed: Vec<_> = catalogue::by_category(category)
            .into_iter()
            .filter_map(|definition| {
                changes
                    .get(definition.name)
                    .filter(|value| !value.is_empty())
                    .map(|value| (definition.name, value))
            })
            .collect();

        if changed.is_empty() {
            continue;
        }

        lines.push(format!("/* {} */", category.label()));
        for (name, value) in changed {
            lines.push(format!("  {name}: {value};"));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

use std::fmt;

/// All fallible operations in the theme builder funnel through this type.
#[derive(Debug)]
pub enum ThemeError {
    Io(std::io::Error),
    Json(serde_json::Error),
    TomlDeserialize(toml::de::Error),
    TomlSerialize(toml::ser::Error),
    NoHomeDir,
    /// Structural validation failed; carries every error message in order.
    Validation(Vec<String>),
    /// Manifest import was rejected; the configuration was left untouched.
    Import(String),
    UnknownVariable(String),
    UnknownPath(String),
    InvalidImport(Vec<String>),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "IO error: {error}"),
            Self::Json(error) => write!(formatter, "JSON error: {error}"),
            Self::TomlDeserialize(error) => write!(formatter, "TOML parse error: {error}"),
            Self::TomlSerialize(error) => write!(formatter, "TOML serialize error: {error}"),
            Self::NoHomeDir => write!(formatter, "could not determine home directory"),
            Self::Validation(errors) => {
                write!(formatter, "Theme validation failed: {}", errors.join(", "))
            }
            Self::Import(reason) => write!(formatter, "Failed to import theme: {reason}"),
            Self::UnknownVariable(name) => write!(formatter, "Unknown CSS variable: {name}"),
            Self::UnknownPath(path) => write!(formatter, "unknown configuration path: {path}"),
            Self::InvalidImport(errors) => {
                write!(formatter, "Invalid import files: {}", errors.join(", "))
            }
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<std::io::Error> for ThemeError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<toml::de::Error> for ThemeError {
    fn from(error: toml::de::Error) -> Self {
        Self::TomlDeserialize(error)
    }
}

impl From<toml::ser::Error> for ThemeError {
    fn from(error: toml::ser::Error) -> Self {
        Self::TomlSerialize(error)
    }
}

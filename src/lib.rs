//! Theme-building engine for Obsidian: a catalogue of the app's CSS variables, value
//! validation, a typed theme configuration, stylesheet generation, and undo history.

pub mod catalogue;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod overrides;
pub mod package;
pub mod session;
pub mod settings;
pub mod validator;

pub use catalogue::{Category, VariableDefinition, VariableType};
pub use config::{ThemeConfiguration, ThemeManifest, ThemeMode, ThemePatch};
pub use engine::{ConfigValidation, CssVariable, ThemeEngine, ThemeExport, ThemeFiles};
pub use error::ThemeError;
pub use history::History;
pub use session::ThemeSession;
pub use validator::ValidationResult;

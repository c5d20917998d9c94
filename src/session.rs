use crate::config::{self, ThemeConfiguration, ThemePatch};
use crate::engine::{ConfigValidation, ThemeEngine, ThemeExport};
use crate::error::ThemeError;
use crate::history::{History, DEFAULT_CAPACITY};

/// One editing session: the engine, its undo history, and the latest validation.
///
/// Hosts construct one per open editor and route every edit through it, so each
/// change is recorded and revalidated in the same step.
#[derive(Debug, Clone)]
pub struct ThemeSession {
    engine: ThemeEngine,
    history: History,
    validation: ConfigValidation,
    last_error: Option<String>,
    last_exported: Option<ThemeExport>,
}

impl Default for ThemeSession {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ThemeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_engine(ThemeEngine::new(), capacity)
    }

    pub fn from_engine(engine: ThemeEngine, capacity: usize) -> Self {
        let mut history = History::with_capacity(capacity);
        history.push(engine.configuration());
        let validation = engine.validate_configuration();
        ThemeSession {
            engine,
            history,
            validation,
            last_error: None,
            last_exported: None,
        }
    }

    pub fn update(&mut self, patch: ThemePatch) {
        self.engine.update_configuration(patch);
        self.record();
    }

    /// Sets one leaf, e.g. `["colors", "primary"]`, and records it like any other update.
    pub fn set_path(&mut self, path: &[&str], value: &str) -> Result<(), ThemeError> {
        let next = config::set_path(&self.engine.configuration(), path, value)?;
        let patch = path
            .first()
            .and_then(|key| ThemePatch::group(&next, key))
            .ok_or_else(|| ThemeError::UnknownPath(path.join(".")))?;
        self.update(patch);
        Ok(())
    }

    /// On failure the message is kept in [`Self::last_error`] and nothing is recorded.
    pub fn import(&mut self, manifest_json: &str, css: &str) -> Result<(), ThemeError> {
        match self.engine.import_theme(manifest_json, css) {
            Ok(()) => {
                self.last_error = None;
                self.record();
                Ok(())
            }
            Err(error) => {
                log::warn!("{error}");
                self.last_error = Some(error.to_string());
                Err(error)
            }
        }
    }

    pub fn reset(&mut self) {
        self.engine.reset_to_default();
        self.record();
    }

    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        log::debug!("undo to snapshot {:?}", self.history.index());
        self.engine.replace_configuration(snapshot);
        self.revalidate();
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        log::debug!("redo to snapshot {:?}", self.history.index());
        self.engine.replace_configuration(snapshot);
        self.revalidate();
        true
    }

    pub fn export(&mut self) -> Result<ThemeExport, ThemeError> {
        match self.engine.export_theme() {
            Ok(export) => {
                self.last_error = None;
                self.last_exported = Some(export.clone());
                Ok(export)
            }
            Err(error) => {
                self.last_error = Some(error.to_string());
                Err(error)
            }
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear(self.engine.configuration());
    }

    pub fn configuration(&self) -> ThemeConfiguration {
        self.engine.configuration()
    }

    pub fn engine(&self) -> &ThemeEngine {
        &self.engine
    }

    pub fn validation(&self) -> &ConfigValidation {
        &self.validation
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_exported(&self) -> Option<&ThemeExport> {
        self.last_exported.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn record(&mut self) {
        self.history.push(self.engine.configuration());
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.validation = self.engine.validate_configuration();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeManifest;

    fn manifest_named(name: &str) -> ThemePatch {
        ThemePatch {
            manifest: Some(ThemeManifest {
                name: name.to_string(),
                ..ThemeManifest::default()
            }),
            ..ThemePatch::default()
        }
    }

    #[test]
    fn starts_with_one_valid_snapshot() {
        let session = ThemeSession::new();
        assert_eq!(session.history().len(), 1);
        assert!(session.validation().is_valid);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn undo_after_updates_returns_previous_snapshot() {
        let mut session = ThemeSession::new();
        for name in ["one", "two", "three"] {
            session.update(manifest_named(name));
        }

        assert!(session.undo());
        assert_eq!(session.configuration().manifest.name, "two");
        assert!(session.redo());
        assert_eq!(session.configuration().manifest.name, "three");
        assert!(!session.redo());
    }

    #[test]
    fn new_edit_after_undo_drops_redo() {
        let mut session = ThemeSession::new();
        session.update(manifest_named("one"));
        session.update(manifest_named("two"));
        session.undo();
        session.update(manifest_named("branch"));

        assert!(!session.redo());
        assert_eq!(session.configuration().manifest.name, "branch");
        assert!(session.undo());
        assert_eq!(session.configuration().manifest.name, "one");
    }

    #[test]
    fn undo_revalidates() {
        let mut session = ThemeSession::new();
        session.update(manifest_named(""));
        assert!(!session.validation().is_valid);

        session.undo();
        assert!(session.validation().is_valid);
    }

    #[test]
    fn set_path_records_history() {
        let mut session = ThemeSession::new();
        session.set_path(&["colors", "background"], "#1e1e1e").unwrap();

        let config = session.configuration();
        assert_eq!(config.colors.background, "#1e1e1e");
        assert_eq!(config.colors.primary, "#007acc");
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn failed_import_keeps_state_and_reports() {
        let mut session = ThemeSession::new();
        let result = session.import("{not json", "");

        assert!(result.is_err());
        assert!(session.last_error().unwrap().starts_with("Failed to import theme"));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.configuration(), ThemeConfiguration::default());
    }

    #[test]
    fn successful_import_clears_error() {
        let mut session = ThemeSession::new();
        let _ = session.import("{", "");
        session
            .import(r#"{"name": "Imported", "author": "someone"}"#, "")
            .unwrap();

        assert!(session.last_error().is_none());
        assert_eq!(session.configuration().manifest.name, "Imported");
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn export_failure_is_remembered() {
        let mut session = ThemeSession::new();
        session.update(manifest_named(""));
        assert!(session.export().is_err());
        assert!(session.last_error().unwrap().contains("Theme name is required"));

        session.reset();
        assert!(session.export().is_ok());
        assert!(session.last_error().is_none());
        assert!(session.last_exported().is_some());
    }

    #[test]
    fn clear_history_keeps_current() {
        let mut session = ThemeSession::new();
        session.update(manifest_named("one"));
        session.clear_history();
        assert_eq!(session.history().len(), 1);
        assert!(!session.undo());
        assert_eq!(session.configuration().manifest.name, "one");
    }
}

use std::path::{Path, PathBuf};

use crate::engine::{ConfigValidation, ThemeExport, ThemeFiles};
use crate::error::ThemeError;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const CSS_FILE: &str = "theme.css";

const MAX_MANIFEST_BYTES: u64 = 10 * 1024;
const MAX_CSS_BYTES: u64 = 100 * 1024;

/// A file offered for import, described before its contents are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCandidate {
    pub file_name: String,
    pub size: u64,
}

impl ImportCandidate {
    pub fn from_path(path: &Path) -> Result<Self, ThemeError> {
        let size = std::fs::metadata(path)?.len();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        Ok(Self { file_name, size })
    }
}

/// Replaces anything outside `[A-Za-z0-9_-]` with `_`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Writes `manifest.json` and `theme.css` into `dir`, creating it as needed.
pub fn write_theme_files(dir: &Path, files: &ThemeFiles) -> Result<(), ThemeError> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join(MANIFEST_FILE), &files.manifest)?;
    std::fs::write(dir.join(CSS_FILE), &files.css)?;
    log::info!("wrote theme files to {}", dir.display());
    Ok(())
}

/// Writes the export into `<dir>/<name>-theme/` and returns that directory.
pub fn write_bundle(dir: &Path, export: &ThemeExport) -> Result<PathBuf, ThemeError> {
    let bundle = dir.join(format!("{}-theme", sanitize_name(&export.manifest.name)));
    write_theme_files(&bundle, &ThemeFiles::from_export(export)?)?;
    Ok(bundle)
}

pub fn validate_import_files(
    manifest: &ImportCandidate,
    css: &ImportCandidate,
) -> ConfigValidation {
    let mut errors = Vec::new();

    if !manifest.file_name.ends_with(".json") {
        errors.push("Manifest file must be a JSON file".to_string());
    }
    if !css.file_name.ends_with(".css") {
        errors.push("CSS file must be a CSS file".to_string());
    }
    if manifest.size > MAX_MANIFEST_BYTES {
        errors.push("Manifest file is too large (max 10KB)".to_string());
    }
    if css.size > MAX_CSS_BYTES {
        errors.push("CSS file is too large (max 100KB)".to_string());
    }

    ConfigValidation::from_errors(errors)
}

/// Checks both files and reads them; returns `(manifest_json, css)`.
pub fn read_import_files(
    manifest_path: &Path,
    css_path: &Path,
) -> Result<(String, String), ThemeError> {
    let validation = validate_import_files(
        &ImportCandidate::from_path(manifest_path)?,
        &ImportCandidate::from_path(css_path)?,
    );
    if !validation.is_valid {
        return Err(ThemeError::InvalidImport(validation.errors));
    }

    let manifest = std::fs::read_to_string(manifest_path)?;
    let css = std::fs::read_to_string(css_path)?;
    Ok((manifest, css))
}

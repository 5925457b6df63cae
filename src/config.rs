// SPDX-License-Identifier: PMPL-1.0-or-later

//! Exporter configuration
//!
//! Read from `privacy-export.yaml` in the working directory when present;
//! every field has a default, so the file is optional. Command-line flags
//! override whatever the file says.

use crate::types::LocaleCode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "privacy-export.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Output root; files land at `<base_dir>/<locale>/privacy.json`.
    pub base_dir: PathBuf,
    /// Directory holding `<locale>.json` / `.yaml` content files.
    pub content_dir: PathBuf,
    /// Locales to export. Empty means every locale found in `content_dir`.
    pub locales: Vec<LocaleCode>,
    /// Locale the parity check compares the others against.
    pub reference_locale: LocaleCode,
    pub parallel: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("public/locales"),
            content_dir: PathBuf::from("content"),
            locales: ["en", "es", "fr"]
                .into_iter()
                .map(LocaleCode::from_static)
                .collect(),
            reference_locale: LocaleCode::from_static("en"),
            parallel: false,
        }
    }
}

/// Values given on the command line. `None` leaves the config value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_dir: Option<PathBuf>,
    pub content_dir: Option<PathBuf>,
    pub locales: Option<Vec<LocaleCode>>,
    pub parallel: bool,
}

impl ExportConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `privacy-export.yaml` from the working directory, or defaults.
    pub fn discover() -> Result<Self> {
        Self::discover_in(Path::new("."))
    }

    pub fn discover_in(dir: &Path) -> Result<Self> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(base_dir) = overrides.base_dir {
            self.base_dir = base_dir;
        }
        if let Some(content_dir) = overrides.content_dir {
            self.content_dir = content_dir;
        }
        if let Some(locales) = overrides.locales {
            self.locales = locales;
        }
        self.parallel |= overrides.parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn code(value: &str) -> LocaleCode {
        LocaleCode::parse(value).unwrap()
    }

    #[test]
    fn defaults_match_shipped_content() {
        let config = ExportConfig::default();
        assert_eq!(config.base_dir, PathBuf::from("public/locales"));
        assert_eq!(config.locales, vec![code("en"), code("es"), code("fr")]);
        assert_eq!(config.reference_locale, code("en"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "base_dir: dist/locales\nlocales: [ja, en]\n",
        )
        .unwrap();
        let config = ExportConfig::discover_in(dir.path()).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("dist/locales"));
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.locales, vec![code("ja"), code("en")]);
    }

    #[test]
    fn invalid_locale_in_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "locales: [\"../en\"]\n").unwrap();
        assert!(ExportConfig::load(&path).is_err());
    }

    #[test]
    fn unknown_key_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("typo.yaml");
        fs::write(&path, "basedir: out\n").unwrap();
        assert!(ExportConfig::load(&path).is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(ExportConfig::discover_in(dir.path()).unwrap(), ExportConfig::default());
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let config = ExportConfig::default().apply(Overrides {
            base_dir: Some(PathBuf::from("out")),
            locales: Some(vec![code("es")]),
            ..Overrides::default()
        });
        assert_eq!(config.base_dir, PathBuf::from("out"));
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.locales, vec![code("es")]);
        assert!(!config.parallel);
    }
}

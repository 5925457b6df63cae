// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading content documents from per-locale data files.
//!
//! Each locale lives in `<content_dir>/<locale>.json`, `.yaml` or `.yml`.
//! When several exist for one locale the JSON file is used.

use crate::types::{ContentDocument, ContentSet, LocaleCode};
use anyhow::{bail, Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Recognised content file extensions, in lookup priority order.
pub const CONTENT_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Path of the content file for `locale`, if one exists.
pub fn content_path(content_dir: &Path, locale: &LocaleCode) -> Option<PathBuf> {
    CONTENT_EXTENSIONS
        .iter()
        .map(|ext| content_dir.join(format!("{}.{}", locale, ext)))
        .find(|path| path.is_file())
}

/// Parse a content file, choosing the format from its extension.
pub fn parse_document(path: &Path) -> Result<ContentDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading content file {}", path.display()))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing yaml content {}", path.display())),
        _ => serde_json::from_str(&raw)
            .with_context(|| format!("parsing json content {}", path.display())),
    }
}

/// Load one locale's document from `content_dir`.
pub fn load_document(content_dir: &Path, locale: &LocaleCode) -> Result<ContentDocument> {
    let Some(path) = content_path(content_dir, locale) else {
        bail!(
            "no content file for locale '{}' in {} (expected {}.json, {}.yaml or {}.yml)",
            locale,
            content_dir.display(),
            locale,
            locale,
            locale
        );
    };
    debug!(locale = %locale, path = %path.display(), "loading content");
    parse_document(&path)
}

/// Locales that have a content file in `content_dir`, sorted.
///
/// Files whose stem is not a valid locale code are skipped.
pub fn discover_locales(content_dir: &Path) -> Result<Vec<LocaleCode>> {
    if !content_dir.is_dir() {
        bail!("content directory not found: {}", content_dir.display());
    }

    let mut found = BTreeSet::new();
    let entries = fs::read_dir(content_dir)
        .with_context(|| format!("listing content directory {}", content_dir.display()))?;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("listing content directory {}", content_dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let recognised = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| CONTENT_EXTENSIONS.contains(&ext))
            .unwrap_or(false);
        if !recognised {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        match LocaleCode::parse(stem) {
            Ok(code) => {
                found.insert(code);
            }
            Err(err) => debug!(path = %path.display(), %err, "skipping content file"),
        }
    }

    Ok(found.into_iter().collect())
}

/// Load every requested locale. An empty request discovers locales from `content_dir`.
pub fn load_content(content_dir: &Path, locales: &[LocaleCode]) -> Result<ContentSet> {
    let locales = if locales.is_empty() {
        discover_locales(content_dir)?
    } else {
        locales.to_vec()
    };
    if locales.is_empty() {
        bail!("no locales to export in {}", content_dir.display());
    }
    reject_case_collisions(&locales)?;

    let mut content = ContentSet::new();
    for locale in locales {
        let document = load_document(content_dir, &locale)?;
        content.insert(locale, document);
    }
    Ok(content)
}

/// Output directories are named after the locale, so two codes that differ
/// only by ASCII case would share one directory on case-insensitive filesystems.
fn reject_case_collisions(locales: &[LocaleCode]) -> Result<()> {
    let mut seen: BTreeMap<String, &LocaleCode> = BTreeMap::new();
    for locale in locales {
        if let Some(other) = seen.insert(locale.as_str().to_ascii_lowercase(), locale) {
            if other != locale {
                bail!("locale codes '{}' and '{}' differ only by case", other, locale);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const YAML_DOC: &str = r#"
hero:
  title: Datenschutz
  description: Beschreibung
  updated: "2025"
tocTitle: Inhalt
toc:
  - id: privacy-section-1
    label: "1. Daten"
sections:
  - title: "1. Daten"
    body:
      - Erster Absatz.
    notes:
      - Hinweis.
contact:
  title: Kontakt
  description: Schreiben Sie uns.
  emailLabel: E-Mail
  email: privacy@example.com
  response: Innerhalb von 3 Tagen.
"#;

    #[test]
    fn yaml_documents_load() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("de.yaml"), YAML_DOC).unwrap();
        let locale = LocaleCode::parse("de").unwrap();
        let doc = load_document(dir.path(), &locale).unwrap();
        assert_eq!(doc.hero.title, "Datenschutz");
        assert_eq!(doc.sections[0].list, None);
        assert_eq!(doc.sections[0].notes.as_deref(), Some(&["Hinweis.".to_string()][..]));
    }

    #[test]
    fn discovery_skips_foreign_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("de.yml"), YAML_DOC).unwrap();
        fs::write(dir.path().join("README.md"), "notes").unwrap();
        fs::write(dir.path().join(".hidden.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("fr.json")).unwrap();
        let found = discover_locales(dir.path()).unwrap();
        assert_eq!(found, vec![LocaleCode::parse("de").unwrap()]);
    }

    #[test]
    fn missing_locale_is_an_error() {
        let dir = TempDir::new().unwrap();
        let locale = LocaleCode::parse("it").unwrap();
        let err = load_content(dir.path(), &[locale]).unwrap_err();
        assert!(err.to_string().contains("no content file for locale 'it'"));
    }

    #[test]
    fn codes_differing_only_by_case_are_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pt-BR.yaml"), YAML_DOC).unwrap();
        fs::write(dir.path().join("pt-br.yaml"), YAML_DOC).unwrap();
        let upper = LocaleCode::parse("pt-BR").unwrap();
        let lower = LocaleCode::parse("pt-br").unwrap();
        let err = load_content(dir.path(), &[upper, lower]).unwrap_err();
        assert!(err.to_string().contains("differ only by case"), "{}", err);
    }

    #[test]
    fn repeated_code_is_not_a_case_collision() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("de.yaml"), YAML_DOC).unwrap();
        let de = LocaleCode::parse("de").unwrap();
        let content = load_content(dir.path(), &[de.clone(), de]).unwrap();
        assert_eq!(content.len(), 1);
    }

    #[test]
    fn empty_directory_has_nothing_to_export() {
        let dir = TempDir::new().unwrap();
        assert!(load_content(dir.path(), &[]).is_err());
    }
}

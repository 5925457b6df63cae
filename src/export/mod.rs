// SPDX-License-Identifier: PMPL-1.0-or-later

//! Content exporter: one pretty-printed JSON file per locale.
//!
//! Output lives at `<base_dir>/<locale>/privacy.json`. Files are overwritten in
//! full and never read back during an export. A failure aborts the run; files
//! already written for other locales stay in place.

use crate::parity;
use crate::types::{ContentDocument, ContentSet, LocaleCode};
use anyhow::bail;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// File name written inside each locale directory.
pub const OUTPUT_FILE_NAME: &str = "privacy.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("creating directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("writing {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("reading {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("rendering content for locale '{locale}'")]
    Render {
        locale: LocaleCode,
        #[source]
        source: serde_json::Error,
    },
}

/// A file written by [`Exporter::export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub locale: LocaleCode,
    pub path: PathBuf,
    pub bytes: usize,
}

/// State of one locale's output relative to its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputState {
    UpToDate,
    Stale,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStatus {
    pub locale: LocaleCode,
    pub path: PathBuf,
    pub state: OutputState,
}

/// Render a document as it is written to disk.
///
/// Two-space indentation, non-ASCII emitted literally, field and sequence order
/// as in memory, one trailing newline.
pub fn render_document(document: &ContentDocument) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(document)?;
    text.push('\n');
    Ok(text)
}

/// Export every locale in `content` under `base_dir`.
pub fn export(content: &ContentSet, base_dir: &Path) -> Result<Vec<ExportedFile>, ExportError> {
    Exporter::new(base_dir).export(content)
}

#[derive(Debug, Clone)]
pub struct Exporter {
    base_dir: PathBuf,
    parallel: bool,
}

impl Exporter {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            parallel: false,
        }
    }

    /// Write locales concurrently. Each locale owns a distinct path, so writes
    /// never collide.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn output_path(&self, locale: &LocaleCode) -> PathBuf {
        self.base_dir.join(locale.as_str()).join(OUTPUT_FILE_NAME)
    }

    pub fn export(&self, content: &ContentSet) -> Result<Vec<ExportedFile>, ExportError> {
        if content.is_empty() {
            warn!(base_dir = %self.base_dir.display(), "no locales to export");
            return Ok(Vec::new());
        }

        if self.parallel {
            let entries: Vec<_> = content.iter().collect();
            entries
                .into_par_iter()
                .map(|(locale, document)| self.export_locale(locale, document))
                .collect()
        } else {
            content
                .iter()
                .map(|(locale, document)| self.export_locale(locale, document))
                .collect()
        }
    }

    /// Run the parity check first and write nothing unless it passes.
    ///
    /// Errors always block; with `strict` any warning blocks too.
    pub fn export_checked(
        &self,
        content: &ContentSet,
        reference: &LocaleCode,
        strict: bool,
    ) -> anyhow::Result<Vec<ExportedFile>> {
        let report = parity::check_parity(content, reference);
        for finding in &report.findings {
            warn!("{}", finding);
        }
        if !report.passes(strict) {
            bail!(
                "parity check failed with {} finding(s); nothing written",
                report.findings.len()
            );
        }
        Ok(self.export(content)?)
    }

    /// Write a single locale's document, creating its directory if needed.
    pub fn export_locale(
        &self,
        locale: &LocaleCode,
        document: &ContentDocument,
    ) -> Result<ExportedFile, ExportError> {
        let path = self.output_path(locale);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let text = render(locale, document)?;
        fs::write(&path, &text).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        info!(locale = %locale, path = %path.display(), bytes = text.len(), "wrote");

        Ok(ExportedFile {
            locale: locale.clone(),
            path,
            bytes: text.len(),
        })
    }

    /// Compare existing output with what an export would write. Never writes.
    pub fn verify(&self, content: &ContentSet) -> Result<Vec<OutputStatus>, ExportError> {
        let mut statuses = Vec::with_capacity(content.len());
        for (locale, document) in content {
            let path = self.output_path(locale);
            let expected = render(locale, document)?;
            let state = match fs::read(&path) {
                Ok(existing) if existing == expected.as_bytes() => OutputState::UpToDate,
                Ok(_) => OutputState::Stale,
                Err(err) if err.kind() == io::ErrorKind::NotFound => OutputState::Missing,
                Err(source) => return Err(ExportError::Read { path, source }),
            };
            debug!(locale = %locale, ?state, "verified");
            statuses.push(OutputStatus {
                locale: locale.clone(),
                path,
                state,
            });
        }
        Ok(statuses)
    }
}

fn render(locale: &LocaleCode, document: &ContentDocument) -> Result<String, ExportError> {
    render_document(document).map_err(|source| ExportError::Render {
        locale: locale.clone(),
        source,
    })
}

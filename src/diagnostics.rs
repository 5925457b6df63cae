// SPDX-License-Identifier: PMPL-1.0-or-later

//! `check`: content parity and output freshness in one table.

use crate::config::ExportConfig;
use crate::content;
use crate::export::{Exporter, OutputState};
use crate::locale;
use crate::parity::{self, Level as FindingLevel};
use crate::types::ContentSet;
use anyhow::{anyhow, Result};
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: String,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: String) -> Self {
        Self {
            label: label.into(),
            level,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        let tag = match self.level {
            Level::Ok => self.level.tag().green(),
            Level::Warn => self.level.tag().yellow(),
            Level::Error => self.level.tag().red(),
        };
        println!("  [{}] {:22} {}", tag, self.label, self.detail);
    }
}

/// Everything `check` found, in display order.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub entries: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn count(&self, level: Level) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }

    /// Errors always fail; in strict mode warnings fail too.
    pub fn passes(&self, strict: bool) -> bool {
        self.count(Level::Error) == 0 && (!strict || self.count(Level::Warn) == 0)
    }

    pub fn print(&self) {
        for entry in &self.entries {
            entry.print();
        }
    }
}

/// Load content for `config` and collect every diagnostic. Only fails on I/O
/// errors while reading existing output; content problems become entries.
pub fn collect(config: &ExportConfig) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    report.entries.push(Diagnostic::ok(
        "version",
        format!("privacy-export {}", env!("CARGO_PKG_VERSION")),
    ));

    if !config.content_dir.is_dir() {
        report.entries.push(Diagnostic::error(
            "content directory",
            format!("{} missing", config.content_dir.display()),
        ));
        return Ok(report);
    }
    report.entries.push(Diagnostic::ok(
        "content directory",
        format!("{} exists", config.content_dir.display()),
    ));

    let locales = if config.locales.is_empty() {
        content::discover_locales(&config.content_dir)?
    } else {
        config.locales.clone()
    };
    if locales.is_empty() {
        report.entries.push(Diagnostic::error(
            "locales",
            "no locales configured or discovered".to_string(),
        ));
        return Ok(report);
    }

    let mut loaded = ContentSet::new();
    for code in locales {
        if !locale::is_known_language(code.as_str()) {
            report.entries.push(Diagnostic::warning(
                format!("locale {}", code),
                format!("unknown language '{}'", locale::primary_subtag(code.as_str())),
            ));
        }
        match content::load_document(&config.content_dir, &code) {
            Ok(document) => {
                report.entries.push(Diagnostic::ok(
                    format!("content {}", code),
                    format!("{} sections", document.sections.len()),
                ));
                loaded.insert(code, document);
            }
            Err(err) => report
                .entries
                .push(Diagnostic::error(format!("content {}", code), format!("{:#}", err))),
        }
    }

    for site_locale in locale::SITE_LOCALES {
        if !loaded.keys().any(|code| code.as_str() == *site_locale) {
            report.entries.push(Diagnostic::warning(
                format!("site locale {}", site_locale),
                "served by the site but not exported".to_string(),
            ));
        }
    }

    let parity = parity::check_parity(&loaded, &config.reference_locale);
    if parity.is_clean() {
        report.entries.push(Diagnostic::ok(
            "parity",
            format!("{} locales match {}", loaded.len(), config.reference_locale),
        ));
    }
    for finding in &parity.findings {
        let label = format!("parity {}", finding.locale);
        report.entries.push(match finding.level {
            FindingLevel::Warn => Diagnostic::warning(label, finding.message.clone()),
            FindingLevel::Error => Diagnostic::error(label, finding.message.clone()),
        });
    }

    let exporter = Exporter::new(&config.base_dir);
    for status in exporter.verify(&loaded)? {
        let label = format!("output {}", status.locale);
        let path = status.path.display();
        report.entries.push(match status.state {
            OutputState::UpToDate => Diagnostic::ok(label, format!("{} up to date", path)),
            OutputState::Stale => Diagnostic::error(label, format!("{} is stale (run export)", path)),
            OutputState::Missing => Diagnostic::error(label, format!("{} missing (run export)", path)),
        });
    }

    Ok(report)
}

/// Print the check table and fail when it does not pass.
pub fn run_check(config: &ExportConfig, strict: bool) -> Result<CheckReport> {
    println!("privacy-export check");
    let report = collect(config)?;
    println!();
    report.print();
    println!();

    if report.passes(strict) {
        Ok(report)
    } else {
        Err(anyhow!(
            "check reported {} error(s) and {} warning(s)",
            report.count(Level::Error),
            report.count(Level::Warn)
        ))
    }
}

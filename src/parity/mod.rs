// SPDX-License-Identifier: PMPL-1.0-or-later

//! Structural parity checks across locales.
//!
//! Translations drift: a section gets added to one locale and not the others,
//! or a toc anchor is renamed in only one file. These checks compare every
//! document with itself and with a reference locale. They are advisory unless
//! the caller asks for strict mode.

use crate::types::{ContentDocument, ContentSet, LocaleCode};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Warn,
    Error,
}

impl Level {
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub locale: LocaleCode,
    pub level: Level,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level.tag(), self.locale, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParityReport {
    pub findings: Vec<Finding>,
}

impl ParityReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.level == Level::Error)
    }

    /// Errors always fail; in strict mode warnings fail too.
    pub fn passes(&self, strict: bool) -> bool {
        if strict {
            self.is_clean()
        } else {
            !self.has_errors()
        }
    }

    pub fn count(&self, level: Level) -> usize {
        self.findings.iter().filter(|f| f.level == level).count()
    }

    fn push(&mut self, locale: &LocaleCode, level: Level, message: String) {
        self.findings.push(Finding {
            locale: locale.clone(),
            level,
            message,
        });
    }
}

/// Check each document on its own, then against `reference`.
pub fn check_parity(content: &ContentSet, reference: &LocaleCode) -> ParityReport {
    let mut report = ParityReport::default();

    for (locale, document) in content {
        check_document(&mut report, locale, document);
    }

    match content.get(reference) {
        Some(base) => {
            for (locale, document) in content.iter().filter(|(locale, _)| *locale != reference) {
                compare_documents(&mut report, locale, document, reference, base);
            }
        }
        None if content.len() > 1 => {
            report.push(
                reference,
                Level::Warn,
                "reference locale has no content; cross-locale checks skipped".to_string(),
            );
        }
        None => {}
    }

    report
}

fn check_document(report: &mut ParityReport, locale: &LocaleCode, document: &ContentDocument) {
    let mut seen = HashSet::new();
    for entry in &document.toc {
        if !seen.insert(entry.id.as_str()) {
            report.push(locale, Level::Error, format!("duplicate toc id '{}'", entry.id));
        }
    }

    if document.toc.len() != document.sections.len() {
        report.push(
            locale,
            Level::Warn,
            format!(
                "toc has {} entries but there are {} sections",
                document.toc.len(),
                document.sections.len()
            ),
        );
    }

    if document.hero.title.trim().is_empty() {
        report.push(locale, Level::Warn, "hero title is empty".to_string());
    }
    if document.contact.email.trim().is_empty() {
        report.push(locale, Level::Warn, "contact email is empty".to_string());
    }

    for (index, section) in document.sections.iter().enumerate() {
        if section.body.is_empty() {
            report.push(
                locale,
                Level::Warn,
                format!("section {} ('{}') has no body text", index + 1, section.title),
            );
        }
    }
}

fn compare_documents(
    report: &mut ParityReport,
    locale: &LocaleCode,
    document: &ContentDocument,
    reference: &LocaleCode,
    base: &ContentDocument,
) {
    if document.sections.len() != base.sections.len() {
        report.push(
            locale,
            Level::Warn,
            format!(
                "{} sections, {} has {}",
                document.sections.len(),
                reference,
                base.sections.len()
            ),
        );
    }

    let ids: Vec<&str> = document.toc.iter().map(|e| e.id.as_str()).collect();
    let base_ids: Vec<&str> = base.toc.iter().map(|e| e.id.as_str()).collect();
    if ids != base_ids {
        report.push(
            locale,
            Level::Warn,
            format!("toc ids [{}] differ from {} [{}]", ids.join(", "), reference, base_ids.join(", ")),
        );
    }

    for (index, (section, base_section)) in document.sections.iter().zip(&base.sections).enumerate() {
        if section.list.is_some() != base_section.list.is_some() {
            report.push(
                locale,
                Level::Warn,
                format!("section {} list presence differs from {}", index + 1, reference),
            );
        }
        if section.notes.is_some() != base_section.notes.is_some() {
            report.push(
                locale,
                Level::Warn,
                format!("section {} notes presence differs from {}", index + 1, reference),
            );
        }
    }

    if document.contact.email != base.contact.email {
        report.push(
            locale,
            Level::Warn,
            format!(
                "contact email '{}' differs from {} '{}'",
                document.contact.email, reference, base.contact.email
            ),
        );
    }
}

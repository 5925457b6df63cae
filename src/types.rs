// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for privacy-export
//!
//! A [`ContentDocument`] is one locale's privacy-policy page. Field order in
//! these structs is the field order on the wire, so reordering a field here
//! changes every exported file.

use crate::locale::LocaleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Locale identifier used both as a map key and as a directory name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Parse and validate a locale code. See [`crate::locale::validate`].
    pub fn parse(value: &str) -> Result<Self, LocaleError> {
        crate::locale::validate(value)?;
        Ok(LocaleCode(value.to_string()))
    }

    /// Built-in codes known to be valid.
    pub(crate) fn from_static(code: &'static str) -> Self {
        debug_assert!(crate::locale::validate(code).is_ok(), "invalid built-in locale {code}");
        LocaleCode(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleCode {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocaleCode::parse(s)
    }
}

impl TryFrom<String> for LocaleCode {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        crate::locale::validate(&value)?;
        Ok(LocaleCode(value))
    }
}

impl From<LocaleCode> for String {
    fn from(code: LocaleCode) -> Self {
        code.0
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Per-locale privacy-policy page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentDocument {
    pub hero: Hero,
    pub toc_title: String,
    pub toc: Vec<TocEntry>,
    pub sections: Vec<Section>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    pub title: String,
    pub description: String,
    pub updated: String,
}

/// Table-of-contents entry. `id` is the anchor of the matching section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TocEntry {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub title: String,
    pub body: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Contact {
    pub title: String,
    pub description: String,
    pub email_label: String,
    pub email: String,
    pub response: String,
}

/// Every locale's document, iterated in locale order.
pub type ContentSet = BTreeMap<LocaleCode, ContentDocument>;

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Privacy-Export — localized privacy-policy content for the web front end.
//!
//! Content is authored per locale in `content/<locale>.json` (or YAML) and
//! exported as `<base_dir>/<locale>/privacy.json`, the file the site reads
//! when it renders the privacy page.
//!
//! PIPELINE:
//! 1. **Config**: output root, content directory and locale set.
//! 2. **Content**: one [`types::ContentDocument`] per locale.
//! 3. **Export**: pretty-printed JSON per locale, overwritten in full.
//! 4. **Parity**: optional structural comparison between translations.

pub mod config;
pub mod content;
pub mod diagnostics;
pub mod export;
pub mod locale;
pub mod parity;
pub mod types;

pub use export::{export, render_document, Exporter};
pub use types::{ContentDocument, ContentSet, LocaleCode};

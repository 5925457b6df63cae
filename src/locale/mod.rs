// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale code validation and display metadata.
//!
//! A locale code doubles as an output directory name, so validation is about
//! path safety first: a code must never escape the output root or produce a
//! hidden directory. Whether the code is a real language tag is reported
//! separately by [`is_known_language`] and never blocks an export.

mod names;

pub use names::{is_known_language, language_name, native_name};

use thiserror::Error;

/// Longest accepted code. BCP 47 tags in practice stay well below this.
pub const MAX_LOCALE_LEN: usize = 35;

/// Locales the web front end serves, in its display order.
pub const SITE_LOCALES: &[&str] = &["ja", "en", "es", "fr", "de", "pt"];

/// Locale the front end serves at the unprefixed root path.
pub const SITE_DEFAULT_LOCALE: &str = "ja";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale code is empty")]
    Empty,
    #[error("locale code '{0}' is longer than {max} bytes", max = MAX_LOCALE_LEN)]
    TooLong(String),
    #[error("locale code '{code}' contains invalid character {ch:?}")]
    InvalidChar { code: String, ch: char },
    #[error("locale code '{0}' must start with a letter or digit")]
    BadStart(String),
}

/// Check that `code` is safe to use as a single path segment.
///
/// Accepts ASCII letters, digits, `-` and `_`, starting with a letter or digit.
/// That rules out `.`, `..`, separators and anything that would need quoting.
pub fn validate(code: &str) -> Result<(), LocaleError> {
    if code.is_empty() {
        return Err(LocaleError::Empty);
    }
    if code.len() > MAX_LOCALE_LEN {
        return Err(LocaleError::TooLong(code.to_string()));
    }
    if let Some(ch) = code
        .chars()
        .find(|ch| !(ch.is_ascii_alphanumeric() || *ch == '-' || *ch == '_'))
    {
        return Err(LocaleError::InvalidChar {
            code: code.to_string(),
            ch,
        });
    }
    if code.starts_with(['-', '_']) {
        return Err(LocaleError::BadStart(code.to_string()));
    }
    Ok(())
}

/// Language part of a tag: `"pt"` for `"pt-BR"` or `"pt_BR"`.
pub fn primary_subtag(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

/// Whether the front end serves this locale.
pub fn is_site_locale(code: &str) -> bool {
    SITE_LOCALES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_codes_accepted() {
        for code in ["en", "ja", "pt-BR", "zh_Hant", "es-419"] {
            assert!(validate(code).is_ok(), "{code} should be valid");
        }
    }

    #[test]
    fn path_escapes_rejected() {
        assert_eq!(validate(""), Err(LocaleError::Empty));
        assert!(matches!(validate(".."), Err(LocaleError::InvalidChar { .. })));
        assert!(matches!(validate("en/../x"), Err(LocaleError::InvalidChar { ch: '/', .. })));
        assert!(matches!(validate("en\\fr"), Err(LocaleError::InvalidChar { .. })));
        assert!(matches!(validate("e n"), Err(LocaleError::InvalidChar { ch: ' ', .. })));
        assert_eq!(validate("-en"), Err(LocaleError::BadStart("-en".to_string())));
    }

    #[test]
    fn overlong_code_rejected() {
        let code = "a".repeat(MAX_LOCALE_LEN + 1);
        assert!(matches!(validate(&code), Err(LocaleError::TooLong(_))));
        assert!(validate(&"a".repeat(MAX_LOCALE_LEN)).is_ok());
    }

    #[test]
    fn primary_subtag_splits_region() {
        assert_eq!(primary_subtag("pt-BR"), "pt");
        assert_eq!(primary_subtag("zh_Hant"), "zh");
        assert_eq!(primary_subtag("en"), "en");
    }

    #[test]
    fn site_locales_include_default() {
        assert!(is_site_locale(SITE_DEFAULT_LOCALE));
        assert!(is_site_locale("pt"));
        assert!(!is_site_locale("ko"));
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Display names for ISO 639-1 language codes.
//!
//! Lookups use the primary subtag, so `"pt-BR"` resolves like `"pt"`.

use super::primary_subtag;

/// (code, English name, native name)
const LANGUAGES: &[(&str, &str, &str)] = &[
    ("ar", "Arabic", "العربية"),
    ("cs", "Czech", "Čeština"),
    ("da", "Danish", "Dansk"),
    ("de", "German", "Deutsch"),
    ("el", "Greek", "Ελληνικά"),
    ("en", "English", "English"),
    ("es", "Spanish", "Español"),
    ("fi", "Finnish", "Suomi"),
    ("fr", "French", "Français"),
    ("he", "Hebrew", "עברית"),
    ("hi", "Hindi", "हिन्दी"),
    ("hu", "Hungarian", "Magyar"),
    ("id", "Indonesian", "Bahasa Indonesia"),
    ("it", "Italian", "Italiano"),
    ("ja", "Japanese", "日本語"),
    ("ko", "Korean", "한국어"),
    ("ms", "Malay", "Bahasa Melayu"),
    ("nb", "Norwegian", "Norsk bokmål"),
    ("nl", "Dutch", "Nederlands"),
    ("pl", "Polish", "Polski"),
    ("pt", "Portuguese", "Português"),
    ("ro", "Romanian", "Română"),
    ("ru", "Russian", "Русский"),
    ("sv", "Swedish", "Svenska"),
    ("th", "Thai", "ไทย"),
    ("tr", "Turkish", "Türkçe"),
    ("uk", "Ukrainian", "Українська"),
    ("vi", "Vietnamese", "Tiếng Việt"),
    ("zh", "Chinese", "中文"),
];

fn lookup(code: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let primary = primary_subtag(code);
    LANGUAGES.iter().find(|(known, _, _)| *known == primary)
}

/// Whether the primary subtag of `code` is one of the languages we have names for.
///
/// Informational: unknown codes still export.
pub fn is_known_language(code: &str) -> bool {
    lookup(code).is_some()
}

/// English name of the language, e.g. `"Japanese"` for `"ja"`.
pub fn language_name(code: &str) -> Option<&'static str> {
    lookup(code).map(|(_, english, _)| *english)
}

/// Name of the language in its own script, e.g. `"日本語"` for `"ja"`.
pub fn native_name(code: &str) -> Option<&'static str> {
    lookup(code).map(|(_, _, native)| *native)
}

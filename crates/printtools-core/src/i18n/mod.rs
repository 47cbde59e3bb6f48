//! English/Japanese UI text.
//!
//! There is no global language state: a [`LanguageContext`] is built once at
//! startup and handed to whatever renders text.

mod catalog;

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PrintToolsError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ja,
            Language::Ja => Language::En,
        }
    }

    /// Caption of the language toggle button.
    pub fn switch_label(self) -> &'static str {
        match self {
            Language::En => "English / 日本語",
            Language::Ja => "日本語 / English",
        }
    }

    /// Stored value if valid, else Japanese when the first preferred platform
    /// language is Japanese, else English.
    pub fn resolve(stored: Option<&str>, preferred: &[String]) -> Self {
        if let Some(language) = stored.and_then(|s| s.parse::<Language>().ok()) {
            return language;
        }
        match preferred.first() {
            Some(primary) if primary.to_ascii_lowercase().starts_with("ja") => Language::Ja,
            _ => Language::En,
        }
    }

    fn catalog(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => catalog::EN,
            Language::Ja => catalog::JA,
        }
    }

    /// Raw template for `key`, if the catalog has one.
    pub fn template(self, key: &str) -> Option<&'static str> {
        self.catalog()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| *template)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PrintToolsError;

    /// Accepts exactly `en` or `ja`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ja" => Ok(Language::Ja),
            other => Err(PrintToolsError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Preferred UI languages of the host, most preferred first, read from the
/// usual POSIX locale variables.
pub fn preferred_languages_from_env() -> Vec<String> {
    let mut languages = Vec::new();
    if let Ok(list) = std::env::var("LANGUAGE") {
        languages.extend(list.split(':').map(str::to_string));
    }
    for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            languages.push(value);
        }
    }
    languages.retain(|l| !l.is_empty() && l != "C" && l != "POSIX");
    languages
}

/// Replace `{{token}}` placeholders (whitespace inside braces allowed).
/// Placeholders without a matching variable are left untouched.
pub fn format_template<V: fmt::Display>(template: &str, vars: &[(&str, V)]) -> String {
    if vars.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let inner = &rest[start + 2..];
        let Some(end) = inner.find("}}") else {
            break;
        };
        out.push_str(&rest[..start]);
        let token = inner[..end].trim();
        match vars.iter().find(|(name, _)| *name == token) {
            Some((_, value)) => {
                let _ = write!(out, "{value}");
            }
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &inner[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Persistence of the chosen language under a single string key.
pub trait LanguageStore {
    fn load_language(&self) -> Option<String>;
    fn save_language(&mut self, code: &str);
}

/// Non-persistent store.
#[derive(Clone, Debug, Default)]
pub struct MemoryLanguageStore {
    value: Option<String>,
}

impl MemoryLanguageStore {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl LanguageStore for MemoryLanguageStore {
    fn load_language(&self) -> Option<String> {
        self.value.clone()
    }

    fn save_language(&mut self, code: &str) {
        self.value = Some(code.to_string());
    }
}

/// Active UI language plus lookup helpers.
#[derive(Clone, Debug, Default)]
pub struct LanguageContext {
    language: Language,
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Resolve the startup language from a store and the platform preferences.
    pub fn initialize(store: &dyn LanguageStore, preferred: &[String]) -> Self {
        let stored = store.load_language();
        let language = Language::resolve(stored.as_deref(), preferred);
        debug!("UI language resolved to {language} (stored: {stored:?})");
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language and persist the choice.
    pub fn set_language(&mut self, language: Language, store: &mut dyn LanguageStore) {
        self.language = language;
        store.save_language(language.code());
    }

    pub fn toggle(&mut self, store: &mut dyn LanguageStore) {
        self.set_language(self.language.toggled(), store);
    }

    /// Translate `key`; unknown keys come back unchanged.
    pub fn t(&self, key: &str) -> String {
        self.language.template(key).unwrap_or(key).to_string()
    }

    /// Translate `key` and substitute placeholders.
    pub fn t_with<V: fmt::Display>(&self, key: &str, vars: &[(&str, V)]) -> String {
        format_template(self.language.template(key).unwrap_or(key), vars)
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language identifiers.
//!
//! [`Language`] is the closed set of languages the site ships translations
//! for. [`LanguageTag`] is the raw string the preference store actually
//! holds: tags read back from persisted storage are never validated, so a
//! stale or foreign tag has to be representable even though no translation
//! subtree exists for it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages with a translation subtree in the static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en-us")]
    EnUs,
    #[serde(rename = "pt-br")]
    PtBr,
}

impl Language {
    /// Tag used in the persisted flag and as the table's top-level key.
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnUs => "en-us",
            Language::PtBr => "pt-br",
        }
    }

    /// Parse a tag into a configured language.
    ///
    /// Exact match only: `"EN-US"` and `"en"` are foreign tags.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-us" => Some(Language::EnUs),
            "pt-br" => Some(Language::PtBr),
            _ => None,
        }
    }

    /// All configured languages, in display order.
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::PtBr]
    }

    /// The language the toggle switches to.
    pub fn other(&self) -> Language {
        match self {
            Language::EnUs => Language::PtBr,
            Language::PtBr => Language::EnUs,
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::PtBr => "Português",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::EnUs
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An unvalidated language tag as held by the preference store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The configured language this tag names, if any.
    pub fn language(&self) -> Option<Language> {
        Language::from_code(&self.0)
    }

    pub fn is_configured(&self) -> bool {
        self.language().is_some()
    }

    /// Language a toggle switches to from this tag.
    ///
    /// Anything that is not Portuguese switches to Portuguese, so a foreign
    /// tag lands on `pt-br`.
    pub fn toggled(&self) -> Language {
        match self.language() {
            Some(language) => language.other(),
            None => Language::PtBr,
        }
    }
}

impl From<Language> for LanguageTag {
    fn from(language: Language) -> Self {
        Self(language.code().to_string())
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for LanguageTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl PartialEq<Language> for LanguageTag {
    fn eq(&self, other: &Language) -> bool {
        self.0 == other.code()
    }
}

impl PartialEq<&str> for LanguageTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Language codes and the behaviour they select.
//!
//! A [`Language`] decides three things for a tokenizer: whether the script is
//! segmented with a dictionary (or the script heuristic) instead of the
//! universal matcher, whether case folding applies, and whether the stemmer
//! runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::char_categories::{ScriptProfile, LAO, THAI};

/// Languages whose script has no word-separating whitespace
pub const DICTIONARY_LANGUAGES: &[&str] = &["th", "lo"];

/// Latin-script languages the suffix stemmer is applied to
pub const STEMMABLE_LANGUAGES: &[&str] = &["en", "de", "fr", "es", "it", "pt", "nl", "sv", "da", "no"];

/// A normalised language code such as `en`, `th` or `pt-BR`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Language(String);

impl Language {
    /// Create a language from a code; surrounding whitespace is trimmed and
    /// the code lowercased
    pub fn new(code: &str) -> Self {
        Language(code.trim().to_lowercase())
    }

    /// The full normalised code
    pub fn code(&self) -> &str {
        &self.0
    }

    /// The primary subtag (`pt` for `pt-br`)
    pub fn primary(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or_default()
    }

    /// Whether longest-match dictionary segmentation is offered
    pub fn is_dictionary_eligible(&self) -> bool {
        DICTIONARY_LANGUAGES.contains(&self.primary())
    }

    /// Whether the stemmer applies
    pub fn is_stemmable(&self) -> bool {
        STEMMABLE_LANGUAGES.contains(&self.primary())
    }

    /// Whether case folding is meaningful for this language's script
    pub fn is_case_sensitive(&self) -> bool {
        !self.is_dictionary_eligible()
    }

    /// Character tables for the heuristic segmenter
    pub fn script_profile(&self) -> Option<&'static ScriptProfile> {
        match self.primary() {
            "th" => Some(&THAI),
            "lo" => Some(&LAO),
            _ => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::new("en")
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Language::new(code)
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Language::new(&code)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.0
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

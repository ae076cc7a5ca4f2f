//! Tokenizer configuration.
//!
//! A [`TokenizerConfig`] is fixed once a tokenizer is built. It can be
//! assembled in code with the `with_*` setters or read from JSON; missing
//! JSON fields take their defaults.
//!
//! ```
//! use polyseg::TokenizerConfig;
//!
//! let config = TokenizerConfig::from_json_str(r#"{"language": "th", "removeStopwords": true}"#).unwrap();
//! assert!(config.remove_stopwords);
//! assert!(config.lowercase);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{read_utf8, PolysegError, Result};
use crate::language::Language;

/// Options governing every `tokenize` call of one tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenizerConfig {
    /// Fold tokens to lowercase (ignored for scripts without case)
    pub lowercase: bool,
    /// Drop tokens whose lowercase form is a stopword
    pub remove_stopwords: bool,
    /// Extra stopwords on top of the base and language lists
    pub custom_stopwords: Vec<String>,
    /// Apply the suffix stemmer (only for stemmable languages)
    pub stemming: bool,
    /// Language of the text
    pub language: Language,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            lowercase: true,
            remove_stopwords: false,
            custom_stopwords: Vec::new(),
            stemming: false,
            language: Language::default(),
        }
    }
}

impl TokenizerConfig {
    /// Default configuration
    pub fn new() -> Self {
        TokenizerConfig::default()
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TokenizerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        TokenizerConfig::from_json_str(&read_utf8(path.as_ref())?)
    }

    /// Check that the language is a usable code such as `en` or `th-TH`
    pub fn validate(&self) -> Result<()> {
        let code = self.language.code();
        if code.is_empty() {
            return Err(PolysegError::invalid_config("language must not be empty"));
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(PolysegError::invalid_config(format!(
                "invalid language code '{code}'"
            )));
        }
        Ok(())
    }

    /// Set the language
    pub fn with_language<L: Into<Language>>(mut self, language: L) -> Self {
        self.language = language.into();
        self
    }

    /// Enable or disable case folding
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Enable or disable stopword removal
    pub fn with_remove_stopwords(mut self, remove: bool) -> Self {
        self.remove_stopwords = remove;
        self
    }

    /// Enable or disable stemming
    pub fn with_stemming(mut self, stemming: bool) -> Self {
        self.stemming = stemming;
        self
    }

    /// Set the custom stopwords
    pub fn with_custom_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_stopwords = words.into_iter().map(Into::into).collect();
        self
    }
}

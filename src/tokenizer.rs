//! The tokenizer: segmentation mode selection plus the post-processing
//! pipeline and the derived operations.
//!
//! The configured language picks the raw segmenter:
//!
//! - dictionary-eligible languages (Thai, Lao) use greedy longest match when a
//!   non-empty dictionary is loaded, the script heuristic otherwise
//! - every other language uses the universal letter/number matcher
//!
//! The resulting tokens then pass through lowercase folding, stopword removal
//! and stemming as configured.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::TokenizerConfig;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::filters::Pipeline;
use crate::language::Language;
use crate::matcher::universal_tokens;
use crate::ngram::{frequencies, ngrams};
use crate::segmenter::DictionarySegmenter;
use crate::stopwords::{BuiltinStopwords, StopwordSet, StopwordSource};
use crate::token::Token;

/// A configured tokenizer.
///
/// Each instance owns its stopword set and dictionary; nothing is shared
/// between instances. Mutating methods take `&mut self`, so concurrent use
/// of one instance needs external synchronisation.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    config: TokenizerConfig,
    pipeline: Pipeline,
    stopwords: StopwordSet,
    dictionary: Option<Dictionary>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new(TokenizerConfig::default())
    }
}

impl Tokenizer {
    /// Create a tokenizer using the built-in stopword lists and no dictionary
    pub fn new(config: TokenizerConfig) -> Self {
        TokenizerBuilder::new(config).build()
    }

    /// Start building a tokenizer with a prebuilt dictionary or a custom
    /// stopword source
    pub fn builder(config: TokenizerConfig) -> TokenizerBuilder {
        TokenizerBuilder::new(config)
    }

    /// The configuration
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// The configured language
    pub fn language(&self) -> &Language {
        &self.config.language
    }

    /// The current stopword set
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// The loaded dictionary, if any
    pub fn dictionary(&self) -> Option<&Dictionary> {
        self.dictionary.as_ref()
    }

    /// Whether `tokenize` currently runs longest-match segmentation
    pub fn uses_dictionary(&self) -> bool {
        self.config.language.is_dictionary_eligible()
            && self.dictionary.as_ref().is_some_and(|d| !d.is_empty())
    }

    /// Raw segmentation, before any pipeline stage
    pub fn segment<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        match self.config.language.script_profile() {
            Some(script) => DictionarySegmenter::new(self.dictionary.as_ref(), script).segment(text),
            None => universal_tokens(text).collect(),
        }
    }

    /// Tokenize with positions and kinds preserved
    pub fn tokenize_detailed<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = self.segment(text);
        self.pipeline.apply(&mut tokens, &self.stopwords);
        tokens
    }

    /// Tokenize `text` into an ordered list of token strings
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenize_detailed(text)
            .into_iter()
            .map(|t| t.text.into_owned())
            .collect()
    }

    /// Tokenize, then join every run of `n` consecutive tokens with a space
    pub fn ngram_tokenize(&self, text: &str, n: usize) -> Vec<String> {
        ngrams(&self.tokenize(text), n)
    }

    /// Tokenize, then count each distinct token
    pub fn token_frequency(&self, text: &str) -> HashMap<String, usize> {
        frequencies(&self.tokenize(text))
    }

    /// Add stopwords (stored lowercase)
    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords.add(words);
    }

    /// Remove stopwords
    pub fn remove_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords.remove(words);
    }

    /// Install `dictionary`, returning the one it replaces
    pub fn set_dictionary(&mut self, dictionary: Dictionary) -> Option<Dictionary> {
        self.warn_if_unused();
        self.dictionary.replace(dictionary)
    }

    /// Load a dictionary file, blocking until it is read.
    ///
    /// On success the new dictionary replaces the current one and its word
    /// count is returned. On failure the current dictionary is kept.
    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let dictionary = Dictionary::load(path)?;
        Ok(self.install(dictionary))
    }

    /// Load a dictionary file without blocking the async executor.
    ///
    /// Same outcome as [`Tokenizer::load_dictionary`] for the same file.
    pub async fn load_dictionary_async<P: Into<PathBuf>>(&mut self, path: P) -> Result<usize> {
        let dictionary = Dictionary::load_async(path).await?;
        Ok(self.install(dictionary))
    }

    fn install(&mut self, dictionary: Dictionary) -> usize {
        let count = dictionary.len();
        self.set_dictionary(dictionary);
        debug!("dictionary installed for {} ({count} words)", self.config.language);
        count
    }

    /// Add words to the dictionary, creating it if needed.
    ///
    /// Returns the resulting word count.
    pub fn add_dictionary_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.dictionary.is_none() {
            self.warn_if_unused();
        }
        let dictionary = self.dictionary.get_or_insert_with(Dictionary::new);
        dictionary.extend(words);
        dictionary.len()
    }

    /// Remove words from the dictionary. Returns the resulting word count.
    pub fn remove_dictionary_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.dictionary.as_mut() {
            Some(dictionary) => {
                for word in words {
                    dictionary.remove(word.as_ref());
                }
                dictionary.len()
            }
            None => 0,
        }
    }

    fn warn_if_unused(&self) {
        if !self.config.language.is_dictionary_eligible() {
            warn!(
                "dictionary attached to '{}', which is segmented without one",
                self.config.language
            );
        }
    }
}

/// Builder for [`Tokenizer`]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
    dictionary: Option<Dictionary>,
    source: Box<dyn StopwordSource>,
}

impl TokenizerBuilder {
    /// Create a builder for `config`
    pub fn new(config: TokenizerConfig) -> Self {
        TokenizerBuilder {
            config,
            dictionary: None,
            source: Box::new(BuiltinStopwords),
        }
    }

    /// Use a prebuilt dictionary
    pub fn dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Use `source` for language-specific stopwords
    pub fn stopword_source<S: StopwordSource + 'static>(mut self, source: S) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Build the tokenizer
    pub fn build(self) -> Tokenizer {
        let stopwords = StopwordSet::for_language(
            &self.config.language,
            &*self.source,
            &self.config.custom_stopwords,
        );
        let mut tokenizer = Tokenizer {
            pipeline: Pipeline::from_config(&self.config),
            config: self.config,
            stopwords,
            dictionary: None,
        };
        if let Some(dictionary) = self.dictionary {
            tokenizer.set_dictionary(dictionary);
        }
        tokenizer
    }
}

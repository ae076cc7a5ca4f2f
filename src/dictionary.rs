//! Word dictionaries for longest-match segmentation.
//!
//! A [`Dictionary`] is a set of words. It is built once from a word list (a
//! file or an explicit list), can be extended and shrunk explicitly, and
//! answers longest-prefix queries for the segmenter.
//!
//! ## File format
//!
//! Plain UTF-8 text, one word per line. Lines may end in `\n` or `\r\n`;
//! surrounding whitespace is trimmed and blank lines are ignored.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::runtime::Handle;

use crate::error::{read_utf8, PolysegError, Result};
use crate::trie::Trie;

/// A set of words with longest-prefix lookup
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    trie: Trie,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Dictionary::default()
    }

    /// Build a dictionary from an explicit word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Dictionary::new();
        dict.extend(words);
        dict
    }

    /// Parse word-list content (one word per line)
    pub fn parse(content: &str) -> Self {
        Dictionary::from_words(content.lines().map(str::trim))
    }

    /// Load a dictionary file, blocking the calling thread.
    ///
    /// Fails if the file cannot be read or is not valid UTF-8.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_utf8(path)?;
        let dict = Dictionary::parse(&content);
        debug!("loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Load a dictionary file without blocking the async executor.
    ///
    /// Runs [`Dictionary::load`] on tokio's blocking pool, so both forms
    /// produce the same dictionary for the same file. Fails with
    /// [`PolysegError::Task`] when polled outside a tokio runtime.
    pub async fn load_async<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let handle = Handle::try_current()
            .map_err(|e| PolysegError::Task(format!("no tokio runtime: {e}")))?;
        handle
            .spawn_blocking(move || Dictionary::load(&path))
            .await
            .map_err(|e| PolysegError::Task(e.to_string()))?
    }

    /// Insert one word. Blank words are ignored.
    ///
    /// Returns `true` if the word was new.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.trim().is_empty() {
            return false;
        }
        self.trie.add(word)
    }

    /// Insert many words
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Remove one word. Returns `true` if it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.trie.remove(word)
    }

    /// Check whether `word` is in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.trie.has_word(word)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Check if the dictionary has no words
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// The longest word that is a prefix of `text`, as a slice of `text`
    pub fn longest_prefix<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.trie.longest_prefix_len(text).map(|len| &text[..len])
    }

    /// All words, sorted
    pub fn words(&self) -> Vec<String> {
        let mut words = self.trie.words();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary::from_words(iter)
    }
}

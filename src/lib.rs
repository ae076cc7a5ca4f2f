//! # polyseg
//!
//! A multi-script word tokenizer.
//!
//! Text in most languages is split by a Unicode-aware word matcher (letter
//! runs with embedded combining marks, or digit runs). Thai and Lao, which are
//! written without spaces, are segmented by greedy longest match against a
//! dictionary, or by a syllable heuristic when no dictionary is loaded.
//! Tokens can then be lowercased, filtered against stopword lists and stemmed.
//!
//! ## Quick Start
//!
//! ```rust
//! use polyseg::{Tokenizer, TokenizerConfig};
//!
//! let config = TokenizerConfig::new()
//!     .with_remove_stopwords(true)
//!     .with_stemming(true);
//! let tokenizer = Tokenizer::new(config);
//!
//! assert_eq!(tokenizer.tokenize("The cats were running"), vec!["cat", "run"]);
//! ```
//!
//! ## Dictionary Segmentation
//!
//! ```rust
//! use polyseg::{Dictionary, Tokenizer, TokenizerConfig};
//!
//! let tokenizer = Tokenizer::builder(TokenizerConfig::new().with_language("th"))
//!     .dictionary(Dictionary::from_words(["การ", "ประมวล", "ผล"]))
//!     .build();
//!
//! assert_eq!(tokenizer.tokenize("การประมวลผล"), vec!["การ", "ประมวล", "ผล"]);
//! ```

pub mod char_categories;
pub mod config;
pub mod data_dir;
pub mod dictionary;
pub mod error;
pub mod filters;
pub mod heuristic;
pub mod language;
pub mod matcher;
pub mod ngram;
pub mod segmenter;
pub mod stemmer;
pub mod stopwords;
pub mod token;
pub mod tokenizer;
pub mod trie;

// Re-export main types for convenience
pub use char_categories::{get_char_category, CharCategory, ScriptClass, ScriptProfile, LAO, THAI};
pub use config::TokenizerConfig;
pub use dictionary::Dictionary;
pub use error::{PolysegError, Result};
pub use language::Language;
pub use matcher::universal_tokens;
pub use ngram::{frequencies, ngrams, top_frequencies};
pub use segmenter::{longest_match_segment, DictionarySegmenter};
pub use stemmer::stem;
pub use stopwords::{
    BuiltinStopwords, DirectoryStopwords, NoStopwords, StopwordSet, StopwordSource,
};
pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, TokenizerBuilder};
pub use trie::{Trie, TrieNode};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

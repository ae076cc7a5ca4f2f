//! Token representation.
//!
//! A Token is a contiguous slice of the input classified as one unit by a
//! segmenter. Its text borrows the input until a pipeline stage (case folding,
//! stemming) has to rewrite it.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// How a token was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Letter run, dictionary word or script run
    #[default]
    Word,
    /// Run of numeric characters
    Number,
    /// Single character emitted because no dictionary entry matched
    Unknown,
    /// Character outside the segmented script, emitted on its own by the heuristic segmenter
    Other,
}

impl TokenKind {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "WORD",
            TokenKind::Number => "NUMBER",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Other => "OTHER",
        }
    }
}

/// A single token from the tokenization process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// The token text (post-pipeline when returned by a tokenizer)
    pub text: Cow<'a, str>,

    /// Starting byte offset in the original string
    pub start: usize,

    /// Length in bytes of the original span
    pub len: usize,

    /// How this token was produced
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Create a token borrowing `text[start..start + len]`
    pub fn borrowed(source: &'a str, start: usize, len: usize, kind: TokenKind) -> Self {
        Token {
            text: Cow::Borrowed(&source[start..start + len]),
            start,
            len,
            kind,
        }
    }

    /// The token text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte offset one past the end of the original span
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Detach from the input
    pub fn into_owned(self) -> Token<'static> {
        Token {
            text: Cow::Owned(self.text.into_owned()),
            start: self.start,
            len: self.len,
            kind: self.kind,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

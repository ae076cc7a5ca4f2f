//! Greedy longest-match segmentation over a [`Dictionary`].
//!
//! At each position the longest dictionary word that prefixes the remaining
//! text becomes a token. When nothing matches, the single next character is
//! emitted instead. Runs of ASCII spaces (and only those) between tokens are
//! skipped.
//!
//! Stored words are distinct strings, so two candidates of equal length at
//! the same position would be the same string: the longest match is unique
//! and no tie-break order is involved.

use crate::char_categories::ScriptProfile;
use crate::dictionary::Dictionary;
use crate::heuristic::heuristic_segment;
use crate::token::{Token, TokenKind};

/// Segment `text` by greedy longest match against `dictionary`.
///
/// Never fails: text the dictionary does not cover comes out one character
/// per token.
pub fn longest_match_segment<'a>(text: &'a str, dictionary: &Dictionary) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let (len, kind) = match dictionary.longest_prefix(rest) {
            Some(word) => (word.len(), TokenKind::Word),
            None => {
                let Some(c) = rest.chars().next() else {
                    break;
                };
                (c.len_utf8(), TokenKind::Unknown)
            }
        };

        tokens.push(Token::borrowed(text, pos, len, kind));
        pos += len;
        pos += text[pos..].bytes().take_while(|&b| b == b' ').count();
    }

    tokens
}

/// Dictionary segmentation with a script heuristic for when no words are loaded
pub struct DictionarySegmenter<'d> {
    dictionary: Option<&'d Dictionary>,
    script: &'static ScriptProfile,
}

impl<'d> DictionarySegmenter<'d> {
    /// Create a segmenter; `dictionary` may be absent or empty
    pub fn new(dictionary: Option<&'d Dictionary>, script: &'static ScriptProfile) -> Self {
        DictionarySegmenter { dictionary, script }
    }

    /// Whether longest-match mode is active
    pub fn uses_dictionary(&self) -> bool {
        self.dictionary.is_some_and(|d| !d.is_empty())
    }

    /// Segment `text`
    pub fn segment<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        match self.dictionary {
            Some(dict) if !dict.is_empty() => longest_match_segment(text, dict),
            _ => heuristic_segment(text, self.script),
        }
    }
}

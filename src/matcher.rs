//! Universal Unicode word matcher.
//!
//! Scans text for maximal runs of letters (with combining marks allowed
//! between letters) or of numeric characters. Everything else (punctuation,
//! symbols, emoji, whitespace) is skipped.

use once_cell::sync::Lazy;
use regex::{Matches, Regex};

use crate::char_categories::{
    get_char_category, CharCategory, LETTER_CLASS, MARK_CLASS, NUMBER_CLASS,
};
use crate::token::{Token, TokenKind};

/// `letter (mark* letter)* | number+`, over code points.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let (l, m, n) = (LETTER_CLASS, MARK_CLASS, NUMBER_CLASS);
    Regex::new(&format!("{l}+(?:{m}*{l}+)*|{n}+")).expect("word pattern")
});

/// Lazy iterator over the word and number runs of a string.
///
/// Each call to [`universal_tokens`] starts a fresh scan, so the sequence can
/// be restarted at will.
pub struct UniversalMatches<'a> {
    source: &'a str,
    inner: Matches<'static, 'a>,
}

impl<'a> Iterator for UniversalMatches<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.inner.next()?;
        let kind = match m.as_str().chars().next().map(get_char_category) {
            Some(CharCategory::Number) => TokenKind::Number,
            _ => TokenKind::Word,
        };
        Some(Token::borrowed(self.source, m.start(), m.len(), kind))
    }
}

impl std::iter::FusedIterator for UniversalMatches<'_> {}

/// Scan `text` with the universal pattern
pub fn universal_tokens(text: &str) -> UniversalMatches<'_> {
    let re: &'static Regex = &WORD_PATTERN;
    UniversalMatches {
        source: text,
        inner: re.find_iter(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        universal_tokens(input)
            .map(|t| t.text.into_owned())
            .collect()
    }

    #[test]
    fn test_ascii_words() {
        assert_eq!(texts("the cat sat"), vec!["the", "cat", "sat"]);
        assert_eq!(texts("Hello, world!"), vec!["Hello", "world"]);
    }

    #[test]
    fn test_digits_split_from_letters() {
        assert_eq!(texts("abc123"), vec!["abc", "123"]);
        assert_eq!(texts("3.14"), vec!["3", "14"]);

        let kinds: Vec<TokenKind> = universal_tokens("abc123").map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Word, TokenKind::Number]);
    }

    #[test]
    fn test_marks_between_letters_are_kept() {
        // "café" written with a combining acute accent
        assert_eq!(texts("cafe\u{0301}s"), vec!["cafe\u{0301}s"]);
        // Thai: mai han akat and sara ii between consonants
        assert_eq!(texts("สวัสดีครับ"), vec!["สวัสดีครับ"]);
    }

    #[test]
    fn test_trailing_mark_is_not_part_of_match() {
        // A mark must be followed by a letter to be absorbed.
        assert_eq!(texts("e\u{0301} x"), vec!["e", "x"]);
    }

    #[test]
    fn test_mixed_scripts() {
        assert_eq!(
            texts("English, 日本語, ไทย"),
            vec!["English", "日本語", "ไทย"]
        );
    }

    #[test]
    fn test_symbols_and_emoji_dropped() {
        assert_eq!(texts("🎉 party 🎉 #2024"), vec!["party", "2024"]);
        assert!(texts("").is_empty());
        assert!(texts(" ,.!? ").is_empty());
    }

    #[test]
    fn test_offsets() {
        let tokens: Vec<_> = universal_tokens("  ab, 12").collect();
        assert_eq!((tokens[0].start, tokens[0].len), (2, 2));
        assert_eq!((tokens[1].start, tokens[1].len), (6, 2));
    }

    #[test]
    fn test_restartable() {
        let input = "one two";
        let first: Vec<_> = universal_tokens(input).collect();
        let second: Vec<_> = universal_tokens(input).collect();
        assert_eq!(first, second);
    }
}

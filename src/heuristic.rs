//! Dictionary-free segmentation for scripts written without word spaces.
//!
//! This is an approximation driven purely by character classes, not a
//! linguistic segmenter. One left-to-right pass:
//!
//! - whitespace, or any character outside the script's block, closes the
//!   pending token; if that character is not whitespace it becomes a token by
//!   itself
//! - characters inside the block accumulate into the pending token
//! - a leading vowel (one that opens a syllable, e.g. Thai เ แ โ ใ ไ) starts a
//!   new token unless the previous character is itself a leading vowel or a
//!   tone mark
//! - a token made only of script digits is a [`TokenKind::Number`]
//!
//! The tables come from [`ScriptProfile`]; Thai is the reference script.

use crate::char_categories::{get_char_category, CharCategory, ScriptClass, ScriptProfile};
use crate::token::{Token, TokenKind};

struct Pending {
    start: usize,
    last: ScriptClass,
    digits_only: bool,
}

impl Pending {
    fn new(start: usize, class: ScriptClass) -> Self {
        Pending {
            start,
            last: class,
            digits_only: class == ScriptClass::Digit,
        }
    }
}

struct HeuristicChunker<'a, 's> {
    text: &'a str,
    script: &'s ScriptProfile,
    tokens: Vec<Token<'a>>,
    pending: Option<Pending>,
}

impl<'a, 's> HeuristicChunker<'a, 's> {
    fn new(text: &'a str, script: &'s ScriptProfile) -> Self {
        HeuristicChunker {
            text,
            script,
            tokens: Vec::new(),
            pending: None,
        }
    }

    fn flush(&mut self, end: usize) {
        if let Some(p) = self.pending.take() {
            let kind = if p.digits_only {
                TokenKind::Number
            } else {
                TokenKind::Word
            };
            self.tokens
                .push(Token::borrowed(self.text, p.start, end - p.start, kind));
        }
    }

    fn run(mut self) -> Vec<Token<'a>> {
        for (i, c) in self.text.char_indices() {
            let Some(class) = self.script.classify(c) else {
                self.flush(i);
                if get_char_category(c) != CharCategory::Whitespace {
                    self.tokens
                        .push(Token::borrowed(self.text, i, c.len_utf8(), TokenKind::Other));
                }
                continue;
            };

            if self
                .pending
                .as_ref()
                .is_some_and(|p| opens_syllable(p.last, class))
            {
                self.flush(i);
            }

            match self.pending.as_mut() {
                Some(p) => {
                    p.last = class;
                    p.digits_only &= class == ScriptClass::Digit;
                }
                None => self.pending = Some(Pending::new(i, class)),
            }
        }

        self.flush(self.text.len());
        self.tokens
    }
}

fn opens_syllable(prev: ScriptClass, class: ScriptClass) -> bool {
    class == ScriptClass::LeadingVowel
        && !matches!(prev, ScriptClass::LeadingVowel | ScriptClass::ToneMark)
}

/// Segment `text` using the character classes of `script`
pub fn heuristic_segment<'a>(text: &'a str, script: &ScriptProfile) -> Vec<Token<'a>> {
    HeuristicChunker::new(text, script).run()
}

//! Character classification.
//!
//! Two layers live here: general Unicode category membership (letter, mark,
//! number) used by the universal matcher, and fixed per-script tables
//! ([`ScriptProfile`]) used by the heuristic segmenter for scripts written
//! without spaces between words.

use once_cell::sync::Lazy;
use regex::Regex;

/// Coarse Unicode category of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharCategory {
    /// General category L*
    Letter,
    /// General category M* (combining marks)
    Mark,
    /// General category N*
    Number,
    /// White_Space property
    Whitespace,
    /// Punctuation, symbols, emoji, controls, unassigned
    #[default]
    Other,
}

/// Regex class for general category L
pub(crate) const LETTER_CLASS: &str = r"\p{L}";
/// Regex class for general category M
pub(crate) const MARK_CLASS: &str = r"\p{M}";
/// Regex class for general category N
pub(crate) const NUMBER_CLASS: &str = r"\p{N}";

static LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{LETTER_CLASS}$")).expect("letter class"));
static MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{MARK_CLASS}$")).expect("mark class"));

fn matches_class(re: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    re.is_match(c.encode_utf8(&mut buf))
}

/// Check whether `c` is in general category L (any letter)
pub fn is_letter(c: char) -> bool {
    // Fast path for the overwhelmingly common case.
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches_class(&LETTER, c)
}

/// Check whether `c` is in general category M (combining mark)
pub fn is_mark(c: char) -> bool {
    !c.is_ascii() && matches_class(&MARK, c)
}

/// Check whether `c` is in general category N (any numeric character)
pub fn is_number(c: char) -> bool {
    c.is_numeric()
}

/// Get the coarse category of a character
pub fn get_char_category(c: char) -> CharCategory {
    if c.is_whitespace() {
        CharCategory::Whitespace
    } else if is_letter(c) {
        CharCategory::Letter
    } else if is_mark(c) {
        CharCategory::Mark
    } else if is_number(c) {
        CharCategory::Number
    } else {
        CharCategory::Other
    }
}

/// Role of a character inside a script that has a [`ScriptProfile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptClass {
    /// Base consonant
    Consonant,
    /// Vowel written before the consonant it is pronounced after; it opens a syllable
    LeadingVowel,
    /// Vowel sign written after, above or below its consonant
    DependentVowel,
    /// Tone mark
    ToneMark,
    /// Script-native digit
    Digit,
    /// Anything else in the block (repetition marks, currency, punctuation)
    Sign,
}

type Ranges = &'static [(char, char)];

fn in_ranges(ranges: Ranges, c: char) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Fixed classification table for one script written without word spaces
#[derive(Debug)]
pub struct ScriptProfile {
    /// Human readable script name
    pub name: &'static str,
    /// First code point of the Unicode block
    pub block_start: char,
    /// Last code point of the Unicode block
    pub block_end: char,
    consonants: Ranges,
    leading_vowels: Ranges,
    dependent_vowels: Ranges,
    tone_marks: Ranges,
    digits: Ranges,
}

impl ScriptProfile {
    /// Check if `c` lies inside this script's Unicode block
    pub fn contains(&self, c: char) -> bool {
        (self.block_start..=self.block_end).contains(&c)
    }

    /// Classify a character of this script, `None` if outside the block
    pub fn classify(&self, c: char) -> Option<ScriptClass> {
        if !self.contains(c) {
            return None;
        }
        let class = if in_ranges(self.leading_vowels, c) {
            ScriptClass::LeadingVowel
        } else if in_ranges(self.dependent_vowels, c) {
            ScriptClass::DependentVowel
        } else if in_ranges(self.tone_marks, c) {
            ScriptClass::ToneMark
        } else if in_ranges(self.consonants, c) {
            ScriptClass::Consonant
        } else if in_ranges(self.digits, c) {
            ScriptClass::Digit
        } else {
            ScriptClass::Sign
        };
        Some(class)
    }
}

/// Thai, U+0E00..U+0E7F
pub static THAI: ScriptProfile = ScriptProfile {
    name: "Thai",
    block_start: '\u{0E00}',
    block_end: '\u{0E7F}',
    consonants: &[('\u{0E01}', '\u{0E2E}')],
    // เ แ โ ใ ไ
    leading_vowels: &[('\u{0E40}', '\u{0E44}')],
    // ะ ั า ำ ิ ี ึ ื ุ ู ฺ, ๅ, ็
    dependent_vowels: &[
        ('\u{0E30}', '\u{0E3A}'),
        ('\u{0E45}', '\u{0E45}'),
        ('\u{0E47}', '\u{0E47}'),
    ],
    // ่ ้ ๊ ๋
    tone_marks: &[('\u{0E48}', '\u{0E4B}')],
    digits: &[('\u{0E50}', '\u{0E59}')],
};

/// Lao, U+0E80..U+0EFF
pub static LAO: ScriptProfile = ScriptProfile {
    name: "Lao",
    block_start: '\u{0E80}',
    block_end: '\u{0EFF}',
    consonants: &[('\u{0E81}', '\u{0EAE}')],
    // ເ ແ ໂ ໃ ໄ
    leading_vowels: &[('\u{0EC0}', '\u{0EC4}')],
    dependent_vowels: &[('\u{0EB0}', '\u{0EBC}')],
    // ່ ້ ໊ ໋
    tone_marks: &[('\u{0EC8}', '\u{0ECB}')],
    digits: &[('\u{0ED0}', '\u{0ED9}')],
};

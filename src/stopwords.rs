//! Stopword sets and the sources that feed them.
//!
//! Every tokenizer starts from the built-in English list, adds whatever its
//! [`StopwordSource`] returns for the configured language, then adds the
//! caller's custom words. Missing language data is a normal outcome, not an
//! error.

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{read_utf8, Result};
use crate::language::Language;

/// Base English stopword list, always present
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

const THAI_STOPWORDS: &[&str] = &[
    "และ", "ที่", "ของ", "ใน", "เป็น", "ไม่", "มี", "ได้", "ให้", "ว่า", "จะ", "กับ", "แต่",
    "หรือ", "นี้", "นั้น", "ก็", "คือ", "จาก", "ซึ่ง",
];

const LAO_STOPWORDS: &[&str] = &[
    "ແລະ", "ທີ່", "ຂອງ", "ໃນ", "ເປັນ", "ບໍ່", "ມີ", "ໄດ້", "ໃຫ້", "ວ່າ", "ຈະ", "ກັບ",
];

const FRENCH_STOPWORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "et", "ou", "mais", "est", "sont", "dans",
    "sur", "pour", "par", "avec", "ce", "cette", "ces", "il", "elle", "ils", "elles", "nous",
    "vous", "je", "tu", "que", "qui", "ne", "pas", "au", "aux",
];

const GERMAN_STOPWORDS: &[&str] = &[
    "der", "die", "das", "und", "oder", "aber", "ist", "sind", "ein", "eine", "einer", "eines",
    "dem", "den", "des", "im", "auf", "mit", "von", "zu", "für", "nicht", "ich", "du", "er",
    "sie", "es", "wir", "ihr", "auch", "als", "wie",
];

const SPANISH_STOPWORDS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "y", "o", "pero", "es", "son", "en",
    "de", "del", "al", "con", "por", "para", "que", "no", "se", "su", "sus", "lo", "como", "más",
];

/// Supplies language-specific stopwords.
///
/// `None` means "no data for this language" and is never an error. Any
/// `Fn(&Language) -> Option<Vec<String>>` can act as a source.
pub trait StopwordSource {
    /// Stopwords for `language`, if any are known
    fn stopwords(&self, language: &Language) -> Option<Vec<String>>;
}

impl<F> StopwordSource for F
where
    F: Fn(&Language) -> Option<Vec<String>>,
{
    fn stopwords(&self, language: &Language) -> Option<Vec<String>> {
        self(language)
    }
}

/// Source with no language data at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStopwords;

impl StopwordSource for NoStopwords {
    fn stopwords(&self, _language: &Language) -> Option<Vec<String>> {
        None
    }
}

/// Lists compiled into the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStopwords;

impl StopwordSource for BuiltinStopwords {
    fn stopwords(&self, language: &Language) -> Option<Vec<String>> {
        let list = match language.primary() {
            "th" => THAI_STOPWORDS,
            "lo" => LAO_STOPWORDS,
            "fr" => FRENCH_STOPWORDS,
            "de" => GERMAN_STOPWORDS,
            "es" => SPANISH_STOPWORDS,
            _ => return None,
        };
        Some(list.iter().map(|s| s.to_string()).collect())
    }
}

/// Lists read from `<dir>/<code>.json` (a JSON array of strings) or
/// `<dir>/<code>.txt` (one word per line)
#[derive(Debug, Clone)]
pub struct DirectoryStopwords {
    dir: PathBuf,
}

impl DirectoryStopwords {
    /// Read stopword files from `dir`
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        DirectoryStopwords { dir: dir.into() }
    }

    /// The directory searched
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the list for `language`, reporting read and parse failures.
    ///
    /// `Ok(None)` when no file exists for the language. The full code is
    /// tried before the primary subtag.
    pub fn try_load(&self, language: &Language) -> Result<Option<Vec<String>>> {
        let mut codes = vec![language.code()];
        if language.primary() != language.code() {
            codes.push(language.primary());
        }

        for code in codes {
            if !is_safe_code(code) {
                continue;
            }

            let json = self.dir.join(format!("{code}.json"));
            if json.is_file() {
                let words: Vec<String> = serde_json::from_str(&read_utf8(&json)?)?;
                return Ok(Some(words));
            }

            let txt = self.dir.join(format!("{code}.txt"));
            if txt.is_file() {
                let content = read_utf8(&txt)?;
                let words = content
                    .lines()
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(String::from)
                    .collect();
                return Ok(Some(words));
            }
        }

        Ok(None)
    }
}

impl StopwordSource for DirectoryStopwords {
    fn stopwords(&self, language: &Language) -> Option<Vec<String>> {
        match self.try_load(language) {
            Ok(words) => words,
            Err(e) => {
                debug!("ignoring stopwords for {language}: {e}");
                None
            }
        }
    }
}

/// Codes are used as file names; keep them to a single plain path component.
fn is_safe_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Lowercase form of `word`, borrowing when it is already lowercase.
///
/// Titlecase letters such as `ǅ` are not uppercase but still change, so the
/// check compares against the full lowercase mapping.
fn fold_case(word: &str) -> Cow<'_, str> {
    if word.is_ascii() && !word.bytes().any(|b| b.is_ascii_uppercase()) {
        return Cow::Borrowed(word);
    }
    let lower = word.to_lowercase();
    if lower == word {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(lower)
    }
}

/// A mutable set of lowercase stopwords
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Create an empty set
    pub fn new() -> Self {
        StopwordSet::default()
    }

    /// The built-in English base set
    pub fn english() -> Self {
        let mut set = StopwordSet::new();
        set.add(ENGLISH_STOPWORDS);
        set
    }

    /// Build the set a tokenizer starts from: English base, then the source's
    /// list for `language`, then `custom`
    pub fn for_language<I, S>(language: &Language, source: &dyn StopwordSource, custom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = StopwordSet::english();
        match source.stopwords(language) {
            Some(extra) => {
                debug!("adding {} stopwords for {language}", extra.len());
                set.add(&extra);
            }
            None => debug!("no stopword data for {language}, using base set"),
        }
        set.add(custom);
        set
    }

    /// Add words (lowercased)
    pub fn add<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    /// Remove words (compared lowercased)
    pub fn remove<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(&word.as_ref().trim().to_lowercase());
        }
    }

    /// Check whether the lowercase form of `word` is a stopword
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&*fold_case(word))
    }

    /// Number of stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the stopwords in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

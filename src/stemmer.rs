//! Approximate suffix-stripping stemmer.
//!
//! Implements the plural, `-ed`/`-ing` and `y` -> `i` steps of the Porter
//! algorithm (steps 1a, 1b and 1c) without the measure conditions and without
//! steps 2 to 5. Output is intentionally partial; it is stable on its own
//! output for the words it reduces.

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(is_vowel)
}

fn drop_suffix(word: &mut String, n: usize) {
    // All suffixes handled here are ASCII, so byte arithmetic stays on a char boundary.
    word.truncate(word.len() - n);
}

/// Step 1: plural suffixes
fn strip_plural(word: &mut String) {
    if word.ends_with("sses") || word.ends_with("ies") {
        drop_suffix(word, 2);
    } else if word.ends_with("ss") {
        // caress
    } else if word.ends_with('s') {
        drop_suffix(word, 1);
    }
}

/// Step 2: `-eed`, `-ed`, `-ing`
fn strip_verb_suffix(word: &mut String) {
    if word.ends_with("eed") {
        drop_suffix(word, 1);
        return;
    }

    let suffix_len = if word.ends_with("ed") && has_vowel(&word[..word.len() - 2]) {
        2
    } else if word.ends_with("ing") && has_vowel(&word[..word.len() - 3]) {
        3
    } else {
        return;
    };
    drop_suffix(word, suffix_len);

    if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
        word.push('e');
        return;
    }

    let mut tail = word.chars().rev();
    if let (Some(last), Some(before)) = (tail.next(), tail.next()) {
        if last == before && !matches!(last, 'l' | 's' | 'z') {
            word.pop();
        }
    }
}

/// Step 3: terminal `y` after a consonant becomes `i`
fn y_to_i(word: &mut String) {
    if !word.ends_with('y') || word.chars().count() <= 2 {
        return;
    }
    let before = word.chars().rev().nth(1);
    if before.is_some_and(|c| !is_vowel(c)) {
        word.pop();
        word.push('i');
    }
}

/// Stem a single word.
///
/// The word is lowercased first. Empty input yields an empty string.
pub fn stem(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let mut word = word.to_lowercase();
    strip_plural(&mut word);
    strip_verb_suffix(&mut word);
    y_to_i(&mut word);
    word
}

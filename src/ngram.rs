//! Operations derived from a finished token sequence: n-grams and counts.

use std::collections::HashMap;

/// Every contiguous window of `n` tokens, joined by a single space.
///
/// Empty when `n` is zero or larger than the number of tokens.
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<String> {
    if n == 0 || n > tokens.len() {
        return Vec::new();
    }

    tokens
        .windows(n)
        .map(|window| {
            let parts: Vec<&str> = window.iter().map(AsRef::as_ref).collect();
            parts.join(" ")
        })
        .collect()
}

/// Occurrence count of each distinct token
pub fn frequencies<S: AsRef<str>>(tokens: &[S]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
    }
    counts
}

/// The `k` most frequent entries, by count descending then token ascending
pub fn top_frequencies(counts: &HashMap<String, usize>, k: usize) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts.iter().map(|(t, &c)| (t.as_str(), c)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(k);
    entries
}

//! Integration tests for the public tokenizer API.
//!
//! These exercise whole-pipeline behavior through `Tokenizer` and the
//! re-exported building blocks, including file-backed dictionaries and
//! stopword lists.

use std::fs;
use std::io::Write;

use polyseg::{
    data_dir, get_char_category, longest_match_segment, ngrams, stem, universal_tokens,
    CharCategory, Dictionary, DirectoryStopwords, PolysegError, StopwordSet, Token, TokenKind,
    Tokenizer, TokenizerConfig,
};
use proptest::prelude::*;

fn texts(tokens: &[Token<'_>]) -> Vec<String> {
    tokens.iter().map(|t| t.text.to_string()).collect()
}

// =============================================================================
// Character Category Tests
// =============================================================================

#[test]
fn test_letter_category() {
    assert_eq!(get_char_category('a'), CharCategory::Letter);
    assert_eq!(get_char_category('語'), CharCategory::Letter);
    assert_eq!(get_char_category('ก'), CharCategory::Letter);
}

#[test]
fn test_mark_and_number_category() {
    assert_eq!(get_char_category('\u{0301}'), CharCategory::Mark);
    assert_eq!(get_char_category('7'), CharCategory::Number);
    assert_eq!(get_char_category('๗'), CharCategory::Number);
    assert_eq!(get_char_category(','), CharCategory::Other);
}

// =============================================================================
// Universal Tokenization Tests
// =============================================================================

#[test]
fn test_ascii_words() {
    let tokenizer = Tokenizer::default();
    assert_eq!(tokenizer.tokenize("the cat sat"), vec!["the", "cat", "sat"]);
}

#[test]
fn test_digits_split_from_letters() {
    let tokenizer = Tokenizer::default();
    assert_eq!(tokenizer.tokenize("abc123"), vec!["abc", "123"]);
}

#[test]
fn test_mixed_script_without_dictionary() {
    let tokenizer = Tokenizer::default();
    let tokens = tokenizer.tokenize("English, 日本語, ไทย");
    assert_eq!(tokens, vec!["english", "日本語", "ไทย"]);
}

#[test]
fn test_combining_marks_stay_inside_words() {
    let tokenizer = Tokenizer::default();
    // "e" followed by U+0301 between letters
    assert_eq!(tokenizer.tokenize("cafe\u{0301}s"), vec!["cafe\u{0301}s"]);
}

#[test]
fn test_empty_input_everywhere() {
    let tokenizer = Tokenizer::default();
    assert!(tokenizer.tokenize("").is_empty());
    assert!(tokenizer.tokenize_detailed("").is_empty());
    assert!(tokenizer.ngram_tokenize("", 1).is_empty());
    assert!(tokenizer.token_frequency("").is_empty());

    let thai = Tokenizer::new(TokenizerConfig::new().with_language("th"));
    assert!(thai.tokenize("").is_empty());
    assert!(universal_tokens("").next().is_none());
}

#[test]
fn test_punctuation_only() {
    let tokenizer = Tokenizer::default();
    assert!(tokenizer.tokenize("... !!! ---").is_empty());
}

// =============================================================================
// Dictionary Segmentation Tests
// =============================================================================

#[test]
fn test_segmentation_of_known_entries() {
    let dictionary = Dictionary::from_words(["การ", "ประมวล"]);
    let tokens = longest_match_segment("การประมวล", &dictionary);
    assert_eq!(texts(&tokens), vec!["การ", "ประมวล"]);
}

#[test]
fn test_longest_match_precedence() {
    let dictionary = Dictionary::from_words(["a", "ab", "abc"]);
    let tokens = longest_match_segment("abcd", &dictionary);
    assert_eq!(texts(&tokens), vec!["abc", "d"]);
    assert_eq!(tokens[0].kind, TokenKind::Word);
    assert_eq!(tokens[1].kind, TokenKind::Unknown);
}

#[test]
fn test_segmentation_skips_spaces_between_tokens() {
    let dictionary = Dictionary::from_words(["ไป", "เที่ยว"]);
    let tokens = longest_match_segment("ไป เที่ยว", &dictionary);
    assert_eq!(texts(&tokens), vec!["ไป", "เที่ยว"]);
}

#[test]
fn test_segmentation_positions_cover_input() {
    let text = "การประมวลผล";
    let dictionary = Dictionary::from_words(["การ", "ประมวล", "ผล"]);
    let tokens = longest_match_segment(text, &dictionary);

    let mut offset = 0;
    for token in &tokens {
        assert_eq!(token.start, offset);
        assert_eq!(&text[token.start..token.end()], token.as_str());
        offset = token.end();
    }
    assert_eq!(offset, text.len());
}

#[test]
fn test_lao_dictionary() {
    let tokenizer = Tokenizer::builder(TokenizerConfig::new().with_language("lo"))
        .dictionary(Dictionary::from_words(["ໄປ", "ເຮືອນ"]))
        .build();
    assert_eq!(tokenizer.tokenize("ໄປເຮືອນ"), vec!["ໄປ", "ເຮືອນ"]);
}

#[test]
fn test_heuristic_fallback_for_thai() {
    let tokenizer = Tokenizer::new(TokenizerConfig::new().with_language("th"));
    assert_eq!(tokenizer.tokenize("ภาษาไทย"), vec!["ภาษา", "ไทย"]);
}

#[test]
fn test_region_subtag_selects_script() {
    let tokenizer = Tokenizer::builder(TokenizerConfig::new().with_language("th-TH"))
        .dictionary(Dictionary::from_words(["การ", "ผล"]))
        .build();
    assert!(tokenizer.uses_dictionary());
    assert_eq!(tokenizer.tokenize("การผล"), vec!["การ", "ผล"]);
}

// =============================================================================
// Dictionary Loading Tests
// =============================================================================

#[test]
fn test_load_dictionary_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "การ\r\n\r\n  ประมวล  \nผล\n\n").unwrap();

    let mut tokenizer = Tokenizer::new(TokenizerConfig::new().with_language("th"));
    assert_eq!(tokenizer.load_dictionary(file.path()).unwrap(), 3);
    assert_eq!(
        tokenizer.tokenize("การประมวลผล"),
        vec!["การ", "ประมวล", "ผล"]
    );
}

#[test]
fn test_load_missing_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let mut tokenizer = Tokenizer::new(TokenizerConfig::new().with_language("th"));

    let err = tokenizer
        .load_dictionary(dir.path().join("missing.txt"))
        .unwrap_err();
    assert!(matches!(err, PolysegError::Io { .. }));
    assert!(tokenizer.dictionary().is_none());
}

#[test]
fn test_load_non_utf8_dictionary() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, b'\n']).unwrap();

    let mut tokenizer = Tokenizer::new(TokenizerConfig::new().with_language("th"));
    let err = tokenizer.load_dictionary(file.path()).unwrap_err();
    assert!(matches!(err, PolysegError::Decode { .. }));
}

#[tokio::test]
async fn test_async_load_matches_blocking() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ໄປ\nເຮືອນ").unwrap();

    let config = TokenizerConfig::new().with_language("lo");
    let mut blocking = Tokenizer::new(config.clone());
    let mut non_blocking = Tokenizer::new(config);

    assert_eq!(
        blocking.load_dictionary(file.path()).unwrap(),
        non_blocking.load_dictionary_async(file.path()).await.unwrap()
    );
    assert_eq!(blocking.tokenize("ໄປເຮືອນ"), non_blocking.tokenize("ໄປເຮືອນ"));
}

#[tokio::test]
async fn test_async_load_missing_file() {
    let mut tokenizer = Tokenizer::new(TokenizerConfig::new().with_language("th"));
    assert!(tokenizer
        .load_dictionary_async("/definitely/not/here.txt")
        .await
        .is_err());
}

#[test]
fn test_default_dictionary_location() {
    let base = tempfile::tempdir().unwrap();
    let language = TokenizerConfig::new().with_language("th").language;
    let path = data_dir::dictionary_path(&language, Some(base.path()));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "ไป\nเที่ยว\n").unwrap();

    let mut tokenizer = Tokenizer::new(TokenizerConfig::new().with_language("th"));
    assert_eq!(tokenizer.load_dictionary(&path).unwrap(), 2);
    assert_eq!(
        data_dir::list_dictionary_files(Some(base.path())).unwrap(),
        vec![path]
    );
}

// =============================================================================
// Pipeline Tests
// =============================================================================

#[test]
fn test_stopwords_removed_case_insensitively() {
    let config = TokenizerConfig::new().with_remove_stopwords(true);
    let tokenizer = Tokenizer::new(config);
    assert_eq!(tokenizer.tokenize("The cat IS on the mat"), vec!["cat", "mat"]);
}

#[test]
fn test_pipeline_order() {
    let config = TokenizerConfig::new()
        .with_remove_stopwords(true)
        .with_stemming(true);
    let tokenizer = Tokenizer::new(config);
    assert_eq!(
        tokenizer.tokenize("Running dogs are hopping"),
        vec!["run", "dog", "hop"]
    );
}

#[test]
fn test_thai_stopwords() {
    let config = TokenizerConfig::new()
        .with_language("th")
        .with_remove_stopwords(true);
    let tokenizer = Tokenizer::builder(config)
        .dictionary(Dictionary::from_words(["แมว", "และ", "หมา"]))
        .build();
    assert_eq!(tokenizer.tokenize("แมวและหมา"), vec!["แมว", "หมา"]);
}

#[test]
fn test_stopwords_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("it.json"), r#"["il", "della"]"#).unwrap();

    let config = TokenizerConfig::new()
        .with_language("it")
        .with_remove_stopwords(true);
    let tokenizer = Tokenizer::builder(config)
        .stopword_source(DirectoryStopwords::new(dir.path()))
        .build();
    assert_eq!(tokenizer.tokenize("Il gatto della casa"), vec!["gatto", "casa"]);
}

#[test]
fn test_stopword_closure_source() {
    let config = TokenizerConfig::new()
        .with_language("pt")
        .with_remove_stopwords(true);
    let tokenizer = Tokenizer::builder(config)
        .stopword_source(|_: &polyseg::Language| Some(vec!["o".to_string()]))
        .build();
    assert_eq!(tokenizer.tokenize("o gato"), vec!["gato"]);
}

#[test]
fn test_config_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("polyseg.json");
    fs::write(&path, r#"{"stemming": true, "customStopwords": ["cats"], "removeStopwords": true}"#)
        .unwrap();

    let tokenizer = Tokenizer::new(TokenizerConfig::from_json_file(&path).unwrap());
    assert_eq!(tokenizer.tokenize("cats and dogs"), vec!["dog"]);
}

#[test]
fn test_detailed_tokens_serialize() {
    let tokenizer = Tokenizer::default();
    let tokens = tokenizer.tokenize_detailed("Hi 5");
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json[0]["text"], "hi");
    assert_eq!(json[0]["kind"], "WORD");
    assert_eq!(json[1]["kind"], "NUMBER");
    assert_eq!(json[1]["start"], 3);
}

// =============================================================================
// Derived Operations Tests
// =============================================================================

#[test]
fn test_ngram_tokenize() {
    let tokenizer = Tokenizer::default();
    assert_eq!(
        tokenizer.ngram_tokenize("one two three four", 3),
        vec!["one two three", "two three four"]
    );
    assert!(tokenizer.ngram_tokenize("one two", 0).is_empty());
}

#[test]
fn test_token_frequency_after_pipeline() {
    let config = TokenizerConfig::new().with_stemming(true);
    let tokenizer = Tokenizer::new(config);
    let freq = tokenizer.token_frequency("Cat cats CAT dog");
    assert_eq!(freq["cat"], 3);
    assert_eq!(freq["dog"], 1);
}

#[test]
fn test_stem_idempotent_on_reduced_words() {
    for word in ["running", "hopping", "cats", "ponies", "caresses", "conflated", "agreed", "happy"] {
        let once = stem(word);
        assert_eq!(stem(&once), once, "stem not stable for {word}");
    }
}

// =============================================================================
// Property Tests
// =============================================================================

const VOCABULARY: &[&str] = &[
    "the", "cat", "and", "dog", "is", "on", "mat", "with", "a", "bird", "of", "tree",
];

proptest! {
    #[test]
    fn prop_ascii_words_split_on_spaces(words in prop::collection::vec("[a-z]{1,8}", 0..12)) {
        let tokenizer = Tokenizer::default();
        let text = words.join(" ");
        prop_assert_eq!(tokenizer.tokenize(&text), words);
    }

    #[test]
    fn prop_stopword_removal_is_subsequence(
        picks in prop::collection::vec(prop::sample::select(VOCABULARY), 0..20)
    ) {
        let text = picks.join(" ");
        let all = Tokenizer::default().tokenize(&text);
        let kept = Tokenizer::new(TokenizerConfig::new().with_remove_stopwords(true))
            .tokenize(&text);

        let stopwords = StopwordSet::english();
        let mut remaining = all.iter();
        for token in &kept {
            prop_assert!(!stopwords.contains(token));
            prop_assert!(remaining.any(|t| t == token));
        }
    }

    #[test]
    fn prop_ngram_count(len in 0usize..15, n in 1usize..20) {
        let tokens: Vec<String> = (0..len).map(|i| format!("t{i}")).collect();
        let expected = if n <= len { len - n + 1 } else { 0 };
        prop_assert_eq!(ngrams(&tokens, n).len(), expected);
    }

    #[test]
    fn prop_stem_leaves_unsuffixed_words_alone(word in "[a-rt-xz]{1,10}") {
        prop_assume!(!word.ends_with("ed") && !word.ends_with("ing"));
        prop_assert_eq!(stem(&word), word.clone());
    }

    #[test]
    fn prop_segmentation_never_loses_text(text in "[กขคงจไปเที่ยว่้ abc]{0,30}") {
        // Spaces are only skipped after a token.
        prop_assume!(!text.starts_with(' '));
        let dictionary = Dictionary::from_words(["ไป", "เที่ยว", "ขค"]);
        let joined: String = longest_match_segment(&text, &dictionary)
            .iter()
            .map(|t| t.as_str())
            .collect();
        prop_assert_eq!(joined, text.replace(' ', ""));
    }
}

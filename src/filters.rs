//! Post-processing of raw tokens.
//!
//! Stages run in a fixed order: lowercase fold, stopword removal, stemming.
//! Each is switched on by the configuration and by what the language allows.

use std::borrow::Cow;

use crate::config::TokenizerConfig;
use crate::stemmer::stem;
use crate::stopwords::StopwordSet;
use crate::token::Token;

/// Replace the token text only when it actually changes, so untouched tokens
/// keep borrowing the input.
fn rewrite(token: &mut Token<'_>, new_text: String) {
    if new_text != token.text {
        token.text = Cow::Owned(new_text);
    }
}

/// Fold every token to lowercase
pub fn lowercase(tokens: &mut [Token<'_>]) {
    for token in tokens.iter_mut() {
        let lower = token.text.to_lowercase();
        rewrite(token, lower);
    }
}

/// Drop tokens whose lowercase form is in `stopwords`, keeping order
pub fn remove_stopwords(tokens: &mut Vec<Token<'_>>, stopwords: &StopwordSet) {
    tokens.retain(|t| !stopwords.contains(&t.text));
}

/// Stem every token
pub fn stem_tokens(tokens: &mut [Token<'_>]) {
    for token in tokens.iter_mut() {
        let stemmed = stem(&token.text);
        rewrite(token, stemmed);
    }
}

/// The stages that are active for one tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pipeline {
    /// Lowercase fold
    pub lowercase: bool,
    /// Stopword removal
    pub remove_stopwords: bool,
    /// Stemming
    pub stem: bool,
}

impl Pipeline {
    /// Resolve the active stages from a configuration
    pub fn from_config(config: &TokenizerConfig) -> Self {
        let language = &config.language;
        Pipeline {
            lowercase: config.lowercase && language.is_case_sensitive(),
            remove_stopwords: config.remove_stopwords,
            stem: config.stemming && language.is_stemmable(),
        }
    }

    /// Run the active stages over `tokens`
    pub fn apply(&self, tokens: &mut Vec<Token<'_>>, stopwords: &StopwordSet) {
        if self.lowercase {
            lowercase(tokens);
        }
        if self.remove_stopwords {
            remove_stopwords(tokens, stopwords);
        }
        if self.stem {
            stem_tokens(tokens);
        }
    }
}

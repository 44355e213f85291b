//! Stop filter implementation.
//!
//! This module provides a filter that removes words belonging to a fixed set.
//! The translator uses it to drop articles, which have no counterpart in the
//! target language.
//!
//! # Examples
//!
//! ```
//! use easyspeak::analysis::token_filter::Filter;
//! use easyspeak::analysis::token_filter::stop::StopFilter;
//! use easyspeak::analysis::token::Token;
//! use easyspeak::lexicon::LexiconSet;
//!
//! let filter = StopFilter::new(LexiconSet::builtin().drop_words().clone());
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("big", 1),
//!     Token::new("car", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "big");
//! assert_eq!(result[1].text, "car");
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;

/// A filter that removes stop words from the token stream.
///
/// Tokens already marked as stopped by an earlier filter pass through
/// untouched.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter over the given stop words.
    pub fn new(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.is_stopped() || !self.is_stop_word(&token.text))
            .collect();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconSet;

    fn articles() -> StopFilter {
        StopFilter::new(LexiconSet::builtin().drop_words().clone())
    }

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::new(["the", "an"].iter().map(|w| w.to_string()).collect());
        let tokens = vec![
            Token::new("we", 0),
            Token::new("like", 1),
            Token::new("the", 2),
            Token::new("car", 3),
            Token::new("an", 4),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "we");
        assert_eq!(result[1].text, "like");
        assert_eq!(result[2].text, "car");
        assert_eq!(result[2].position, 3);
    }

    #[test]
    fn test_lexicon_articles() {
        let filter = articles();
        assert!(filter.is_stop_word("a"));
        assert!(filter.is_stop_word("an"));
        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("and"));
    }

    #[test]
    fn test_stopped_tokens_pass_through() {
        let filter = articles();
        let tokens = vec![Token::new("the", 0).stop(), Token::new("the", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();

        assert_eq!(result.len(), 1);
        assert!(result[0].is_stopped());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(articles().name(), "stop");
    }
}

//! Strip filter implementation.

use super::Filter;
use crate::analysis::token::{Token, TokenStream};

/// A filter that removes a fixed set of characters from every token.
///
/// Tokens left with no text are dropped from the stream.
#[derive(Clone, Debug)]
pub struct StripFilter {
    chars: Vec<char>,
}

impl StripFilter {
    /// Create a new strip filter removing the given characters.
    pub fn new(chars: &[char]) -> Self {
        StripFilter {
            chars: chars.to_vec(),
        }
    }

    /// A filter removing apostrophes, so that "don't" and "dont" look alike.
    pub fn apostrophes() -> Self {
        Self::new(&['\''])
    }

    /// Remove the configured characters from a single word.
    pub fn strip(&self, text: &str) -> String {
        text.chars().filter(|c| !self.chars.contains(c)).collect()
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                let stripped = self.strip(&token.text);
                if stripped.is_empty() {
                    None
                } else {
                    Some(token.with_text(stripped))
                }
            })
            .collect();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}

//! Token filter implementations for token transformation.
//!
//! Filters transform token streams produced by tokenizers. They can modify,
//! remove, flag, or expand tokens.
//!
//! # Available Filters
//!
//! - [`strip::StripFilter`] - Removes specific characters from token text
//! - [`stop::StopFilter`] - Removes words from a fixed set
//!
//! The grammar and substitution stages add their own filters
//! ([`AuxiliaryStripFilter`](crate::grammar::auxiliary::AuxiliaryStripFilter),
//! [`NegationFilter`](crate::grammar::negation::NegationFilter),
//! [`LexiconFilter`](crate::translate::substitute::LexiconFilter)).
//!
//! # Filter Chaining
//!
//! ```text
//! Tokens → Strip Apostrophes → Drop Articles → Lexicon Substitution
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream. Filtering
/// cannot fail.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use easyspeak::analysis::token::{Token, TokenStream};
/// use easyspeak::analysis::token_filter::Filter;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> TokenStream {
///         let reversed: Vec<Token> = tokens
///             .map(|t| {
///                 let text: String = t.text.chars().rev().collect();
///                 t.with_text(text)
///             })
///             .collect();
///         Box::new(reversed.into_iter())
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stop;
pub mod strip;

//! Negation detection and stripping.
//!
//! A token is a negation marker when its apostrophe-free form is in the
//! lexicon's negation set, or when it is the bare remnant "nt". The remnant
//! rule catches contractions whose halves were split apart ("didn t"), but it
//! will also fire on an unrelated stray "nt"; it is a candidate for tightening.
//!
//! An auxiliary directly in front of a marker that negates a verb ("did not",
//! "will not", "do n't") is the carrier of the negation and is removed along
//! with it, so "I did not eat" keeps only "i eat". The determiner "no" negates
//! the noun after it, so "I have no car" keeps "have".

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::strip::StripFilter;
use crate::lexicon::LexiconSet;

const CONTRACTION_REMNANT: &str = "nt";
const DETERMINER_NEGATION: &str = "no";

/// The tokens left after negation stripping, and whether any were removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegationOutcome {
    pub tokens: Vec<Token>,
    pub negated: bool,
}

/// A filter that marks negation markers, and the auxiliaries carrying them,
/// as stopped. Every other token is left untouched and in order.
#[derive(Clone, Debug)]
pub struct NegationFilter {
    lexicon: Arc<LexiconSet>,
    apostrophes: StripFilter,
}

impl NegationFilter {
    pub fn new(lexicon: Arc<LexiconSet>) -> Self {
        NegationFilter {
            lexicon,
            apostrophes: StripFilter::apostrophes(),
        }
    }

    /// Check whether a single word is a negation marker.
    pub fn is_negation_marker(&self, word: &str) -> bool {
        let bare = self.apostrophes.strip(word);
        self.lexicon.is_negation(&bare) || bare == CONTRACTION_REMNANT
    }

    /// Check whether a word is a marker that negates the verb, and so can be
    /// carried by the auxiliary in front of it.
    pub fn negates_verb(&self, word: &str) -> bool {
        self.is_negation_marker(word) && self.apostrophes.strip(word) != DETERMINER_NEGATION
    }
}

impl Filter for NegationFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let tokens: Vec<Token> = tokens.collect();
        let markers: Vec<bool> = tokens
            .iter()
            .map(|token| self.is_negation_marker(&token.text))
            .collect();
        let verb_negators: Vec<bool> = tokens
            .iter()
            .map(|token| self.negates_verb(&token.text))
            .collect();

        let marked: Vec<Token> = tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| {
                let carries_negation = verb_negators.get(i + 1).copied().unwrap_or(false)
                    && self.lexicon.is_auxiliary(&token.text);
                if markers[i] || carries_negation {
                    token.stop()
                } else {
                    token
                }
            })
            .collect();

        Box::new(marked.into_iter())
    }

    fn name(&self) -> &'static str {
        "negation"
    }
}

/// Remove every negation marker (and the auxiliary carrying it) and report
/// whether one was present.
///
/// # Examples
///
/// ```
/// use easyspeak::analysis::token::{Token, texts};
/// use easyspeak::grammar::detect_and_strip_negation;
/// use easyspeak::lexicon::LexiconSet;
///
/// let tokens = vec![Token::new("i", 0), Token::new("don't", 1), Token::new("eat", 2)];
/// let outcome = detect_and_strip_negation(&tokens, &LexiconSet::builtin());
///
/// assert!(outcome.negated);
/// assert_eq!(texts(&outcome.tokens), vec!["i", "eat"]);
/// ```
pub fn detect_and_strip_negation(tokens: &[Token], lexicon: &Arc<LexiconSet>) -> NegationOutcome {
    let filter = NegationFilter::new(Arc::clone(lexicon));
    let (removed, kept): (Vec<Token>, Vec<Token>) = filter
        .filter(Box::new(tokens.to_vec().into_iter()))
        .partition(Token::is_stopped);

    NegationOutcome {
        tokens: kept,
        negated: !removed.is_empty(),
    }
}

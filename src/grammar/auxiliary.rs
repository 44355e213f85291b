//! Auxiliary verb stripping.

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::lexicon::LexiconSet;

/// Remove leading auxiliary verbs ("will", "did", "do", ...).
///
/// The last remaining token is never removed, so a non-empty input always
/// yields a non-empty output.
///
/// # Examples
///
/// ```
/// use easyspeak::analysis::token::{Token, texts};
/// use easyspeak::grammar::strip_auxiliaries;
/// use easyspeak::lexicon::LexiconSet;
///
/// let tokens = vec![Token::new("will", 0), Token::new("you", 1), Token::new("go", 2)];
/// let stripped = strip_auxiliaries(&tokens, &LexiconSet::builtin());
/// assert_eq!(texts(&stripped), vec!["you", "go"]);
/// ```
pub fn strip_auxiliaries(tokens: &[Token], lexicon: &LexiconSet) -> Vec<Token> {
    let mut start = 0;
    while tokens.len() - start > 1 && lexicon.is_auxiliary(&tokens[start].text) {
        start += 1;
    }
    tokens[start..].to_vec()
}

/// Token filter form of [`strip_auxiliaries`].
#[derive(Clone, Debug)]
pub struct AuxiliaryStripFilter {
    lexicon: Arc<LexiconSet>,
}

impl AuxiliaryStripFilter {
    pub fn new(lexicon: Arc<LexiconSet>) -> Self {
        AuxiliaryStripFilter { lexicon }
    }
}

impl Filter for AuxiliaryStripFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let tokens: Vec<Token> = tokens.collect();
        Box::new(strip_auxiliaries(&tokens, &self.lexicon).into_iter())
    }

    fn name(&self) -> &'static str {
        "auxiliary_strip"
    }
}

//! Word-by-word lexical substitution.
//!
//! Each surviving word is looked up in the lexicon tables in a fixed order,
//! pronouns first, and the first hit wins. Noun translations may expand one
//! word into several. Words found in no table pass through unchanged.

use std::sync::Arc;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::strip::StripFilter;
use crate::lexicon::{LexiconSet, WordClass};

/// One lookup step: the table consulted and how to read a translation out of it.
struct SubstitutionRule {
    class: WordClass,
    lookup: fn(&LexiconSet, &str) -> Option<Vec<String>>,
}

const SUBSTITUTION_RULES: &[SubstitutionRule] = &[
    SubstitutionRule {
        class: WordClass::Pronoun,
        lookup: pronoun,
    },
    SubstitutionRule {
        class: WordClass::Noun,
        lookup: noun,
    },
    SubstitutionRule {
        class: WordClass::Verb,
        lookup: verb,
    },
    SubstitutionRule {
        class: WordClass::Adjective,
        lookup: adjective,
    },
];

fn pronoun(lexicon: &LexiconSet, word: &str) -> Option<Vec<String>> {
    lexicon.pronoun(word).map(|t| vec![t.to_string()])
}

fn noun(lexicon: &LexiconSet, word: &str) -> Option<Vec<String>> {
    lexicon.noun(word).map(<[String]>::to_vec)
}

fn verb(lexicon: &LexiconSet, word: &str) -> Option<Vec<String>> {
    lexicon.verb(word).map(|t| vec![t.to_string()])
}

fn adjective(lexicon: &LexiconSet, word: &str) -> Option<Vec<String>> {
    lexicon.adjective(word).map(|t| vec![t.to_string()])
}

/// A filter replacing every token with its lexicon translation.
#[derive(Clone, Debug)]
pub struct LexiconFilter {
    lexicon: Arc<LexiconSet>,
}

impl LexiconFilter {
    pub fn new(lexicon: Arc<LexiconSet>) -> Self {
        LexiconFilter { lexicon }
    }

    /// Translate a single word into one or more output words.
    ///
    /// # Examples
    ///
    /// ```
    /// use easyspeak::lexicon::LexiconSet;
    /// use easyspeak::translate::LexiconFilter;
    ///
    /// let filter = LexiconFilter::new(LexiconSet::builtin());
    /// assert_eq!(filter.translate_word("my"), vec!["mi"]);
    /// assert_eq!(filter.translate_word("restaurant"), vec!["food", "place"]);
    /// assert_eq!(filter.translate_word("banana"), vec!["banana"]);
    /// ```
    pub fn translate_word(&self, word: &str) -> Vec<String> {
        SUBSTITUTION_RULES
            .iter()
            .find_map(|rule| {
                (rule.lookup)(&self.lexicon, word).inspect(|_| {
                    log::trace!("substituted {word:?} as {}", rule.class);
                })
            })
            .unwrap_or_else(|| vec![word.to_string()])
    }
}

impl Filter for LexiconFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let substituted: Vec<Token> = tokens
            .flat_map(|token| {
                self.translate_word(&token.text)
                    .into_iter()
                    .map(move |word| token.with_text(word))
            })
            .collect();

        Box::new(substituted.into_iter())
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

/// The substitution chain: strip apostrophes, drop articles, translate.
#[derive(Clone)]
pub struct Substituter {
    filters: Vec<Arc<dyn Filter>>,
}

impl Substituter {
    pub fn new(lexicon: Arc<LexiconSet>) -> Self {
        let drop_words = StopFilter::new(lexicon.drop_words().clone());

        Substituter {
            filters: vec![
                Arc::new(StripFilter::apostrophes()),
                Arc::new(drop_words),
                Arc::new(LexiconFilter::new(lexicon)),
            ],
        }
    }

    /// Run the chain over a token sequence.
    pub fn substitute(&self, tokens: &[Token]) -> Vec<Token> {
        self.filters
            .iter()
            .fold(tokens.to_vec().into_token_stream(), |stream, filter| {
                filter.filter(stream)
            })
            .collect()
    }
}

impl std::fmt::Debug for Substituter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Substituter")
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

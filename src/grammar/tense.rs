//! Tense inference from lexical cues.
//!
//! Tense is never read off verb morphology. It is decided by an ordered rule
//! table; the first rule that fires wins and the default is present.
//!
//! | Rule            | Fires when                                              | Tense  |
//! |-----------------|---------------------------------------------------------|--------|
//! | `future_marker` | a token is "will" or "gonna", or "going" precedes "to"  | future |
//! | `did_marker`    | a token is "did"                                        | past   |
//! | `time_word`     | first time word hinting past or future, left to right   | hinted |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::lexicon::LexiconSet;

/// One of the three mutually exclusive tenses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Past,
    #[default]
    Present,
    Future,
}

impl Tense {
    /// The particle that marks this tense in the target language.
    pub fn particle(&self) -> &'static str {
        match self {
            Tense::Past => "pa",
            Tense::Present => "na",
            Tense::Future => "fu",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.particle())
    }
}

/// A named tense rule.
#[derive(Clone, Copy)]
pub struct TenseRule {
    pub name: &'static str,
    pub detect: fn(&[Token], &LexiconSet) -> Option<Tense>,
}

impl fmt::Debug for TenseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TenseRule").field("name", &self.name).finish()
    }
}

/// Tense rules in priority order.
pub const TENSE_RULES: &[TenseRule] = &[
    TenseRule {
        name: "future_marker",
        detect: future_marker,
    },
    TenseRule {
        name: "did_marker",
        detect: did_marker,
    },
    TenseRule {
        name: "time_word",
        detect: time_word,
    },
];

/// Infer the tense of a sentence from its tokens.
///
/// # Examples
///
/// ```
/// use easyspeak::analysis::token::Token;
/// use easyspeak::grammar::tense::{Tense, detect_tense};
/// use easyspeak::lexicon::LexiconSet;
///
/// let tokens: Vec<Token> = ["i", "ate", "yesterday"]
///     .iter()
///     .enumerate()
///     .map(|(i, t)| Token::new(*t, i))
///     .collect();
///
/// assert_eq!(detect_tense(&tokens, &LexiconSet::builtin()), Tense::Past);
/// ```
pub fn detect_tense(tokens: &[Token], lexicon: &LexiconSet) -> Tense {
    TENSE_RULES
        .iter()
        .find_map(|rule| {
            let tense = (rule.detect)(tokens, lexicon)?;
            log::trace!("tense rule '{}' fired: {}", rule.name, tense);
            Some(tense)
        })
        .unwrap_or_default()
}

fn future_marker(tokens: &[Token], _lexicon: &LexiconSet) -> Option<Tense> {
    let single = tokens
        .iter()
        .any(|t| t.text == "will" || t.text == "gonna");
    let going_to = tokens
        .windows(2)
        .any(|pair| pair[0].text == "going" && pair[1].text == "to");

    (single || going_to).then_some(Tense::Future)
}

fn did_marker(tokens: &[Token], _lexicon: &LexiconSet) -> Option<Tense> {
    tokens
        .iter()
        .any(|t| t.text == "did")
        .then_some(Tense::Past)
}

// Present-tense time words ("today", "now") do not end the scan.
fn time_word(tokens: &[Token], lexicon: &LexiconSet) -> Option<Tense> {
    tokens
        .iter()
        .filter_map(|t| lexicon.time_word(&t.text))
        .find(|tense| *tense != Tense::Present)
}

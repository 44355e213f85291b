//! Question mood detection.

use crate::analysis::token::Token;
use crate::lexicon::LexiconSet;

/// Decide whether a sentence is a question.
///
/// A sentence is a question when the normalized sentence ends with `?`, or
/// when it opens with an auxiliary verb ("Do you eat" inverts subject and
/// auxiliary). `tokens` must be the sequence before auxiliary stripping.
pub fn detect_question(sentence: &str, tokens: &[Token], lexicon: &LexiconSet) -> bool {
    let ends_with_mark = sentence.trim_end().ends_with('?');
    let starts_with_auxiliary = tokens
        .first()
        .is_some_and(|first| lexicon.is_auxiliary(&first.text));

    ends_with_mark || starts_with_auxiliary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(sentence: &str, words: &[&str]) -> bool {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        detect_question(sentence, &tokens, &LexiconSet::builtin())
    }

    #[test]
    fn test_question_mark() {
        assert!(check("You go home?", &["you", "go", "home"]));
        assert!(check("?", &[]));
    }

    #[test]
    fn test_inverted_auxiliary() {
        assert!(check("Do you eat", &["do", "you", "eat"]));
        assert!(check("Can we go.", &["can", "we", "go"]));
    }

    #[test]
    fn test_statements() {
        assert!(!check("I eat.", &["i", "eat"]));
        assert!(!check("I can go!", &["i", "can", "go"]));
        assert!(!check("", &[]));
        assert!(!check("Why? Because.", &["why", "because"]));
    }
}

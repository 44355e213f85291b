//! Particle placement and final output assembly.

use std::sync::Arc;

use crate::analysis::token::Token;
use crate::grammar::meta::SentenceMeta;
use crate::grammar::tense::Tense;
use crate::lexicon::LexiconSet;
use crate::translate::options::TranslationOptions;

/// Appended to negated sentences.
pub const NEGATION_PARTICLE: &str = "no";

/// Appended to questions, after any negation particle.
pub const QUESTION_PARTICLE: &str = "ma";

/// Rendered sentence text plus the renderer's own trace steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub steps: Vec<String>,
}

/// Assembles output text from substituted tokens and sentence facts.
#[derive(Clone, Debug)]
pub struct Renderer {
    lexicon: Arc<LexiconSet>,
}

impl Renderer {
    pub fn new(lexicon: Arc<LexiconSet>) -> Self {
        Renderer { lexicon }
    }

    /// Place the particles and join the words with single spaces.
    ///
    /// The tense particle goes right after a leading subject particle, or in
    /// front of the sentence when there is none. With strict mode off the
    /// present-tense particle is left out. An empty token sequence renders
    /// as empty text with no particles at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use easyspeak::analysis::token::Token;
    /// use easyspeak::grammar::{SentenceMeta, Tense};
    /// use easyspeak::lexicon::LexiconSet;
    /// use easyspeak::translate::{Renderer, TranslationOptions};
    ///
    /// let renderer = Renderer::new(LexiconSet::builtin());
    /// let meta = SentenceMeta { tense: Tense::Past, is_question: false, is_negated: true };
    /// let tokens = vec![Token::new("mi", 0), Token::new("eat", 1)];
    ///
    /// let rendered = renderer.render(&meta, &tokens, &TranslationOptions::default());
    /// assert_eq!(rendered.text, "mi pa eat no");
    /// ```
    pub fn render(
        &self,
        meta: &SentenceMeta,
        tokens: &[Token],
        options: &TranslationOptions,
    ) -> Rendered {
        let Some(first) = tokens.first() else {
            return Rendered::default();
        };

        let mut words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        let mut steps = Vec::new();
        let particle = meta.tense.particle();

        if !options.strict_mode && meta.tense == Tense::Present {
            steps.push(format!(
                "Strict mode off and tense is '{particle}'; omitted tense particle."
            ));
        } else if self.lexicon.is_subject_particle(&first.text) {
            words.insert(1, particle);
            steps.push(format!("Inserted tense particle '{particle}' after subject."));
        } else {
            words.insert(0, particle);
            steps.push(format!(
                "Prepended tense particle '{particle}' (no clear pronoun subject detected)."
            ));
        }

        if meta.is_negated {
            words.push(NEGATION_PARTICLE);
            steps.push(format!("Detected negation; appended '{NEGATION_PARTICLE}'."));
        }

        if meta.is_question {
            words.push(QUESTION_PARTICLE);
            steps.push(format!("Detected question; appended '{QUESTION_PARTICLE}'."));
        }

        Rendered {
            text: words.join(" "),
            steps,
        }
    }
}

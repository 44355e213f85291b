//! The top-level translation operation.

use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::whitespace::WhitespaceCollapseCharFilter;
use crate::analysis::token::{IntoTokenStream, Token};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::grammar::{
    AuxiliaryStripFilter, SentenceMeta, detect_and_strip_negation, detect_question, detect_tense,
};
use crate::lexicon::LexiconSet;
use crate::translate::options::TranslationOptions;
use crate::translate::render::Renderer;
use crate::translate::segmenter::Segmenter;
use crate::translate::substitute::Substituter;
use crate::translate::trace::{SentenceSteps, StepTrace};

static DEFAULT_TRANSLATOR: LazyLock<Translator> = LazyLock::new(Translator::default);

/// The translation of a single sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceTranslation {
    pub output: String,
    pub steps: StepTrace,
}

/// The translation of a whole text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Per-sentence translations joined with `\n`, in input order.
    pub output: String,
    /// One entry per input sentence, in input order.
    pub steps: Vec<SentenceSteps>,
}

/// Runs the full pipeline. Holds no mutable state, so one instance can serve
/// any number of concurrent callers.
#[derive(Debug)]
pub struct Translator {
    lexicon: Arc<LexiconSet>,
    segmenter: Segmenter,
    normalizer: WhitespaceCollapseCharFilter,
    analyzer: StandardAnalyzer,
    auxiliaries: AuxiliaryStripFilter,
    substituter: Substituter,
    renderer: Renderer,
}

impl Translator {
    /// Create a translator over the built-in lexicon.
    pub fn new() -> Result<Self> {
        let lexicon = LexiconSet::builtin();

        Ok(Translator {
            segmenter: Segmenter::new()?,
            normalizer: WhitespaceCollapseCharFilter::new(),
            analyzer: StandardAnalyzer::new()?,
            auxiliaries: AuxiliaryStripFilter::new(Arc::clone(&lexicon)),
            substituter: Substituter::new(Arc::clone(&lexicon)),
            renderer: Renderer::new(Arc::clone(&lexicon)),
            lexicon,
        })
    }

    pub fn lexicon(&self) -> &Arc<LexiconSet> {
        &self.lexicon
    }

    /// Translate free-form text, sentence by sentence.
    pub fn translate(&self, text: &str, options: &TranslationOptions) -> TranslationResult {
        let sentences = self.segmenter.segment(text);
        let mut outputs = Vec::with_capacity(sentences.len());
        let mut steps = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            let translation = self.translate_sentence(&sentence, options);
            outputs.push(translation.output);
            steps.push(SentenceSteps {
                sentence,
                steps: translation.steps,
            });
        }

        TranslationResult {
            output: outputs.join("\n"),
            steps,
        }
    }

    /// Translate one sentence, recording every step.
    pub fn translate_sentence(
        &self,
        sentence: &str,
        options: &TranslationOptions,
    ) -> SentenceTranslation {
        let mut steps = StepTrace::new();

        let normalized = self.normalizer.filter(sentence);
        steps.record(format!("Normalize: \"{normalized}\""));

        let tokens: Vec<Token> = self.analyzer.analyze(&normalized).collect();
        steps.record_tokens("Tokenize", &tokens);

        let is_question = detect_question(&normalized, &tokens, &self.lexicon);
        steps.record(format!("Question: {}", yes_no(is_question)));

        let tense = detect_tense(&tokens, &self.lexicon);
        steps.record(format!("Tense: {tense}"));

        let stripped: Vec<Token> = self
            .auxiliaries
            .filter(tokens.clone().into_token_stream())
            .collect();
        // Stripping only ever removes leading tokens.
        if stripped.len() != tokens.len() {
            steps.record_tokens("Strip auxiliaries", &stripped);
        }

        let negation = detect_and_strip_negation(&stripped, &self.lexicon);
        steps.record(format!("Negation: {}", yes_no(negation.negated)));
        steps.record_tokens("After negation strip", &negation.tokens);

        let substituted = self.substituter.substitute(&negation.tokens);
        steps.record_tokens("Lexicon", &substituted);

        let meta = SentenceMeta {
            tense,
            is_question,
            is_negated: negation.negated,
        };
        let rendered = self.renderer.render(&meta, &substituted, options);
        steps.extend(rendered.steps);

        log::debug!("{sentence:?} -> {:?}", rendered.text);

        SentenceTranslation {
            output: rendered.text,
            steps,
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new().expect("Built-in translator components should be valid")
    }
}

/// Translate text with the shared built-in translator.
///
/// # Examples
///
/// ```
/// use easyspeak::translate::{TranslationOptions, translate};
///
/// assert_eq!(translate("I eat.", &TranslationOptions::default()).output, "mi na eat");
/// assert_eq!(translate("I eat.", &TranslationOptions::lenient()).output, "mi eat");
/// ```
pub fn translate(text: &str, options: &TranslationOptions) -> TranslationResult {
    DEFAULT_TRANSLATOR.translate(text, options)
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

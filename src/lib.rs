//! # easyspeak
//!
//! A rule-based translator from short English sentences into Easyspeak, a
//! small constructed language that marks tense, negation and questions with
//! invariant particles.
//!
//! ## Features
//!
//! - Sentence segmentation and a composable text analysis pipeline
//! - Tense, question and negation detection from lexical cues
//! - Word-by-word substitution through built-in lexicon tables
//! - A step trace for every sentence
//!
//! ```
//! use easyspeak::{TranslationOptions, translate};
//!
//! let result = translate("Will you go home?", &TranslationOptions::default());
//! assert_eq!(result.output, "yu fu go home ma");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod grammar;
pub mod lexicon;
pub mod translate;

pub use translate::{TranslationOptions, TranslationResult, Translator, translate};

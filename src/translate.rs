//! The translation pipeline.
//!
//! ```text
//! text → Segmenter → (per sentence) Normalizer → StandardAnalyzer
//!      → question / tense / auxiliary strip / negation
//!      → Substituter → Renderer → joined output
//! ```
//!
//! # Examples
//!
//! ```
//! use easyspeak::translate::{TranslationOptions, translate};
//!
//! let result = translate("I did not eat. Will you go home?", &TranslationOptions::default());
//! assert_eq!(result.output, "mi pa eat no\nyu fu go home ma");
//! assert_eq!(result.steps.len(), 2);
//! ```

pub mod options;
pub mod render;
pub mod segmenter;
pub mod substitute;
pub mod trace;
pub mod translator;

pub use options::TranslationOptions;
pub use render::{Rendered, Renderer};
pub use segmenter::{Segmenter, split_into_sentences};
pub use substitute::{LexiconFilter, Substituter};
pub use trace::{SentenceSteps, StepTrace};
pub use translator::{SentenceTranslation, TranslationResult, Translator, translate};

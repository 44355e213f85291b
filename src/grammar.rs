//! Grammatical analysis of a tokenized sentence.
//!
//! The detectors here run in a fixed order against the working token
//! sequence: question mood, tense, auxiliary stripping, then negation. The
//! order matters because contractions such as "don't" straddle auxiliary and
//! negation handling. None of them can fail; when nothing matches they fall
//! back to present tense, not a question, not negated.

pub mod auxiliary;
pub mod meta;
pub mod negation;
pub mod question;
pub mod tense;

pub use auxiliary::{AuxiliaryStripFilter, strip_auxiliaries};
pub use meta::SentenceMeta;
pub use negation::{NegationFilter, NegationOutcome, detect_and_strip_negation};
pub use question::detect_question;
pub use tense::{Tense, detect_tense};

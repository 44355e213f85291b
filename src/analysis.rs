//! Text analysis primitives for easyspeak.
//!
//! Every text-level stage of the translator is built from the pieces in this
//! module: char filters rewrite a raw sentence, a tokenizer splits it into
//! [`Token`](token::Token)s, and token filters transform the resulting stream.
//! A [`PipelineAnalyzer`](analyzer::pipeline::PipelineAnalyzer) chains them.
//!
//! ```text
//! Sentence → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

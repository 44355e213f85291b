//! Core analyzer trait definition.
//!
//! Analyzers run the complete text-to-token pipeline:
//!
//! ```text
//! Sentence → Analyzer → Token Stream
//!             ↓
//!         Char Filters
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`StandardAnalyzer`](super::standard::StandardAnalyzer) - The translator's word tokenization
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom char filter + tokenizer + filter chains

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a single analyzer can serve any
/// number of concurrent translations.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use easyspeak::analysis::analyzer::analyzer::Analyzer;
    /// use easyspeak::analysis::analyzer::standard::StandardAnalyzer;
    ///
    /// let analyzer = StandardAnalyzer::new().unwrap();
    /// let tokens: Vec<_> = analyzer.analyze("I didn't eat!").collect();
    ///
    /// assert_eq!(tokens.len(), 3);
    /// assert_eq!(tokens[1].text, "didn't");
    /// ```
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

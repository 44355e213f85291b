//! Standard analyzer used by the translator.
//!
//! # Pipeline
//!
//! 1. LowercaseCharFilter
//! 2. PatternReplaceCharFilter (every run of characters other than `a-z`,
//!    `0-9` and `'` becomes a single space)
//! 3. WhitespaceTokenizer
//!
//! Every token it produces matches `[a-z0-9']+`.
//!
//! # Examples
//!
//! ```
//! use easyspeak::analysis::analyzer::analyzer::Analyzer;
//! use easyspeak::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Will you go home?").collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].text, "will");
//! assert_eq!(tokens[3].text, "home");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// Characters outside the token alphabet.
const SEPARATOR_PATTERN: &str = r"[^a-z0-9']+";

/// The analyzer that turns a normalized sentence into word tokens.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer.
    pub fn new() -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(
                SEPARATOR_PATTERN,
                " ",
            )?))
            .with_name("standard");

        Ok(StandardAnalyzer { inner: analyzer })
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new().expect("Standard analyzer should be creatable with default settings")
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

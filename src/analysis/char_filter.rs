//! Char filter implementations for text normalization.
//!
//! This module provides filters that pre-process the sentence string before it
//! is passed to the tokenizer.
//!
//! # Available Filters
//!
//! - [`whitespace::WhitespaceCollapseCharFilter`] - Collapses whitespace runs and trims
//! - [`lowercase::LowercaseCharFilter`] - Lowercases the whole sentence
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use easyspeak::analysis::char_filter::CharFilter;
//! use easyspeak::analysis::char_filter::whitespace::WhitespaceCollapseCharFilter;
//!
//! let filter = WhitespaceCollapseCharFilter::new();
//! assert_eq!(filter.filter("  I   eat. "), "I eat.");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;
pub mod whitespace;

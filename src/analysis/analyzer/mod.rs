//! Analyzer implementations that combine char filters, tokenizers and filters.

pub mod analyzer;
pub mod pipeline;
pub mod standard;

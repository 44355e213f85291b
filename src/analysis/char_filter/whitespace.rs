//! Whitespace normalization.

use super::CharFilter;

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// The result is a fixed point: normalizing it again changes nothing.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A char filter that applies [`normalize`].
#[derive(Clone, Debug, Default)]
pub struct WhitespaceCollapseCharFilter;

impl WhitespaceCollapseCharFilter {
    /// Create a new whitespace collapse filter.
    pub fn new() -> Self {
        WhitespaceCollapseCharFilter
    }
}

impl CharFilter for WhitespaceCollapseCharFilter {
    fn filter(&self, input: &str) -> String {
        normalize(input)
    }

    fn name(&self) -> &'static str {
        "whitespace_collapse"
    }
}

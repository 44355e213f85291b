//! Lowercase char filter.

use super::CharFilter;

/// A char filter that lowercases the whole input before tokenization.
///
/// Lowercasing happens on the sentence rather than on individual tokens so
/// that characters whose lowercase form falls outside the token alphabet are
/// discarded by the following filters.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_char_filter() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("Will YOU go Home?"), "will you go home?");
        assert_eq!(filter.filter("DON'T"), "don't");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseCharFilter::new().name(), "lowercase");
    }
}

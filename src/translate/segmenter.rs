//! Sentence segmentation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{EasyspeakError, Result};

/// Sentence-final punctuation.
const DEFAULT_TERMINATORS: &[char] = &['.', '!', '?'];

static DEFAULT_SEGMENTER: LazyLock<Segmenter> = LazyLock::new(Segmenter::default);

/// Splits raw text into trimmed, non-empty sentences.
#[derive(Clone, Debug)]
pub struct Segmenter {
    boundary: Regex,
}

impl Segmenter {
    /// Create a segmenter that breaks after `.`, `!` and `?`.
    pub fn new() -> Result<Self> {
        Self::with_terminators(DEFAULT_TERMINATORS)
    }

    /// Create a segmenter that breaks after any of the given characters when
    /// they are followed by whitespace.
    pub fn with_terminators(terminators: &[char]) -> Result<Self> {
        if terminators.is_empty() {
            return Err(EasyspeakError::analysis(
                "at least one sentence terminator is required",
            ));
        }

        // A terminator followed by whitespace. The terminator stays with the
        // sentence it ends; the whitespace is dropped.
        let class: String = terminators
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let pattern = format!(r"[{class}]\s+");

        let boundary = Regex::new(&pattern)
            .map_err(|e| EasyspeakError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(Segmenter { boundary })
    }

    /// Split text into sentences, in input order.
    ///
    /// Lines are handled independently; blank lines disappear. A line
    /// without terminal punctuation is a single sentence.
    pub fn segment(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .flat_map(|line| self.split_line(line))
            .collect()
    }

    fn split_line(&self, line: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut last_end = 0;

        for boundary in self.boundary.find_iter(line) {
            // Keep the terminator, which opens the match.
            let terminator_len = line[boundary.start()..]
                .chars()
                .next()
                .map_or(0, char::len_utf8);
            sentences.push(&line[last_end..boundary.start() + terminator_len]);
            last_end = boundary.end();
        }
        sentences.push(&line[last_end..]);

        sentences
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new().expect("Default sentence boundary pattern should be valid")
    }
}

/// Split text into sentences with the default segmenter.
///
/// # Examples
///
/// ```
/// use easyspeak::translate::split_into_sentences;
///
/// let sentences = split_into_sentences("Hi there! How are you?\n\nFine.");
/// assert_eq!(sentences, vec!["Hi there!", "How are you?", "Fine."]);
/// ```
pub fn split_into_sentences(text: &str) -> Vec<String> {
    DEFAULT_SEGMENTER.segment(text)
}

//! Human-readable step traces.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, texts};

/// The ordered description of every transformation applied to one sentence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepTrace {
    steps: Vec<String>,
}

impl StepTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn record<S: Into<String>>(&mut self, step: S) {
        let step = step.into();
        log::trace!("{step}");
        self.steps.push(step);
    }

    /// Append a step that labels a token sequence, e.g. `Lexicon: ["mi","eat"]`.
    pub fn record_tokens(&mut self, label: &str, tokens: &[Token]) {
        self.record(format!("{label}: {}", json_list(tokens)));
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, steps: I) {
        for step in steps {
            self.record(step);
        }
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for StepTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}

/// A sentence together with the trace of its translation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSteps {
    pub sentence: String,
    pub steps: StepTrace,
}

/// Compact JSON array of the token texts: `["i","eat"]`.
fn json_list(tokens: &[Token]) -> String {
    serde_json::Value::from(texts(tokens)).to_string()
}

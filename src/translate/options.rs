//! Translation options.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EasyspeakError, Result};

/// Options controlling how sentences are rendered.
///
/// Serialized with camelCase keys; missing keys take their defaults.
///
/// # Examples
///
/// ```
/// use easyspeak::translate::TranslationOptions;
///
/// let options = TranslationOptions::from_json_str(r#"{"strictMode": false}"#).unwrap();
/// assert!(!options.strict_mode);
/// assert!(TranslationOptions::default().strict_mode);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationOptions {
    /// Always emit a tense particle, even for the default present tense.
    pub strict_mode: bool,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        TranslationOptions { strict_mode: true }
    }
}

impl TranslationOptions {
    /// Options producing terse output (present tense unmarked).
    pub fn lenient() -> Self {
        TranslationOptions { strict_mode: false }
    }

    pub fn with_strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        serde_json::from_str(&content).map_err(|e| {
            EasyspeakError::config(format!("invalid options file {}: {e}", path.display()))
        })
    }
}

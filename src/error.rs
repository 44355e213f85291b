//! Error types for the easyspeak library.
//!
//! The translation pipeline itself never fails: every stage has a defined
//! fallback. Errors only arise at the edges of the crate, when reading input,
//! loading translation options from disk, emitting JSON, or building custom
//! analysis components from user-supplied patterns.
//!
//! # Examples
//!
//! ```
//! use easyspeak::error::{EasyspeakError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(EasyspeakError::config("strictMode must be a boolean"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for easyspeak operations.
#[derive(Error, Debug)]
pub enum EasyspeakError {
    /// I/O errors (reading input files, stdin, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (invalid tokenizer or segmenter patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors (malformed option files)
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with EasyspeakError.
pub type Result<T> = std::result::Result<T, EasyspeakError>;

impl EasyspeakError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        EasyspeakError::Analysis(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        EasyspeakError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = EasyspeakError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = EasyspeakError::config("missing field");
        assert_eq!(error.to_string(), "Config error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = EasyspeakError::from(io_error);

        match error {
            EasyspeakError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = EasyspeakError::from(json_error);

        assert!(matches!(error, EasyspeakError::Json(_)));
        assert!(error.to_string().starts_with("JSON error:"));
    }
}

//! Error types for textanalyzr-core.
//!
//! The analysis functions themselves are total: empty text and missing
//! matches yield empty tables and zero counts. Errors only arise when a
//! raw string is turned into a validated query value.

use thiserror::Error;

/// The main error type for textanalyzr operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    /// Query character is not exactly one alphabetic character.
    #[error("Invalid character: '{0}'. Expected a single alphabetic character")]
    InvalidCharacter(String),

    /// Query word contains something other than ASCII letters.
    #[error("Invalid word: '{0}'. Expected alphabetic characters only")]
    InvalidWord(String),
}

/// Result type alias for textanalyzr operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

//! # textanalyzr-core
//!
//! Descriptive statistics for a block of natural-language text.
//!
//! This library provides small, pure functions over an in-memory string:
//! word counts, a case-insensitive character histogram, the most common
//! character, the frequency of a given word and the number of distinct words.
//!
//! ## Features
//!
//! - **One Splitting Rule**: Words are maximal runs of non-whitespace
//!   characters. Every word-level statistic uses the same rule.
//! - **Case-Insensitive**: Characters and words are case-folded before they
//!   are compared or tabulated. Punctuation is never stripped.
//! - **Deterministic**: Ties for the most common character go to the lowest
//!   code point.
//! - **Validated Queries**: [`QueryChar`] and [`QueryWord`] parse raw user
//!   input into lookup values.
//!
//! ## Example
//!
//! ```rust
//! use textanalyzr_core::prelude::*;
//!
//! let text = "This is a test. This is only a test.";
//!
//! assert_eq!(count_words(text), 9);
//! assert_eq!(unique_word_count(text), 5);
//! assert_eq!(word_frequency(text, "this"), 2);
//!
//! let table = build_char_frequency_map(text);
//! assert_eq!(table.total(), text.chars().count());
//! assert_eq!(most_common_character(&table), Some(' '));
//! ```

pub mod analyze;
pub mod error;
pub mod frequency;
pub mod models;
pub mod tokenize;
pub mod words;

// Re-export commonly used types at the crate root
pub use analyze::{TextAnalysis, analyze, analyze_with_queries};
pub use error::{AnalyzerError, Result};
pub use frequency::{CharFrequencyTable, build_char_frequency_map, most_common_character};
pub use models::{AnalysisReport, CharQuery, QueryChar, QueryWord, WordQuery};
pub use tokenize::{count_words, tokens};
pub use words::{unique_word_count, word_frequency};

/// Prelude module for convenient imports.
///
/// ```
/// use textanalyzr_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analyze::{TextAnalysis, analyze, analyze_with_queries};
    pub use crate::error::{AnalyzerError, Result};
    pub use crate::frequency::{
        CharFrequencyTable, build_char_frequency_map, most_common_character,
    };
    pub use crate::models::*;
    pub use crate::tokenize::{count_words, tokens};
    pub use crate::words::{unique_word_count, word_frequency};
}

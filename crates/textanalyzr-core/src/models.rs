//! Core data types for textanalyzr.
//!
//! This module defines the validated query values and the report types:
//! - [`QueryChar`] - A single alphabetic character to look up
//! - [`QueryWord`] - An alphabetic word to look up
//! - [`CharQuery`] / [`WordQuery`] - A query together with its answer
//! - [`AnalysisReport`] - Every statistic of one analysis run

use std::str::FromStr;

use serde::Serialize;
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::error::{AnalyzerError, Result};
use crate::frequency::CharFrequencyTable;

/// A validated query character: exactly one alphabetic character, lower-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryChar(char);

impl QueryChar {
    /// The lower-cased character.
    pub fn get(self) -> char {
        self.0
    }
}

impl std::fmt::Display for QueryChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QueryChar {
    type Err = AnalyzerError;

    /// Parses trimmed, lower-cased input. Any Unicode letter is accepted.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        let mut chars = lowered.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) if is_letter(c) => Ok(QueryChar(c)),
            _ => Err(AnalyzerError::InvalidCharacter(s.trim().to_string())),
        }
    }
}

/// `true` for general category L* only. Letter-like numerals, symbols and
/// combining marks are rejected even though they are `Alphabetic`.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// A validated query word: one or more ASCII letters, lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryWord(String);

impl QueryWord {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QueryWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QueryWord {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();

        if !lowered.is_empty() && lowered.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(QueryWord(lowered))
        } else {
            Err(AnalyzerError::InvalidWord(s.trim().to_string()))
        }
    }
}

/// A character query and its frequency in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharQuery {
    pub character: QueryChar,
    pub frequency: usize,
}

/// A word query and its frequency in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordQuery {
    pub word: QueryWord,
    pub frequency: usize,
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Number of characters in the text.
    pub characters: usize,
    /// Number of whitespace-delimited words.
    pub words: usize,
    /// Most common character, `None` only for an empty text.
    pub most_common_character: Option<char>,
    /// Case-insensitive character histogram.
    pub character_frequencies: CharFrequencyTable,
    pub character_query: CharQuery,
    pub word_query: WordQuery,
    /// Number of distinct words after case-folding.
    pub unique_words: usize,
}

//! Word-level statistics: frequency of a word and distinct-word counts.
//!
//! Both operations compare tokens case-insensitively but otherwise as-is.
//! A token keeps any punctuation attached to it, so `"test."` and `"test"`
//! are different words.

use std::collections::HashSet;

use crate::tokenize::{fold_token, tokens};

/// Count the tokens of `text` that equal `word`, ignoring case.
///
/// The match is whole-token: `"testing"` and `"test."` do not match `"test"`.
///
/// # Examples
///
/// ```
/// use textanalyzr_core::words::word_frequency;
///
/// assert_eq!(word_frequency("Test test TEST", "test"), 3);
/// assert_eq!(word_frequency("This is a test. This is only a test.", "test"), 0);
/// ```
pub fn word_frequency(text: &str, word: &str) -> usize {
    tokens(text)
        .filter(|token| eq_ignore_case(token, word))
        .count()
}

/// Count the distinct tokens of `text` after case-folding.
///
/// # Examples
///
/// ```
/// use textanalyzr_core::words::unique_word_count;
///
/// assert_eq!(unique_word_count("This is a test. This is only a test."), 5);
/// ```
pub fn unique_word_count(text: &str) -> usize {
    tokens(text).map(fold_token).collect::<HashSet<_>>().len()
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

//! Word splitting.
//!
//! Every word-level operation in this crate goes through [`tokens`], so the
//! word count, word frequency and unique-word count all agree on what a
//! token is.
//!
//! A token is a maximal run of non-whitespace characters, where whitespace
//! is the Unicode `White_Space` property. Leading and trailing whitespace
//! never produce empty tokens, and an empty or all-whitespace text has no
//! tokens at all.

/// Split text into whitespace-delimited tokens.
///
/// Tokens are returned as-is, without case-folding or punctuation stripping.
///
/// # Examples
///
/// ```
/// use textanalyzr_core::tokenize::tokens;
///
/// let words: Vec<&str> = tokens("  This is\ta test.\n").collect();
/// assert_eq!(words, vec!["This", "is", "a", "test."]);
/// ```
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Count the words in the given text.
///
/// # Examples
///
/// ```
/// use textanalyzr_core::tokenize::count_words;
///
/// assert_eq!(count_words("This is a test sentence"), 5);
/// assert_eq!(count_words(""), 0);
/// ```
pub fn count_words(text: &str) -> usize {
    tokens(text).count()
}

/// Case-fold a token for equality comparisons.
pub(crate) fn fold_token(token: &str) -> String {
    token.to_lowercase()
}

//! Property-based tests for the text statistics.
//!
//! These check the invariants that must hold for any input text, not just
//! the hand-picked examples in the unit tests.

use std::collections::HashSet;

use proptest::prelude::*;
use textanalyzr_core::{
    analyze, build_char_frequency_map, count_words, most_common_character, tokens,
    unique_word_count, word_frequency,
};

/// Arbitrary text mixing letters of both cases, digits, punctuation and
/// several kinds of whitespace.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9.,!?' \t\nÄäÖöİ]{0,200}").unwrap()
}

/// Space-separated words drawn from a tiny vocabulary, so repeats are common.
fn repetitive_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["the", "The", "THE", "cat", "Cat", "sat", "sat."]),
        0..30,
    )
    .prop_map(|words| words.join(" "))
}

fn query_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z]{1,8}").unwrap()
}

proptest! {
    /// Every character is counted exactly once.
    #[test]
    fn table_total_equals_char_length(text in text_strategy()) {
        let table = build_char_frequency_map(&text);
        prop_assert_eq!(table.total(), text.chars().count());
    }

    /// Building the table twice gives the same counts.
    #[test]
    fn table_build_is_idempotent(text in text_strategy()) {
        prop_assert_eq!(build_char_frequency_map(&text), build_char_frequency_map(&text));
    }

    #[test]
    fn unique_words_never_exceed_words(text in text_strategy()) {
        prop_assert!(unique_word_count(&text) <= count_words(&text));
    }

    #[test]
    fn unique_words_never_exceed_words_with_repeats(text in repetitive_text_strategy()) {
        prop_assert!(unique_word_count(&text) <= count_words(&text));
    }

    /// Unique and total counts agree exactly when no folded word repeats.
    #[test]
    fn unique_equals_words_iff_no_repeats(text in repetitive_text_strategy()) {
        let mut seen = HashSet::new();
        let no_repeats = tokens(&text).all(|t| seen.insert(t.to_lowercase()));
        prop_assert_eq!(unique_word_count(&text) == count_words(&text), no_repeats);
    }

    #[test]
    fn word_frequency_never_exceeds_words(
        text in repetitive_text_strategy(),
        word in query_word_strategy(),
    ) {
        prop_assert!(word_frequency(&text, &word) <= count_words(&text));
    }

    /// Case of the query word does not matter.
    #[test]
    fn word_frequency_ignores_query_case(
        text in repetitive_text_strategy(),
        word in query_word_strategy(),
    ) {
        prop_assert_eq!(
            word_frequency(&text, &word),
            word_frequency(&text, &word.to_uppercase())
        );
    }

    /// The most common character has a count no other character exceeds,
    /// and it is the smallest among those sharing that count.
    #[test]
    fn most_common_is_a_maximum(text in text_strategy()) {
        let table = build_char_frequency_map(&text);
        match most_common_character(&table) {
            None => prop_assert!(table.is_empty()),
            Some(best) => {
                let best_count = table.get(best);
                for (c, n) in table.iter() {
                    prop_assert!(n <= best_count);
                    if n == best_count {
                        prop_assert!(best <= c);
                    }
                }
            }
        }
    }

    /// Table entries are already case-folded.
    #[test]
    fn table_keys_are_folded(text in text_strategy()) {
        let table = build_char_frequency_map(&text);
        for (c, _) in table.iter() {
            let mut lower = c.to_lowercase();
            if let (Some(l), None) = (lower.next(), lower.next()) {
                prop_assert_eq!(l, c);
            }
        }
    }

    /// Words counted through the analysis agree with the free functions.
    #[test]
    fn analysis_matches_free_functions(text in text_strategy()) {
        let analysis = analyze(&text);
        prop_assert_eq!(analysis.characters(), text.chars().count());
        prop_assert_eq!(analysis.words(), count_words(&text));
        prop_assert_eq!(analysis.unique_words(), unique_word_count(&text));
        prop_assert_eq!(analysis.is_empty(), text.is_empty());
    }
}

#[test]
fn case_insensitive_word_frequency() {
    assert_eq!(word_frequency("Test test TEST", "test"), 3);
}

#[test]
fn whole_token_match() {
    assert_eq!(word_frequency("This is a test. This is only a test.", "test"), 0);
}

#[test]
fn hello_frequency_table() {
    let table = build_char_frequency_map("hello");
    let entries: Vec<(char, usize)> = table.iter().collect();
    assert_eq!(entries, vec![('e', 1), ('h', 1), ('l', 2), ('o', 1)]);
    assert_eq!(most_common_character(&table), Some('l'));
}

#[test]
fn unique_words_in_sample() {
    assert_eq!(unique_word_count("This is a test. This is only a test."), 5);
}

#[test]
fn empty_table_guard() {
    let table = build_char_frequency_map("");
    assert!(table.is_empty());
}

//! Character frequency tables.
//!
//! A [`CharFrequencyTable`] maps each case-folded character of a text to the
//! number of times it occurs. Every character counts, whitespace and
//! punctuation included, so the counts always sum to the character length
//! of the text the table was built from.

use std::collections::BTreeMap;

use serde::Serialize;

/// Case-insensitive histogram of the characters in a text.
///
/// Keys are kept in ascending code point order, which makes iteration and
/// serialized output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CharFrequencyTable {
    counts: BTreeMap<char, usize>,
}

impl CharFrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `c` (case-folded).
    pub fn add(&mut self, c: char) {
        *self.counts.entry(fold_char(c)).or_insert(0) += 1;
    }

    /// Occurrences of `c`, matched case-insensitively. Zero when absent.
    pub fn get(&self, c: char) -> usize {
        self.counts.get(&fold_char(c)).copied().unwrap_or(0)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` when the source text had no characters to tabulate.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(character, count)` pairs in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    /// The character with the highest count.
    ///
    /// Ties go to the lowest code point. Returns `None` for an empty table;
    /// callers are expected to check [`is_empty`](Self::is_empty) first.
    pub fn most_common(&self) -> Option<char> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(&c, _)| c)
    }
}

impl FromIterator<char> for CharFrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut table = Self::new();
        for c in iter {
            table.add(c);
        }
        table
    }
}

/// Build a case-insensitive frequency table of every character in `text`.
///
/// # Examples
///
/// ```
/// use textanalyzr_core::frequency::build_char_frequency_map;
///
/// let table = build_char_frequency_map("Hello");
/// assert_eq!(table.get('l'), 2);
/// assert_eq!(table.get('H'), 1);
/// assert_eq!(table.total(), 5);
/// ```
pub fn build_char_frequency_map(text: &str) -> CharFrequencyTable {
    text.chars().collect()
}

/// Select the most common character of a table.
///
/// See [`CharFrequencyTable::most_common`] for the tie-break rule.
pub fn most_common_character(table: &CharFrequencyTable) -> Option<char> {
    table.most_common()
}

/// Lower-case a single character.
///
/// Characters whose lower-case form expands to more than one `char`
/// (e.g. `'İ'`) are left unchanged, so one input character always maps to
/// exactly one table entry.
pub(crate) fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

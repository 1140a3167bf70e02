//! Analysis runs.
//!
//! An analysis happens in two phases. [`TextAnalysis::new`] computes the
//! statistics that need only the text: character count, word count, the
//! character frequency table and its most common character. The caller
//! then asks the character and word queries it has gathered, reusing the
//! same table for character lookups.

use crate::frequency::{CharFrequencyTable, build_char_frequency_map};
use crate::models::{AnalysisReport, CharQuery, QueryChar, QueryWord, WordQuery};
use crate::tokenize::count_words;
use crate::words::{unique_word_count, word_frequency};

/// Statistics of one text, with the text kept for later word queries.
#[derive(Debug, Clone)]
pub struct TextAnalysis<'a> {
    text: &'a str,
    characters: usize,
    words: usize,
    table: CharFrequencyTable,
}

impl<'a> TextAnalysis<'a> {
    /// Run the text-only part of the analysis.
    ///
    /// # Examples
    ///
    /// ```
    /// use textanalyzr_core::analyze::TextAnalysis;
    ///
    /// let analysis = TextAnalysis::new("hello world");
    /// assert_eq!(analysis.characters(), 11);
    /// assert_eq!(analysis.words(), 2);
    /// assert_eq!(analysis.most_common_character(), Some('l'));
    /// ```
    pub fn new(text: &'a str) -> Self {
        let table = build_char_frequency_map(text);

        Self {
            text,
            characters: table.total(),
            words: count_words(text),
            table,
        }
    }

    /// The analyzed text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Number of characters in the text.
    pub fn characters(&self) -> usize {
        self.characters
    }

    /// Number of whitespace-delimited words.
    pub fn words(&self) -> usize {
        self.words
    }

    /// The character frequency table.
    pub fn table(&self) -> &CharFrequencyTable {
        &self.table
    }

    /// `true` when there is nothing to analyze and character queries
    /// should be skipped.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Most common character, or `None` if the text is empty.
    pub fn most_common_character(&self) -> Option<char> {
        self.table.most_common()
    }

    /// Occurrences of the query character.
    pub fn char_frequency(&self, query: QueryChar) -> usize {
        self.table.get(query.get())
    }

    /// Occurrences of the query word as a whole token.
    pub fn word_frequency(&self, query: &QueryWord) -> usize {
        word_frequency(self.text, query.as_str())
    }

    /// Number of distinct words after case-folding.
    pub fn unique_words(&self) -> usize {
        unique_word_count(self.text)
    }

    /// Answer both queries and collect every statistic into a report.
    pub fn report(&self, character: QueryChar, word: &QueryWord) -> AnalysisReport {
        AnalysisReport {
            characters: self.characters,
            words: self.words,
            most_common_character: self.most_common_character(),
            character_frequencies: self.table.clone(),
            character_query: CharQuery {
                character,
                frequency: self.char_frequency(character),
            },
            word_query: WordQuery {
                word: word.clone(),
                frequency: self.word_frequency(word),
            },
            unique_words: self.unique_words(),
        }
    }
}

/// Analyze a text.
///
/// This is a convenience wrapper around [`TextAnalysis::new`].
pub fn analyze(text: &str) -> TextAnalysis<'_> {
    TextAnalysis::new(text)
}

/// Analyze a text and answer raw, unvalidated queries in one step.
///
/// # Errors
///
/// Returns an error if `character` or `word` fails validation.
///
/// # Examples
///
/// ```
/// use textanalyzr_core::analyze::analyze_with_queries;
///
/// let report = analyze_with_queries("The cat saw the dog", "T", "the").unwrap();
/// assert_eq!(report.character_query.frequency, 3);
/// assert_eq!(report.word_query.frequency, 2);
/// assert_eq!(report.unique_words, 4);
/// ```
pub fn analyze_with_queries(
    text: &str,
    character: &str,
    word: &str,
) -> crate::error::Result<AnalysisReport> {
    let character: QueryChar = character.parse()?;
    let word: QueryWord = word.parse()?;

    Ok(analyze(text).report(character, &word))
}

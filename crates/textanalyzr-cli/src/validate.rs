use textanalyzr_core::{QueryChar, QueryWord};

use crate::error::{CliError, CliResult};

pub const CHAR_PROMPT: &str = "Enter a character to find its frequency:";
pub const CHAR_RETRY: &str = "Invalid input. Please enter a single alphabetic character:";
pub const WORD_PROMPT: &str = "Enter a word to find its frequency (alphabetic characters only):";
pub const WORD_RETRY: &str = "Invalid input. Please enter alphabetic characters only:";

pub fn parse_query_char(s: &str) -> CliResult<QueryChar> {
    s.parse::<QueryChar>()
        .map_err(|e| CliError::input(e.to_string()))
}

pub fn parse_query_word(s: &str) -> CliResult<QueryWord> {
    s.parse::<QueryWord>()
        .map_err(|e| CliError::input(e.to_string()))
}

use std::io::{BufRead, Write};
use std::process::ExitCode;

use textanalyzr_core::analyze;
use tracing::{debug, info};

use crate::console::Console;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::validate::{
    CHAR_PROMPT, CHAR_RETRY, WORD_PROMPT, WORD_RETRY, parse_query_char, parse_query_word,
};

pub const PARAGRAPH_PROMPT: &str = "Enter a paragraph:";
pub const NOTHING_TO_ANALYZE: &str = "Text contains no characters to analyze. Exiting.";

pub fn run_analyze<R, W, E>(
    console: &mut Console<R, W, E>,
    output_format: OutputFormat,
) -> CliResult<ExitCode>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let text = console.prompt_non_empty(PARAGRAPH_PROMPT)?;
    let analysis = analyze(&text);
    info!(
        characters = analysis.characters(),
        words = analysis.words(),
        "Analyzed paragraph"
    );

    let text_output = output_format == OutputFormat::Text;

    if text_output {
        console.emit(&format!(
            "Total number of characters: {}",
            analysis.characters()
        ))?;
        console.emit(&format!("Total number of words: {}", analysis.words()))?;
    }

    if analysis.is_empty() {
        return Err(CliError::input(NOTHING_TO_ANALYZE));
    }

    let most_common = analysis
        .most_common_character()
        .ok_or_else(|| CliError::runtime("Frequency table has no most common character"))?;
    debug!(distinct = analysis.table().len(), %most_common, "Built frequency table");

    if text_output {
        console.emit(&format!("Most common character: {}", most_common))?;
    }

    let character = console.prompt_valid(CHAR_PROMPT, CHAR_RETRY, parse_query_char)?;
    if text_output {
        console.emit(&format!(
            "Frequency of '{}': {}",
            character,
            analysis.char_frequency(character)
        ))?;
    }

    let word = console.prompt_valid(WORD_PROMPT, WORD_RETRY, parse_query_word)?;
    if text_output {
        console.emit(&format!(
            "Frequency of \"{}\": {}",
            word,
            analysis.word_frequency(&word)
        ))?;
        console.emit(&format!(
            "Number of unique words: {}",
            analysis.unique_words()
        ))?;
    } else {
        let report = analysis.report(character, &word);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
        console.emit(&json)?;
    }

    console.flush()?;
    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::ErrorKind;

    fn run(
        input: &'static str,
        output_format: OutputFormat,
        max_attempts: Option<u32>,
    ) -> (CliResult<ExitCode>, String, String) {
        let mut console = Console::new(Cursor::new(input), Vec::new(), Vec::new())
            .with_prompts_to_stderr(output_format == OutputFormat::Json)
            .with_max_attempts(max_attempts);
        let result = run_analyze(&mut console, output_format);
        let (_, out, err) = console.into_parts();
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn text_session() {
        let (result, out, err) = run(
            "hello world\nL\nHello\n",
            OutputFormat::Text,
            None,
        );
        assert!(result.is_ok());
        assert_eq!(
            out,
            "Enter a paragraph:\n\
             Total number of characters: 11\n\
             Total number of words: 2\n\
             Most common character: l\n\
             Enter a character to find its frequency:\n\
             Frequency of 'l': 3\n\
             Enter a word to find its frequency (alphabetic characters only):\n\
             Frequency of \"hello\": 1\n\
             Number of unique words: 2\n"
        );
        assert_eq!(err, "");
    }

    #[test]
    fn text_session_with_retries() {
        let (result, out, err) = run(
            "\n  aa a b  \n?\nab\nA\nb.\nB\n",
            OutputFormat::Text,
            None,
        );
        assert!(result.is_ok());
        assert_eq!(
            out,
            "Enter a paragraph:\n\
             Total number of characters: 6\n\
             Total number of words: 3\n\
             Most common character: a\n\
             Enter a character to find its frequency:\n\
             Invalid input. Please enter a single alphabetic character:\n\
             Invalid input. Please enter a single alphabetic character:\n\
             Frequency of 'a': 3\n\
             Enter a word to find its frequency (alphabetic characters only):\n\
             Invalid input. Please enter alphabetic characters only:\n\
             Frequency of \"b\": 1\n\
             Number of unique words: 3\n"
        );
        assert_eq!(err, "Error: Input cannot be empty. Please try again:\n");
    }

    #[test]
    fn json_session() {
        let (result, out, err) = run("Aa b\nb\naa\n", OutputFormat::Json, None);
        assert!(result.is_ok());

        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["characters"], 4);
        assert_eq!(report["words"], 2);
        assert_eq!(report["most_common_character"], "a");
        assert_eq!(report["character_frequencies"]["a"], 2);
        assert_eq!(report["character_frequencies"][" "], 1);
        assert_eq!(report["character_query"]["character"], "b");
        assert_eq!(report["character_query"]["frequency"], 1);
        assert_eq!(report["word_query"]["word"], "aa");
        assert_eq!(report["word_query"]["frequency"], 1);
        assert_eq!(report["unique_words"], 2);

        assert_eq!(err, format!("{PARAGRAPH_PROMPT}\n{CHAR_PROMPT}\n{WORD_PROMPT}\n"));
    }

    #[test]
    fn eof_before_paragraph() {
        let (result, out, _) = run("", OutputFormat::Text, None);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
        assert_eq!(err.to_string(), "No input found. Exiting.");
        assert_eq!(out, "Enter a paragraph:\n");
    }

    #[test]
    fn eof_before_word() {
        let (result, out, _) = run("some text\ns\n", OutputFormat::Text, None);
        assert_eq!(result.unwrap_err().to_string(), "No input found. Exiting.");
        assert!(out.ends_with("Enter a word to find its frequency (alphabetic characters only):\n"));
        assert!(!out.contains("Number of unique words"));
    }

    #[test]
    fn attempts_exhausted() {
        let (result, _, _) = run("text\n1\n2\n3\n", OutputFormat::Text, Some(2));
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
        assert_eq!(err.to_string(), "No valid input after 2 attempts. Exiting.");
    }

    #[test]
    fn query_char_absent_from_text() {
        let (result, out, _) = run("abc\nz\nabc\n", OutputFormat::Text, None);
        assert!(result.is_ok());
        assert!(out.contains("Frequency of 'z': 0\n"));
        assert!(out.contains("Frequency of \"abc\": 1\n"));
    }
}

//! Line-oriented terminal I/O.
//!
//! [`Console`] owns the input reader and both output streams for the whole
//! session. `main` builds one over locked stdio; tests build one over
//! in-memory buffers.

use std::io::{self, BufRead, StderrLock, StdinLock, StdoutLock, Write};

use tracing::debug;

use crate::error::{CliError, CliResult};

pub const EMPTY_INPUT_RETRY: &str = "Input cannot be empty. Please try again:";

pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
    prompts_to_stderr: bool,
    max_attempts: Option<u32>,
}

pub type StdConsole = Console<StdinLock<'static>, StdoutLock<'static>, StderrLock<'static>>;

impl StdConsole {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout().lock(), io::stderr().lock())
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            input,
            out,
            err,
            prompts_to_stderr: false,
            max_attempts: None,
        }
    }

    /// Send prompts and retry messages to the error stream, leaving the
    /// output stream for machine-readable results.
    pub fn with_prompts_to_stderr(mut self, enabled: bool) -> Self {
        self.prompts_to_stderr = enabled;
        self
    }

    /// Cap the number of rejected answers per prompt. `None` retries forever.
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Write a result line to the output stream.
    pub fn emit(&mut self, line: &str) -> CliResult<()> {
        writeln!(self.out, "{}", line).map_err(write_error)
    }

    /// Write an `Error: ...` line to the error stream.
    pub fn warn(&mut self, message: &str) -> CliResult<()> {
        writeln!(self.err, "Error: {}", message).map_err(write_error)
    }

    pub fn flush(&mut self) -> CliResult<()> {
        self.out.flush().map_err(write_error)?;
        self.err.flush().map_err(write_error)
    }

    /// Prompt until a line that is non-empty after trimming is entered.
    ///
    /// Returns the trimmed line. Hitting end of input is an error.
    pub fn prompt_non_empty(&mut self, prompt: &str) -> CliResult<String> {
        self.say(prompt)?;

        let mut rejected = 0;
        loop {
            let line = self.read_line()?;
            let trimmed = line.trim();

            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }

            debug!("Rejected empty line");
            self.warn(EMPTY_INPUT_RETRY)?;
            rejected += 1;
            self.check_attempts(rejected)?;
        }
    }

    /// Prompt until `parse` accepts a line, printing `retry` after each
    /// rejected answer.
    pub fn prompt_valid<T, F>(&mut self, prompt: &str, retry: &str, parse: F) -> CliResult<T>
    where
        F: Fn(&str) -> CliResult<T>,
    {
        self.say(prompt)?;

        let mut rejected = 0;
        loop {
            let line = self.read_line()?;

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(error = %e, "Rejected answer");
                    self.say(retry)?;
                    rejected += 1;
                    self.check_attempts(rejected)?;
                }
            }
        }
    }

    /// Give back the underlying reader and writers.
    #[cfg(test)]
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }

    fn say(&mut self, line: &str) -> CliResult<()> {
        if self.prompts_to_stderr {
            writeln!(self.err, "{}", line).map_err(write_error)?;
            self.err.flush().map_err(write_error)
        } else {
            writeln!(self.out, "{}", line).map_err(write_error)?;
            self.out.flush().map_err(write_error)
        }
    }

    /// Read one line. Bytes that are not valid UTF-8 become U+FFFD.
    fn read_line(&mut self) -> CliResult<String> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(|e| CliError::runtime(format!("Failed to read line: {}", e)))?;

        if read == 0 {
            return Err(CliError::no_input());
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn check_attempts(&self, rejected: u32) -> CliResult<()> {
        match self.max_attempts {
            Some(max) if rejected >= max => Err(CliError::attempts_exhausted(rejected)),
            _ => Ok(()),
        }
    }
}

fn write_error(e: io::Error) -> CliError {
    CliError::runtime(format!("Failed to write output: {}", e))
}

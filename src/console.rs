//! Line-oriented console I/O and the retry combinator.

use derive_more::{Display, Error};
use std::fmt::Display as FmtDisplay;
use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};
use tracing::{debug, instrument, warn};

/// Console I/O error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Blocking console over any line reader and writer.
///
/// Production uses locked stdin/stdout; tests use an in-memory cursor and a
/// `Vec<u8>` so whole sessions can be scripted.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console from a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl FmtDisplay) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes `text` without a newline, then blocks for one line of input.
    ///
    /// The line terminator is stripped; other whitespace is left for the
    /// validators. End of input is an error since no answer can ever arrive.
    #[instrument(skip(self))]
    pub fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            warn!("Input closed while waiting for an answer");
            return Err(ConsoleError::new("Input closed"));
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        debug!(input = %line, "Read line");
        Ok(line)
    }

    /// Returns the writer, e.g. to inspect a scripted transcript.
    pub fn output(&self) -> &W {
        &self.output
    }
}

/// Prompts until `validate` accepts the answer.
///
/// Each rejection prints the error's `Display` text and asks again. There is no
/// retry limit; only an I/O failure ends the loop early.
#[instrument(skip(console, validate))]
pub fn prompt_until<R, W, T, E>(
    console: &mut Console<R, W>,
    prompt: &str,
    mut validate: impl FnMut(&str) -> Result<T, E>,
) -> Result<T, ConsoleError>
where
    R: BufRead,
    W: Write,
    E: FmtDisplay,
{
    loop {
        let answer = console.prompt(prompt)?;
        match validate(&answer) {
            Ok(value) => return Ok(value),
            Err(error) => {
                debug!(%error, "Answer rejected, prompting again");
                console.say(&error)?;
            }
        }
    }
}

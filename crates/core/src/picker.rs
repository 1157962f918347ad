//! The interactive read-match-retry loop.
//!
//! The listing and every prompt go to a status stream, never to standard
//! output, so the chosen value can be the only thing a caller prints there.

use std::io::Write;

use log::{debug, warn};

use crate::config::PickerOptions;
use crate::dataset::{Dataset, MatchError, Row};
use crate::error::Result;
use crate::input::{InputEvent, InputSource};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The answer resolved to this row
    Chosen(Row),
    /// The user interrupted or closed the input
    Cancelled,
}

impl Selection {
    /// The chosen row, if there is one.
    #[must_use]
    pub fn row(&self) -> Option<&Row> {
        match self {
            Selection::Chosen(row) => Some(row),
            Selection::Cancelled => None,
        }
    }
}

fn plain_hint(hint: MatchError) -> String {
    hint.to_string()
}

pub struct Picker {
    dataset: Dataset,
    options: PickerOptions,
    hint_style: fn(MatchError) -> String,
}

impl Picker {
    #[must_use]
    pub fn new(dataset: Dataset, options: PickerOptions) -> Self {
        Self {
            dataset,
            options,
            hint_style: plain_hint,
        }
    }

    /// Loads the file at `path` with the delimiter from `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded.
    pub fn load(path: &str, options: PickerOptions) -> Result<Self> {
        let dataset = Dataset::load(path, &options.delimiter)?;
        Ok(Self::new(dataset, options))
    }

    /// Replaces how retry hints are turned into text, e.g. to add colour.
    #[must_use]
    pub fn with_hint_style(mut self, hint_style: fn(MatchError) -> String) -> Self {
        self.hint_style = hint_style;
        self
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// Shows the listing, then asks until an answer resolves to one row.
    ///
    /// An empty answer falls back to the default answer when one is set, and
    /// is otherwise asked again without comment. Unrecognised and ambiguous
    /// answers print a hint and ask again; there is no retry limit.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `status` or reading from `input` fails.
    /// Interrupts and end of input are not errors: they end the session
    /// with [`Selection::Cancelled`].
    pub fn run<I, W>(&self, input: &mut I, status: &mut W) -> Result<Selection>
    where
        I: InputSource,
        W: Write,
    {
        self.dataset.render(status)?;

        if let Some(default) = &self.options.default_answer {
            if let Err(e) = self.dataset.find(default) {
                warn!("Default answer `{default}` does not select a row: {e}");
            }
        }

        let prompt = self.options.prompt_text();

        loop {
            write!(status, "{prompt}")?;
            status.flush()?;

            let line = match input.next_line()? {
                InputEvent::Line(line) => line,
                InputEvent::EndOfInput => {
                    debug!("Input closed, cancelling");
                    return Ok(Selection::Cancelled);
                }
                InputEvent::Interrupted => {
                    debug!("Interrupted, cancelling");
                    return Ok(Selection::Cancelled);
                }
            };

            let answer = match (line.is_empty(), &self.options.default_answer) {
                (true, Some(default)) => default.as_str(),
                _ => line.as_str(),
            };

            match self.dataset.find(answer) {
                Ok(row) => {
                    debug!("Answer `{answer}` selected row {}", row.ordinal());
                    return Ok(Selection::Chosen(row.clone()));
                }
                Err(MatchError::Empty) => {}
                Err(hint) => {
                    debug!("Answer `{answer}` rejected: {hint:?}");
                    writeln!(status, "{}", (self.hint_style)(hint))?;
                }
            }
        }
    }
}

/// Loads `path` and runs one session against `input`.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the streams fail.
pub fn pick<I, W>(path: &str, options: PickerOptions, input: &mut I, status: &mut W) -> Result<Selection>
where
    I: InputSource,
    W: Write,
{
    Picker::load(path, options)?.run(input, status)
}

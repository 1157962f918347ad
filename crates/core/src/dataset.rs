//! Parsing of pick files and resolution of answers to rows.
//!
//! A pick file is flat, line-oriented text. Lines starting with `#` are
//! headers: the marker is stripped and the rest is shown but cannot be
//! chosen. Every other line, including a blank one, is a numbered row whose
//! fields are separated by the configured delimiter.

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use log::debug;

use crate::error::{Error, Result};

/// Marks a line as a header instead of a selectable row
pub const COMMENT_MARKER: char = '#';

/// One selectable candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    ordinal: usize,
    raw_text: String,
    display_text: String,
}

impl Row {
    fn new(ordinal: usize, raw_text: String) -> Self {
        let display_text = format!("{ordinal:>2}. {raw_text}");
        Self {
            ordinal,
            raw_text,
            display_text,
        }
    }

    /// The 1-based position of this row among the selectable lines.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The line as it appeared in the file, without its terminator.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The line as listed to the user, prefixed with its ordinal label.
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Splits the raw text into fields on `delimiter`.
    pub fn fields<'a>(&'a self, delimiter: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.raw_text.split(delimiter)
    }

    fn is_answered_by(&self, answer: &str, delimiter: &str) -> bool {
        self.ordinal.to_string() == answer || self.fields(delimiter).any(|field| field == answer)
    }
}

impl Display for Row {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.display_text)
    }
}

/// One line of the listing shown to the user, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayLine {
    /// A header line with its marker removed
    Passthrough(String),
    /// The row with this ordinal
    Row(usize),
}

/// Why an answer did not resolve to a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// Nothing was entered
    Empty,
    /// Two or more rows match
    Ambiguous,
    /// No row matches
    NoMatch,
}

impl Display for MatchError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::Empty => formatter.write_str("No answer given."),
            MatchError::Ambiguous => formatter.write_str("Answer is ambiguous. Try again."),
            MatchError::NoMatch => formatter.write_str("Answer not recognized. Try again."),
        }
    }
}

/// A parsed pick file. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Dataset {
    delimiter: String,
    lines: Vec<DisplayLine>,
    rows: Vec<Row>,
}

impl Dataset {
    fn empty(delimiter: &str) -> Result<Self> {
        if delimiter.is_empty() {
            return Err(Error::EmptyDelimiter);
        }

        Ok(Self {
            delimiter: delimiter.to_string(),
            lines: Vec::new(),
            rows: Vec::new(),
        })
    }

    /// Loads a dataset from the file at `path`.
    ///
    /// The file is opened, read to the end and closed before this returns,
    /// whether or not parsing succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiter is empty, or the file cannot be
    /// opened or read (including invalid UTF-8).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pickline_core::dataset::Dataset;
    ///
    /// let dataset = Dataset::load("mounts.tsv", "\t")?;
    /// println!("{} rows", dataset.len());
    /// # Ok::<(), pickline_core::error::Error>(())
    /// ```
    pub fn load(path: &str, delimiter: &str) -> Result<Self> {
        let dataset = {
            let file = File::open(path)
                .map_err(|e| Error::io_error("input".to_string(), path.to_string(), e))?;
            Self::from_reader(BufReader::new(file), delimiter)
                .map_err(|e| match e {
                    Error::Stdio(original) => {
                        Error::io_error("input".to_string(), path.to_string(), original)
                    }
                    other => other,
                })?
        };

        debug!(
            "Loaded {} rows and {} listing lines from `{}`",
            dataset.rows.len(),
            dataset.lines.len(),
            path
        );
        Ok(dataset)
    }

    /// Parses a dataset from any buffered reader.
    ///
    /// Both `\n` and `\r\n` terminators are removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiter is empty or reading fails.
    pub fn from_reader<R: BufRead>(reader: R, delimiter: &str) -> Result<Self> {
        let mut dataset = Self::empty(delimiter)?;
        for line in reader.lines() {
            dataset.push_line(line?);
        }
        Ok(dataset)
    }

    /// Parses a dataset from lines already split and stripped of terminators.
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiter is empty.
    pub fn from_lines<I, S>(lines: I, delimiter: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dataset = Self::empty(delimiter)?;
        for line in lines {
            dataset.push_line(line.into());
        }
        Ok(dataset)
    }

    fn push_line(&mut self, line: String) {
        if let Some(header) = line.strip_prefix(COMMENT_MARKER) {
            self.lines.push(DisplayLine::Passthrough(header.to_string()));
        } else {
            // Blank lines are rows too
            let ordinal = self.rows.len() + 1;
            self.rows.push(Row::new(ordinal, line));
            self.lines.push(DisplayLine::Row(ordinal));
        }
    }

    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn display_lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    /// The row with the given 1-based ordinal.
    #[must_use]
    pub fn row(&self, ordinal: usize) -> Option<&Row> {
        ordinal.checked_sub(1).and_then(|index| self.rows.get(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The text of one listing line.
    #[must_use]
    pub fn display_text<'a>(&'a self, line: &'a DisplayLine) -> &'a str {
        match line {
            DisplayLine::Passthrough(text) => text.as_str(),
            DisplayLine::Row(ordinal) => self
                .row(*ordinal)
                .map_or("", |row| row.display_text()),
        }
    }

    /// Writes the listing, one line per input line, in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in &self.lines {
            writeln!(out, "{}", self.display_text(line))?;
        }
        Ok(())
    }

    /// Resolves an answer to exactly one row.
    ///
    /// A row matches when the answer equals its ordinal written in decimal,
    /// or equals one of its fields exactly. Ties are never broken.
    ///
    /// # Errors
    ///
    /// - [`MatchError::Empty`] if `answer` is empty
    /// - [`MatchError::NoMatch`] if no row matches
    /// - [`MatchError::Ambiguous`] if more than one row matches
    pub fn find(&self, answer: &str) -> std::result::Result<&Row, MatchError> {
        if answer.is_empty() {
            return Err(MatchError::Empty);
        }

        let mut matches = self
            .rows
            .iter()
            .filter(|row| row.is_answered_by(answer, &self.delimiter));

        match (matches.next(), matches.next()) {
            (None, _) => Err(MatchError::NoMatch),
            (Some(row), None) => Ok(row),
            (Some(_), Some(_)) => Err(MatchError::Ambiguous),
        }
    }
}

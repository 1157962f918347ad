//! Sources of interactive answers.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::Result;

/// What one blocking read from the user produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A complete line with its terminator removed
    Line(String),
    /// The input stream was closed
    EndOfInput,
    /// The user sent an interrupt. `read_line` retries on EINTR, so this
    /// only comes from sources wired to a signal handler.
    Interrupted,
}

/// Something that can be asked for one line of input at a time.
pub trait InputSource {
    /// Blocks until a full line, end of input or an interrupt arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying stream fails for any other reason.
    fn next_line(&mut self) -> Result<InputEvent>;
}

/// Reads answers from any buffered reader.
pub struct ReaderInput<R> {
    reader: R,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for ReaderInput<R> {
    fn next_line(&mut self) -> Result<InputEvent> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(InputEvent::EndOfInput),
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(InputEvent::Line(line))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Replays a fixed list of events, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = InputEvent>>(events: I) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// A script that answers with each of `lines` in turn.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines.into_iter().map(|line| InputEvent::Line(line.into())))
    }

    /// How many events have not been consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self) -> Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::EndOfInput))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_input_strips_terminators() {
        let mut input = ReaderInput::new("one\r\ntwo\n\nthree".as_bytes());
        assert_eq!(input.next_line().unwrap(), InputEvent::Line("one".to_string()));
        assert_eq!(input.next_line().unwrap(), InputEvent::Line("two".to_string()));
        assert_eq!(input.next_line().unwrap(), InputEvent::Line(String::new()));
        assert_eq!(input.next_line().unwrap(), InputEvent::Line("three".to_string()));
        assert_eq!(input.next_line().unwrap(), InputEvent::EndOfInput);
        assert_eq!(input.next_line().unwrap(), InputEvent::EndOfInput);
    }

    #[test]
    fn test_reader_input_keeps_inner_whitespace() {
        let mut input = ReaderInput::new(" padded \n".as_bytes());
        assert_eq!(input.next_line().unwrap(), InputEvent::Line(" padded ".to_string()));
    }

    #[test]
    fn test_scripted_input_ends_with_end_of_input() {
        let mut input = ScriptedInput::new([InputEvent::Line("a".to_string()), InputEvent::Interrupted]);
        assert_eq!(input.remaining(), 2);
        assert_eq!(input.next_line().unwrap(), InputEvent::Line("a".to_string()));
        assert_eq!(input.next_line().unwrap(), InputEvent::Interrupted);
        assert_eq!(input.next_line().unwrap(), InputEvent::EndOfInput);
    }
}

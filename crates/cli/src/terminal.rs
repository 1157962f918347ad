//! Terminal side of a session: reading answers from stdin with Ctrl-C
//! support, and styling retry hints.
//!
//! Stdin is read on its own thread and every line is forwarded over a
//! channel. The Ctrl-C handler sends an interrupt on the same channel, so a
//! blocked prompt wakes up with [`InputEvent::Interrupted`] instead of the
//! process being killed.

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use log::debug;
use pickline_core::dataset::MatchError;
use pickline_core::error::{Error, Result};
use pickline_core::input::{InputEvent, InputSource, ReaderInput};

type Message = Result<InputEvent>;

/// Wakes a waiting [`ChannelInput`] with an interrupt.
#[derive(Clone)]
pub struct Interrupter(Sender<Message>);

impl Interrupter {
    pub fn interrupt(&self) {
        // The receiver is gone once the session is over
        let _ = self.0.send(Ok(InputEvent::Interrupted));
    }
}

/// Answers forwarded from a reader thread.
pub struct ChannelInput {
    sender: Sender<Message>,
    receiver: Receiver<Message>,
}

impl ChannelInput {
    /// Starts a thread that forwards lines from `reader` until it ends or fails.
    pub fn spawn<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (sender, receiver) = mpsc::channel();
        let line_sender = sender.clone();

        thread::spawn(move || {
            let mut input = ReaderInput::new(reader);
            loop {
                let message = input.next_line();
                let more = matches!(message, Ok(InputEvent::Line(_)));
                if line_sender.send(message).is_err() || !more {
                    break;
                }
            }
        });

        Self { sender, receiver }
    }

    /// Reads answers from stdin, turning Ctrl-C into an interrupt.
    ///
    /// # Errors
    ///
    /// Returns an error if the Ctrl-C handler cannot be installed.
    pub fn stdin() -> Result<Self> {
        let input = Self::spawn(io::BufReader::new(io::stdin()));
        let interrupter = input.interrupter();

        ctrlc::set_handler(move || interrupter.interrupt())
            .map_err(|e| Error::Misc(format!("Could not install Ctrl-C handler: {e}")))?;

        Ok(input)
    }

    #[must_use]
    pub fn interrupter(&self) -> Interrupter {
        Interrupter(self.sender.clone())
    }
}

impl InputSource for ChannelInput {
    fn next_line(&mut self) -> Result<InputEvent> {
        match self.receiver.recv() {
            Ok(message) => message,
            Err(_) => {
                debug!("Input channel closed");
                Ok(InputEvent::EndOfInput)
            }
        }
    }
}

/// A retry hint coloured for the terminal.
pub fn styled_hint(hint: MatchError) -> String {
    hint.to_string().yellow().to_string()
}

/// Whether retry hints should be coloured.
pub fn use_color(no_color: bool) -> bool {
    !no_color && io::stderr().is_tty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_input_forwards_lines_then_end() {
        let mut input = ChannelInput::spawn("one\n\ntwo\n".as_bytes());

        assert_eq!(input.next_line().unwrap(), InputEvent::Line("one".to_string()));
        assert_eq!(input.next_line().unwrap(), InputEvent::Line(String::new()));
        assert_eq!(input.next_line().unwrap(), InputEvent::Line("two".to_string()));
        assert_eq!(input.next_line().unwrap(), InputEvent::EndOfInput);
    }

    #[cfg(unix)]
    #[test]
    fn test_interrupter_wakes_waiting_input() {
        // A reader that never yields a line, like an idle terminal
        let (blocking_writer, blocking_reader) = std::os::unix::net::UnixStream::pair().unwrap();
        let mut input = ChannelInput::spawn(io::BufReader::new(blocking_reader));

        input.interrupter().interrupt();
        assert_eq!(input.next_line().unwrap(), InputEvent::Interrupted);
        drop(blocking_writer);
    }

    #[test]
    fn test_styled_hint_keeps_text() {
        let styled = styled_hint(MatchError::NoMatch);
        assert!(styled.contains("Answer not recognized. Try again."));
    }

    #[test]
    fn test_no_color_flag_disables_color() {
        assert!(!use_color(true));
    }
}

//! Pickline CLI Library
//!
//! This crate provides the command-line interface for pickline. It parses
//! arguments, reads answers from the terminal with Ctrl-C support, and turns
//! the chosen row into the output written to stdout.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`terminal`]: Stdin answer source, interrupt handling and hint styling
//! - [`output`]: Awk or template post-processing of the chosen row
//!
//! # Exit codes
//!
//! - `0`: a row was chosen and its output printed
//! - `1`: the user cancelled with Ctrl-C or end of input
//! - `2`: anything else failed; the reason is printed to stderr
//!
//! # Examples
//!
//! ```bash
//! # Pick a mount point and print its second column
//! pickline mounts.tsv '{print $2}'
//!
//! # Same, pressing enter picks `sda1`
//! pickline mounts.tsv '{print $2}' sda1
//!
//! # Comma separated input, rendered with a template
//! pickline -d , -t 'ssh {f1} -p {f2}' hosts.csv
//! ```

pub mod cli_args;
pub mod output;
pub mod terminal;

/// Exit code when the user cancels the prompt
pub const EXIT_CANCELLED: u8 = 1;
/// Exit code for every other failure
pub const EXIT_FAILURE: u8 = 2;

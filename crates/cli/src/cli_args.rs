//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate and turns parsed arguments into picker and output settings.

use clap::Parser;
use pickline_core::config::{
    unescape_delimiter, PickerOptions, DEFAULT_DELIMITER, DEFAULT_EXPRESSION,
    DEFAULT_POST_PROCESSOR, DEFAULT_PROMPT,
};

use crate::output::OutputMode;

/// Command-line arguments for the `pickline` binary.
///
/// The listing, prompts and retry hints are written to stderr; only the
/// post-processed row is written to stdout.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use pickline_cli::cli_args::Args;
///
/// let args = Args::parse_from(["pickline", "mounts.tsv", "{print $2}", "sda1"]);
/// assert_eq!(args.default_answer.as_deref(), Some("sda1"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the file to pick a line from.
    ///
    /// Lines starting with `#` are shown as headers; every other line is
    /// numbered and can be chosen.
    pub file: String,

    /// Awk expression run on the chosen line.
    #[arg(default_value = DEFAULT_EXPRESSION)]
    pub expression: String,

    /// Answer used when the prompt is left empty.
    pub default_answer: Option<String>,

    /// Text shown before each answer is read.
    #[arg(long, short = 'p', default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Field delimiter. `\t` and `tab` mean a tab character.
    ///
    /// If not provided, fields are separated by tabs.
    #[arg(long, short = 'd')]
    pub delimiter: Option<String>,

    /// Render the chosen line with this template instead of running awk.
    ///
    /// Available keys are `{line}`, `{ordinal}` and `{f1}`, `{f2}`, ... for fields.
    #[arg(long, short = 't')]
    pub template: Option<String>,

    /// Program used to evaluate the expression.
    #[arg(long, default_value = DEFAULT_POST_PROCESSOR)]
    pub awk: String,

    /// Do not colour retry hints.
    #[arg(long, action)]
    pub no_color: bool,
}

impl Args {
    /// The effective field delimiter, with escapes resolved.
    #[must_use]
    pub fn delimiter(&self) -> String {
        self.delimiter
            .as_deref()
            .map_or_else(|| DEFAULT_DELIMITER.to_string(), unescape_delimiter)
    }

    #[must_use]
    pub fn picker_options(&self) -> PickerOptions {
        PickerOptions {
            delimiter: self.delimiter(),
            prompt: self.prompt.clone(),
            default_answer: self.default_answer.clone(),
        }
    }

    /// A template takes precedence over the awk expression.
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        match &self.template {
            Some(template) => OutputMode::Template(template.clone()),
            None => OutputMode::Expression {
                program: self.awk.clone(),
                expression: self.expression.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["pickline", "rows.tsv"]);

        assert_eq!(args.file, "rows.tsv");
        assert_eq!(args.expression, "{print}");
        assert!(args.default_answer.is_none());
        assert_eq!(args.prompt, "Choose one");
        assert!(args.delimiter.is_none());
        assert!(args.template.is_none());
        assert_eq!(args.awk, "awk");
        assert!(!args.no_color);
    }

    #[test]
    fn test_args_positionals() {
        let args = Args::parse_from(["pickline", "rows.tsv", "{print $1}", "one"]);

        assert_eq!(args.expression, "{print $1}");
        assert_eq!(args.default_answer, Some("one".to_string()));
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "pickline", "-p", "Device", "-d", ",", "-t", "{f1}", "rows.csv",
        ]);

        assert_eq!(args.prompt, "Device");
        assert_eq!(args.delimiter, Some(",".to_string()));
        assert_eq!(args.template, Some("{f1}".to_string()));
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "pickline",
            "--prompt",
            "Host",
            "--delimiter",
            "\\t",
            "--awk",
            "gawk",
            "--no-color",
            "rows.tsv",
        ]);

        assert_eq!(args.prompt, "Host");
        assert_eq!(args.delimiter(), "\t");
        assert_eq!(args.awk, "gawk");
        assert!(args.no_color);
    }

    #[test]
    fn test_args_missing_file_is_an_error() {
        assert!(Args::try_parse_from(["pickline"]).is_err());
    }

    #[test]
    fn test_picker_options() {
        let args = Args::parse_from(["pickline", "-d", ",", "-p", "Pick", "rows.csv", "{print}", "db"]);
        let options = args.picker_options();

        assert_eq!(options.delimiter, ",");
        assert_eq!(options.prompt, "Pick");
        assert_eq!(options.default_answer, Some("db".to_string()));
        assert_eq!(options.prompt_text(), "Pick [db]: ");
    }

    #[test]
    fn test_default_delimiter_is_tab() {
        let args = Args::parse_from(["pickline", "rows.tsv"]);
        assert_eq!(args.delimiter(), "\t");
    }

    #[test]
    fn test_output_mode_expression() {
        let args = Args::parse_from(["pickline", "rows.tsv", "{print $2}"]);
        assert_eq!(
            args.output_mode(),
            OutputMode::Expression {
                program: "awk".to_string(),
                expression: "{print $2}".to_string(),
            }
        );
    }

    #[test]
    fn test_output_mode_template_wins() {
        let args = Args::parse_from(["pickline", "-t", "{f2}", "rows.tsv", "{print $2}"]);
        assert_eq!(args.output_mode(), OutputMode::Template("{f2}".to_string()));
    }
}

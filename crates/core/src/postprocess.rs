//! Turning the chosen row into the final output.
//!
//! By default the row is handed to an awk expression; alternatively it can be
//! rendered with a template whose keys name the row's fields.

use std::collections::HashMap;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use leon::Template;
use log::info;

use crate::dataset::Row;
use crate::error::{Error, Result};

/// The awk field separator that splits exactly where `delimiter` does.
///
/// A lone space means "runs of whitespace" to awk and longer separators are
/// regular expressions, so both are escaped to match literally. Any other
/// single character is already literal.
pub fn awk_field_separator(delimiter: &str) -> String {
    let mut chars = delimiter.chars();
    match (chars.next(), chars.next()) {
        (Some(' '), None) => "[ ]".to_string(),
        (Some(_), None) => delimiter.to_string(),
        _ => delimiter
            .chars()
            .map(|c| match c {
                c if c.is_alphanumeric() => c.to_string(),
                // -F values go through string escape processing first
                '\\' => "\\\\\\\\".to_string(),
                '^' => "\\\\^".to_string(),
                c => format!("[{c}]"),
            })
            .collect(),
    }
}

/// Builds the command that evaluates `expression` with fields split on `delimiter`.
pub fn expression_command(program: &str, expression: &str, delimiter: &str) -> Command {
    let mut command = Command::new(program);
    command
        .arg(format!("-F{}", awk_field_separator(delimiter)))
        .arg(expression);
    command
}

/// Pipes `raw_text` through `expression` and returns what it printed.
///
/// The post-processor's stderr is inherited. Its stdout is captured rather
/// than inherited so that nothing reaches the caller's stdout on failure.
///
/// # Errors
///
/// Returns an error if the program cannot be started, its stdin cannot be
/// written, or it exits with a non-success code.
pub fn run_expression(
    program: &str,
    expression: &str,
    delimiter: &str,
    raw_text: &str,
) -> Result<Vec<u8>> {
    info!("Running `{program}` with expression `{expression}`");

    let mut child = expression_command(program, expression, delimiter)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| Error::sub_process(program.to_string(), e))?;

    {
        // Dropping stdin closes it so the post-processor sees end of input
        if let Some(mut stdin) = child.stdin.take() {
            match writeln!(stdin, "{raw_text}") {
                // Programs that never read their input close the pipe early
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                result => result?,
            }
        }
    }

    let output = child.wait_with_output()?;

    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(Error::SubProcessExit(output.status.code()))
    }
}

/// The values a template may refer to.
///
/// `line` is the raw text, `ordinal` the row number, and `f1`..`fN` the
/// fields split on `delimiter`.
pub fn template_context(row: &Row, delimiter: &str) -> HashMap<String, String> {
    let mut context: HashMap<String, String> = row
        .fields(delimiter)
        .enumerate()
        .map(|(index, field)| (format!("f{}", index + 1), field.to_string()))
        .collect();

    context.insert("line".to_string(), row.raw_text().to_string());
    context.insert("ordinal".to_string(), row.ordinal().to_string());
    context
}

/// Renders `row` with a template such as `"mount {f2}"`.
///
/// # Errors
///
/// Returns an error if the template does not parse or names a key the row
/// does not have.
pub fn render_template(template: &str, row: &Row, delimiter: &str) -> Result<String> {
    let template = Template::parse(template)?;
    let context = template_context(row, delimiter);
    Ok(template.render(&context)?)
}

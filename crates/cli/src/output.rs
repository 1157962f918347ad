//! Producing the bytes written to stdout for the chosen row.

use pickline_core::dataset::Row;
use pickline_core::error::Result;
use pickline_core::postprocess::{render_template, run_expression};

/// How the chosen row is turned into output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Pipe the row through an awk expression
    Expression { program: String, expression: String },
    /// Render the row with a template, followed by a newline
    Template(String),
}

impl OutputMode {
    /// Produces the final output for `row`.
    ///
    /// # Errors
    ///
    /// Returns an error if the post-processor fails or the template cannot
    /// be rendered.
    pub fn apply(&self, row: &Row, delimiter: &str) -> Result<Vec<u8>> {
        match self {
            OutputMode::Expression {
                program,
                expression,
            } => run_expression(program, expression, delimiter, row.raw_text()),
            OutputMode::Template(template) => {
                let mut rendered = render_template(template, row, delimiter)?;
                rendered.push('\n');
                Ok(rendered.into_bytes())
            }
        }
    }
}

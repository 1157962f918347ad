use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Could not start post-processor `{}`: {}", .program, .original)]
    SubProcess {
        program: String,
        original: std::io::Error,
    },

    #[error("The post-processor exited with non-success code{}.", .0.as_ref().map(|c| format!(" {c}")).unwrap_or_default())]
    SubProcessExit(Option<i32>),

    #[error("Error parsing output template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering output template: {}", .0)]
    Render(#[from] RenderError),

    #[error("The field delimiter may not be empty")]
    EmptyDelimiter,

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn sub_process(program: String, original: std::io::Error) -> Self {
        Self::SubProcess { program, original }
    }
}

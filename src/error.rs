//! Crate-level error type. Every variant is terminal for a conversion run;
//! the binary prints it once and exits.
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Not enough number of arguments\nUSAGE: {program} <input_file>")]
    Argument { program: String },

    #[error("Fail to read file: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", crate::parser::format_parse_error(source, &path.to_string_lossy()))]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Fail to write to file: {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn usage(program: impl Into<String>) -> Self {
        Error::Argument {
            program: program.into(),
        }
    }
}

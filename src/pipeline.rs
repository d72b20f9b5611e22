use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::emit;
use crate::error::Result;
use crate::frame::Frame;
use crate::parser::parse_file;
use crate::renderer::render_cli_to_string;

/// What a conversion run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write the HTML page to disk.
    #[default]
    Html,
    /// Frames as pretty JSON.
    Json,
    /// Frames as a terminal tree.
    Cli,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub mode: Mode,
    /// Overrides the page path derived from the input path.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub enum Output {
    Written(PathBuf),
    Printed(String),
}

#[derive(Debug)]
pub struct Outcome {
    pub source: PathBuf,
    pub frames: usize,
    pub output: Output,
}

impl Outcome {
    /// Confirmation that the source was read and parsed.
    pub fn read_message(&self) -> String {
        format!("Successfully read file: {}", self.source.display())
    }

    pub fn written_message(&self) -> Option<String> {
        match &self.output {
            Output::Written(path) => Some(format!("{} created with success", path.display())),
            Output::Printed(_) => None,
        }
    }
}

/// Reads, parses and renders `input` according to `options`.
/// Nothing is written unless the whole input parses.
pub fn convert(input: &Path, options: &Options) -> Result<Outcome> {
    let frames = parse_file(input)?;
    let output = match options.mode {
        Mode::Html => Output::Written(match &options.output {
            Some(target) => emit::emit_to(target, &frames)?,
            None => emit::emit(input, &frames)?,
        }),
        Mode::Json => Output::Printed(render_json(&frames)?),
        Mode::Cli => Output::Printed(render_cli_to_string(&frames)),
    };
    Ok(Outcome {
        source: input.to_path_buf(),
        frames: frames.len(),
        output,
    })
}

pub fn render_json(frames: &[Frame]) -> Result<String> {
    #[derive(Serialize)]
    struct Page<'a> {
        frames: &'a [Frame],
    }
    Ok(serde_json::to_string_pretty(&Page { frames })?)
}

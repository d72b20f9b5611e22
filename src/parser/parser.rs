use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Error;
use crate::frame::{Frame, Link};
use crate::parser::error::ParseError;

/// Where the line scanner currently is.
enum State {
    /// No header seen yet; lines are skipped.
    Preamble,
    /// Collecting link lines for the frame opened by the last header.
    InFrame { name: String, links: Vec<Link> },
}

impl State {
    fn close(self, frames: &mut Vec<Frame>) {
        if let State::InFrame { name, links } = self {
            debug!(frame = %name, links = links.len(), "parsed frame");
            frames.push(Frame::new(name, links));
        }
    }
}

/// Parses start page markup into frames.
///
/// The input is trimmed as a whole, then scanned line by line. A line whose
/// first character is `#` opens a frame; every other non-blank line after
/// the first header must be a `label * url` link line.
pub fn parse(src: &str) -> Result<Vec<Frame>, ParseError> {
    let body = src.trim();
    let skipped = src.len() - src.trim_start().len();
    let first_line = src[..skipped].matches('\n').count() + 1;

    let mut frames = Vec::new();
    let mut state = State::Preamble;

    for (idx, line) in body.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('#') {
            state.close(&mut frames);
            state = State::InFrame {
                name: header.trim().to_string(),
                links: Vec::new(),
            };
            continue;
        }
        if let State::InFrame { links, .. } = &mut state {
            links.push(parse_link(line, first_line + idx)?);
        }
    }
    state.close(&mut frames);

    if frames.is_empty() {
        return Err(ParseError::EmptyContent);
    }
    Ok(frames)
}

fn parse_link(line: &str, line_no: usize) -> Result<Link, ParseError> {
    match line.split_once('*') {
        Some((label, url)) => Ok(Link::new(label, url.trim())),
        None => Err(ParseError::MalformedLink {
            line: line_no,
            text: line.to_string(),
        }),
    }
}

pub fn parse_file(path: &Path) -> Result<Vec<Frame>, Error> {
    let src = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&src).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

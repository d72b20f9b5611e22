use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::renderer::render_page;

/// Derives the page path from the source path: the extension of the file
/// name is replaced by `html`, or `.html` is appended when there is none.
pub fn output_path(source: &Path) -> PathBuf {
    source.with_extension("html")
}

/// Renders `frames` and writes the page next to `source`.
pub fn emit(source: &Path, frames: &[Frame]) -> Result<PathBuf> {
    emit_to(&output_path(source), frames)
}

pub fn emit_to(target: &Path, frames: &[Frame]) -> Result<PathBuf> {
    let page = render_page(frames);
    fs::write(target, page).map_err(|source| Error::Write {
        path: target.to_path_buf(),
        source,
    })?;
    info!(path = %target.display(), frames = frames.len(), "page written");
    Ok(target.to_path_buf())
}

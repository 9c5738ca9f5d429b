use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PgnError;

use super::comments::CommentStripper;

/// The sample game compiled into the binary.
pub const SAMPLE_PGN: &str = include_str!("../../data/sample.pgn");

/// Label shown for the built-in sample.
pub const SAMPLE_PGN_LABEL: &str = "Built-in sample PGN: sample.pgn, v1.0.0";

/// Where the PGN text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PgnSource {
    File(PathBuf),
    Sample,
}

impl PgnSource {
    /// A user-supplied path, or the built-in sample when none was given.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => PgnSource::File(path),
            None => PgnSource::Sample,
        }
    }

    pub fn is_sample(&self) -> bool {
        matches!(self, PgnSource::Sample)
    }

    /// Read the raw PGN text.
    pub fn read(&self) -> Result<String, PgnError> {
        match self {
            PgnSource::Sample => Ok(SAMPLE_PGN.to_string()),
            PgnSource::File(path) => read_file(path),
        }
    }

    /// Short description for the table header.
    pub fn describe(&self) -> String {
        match self {
            PgnSource::Sample => SAMPLE_PGN_LABEL.to_string(),
            PgnSource::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

fn read_file(path: &Path) -> Result<String, PgnError> {
    if !path.exists() {
        return Err(PgnError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PgnError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => PgnError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read PGN file");
    Ok(text)
}

fn is_tag_pair(line: &str) -> bool {
    line.trim_start().starts_with('[')
}

/// Extract the cleaned movetext of the first game in `raw`.
///
/// Leading tag pairs and blank lines are skipped and the game ends at the
/// next tag pair outside a comment. Brace and `;` comments are removed in
/// the same pass. Parentheses are spaced out so `(1... e5` splits into `(`
/// and `1... e5`.
pub fn extract_movetext(raw: &str) -> Result<String, PgnError> {
    let mut stripper = CommentStripper::new();
    let mut started = false;
    let mut lines = 0;
    for line in raw.split_inclusive('\n') {
        if !stripper.in_comment() {
            if !started && (line.trim().is_empty() || is_tag_pair(line)) {
                stripper.skip_line(line);
                continue;
            }
            if started && is_tag_pair(line) {
                break;
            }
        }
        started = true;
        stripper.feed_line(line)?;
        lines += 1;
    }
    let uncommented = stripper.finish()?;

    let mut cleaned = String::with_capacity(uncommented.len());
    for c in uncommented.chars() {
        match c {
            '(' | ')' => {
                cleaned.push(' ');
                cleaned.push(c);
                cleaned.push(' ');
            }
            _ => cleaned.push(c),
        }
    }

    let movetext = cleaned.trim();
    if movetext.is_empty() {
        return Err(PgnError::NoMovetext);
    }
    debug!(lines, chars = movetext.len(), "extracted movetext");
    Ok(movetext.to_string())
}

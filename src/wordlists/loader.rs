//! Word list loading
//!
//! Reads a plain-text list (one word per line) and rejects the whole file if
//! any line is not a well-formed word.

use crate::core::validate_word;
use log::{info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Which of the two startup lists a file is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Every word the player may guess
    Dictionary,
    /// Words the secret is drawn from
    Candidates,
}

impl ListKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Dictionary => "words file",
            Self::Candidates => "candidate words file",
        }
    }
}

/// Failure to load a word list
#[derive(Debug)]
pub enum ListError {
    NotFound { path: PathBuf, kind: ListKind },
    InvalidWords { path: PathBuf, count: usize },
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path, kind } => {
                write!(f, "The {} {} doesn't exist.", kind.label(), path.display())
            }
            Self::InvalidWords { path, count } => write!(
                f,
                "{count} invalid words were found in the {} file.",
                path.display()
            ),
            Self::Io { path, source } => write!(f, "Cannot read {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Count lines that fail word validation (no reference list)
#[must_use]
pub fn count_invalid<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .filter(|line| validate_word(line.as_ref(), None).is_err())
        .count()
}

/// Split file content into lines without trimming
///
/// Handles `\n` and `\r\n` endings; a final newline does not produce an
/// empty trailing line.
#[must_use]
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

/// Load a word list and validate every line
///
/// Bytes that are not UTF-8 are replaced, so such lines count as invalid
/// words rather than aborting the read.
///
/// # Errors
///
/// - `ListError::NotFound` if the file does not exist
/// - `ListError::InvalidWords` if any line is not a well-formed word
/// - `ListError::Io` for any other read failure
pub fn load_word_list<P: AsRef<Path>>(path: P, kind: ListKind) -> Result<Vec<String>, ListError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ListError::NotFound {
                path: path.to_path_buf(),
                kind,
            }
        } else {
            ListError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let lines = split_lines(&String::from_utf8_lossy(&bytes));
    let invalid = count_invalid(&lines);
    if invalid > 0 {
        warn!("{invalid} of {} lines in {} are not valid words", lines.len(), path.display());
        return Err(ListError::InvalidWords {
            path: path.to_path_buf(),
            count: invalid,
        });
    }

    info!("Loaded {} words from {}", lines.len(), path.display());
    Ok(lines)
}

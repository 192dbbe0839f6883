//! Startup: argument checks, list loading, and secret selection
//!
//! Every failure here happens before a game exists and ends the program
//! with a single message.

use crate::core::Dictionary;
use crate::wordlists::{ListError, ListKind, load_word_list};
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::path::{Path, PathBuf};

/// Banner printed once both lists check out
pub const BANNER: &str = "Words Virtuoso";

/// Reasons the game cannot start
#[derive(Debug)]
pub enum SetupError {
    /// Anything other than exactly two file arguments
    WrongArgumentCount(usize),
    /// A list file is missing, unreadable, or has malformed lines
    List(ListError),
    /// Candidate words absent from the dictionary
    CandidatesNotIncluded { count: usize, dictionary: PathBuf },
    /// The candidate file has no lines to draw a secret from
    EmptyCandidates { path: PathBuf },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArgumentCount(_) => write!(f, "Wrong number of arguments."),
            Self::List(e) => write!(f, "{e}"),
            Self::CandidatesNotIncluded { count, dictionary } => write!(
                f,
                "{count} candidate words are not included in the {} file.",
                dictionary.display()
            ),
            Self::EmptyCandidates { path } => {
                write!(f, "The candidate words file {} is empty.", path.display())
            }
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::List(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ListError> for SetupError {
    fn from(e: ListError) -> Self {
        Self::List(e)
    }
}

/// Validated word lists, ready to play
#[derive(Debug, Clone)]
pub struct Setup {
    pub dictionary: Dictionary,
    pub candidates: Vec<String>,
}

/// Check the arguments and load both lists
///
/// Expects `[dictionary, candidates]`. The dictionary is loaded first, so a
/// problem with it is reported even if the candidate file is also bad.
///
/// # Errors
///
/// Returns the first `SetupError` encountered, in the order: argument
/// count, dictionary file, candidate file, empty candidates, coverage.
pub fn prepare<P: AsRef<Path>>(paths: &[P]) -> Result<Setup, SetupError> {
    let [dictionary_path, candidates_path] = paths else {
        return Err(SetupError::WrongArgumentCount(paths.len()));
    };
    let dictionary_path = dictionary_path.as_ref();
    let candidates_path = candidates_path.as_ref();

    let dictionary = Dictionary::new(load_word_list(dictionary_path, ListKind::Dictionary)?);
    let candidates = load_word_list(candidates_path, ListKind::Candidates)?;

    if candidates.is_empty() {
        return Err(SetupError::EmptyCandidates {
            path: candidates_path.to_path_buf(),
        });
    }

    let missing = count_missing(&candidates, &dictionary);
    if missing > 0 {
        warn!("{missing} candidates are missing from {}", dictionary_path.display());
        return Err(SetupError::CandidatesNotIncluded {
            count: missing,
            dictionary: dictionary_path.to_path_buf(),
        });
    }

    info!(
        "{} dictionary words, {} candidates",
        dictionary.len(),
        candidates.len()
    );
    Ok(Setup {
        dictionary,
        candidates,
    })
}

/// Number of candidates not found (case-insensitively) in the dictionary
#[must_use]
pub fn count_missing(candidates: &[String], dictionary: &Dictionary) -> usize {
    candidates
        .iter()
        .filter(|word| !dictionary.contains(word))
        .count()
}

/// Pick one candidate uniformly at random
///
/// Returns `None` only for an empty list, which `prepare` never produces.
pub fn pick_secret<'a, R: Rng + ?Sized>(candidates: &'a [String], rng: &mut R) -> Option<&'a str> {
    let secret = candidates.choose(rng)?;
    debug!("Secret drawn from {} candidates", candidates.len());
    Some(secret.as_str())
}

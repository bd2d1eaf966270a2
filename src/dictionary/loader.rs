//! Dictionary loading utilities
//!
//! Locates `dictionary.txt`, reads it line by line and builds entries from the
//! lines that are valid 5-letter words.

use super::Dictionary;
use crate::core::{Entry, WORD_LENGTH};
use log::{debug, info};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name searched for when no explicit path is given
pub const DICTIONARY_FILE: &str = "dictionary.txt";

/// Error type for dictionary discovery and loading
#[derive(Debug)]
pub enum DictionaryError {
    /// No `dictionary.txt` in the start directory or any ancestor
    NotFound(PathBuf),
    Io(PathBuf, io::Error),
    /// The file had no usable words
    Empty(PathBuf),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(start) => write!(
                f,
                "Unable to find {DICTIONARY_FILE} in {} or any parent directory",
                start.display()
            ),
            Self::Io(path, err) => write!(f, "Failed to read {}: {err}", path.display()),
            Self::Empty(path) => write!(
                f,
                "{} contains no {WORD_LENGTH}-letter words",
                path.display()
            ),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, err) => Some(err),
            _ => None,
        }
    }
}

/// Walk up from `start` looking for `dictionary.txt`
///
/// # Errors
///
/// Returns `DictionaryError::NotFound` if no ancestor holds the file.
pub fn find_dictionary(start: &Path) -> Result<PathBuf, DictionaryError> {
    start
        .ancestors()
        .map(|dir| dir.join(DICTIONARY_FILE))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| DictionaryError::NotFound(start.to_path_buf()))
}

/// Build entries from lines of text
///
/// Lines are trimmed and uppercased. Lines of the wrong length or with
/// non-letter characters are skipped.
///
/// # Examples
/// ```
/// use wordle_minimax::dictionary::loader::entries_from_lines;
///
/// let entries = entries_from_lines("crane\nslate\ntoolong\n");
/// assert_eq!(entries.len(), 2);
/// ```
#[must_use]
pub fn entries_from_lines(content: &str) -> Vec<Entry> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.len() == WORD_LENGTH)
        .filter_map(|line| match Entry::new(&line.to_ascii_uppercase()) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("skipping dictionary line {line:?}: {e}");
                None
            }
        })
        .collect()
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or yields no words.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|e| DictionaryError::Io(path.to_path_buf(), e))?;

    let entries = entries_from_lines(&content);
    if entries.is_empty() {
        return Err(DictionaryError::Empty(path.to_path_buf()));
    }

    info!("loaded {} words from {}", entries.len(), path.display());
    Ok(Dictionary::new(entries))
}

/// Load from `explicit` if given, otherwise search upward from `start`
///
/// # Errors
///
/// Returns an error if no dictionary is found or it cannot be loaded.
pub fn load(explicit: Option<&Path>, start: &Path) -> Result<Dictionary, DictionaryError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => find_dictionary(start)?,
    };
    load_from_file(path)
}

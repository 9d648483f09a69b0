//! Word list management module
//!
//! Handles loading and querying the list of known weak passwords.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

static KNOWN_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file is empty")]
    EmptyFile,
}

/// Returns the word list file path.
///
/// Priority:
/// 1. Environment variable `PWQ_WORDLIST_PATH`
/// 2. Default path `./assets/wordlist.txt`
pub fn wordlist_path() -> PathBuf {
    std::env::var("PWQ_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/wordlist.txt"))
}

/// Initializes the word list of known weak passwords from an external file.
///
/// # Environment Variable
///
/// Set `PWQ_WORDLIST_PATH` to specify a custom word list file location.
/// If not set, defaults to `./assets/wordlist.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist() -> Result<usize, WordListError> {
    let path = wordlist_path();
    init_wordlist_from_path(&path)
}

/// Initializes the word list from a specific file path.
///
/// The file is one password per line; line-ending variations (`\r\n`, `\r`)
/// are trimmed and entries are lowercased before insertion. Initialization is
/// idempotent: once a list is loaded, later calls return its size unchanged.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, WordListError> {
    {
        let guard = KNOWN_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list initialization FAILED: FileNotFound {}", path.display());
        return Err(WordListError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list initialization FAILED: Empty file {}", path.display());
        return Err(WordListError::EmptyFile);
    }

    // lines() handles \n and \r\n; bare \r files still need the trim.
    let set: HashSet<String> = content
        .lines()
        .flat_map(|l| l.split('\r'))
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = KNOWN_PASSWORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Word list initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a cloned snapshot of the loaded word list.
///
/// Returns `None` if no word list has been initialized yet.
pub fn get_wordlist() -> Option<HashSet<String>> {
    let guard = KNOWN_PASSWORDS.read().unwrap();
    guard.clone()
}

/// Whether a word list has been loaded.
pub fn is_initialized() -> bool {
    KNOWN_PASSWORDS.read().unwrap().is_some()
}

/// Checks if a password is in the word list.
///
/// Returns `true` if the password is listed (case-insensitive).
/// Returns `false` if the word list is not initialized or the password is
/// not found.
pub fn is_listed(password: &str) -> bool {
    let guard = KNOWN_PASSWORDS.read().unwrap();
    guard
        .as_ref()
        .map(|wl| wl.contains(&password.to_lowercase()))
        .unwrap_or(false)
}

/// Resets the word list for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    let mut guard = KNOWN_PASSWORDS.write().unwrap();
    *guard = None;
}

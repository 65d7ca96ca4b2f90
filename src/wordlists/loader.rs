//! Word list loading utilities
//!
//! Resolves `-w` style arguments to words: each argument names an embedded
//! list or a file holding one word per line.

use super::lookup;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word list loading
#[derive(Debug)]
pub enum WordlistError {
    Unknown(String),
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for WordlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "invalid wordlist `{name}`"),
            Self::Io { path, source } => {
                write!(f, "failed to read wordlist {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WordlistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unknown(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Normalize one dictionary line
///
/// Returns the trimmed, lower-cased word, or `None` for blank lines and lines
/// with anything other than ASCII letters.
#[must_use]
pub fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    (!trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| trimmed.to_ascii_lowercase())
}

/// Load words from a file
///
/// Returns the normalized words, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letterboxed::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/common.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize).collect())
}

/// Normalize an embedded or in-memory word slice
///
/// # Examples
/// ```
/// use letterboxed::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["Yoga", "", "r2d2", "rebuy"]);
/// assert_eq!(words, ["yoga", "rebuy"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&word| normalize(word)).collect()
}

/// Resolve and merge word lists
///
/// Each entry is an embedded list name or, failing that, a path to an existing
/// file. Words are de-duplicated, keeping first-seen order.
///
/// # Errors
///
/// Returns `WordlistError::Unknown` for an entry that is neither an embedded
/// list nor a file, and `WordlistError::Io` if a file cannot be read.
pub fn load_wordlists<S: AsRef<str>>(lists: &[S]) -> Result<Vec<String>, WordlistError> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for list in lists {
        let list = list.as_ref();
        let loaded = if let Some(embedded) = lookup(list) {
            words_from_slice(embedded)
        } else if Path::new(list).is_file() {
            load_from_file(list).map_err(|source| WordlistError::Io {
                path: PathBuf::from(list),
                source,
            })?
        } else {
            return Err(WordlistError::Unknown(list.to_string()));
        };

        for word in loaded {
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{COMMON, SOLUTIONS};
    use std::io::Write;

    #[test]
    fn normalize_cleans_lines() {
        assert_eq!(normalize("  Yoga \r"), Some("yoga".to_string()));
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("don't"), None);
        assert_eq!(normalize("café"), None);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "two words", "r2d2", "SLATE"]);
        assert_eq!(words, ["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_single_embedded_list() {
        let words = load_wordlists(&["solutions"]).unwrap();
        assert_eq!(words.len(), SOLUTIONS.len());
    }

    #[test]
    fn merged_lists_are_deduplicated() {
        let words = load_wordlists(&["solutions", "common", "solutions"]).unwrap();
        let unique: FxHashSet<&str> = SOLUTIONS.iter().chain(COMMON).copied().collect();
        assert_eq!(words.len(), unique.len());
        assert!(words.len() < SOLUTIONS.len() + COMMON.len());
        assert_eq!(words[0], SOLUTIONS[0]);
    }

    #[test]
    fn unknown_list_is_an_error() {
        let err = load_wordlists(&["missing"]).unwrap_err();
        assert!(matches!(err, WordlistError::Unknown(ref name) if name == "missing"));
        assert_eq!(err.to_string(), "invalid wordlist `missing`");
    }

    #[test]
    fn load_from_path() {
        let path = std::env::temp_dir().join(format!("letterboxed-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "Upholder\n\nrebuy\n  yoga  \nnot-a-word").unwrap();
        }
        let file = path.to_string_lossy().into_owned();
        let words = load_wordlists(&[file.as_str(), "solutions"]).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words[..3], ["upholder", "rebuy", "yoga"]);
        assert_eq!(words.len(), SOLUTIONS.len());
    }

    #[test]
    fn empty_request_loads_nothing() {
        let lists: &[&str] = &[];
        assert!(load_wordlists(lists).unwrap().is_empty());
    }
}

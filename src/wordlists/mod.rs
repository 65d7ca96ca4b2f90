//! Word lists for Letter Boxed solving
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! looked up by name.

mod embedded;
pub mod loader;

pub use embedded::{COMMON, COMMON_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
pub use loader::{WordlistError, load_wordlists};

/// Name of the list used when none is requested
pub const DEFAULT_WORDLIST: &str = "solutions";

const EMBEDDED: &[(&str, &[&str])] = &[("common", COMMON), ("solutions", SOLUTIONS)];

/// Look up an embedded list by name
#[must_use]
pub fn lookup(name: &str) -> Option<&'static [&'static str]> {
    EMBEDDED
        .iter()
        .find(|(list, _)| *list == name)
        .map(|&(_, words)| words)
}

/// Names of every embedded list, sorted
#[must_use]
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&str> = EMBEDDED.iter().map(|&(name, _)| name).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
    }

    #[test]
    fn common_count_matches_const() {
        assert_eq!(COMMON.len(), COMMON_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase() {
        for &word in SOLUTIONS.iter().chain(COMMON) {
            assert!(
                !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(lookup("solutions").map(<[&str]>::len), Some(SOLUTIONS_COUNT));
        assert_eq!(lookup("common").map(<[&str]>::len), Some(COMMON_COUNT));
        assert!(lookup("missing").is_none());
        assert!(lookup(DEFAULT_WORDLIST).is_some());
    }

    #[test]
    fn names_are_sorted() {
        assert_eq!(names(), ["common", "solutions"]);
    }

    #[test]
    fn expected_counts() {
        assert_eq!(SOLUTIONS_COUNT, 94);
        assert_eq!(COMMON_COUNT, 555);
    }
}

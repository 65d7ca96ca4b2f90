//! Letter Boxed puzzle configuration
//!
//! A box is four sides of letters plus the bounds that shape a search: the
//! shortest word allowed, the longest chain allowed, and how many workers
//! search at once.

use super::Alphabet;
use std::fmt;
use std::str::FromStr;

/// Number of sides on a box
pub const SIDES: usize = 4;

/// Default shortest word length
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Default longest chain length
pub const DEFAULT_MAX_CHAIN: usize = 2;

/// A Letter Boxed puzzle
///
/// Letters are stored lower-cased. No letter appears twice anywhere in the box,
/// so every letter belongs to exactly one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBox {
    sides: Vec<Vec<u8>>,
    alphabet: Alphabet,
    min_length: usize,
    max_chain: usize,
    concurrency: usize,
}

/// Error type for malformed boxes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxError {
    WrongSideCount(usize),
    InvalidLetter(char),
    DuplicateLetter(char),
    EmptyBox,
}

impl fmt::Display for BoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongSideCount(n) => write!(f, "found {n} sides, expected {SIDES}"),
            Self::InvalidLetter(c) => write!(f, "invalid letter `{c}`"),
            Self::DuplicateLetter(c) => write!(f, "letter `{c}` appears more than once"),
            Self::EmptyBox => write!(f, "box has no letters"),
        }
    }
}

impl std::error::Error for BoxError {}

impl LetterBox {
    /// Create a box from exactly four sides
    ///
    /// # Errors
    /// Returns `BoxError` if:
    /// - There are not exactly four sides
    /// - A side contains anything other than ASCII letters
    /// - A letter appears more than once in the box
    /// - The box has no letters at all
    ///
    /// # Examples
    /// ```
    /// use letterboxed::core::LetterBox;
    ///
    /// let letter_box = LetterBox::new(&["RUL", "eya", "gdh", "opb"]).unwrap();
    /// assert_eq!(letter_box.to_string(), "rul-eya-gdh-opb");
    /// assert_eq!(letter_box.letter_count(), 12);
    ///
    /// assert!(LetterBox::new(&["rul", "eya"]).is_err());
    /// assert!(LetterBox::new(&["rul", "eya", "gdh", "opr"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(sides: &[S]) -> Result<Self, BoxError> {
        if sides.len() != SIDES {
            return Err(BoxError::WrongSideCount(sides.len()));
        }

        let mut seen = [false; 26];
        let mut parsed = Vec::with_capacity(SIDES);
        for side in sides {
            let mut letters = Vec::with_capacity(side.as_ref().len());
            for c in side.as_ref().chars() {
                if !c.is_ascii_alphabetic() {
                    return Err(BoxError::InvalidLetter(c));
                }
                let c = c.to_ascii_lowercase();
                let slot = &mut seen[usize::from(c as u8 - b'a')];
                if *slot {
                    return Err(BoxError::DuplicateLetter(c));
                }
                *slot = true;
                letters.push(c as u8);
            }
            parsed.push(letters);
        }

        let alphabet = Alphabet::new(parsed.iter().flatten());
        if alphabet.is_empty() {
            return Err(BoxError::EmptyBox);
        }

        Ok(Self {
            sides: parsed,
            alphabet,
            min_length: DEFAULT_MIN_LENGTH,
            max_chain: DEFAULT_MAX_CHAIN,
            concurrency: rayon::current_num_threads(),
        })
    }

    /// Create a box from command-line style arguments
    ///
    /// Accepts either one `aaa-bbb-ccc-ddd` argument or four separate sides.
    ///
    /// # Errors
    /// Returns `BoxError::WrongSideCount` if the arguments do not describe
    /// four sides, or any error from [`LetterBox::new`].
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, BoxError> {
        match args {
            [combined] => {
                let sides: Vec<&str> = combined.as_ref().split('-').collect();
                Self::new(sides.as_slice())
            }
            _ => Self::new(args),
        }
    }

    /// Set the shortest word length
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the longest chain length
    #[must_use]
    pub fn with_max_chain(mut self, max_chain: usize) -> Self {
        self.max_chain = max_chain;
        self
    }

    /// Set the number of concurrent workers (at least one)
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// All sides in order
    #[inline]
    #[must_use]
    pub fn sides(&self) -> &[Vec<u8>] {
        &self.sides
    }

    /// Side index holding `letter`, if any
    #[must_use]
    pub fn side_of(&self, letter: u8) -> Option<usize> {
        self.sides.iter().position(|side| side.contains(&letter))
    }

    /// Distinct letters of the box with their mask bit positions
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of distinct letters in the box
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.alphabet.len()
    }

    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[inline]
    #[must_use]
    pub const fn max_chain(&self) -> usize {
        self.max_chain
    }

    #[inline]
    #[must_use]
    pub const fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Whether `word` uses only box letters and never takes two consecutive
    /// letters from the same side
    #[must_use]
    pub fn is_spellable(&self, word: &str) -> bool {
        let mut previous = None;
        for letter in word.bytes() {
            let Some(side) = self.side_of(letter) else {
                return false;
            };
            if previous == Some(side) {
                return false;
            }
            previous = Some(side);
        }
        previous.is_some()
    }
}

impl fmt::Display for LetterBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, side) in self.sides.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            for &letter in side {
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}

impl FromStr for LetterBox {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(&[s])
    }
}

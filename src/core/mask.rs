//! Letter coverage bitmasks
//!
//! Every distinct letter in a box gets one bit, in order of first appearance
//! around the box. A word's mask has the bits of the letters it uses; a chain's
//! mask is the union of its words' masks. With at most 26 letters a `u32` is
//! always wide enough.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of box letters, one bit per distinct letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterMask(u32);

impl LetterMask {
    /// No letters
    pub const EMPTY: Self = Self(0);

    /// Create a mask from raw bits
    #[inline]
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bit value
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Number of letters covered (population count)
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Union of two masks
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for LetterMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for LetterMask {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Binary for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// Maps each distinct box letter to its bit position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    index: [Option<u8>; 26],
    letters: Vec<u8>,
}

impl Alphabet {
    /// Assign bit positions to letters in order of first appearance
    ///
    /// Bytes outside `a..=z` are ignored.
    #[must_use]
    pub fn new<'a, I>(letters: I) -> Self
    where
        I: IntoIterator<Item = &'a u8>,
    {
        let mut alphabet = Self {
            index: [None; 26],
            letters: Vec::new(),
        };
        for &letter in letters {
            if !letter.is_ascii_lowercase() {
                continue;
            }
            let slot = &mut alphabet.index[usize::from(letter - b'a')];
            if slot.is_none() {
                *slot = Some(alphabet.letters.len() as u8);
                alphabet.letters.push(letter);
            }
        }
        alphabet
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the alphabet has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters in bit order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Bit position of a letter, if it belongs to the alphabet
    #[inline]
    #[must_use]
    pub fn index_of(&self, letter: u8) -> Option<u8> {
        letter
            .is_ascii_lowercase()
            .then(|| self.index[usize::from(letter - b'a')])
            .flatten()
    }

    /// Mask of the alphabet letters used by `word`
    ///
    /// # Examples
    /// ```
    /// use letterboxed::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new(b"abc");
    /// assert_eq!(alphabet.mask_of("cab").count(), 3);
    /// assert_eq!(alphabet.mask_of("aaa").count(), 1);
    /// ```
    #[must_use]
    pub fn mask_of(&self, word: &str) -> LetterMask {
        word.bytes()
            .filter_map(|letter| self.index_of(letter))
            .fold(LetterMask::EMPTY, |mask, bit| {
                mask | LetterMask::new(1 << bit)
            })
    }

    /// Mask with every letter set
    #[inline]
    #[must_use]
    pub fn full(&self) -> LetterMask {
        LetterMask::new((1u32 << self.letters.len()) - 1)
    }

    /// Whether `mask` covers every letter
    #[inline]
    #[must_use]
    pub fn is_complete(&self, mask: LetterMask) -> bool {
        mask.count() as usize == self.letters.len()
    }
}

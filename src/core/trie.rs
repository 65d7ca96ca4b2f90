//! Prefix tree over the dictionary
//!
//! Each node maps the next byte of a word to a child node and records whether
//! a complete word ends at that node. The tree is built once and only read
//! afterwards, so it can be shared freely between threads.

use rustc_hash::FxHashMap;

/// Character-indexed prefix tree
///
/// The root node represents the empty prefix. Words are lower-cased before
/// insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    terminal: bool,
    children: FxHashMap<u8, Trie>,
}

impl Trie {
    /// Create an empty trie
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating missing nodes along the way
    ///
    /// Inserting the same word twice has no further effect.
    ///
    /// # Examples
    /// ```
    /// use letterboxed::core::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("Food");
    /// assert!(trie.contains("food"));
    /// assert!(trie.node("foo").is_some_and(Trie::is_prefix));
    /// ```
    pub fn insert(&mut self, word: &str) {
        let word = word.to_lowercase();
        let mut node = self;
        for &byte in word.as_bytes() {
            node = node.children.entry(byte).or_default();
        }
        node.terminal = true;
    }

    /// Walk the trie along `prefix`
    ///
    /// Returns `None` as soon as a byte has no matching child, otherwise the
    /// node reached. The empty prefix returns the root.
    #[must_use]
    pub fn node(&self, prefix: &str) -> Option<&Self> {
        prefix
            .as_bytes()
            .iter()
            .try_fold(self, |node, byte| node.children.get(byte))
    }

    /// Child node for a single next letter
    #[inline]
    #[must_use]
    pub fn child(&self, letter: u8) -> Option<&Self> {
        self.children.get(&letter)
    }

    /// Whether a complete word ends at this node
    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.terminal
    }

    /// Whether any longer word continues from this node
    #[inline]
    #[must_use]
    pub fn is_prefix(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether `word` was inserted as a whole word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).is_some_and(Self::is_word)
    }

    /// Number of distinct words stored below this node
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.terminal) + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Whether no word is stored below this node
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.terminal && self.children.values().all(Self::is_empty)
    }

    /// Collect every stored word, in no particular order
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let mut found = Vec::new();
        self.collect(&mut Vec::new(), &mut found);
        found
    }

    fn collect(&self, prefix: &mut Vec<u8>, found: &mut Vec<String>) {
        if self.terminal {
            found.push(String::from_utf8_lossy(prefix).into_owned());
        }
        for (&byte, child) in &self.children {
            prefix.push(byte);
            child.collect(prefix, found);
            prefix.pop();
        }
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}

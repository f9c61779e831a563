//! Case-insensitive word lists with exact-casing output

use std::collections::HashMap;

/// Ordered word list with a case-insensitive lookup index
///
/// Each entry is matched on its lowercase fold and rendered exactly as it
/// was inserted. When two entries fold to the same key, the first one
/// inserted wins and later ones are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    /// Entries in insertion order, exact casing
    entries: Vec<String>,
    /// Lowercase key -> index into `entries`
    index: HashMap<String, usize>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from words, keeping the first casing seen for each key
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lexicon = Self::new();
        lexicon.extend(words);
        lexicon
    }

    /// Insert a word. Returns `false` if an entry with the same key exists.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        let key = fold(&word);

        if self.index.contains_key(&key) {
            return false;
        }

        self.index.insert(key, self.entries.len());
        self.entries.push(word);
        true
    }

    /// Insert many words in order
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.insert(word);
        }
    }

    /// Find the stored casing for `token`, ignoring case
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.index
            .get(&fold(token))
            .map(|&idx| self.entries[idx].as_str())
    }

    /// Whether a case-insensitive match exists
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(&fold(token))
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

fn fold(word: &str) -> String {
    word.to_lowercase()
}

//! Word list - the fixed set of labels the typewriter rotates through.

use std::ops::Index;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Labels shown on the reference landing screen.
pub const LANGUAGES: [&str; 10] = [
    "English",
    "Español",
    "Français",
    "Deutsch",
    "Português",
    "Italiano",
    "Svenska",
    "Polska",
    "Norsk",
    "Nederlands",
];

/// Non-empty, immutable list of display labels.
///
/// Cloning is cheap; the words live behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Arc<[String]>,
}

impl WordList {
    /// Build a list from any iterator of strings.
    ///
    /// Fails with [`Error::EmptyWordList`] when the iterator yields nothing.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(Self {
            words: words.into(),
        })
    }

    /// The reference language list.
    pub fn languages() -> Self {
        Self {
            words: LANGUAGES.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Number of words. Always at least one.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl Index<usize> for WordList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_rejected() {
        let err = WordList::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyWordList));
    }

    #[test]
    fn test_languages() {
        let list = WordList::languages();
        assert_eq!(list.len(), 10);
        assert_eq!(&list[0], "English");
        assert!(list.iter().any(|w| w == "Português"));
    }

    #[test]
    fn test_duplicates_kept() {
        let list = WordList::new(["a", "a", "b"]).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().filter(|w| *w == "a").count(), 2);
    }
}

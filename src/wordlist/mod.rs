//! Word list loading: the CSV parser and the bundled sample list.

pub mod parser;
pub mod sample;

use thiserror::Error;

/// Why a word list could not be installed in the session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("the word list is empty")]
    EmptyInput,
    #[error("could not read word list: {0}")]
    ParseFailure(String),
    #[error("a word list is already loaded")]
    AlreadyLoaded,
}

/// An ordered, non-empty list of words. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Returns `None` for an empty sequence.
    pub fn new(words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }
}

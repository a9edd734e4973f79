//! Pattern 1: Single Responsibility
//!
//! `Journal` only knows how to hold, add and remove entries. Saving and
//! loading live in [`persistence`]; piling those onto the journal would
//! turn it into a god object.

pub mod persistence;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JournalError {
    #[error("cannot remove entry at index {index}: journal has {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<String>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns how many entries the journal now holds.
    pub fn add_entry(&mut self, text: impl Into<String>) -> usize {
        let text = text.into();
        tracing::debug!(entry = %text, "adding journal entry");
        self.entries.push(text);
        self.entries.len()
    }

    /// Removes the entry at `index`; later entries shift down by one.
    pub fn remove_entry(&mut self, index: usize) -> Result<String, JournalError> {
        if index >= self.entries.len() {
            tracing::warn!(index, len = self.entries.len(), "journal index out of range");
            return Err(JournalError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        tracing::debug!(index, entry = %removed, "removed journal entry");
        Ok(removed)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join("\n"))
    }
}

impl<S: Into<String>> FromIterator<S> for Journal {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Journal {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

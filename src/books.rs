// The "books to read" list. Entries are opaque strings kept in insertion
// order; every mutation enforces the session limits.

use crate::config::Limits;
use crate::error::{BookError, Result};
use crate::validate::validate_non_blank;

/// Ordered, bounded list of book entries with 1-based positions.
///
/// Invariants: never more than `max_count` entries, no two entries equal,
/// no entry longer than `max_length` characters.
#[derive(Debug, Clone)]
pub struct BookList {
    entries: Vec<String>,
    limits: Limits,
}

impl BookList {
    pub fn new(limits: Limits) -> Self {
        Self {
            entries: Vec::with_capacity(limits.max_count()),
            limits,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fail with `CapacityExceeded` when no further entry fits.
    pub fn ensure_capacity(&self) -> Result<()> {
        if self.entries.len() >= self.limits.max_count() {
            return Err(BookError::CapacityExceeded {
                max_count: self.limits.max_count(),
            });
        }
        Ok(())
    }

    /// Append an entry, returning it as stored.
    ///
    /// Checks, in order: capacity, blank text, length, exact duplicate.
    /// Length is counted in characters (Unicode scalar values), not bytes
    /// or UTF-16 units, so an emoji counts as one.
    pub fn add(&mut self, entry: &str) -> Result<&str> {
        self.ensure_capacity()?;
        validate_non_blank(entry)?;

        let length = entry.chars().count();
        if length > self.limits.max_length() {
            return Err(BookError::LengthExceeded {
                length,
                max_length: self.limits.max_length(),
            });
        }

        if self.entries.iter().any(|existing| existing == entry) {
            return Err(BookError::DuplicateEntry(entry.to_string()));
        }

        self.entries.push(entry.to_string());
        tracing::debug!(entry, len = self.entries.len(), "Added book");
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Entries paired with their 1-based position, in insertion order.
    /// Each call starts a fresh pass over the list.
    pub fn list(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i + 1, entry.as_str()))
    }

    /// Remove the entry at a 1-based position and return it. Later entries
    /// shift down by one.
    pub fn delete_by_index(&mut self, index: usize) -> Result<String> {
        if index < 1 || index > self.entries.len() {
            return Err(BookError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index - 1);
        tracing::debug!(index, entry = %removed, "Removed book");
        Ok(removed)
    }
}

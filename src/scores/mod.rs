//! The bounded high-score table.
//!
//! [`HighScores`] holds the ranking policy: entries sorted by score
//! descending, ties in insertion order, trimmed to a fixed capacity by
//! evicting the lowest score. [`HighScoreBoard`] pairs it with a
//! [`HighScoreRepository`] behind a lock.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NameError;

mod board;
mod repository;

pub use board::HighScoreBoard;
#[cfg(feature = "std")]
pub use repository::JsonFileRepository;
pub use repository::{HighScoreRepository, MemoryRepository};

/// Number of entries kept on the high-score table.
pub const TOP_SCORES: usize = 3;

/// Longest name the table accepts.
pub const MAX_NAME_LEN: usize = 3;

/// Initials shown on the high-score table: one to three uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Validates typed initials. Surrounding whitespace is ignored and
    /// lowercase letters are accepted and uppercased.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, contains anything other than
    /// ASCII letters, or is longer than [`MAX_NAME_LEN`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{NameError, PlayerName};
    ///
    /// assert_eq!(PlayerName::parse(" abc ").unwrap().as_str(), "ABC");
    /// assert_eq!(PlayerName::parse("ABCD"), Err(NameError::TooLong));
    /// ```
    pub fn parse(input: &str) -> Result<Self, NameError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(NameError::InvalidCharacter);
        }
        if name.len() > MAX_NAME_LEN {
            return Err(NameError::TooLong);
        }
        Ok(Self(name.to_ascii_uppercase()))
    }

    /// Returns the initials.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the high-score table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Who set the score.
    pub name: PlayerName,
    /// Chips held at the end of the session.
    pub score: usize,
}

impl HighScoreEntry {
    /// Creates an entry.
    #[must_use]
    pub const fn new(name: PlayerName, score: usize) -> Self {
        Self { name, score }
    }
}

/// The top-N table.
///
/// Entries are kept sorted by score, highest first; equal scores stay in
/// the order they were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
    capacity: usize,
}

impl HighScores {
    /// Creates an empty table holding [`TOP_SCORES`] entries.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_capacity(TOP_SCORES)
    }

    /// Creates an empty table holding `capacity` entries.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Rebuilds a table from entries listed in ranking order, applying the
    /// same trimming policy as [`record`](Self::record).
    #[must_use]
    pub fn from_entries(capacity: usize, entries: impl IntoIterator<Item = HighScoreEntry>) -> Self {
        let mut scores = Self::with_capacity(capacity);
        for entry in entries {
            scores.insert(entry);
        }
        scores
    }

    /// Records a score and trims the table back to capacity.
    ///
    /// When the table overflows the lowest score is evicted; among several
    /// equal lowest scores the one recorded first goes. Returns the evicted
    /// entry, if any.
    pub fn record(&mut self, name: PlayerName, score: usize) -> Option<HighScoreEntry> {
        self.insert(HighScoreEntry::new(name, score))
    }

    fn insert(&mut self, entry: HighScoreEntry) -> Option<HighScoreEntry> {
        let at = self.entries.partition_point(|e| e.score >= entry.score);
        self.entries.insert(at, entry);

        if self.entries.len() <= self.capacity {
            return None;
        }

        let lowest = self.lowest()?;
        let evict = self.entries.iter().position(|e| e.score == lowest)?;
        Some(self.entries.remove(evict))
    }

    /// Returns the table, highest score first.
    #[must_use]
    pub fn top(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// Returns the lowest score on the table.
    #[must_use]
    pub fn lowest(&self) -> Option<usize> {
        self.entries.last().map(|e| e.score)
    }

    /// Returns whether `score` would earn a place on the table: either the
    /// table has a free slot or the score beats the current lowest.
    #[must_use]
    pub fn is_high_score(&self, score: usize) -> bool {
        self.entries.len() < self.capacity || self.lowest().is_some_and(|lowest| score > lowest)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the maximum number of entries kept.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> PlayerName {
        PlayerName::parse(s).unwrap()
    }

    fn names(scores: &HighScores) -> Vec<&str> {
        scores.top().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn evicts_lowest_score() {
        let mut scores = HighScores::new();
        scores.record(name("AAA"), 90);
        scores.record(name("BBB"), 80);
        scores.record(name("CCC"), 70);

        let evicted = scores.record(name("DDD"), 75);
        assert_eq!(evicted.map(|e| e.score), Some(70));
        assert_eq!(names(&scores), ["AAA", "BBB", "DDD"]);
    }

    #[test]
    fn tied_lowest_evicts_earliest_recorded() {
        let mut scores = HighScores::new();
        scores.record(name("AAA"), 90);
        scores.record(name("BBB"), 50);
        scores.record(name("CCC"), 50);

        let evicted = scores.record(name("DDD"), 50);
        assert_eq!(evicted.map(|e| e.name), Some(name("BBB")));
        assert_eq!(names(&scores), ["AAA", "CCC", "DDD"]);
    }

    #[test]
    fn ties_listed_in_recording_order() {
        let mut scores = HighScores::new();
        scores.record(name("X"), 40);
        scores.record(name("Y"), 60);
        scores.record(name("Z"), 40);
        assert_eq!(names(&scores), ["Y", "X", "Z"]);
    }

    #[test]
    fn high_score_threshold() {
        let mut scores = HighScores::new();
        assert!(scores.is_high_score(0));
        scores.record(name("A"), 10);
        scores.record(name("B"), 20);
        scores.record(name("C"), 30);
        assert!(!scores.is_high_score(10));
        assert!(scores.is_high_score(11));

        scores.clear();
        assert!(scores.is_empty());
        assert!(scores.is_high_score(1));
    }

    #[test]
    fn name_validation() {
        assert_eq!(name("zq").as_str(), "ZQ");
        assert_eq!(PlayerName::parse("   "), Err(NameError::Empty));
        assert_eq!(PlayerName::parse("A1"), Err(NameError::InvalidCharacter));
        assert_eq!(PlayerName::parse("ÉA"), Err(NameError::InvalidCharacter));
        assert_eq!(PlayerName::parse("JOHN"), Err(NameError::TooLong));
    }
}

extern crate alloc;

use alloc::vec::Vec;

use crate::error::StoreError;
use crate::sync::Mutex;

use super::{HighScoreEntry, HighScoreRepository, HighScores, PlayerName, TOP_SCORES};

#[derive(Debug)]
struct BoardInner<R> {
    scores: HighScores,
    repository: R,
}

/// The high-score table together with the repository that persists it.
///
/// Every mutation reloads the table, applies the change and saves it while
/// holding one lock, so concurrent recordings on a shared board are never
/// lost. The in-memory table only changes once the save has succeeded.
#[derive(Debug)]
pub struct HighScoreBoard<R> {
    inner: Mutex<BoardInner<R>>,
}

impl<R: HighScoreRepository> HighScoreBoard<R> {
    /// Opens a board holding [`TOP_SCORES`] entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be loaded.
    pub fn open(repository: R) -> Result<Self, StoreError> {
        Self::open_with_capacity(repository, TOP_SCORES)
    }

    /// Opens a board holding `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be loaded.
    pub fn open_with_capacity(mut repository: R, capacity: usize) -> Result<Self, StoreError> {
        let scores = HighScores::from_entries(capacity, repository.load()?);
        Ok(Self {
            inner: Mutex::new(BoardInner { scores, repository }),
        })
    }

    /// Records a score and persists the trimmed table.
    ///
    /// Returns the entry evicted to make room, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read or written.
    pub fn record(
        &self,
        name: PlayerName,
        score: usize,
    ) -> Result<Option<HighScoreEntry>, StoreError> {
        let mut inner = self.inner.lock();
        let capacity = inner.scores.capacity();

        let mut scores = HighScores::from_entries(capacity, inner.repository.load()?);
        let evicted = scores.record(name, score);
        inner.repository.save(scores.top())?;
        inner.scores = scores;
        drop(inner);

        Ok(evicted)
    }

    /// Empties the table and persists the empty table.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be written.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        inner.repository.save(&[])?;
        inner.scores.clear();
        drop(inner);
        Ok(())
    }

    /// Returns the table, highest score first.
    #[must_use]
    pub fn top(&self) -> Vec<HighScoreEntry> {
        self.inner.lock().scores.top().to_vec()
    }

    /// Returns whether `score` would earn a place on the table.
    #[must_use]
    pub fn is_high_score(&self, score: usize) -> bool {
        self.inner.lock().scores.is_high_score(score)
    }

    /// Consumes the board and returns its repository.
    pub fn into_repository(self) -> R {
        self.inner.into_inner().repository
    }
}

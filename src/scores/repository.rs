//! Persistence for the high-score table.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::StoreError;

use super::HighScoreEntry;

/// Backing store for the high-score table.
///
/// Entries are loaded and saved in ranking order, highest score first,
/// equal scores in the order they were recorded.
pub trait HighScoreRepository {
    /// Loads every stored entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or decoded.
    fn load(&mut self) -> Result<Vec<HighScoreEntry>, StoreError>;

    /// Replaces the stored entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn save(&mut self, entries: &[HighScoreEntry]) -> Result<(), StoreError>;
}

/// Keeps the table in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRepository {
    entries: Vec<HighScoreEntry>,
}

impl MemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a repository preloaded with `entries`.
    #[must_use]
    pub const fn with_entries(entries: Vec<HighScoreEntry>) -> Self {
        Self { entries }
    }

    /// Returns what was last saved.
    #[must_use]
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }
}

impl HighScoreRepository for MemoryRepository {
    fn load(&mut self) -> Result<Vec<HighScoreEntry>, StoreError> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[HighScoreEntry]) -> Result<(), StoreError> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::JsonFileRepository;

#[cfg(feature = "std")]
mod file {
    use std::fs::{self, OpenOptions};
    use std::io::{ErrorKind, Write};
    use std::path::{Path, PathBuf};

    use crate::error::StoreError;
    use crate::scores::HighScoreEntry;

    use super::HighScoreRepository;

    fn io_error(err: &std::io::Error) -> StoreError {
        StoreError::Io(err.to_string())
    }

    /// Stores the table as a JSON array in a file.
    ///
    /// The file is created on [`open`](Self::open) if it does not exist yet.
    /// Saves go to a sibling temp file that is then renamed over the
    /// existing file, so a reader never sees a half-written table.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct JsonFileRepository {
        path: PathBuf,
    }

    impl JsonFileRepository {
        /// Opens the table at `path`, creating an empty one if needed.
        ///
        /// # Errors
        ///
        /// Returns an error if the file cannot be created.
        pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
            let path = path.as_ref().to_path_buf();

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => file.write_all(b"[]").map_err(|e| io_error(&e))?,
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {}
                Err(err) => return Err(io_error(&err)),
            }

            Ok(Self { path })
        }

        /// Returns the path of the backing file.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn temp_path(&self) -> PathBuf {
            let mut name = self.path.file_name().unwrap_or_default().to_os_string();
            name.push(".tmp");
            self.path.with_file_name(name)
        }
    }

    impl HighScoreRepository for JsonFileRepository {
        fn load(&mut self) -> Result<Vec<HighScoreEntry>, StoreError> {
            let text = fs::read_to_string(&self.path).map_err(|e| io_error(&e))?;
            // created but not yet written
            if text.trim().is_empty() {
                return Ok(Vec::new());
            }
            serde_json::from_str(&text).map_err(|e| StoreError::Format(e.to_string()))
        }

        fn save(&mut self, entries: &[HighScoreEntry]) -> Result<(), StoreError> {
            let json = serde_json::to_string_pretty(entries)
                .map_err(|e| StoreError::Format(e.to_string()))?;
            let temp = self.temp_path();
            fs::write(&temp, json).map_err(|e| io_error(&e))?;
            fs::rename(&temp, &self.path).map_err(|e| io_error(&e))
        }
    }
}

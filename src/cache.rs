//! On-disk cache for feedback tables
//!
//! Building a table for a full vocabulary is the most expensive step of a run,
//! so finished tables are stored under a SHA-256 key derived from the content
//! of the word-list files. A missing, unreadable or malformed entry is simply
//! rebuilt.
//!
//! Entries are a [`CachedTable`] record encoded with bincode.

use crate::core::FeedbackTable;
use crate::error::{Error, Result};
use crate::wordlists::Vocabulary;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

const FORMAT_VERSION: u32 = 2;

/// Serialized form of a feedback table
///
/// Only the codes are stored; the word lists and their index maps come from
/// the vocabulary the entry is loaded against.
#[derive(Debug, Serialize, Deserialize)]
struct CachedTable {
    version: u32,
    rows: u32,
    columns: u32,
    codes: Vec<u8>,
}

impl CachedTable {
    fn from_table(table: &FeedbackTable) -> Self {
        Self {
            version: FORMAT_VERSION,
            rows: table.word_bank().len() as u32,
            columns: table.valid_words().len() as u32,
            codes: table.codes().to_vec(),
        }
    }

    /// Rebuild the table, or `None` if the entry does not fit the vocabulary
    fn into_table(self, vocabulary: &Vocabulary) -> Option<FeedbackTable> {
        if self.version != FORMAT_VERSION
            || self.rows as usize != vocabulary.word_bank().len()
            || self.columns as usize != vocabulary.valid_words().len()
        {
            return None;
        }
        FeedbackTable::from_codes(vocabulary.word_bank(), vocabulary.valid_words(), self.codes)
    }
}

/// Cache key for a set of backing files
///
/// Each file is hashed on its own; the key hashes the format version and the
/// per-file digests, rendered as 64 hex digits.
///
/// # Errors
/// Returns `Error::Io` if any file cannot be read.
pub fn cache_key<P: AsRef<Path>>(files: &[P]) -> Result<String> {
    let mut combined = Sha256::new();
    combined.update(FORMAT_VERSION.to_le_bytes());
    for file in files {
        let path = file.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        combined.update(Sha256::digest(&bytes));
    }
    Ok(format!("{:x}", combined.finalize()))
}

/// Feedback tables stored in one directory
#[derive(Debug, Clone)]
pub struct TableCache {
    directory: PathBuf,
}

impl TableCache {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.table"))
    }

    /// Load a cached table for this vocabulary
    ///
    /// Returns `None` on a miss and on any kind of corruption.
    #[must_use]
    pub fn load(&self, key: &str, vocabulary: &Vocabulary) -> Option<FeedbackTable> {
        let path = self.entry_path(key);
        let bytes = fs::read(&path).ok()?;
        let table = bincode::deserialize::<CachedTable>(&bytes)
            .ok()
            .and_then(|entry| entry.into_table(vocabulary));
        if table.is_none() {
            warn!("Ignoring corrupt table cache entry {}", path.display());
        }
        table
    }

    /// Persist a table under `key`
    ///
    /// # Errors
    /// Returns `Error::Io` if the directory or file cannot be written.
    pub fn store(&self, key: &str, table: &FeedbackTable) -> Result<()> {
        fs::create_dir_all(&self.directory).map_err(|e| Error::io(&self.directory, e))?;
        let path = self.entry_path(key);
        let bytes = bincode::serialize(&CachedTable::from_table(table))
            .map_err(|e| Error::io(&path, std::io::Error::other(e)))?;
        fs::write(&path, bytes).map_err(|e| Error::io(&path, e))
    }

    /// Return the cached table for the given word-list files, building and
    /// storing it on a miss
    ///
    /// Failing to write the cache is logged and otherwise ignored.
    ///
    /// # Errors
    /// Returns `Error::Io` if a word-list file cannot be hashed, or any error
    /// from [`FeedbackTable::build`].
    pub fn load_or_build<P: AsRef<Path>>(
        &self,
        files: &[P],
        vocabulary: &Vocabulary,
    ) -> Result<FeedbackTable> {
        let key = cache_key(files)?;

        if let Some(table) = self.load(&key, vocabulary) {
            info!("Loaded feedback table from cache ({key})");
            return Ok(table);
        }

        info!(
            "Building feedback table: {} guesses x {} answers",
            vocabulary.word_bank().len(),
            vocabulary.valid_words().len()
        );
        let table = FeedbackTable::build(vocabulary.word_bank(), vocabulary.valid_words())?;

        if let Err(e) = self.store(&key, &table) {
            warn!("Could not cache feedback table: {e}");
        }
        Ok(table)
    }
}

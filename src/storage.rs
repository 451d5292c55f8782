//! JSON persistence for the draw history.
//!
//! Format: one JSON array of [`HistoryEntry`] records in
//! `<dir>/lottoHistory.json`, most recent first, at most
//! [`MAX_HISTORY_COUNT`] records.
//!
//! Reads are fail-soft: [`HistoryStore::read`] reports a [`ReadFault`], and
//! [`HistoryStore::list`] collapses any fault to an empty history. Writes
//! replace the whole file in one rename so a reader never sees a partial
//! array. A failed write is reported on stderr and otherwise dropped.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{ReadFault, WriteFault};
use crate::types::HistoryEntry;

/// Bounded, most-recent-first history of recorded sessions.
#[derive(Clone, Debug)]
pub struct HistoryStore {
    path: PathBuf,
}

/// History file path for `key` inside `dir`.
pub fn history_file_path(dir: impl AsRef<Path>, key: &str) -> PathBuf {
    dir.as_ref().join(format!("{key}.json"))
}

impl HistoryStore {
    /// Store under the default key in `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, HISTORY_STORAGE_KEY)
    }

    pub fn with_key(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: history_file_path(dir, key),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored history, reporting why it could not be read.
    pub fn read(&self) -> Result<Vec<HistoryEntry>, ReadFault> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(ReadFault::Missing),
            Err(e) => return Err(ReadFault::Io(e)),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Stored history, most recent first. Missing or corrupt storage reads as
    /// empty.
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.read().unwrap_or_default()
    }

    /// Prepend `entry`, keep the newest [`MAX_HISTORY_COUNT`], and write back.
    pub fn try_append(&self, entry: HistoryEntry) -> Result<(), WriteFault> {
        let mut history = Vec::with_capacity(MAX_HISTORY_COUNT + 1);
        history.push(entry);
        history.extend(self.list());
        history.truncate(MAX_HISTORY_COUNT);
        self.write(&history)
    }

    /// Like [`HistoryStore::try_append`], but a failed write is only logged.
    pub fn append(&self, entry: HistoryEntry) {
        if let Err(e) = self.try_append(entry) {
            eprintln!("Dropping history entry for {}: {}", self.path.display(), e);
        }
    }

    /// Serialize to a sibling temp file, then rename over the history file.
    fn write(&self, history: &[HistoryEntry]) -> Result<(), WriteFault> {
        let json = serde_json::to_string(history)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

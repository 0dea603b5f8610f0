//! Durable storage for palette snapshots.
//!
//! The themer only needs "load the last snapshot" and "replace it", so the
//! storage seam is a small trait. [`FileStore`] keeps one JSON file on
//! disk; [`MemoryStore`] keeps the text in memory for tests and dry runs.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};

use crate::models::{Snapshot, SnapshotError};

/// Key-value style storage of a single snapshot.
pub trait SnapshotStore {
    /// Loads the stored snapshot, or `None` if nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] if stored data exists but is unreadable.
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;

    /// Removes the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if stored data exists but cannot be removed.
    fn clear(&mut self) -> Result<()>;
}

/// Snapshot stored as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by `path`. Nothing is read until [`SnapshotStore::load`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        Snapshot::from_json(&content).map(Some)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }

        let content = snapshot.to_json().context("Failed to serialize palette snapshot")?;
        let temp_path = self.path.with_extension("json.tmp");

        // Write to temp file
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write to temporary file: {}", temp_path.display())
        })?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!("Failed to rename temporary file to: {}", self.path.display())
        })?;

        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

/// Snapshot kept in memory as JSON text.
///
/// Clones share the same slot, so a test can keep a handle and inspect
/// what the themer wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with raw text, valid or not.
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(contents.into()))),
        }
    }

    /// Raw text last written, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        self.slot
            .borrow()
            .as_deref()
            .map(Snapshot::from_json)
            .transpose()
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        let content = snapshot.to_json().context("Failed to serialize palette snapshot")?;
        *self.slot.borrow_mut() = Some(content);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

//! File-backed snapshots of the contact store.
//!
//! The document is JSON: `{"contacts": [ ... ]}` with each entry in the
//! contact wire form. It is loaded once when the process starts and written
//! once when it stops; whatever was flushed last wins.

use crate::{ContactStore, StoreResult};
use contacts_types::Contact;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    contacts: Vec<Contact>,
}

/// A snapshot document on disk.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every contact from the file.
    ///
    /// If the file does not exist an empty document is created first. An
    /// empty or whitespace-only file reads as no contacts.
    pub fn load_or_create(&self) -> StoreResult<Vec<Contact>> {
        if !self.path.exists() {
            info!("Creating empty snapshot at {}", self.path.display());
            self.write(&[])?;
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            warn!("Snapshot {} is empty, starting with no contacts", self.path.display());
            return Ok(Vec::new());
        }
        let document: SnapshotDocument = serde_json::from_str(&text)?;
        Ok(document.contacts)
    }

    /// Writes `contacts` to the file, replacing it atomically.
    pub fn write(&self, contacts: &[Contact]) -> StoreResult<()> {
        #[derive(Serialize)]
        struct Borrowed<'a> {
            contacts: &'a [Contact],
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Borrowed { contacts })?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Loads the file into `store`, replacing its content. Returns the
    /// number of contacts loaded.
    pub fn restore(&self, store: &ContactStore) -> StoreResult<usize> {
        let contacts = self.load_or_create()?;
        let count = contacts.len();
        store.replace_all(contacts)?;
        info!("Loaded {} contacts from {}", count, self.path.display());
        Ok(count)
    }

    /// Writes the current content of `store` to the file. Returns the
    /// number of contacts written.
    pub fn flush(&self, store: &ContactStore) -> StoreResult<usize> {
        let contacts = store.snapshot();
        self.write(&contacts)?;
        info!("Wrote {} contacts to {}", contacts.len(), self.path.display());
        Ok(contacts.len())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

//! JSON-document persistence with an in-memory fallback.
//!
//! The store owns the one shared [`MenuDocument`]. Reads never fail: a
//! missing or unreadable file degrades to the last document this process
//! loaded or saved, and finally to an empty default document. Writes go
//! to memory first, then best-effort to disk, so the service keeps
//! working on read-only deployments at the cost of durability.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::models::MenuDocument;
use crate::periods;

/// Errors from the durable half of the store. Callers of [`MenuStore`]
/// never see these; they are logged and absorbed by the fallback.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error for {0}: {1}")]
    Io(PathBuf, #[source] io::Error),
    #[error("Failed to parse {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// File-backed store for the menu document.
#[derive(Debug)]
pub struct MenuStore {
    path: PathBuf,
    /// Last document successfully loaded or saved by this process.
    fallback: Option<MenuDocument>,
}

impl MenuStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fallback: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True once a document has been loaded or saved in this process.
    pub fn has_memory(&self) -> bool {
        self.fallback.is_some()
    }

    /// True when the backing file currently exists on disk.
    pub fn file_exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the document, stamped and sorted for today's date.
    pub fn load(&mut self) -> MenuDocument {
        self.load_at(Local::now().date_naive())
    }

    /// Loads the document for a given "today". Never fails: on a read or
    /// parse error the in-memory fallback is used, and before any
    /// document has been seen an empty default one. Whatever the source,
    /// the result has fresh `periode` strings on the current and upcoming
    /// sections and every section sorted by ordre.
    pub fn load_at(&mut self, today: NaiveDate) -> MenuDocument {
        let mut doc = match self.read_file() {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("Using in-memory menu data: {}", e);
                self.fallback.clone().unwrap_or_default()
            }
        };

        periods::stamp(&mut doc, today);
        doc.sort_all();

        self.fallback = Some(doc.clone());
        doc
    }

    /// Persists the document, memory first. A durable-write failure is
    /// logged but does not fail the save: the in-memory copy alone keeps
    /// the session consistent. Returns `true` once the in-memory copy is
    /// updated, which with a typed document is always.
    pub fn save(&mut self, doc: &MenuDocument) -> bool {
        self.fallback = Some(doc.clone());

        match self.write_file(doc) {
            Ok(()) => tracing::debug!("Saved menu data to {}", self.path.display()),
            Err(e) => {
                tracing::warn!("Durable write failed, keeping in-memory copy only: {}", e);
            }
        }

        true
    }

    fn read_file(&self) -> Result<MenuDocument, StoreError> {
        let contents =
            fs::read_to_string(&self.path).map_err(|e| StoreError::Io(self.path.clone(), e))?;
        serde_json::from_str(&contents).map_err(|e| StoreError::Parse(self.path.clone(), e))
    }

    /// Pretty-printed JSON, written via temp file + rename so a crash
    /// mid-write never truncates the document.
    fn write_file(&self, doc: &MenuDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| StoreError::Parse(self.path.clone(), e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io(parent.to_path_buf(), e))?;
            }
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json).map_err(|e| StoreError::Io(temp_path.clone(), e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::Io(self.path.clone(), e))?;

        Ok(())
    }
}

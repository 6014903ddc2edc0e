//! Candidate Store — durable, append-only persistence of candidate submissions
//! in a single JSON file.
//!
//! The file holds one object with a `candidates` array in submission order.
//! Records are never mutated or removed after append. Every write replaces the
//! whole document via a sibling temp file + rename, so a failed write leaves
//! the previous content intact.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::candidate::{CandidateRecord, CandidateStoreFile};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid store file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// File-backed candidate store. The path is injected at construction so tests
/// can point the store at a temporary directory.
pub struct CandidateStore {
    path: PathBuf,
    /// Serializes the read-modify-write cycle; handlers run concurrently but
    /// the store admits one operation at a time.
    lock: Mutex<()>,
}

impl CandidateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file with an empty collection if it does not exist.
    /// Idempotent; existing content is left untouched, not validated.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.ensure_initialized().await
    }

    /// Appends one record to the end of the persisted collection.
    /// The record is accepted as-is; field validation is the caller's concern.
    pub async fn append(&self, record: CandidateRecord) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.ensure_initialized().await?;

        let mut document = self.read_document().await?;
        document.candidates.push(record);
        self.write_document(&document).await?;

        debug!(
            "Candidate saved; store now holds {} record(s)",
            document.candidates.len()
        );
        Ok(())
    }

    /// Returns the full persisted collection in insertion order.
    /// The returned vector is an owned copy; mutating it does not touch the store.
    pub async fn read_all(&self) -> Result<Vec<CandidateRecord>, StoreError> {
        let _guard = self.lock.lock().await;
        self.ensure_initialized().await?;

        let document = self.read_document().await?;
        Ok(document.candidates)
    }

    async fn ensure_initialized(&self) -> Result<(), StoreError> {
        if fs::try_exists(&self.path).await? {
            return Ok(());
        }
        debug!("Store file not found, creating {}", self.path.display());
        self.write_document(&CandidateStoreFile::default()).await
    }

    async fn read_document(&self) -> Result<CandidateStoreFile, StoreError> {
        let raw = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn write_document(&self, document: &CandidateStoreFile) -> Result<(), StoreError> {
        let serialized = serde_json::to_string_pretty(document)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, serialized).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut buf = path.as_os_str().to_owned();
    buf.push(".tmp");
    PathBuf::from(buf)
}

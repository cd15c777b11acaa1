//! Snapshot read/write with atomic replacement

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Read the snapshot at `path` and decode it into `T`
///
/// # Errors
///
/// [`StoreError::Io`] when the file cannot be read, [`StoreError::Json`]
/// when its content does not decode into `T`.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Encode `value` and write it to `path` atomically
///
/// The bytes go to a temporary file in the destination's directory, are
/// synced, and the temporary file is renamed over the destination. A crash
/// at any point leaves `path` at either its prior content or the complete
/// new content. Encoding happens before the filesystem is touched, so an
/// unencodable value changes nothing on disk.
///
/// # Errors
///
/// [`StoreError::Json`] when `value` cannot be encoded, [`StoreError::Io`]
/// for any filesystem failure.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec(value)?;

    // The tempfile must live on the same filesystem as the destination for
    // the rename to be atomic.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "snapshot saved");
    Ok(())
}

/// A type that owns a snapshot location
///
/// Implementers supply [`snapshot_path`](SnapshotStore::snapshot_path);
/// loading and saving are provided on top of [`load`] and [`save`].
pub trait SnapshotStore {
    /// Where this store keeps its snapshot
    fn snapshot_path(&self) -> PathBuf;

    fn load_snapshot<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        load(&self.snapshot_path())
    }

    fn save_snapshot<T: Serialize>(&self, value: &T) -> Result<(), StoreError> {
        save(&self.snapshot_path(), value)
    }
}

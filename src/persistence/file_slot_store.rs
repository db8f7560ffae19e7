//! Slot store keeping one JSON file per key on local disk.

use crate::error::{PersistenceError, PersistenceResult};
use crate::persistence::traits::SlotStore;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Slot store backed by one JSON file per key inside a directory.
///
/// Writes go to `<key>.json.tmp`, are synced to disk, and are then renamed over
/// `<key>.json`, so a reader never observes a half-written slot and a
/// completed `set` survives a crash.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PersistenceResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(PersistenceError::Unavailable(format!(
                "invalid slot key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `data` to `tmp_path`, flush it to disk, then move it over `path`.
fn atomic_write(tmp_path: &Path, path: &Path, data: &[u8]) -> PersistenceResult<()> {
    let mut file = File::create(tmp_path).map_err(|e| io_error(tmp_path, e))?;
    file.write_all(data).map_err(|e| io_error(tmp_path, e))?;
    file.sync_all().map_err(|e| io_error(tmp_path, e))?;
    drop(file);

    fs::rename(tmp_path, path).map_err(|e| io_error(path, e))?;

    // Persist the rename itself
    #[cfg(unix)]
    {
        if let Some(parent) = path.parent() {
            File::open(parent)
                .and_then(|dir| dir.sync_all())
                .map_err(|e| io_error(parent, e))?;
        }
    }
    Ok(())
}

impl SlotStore for FileSlotStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> PersistenceResult<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;

        let tmp_path = path.with_extension("json.tmp");
        atomic_write(&tmp_path, &path, value.as_bytes())?;

        tracing::trace!(path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }
}

//! Core storage engine providing sandboxed, atomic, and optionally compressed file I/O.
//!
//! [`Storage`] owns the physical root, enforces path resolution, and hands out
//! [`OptionSlot`] views for named settings.

use crate::builder::StorageBuilder;
use crate::error::{StorageError, StorageErrorExt};
use crate::maintenance::{self, TMP_MARKER};
use crate::security;
use crate::slot::{OptionSlot, SlotName};
use std::fs;
use std::io::{ErrorKind, Write};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Compression {
    #[default]
    None,
    Lz4,
}

impl Compression {
    #[must_use]
    fn compress(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::None => data.to_vec(),
            Self::Lz4 => lz4_flex::compress_prepend_size(data),
        }
    }

    fn decompress(self, data: &[u8]) -> Result<Vec<u8>, StorageError> {
        match self {
            Self::None => Ok(data.to_vec()),
            Self::Lz4 => {
                lz4_flex::decompress_size_prepended(data).context("Lz4 decompression failed")
            },
        }
    }
}

/// The internal shared state of a [`Storage`] instance.
#[derive(Debug)]
pub struct StorageInner {
    /// Canonical physical root; every resolved path starts with it.
    pub(crate) root: PathBuf,
    pub(crate) compression: Compression,
    /// Source of unique temp file suffixes.
    pub(crate) tmp_counter: AtomicU64,
}

/// A thread-safe handle to the storage engine.
///
/// All I/O is synchronous. Paths are validated against the sandbox root, and
/// writes go through a temp file, `fsync` and rename, so a reader never sees
/// a half-written file.
///
/// The handle is reference-counted and cheap to clone.
///
/// # Example
///
/// ```rust
/// use cptg_storage::{Compression, Storage, StorageError};
///
/// # fn main() -> Result<(), StorageError> {
/// # let tmp = tempfile::tempdir().unwrap();
/// let storage = Storage::builder()
///     .root(tmp.path().join("data"))
///     .compression(Compression::Lz4)
///     .connect()?;
///
/// let slot = storage.slot("cptg_settings")?;
/// slot.store(b"[]")?;
/// assert_eq!(slot.load()?.as_deref(), Some(&b"[]"[..]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Storage {
    pub(crate) inner: Arc<StorageInner>,
}

impl Deref for Storage {
    type Target = StorageInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Storage {
    #[must_use = "The storage engine is not initialized until you call .connect()"]
    pub fn builder() -> StorageBuilder {
        StorageBuilder::new()
    }

    /// The canonical root directory of this sandbox.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns a view of a single named option slot.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidSlotName`] if the name is empty or
    /// contains anything but ASCII alphanumerics and underscores.
    pub fn slot<N>(&self, name: N) -> Result<OptionSlot, StorageError>
    where
        N: TryInto<SlotName, Error = StorageError>,
    {
        Ok(OptionSlot::new(self.clone(), name.try_into()?))
    }

    /// Resolves a relative path inside the sandbox.
    ///
    /// # Errors
    /// Returns [`StorageError::PathTraversalAttempt`] if the path is absolute or
    /// would escape the root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf, StorageError> {
        security::resolve_path(&self.root, path)
    }

    /// Reads a whole file, decompressing it if compression is enabled.
    ///
    /// # Errors
    /// Returns [`StorageError::FileNotFound`] if the path does not exist and
    /// [`StorageError::Decompress`] if the stored bytes are not valid LZ4.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Vec<u8>, StorageError> {
        let resolved = self.resolve(path)?;

        let data = match fs::read(&resolved) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StorageError::FileNotFound {
                    message: resolved.display().to_string().into(),
                    context: None,
                });
            },
            Err(err) => {
                return Err(StorageError::Io {
                    source: err,
                    context: Some(format!("Read failed: {}", resolved.display()).into()),
                });
            },
        };

        self.compression.decompress(&data)
    }

    /// Writes a file atomically.
    ///
    /// 1. Data goes to a unique temp file next to the target.
    /// 2. The temp file is synced to disk.
    /// 3. The temp file is renamed over the target.
    /// 4. The parent directory is synced so the rename itself is durable.
    ///
    /// # Errors
    /// Returns [`StorageError::PathTraversalAttempt`] if the path escapes the sandbox
    /// and [`StorageError::Io`] on any filesystem failure.
    pub fn write(&self, path: impl AsRef<Path>, data: &[u8]) -> Result<(), StorageError> {
        let resolved = self.resolve(path)?;

        if let Some(parent) = resolved.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create parent of {}", resolved.display()))?;
        }

        let temp = unique_tmp_path(&resolved, &self.tmp_counter);
        let payload = self.compression.compress(data);

        {
            let mut file = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&temp)
                .context(format!("Temp creation failed: {}", temp.display()))?;
            file.write_all(&payload).context("Write failed")?;
            file.sync_all().context("Hardware sync failed")?;
        }

        if let Err(err) = fs::rename(&temp, &resolved) {
            let _ = fs::remove_file(&temp);
            return Err(StorageError::Io {
                source: err,
                context: Some(
                    format!("Atomic swap failed: {} -> {}", temp.display(), resolved.display())
                        .into(),
                ),
            });
        }

        if let Some(parent) = resolved.parent() {
            sync_dir(parent);
        }

        debug!(path = %resolved.display(), bytes = data.len(), "File saved atomically");
        Ok(())
    }

    /// Deletes a file from the sandbox.
    ///
    /// # Errors
    /// Returns [`StorageError::FileNotFound`] if there is nothing to delete.
    pub fn delete(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let resolved = self.resolve(path)?;
        match fs::remove_file(&resolved) {
            Ok(()) => {},
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StorageError::FileNotFound {
                    message: resolved.display().to_string().into(),
                    context: None,
                });
            },
            Err(err) => {
                return Err(StorageError::Io {
                    source: err,
                    context: Some(format!("Failed to delete: {}", resolved.display()).into()),
                });
            },
        }
        debug!(path = %resolved.display(), "File deleted");
        Ok(())
    }

    /// # Errors
    /// Fails only when path resolution fails.
    pub fn exists(&self, path: impl AsRef<Path>) -> Result<bool, StorageError> {
        Ok(self.resolve(path)?.exists())
    }

    /// Removes stale temp files. Returns `(removed, failed)`.
    pub fn purge_tmp(&self) -> (usize, usize) {
        maintenance::purge_tmp(&self.root)
    }
}

fn sync_dir(path: &Path) {
    match fs::File::open(path) {
        Ok(dir) => {
            if let Err(err) = dir.sync_all() {
                tracing::warn!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Directory open failed");
        },
    }
}

fn unique_tmp_path(target: &Path, counter: &AtomicU64) -> PathBuf {
    let n = counter.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("storage");
    target.with_file_name(format!("{file_name}{TMP_MARKER}{}.{n}", std::process::id()))
}

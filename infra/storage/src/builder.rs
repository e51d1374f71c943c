use crate::engine::{Compression, Storage, StorageInner};
use crate::error::{StorageError, StorageErrorExt};
use private::Sealed;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tracing::info;

#[derive(Debug, Clone)]
struct StorageConfig {
    compression: Compression,
    create: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { compression: Compression::None, create: true }
    }
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct StorageBuilder<S: Sealed = NoRoot> {
    state: S,
    config: StorageConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> StorageBuilder<S> {
    #[must_use = "Sets compression for the storage engine"]
    pub const fn compression(mut self, compression: Compression) -> Self {
        self.config.compression = compression;
        self
    }

    #[must_use = "Sets whether the root directory is created when missing"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.config.create = enable;
        self
    }
}

impl StorageBuilder<NoRoot> {
    #[must_use = "Creates a new storage builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the root directory path for the storage engine"]
    pub fn root(self, path: impl Into<PathBuf>) -> StorageBuilder<WithRoot> {
        StorageBuilder { state: WithRoot(path.into()), config: self.config }
    }
}

impl StorageBuilder<WithRoot> {
    /// Initializes the storage engine.
    ///
    /// Creates the root when `create(true)` is set, canonicalizes it, and
    /// purges stale temp files left behind by interrupted writes. A failed
    /// purge is logged and does not abort the connect.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the root cannot be created or resolved,
    /// including when it is missing and `create(false)` was set.
    pub fn connect(self) -> Result<Storage, StorageError> {
        let root = &self.state.0;

        if self.config.create {
            fs::create_dir_all(root)
                .context(format!("Failed to bootstrap storage root: {}", root.display()))?;
            info!(path = %root.display(), "Bootstrapped storage root directory");
        }

        let canonical = fs::canonicalize(root)
            .context(format!("Failed to resolve storage root: {}", root.display()))?;

        let storage = Storage {
            inner: Arc::new(StorageInner {
                root: canonical,
                compression: self.config.compression,
                tmp_counter: AtomicU64::new(1),
            }),
        };

        storage.purge_tmp();

        Ok(storage)
    }
}

use crate::engine::Storage;
use crate::error::StorageError;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extension of a persisted slot.
pub const SLOT_EXTENSION: &str = "slot";

/// A validated option name: non-empty, lowercase, `[a-z0-9_]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotName(String);

impl TryFrom<String> for SlotName {
    type Error = StorageError;

    fn try_from(value: String) -> Result<Self, StorageError> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&String> for SlotName {
    type Error = StorageError;

    fn try_from(value: &String) -> Result<Self, StorageError> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&str> for SlotName {
    type Error = StorageError;

    fn try_from(value: &str) -> Result<Self, StorageError> {
        let name = value.to_lowercase();

        if name.is_empty() {
            return Err(StorageError::InvalidSlotName {
                message: "EMPTY".into(),
                context: Some("Slot name cannot be empty".into()),
            });
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(StorageError::InvalidSlotName {
                message: name.into(),
                context: Some("Slot name contains illegal characters".into()),
            });
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for SlotName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One named, opaque value stored as a single file under the storage root.
///
/// The slot does not interpret its bytes. Serialization is the caller's
/// business; the slot only guarantees that `store` replaces the whole value
/// atomically and that `load` returns exactly what was last stored.
#[derive(Debug, Clone)]
pub struct OptionSlot {
    storage: Storage,
    name: SlotName,
    file: PathBuf,
}

impl OptionSlot {
    pub(crate) fn new(storage: Storage, name: SlotName) -> Self {
        let file = PathBuf::from(format!("{name}.{SLOT_EXTENSION}"));
        Self { storage, name, file }
    }

    #[must_use]
    pub const fn name(&self) -> &SlotName {
        &self.name
    }

    /// Physical path of the backing file.
    ///
    /// # Errors
    /// Fails only if the sandbox root can no longer be verified.
    pub fn path(&self) -> Result<PathBuf, StorageError> {
        self.storage.resolve(&self.file)
    }

    /// Loads the slot value, or `None` if nothing was ever stored.
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] or [`StorageError::Decompress`] when the
    /// value exists but cannot be read back.
    pub fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        match self.storage.read(&self.file) {
            Ok(data) => Ok(Some(data)),
            Err(StorageError::FileNotFound { .. }) => {
                debug!(slot = %self.name, "Slot is empty");
                Ok(None)
            },
            Err(err) => Err(err),
        }
    }

    /// Replaces the slot value atomically.
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] if the write or the atomic swap fails.
    pub fn store(&self, data: &[u8]) -> Result<(), StorageError> {
        self.storage.write(&self.file, data)
    }

    /// Removes the slot value. Returns `false` if it was already empty.
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool, StorageError> {
        match self.storage.delete(&self.file) {
            Ok(()) => Ok(true),
            Err(StorageError::FileNotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// # Errors
    /// Fails only when path resolution fails.
    pub fn exists(&self) -> Result<bool, StorageError> {
        self.storage.exists(&self.file)
    }

    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.file
    }
}

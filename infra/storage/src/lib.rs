//! A small, sandboxed storage engine for persisted settings.
//!
//! # Core Features
//!
//! - **Sandbox Security**: every path is resolved under a canonical root; absolute
//!   paths and `..` escapes are rejected.
//! - **Atomic Writes**: unique temp file + `fsync` + `rename`, so a reader sees
//!   either the old value or the new one.
//! - **Option Slots**: [`OptionSlot`] is a named, opaque value (one file per name),
//!   the unit the settings registry persists into.
//! - **Transparent Compression**: optional LZ4 block compression.
//! - **Self-Healing**: stale temp files are removed when the engine connects.
//!
//! All I/O is synchronous; callers that need exclusion (single writer, many
//! readers) layer their own lock on top of a slot.
//!
//! # Examples
//!
//! ```rust
//! use cptg_storage::{Storage, StorageError};
//!
//! # fn main() -> Result<(), StorageError> {
//! # let tmp = tempfile::tempdir().unwrap();
//! let storage = Storage::builder().root(tmp.path()).connect()?;
//!
//! storage.write("notes/readme.txt", b"hello")?;
//! assert_eq!(storage.read("notes/readme.txt")?, b"hello");
//!
//! let slot = storage.slot("cptg_settings")?;
//! assert!(slot.load()?.is_none());
//! # Ok(())
//! # }
//! ```

mod builder;
mod engine;
mod error;
mod maintenance;
mod security;
mod slot;

pub use builder::{NoRoot, StorageBuilder, WithRoot};
pub use engine::{Compression, Storage};
pub use error::{StorageError, StorageErrorExt};
pub use slot::{OptionSlot, SLOT_EXTENSION, SlotName};

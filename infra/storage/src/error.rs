use std::borrow::Cow;

/// A specialized [`StorageError`] enum of this crate.
#[cptg_derive::cptg_error]
pub enum StorageError {
    #[error("File not found{}: {message}", format_context(.context))]
    FileNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Path traversal security violation{}: {message}", format_context(.context))]
    PathTraversalAttempt { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid slot name{}: {message}", format_context(.context))]
    InvalidSlotName { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Hardware I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Decompression failure{}: {source}", format_context(.context))]
    Decompress { source: lz4_flex::block::DecompressError, context: Option<Cow<'static, str>> },
}

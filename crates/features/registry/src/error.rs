use cptg_storage::StorageError;
use std::borrow::Cow;

/// Hard failures of the registry. Rejected submissions are not errors; see
/// [`crate::AppendOutcome`].
#[cptg_derive::cptg_error]
pub enum RegistryError {
    /// The option slot could not be read or written.
    #[error("Definition storage failure{}: {source}", format_context(.context))]
    Storage { source: StorageError, context: Option<Cow<'static, str>> },

    /// The persisted document is not valid JSON of a known shape.
    #[error("Definition document is malformed{}: {source}", format_context(.context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The document was written by a newer release.
    #[error("Unsupported definition document{}: version {version}", format_context(.context))]
    UnsupportedVersion { version: u64, context: Option<Cow<'static, str>> },

    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

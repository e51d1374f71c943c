use cptg_registry::RegistryError;
use cptg_storage::StorageError;
use std::borrow::Cow;

/// A specialized [`GeneratorError`] enum of this crate.
#[cptg_derive::cptg_error]
pub enum GeneratorError {
    #[error("Storage bootstrap failed{}: {source}", format_context(.context))]
    Storage { source: StorageError, context: Option<Cow<'static, str>> },

    #[error("Registry failure{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },
}

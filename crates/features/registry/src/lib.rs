//! # Definition Registry
//!
//! The business slice of content type generation:
//!
//! * [`DefinitionStore`] persists an ordered, identifier-unique sequence of
//!   [`Definition`](cptg_domain::Definition)s in one option slot.
//! * [`Replayer`] turns that sequence into
//!   [`Registration`](cptg_domain::Registration)s at startup and hands them
//!   to a [`RegistrationSink`].
//! * [`RegistrationCatalog`] is an in-memory sink that also backs the
//!   generated-types listing.
//!
//! ## Example
//!
//! ```rust
//! use cptg_domain::CandidateDefinition;
//! use cptg_kernel::i18n::IdentityLocalizer;
//! use cptg_registry::{DefinitionStore, Replayer, StorePolicy};
//! use cptg_storage::Storage;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let tmp = tempfile::tempdir()?;
//! let storage = Storage::builder().root(tmp.path()).connect()?;
//! let store = DefinitionStore::open(&storage, "cptg_settings", StorePolicy::default())?;
//!
//! assert!(store.append(&CandidateDefinition::new("Movie", "Movie", "Movies"))?.is_stored());
//! assert!(!store.append(&CandidateDefinition::new("movie", "Film", "Films"))?.is_stored());
//!
//! let replay = Replayer::new(store, Arc::new(IdentityLocalizer)).replay_all()?;
//! assert_eq!(replay.registrations[0].rewrite_slug, "movie");
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
mod replay;
mod sink;
mod store;
mod validate;

pub use crate::catalog::RegistrationCatalog;
pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::replay::{Replay, ReplaySummary, Replayer, derive_registration};
pub use crate::sink::{FnSink, RegistrationSink, sink_fn};
pub use crate::store::{AppendOutcome, DefinitionStore};
pub use crate::validate::{Rejection, StorePolicy, normalize};

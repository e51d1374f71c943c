//! Startup replay: persisted definitions in, registrations out.

use crate::error::RegistryError;
use crate::sink::RegistrationSink;
use crate::store::DefinitionStore;
use cptg_domain::constants::{SOURCE_TAG, messages};
use cptg_domain::{Definition, Registration, RegistrationLabels, Surfaces};
use cptg_kernel::i18n::Localizer;
use std::sync::Arc;
use tracing::{debug, info};

/// Everything one replay produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    pub registrations: Vec<Registration>,
    /// Incomplete definitions passed over.
    pub skipped: usize,
}

/// Counts reported after replaying into a sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub emitted: usize,
    pub skipped: usize,
}

/// Rebuilds registrations from the store on every call.
///
/// Holds no state of its own: the output is a function of the store contents
/// and the localizer, so replaying an unchanged store yields identical
/// registrations.
#[derive(Debug, Clone)]
pub struct Replayer {
    store: DefinitionStore,
    localizer: Arc<dyn Localizer>,
}

impl Replayer {
    #[must_use]
    pub fn new(store: DefinitionStore, localizer: Arc<dyn Localizer>) -> Self {
        Self { store, localizer }
    }

    #[must_use]
    pub const fn store(&self) -> &DefinitionStore {
        &self.store
    }

    /// Derives a registration for every complete definition, in store order.
    ///
    /// # Errors
    /// Propagates [`DefinitionStore::read_all`] failures. Incomplete
    /// definitions are counted, never raised.
    pub fn replay_all(&self) -> Result<Replay, RegistryError> {
        let mut registrations = Vec::new();
        let summary = self.replay_into(&mut registrations)?;
        Ok(Replay { registrations, skipped: summary.skipped })
    }

    /// Like [`Replayer::replay_all`], handing each registration to `sink`.
    ///
    /// Storage is read once up front, so a read failure emits nothing.
    ///
    /// # Errors
    /// Propagates [`DefinitionStore::read_all`] failures.
    pub fn replay_into<S>(&self, sink: &mut S) -> Result<ReplaySummary, RegistryError>
    where
        S: RegistrationSink + ?Sized,
    {
        let definitions = self.store.read_all()?;
        let mut summary = ReplaySummary::default();

        for (index, definition) in definitions.iter().enumerate() {
            if !definition.is_complete() {
                debug!(index, type_key = %definition.type_key, "Skipping incomplete definition");
                summary.skipped += 1;
                continue;
            }
            sink.register(derive_registration(definition, self.localizer.as_ref()));
            summary.emitted += 1;
        }

        info!(emitted = summary.emitted, skipped = summary.skipped, "Definitions replayed");
        Ok(summary)
    }
}

/// Applies the fixed registration template to one complete definition.
#[must_use]
pub fn derive_registration(definition: &Definition, localizer: &dyn Localizer) -> Registration {
    let Definition { type_key, singular_label, plural_label } = definition;

    let labels = RegistrationLabels {
        name: plural_label.clone(),
        singular_name: singular_label.clone(),
        menu_name: plural_label.clone(),
        name_admin_bar: singular_label.clone(),
        add_new: localizer.lookup(messages::ADD_NEW).into_owned(),
        all_items: format!("{}{plural_label}", localizer.lookup(messages::ALL_ITEMS_PREFIX)),
    };

    Registration {
        type_key: type_key.clone(),
        labels,
        public: true,
        has_archive: true,
        rewrite_slug: type_key.clone(),
        supports: Surfaces::DEFAULT,
        source_tag: SOURCE_TAG.to_owned(),
    }
}

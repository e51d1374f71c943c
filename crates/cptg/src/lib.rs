//! Facade crate for the content type generator.
//!
//! Re-exports domain, kernel and registry primitives and wires them into one
//! [`Generator`]. Keep this crate thin: it composes other crates, it does not
//! implement business rules.
//!
//! ## Usage
//! A host builds one [`Generator`] at startup and passes it (or clones of its
//! store) to its own event handlers: [`Generator::on_startup`] from the
//! startup hook, [`Generator::submit`] from the settings form handler.
//!
//! ```rust
//! use cptg::Generator;
//! use cptg::domain::config::AppConfig;
//! use cptg::registry::RegistrationCatalog;
//!
//! # fn main() -> Result<(), cptg::GeneratorError> {
//! # let tmp = tempfile::tempdir().unwrap();
//! let mut config = AppConfig::default();
//! config.storage.data_dir = tmp.path().to_path_buf();
//!
//! let generator = Generator::builder().config(config).connect()?;
//! generator.submit(&("Movie", "Movie", "Movies").into())?;
//!
//! let mut catalog = RegistrationCatalog::new();
//! generator.on_startup(&mut catalog)?;
//! assert_eq!(catalog.generated_keys(), ["movie"]);
//! # Ok(())
//! # }
//! ```

mod error;
pub mod form;

pub use crate::error::{GeneratorError, GeneratorErrorExt};
pub use crate::form::{FromFormFields, SettingsForm};
pub use cptg_domain as domain;
pub use cptg_kernel as kernel;
pub use cptg_registry as registry;
pub use cptg_storage as storage;

use cptg_domain::config::{AppConfig, CompressionKind};
use cptg_domain::{CandidateDefinition, Definition};
use cptg_kernel::i18n::{Localizer, MessageCatalog};
use cptg_registry::{
    AppendOutcome, DefinitionStore, RegistrationSink, Replay, ReplaySummary, Replayer, StorePolicy,
};
use cptg_storage::{Compression, Storage};
use std::sync::Arc;
use tracing::info;

/// One wired instance: storage, definition store, replayer and localizer.
///
/// Cheap to clone; every clone shares the same store lock.
#[derive(Debug, Clone)]
pub struct Generator {
    config: AppConfig,
    storage: Storage,
    store: DefinitionStore,
    replayer: Replayer,
    localizer: Arc<dyn Localizer>,
}

#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    config: AppConfig,
    localizer: Option<Arc<dyn Localizer>>,
}

impl GeneratorBuilder {
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the localizer. Without one, `locale.messages` from the
    /// config is used as a [`MessageCatalog`].
    #[must_use]
    pub fn localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Some(Arc::new(localizer));
        self
    }

    /// Opens storage under `storage.data_dir` and the store over
    /// `registry.option_name`.
    ///
    /// # Errors
    /// [`GeneratorError::Storage`] if the data directory cannot be prepared,
    /// [`GeneratorError::Registry`] if the option name is not a valid slot name.
    pub fn connect(self) -> Result<Generator, GeneratorError> {
        let Self { config, localizer } = self;

        let compression = match config.storage.compression {
            CompressionKind::None => Compression::None,
            CompressionKind::Lz4 => Compression::Lz4,
        };
        let storage = Storage::builder()
            .root(&config.storage.data_dir)
            .compression(compression)
            .connect()
            .context("Opening data directory")?;

        let policy = StorePolicy::from(&config.registry);
        let store = DefinitionStore::open(&storage, &config.registry.option_name, policy)?;

        let localizer: Arc<dyn Localizer> = match localizer {
            Some(localizer) => localizer,
            None => Arc::new(MessageCatalog::from(&config.locale)),
        };
        let replayer = Replayer::new(store.clone(), Arc::clone(&localizer));

        info!(
            root = %storage.root().display(),
            option = %config.registry.option_name,
            "Generator ready"
        );

        Ok(Generator { config, storage, store, replayer, localizer })
    }
}

impl Generator {
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }

    /// Handles one form submission.
    ///
    /// # Errors
    /// Storage or document failures. Rejections are part of the outcome.
    pub fn submit(&self, candidate: &CandidateDefinition) -> Result<AppendOutcome, GeneratorError> {
        Ok(self.store.append(candidate)?)
    }

    /// Parses raw form fields and submits them.
    ///
    /// # Errors
    /// See [`Generator::submit`].
    pub fn submit_fields<I, K, V>(&self, fields: I) -> Result<AppendOutcome, GeneratorError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let candidate =
            CandidateDefinition::from_form_fields(fields, &self.config.registry.option_name);
        self.submit(&candidate)
    }

    /// All stored definitions, in insertion order.
    ///
    /// # Errors
    /// Storage or document failures.
    pub fn definitions(&self) -> Result<Vec<Definition>, GeneratorError> {
        Ok(self.store.read_all()?)
    }

    /// Startup hook: replays every complete definition into `sink`.
    ///
    /// Safe to call more than once.
    ///
    /// # Errors
    /// Storage or document failures.
    pub fn on_startup<S>(&self, sink: &mut S) -> Result<ReplaySummary, GeneratorError>
    where
        S: RegistrationSink + ?Sized,
    {
        Ok(self.replayer.replay_into(sink)?)
    }

    /// # Errors
    /// Storage or document failures.
    pub fn replay(&self) -> Result<Replay, GeneratorError> {
        Ok(self.replayer.replay_all()?)
    }

    #[must_use]
    pub fn settings_form(&self) -> SettingsForm {
        SettingsForm::new(&self.config.registry.option_name, self.localizer.as_ref())
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub const fn store(&self) -> &DefinitionStore {
        &self.store
    }

    #[must_use]
    pub fn localizer(&self) -> &dyn Localizer {
        self.localizer.as_ref()
    }
}

use crate::constants::{DEFAULT_MAX_KEY_LENGTH, OPTION_NAME};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the facade and the reference host.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub storage: StorageConfig,
    pub registry: RegistryConfig,
    pub locale: LocaleConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the option slot lives on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub compression: CompressionKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionKind {
    #[default]
    None,
    Lz4,
}

/// Limits and naming the host imposes on the definition store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub option_name: String,
    /// `None` disables the length check.
    pub max_key_length: Option<usize>,
    /// `None` means the sequence grows without a cap.
    pub max_definitions: Option<usize>,
}

/// Translated messages keyed by message id.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub messages: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub filter: Option<String>,
}

// --- Default ---

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data"), compression: CompressionKind::None }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            option_name: OPTION_NAME.to_owned(),
            max_key_length: Some(DEFAULT_MAX_KEY_LENGTH),
            max_definitions: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, filter: None }
    }
}

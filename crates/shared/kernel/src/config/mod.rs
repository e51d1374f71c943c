use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix of environment overrides, e.g. `CPTG__REGISTRY__OPTION_NAME`.
pub const ENV_PREFIX: &str = "CPTG";

/// Custom error type for config loading.
#[cptg_derive::cptg_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays environment overrides on top.
///
/// 1. **Base File**: `path` is required; its format (TOML, YAML, JSON, ...)
///    follows the extension. Without an extension every supported one is tried.
/// 2. **Environment Overrides**: variables prefixed with `CPTG__`, nested with
///    double underscores (`CPTG__STORAGE__DATA_DIR` maps to `storage.data_dir`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unparsable, or does
/// not match the shape of `T`.
///
/// # Example
/// ```rust
/// use cptg_kernel::config::load_config;
/// use cptg_kernel::domain::config::AppConfig;
///
/// let cfg: AppConfig = load_config("config/local").unwrap_or_default();
/// assert_eq!(cfg.registry.option_name, "cptg_settings");
/// ```
pub fn load_config<T>(path: impl AsRef<Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path.as_ref(), None)
}

/// Like [`load_config`], but reads overrides from `vars` instead of the
/// process environment. Keys use the same `CPTG__SECTION__KEY` form.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_with_env<T, I, K, V>(path: impl AsRef<Path>, vars: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let vars = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    load_layered(path.as_ref(), Some(vars))
}

fn load_layered<T>(path: &Path, vars: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let builder = Config::builder().add_source(File::from(path).required(true)).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .source(vars),
    );

    info!("Loading config from {}", path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

//! Localization lookup seam.
//!
//! The registry never translates anything itself. It asks a [`Localizer`] for
//! a message id and uses whatever comes back.

use cptg_domain::config::LocaleConfig;
use cptg_domain::constants::TEXT_DOMAIN;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Resolves a message id to display text.
pub trait Localizer: Debug + Send + Sync {
    /// Returns the text for `key`; implementations fall back to `key` itself.
    fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

/// Returns every message id unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
    fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

/// An in-memory message table for one text domain.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    domain: String,
    messages: BTreeMap<String, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self { domain: TEXT_DOMAIN.to_owned(), messages: BTreeMap::new() }
    }
}

impl MessageCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.messages.insert(key.into(), text.into());
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<&LocaleConfig> for MessageCatalog {
    fn from(config: &LocaleConfig) -> Self {
        Self { messages: config.messages.clone(), ..Self::default() }
    }
}

impl Localizer for MessageCatalog {
    fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        self.messages.get(key).map_or(Cow::Borrowed(key), |text| Cow::Borrowed(text.as_str()))
    }
}

impl<L: Localizer + ?Sized> Localizer for Arc<L> {
    fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        (**self).lookup(key)
    }
}

impl<L: Localizer + ?Sized> Localizer for &L {
    fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        (**self).lookup(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_key() {
        assert_eq!(IdentityLocalizer.lookup("All "), "All ");
    }

    #[test]
    fn catalog_falls_back_to_key() {
        let catalog = MessageCatalog::new().with("Add New", "Neu hinzufügen");
        assert_eq!(catalog.lookup("Add New"), "Neu hinzufügen");
        assert_eq!(catalog.lookup("All "), "All ");
        assert_eq!(catalog.domain(), "cptg");
    }

    #[test]
    fn catalog_from_locale_config() {
        let mut config = LocaleConfig::default();
        config.messages.insert("All ".to_owned(), "Tous les ".to_owned());
        let catalog = MessageCatalog::from(&config);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("All "), "Tous les ");
    }

    #[test]
    fn shared_localizers_delegate() {
        let shared: Arc<dyn Localizer> = Arc::new(MessageCatalog::new().with("Add New", "Nuevo"));
        assert_eq!(shared.lookup("Add New"), "Nuevo");
    }
}

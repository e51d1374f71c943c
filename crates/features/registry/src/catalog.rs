use crate::sink::RegistrationSink;
use cptg_domain::Registration;
use cptg_domain::constants::SOURCE_TAG;
use fxhash::FxHashMap;

/// In-memory content type catalog keyed by type key.
///
/// Entries keep first-registration order. Registering a key again replaces
/// the entry in place, so repeated replays leave one entry per key.
#[derive(Debug, Clone, Default)]
pub struct RegistrationCatalog {
    entries: Vec<Registration>,
    index: FxHashMap<String, usize>,
}

impl RegistrationCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `registration.type_key`.
    /// Returns the replaced registration, if any.
    pub fn insert(&mut self, registration: Registration) -> Option<Registration> {
        if let Some(&at) = self.index.get(&registration.type_key) {
            return Some(std::mem::replace(&mut self.entries[at], registration));
        }
        self.index.insert(registration.type_key.clone(), self.entries.len());
        self.entries.push(registration);
        None
    }

    #[must_use]
    pub fn get(&self, type_key: &str) -> Option<&Registration> {
        self.index.get(type_key).map(|&at| &self.entries[at])
    }

    #[must_use]
    pub fn contains(&self, type_key: &str) -> bool {
        self.index.contains_key(type_key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.entries.iter()
    }

    /// Entries produced by this system, in registration order.
    pub fn generated(&self) -> impl Iterator<Item = &Registration> {
        self.entries.iter().filter(|r| r.is_generated_by(SOURCE_TAG))
    }

    /// Type keys of the generated entries, in registration order, for the listing view.
    #[must_use]
    pub fn generated_keys(&self) -> Vec<&str> {
        self.generated().map(|r| r.type_key.as_str()).collect()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Registration> {
        self.entries
    }
}

impl RegistrationSink for RegistrationCatalog {
    fn register(&mut self, registration: Registration) {
        self.insert(registration);
    }
}

impl<'a> IntoIterator for &'a RegistrationCatalog {
    type Item = &'a Registration;
    type IntoIter = std::slice::Iter<'a, Registration>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

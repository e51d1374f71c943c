use crate::surfaces::Surfaces;
use serde::{Deserialize, Serialize};

/// Display strings handed to the host alongside a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationLabels {
    /// Plural label.
    pub name: String,
    pub singular_name: String,
    /// Plural label, shown in navigation menus.
    pub menu_name: String,
    /// Singular label, shown in the toolbar "new" menu.
    pub name_admin_bar: String,
    pub add_new: String,
    pub all_items: String,
}

/// A fully configured runtime content type, derived from a [`crate::Definition`].
///
/// Registrations are transient: they are rebuilt on every replay and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub type_key: String,
    pub labels: RegistrationLabels,
    pub public: bool,
    pub has_archive: bool,
    pub rewrite_slug: String,
    pub supports: Surfaces,
    /// Lets a listing tell generated registrations apart from host-native ones.
    pub source_tag: String,
}

impl Registration {
    #[must_use]
    pub fn is_generated_by(&self, tag: &str) -> bool {
        self.source_tag == tag
    }
}

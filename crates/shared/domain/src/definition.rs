use serde::{Deserialize, Serialize};

/// A persisted content type definition: one identifier plus its display labels.
///
/// Stored values are already normalized. Every field defaults to an empty
/// string on deserialization, so partially filled historical records load
/// and can be reported as incomplete instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Definition {
    pub type_key: String,
    pub singular_label: String,
    pub plural_label: String,
}

impl Definition {
    /// A definition is complete when none of its three fields is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.type_key.is_empty() && !self.singular_label.is_empty() && !self.plural_label.is_empty()
    }
}

/// A raw, unsanitized submission as it arrives from a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateDefinition {
    pub type_key: String,
    pub singular_label: String,
    pub plural_label: String,
}

impl CandidateDefinition {
    pub fn new(
        type_key: impl Into<String>,
        singular_label: impl Into<String>,
        plural_label: impl Into<String>,
    ) -> Self {
        Self {
            type_key: type_key.into(),
            singular_label: singular_label.into(),
            plural_label: plural_label.into(),
        }
    }
}

impl<K, S, P> From<(K, S, P)> for CandidateDefinition
where
    K: Into<String>,
    S: Into<String>,
    P: Into<String>,
{
    fn from((type_key, singular_label, plural_label): (K, S, P)) -> Self {
        Self::new(type_key, singular_label, plural_label)
    }
}

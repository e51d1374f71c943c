//! Normalization of one submitted candidate, independent of what is stored.

use cptg_domain::config::RegistryConfig;
use cptg_domain::constants::DEFAULT_MAX_KEY_LENGTH;
use cptg_domain::{CandidateDefinition, Definition};
use cptg_kernel::sanitize::{sanitize_key, sanitize_text_field};
use std::fmt;

/// Host-imposed limits applied on append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorePolicy {
    /// `None` disables the identifier length check.
    pub max_key_length: Option<usize>,
    /// `None` lets the sequence grow without a cap.
    pub max_definitions: Option<usize>,
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self { max_key_length: Some(DEFAULT_MAX_KEY_LENGTH), max_definitions: None }
    }
}

impl StorePolicy {
    /// No length limit and no cap.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_key_length: None, max_definitions: None }
    }
}

impl From<&RegistryConfig> for StorePolicy {
    fn from(config: &RegistryConfig) -> Self {
        Self { max_key_length: config.max_key_length, max_definitions: config.max_definitions }
    }
}

/// Why a candidate was not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The identifier normalized to an empty string.
    InvalidIdentifier,
    /// A definition with the same normalized identifier is already stored.
    DuplicateIdentifier { type_key: String },
    /// The normalized identifier exceeds the host's length limit.
    IdentifierTooLong { len: usize, max: usize },
    /// The store already holds `max` definitions.
    CapacityReached { max: usize },
}

impl Rejection {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier => "invalid_identifier",
            Self::DuplicateIdentifier { .. } => "duplicate_identifier",
            Self::IdentifierTooLong { .. } => "identifier_too_long",
            Self::CapacityReached { .. } => "capacity_reached",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifier => f.write_str("identifier is empty after normalization"),
            Self::DuplicateIdentifier { type_key } => {
                write!(f, "identifier `{type_key}` is already registered")
            },
            Self::IdentifierTooLong { len, max } => {
                write!(f, "identifier is {len} characters long, the limit is {max}")
            },
            Self::CapacityReached { max } => {
                write!(f, "the store already holds the maximum of {max} definitions")
            },
        }
    }
}

/// Normalizes a raw candidate into a storable definition.
///
/// Checks only what can be decided from the candidate alone: an empty or
/// over-long identifier. Labels may be empty; such a definition is stored and
/// later skipped by replay.
///
/// # Errors
/// Returns [`Rejection::InvalidIdentifier`] or [`Rejection::IdentifierTooLong`].
pub fn normalize(
    candidate: &CandidateDefinition,
    policy: &StorePolicy,
) -> Result<Definition, Rejection> {
    let type_key = sanitize_key(&candidate.type_key);

    if type_key.is_empty() {
        return Err(Rejection::InvalidIdentifier);
    }

    if let Some(max) = policy.max_key_length {
        let len = type_key.chars().count();
        if len > max {
            return Err(Rejection::IdentifierTooLong { len, max });
        }
    }

    Ok(Definition {
        type_key,
        singular_label: sanitize_text_field(&candidate.singular_label),
        plural_label: sanitize_text_field(&candidate.plural_label),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_all_three_fields() {
        let candidate = CandidateDefinition::new("  Movie ", " <b>Movie</b> ", "Movies\n");
        let def = normalize(&candidate, &StorePolicy::default()).expect("valid");
        assert_eq!(def.type_key, "movie");
        assert_eq!(def.singular_label, "Movie");
        assert_eq!(def.plural_label, "Movies");
    }

    #[test]
    fn punctuation_key_is_invalid() {
        let candidate = CandidateDefinition::new("?!.", "A", "B");
        assert_eq!(normalize(&candidate, &StorePolicy::default()), Err(Rejection::InvalidIdentifier));
    }

    #[test]
    fn length_is_checked_after_normalization() {
        let policy = StorePolicy { max_key_length: Some(5), max_definitions: None };
        let ok = CandidateDefinition::new("  B-O-O-K  ", "Book", "Books");
        assert_eq!(normalize(&ok, &policy).map(|d| d.type_key), Err(Rejection::IdentifierTooLong { len: 7, max: 5 }));

        let short = CandidateDefinition::new(" Books!! ", "Book", "Books");
        assert_eq!(normalize(&short, &policy).map(|d| d.type_key), Ok("books".to_owned()));
    }

    #[test]
    fn unbounded_policy_skips_length_check() {
        let candidate = CandidateDefinition::new("a".repeat(64), "A", "As");
        assert!(normalize(&candidate, &StorePolicy::unbounded()).is_ok());
    }

    #[test]
    fn empty_labels_are_kept() {
        let candidate = CandidateDefinition::new("draft", "", "   ");
        let def = normalize(&candidate, &StorePolicy::default()).expect("valid key");
        assert!(!def.is_complete());
    }

    #[test]
    fn rejections_render_reasons() {
        let dup = Rejection::DuplicateIdentifier { type_key: "movie".to_owned() };
        assert_eq!(dup.to_string(), "identifier `movie` is already registered");
        assert_eq!(dup.code(), "duplicate_identifier");
        assert_eq!(Rejection::CapacityReached { max: 3 }.code(), "capacity_reached");
        assert_eq!(
            Rejection::IdentifierTooLong { len: 27, max: 20 }.to_string(),
            "identifier is 27 characters long, the limit is 20"
        );
        assert_eq!(
            Rejection::CapacityReached { max: 3 }.to_string(),
            "the store already holds the maximum of 3 definitions"
        );
    }
}

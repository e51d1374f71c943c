//! The persisted, ordered sequence of definitions.

use crate::error::{RegistryError, RegistryErrorExt};
use crate::validate::{Rejection, StorePolicy, normalize};
use cptg_domain::constants::DOCUMENT_VERSION;
use cptg_domain::{CandidateDefinition, Definition};
use cptg_kernel::sanitize::{sanitize_key, sanitize_text_field};
use cptg_storage::{OptionSlot, Storage};
use fxhash::FxHashSet;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of [`DefinitionStore::append`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The normalized definition was appended and persisted.
    Stored(Definition),
    /// Nothing was written.
    Rejected(Rejection),
}

impl AppendOutcome {
    #[must_use]
    pub const fn is_stored(&self) -> bool {
        matches!(self, Self::Stored(_))
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Stored(_) => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    version: u32,
    definitions: &'a [Definition],
}

/// Current document shape. Any object carrying `version` must match it.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    #[allow(dead_code)]
    version: u32,
    definitions: Vec<Definition>,
}

/// Before the settings became a list they held one record.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LegacyRecord {
    type_key: String,
    #[serde(default)]
    singular_label: String,
    #[serde(default)]
    plural_label: String,
}

impl From<LegacyRecord> for Definition {
    fn from(record: LegacyRecord) -> Self {
        Self {
            type_key: record.type_key,
            singular_label: record.singular_label,
            plural_label: record.plural_label,
        }
    }
}

#[derive(Debug)]
struct StoreState {
    slot: OptionSlot,
    policy: StorePolicy,
    /// Single writer, many readers over the whole slot.
    lock: RwLock<()>,
}

/// Append-only store of definitions backed by one option slot.
///
/// The handle is reference-counted and cheap to clone; clones share the lock,
/// so concurrent appends through any clone are serialized.
#[derive(Debug, Clone)]
pub struct DefinitionStore {
    state: Arc<StoreState>,
}

impl DefinitionStore {
    #[must_use]
    pub fn new(slot: OptionSlot, policy: StorePolicy) -> Self {
        Self { state: Arc::new(StoreState { slot, policy, lock: RwLock::new(()) }) }
    }

    /// Opens the store over the slot named `option_name`.
    ///
    /// # Errors
    /// Returns [`RegistryError::Storage`] if the name is not a valid slot name.
    pub fn open(
        storage: &Storage,
        option_name: &str,
        policy: StorePolicy,
    ) -> Result<Self, RegistryError> {
        let slot = storage.slot(option_name).context("Opening definition slot")?;
        Ok(Self::new(slot, policy))
    }

    #[must_use]
    pub fn policy(&self) -> StorePolicy {
        self.state.policy
    }

    #[must_use]
    pub fn slot(&self) -> &OptionSlot {
        &self.state.slot
    }

    /// Normalizes `candidate` and appends it unless its identifier is invalid,
    /// too long, already stored, or the store is full.
    ///
    /// Dedup compares the normalized identifier only; labels may collide.
    /// The whole check-then-write runs under the write lock. A rejection
    /// leaves the persisted document untouched.
    ///
    /// # Errors
    /// Storage and serialization failures. Rejections are returned as
    /// [`AppendOutcome::Rejected`].
    pub fn append(&self, candidate: &CandidateDefinition) -> Result<AppendOutcome, RegistryError> {
        let definition = match normalize(candidate, &self.state.policy) {
            Ok(definition) => definition,
            Err(rejection) => return Ok(reject(rejection)),
        };

        let _guard = self.state.lock.write();
        let mut definitions = self.load()?;

        if definitions.iter().any(|d| d.type_key == definition.type_key) {
            return Ok(reject(Rejection::DuplicateIdentifier { type_key: definition.type_key }));
        }

        if let Some(max) = self.state.policy.max_definitions.filter(|&max| definitions.len() >= max) {
            return Ok(reject(Rejection::CapacityReached { max }));
        }

        definitions.push(definition.clone());
        self.persist(&definitions)?;

        info!(
            type_key = %definition.type_key,
            total = definitions.len(),
            complete = definition.is_complete(),
            "Definition stored"
        );
        Ok(AppendOutcome::Stored(definition))
    }

    /// Returns every stored definition in insertion order.
    ///
    /// An empty or never-written slot yields an empty sequence.
    ///
    /// # Errors
    /// Storage failures, a malformed document, or a document version newer
    /// than this release understands.
    pub fn read_all(&self) -> Result<Vec<Definition>, RegistryError> {
        let _guard = self.state.lock.read();
        self.load()
    }

    fn load(&self) -> Result<Vec<Definition>, RegistryError> {
        let Some(bytes) = self.state.slot.load().context("Reading definitions")? else {
            return Ok(Vec::new());
        };
        decode(&bytes)
    }

    fn persist(&self, definitions: &[Definition]) -> Result<(), RegistryError> {
        let document = DocumentRef { version: DOCUMENT_VERSION, definitions };
        let bytes = serde_json::to_vec(&document).context("Encoding definitions")?;
        self.state.slot.store(&bytes).context("Writing definitions")?;
        debug!(slot = %self.state.slot.name(), count = definitions.len(), "Definition document rewritten");
        Ok(())
    }
}

fn reject(rejection: Rejection) -> AppendOutcome {
    warn!(reason = %rejection, code = rejection.code(), "Definition rejected");
    AppendOutcome::Rejected(rejection)
}

/// Decodes the slot by shape: an object with `version` is an envelope, any
/// other object a legacy single record, everything else a legacy list.
/// A document that does not match its shape is an error, never a partial read.
fn decode(bytes: &[u8]) -> Result<Vec<Definition>, RegistryError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_slice(bytes).context("Decoding definitions")?;
    if value.is_null() {
        return Ok(Vec::new());
    }

    let definitions = match value.get("version").map(Value::as_u64) {
        Some(Some(version)) if version > u64::from(DOCUMENT_VERSION) => {
            return Err(RegistryError::UnsupportedVersion {
                version,
                context: Some(format!("Highest known version is {DOCUMENT_VERSION}").into()),
            });
        },
        Some(_) => {
            serde_json::from_value::<Envelope>(value)
                .context("Decoding definition envelope")?
                .definitions
        },
        None if value.is_object() => {
            let record = serde_json::from_value::<LegacyRecord>(value)
                .context("Decoding legacy definition record")?;
            debug!(type_key = %record.type_key, "Upgrading single-record document");
            vec![record.into()]
        },
        None => serde_json::from_value::<Vec<Definition>>(value)
            .context("Decoding legacy definition list")?,
    };

    Ok(repair(definitions))
}

/// Re-applies normalization and identifier uniqueness to decoded records.
///
/// Documents this store wrote pass through unchanged. Older or hand-edited
/// ones may not: a key that normalizes to empty is dropped, and only the
/// first record for each key is kept. Incomplete labels stay.
fn repair(definitions: Vec<Definition>) -> Vec<Definition> {
    let mut seen = FxHashSet::default();
    let mut kept = Vec::with_capacity(definitions.len());

    for (index, raw) in definitions.into_iter().enumerate() {
        let definition = Definition {
            type_key: sanitize_key(&raw.type_key),
            singular_label: sanitize_text_field(&raw.singular_label),
            plural_label: sanitize_text_field(&raw.plural_label),
        };

        if definition.type_key.is_empty() {
            warn!(index, raw_key = %raw.type_key, "Dropping stored definition without a valid key");
            continue;
        }
        if !seen.insert(definition.type_key.clone()) {
            warn!(index, type_key = %definition.type_key, "Dropping duplicate stored definition");
            continue;
        }
        kept.push(definition);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_envelope() {
        let defs = decode(br#"{"version":1,"definitions":[{"type_key":"movie","singular_label":"Movie","plural_label":"Movies"}]}"#)
            .expect("envelope");
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].type_key, "movie");
    }

    #[test]
    fn decodes_legacy_shapes() {
        let list = decode(br#"[{"type_key":"a","singular_label":"A","plural_label":"As"},{"type_key":"b"}]"#)
            .expect("list");
        assert_eq!(list.len(), 2);
        assert!(!list[1].is_complete());

        let single = decode(br#"{"type_key":"book","singular_label":"Book","plural_label":"Books"}"#)
            .expect("single");
        assert_eq!(single.len(), 1);
        assert!(single[0].is_complete());
    }

    #[test]
    fn blank_and_null_documents_are_empty() {
        assert!(decode(b"").expect("blank").is_empty());
        assert!(decode(b"  \n").expect("whitespace").is_empty());
        assert!(decode(b"null").expect("null").is_empty());
    }

    #[test]
    fn wrong_shapes_are_serialization_errors() {
        for raw in [
            &br#"{"version":1,"definitions":[{"type_key":"movie","plural_label":7}]}"#[..],
            br#"{"version":"1","definitions":[]}"#,
            br#"{"version":1}"#,
            br#"{"version":1,"definitions":[],"extra":true}"#,
            br#"{"unrelated":true}"#,
            br#"{"singular_label":"Movie"}"#,
            br#"[{"type_key":["movie"]}]"#,
            b"42",
            br#""movie""#,
        ] {
            let err = decode(raw).expect_err("wrong shape must not decode");
            assert!(matches!(err, RegistryError::Serialization { .. }), "unexpected {err:?}");
        }
    }

    #[test]
    fn repair_normalizes_and_keeps_first_key() {
        let defs = decode(
            br#"[{"type_key":"movie","singular_label":"Movie","plural_label":"Movies"},
                {"type_key":"Movie","singular_label":"Film","plural_label":"Films"},
                {"type_key":"Bad Key!","singular_label":"<b>Bad</b>"},
                {"type_key":"!!!","singular_label":"Gone","plural_label":"Gone"}]"#,
        )
        .expect("legacy list");

        let keys: Vec<_> = defs.iter().map(|d| d.type_key.as_str()).collect();
        assert_eq!(keys, ["movie", "badkey"]);
        assert_eq!(defs[0].plural_label, "Movies");
        assert_eq!(defs[1].singular_label, "Bad");
        assert!(!defs[1].is_complete());
    }

    #[test]
    fn newer_versions_are_refused() {
        let err = decode(br#"{"version":99,"definitions":[]}"#).expect_err("future version");
        assert!(matches!(err, RegistryError::UnsupportedVersion { version: 99, .. }));
    }

    #[test]
    fn garbage_is_a_serialization_error() {
        let err = decode(b"{not json").expect_err("garbage");
        assert!(matches!(err, RegistryError::Serialization { .. }));
    }

    #[test]
    fn outcome_accessors() {
        let stored = AppendOutcome::Stored(Definition::default());
        assert!(stored.is_stored());
        assert!(stored.rejection().is_none());

        let rejected = AppendOutcome::Rejected(Rejection::InvalidIdentifier);
        assert_eq!(rejected.rejection(), Some(&Rejection::InvalidIdentifier));
    }
}

//! # Domain Models
//!
//! Pure data types for the content type registry, with minimal dependencies
//! (`serde`, `bitflags`). No I/O and no sanitization live here; see
//! `cptg-kernel` for the normalization rules and `cptg-registry` for the store.

pub mod config;
pub mod constants;
pub mod definition;
pub mod registration;
pub mod surfaces;

pub use definition::{CandidateDefinition, Definition};
pub use registration::{Registration, RegistrationLabels};
pub use surfaces::Surfaces;

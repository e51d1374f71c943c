//! Kernel utilities shared by the registry and its hosts.
//! Keep this crate lightweight: normalization rules, the localization lookup seam,
//! and layered config loading.
//!
//! ## Normalization
//! ```rust
//! use cptg_kernel::sanitize::{sanitize_key, sanitize_text_field};
//!
//! assert_eq!(sanitize_key("  Movie Review! "), "moviereview");
//! assert_eq!(sanitize_text_field("<b>Movies</b>\n  & Shows"), "Movies & Shows");
//! ```
//!
//! ## Localization
//! ```rust
//! use cptg_kernel::i18n::{Localizer, MessageCatalog};
//!
//! let catalog = MessageCatalog::new().with("Add New", "Ajouter");
//! assert_eq!(catalog.lookup("Add New"), "Ajouter");
//! assert_eq!(catalog.lookup("Save Settings"), "Save Settings");
//! ```
pub mod config;
pub mod i18n;
pub mod sanitize;

pub use cptg_domain as domain;

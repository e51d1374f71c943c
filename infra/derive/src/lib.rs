#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the infrastructure and feature crates.
//!
//! There is currently one macro, [`macro@cptg_error`], which turns a plain enum into
//! an error type wired for `?` and `.context(...)`.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source type.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling `?` on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. A variant with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[cptg_derive::cptg_error]
/// pub enum SlotError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(path: &std::path::Path) -> Result<Vec<u8>, SlotError> {
///     std::fs::read(path).context("Reading option slot")
/// }
/// ```
#[proc_macro_attribute]
pub fn cptg_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}

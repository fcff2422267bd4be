#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the classkit crates.
//!
//! The only macro currently exported is [`classkit_error`], which turns a plain enum into
//! a `thiserror`-backed error type with context support.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(..)`
///   to `Result<T, Name>` and to results of every wrapped source error.
/// * **Conversions**: Implements `From<Source>` for variants that carry a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling `?` on upstream errors.
/// * **Internal Fallback**: When an `Internal { message, context }` variant exists,
///   `From<&'static str>` and `From<String>` are generated for it.
/// * **Formatting Helper**: A private `format_context` function is emitted next to the enum
///   so `#[error(...)]` strings can append `" (context)"` when context is set.
///
/// # Requirements
///
/// 1. Must be applied to an **enum**.
/// 2. Every variant must use **named fields**; tuple and unit variants are rejected.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[classkit_derive::classkit_error]
/// pub enum RosterError {
///     #[error("Roster is missing column{}: {column}", format_context(.context))]
///     MissingColumn { column: String, context: Option<Cow<'static, str>> },
///
///     #[error("Internal roster error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<(), RosterError> {
///     Err("column lookup failed".into())
/// }
///
/// let err = load().context("Reading preferences").unwrap_err();
/// ```
#[proc_macro_attribute]
pub fn classkit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}

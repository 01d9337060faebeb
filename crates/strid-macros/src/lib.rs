//! Proc macros for the strid SID scheme.
//!
//! This crate provides the `sids!` macro for declaring identifier constants
//! whose values are hashed at compile time.
//!
//! # Example
//!
//! ```ignore
//! use strid::sids;
//!
//! sids! {
//!     /// Diffuse albedo.
//!     pub DIFFUSE = "diffuse",
//!     pub SPECULAR = "specular",
//! }
//!
//! assert_eq!(DIFFUSE, strid::Sid::of("diffuse"));
//! ```
//!
//! The macro evaluates the same hash the runtime uses (it links against
//! `strid-core`), so compile-time constants and runtime lookups can never
//! disagree. Duplicate names and hash collisions within a block are rejected
//! with a compile error naming both offenders.

use proc_macro::TokenStream;
use quote::quote;

mod parse;
mod validate;

/// Declare `Sid` constants from string identifiers.
///
/// Each entry expands to a `const` of type `::strid::Sid` whose value is the
/// hash of the string, computed during macro expansion. Attributes (including
/// doc comments) and visibility pass through to the generated constant.
///
/// # Compile errors
///
/// - two entries with the same constant name
/// - two entries with the same string id
/// - two distinct string ids hashing to the same identifier
///
/// # Example
///
/// ```ignore
/// sids! {
///     pub INTENSITY = "lamp.intensity",
///     pub COLOR = "lamp.color",
/// }
/// ```
#[proc_macro]
pub fn sids(input: TokenStream) -> TokenStream {
    let block = syn::parse_macro_input!(input as parse::SidBlock);

    match sids_impl(block) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn sids_impl(block: parse::SidBlock) -> syn::Result<proc_macro2::TokenStream> {
    validate::validate(&block)?;

    let consts = block.entries.iter().map(|entry| {
        let attrs = &entry.attrs;
        let vis = &entry.vis;
        let const_name = &entry.const_name;
        let string_id = entry.string_id.value();
        let hash_id = syn::LitInt::new(
            &format!("0x{:08X}u32", entry.hash_id),
            entry.string_id.span(),
        );
        let doc = format!("Identifier for `\"{}\"`.", string_id);

        quote! {
            #(#attrs)*
            #[doc = #doc]
            #vis const #const_name: ::strid::Sid = ::strid::Sid::from_raw(#hash_id);
        }
    });

    Ok(quote! { #(#consts)* })
}

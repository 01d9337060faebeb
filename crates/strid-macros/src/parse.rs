//! Parsing for the `sids!` macro input.
//!
//! This module transforms the macro token stream into our intermediate
//! representation.

use strid_core::sid32;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Ident, LitStr, Token, Visibility};

/// One `NAME = "string"` entry, with its attributes and visibility.
pub struct SidEntry {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub const_name: Ident,
    pub string_id: LitStr,
    /// Identifier value, computed at parse time with the same hash the
    /// runtime uses.
    pub hash_id: u32,
}

/// The whole `sids! { ... }` block.
pub struct SidBlock {
    pub entries: Vec<SidEntry>,
}

impl Parse for SidEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        let const_name: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let string_id: LitStr = input.parse()?;
        let hash_id = sid32(string_id.value().as_bytes());

        Ok(Self {
            attrs,
            vis,
            const_name,
            string_id,
            hash_id,
        })
    }
}

impl Parse for SidBlock {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut entries = Vec::new();
        while !input.is_empty() {
            entries.push(input.parse::<SidEntry>()?);
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        if entries.is_empty() {
            return Err(input.error("sids! requires at least one `NAME = \"string\"` entry"));
        }

        Ok(Self { entries })
    }
}

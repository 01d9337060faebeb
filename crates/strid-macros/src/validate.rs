//! Semantic validation for the `sids!` macro.
//!
//! Rejects duplicate names and hash collisions within a declaration block at
//! compile time, so a colliding pair of identifiers can never ship.

use std::collections::HashMap;

use crate::parse::SidBlock;

/// Validate a parsed block for semantic correctness.
pub fn validate(block: &SidBlock) -> syn::Result<()> {
    check_unique_const_names(block)?;
    check_unique_string_ids(block)?;
    check_no_hash_collisions(block)?;
    Ok(())
}

/// Check that all constant names are unique.
fn check_unique_const_names(block: &SidBlock) -> syn::Result<()> {
    let mut seen: HashMap<String, &syn::Ident> = HashMap::new();

    for entry in &block.entries {
        let name = entry.const_name.to_string();
        if seen.contains_key(&name) {
            return Err(syn::Error::new(
                entry.const_name.span(),
                format!("Duplicate constant name `{}`", name),
            ));
        }
        seen.insert(name, &entry.const_name);
    }

    Ok(())
}

/// Check that all string ids are unique.
fn check_unique_string_ids(block: &SidBlock) -> syn::Result<()> {
    let mut seen: HashMap<String, &syn::Ident> = HashMap::new();

    for entry in &block.entries {
        let string_id = entry.string_id.value();
        if let Some(first_const) = seen.get(&string_id) {
            return Err(syn::Error::new(
                entry.string_id.span(),
                format!(
                    "Duplicate id \"{}\": already used by `{}`",
                    string_id, first_const
                ),
            ));
        }
        seen.insert(string_id, &entry.const_name);
    }

    Ok(())
}

/// Check that no two string ids hash to the same identifier.
fn check_no_hash_collisions(block: &SidBlock) -> syn::Result<()> {
    let mut seen: HashMap<u32, String> = HashMap::new();

    for entry in &block.entries {
        let string_id = entry.string_id.value();
        if let Some(first_id) = seen.get(&entry.hash_id) {
            // Hash collision detected
            return Err(syn::Error::new(
                entry.string_id.span(),
                format!(
                    "Identifier hash collision: \"{}\" and \"{}\" both hash to 0x{:08x}. \
                     Rename one of them to avoid the collision.",
                    string_id, first_id, entry.hash_id
                ),
            ));
        }
        seen.insert(entry.hash_id, string_id);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> SidBlock {
        syn::parse_str(src).expect("valid block")
    }

    #[test]
    fn test_accepts_distinct_entries() {
        let block = parse(r#"A = "diffuse", B = "specular""#);
        assert!(validate(&block).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_const_name() {
        let block = parse(r#"A = "diffuse", A = "specular""#);
        let err = validate(&block).expect_err("duplicate name");
        assert!(err.to_string().contains("Duplicate constant name"));
    }

    #[test]
    fn test_rejects_duplicate_string_id() {
        let block = parse(r#"A = "diffuse", B = "diffuse""#);
        let err = validate(&block).expect_err("duplicate id");
        assert!(err.to_string().contains("Duplicate id"));
    }

    #[test]
    fn test_rejects_hash_collision() {
        // A genuine collision in this scheme: both hash to 0x97207e76.
        let block = parse(r#"A = "eg_flat0", B = "ks_diffuse10""#);
        let err = validate(&block).expect_err("hash collision");
        let msg = err.to_string();
        assert!(msg.contains("hash collision"));
        assert!(msg.contains("0x97207e76"));
    }
}

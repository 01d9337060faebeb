//! Opt-in collision detection for registered names.

use std::collections::HashMap;

use log::warn;

use crate::error::{SidError, SidResult};
use crate::sid::Sid;

/// A registry that records the original name alongside each identifier.
///
/// The hash function accepts every input and never reports a collision; a
/// consumer that cannot tolerate two names silently sharing an identifier
/// registers its names here instead of hashing them directly. The registry
/// keeps the first name that claimed each identifier and rejects any later
/// name that maps to a claimed identifier with a different spelling.
///
/// Registration is idempotent: registering the same name twice returns the
/// same identifier and is not an error.
///
/// # Examples
///
/// ```
/// use strid_core::{Sid, SidRegistry};
///
/// let mut registry = SidRegistry::new();
/// let id = registry.register("diffuse").unwrap();
/// assert_eq!(id, Sid::of("diffuse"));
/// assert_eq!(registry.resolve(id), Some("diffuse"));
/// ```
#[derive(Debug, Default)]
pub struct SidRegistry {
    names: HashMap<Sid, String>,
}

impl SidRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name, returning its identifier.
    ///
    /// Returns [`SidError::Collision`] if a different name already claimed
    /// the identifier. The collision is also logged at `warn` level, since in
    /// practice it is discovered far from the code that chose either name.
    pub fn register(&mut self, name: &str) -> SidResult<Sid> {
        let sid = Sid::of(name);
        match self.names.get(&sid) {
            Some(existing) if existing == name => Ok(sid),
            Some(existing) => {
                warn!(
                    "identifier collision: \"{}\" and \"{}\" both map to {}",
                    existing, name, sid
                );
                Err(SidError::Collision {
                    sid,
                    existing: existing.clone(),
                    incoming: name.to_string(),
                })
            }
            None => {
                self.names.insert(sid, name.to_string());
                Ok(sid)
            }
        }
    }

    /// Look up the original name for an identifier.
    pub fn resolve(&self, sid: Sid) -> Option<&str> {
        self.names.get(&sid).map(String::as_str)
    }

    /// True if the identifier has been claimed by some name.
    pub fn contains(&self, sid: Sid) -> bool {
        self.names.contains_key(&sid)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no names have been registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all registered `(identifier, name)` pairs.
    ///
    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (Sid, &str)> {
        self.names.iter().map(|(&sid, name)| (sid, name.as_str()))
    }
}

//! Memoizing cache for repeated name lookups.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::sid::Sid;

/// A shared memoization of name → [`Sid`].
///
/// Hashing is a pure function of the name, so this cache is strictly a
/// performance aid for callers that resolve the same names repeatedly (e.g. a
/// property panel rebuilding its bindings every refresh). Entries can never
/// become stale and there is no invalidation: a cached value is always equal
/// to what [`Sid::of`] would return.
///
/// # Thread Safety
///
/// `SidCache` is `Send + Sync`. Readers take a shared lock; a miss recomputes
/// outside any lock and inserts under the write lock. Two threads racing on
/// the same miss both insert the identical value, so either order is correct.
///
/// # Examples
///
/// ```
/// use strid_core::{Sid, SidCache};
///
/// let cache = SidCache::new();
/// assert_eq!(cache.id_of("diffuse"), Sid::of("diffuse"));
/// assert_eq!(cache.id_of("diffuse"), Sid::of("diffuse"));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SidCache {
    map: RwLock<HashMap<String, Sid>>,
}

impl SidCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the identifier for `name`, computing and memoizing it on the
    /// first call.
    pub fn id_of(&self, name: &str) -> Sid {
        // A poisoned lock still guards a valid map (every stored entry is a
        // pure function of its key), so recover the guard instead of
        // propagating the panic.
        if let Some(&sid) = self
            .map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return sid;
        }
        let sid = Sid::of(name);
        self.map
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), sid);
        sid
    }

    /// Number of memoized names.
    pub fn len(&self) -> usize {
        self.map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_cache_matches_direct_computation() {
        let cache = SidCache::new();
        for name in ["diffuse", "specular", "roughness", ""] {
            assert_eq!(cache.id_of(name), Sid::of(name));
            // Second lookup hits the memoized entry.
            assert_eq!(cache.id_of(name), Sid::of(name));
        }
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_cache_starts_empty() {
        let cache = SidCache::new();
        assert!(cache.is_empty());
        cache.id_of("color");
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_concurrent_lookups_agree() {
        let cache = Arc::new(SidCache::new());
        let names = ["intensity", "falloff", "radius", "spotAngle"];

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for _ in 0..100 {
                        for name in names {
                            assert_eq!(cache.id_of(name), Sid::of(name));
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker thread panicked");
        }
        assert_eq!(cache.len(), names.len());
    }
}

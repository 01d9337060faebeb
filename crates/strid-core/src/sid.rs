//! The `Sid` identifier type and its constructors.

use std::fmt;

use crate::hash::sid32_fast;

/// A stable 32-bit identifier derived from a name.
///
/// A `Sid` is an opaque token: two of them can be compared for equality and
/// used as map keys, but the numeric value has no arithmetic meaning and the
/// derived ordering exists only so `Sid` works in ordered collections.
///
/// Identifiers are pure derived values. `Sid::of("diffuse")` is the same on
/// every platform and in every process, and two names that happen to hash to
/// the same `Sid` are indistinguishable to every consumer (see
/// [`SidRegistry`](crate::SidRegistry) for opt-in collision detection).
///
/// # Examples
///
/// ```
/// use strid_core::Sid;
///
/// const DIFFUSE: Sid = Sid::of("diffuse");
/// assert_eq!(DIFFUSE, Sid::of("diffuse"));
/// assert_eq!(DIFFUSE.raw(), 0xCC32F6F0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sid(u32);

impl Sid {
    /// Compute the identifier for a name.
    #[inline]
    pub const fn of(name: &str) -> Self {
        Self(sid32_fast(name.as_bytes()))
    }

    /// Compute the identifier for a raw byte sequence.
    #[inline]
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        Self(sid32_fast(bytes))
    }

    /// Wrap an already-computed identifier value.
    ///
    /// Used by generated constants and by callers that persisted the raw
    /// value. The value is taken as-is; nothing is rehashed.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw 32-bit value, as shared with other implementations of the
    /// scheme.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Compute the identifier for a name.
///
/// Free-function convenience for [`Sid::of`].
///
/// ```
/// use strid_core::{sid, Sid};
///
/// assert_eq!(sid("specular"), Sid::of("specular"));
/// ```
#[inline]
pub const fn sid(name: &str) -> Sid {
    Sid::of(name)
}

// Fixed-width hex on both impls so log lines compare 1:1 across the
// implementations on either side of the contract.
impl fmt::Debug for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sid(0x{:08x})", self.0)
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl From<Sid> for u32 {
    fn from(sid: Sid) -> u32 {
        sid.raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_matches_from_bytes() {
        assert_eq!(Sid::of("baseColor"), Sid::from_bytes(b"baseColor"));
    }

    #[test]
    fn test_raw_round_trip() {
        let id = Sid::of("metallic");
        assert_eq!(Sid::from_raw(id.raw()), id);
        assert_eq!(u32::from(id), id.raw());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(Sid::of("").raw(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_display_fixed_width() {
        assert_eq!(Sid::from_raw(0xCC32_F6F0).to_string(), "0xcc32f6f0");
        assert_eq!(Sid::from_raw(0x0000_00FF).to_string(), "0x000000ff");
        assert_eq!(
            format!("{:?}", Sid::from_raw(0x0000_00FF)),
            "Sid(0x000000ff)"
        );
    }

    #[test]
    fn test_const_declaration() {
        const SORT: Sid = Sid::of("SORT");
        assert_eq!(SORT.raw(), 0xB90A_3F75);
    }
}

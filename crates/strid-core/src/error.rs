//! Error types for the strid crates.

use std::fmt;

use crate::sid::Sid;

/// Errors that can occur when registering names.
///
/// The hash function itself is total and never fails; the only failure mode
/// in the whole scheme is two distinct names claiming the same identifier,
/// and that is only surfaced by the opt-in [`SidRegistry`](crate::SidRegistry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidError {
    /// Two distinct names mapped to the same identifier.
    Collision {
        /// The contested identifier.
        sid: Sid,
        /// The name that claimed the identifier first.
        existing: String,
        /// The name whose registration was rejected.
        incoming: String,
    },
}

impl fmt::Display for SidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collision {
                sid,
                existing,
                incoming,
            } => write!(
                f,
                "identifier collision: \"{}\" and \"{}\" both map to {}",
                existing, incoming, sid
            ),
        }
    }
}

impl std::error::Error for SidError {}

/// Result type for strid operations.
pub type SidResult<T> = Result<T, SidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_display() {
        let err = SidError::Collision {
            sid: Sid::from_raw(0x9720_7E76),
            existing: "eg_flat0".to_string(),
            incoming: "ks_diffuse10".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "identifier collision: \"eg_flat0\" and \"ks_diffuse10\" both map to 0x97207e76"
        );
    }
}

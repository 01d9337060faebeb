//! # strid-core
//!
//! Core of the stable string identifier ("SID") scheme: a fixed CRC-32
//! variant that maps a name to a 32-bit identifier, identically in every
//! implementation of the scheme on every platform.
//!
//! The hash is the compatibility contract; everything else in this crate is
//! ergonomics around it:
//!
//! - [`sid32`] / [`sid32_fast`] - the hash function (bit-serial reference and
//!   table-driven fast path, proven equal by tests)
//! - [`Sid`] - opaque identifier type with `const` constructors
//! - [`SidCache`] - optional shared memoization for repeated lookups
//! - [`SidRegistry`] - optional collision detection with reverse lookup
//! - [`SidError`] - the one failure mode (a registry collision)
//!
//! This crate is format- and consumer-agnostic: property panels, material
//! systems, and shader bindings all sit on top of the same two operations,
//! "name to id" and (optionally) "id back to registered name".

pub mod cache;
pub mod error;
pub mod hash;
pub mod registry;
pub mod sid;

// Re-exports for convenience
pub use cache::SidCache;
pub use error::{SidError, SidResult};
pub use hash::{sid32, sid32_fast};
pub use registry::SidRegistry;
pub use sid::{sid, Sid};

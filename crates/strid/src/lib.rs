//! # strid
//!
//! Stable string identifiers: map a name to a fixed 32-bit id, identically on
//! every platform and in every implementation of the scheme.
//!
//! This facade re-exports the full public surface:
//!
//! ```
//! use strid::{sid, Sid, SidRegistry};
//!
//! const DIFFUSE: Sid = Sid::of("diffuse");
//! assert_eq!(sid("diffuse"), DIFFUSE);
//!
//! let mut registry = SidRegistry::new();
//! let id = registry.register("diffuse").unwrap();
//! assert_eq!(registry.resolve(id), Some("diffuse"));
//! ```
//!
//! With the default `macros` feature, constants can be declared in bulk with
//! compile-time collision checking:
//!
//! ```
//! strid::sids! {
//!     INTENSITY = "lamp.intensity",
//!     COLOR = "lamp.color",
//! }
//!
//! assert_eq!(INTENSITY, strid::Sid::of("lamp.intensity"));
//! ```

pub use strid_core::{sid, sid32, sid32_fast, Sid, SidCache, SidError, SidRegistry, SidResult};

#[cfg(feature = "macros")]
pub use strid_macros::sids;

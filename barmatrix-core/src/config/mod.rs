//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware validates its
//! channel table at build time with these same types.

pub mod types;

pub use types::*;

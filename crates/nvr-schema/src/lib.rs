//! Shared identity records for RPM-style package identities.
//!
//! A package is identified by Name, Epoch, Version, Release and (optionally)
//! Architecture. This crate owns the value types for those identities and
//! the validation that keeps them well formed; parsing, formatting and
//! ordering live in `nvr-core`.

pub mod arch;
pub mod epoch;
pub mod error;
pub mod types;

// Re-exports
pub use arch::*;
pub use epoch::*;
pub use error::*;
pub use types::*;

/// Separator between name, version and release.
pub const FIELD_SEPARATOR: char = '-';

/// Separator between the epoch and the rest of the identity.
pub const EPOCH_SEPARATOR: char = ':';

/// Literal package file suffix recognized (and discarded) by the NVRA grammar.
pub const RPM_SUFFIX: &str = ".rpm";

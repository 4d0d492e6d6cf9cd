//! Parsing, formatting and ordering of RPM-style package identities.
//!
//! Three layers, each using only the ones below it:
//!
//! - [`segment`]: splits a version or release label into digit and letter runs
//! - [`parse`] / [`format`]: identity strings to records and back
//! - [`compare`]: the total order over EVRs ("label compare")
//!
//! Everything here is a pure function over immutable values; there is no
//! global state and every call is safe to make from any thread.
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use nvr_core::{EpochPolicy, compare_nvr, make_nvr, parse_nvr};
//!
//! let old = parse_nvr("net-snmp-5.3.2.2-5.el5").unwrap();
//! let new = parse_nvr("net-snmp-1:5.3.1-1.el5").unwrap();
//! assert_eq!(compare_nvr(&old, &new), Ordering::Less);
//! assert_eq!(make_nvr(&new, EpochPolicy::NonZero), "net-snmp-1:5.3.1-1.el5");
//! ```

pub mod compare;
pub mod format;
pub mod parse;
pub mod segment;

pub use compare::{
    compare_epochs, compare_evr, compare_labels, compare_nvr, compare_nvra, newest,
    ordering_to_int, sort_by_evr,
};
pub use format::{EpochPolicy, make_evr, make_nvr, make_nvra};
pub use parse::{parse_evr, parse_nvr, parse_nvra, split_nvr_epoch};

pub use nvr_schema::{Arch, Epoch, Evr, IdentityError, MalformedReason, Nvr, Nvra};

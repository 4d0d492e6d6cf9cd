//! nvr - parse, format and order package identities
//!
//! Command-line front end over `nvr-core`. Every subcommand takes
//! identities as arguments, or one per line on stdin when none are given.
//!
//! ```text
//! $ nvr parse --kind nvra /srv/repo/bash-5.2-1.fc39.x86_64.rpm
//! $ nvr format --epoch-policy always net-snmp-5.3.2.2-5.el5
//! net-snmp-0:5.3.2.2-5.el5
//! $ nvr compare 1.0-1 1:0.9-1 --kind evr
//! -1
//! ```
#![allow(clippy::missing_errors_doc)]

pub mod cmd;
pub mod identity;
pub mod input;

pub use identity::{Identity, Kind};

use clap::{Parser, Subcommand};
use nvr_core::EpochPolicy;

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(name = "nvr")]
#[command(
    author,
    version,
    about = "nvr - parse, format and order package identities"
)]
pub struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true, env = "NVR_JSON")]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse identities and show their fields
    Parse {
        /// Grammar to parse with
        #[arg(long, short, value_enum, default_value_t = Kind::Nvr)]
        kind: Kind,
        /// Accept `[E:]version` without a release (EVR only)
        #[arg(long)]
        allow_empty_release: bool,
        /// Identities (read from stdin when omitted)
        ids: Vec<String>,
    },
    /// Re-render identities in canonical form
    Format {
        /// Grammar to parse with
        #[arg(long, short, value_enum, default_value_t = Kind::Nvr)]
        kind: Kind,
        /// When to show the epoch: omit, non-zero or always
        #[arg(long, env = "NVR_EPOCH_POLICY", default_value = "non-zero")]
        epoch_policy: EpochPolicy,
        /// Append `.rpm` (NVRA only)
        #[arg(long)]
        rpm: bool,
        /// Identities (read from stdin when omitted)
        ids: Vec<String>,
    },
    /// Compare two identities by epoch, version and release (-1, 0 or 1)
    Compare {
        /// Grammar to parse with
        #[arg(long, short, value_enum, default_value_t = Kind::Nvr)]
        kind: Kind,
        /// Left-hand identity
        a: String,
        /// Right-hand identity
        b: String,
    },
    /// Order identities oldest first
    Sort {
        /// Grammar to parse with
        #[arg(long, short, value_enum, default_value_t = Kind::Nvr)]
        kind: Kind,
        /// Newest first
        #[arg(long, short)]
        reverse: bool,
        /// Only print the newest identity
        #[arg(long, conflicts_with = "reverse")]
        newest: bool,
        /// Identities (read from stdin when omitted)
        ids: Vec<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

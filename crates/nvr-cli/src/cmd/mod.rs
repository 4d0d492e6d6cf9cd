//! Command modules - one file per CLI command

pub mod compare;
pub mod completions;
pub mod format;
pub mod parse;
pub mod sort;

use anyhow::{Context, Result};

use crate::identity::{Identity, Kind};

/// Parse every id, stopping at the first malformed one.
pub(crate) fn parse_all(
    kind: Kind,
    ids: &[String],
    allow_empty_release: bool,
) -> Result<Vec<Identity>> {
    tracing::debug!(count = ids.len(), ?kind, "parsing identities");
    ids.iter()
        .map(|id| {
            Identity::parse(kind, id, allow_empty_release)
                .with_context(|| format!("Failed to parse '{id}'"))
        })
        .collect()
}

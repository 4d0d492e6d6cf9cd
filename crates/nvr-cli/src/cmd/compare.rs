//! Compare command

use anyhow::{Context, Result};
use nvr_core::{compare_evr, ordering_to_int};
use serde::Serialize;

use crate::identity::{Identity, Kind};

#[derive(Serialize)]
struct Comparison<'a> {
    a: &'a str,
    b: &'a str,
    result: i32,
}

/// Print -1, 0 or 1 as `a` is older than, equal to, or newer than `b`
pub fn compare(kind: Kind, a: &str, b: &str, json: bool) -> Result<()> {
    let left = Identity::parse(kind, a, true).with_context(|| format!("Failed to parse '{a}'"))?;
    let right = Identity::parse(kind, b, true).with_context(|| format!("Failed to parse '{b}'"))?;

    if left.name().is_some() && left.name() != right.name() {
        tracing::warn!(a, b, "comparing identities with different names");
    }

    let result = ordering_to_int(compare_evr(left.as_ref(), right.as_ref()));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&Comparison { a, b, result })?
        );
    } else {
        println!("{result}");
    }
    Ok(())
}

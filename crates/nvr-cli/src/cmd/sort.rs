//! Sort command

use anyhow::Result;
use nvr_core::{Evr, newest, sort_by_evr};

use crate::identity::{Identity, Kind};

/// An identity alongside the text it was parsed from.
struct Entry<'a> {
    raw: &'a str,
    identity: Identity,
}

impl AsRef<Evr> for Entry<'_> {
    fn as_ref(&self) -> &Evr {
        self.identity.as_ref()
    }
}

/// Print identities oldest first (or newest first with `reverse`)
pub fn sort(
    kind: Kind,
    ids: &[String],
    reverse: bool,
    only_newest: bool,
    json: bool,
) -> Result<()> {
    let mut entries: Vec<Entry<'_>> = ids
        .iter()
        .zip(super::parse_all(kind, ids, true)?)
        .map(|(raw, identity)| Entry { raw, identity })
        .collect();

    let ordered: Vec<&str> = if only_newest {
        newest(&entries).map(|e| e.raw).into_iter().collect()
    } else {
        sort_by_evr(&mut entries);
        if reverse {
            entries.reverse();
        }
        entries.iter().map(|e| e.raw).collect()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&ordered)?);
    } else {
        for raw in ordered {
            println!("{raw}");
        }
    }
    Ok(())
}

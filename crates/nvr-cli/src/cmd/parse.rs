//! Parse command

use anyhow::Result;
use nvr_core::Evr;

use crate::identity::{Identity, Kind};

/// Show the fields of each identity
pub fn parse(kind: Kind, ids: &[String], allow_empty_release: bool, json: bool) -> Result<()> {
    let parsed = super::parse_all(kind, ids, allow_empty_release)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    for (id, identity) in ids.iter().zip(&parsed) {
        print_fields(id, identity);
    }
    Ok(())
}

fn print_fields(id: &str, identity: &Identity) {
    let lw = 10;
    let evr: &Evr = identity.as_ref();

    println!("{id}");
    if let Some(name) = identity.name() {
        println!("  {:<lw$}{}", "name", name);
    }
    println!(
        "  {:<lw$}{}",
        "epoch",
        evr.epoch().map_or("", |e| e.as_str())
    );
    println!("  {:<lw$}{}", "version", evr.version());
    println!("  {:<lw$}{}", "release", evr.release());
    if let Some(arch) = identity.arch() {
        println!("  {:<lw$}{}", "arch", arch);
        println!("  {:<lw$}{}", "source", identity.is_source());
    }
}

//! Format command

use anyhow::Result;
use nvr_core::EpochPolicy;

use crate::identity::Kind;

/// Re-render each identity under `policy`
pub fn format(
    kind: Kind,
    ids: &[String],
    policy: EpochPolicy,
    add_rpm: bool,
    json: bool,
) -> Result<()> {
    let rendered: Vec<String> = super::parse_all(kind, ids, true)?
        .iter()
        .map(|identity| identity.format(policy, add_rpm))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        for line in &rendered {
            println!("{line}");
        }
    }
    Ok(())
}

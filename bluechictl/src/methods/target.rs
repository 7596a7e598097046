use anyhow::{Context, Result};
use bluechi::api::OrgEclipseBluechiNode;
use bluechi::types::EnablementChange;
use bluechi::{Client, NodeName};

use super::enablement::print_changes;

pub fn get_default(client: &Client, node: &str) -> Result<()> {
    let node = NodeName::new(node)?;
    let target = client
        .node(&node)
        .get_default_target()
        .with_context(|| format!("getting the default target of node {node} failed"))?;
    println!("{target}");
    Ok(())
}

pub fn set_default(client: &Client, node: &str, target: &str, force: bool) -> Result<()> {
    let node = NodeName::new(node)?;
    let changes: Vec<EnablementChange> = client
        .node(&node)
        .set_default_target(target, force)
        .with_context(|| format!("setting the default target of node {node} failed"))?
        .into_iter()
        .map(EnablementChange::from)
        .collect();
    print_changes(&changes);
    Ok(())
}

use anyhow::{Context, Result};
use bluechi::types::NodeInfo;
use bluechi::Client;

pub fn list_nodes(client: &Client) -> Result<()> {
    let nodes = client.list_nodes().context("listing nodes failed")?;
    print!("{}", render_nodes(&nodes));
    Ok(())
}

fn render_nodes(nodes: &[NodeInfo]) -> String {
    let mut out = String::from("BlueChi nodes:\n================\n");
    for node in nodes {
        out.push_str(&format!(
            "Name: {}\nPath: {}\nStatus: {}\n\n",
            node.name, node.path, node.status
        ));
    }
    out
}

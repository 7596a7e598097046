use anyhow::{bail, Context, Result};
use bluechi::api::{OrgEclipseBluechiManager, OrgEclipseBluechiNode};
use bluechi::{Client, NodeName};

const LOG_LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];

pub fn set_loglevel(client: &Client, node: Option<&str>, level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level) {
        bail!("invalid log level {level:?}, expected one of {}", LOG_LEVELS.join(", "));
    }
    match node {
        Some(node) => {
            let node = NodeName::new(node)?;
            OrgEclipseBluechiNode::set_log_level(&client.node(&node), level)
                .with_context(|| format!("setting the log level on node {node} failed"))
        }
        None => OrgEclipseBluechiManager::set_log_level(&client.manager(), level)
            .context("setting the manager log level failed"),
    }
}

#[cfg(test)]
mod test {
    use super::LOG_LEVELS;

    #[test]
    fn known_levels() {
        for level in ["debug", "info", "warn", "error"] {
            assert!(LOG_LEVELS.contains(&level));
        }
        assert!(!LOG_LEVELS.contains(&"trace"));
    }
}

use anyhow::{Context, Result};
use bluechi::api::OrgEclipseBluechiNode;
use bluechi::types::{EnableUnitFilesResponse, EnablementChange, EnablementChangeKind};
use bluechi::{Client, NodeName, UnitName};

pub fn enable(client: &Client, node: &str, units: &[String], runtime: bool, force: bool) -> Result<()> {
    let node = NodeName::new(node)?;
    let files = validated(units)?;

    let response: EnableUnitFilesResponse = client
        .node(&node)
        .enable_unit_files(files.iter().map(|u| &**u).collect(), runtime, force)
        .with_context(|| format!("enabling unit files on node {node} failed"))?
        .into();

    if response.carries_install_info {
        println!("The unit files included enablement information");
    } else {
        println!("The unit files did not include any enablement information");
    }
    print_changes(&response.changes);
    Ok(())
}

pub fn disable(client: &Client, node: &str, units: &[String], runtime: bool) -> Result<()> {
    let node = NodeName::new(node)?;
    let files = validated(units)?;

    let changes: Vec<EnablementChange> = client
        .node(&node)
        .disable_unit_files(files.iter().map(|u| &**u).collect(), runtime)
        .with_context(|| format!("disabling unit files on node {node} failed"))?
        .into_iter()
        .map(EnablementChange::from)
        .collect();

    print_changes(&changes);
    Ok(())
}

fn validated(units: &[String]) -> Result<Vec<UnitName>> {
    units
        .iter()
        .map(|u| UnitName::new(u.as_str()).map_err(Into::into))
        .collect()
}

pub(crate) fn print_changes(changes: &[EnablementChange]) {
    for change in changes {
        print!("{}", render_change(change));
    }
}

fn render_change(change: &EnablementChange) -> String {
    match &change.kind {
        EnablementChangeKind::Symlink => {
            format!("Created symlink {} -> {}\n", change.file, change.destination)
        }
        EnablementChangeKind::Unlink => format!("Removed \"{}\".\n", change.file),
        EnablementChangeKind::Other(op) => {
            format!("{} {} {}\n", op, change.file, change.destination)
        }
    }
}

#[cfg(test)]
mod test {
    use super::render_change;
    use bluechi::types::EnablementChange;

    #[test]
    fn symlink_and_unlink_lines() {
        let ch = EnablementChange::from((
            "symlink".to_string(),
            "/etc/systemd/system/multi-user.target.wants/nginx.service".to_string(),
            "/usr/lib/systemd/system/nginx.service".to_string(),
        ));
        assert_eq!(
            render_change(&ch),
            "Created symlink /etc/systemd/system/multi-user.target.wants/nginx.service \
             -> /usr/lib/systemd/system/nginx.service\n"
        );

        let ch = EnablementChange::from((
            "unlink".to_string(),
            "/etc/systemd/system/multi-user.target.wants/nginx.service".to_string(),
            String::new(),
        ));
        assert_eq!(
            render_change(&ch),
            "Removed \"/etc/systemd/system/multi-user.target.wants/nginx.service\".\n"
        );
    }
}

use anyhow::{Context, Result};
use bluechi::api::{OrgEclipseBluechiManager, OrgEclipseBluechiNode};
use bluechi::types::{NodeUnitInfo, UnitInfo};
use bluechi::{Client, NodeName, UnitName};
use log::debug;

use super::render_table;

const UNIT_TABLE_HEADER: [&str; 6] = ["NODE", "UNIT", "LOADED", "ACTIVE", "SUB", "DESCRIPTION"];

pub fn list_units(client: &Client, node: Option<&str>) -> Result<()> {
    let units = match node {
        Some(node) => {
            let name = NodeName::new(node)?;
            debug!("listing units on {}", name);
            let units: Vec<UnitInfo> =
                OrgEclipseBluechiNode::list_units(&client.node(&name))
                    .with_context(|| format!("listing units on node {node} failed"))?
                    .into_iter()
                    .map(UnitInfo::from)
                    .collect();
            units
                .into_iter()
                .map(|unit| NodeUnitInfo { node: name.to_string(), unit })
                .collect()
        }
        None => {
            debug!("listing units on all nodes");
            OrgEclipseBluechiManager::list_units(&client.manager())
                .context("listing units on all nodes failed")?
                .into_iter()
                .map(NodeUnitInfo::from)
                .collect::<Vec<_>>()
        }
    };
    print!("{}", render_units(&units));
    Ok(())
}

fn render_units(units: &[NodeUnitInfo]) -> String {
    let rows: Vec<Vec<String>> = units
        .iter()
        .map(|nu| {
            vec![
                nu.node.clone(),
                nu.unit.id.clone(),
                nu.unit.load_state.clone(),
                nu.unit.active_state.clone(),
                nu.unit.sub_state.clone(),
                nu.unit.description.clone(),
            ]
        })
        .collect();
    render_table(&UNIT_TABLE_HEADER, &rows)
}

pub fn list_unit_files(client: &Client, node: &str) -> Result<()> {
    let name = NodeName::new(node)?;
    let files = client
        .node(&name)
        .list_unit_files()
        .with_context(|| format!("listing unit files on node {node} failed"))?;
    let rows: Vec<Vec<String>> = files.into_iter().map(|(path, state)| vec![path, state]).collect();
    print!("{}", render_table(&["PATH", "STATE"], &rows));
    Ok(())
}

pub fn is_enabled(client: &Client, node: &str, unit: &str) -> Result<()> {
    let name = NodeName::new(node)?;
    let unit = UnitName::new(unit)?;
    let state = client
        .node(&name)
        .get_unit_file_state(&unit)
        .with_context(|| format!("getting the state of {unit} on node {name} failed"))?;
    println!("{state}");
    Ok(())
}

#[cfg(test)]
mod test {
    use super::render_units;
    use bluechi::types::{NodeUnitInfo, UnitInfo};

    fn unit(id: &str, active: &str) -> UnitInfo {
        UnitInfo {
            id: id.to_string(),
            description: format!("{id} description"),
            load_state: "loaded".to_string(),
            active_state: active.to_string(),
            sub_state: "running".to_string(),
            following: String::new(),
            unit_path: dbus::Path::from("/u"),
            job_id: 0,
            job_type: String::new(),
            job_path: dbus::Path::from("/"),
        }
    }

    #[test]
    fn header_and_rows() {
        let units = [
            NodeUnitInfo { node: "worker1".to_string(), unit: unit("nginx.service", "active") },
            NodeUnitInfo { node: "worker2".to_string(), unit: unit("a.timer", "inactive") },
        ];
        let out = render_units(&units);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("NODE    | UNIT"));
        assert!(lines[1].starts_with("---"));
        assert!(lines[2].starts_with("worker1 | nginx.service | loaded | active"));
        assert!(lines[3].contains("a.timer"));
    }

    #[test]
    fn empty_table_is_header_and_rule_only() {
        let out = render_units(&[]);
        assert_eq!(out.lines().count(), 2);
    }
}

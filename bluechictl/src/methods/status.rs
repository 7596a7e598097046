use anyhow::{Context, Result};
use bluechi::api::OrgEclipseBluechiNode;
use bluechi::{Client, NodeName, UnitName};
use dbus::arg;
use log::debug;

use super::render_table;

const SYSTEMD_UNIT_INTERFACE: &str = "org.freedesktop.systemd1.Unit";

const STATUS_TABLE_HEADER: [&str; 6] =
    ["UNIT", "LOADED", "ACTIVE", "SUBSTATE", "FREEZERSTATE", "ENABLED"];

pub fn status(client: &Client, node: &str, units: &[String]) -> Result<()> {
    let node = NodeName::new(node)?;
    let proxy = client.node(&node);

    if units.is_empty() {
        let name = proxy
            .name()
            .with_context(|| format!("reading properties of node {node} failed"))?;
        let status = proxy.status()?;
        let last_seen = proxy.last_seen_timestamp()?;
        println!("Node: {name}");
        println!("Status: {status}");
        println!("Last seen: {last_seen}");
        return Ok(());
    }

    let mut rows = Vec::new();
    for unit in units {
        let unit = UnitName::new(unit.as_str())?;
        let props = match proxy.get_unit_properties(&unit, SYSTEMD_UNIT_INTERFACE) {
            Ok(props) => props,
            Err(e) => {
                debug!("GetUnitProperties for {} failed: {}", unit, e);
                eprintln!("Unit {} could not be found.", unit);
                continue;
            }
        };
        let enabled = proxy
            .get_unit_file_state(&unit)
            .unwrap_or_else(|_| "-".to_string());
        rows.push(status_row(&unit, &props, enabled));
    }
    print!("{}", render_table(&STATUS_TABLE_HEADER, &rows));
    Ok(())
}

fn status_row(unit: &UnitName, props: &arg::PropMap, enabled: String) -> Vec<String> {
    let prop = |key: &str| {
        arg::prop_cast::<String>(props, key)
            .cloned()
            .unwrap_or_else(|| "-".to_string())
    };
    vec![
        unit.to_string(),
        prop("LoadState"),
        prop("ActiveState"),
        prop("SubState"),
        prop("FreezerState"),
        enabled,
    ]
}

#[cfg(test)]
mod test {
    use super::status_row;
    use bluechi::UnitName;
    use dbus::arg::{PropMap, Variant};

    #[test]
    fn row_from_properties() {
        let mut props = PropMap::new();
        props.insert("LoadState".to_string(), Variant(Box::new("loaded".to_string())));
        props.insert("ActiveState".to_string(), Variant(Box::new("active".to_string())));
        props.insert("SubState".to_string(), Variant(Box::new("running".to_string())));
        props.insert("FreezerState".to_string(), Variant(Box::new("running".to_string())));

        let unit = UnitName::new("nginx.service").unwrap();
        let row = status_row(&unit, &props, "enabled".to_string());
        assert_eq!(row, ["nginx.service", "loaded", "active", "running", "running", "enabled"]);
    }

    #[test]
    fn missing_properties_become_dashes() {
        let unit = UnitName::new("ghost.service").unwrap();
        let row = status_row(&unit, &PropMap::new(), "-".to_string());
        assert_eq!(row, ["ghost.service", "-", "-", "-", "-", "-"]);
    }
}

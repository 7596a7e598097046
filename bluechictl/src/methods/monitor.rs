use std::time::Duration;

use anyhow::{Context, Result};
use bluechi::api::{
    OrgEclipseBluechiMonitor, UnitNew, UnitPropertiesChanged, UnitRemoved, UnitStateChanged,
};
use bluechi::{Client, NodeName, UnitName};
use dbus::arg::RefArg;
use dbus::message::SignalArgs;
use log::debug;

/// Creates a monitor, subscribes to the requested node and unit (`*` when
/// omitted) and prints every unit event until interrupted.
pub fn monitor(client: &Client, node: Option<&str>, unit: Option<&str>) -> Result<()> {
    // Validate real names; the wildcard goes through as-is.
    if let Some(node) = node {
        NodeName::new(node)?;
    }
    if let Some(unit) = unit {
        UnitName::new(unit)?;
    }
    let node = node.unwrap_or("*");
    let unit = unit.unwrap_or("*");

    let monitor = client.create_monitor().context("creating a monitor failed")?;
    println!("Monitor path: {}", monitor.path);

    let id = monitor
        .subscribe(node, unit)
        .with_context(|| format!("subscribing to {unit} on {node} failed"))?;
    debug!("subscription id {}", id);

    let conn = client.connection();
    conn.add_match(UnitNew::match_rule(None, None).static_clone(), |sig: UnitNew, _, _| {
        println!("[{}] {}\n\tUnit created (reason: {})", sig.node, sig.unit, sig.reason);
        true
    })?;
    conn.add_match(
        UnitRemoved::match_rule(None, None).static_clone(),
        |sig: UnitRemoved, _, _| {
            println!("[{}] {}\n\tUnit removed (reason: {})", sig.node, sig.unit, sig.reason);
            true
        },
    )?;
    conn.add_match(
        UnitStateChanged::match_rule(None, None).static_clone(),
        |sig: UnitStateChanged, _, _| {
            println!(
                "[{}] {}\n\tUnit state changed (reason: {})\n\tActive: {} ({})",
                sig.node, sig.unit, sig.reason, sig.active_state, sig.sub_state
            );
            true
        },
    )?;
    conn.add_match(
        UnitPropertiesChanged::match_rule(None, None).static_clone(),
        |sig: UnitPropertiesChanged, _, _| {
            println!(
                "[{}] {}\n\tUnit properties changed (Interface: {})",
                sig.node, sig.unit, sig.interface
            );
            for (key, value) in &sig.properties {
                if let Some(s) = value.0.as_str() {
                    println!("\t{}: {}", key, s);
                }
            }
            true
        },
    )?;

    loop {
        client.process(Duration::from_millis(1000))?;
    }
}

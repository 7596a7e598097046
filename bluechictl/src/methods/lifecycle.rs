use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use bluechi::api::{JobRemoved, OrgEclipseBluechiNode};
use bluechi::{Client, NodeName, UnitName};
use dbus::message::SignalArgs;
use log::debug;

#[derive(Clone, Copy)]
pub enum LifecycleOp {
    Start,
    Stop,
    Restart,
    Reload,
}

impl LifecycleOp {
    fn verb(self) -> &'static str {
        match self {
            LifecycleOp::Start => "start",
            LifecycleOp::Stop => "stop",
            LifecycleOp::Restart => "restart",
            LifecycleOp::Reload => "reload",
        }
    }
}

/// Runs a lifecycle operation and waits for the resulting job to finish.
///
/// The `JobRemoved` match is installed before the method call so the signal
/// cannot be lost between the reply and the first process() round.
pub fn lifecycle(client: &Client, node: &str, unit: &str, op: LifecycleOp) -> Result<()> {
    let node = NodeName::new(node)?;
    let unit = UnitName::new(unit)?;

    let finished: Arc<Mutex<Vec<JobRemoved>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = finished.clone();
    let rule = JobRemoved::match_rule(None, None).static_clone();
    let token = client.connection().add_match(rule, move |sig: JobRemoved, _, _| {
        sink.lock().unwrap().push(sig);
        true
    })?;

    let proxy = client.node(&node);
    let job = match op {
        LifecycleOp::Start => proxy.start_unit(&unit, "replace"),
        LifecycleOp::Stop => proxy.stop_unit(&unit, "replace"),
        LifecycleOp::Restart => proxy.restart_unit(&unit, "replace"),
        LifecycleOp::Reload => proxy.reload_unit(&unit, "replace"),
    }
    .with_context(|| format!("{} of {} on node {} failed", op.verb(), unit, node))?;
    debug!("waiting for job {}", job);

    let done = loop {
        let pos = finished.lock().unwrap().iter().position(|sig| sig.job == job);
        if let Some(pos) = pos {
            break finished.lock().unwrap().remove(pos);
        }
        client.process(Duration::from_millis(1000))?;
    };
    client.connection().remove_match(token)?;

    println!("Unit {} {} operation result: {}", done.unit, op.verb(), done.result);
    Ok(())
}

pub fn freeze(client: &Client, node: &str, unit: &str) -> Result<()> {
    let node = NodeName::new(node)?;
    let unit = UnitName::new(unit)?;
    client
        .node(&node)
        .freeze_unit(&unit)
        .with_context(|| format!("freezing {unit} on node {node} failed"))
}

pub fn thaw(client: &Client, node: &str, unit: &str) -> Result<()> {
    let node = NodeName::new(node)?;
    let unit = UnitName::new(unit)?;
    client
        .node(&node)
        .thaw_unit(&unit)
        .with_context(|| format!("thawing {unit} on node {node} failed"))
}

pub fn kill(client: &Client, node: &str, unit: &str, whom: &str, signal: i32) -> Result<()> {
    let node = NodeName::new(node)?;
    let unit = UnitName::new(unit)?;
    client
        .node(&node)
        .kill_unit(&unit, whom, signal)
        .with_context(|| format!("killing {unit} on node {node} failed"))
}

pub fn reset_failed(client: &Client, node: &str, units: &[String]) -> Result<()> {
    let node = NodeName::new(node)?;
    let proxy = client.node(&node);
    if units.is_empty() {
        return proxy
            .reset_failed()
            .with_context(|| format!("resetting the failed state of node {node} failed"));
    }
    for unit in units {
        let unit = UnitName::new(unit.as_str())?;
        proxy
            .reset_failed_unit(&unit)
            .with_context(|| format!("resetting the failed state of {unit} on node {node} failed"))?;
    }
    Ok(())
}

pub fn daemon_reload(client: &Client, node: &str) -> Result<()> {
    let node = NodeName::new(node)?;
    client
        .node(&node)
        .reload()
        .with_context(|| format!("daemon-reload on node {node} failed"))
}

#[cfg(test)]
mod test {
    use super::LifecycleOp;

    #[test]
    fn verbs() {
        assert_eq!(LifecycleOp::Start.verb(), "start");
        assert_eq!(LifecycleOp::Stop.verb(), "stop");
        assert_eq!(LifecycleOp::Restart.verb(), "restart");
        assert_eq!(LifecycleOp::Reload.verb(), "reload");
    }
}

//! Rust traits for the remote BlueChi interfaces, implemented for
//! [`dbus::blocking::Proxy`].
//!
//! The traits follow the shape `dbus-codegen` emits for client code: one
//! trait per interface, raw wire types in the signatures, one struct per
//! signal implementing [`dbus::message::SignalArgs`]. The typed views in
//! [`crate::types`] sit on top of these.
//!
//! ```no_run
//! use bluechi::api::OrgEclipseBluechiManager;
//! use dbus::blocking::Connection;
//! use std::time::Duration;
//!
//! let conn = Connection::new_system()?;
//! let proxy = conn.with_proxy(bluechi::BC_DBUS_NAME, bluechi::BC_OBJECT_PATH,
//!     Duration::from_secs(30));
//! for (name, _path, status) in proxy.list_nodes()? {
//!     println!("{name}: {status}");
//! }
//! # Ok::<(), dbus::Error>(())
//! ```

#![allow(missing_docs)]

use dbus::arg;
use dbus::blocking;

use crate::types::{NodeUnitTuple, UnitTuple};
use crate::{JOB_INTERFACE, MANAGER_INTERFACE, METRICS_INTERFACE, MONITOR_INTERFACE, NODE_INTERFACE};

/// A change record as returned by the enablement methods: operation type,
/// symlink and symlink destination.
pub type EnablementChangeTuple = (String, String, String);

/// Methods of the `org.eclipse.bluechi.Manager` interface.
pub trait OrgEclipseBluechiManager {
    fn list_nodes(&self) -> Result<Vec<(String, dbus::Path<'static>, String)>, dbus::Error>;
    fn get_node(&self, name: &str) -> Result<dbus::Path<'static>, dbus::Error>;
    fn list_units(&self) -> Result<Vec<NodeUnitTuple>, dbus::Error>;
    fn create_monitor(&self) -> Result<dbus::Path<'static>, dbus::Error>;
    fn enable_metrics(&self) -> Result<(), dbus::Error>;
    fn disable_metrics(&self) -> Result<(), dbus::Error>;
    fn set_log_level(&self, level: &str) -> Result<(), dbus::Error>;
    fn ping(&self, payload: &str) -> Result<String, dbus::Error>;
}

impl<'a, T: blocking::BlockingSender, C: ::std::ops::Deref<Target = T>> OrgEclipseBluechiManager
    for blocking::Proxy<'a, C>
{
    fn list_nodes(&self) -> Result<Vec<(String, dbus::Path<'static>, String)>, dbus::Error> {
        self.method_call(MANAGER_INTERFACE, "ListNodes", ())
            .and_then(|r: (Vec<(String, dbus::Path<'static>, String)>,)| Ok(r.0))
    }

    fn get_node(&self, name: &str) -> Result<dbus::Path<'static>, dbus::Error> {
        self.method_call(MANAGER_INTERFACE, "GetNode", (name,))
            .and_then(|r: (dbus::Path<'static>,)| Ok(r.0))
    }

    fn list_units(&self) -> Result<Vec<NodeUnitTuple>, dbus::Error> {
        self.method_call(MANAGER_INTERFACE, "ListUnits", ())
            .and_then(|r: (Vec<NodeUnitTuple>,)| Ok(r.0))
    }

    fn create_monitor(&self) -> Result<dbus::Path<'static>, dbus::Error> {
        self.method_call(MANAGER_INTERFACE, "CreateMonitor", ())
            .and_then(|r: (dbus::Path<'static>,)| Ok(r.0))
    }

    fn enable_metrics(&self) -> Result<(), dbus::Error> {
        self.method_call(MANAGER_INTERFACE, "EnableMetrics", ())
    }

    fn disable_metrics(&self) -> Result<(), dbus::Error> {
        self.method_call(MANAGER_INTERFACE, "DisableMetrics", ())
    }

    fn set_log_level(&self, level: &str) -> Result<(), dbus::Error> {
        self.method_call(MANAGER_INTERFACE, "SetLogLevel", (level,))
    }

    fn ping(&self, payload: &str) -> Result<String, dbus::Error> {
        self.method_call(MANAGER_INTERFACE, "Ping", (payload,))
            .and_then(|r: (String,)| Ok(r.0))
    }
}

/// Methods and properties of the `org.eclipse.bluechi.Node` interface.
pub trait OrgEclipseBluechiNode {
    fn list_units(&self) -> Result<Vec<UnitTuple>, dbus::Error>;
    fn start_unit(&self, name: &str, mode: &str) -> Result<dbus::Path<'static>, dbus::Error>;
    fn stop_unit(&self, name: &str, mode: &str) -> Result<dbus::Path<'static>, dbus::Error>;
    fn restart_unit(&self, name: &str, mode: &str) -> Result<dbus::Path<'static>, dbus::Error>;
    fn reload_unit(&self, name: &str, mode: &str) -> Result<dbus::Path<'static>, dbus::Error>;
    fn freeze_unit(&self, name: &str) -> Result<(), dbus::Error>;
    fn thaw_unit(&self, name: &str) -> Result<(), dbus::Error>;
    fn kill_unit(&self, name: &str, whom: &str, signal: i32) -> Result<(), dbus::Error>;
    fn reset_failed(&self) -> Result<(), dbus::Error>;
    fn reset_failed_unit(&self, name: &str) -> Result<(), dbus::Error>;
    fn enable_unit_files(
        &self,
        files: Vec<&str>,
        runtime: bool,
        force: bool,
    ) -> Result<(bool, Vec<EnablementChangeTuple>), dbus::Error>;
    fn disable_unit_files(
        &self,
        files: Vec<&str>,
        runtime: bool,
    ) -> Result<Vec<EnablementChangeTuple>, dbus::Error>;
    fn list_unit_files(&self) -> Result<Vec<(String, String)>, dbus::Error>;
    fn get_unit_file_state(&self, file: &str) -> Result<String, dbus::Error>;
    fn get_default_target(&self) -> Result<String, dbus::Error>;
    fn set_default_target(
        &self,
        target: &str,
        force: bool,
    ) -> Result<Vec<EnablementChangeTuple>, dbus::Error>;
    fn reload(&self) -> Result<(), dbus::Error>;
    fn set_log_level(&self, level: &str) -> Result<(), dbus::Error>;
    fn get_unit_properties(&self, name: &str, interface: &str) -> Result<arg::PropMap, dbus::Error>;
    fn get_unit_property(
        &self,
        name: &str,
        interface: &str,
        property: &str,
    ) -> Result<arg::Variant<Box<dyn arg::RefArg + 'static>>, dbus::Error>;
    fn set_unit_properties(
        &self,
        name: &str,
        runtime: bool,
        keyvalues: Vec<(&str, arg::Variant<Box<dyn arg::RefArg>>)>,
    ) -> Result<(), dbus::Error>;
    fn name(&self) -> Result<String, dbus::Error>;
    fn status(&self) -> Result<String, dbus::Error>;
    fn last_seen_timestamp(&self) -> Result<u64, dbus::Error>;
}

impl<'a, T: blocking::BlockingSender, C: ::std::ops::Deref<Target = T>> OrgEclipseBluechiNode
    for blocking::Proxy<'a, C>
{
    fn list_units(&self) -> Result<Vec<UnitTuple>, dbus::Error> {
        self.method_call(NODE_INTERFACE, "ListUnits", ())
            .and_then(|r: (Vec<UnitTuple>,)| Ok(r.0))
    }

    fn start_unit(&self, name: &str, mode: &str) -> Result<dbus::Path<'static>, dbus::Error> {
        self.method_call(NODE_INTERFACE, "StartUnit", (name, mode))
            .and_then(|r: (dbus::Path<'static>,)| Ok(r.0))
    }

    fn stop_unit(&self, name: &str, mode: &str) -> Result<dbus::Path<'static>, dbus::Error> {
        self.method_call(NODE_INTERFACE, "StopUnit", (name, mode))
            .and_then(|r: (dbus::Path<'static>,)| Ok(r.0))
    }

    fn restart_unit(&self, name: &str, mode: &str) -> Result<dbus::Path<'static>, dbus::Error> {
        self.method_call(NODE_INTERFACE, "RestartUnit", (name, mode))
            .and_then(|r: (dbus::Path<'static>,)| Ok(r.0))
    }

    fn reload_unit(&self, name: &str, mode: &str) -> Result<dbus::Path<'static>, dbus::Error> {
        self.method_call(NODE_INTERFACE, "ReloadUnit", (name, mode))
            .and_then(|r: (dbus::Path<'static>,)| Ok(r.0))
    }

    fn freeze_unit(&self, name: &str) -> Result<(), dbus::Error> {
        self.method_call(NODE_INTERFACE, "FreezeUnit", (name,))
    }

    fn thaw_unit(&self, name: &str) -> Result<(), dbus::Error> {
        self.method_call(NODE_INTERFACE, "ThawUnit", (name,))
    }

    fn kill_unit(&self, name: &str, whom: &str, signal: i32) -> Result<(), dbus::Error> {
        self.method_call(NODE_INTERFACE, "KillUnit", (name, whom, signal))
    }

    fn reset_failed(&self) -> Result<(), dbus::Error> {
        self.method_call(NODE_INTERFACE, "ResetFailed", ())
    }

    fn reset_failed_unit(&self, name: &str) -> Result<(), dbus::Error> {
        self.method_call(NODE_INTERFACE, "ResetFailedUnit", (name,))
    }

    fn enable_unit_files(
        &self,
        files: Vec<&str>,
        runtime: bool,
        force: bool,
    ) -> Result<(bool, Vec<EnablementChangeTuple>), dbus::Error> {
        self.method_call(NODE_INTERFACE, "EnableUnitFiles", (files, runtime, force))
    }

    fn disable_unit_files(
        &self,
        files: Vec<&str>,
        runtime: bool,
    ) -> Result<Vec<EnablementChangeTuple>, dbus::Error> {
        self.method_call(NODE_INTERFACE, "DisableUnitFiles", (files, runtime))
            .and_then(|r: (Vec<EnablementChangeTuple>,)| Ok(r.0))
    }

    fn list_unit_files(&self) -> Result<Vec<(String, String)>, dbus::Error> {
        self.method_call(NODE_INTERFACE, "ListUnitFiles", ())
            .and_then(|r: (Vec<(String, String)>,)| Ok(r.0))
    }

    fn get_unit_file_state(&self, file: &str) -> Result<String, dbus::Error> {
        self.method_call(NODE_INTERFACE, "GetUnitFileState", (file,))
            .and_then(|r: (String,)| Ok(r.0))
    }

    fn get_default_target(&self) -> Result<String, dbus::Error> {
        self.method_call(NODE_INTERFACE, "GetDefaultTarget", ())
            .and_then(|r: (String,)| Ok(r.0))
    }

    fn set_default_target(
        &self,
        target: &str,
        force: bool,
    ) -> Result<Vec<EnablementChangeTuple>, dbus::Error> {
        self.method_call(NODE_INTERFACE, "SetDefaultTarget", (target, force))
            .and_then(|r: (Vec<EnablementChangeTuple>,)| Ok(r.0))
    }

    fn reload(&self) -> Result<(), dbus::Error> {
        self.method_call(NODE_INTERFACE, "Reload", ())
    }

    fn set_log_level(&self, level: &str) -> Result<(), dbus::Error> {
        self.method_call(NODE_INTERFACE, "SetLogLevel", (level,))
    }

    fn get_unit_properties(&self, name: &str, interface: &str) -> Result<arg::PropMap, dbus::Error> {
        self.method_call(NODE_INTERFACE, "GetUnitProperties", (name, interface))
            .and_then(|r: (arg::PropMap,)| Ok(r.0))
    }

    fn get_unit_property(
        &self,
        name: &str,
        interface: &str,
        property: &str,
    ) -> Result<arg::Variant<Box<dyn arg::RefArg + 'static>>, dbus::Error> {
        self.method_call(NODE_INTERFACE, "GetUnitProperty", (name, interface, property))
            .and_then(|r: (arg::Variant<Box<dyn arg::RefArg + 'static>>,)| Ok(r.0))
    }

    fn set_unit_properties(
        &self,
        name: &str,
        runtime: bool,
        keyvalues: Vec<(&str, arg::Variant<Box<dyn arg::RefArg>>)>,
    ) -> Result<(), dbus::Error> {
        self.method_call(NODE_INTERFACE, "SetUnitProperties", (name, runtime, keyvalues))
    }

    fn name(&self) -> Result<String, dbus::Error> {
        <Self as blocking::stdintf::org_freedesktop_dbus::Properties>::get(self, NODE_INTERFACE, "Name")
    }

    fn status(&self) -> Result<String, dbus::Error> {
        <Self as blocking::stdintf::org_freedesktop_dbus::Properties>::get(self, NODE_INTERFACE, "Status")
    }

    fn last_seen_timestamp(&self) -> Result<u64, dbus::Error> {
        <Self as blocking::stdintf::org_freedesktop_dbus::Properties>::get(
            self,
            NODE_INTERFACE,
            "LastSeenTimestamp",
        )
    }
}

/// Methods of the `org.eclipse.bluechi.Monitor` interface.
///
/// Monitors are created with
/// [`OrgEclipseBluechiManager::create_monitor`]; `node` and `unit` accept the
/// `*` wildcard.
pub trait OrgEclipseBluechiMonitor {
    fn subscribe(&self, node: &str, unit: &str) -> Result<u32, dbus::Error>;
    fn unsubscribe(&self, id: u32) -> Result<(), dbus::Error>;
    fn close(&self) -> Result<(), dbus::Error>;
}

impl<'a, T: blocking::BlockingSender, C: ::std::ops::Deref<Target = T>> OrgEclipseBluechiMonitor
    for blocking::Proxy<'a, C>
{
    fn subscribe(&self, node: &str, unit: &str) -> Result<u32, dbus::Error> {
        self.method_call(MONITOR_INTERFACE, "Subscribe", (node, unit))
            .and_then(|r: (u32,)| Ok(r.0))
    }

    fn unsubscribe(&self, id: u32) -> Result<(), dbus::Error> {
        self.method_call(MONITOR_INTERFACE, "Unsubscribe", (id,))
    }

    fn close(&self) -> Result<(), dbus::Error> {
        self.method_call(MONITOR_INTERFACE, "Close", ())
    }
}

/// Methods and properties of the `org.eclipse.bluechi.Job` interface.
pub trait OrgEclipseBluechiJob {
    fn cancel(&self) -> Result<(), dbus::Error>;
    fn id(&self) -> Result<u32, dbus::Error>;
    fn node(&self) -> Result<String, dbus::Error>;
    fn unit(&self) -> Result<String, dbus::Error>;
    fn job_type(&self) -> Result<String, dbus::Error>;
    fn state(&self) -> Result<String, dbus::Error>;
}

impl<'a, T: blocking::BlockingSender, C: ::std::ops::Deref<Target = T>> OrgEclipseBluechiJob
    for blocking::Proxy<'a, C>
{
    fn cancel(&self) -> Result<(), dbus::Error> {
        self.method_call(JOB_INTERFACE, "Cancel", ())
    }

    fn id(&self) -> Result<u32, dbus::Error> {
        <Self as blocking::stdintf::org_freedesktop_dbus::Properties>::get(self, JOB_INTERFACE, "Id")
    }

    fn node(&self) -> Result<String, dbus::Error> {
        <Self as blocking::stdintf::org_freedesktop_dbus::Properties>::get(self, JOB_INTERFACE, "Node")
    }

    fn unit(&self) -> Result<String, dbus::Error> {
        <Self as blocking::stdintf::org_freedesktop_dbus::Properties>::get(self, JOB_INTERFACE, "Unit")
    }

    fn job_type(&self) -> Result<String, dbus::Error> {
        <Self as blocking::stdintf::org_freedesktop_dbus::Properties>::get(self, JOB_INTERFACE, "JobType")
    }

    fn state(&self) -> Result<String, dbus::Error> {
        <Self as blocking::stdintf::org_freedesktop_dbus::Properties>::get(self, JOB_INTERFACE, "State")
    }
}

/// The `Manager.JobNew` signal.
#[derive(Debug)]
pub struct JobNew {
    pub id: u32,
    pub job: dbus::Path<'static>,
}

impl arg::AppendAll for JobNew {
    fn append(&self, i: &mut arg::IterAppend) {
        arg::RefArg::append(&self.id, i);
        arg::RefArg::append(&self.job, i);
    }
}

impl arg::ReadAll for JobNew {
    fn read(i: &mut arg::Iter) -> Result<Self, arg::TypeMismatchError> {
        Ok(JobNew {
            id: i.read()?,
            job: i.read()?,
        })
    }
}

impl dbus::message::SignalArgs for JobNew {
    const NAME: &'static str = "JobNew";
    const INTERFACE: &'static str = MANAGER_INTERFACE;
}

/// The `Manager.JobRemoved` signal.
#[derive(Debug)]
pub struct JobRemoved {
    pub id: u32,
    pub job: dbus::Path<'static>,
    pub node: String,
    pub unit: String,
    pub result: String,
}

impl arg::AppendAll for JobRemoved {
    fn append(&self, i: &mut arg::IterAppend) {
        arg::RefArg::append(&self.id, i);
        arg::RefArg::append(&self.job, i);
        arg::RefArg::append(&self.node, i);
        arg::RefArg::append(&self.unit, i);
        arg::RefArg::append(&self.result, i);
    }
}

impl arg::ReadAll for JobRemoved {
    fn read(i: &mut arg::Iter) -> Result<Self, arg::TypeMismatchError> {
        Ok(JobRemoved {
            id: i.read()?,
            job: i.read()?,
            node: i.read()?,
            unit: i.read()?,
            result: i.read()?,
        })
    }
}

impl dbus::message::SignalArgs for JobRemoved {
    const NAME: &'static str = "JobRemoved";
    const INTERFACE: &'static str = MANAGER_INTERFACE;
}

/// The `Monitor.UnitNew` signal.
#[derive(Debug)]
pub struct UnitNew {
    pub node: String,
    pub unit: String,
    pub reason: String,
}

impl arg::AppendAll for UnitNew {
    fn append(&self, i: &mut arg::IterAppend) {
        arg::RefArg::append(&self.node, i);
        arg::RefArg::append(&self.unit, i);
        arg::RefArg::append(&self.reason, i);
    }
}

impl arg::ReadAll for UnitNew {
    fn read(i: &mut arg::Iter) -> Result<Self, arg::TypeMismatchError> {
        Ok(UnitNew {
            node: i.read()?,
            unit: i.read()?,
            reason: i.read()?,
        })
    }
}

impl dbus::message::SignalArgs for UnitNew {
    const NAME: &'static str = "UnitNew";
    const INTERFACE: &'static str = MONITOR_INTERFACE;
}

/// The `Monitor.UnitRemoved` signal.
#[derive(Debug)]
pub struct UnitRemoved {
    pub node: String,
    pub unit: String,
    pub reason: String,
}

impl arg::AppendAll for UnitRemoved {
    fn append(&self, i: &mut arg::IterAppend) {
        arg::RefArg::append(&self.node, i);
        arg::RefArg::append(&self.unit, i);
        arg::RefArg::append(&self.reason, i);
    }
}

impl arg::ReadAll for UnitRemoved {
    fn read(i: &mut arg::Iter) -> Result<Self, arg::TypeMismatchError> {
        Ok(UnitRemoved {
            node: i.read()?,
            unit: i.read()?,
            reason: i.read()?,
        })
    }
}

impl dbus::message::SignalArgs for UnitRemoved {
    const NAME: &'static str = "UnitRemoved";
    const INTERFACE: &'static str = MONITOR_INTERFACE;
}

/// The `Monitor.UnitStateChanged` signal.
#[derive(Debug)]
pub struct UnitStateChanged {
    pub node: String,
    pub unit: String,
    pub active_state: String,
    pub sub_state: String,
    pub reason: String,
}

impl arg::AppendAll for UnitStateChanged {
    fn append(&self, i: &mut arg::IterAppend) {
        arg::RefArg::append(&self.node, i);
        arg::RefArg::append(&self.unit, i);
        arg::RefArg::append(&self.active_state, i);
        arg::RefArg::append(&self.sub_state, i);
        arg::RefArg::append(&self.reason, i);
    }
}

impl arg::ReadAll for UnitStateChanged {
    fn read(i: &mut arg::Iter) -> Result<Self, arg::TypeMismatchError> {
        Ok(UnitStateChanged {
            node: i.read()?,
            unit: i.read()?,
            active_state: i.read()?,
            sub_state: i.read()?,
            reason: i.read()?,
        })
    }
}

impl dbus::message::SignalArgs for UnitStateChanged {
    const NAME: &'static str = "UnitStateChanged";
    const INTERFACE: &'static str = MONITOR_INTERFACE;
}

/// The `Monitor.UnitPropertiesChanged` signal.
#[derive(Debug)]
pub struct UnitPropertiesChanged {
    pub node: String,
    pub unit: String,
    pub interface: String,
    pub properties: arg::PropMap,
}

impl arg::AppendAll for UnitPropertiesChanged {
    fn append(&self, i: &mut arg::IterAppend) {
        arg::RefArg::append(&self.node, i);
        arg::RefArg::append(&self.unit, i);
        arg::RefArg::append(&self.interface, i);
        arg::RefArg::append(&self.properties, i);
    }
}

impl arg::ReadAll for UnitPropertiesChanged {
    fn read(i: &mut arg::Iter) -> Result<Self, arg::TypeMismatchError> {
        Ok(UnitPropertiesChanged {
            node: i.read()?,
            unit: i.read()?,
            interface: i.read()?,
            properties: i.read()?,
        })
    }
}

impl dbus::message::SignalArgs for UnitPropertiesChanged {
    const NAME: &'static str = "UnitPropertiesChanged";
    const INTERFACE: &'static str = MONITOR_INTERFACE;
}

/// The `Metrics.StartUnitJobMetrics` signal.
#[derive(Debug)]
pub struct StartUnitJobMetrics {
    pub node: String,
    pub job_id: String,
    pub unit: String,
    pub job_measured_time_micros: u64,
    pub unit_start_prop_time_micros: u64,
}

impl arg::AppendAll for StartUnitJobMetrics {
    fn append(&self, i: &mut arg::IterAppend) {
        arg::RefArg::append(&self.node, i);
        arg::RefArg::append(&self.job_id, i);
        arg::RefArg::append(&self.unit, i);
        arg::RefArg::append(&self.job_measured_time_micros, i);
        arg::RefArg::append(&self.unit_start_prop_time_micros, i);
    }
}

impl arg::ReadAll for StartUnitJobMetrics {
    fn read(i: &mut arg::Iter) -> Result<Self, arg::TypeMismatchError> {
        Ok(StartUnitJobMetrics {
            node: i.read()?,
            job_id: i.read()?,
            unit: i.read()?,
            job_measured_time_micros: i.read()?,
            unit_start_prop_time_micros: i.read()?,
        })
    }
}

impl dbus::message::SignalArgs for StartUnitJobMetrics {
    const NAME: &'static str = "StartUnitJobMetrics";
    const INTERFACE: &'static str = METRICS_INTERFACE;
}

/// The `Metrics.AgentJobMetrics` signal.
#[derive(Debug)]
pub struct AgentJobMetrics {
    pub node: String,
    pub unit: String,
    pub method: String,
    pub systemd_job_time_micros: u64,
}

impl arg::AppendAll for AgentJobMetrics {
    fn append(&self, i: &mut arg::IterAppend) {
        arg::RefArg::append(&self.node, i);
        arg::RefArg::append(&self.unit, i);
        arg::RefArg::append(&self.method, i);
        arg::RefArg::append(&self.systemd_job_time_micros, i);
    }
}

impl arg::ReadAll for AgentJobMetrics {
    fn read(i: &mut arg::Iter) -> Result<Self, arg::TypeMismatchError> {
        Ok(AgentJobMetrics {
            node: i.read()?,
            unit: i.read()?,
            method: i.read()?,
            systemd_job_time_micros: i.read()?,
        })
    }
}

impl dbus::message::SignalArgs for AgentJobMetrics {
    const NAME: &'static str = "AgentJobMetrics";
    const INTERFACE: &'static str = METRICS_INTERFACE;
}

#[cfg(test)]
mod test {
    use super::*;
    use dbus::message::SignalArgs;
    use dbus::Message;

    fn roundtrip<S: SignalArgs + arg::AppendAll + arg::ReadAll>(path: &str, sig: &S) -> S {
        let mut m = Message::signal(&path.into(), &S::INTERFACE.into(), &S::NAME.into());
        {
            let mut ia = arg::IterAppend::new(&mut m);
            sig.append(&mut ia);
        }
        S::from_message(&m).expect("signal did not match its own message")
    }

    #[test]
    fn signal_constants() {
        assert_eq!(JobNew::NAME, "JobNew");
        assert_eq!(JobNew::INTERFACE, "org.eclipse.bluechi.Manager");
        assert_eq!(JobRemoved::INTERFACE, "org.eclipse.bluechi.Manager");
        assert_eq!(UnitStateChanged::INTERFACE, "org.eclipse.bluechi.Monitor");
        assert_eq!(StartUnitJobMetrics::INTERFACE, "org.eclipse.bluechi.Metrics");
        assert_eq!(AgentJobMetrics::NAME, "AgentJobMetrics");
    }

    #[test]
    fn job_removed_roundtrip() {
        let sent = JobRemoved {
            id: 17,
            job: "/org/eclipse/bluechi/job/17".into(),
            node: "worker1".into(),
            unit: "nginx.service".into(),
            result: "done".into(),
        };
        let got = roundtrip(crate::BC_OBJECT_PATH, &sent);
        assert_eq!(got.id, 17);
        assert_eq!(&*got.job, "/org/eclipse/bluechi/job/17");
        assert_eq!(got.node, "worker1");
        assert_eq!(got.unit, "nginx.service");
        assert_eq!(got.result, "done");
    }

    #[test]
    fn unit_state_changed_roundtrip() {
        let sent = UnitStateChanged {
            node: "worker1".into(),
            unit: "nginx.service".into(),
            active_state: "active".into(),
            sub_state: "running".into(),
            reason: "real".into(),
        };
        let got = roundtrip("/org/eclipse/bluechi/monitor/1", &sent);
        assert_eq!(got.active_state, "active");
        assert_eq!(got.sub_state, "running");
        assert_eq!(got.reason, "real");
    }

    #[test]
    fn metrics_roundtrip() {
        let sent = AgentJobMetrics {
            node: "worker1".into(),
            unit: "nginx.service".into(),
            method: "StartUnit".into(),
            systemd_job_time_micros: 2500,
        };
        let got = roundtrip(crate::BC_METRICS_OBJECT_PATH, &sent);
        assert_eq!(got.method, "StartUnit");
        assert_eq!(got.systemd_job_time_micros, 2500);
    }
}

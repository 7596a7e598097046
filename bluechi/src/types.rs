//! Typed views of the records the manager returns.
//!
//! Every struct here is built positionally from the wire tuple of the
//! corresponding D-Bus struct; field values are taken over verbatim.

use std::fmt;

/// Connection state of a node as reported by the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeStatus {
    /// The agent on the node is connected.
    Online,
    /// The node is known but its agent is not connected.
    Offline,
    /// A state string this crate does not know about, kept verbatim.
    Unknown(String),
}

impl NodeStatus {
    /// Parses a status string, case-insensitively.
    pub fn parse(s: &str) -> NodeStatus {
        if s.eq_ignore_ascii_case("online") {
            NodeStatus::Online
        } else if s.eq_ignore_ascii_case("offline") {
            NodeStatus::Offline
        } else {
            NodeStatus::Unknown(s.to_string())
        }
    }

    /// Whether the node is currently connected.
    pub fn is_online(&self) -> bool {
        matches!(self, NodeStatus::Online)
    }
}

impl From<&str> for NodeStatus {
    fn from(s: &str) -> NodeStatus {
        NodeStatus::parse(s)
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeStatus::Online => f.write_str("online"),
            NodeStatus::Offline => f.write_str("offline"),
            NodeStatus::Unknown(s) => f.write_str(s),
        }
    }
}

/// One record of `Manager.ListNodes`: name, object path and status.
///
/// The status is kept as the string the manager sent; use
/// [`NodeInfo::status_kind`] for the parsed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    /// Node name.
    pub name: String,
    /// Object path of the node object.
    pub path: dbus::Path<'static>,
    /// Status string, `online` or `offline`.
    pub status: String,
}

impl NodeInfo {
    /// The parsed status.
    pub fn status_kind(&self) -> NodeStatus {
        NodeStatus::parse(&self.status)
    }
}

impl From<(String, dbus::Path<'static>, String)> for NodeInfo {
    fn from((name, path, status): (String, dbus::Path<'static>, String)) -> NodeInfo {
        NodeInfo { name, path, status }
    }
}

/// One record of `Node.ListUnits`, mirroring systemd's `ListUnits` reply.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitInfo {
    /// Primary unit name.
    pub id: String,
    /// Human readable description.
    pub description: String,
    /// Load state, e.g. `loaded`.
    pub load_state: String,
    /// Active state, e.g. `active` or `inactive`.
    pub active_state: String,
    /// Unit-type specific sub state, e.g. `running`.
    pub sub_state: String,
    /// Unit followed in its state by this one, or empty.
    pub following: String,
    /// Object path of the unit on the node.
    pub unit_path: dbus::Path<'static>,
    /// Queued job id, 0 if none.
    pub job_id: u32,
    /// Type of the queued job, or empty.
    pub job_type: String,
    /// Object path of the queued job.
    pub job_path: dbus::Path<'static>,
}

/// Wire tuple of a [`UnitInfo`] record.
pub type UnitTuple = (
    String,
    String,
    String,
    String,
    String,
    String,
    dbus::Path<'static>,
    u32,
    String,
    dbus::Path<'static>,
);

impl From<UnitTuple> for UnitInfo {
    fn from(t: UnitTuple) -> UnitInfo {
        UnitInfo {
            id: t.0,
            description: t.1,
            load_state: t.2,
            active_state: t.3,
            sub_state: t.4,
            following: t.5,
            unit_path: t.6,
            job_id: t.7,
            job_type: t.8,
            job_path: t.9,
        }
    }
}

/// One record of `Manager.ListUnits`: a [`UnitInfo`] tagged with the node it
/// lives on.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeUnitInfo {
    /// Name of the node the unit runs on.
    pub node: String,
    /// The unit record.
    pub unit: UnitInfo,
}

/// Wire tuple of a [`NodeUnitInfo`] record.
pub type NodeUnitTuple = (
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    dbus::Path<'static>,
    u32,
    String,
    dbus::Path<'static>,
);

impl From<NodeUnitTuple> for NodeUnitInfo {
    fn from(t: NodeUnitTuple) -> NodeUnitInfo {
        NodeUnitInfo {
            node: t.0,
            unit: UnitInfo {
                id: t.1,
                description: t.2,
                load_state: t.3,
                active_state: t.4,
                sub_state: t.5,
                following: t.6,
                unit_path: t.7,
                job_id: t.8,
                job_type: t.9,
                job_path: t.10,
            },
        }
    }
}

/// One record of `Node.ListUnitFiles`: unit file path and enablement state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFileInfo {
    /// Path of the unit file on the node.
    pub path: String,
    /// Enablement state, e.g. `enabled`, `disabled`, `static`.
    pub state: String,
}

impl From<(String, String)> for UnitFileInfo {
    fn from((path, state): (String, String)) -> UnitFileInfo {
        UnitFileInfo { path, state }
    }
}

/// Kind of filesystem change performed by enable/disable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnablementChangeKind {
    /// A symlink was created.
    Symlink,
    /// A symlink was removed.
    Unlink,
    /// An operation this crate does not know about, kept verbatim.
    Other(String),
}

impl From<&str> for EnablementChangeKind {
    fn from(s: &str) -> EnablementChangeKind {
        match s {
            "symlink" => EnablementChangeKind::Symlink,
            "unlink" => EnablementChangeKind::Unlink,
            other => EnablementChangeKind::Other(other.to_string()),
        }
    }
}

/// One change record from `EnableUnitFiles`, `DisableUnitFiles` or
/// `SetDefaultTarget`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnablementChange {
    /// What happened.
    pub kind: EnablementChangeKind,
    /// The symlink that was created or removed.
    pub file: String,
    /// The symlink destination, empty for unlink.
    pub destination: String,
}

impl From<(String, String, String)> for EnablementChange {
    fn from((kind, file, destination): (String, String, String)) -> EnablementChange {
        EnablementChange {
            kind: EnablementChangeKind::from(kind.as_str()),
            file,
            destination,
        }
    }
}

/// Reply of `Node.EnableUnitFiles`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnableUnitFilesResponse {
    /// Whether the unit files carried enablement information.
    pub carries_install_info: bool,
    /// The filesystem changes that were performed.
    pub changes: Vec<EnablementChange>,
}

impl From<(bool, Vec<(String, String, String)>)> for EnableUnitFilesResponse {
    fn from((carries_install_info, changes): (bool, Vec<(String, String, String)>)) -> Self {
        EnableUnitFilesResponse {
            carries_install_info,
            changes: changes.into_iter().map(EnablementChange::from).collect(),
        }
    }
}

/// Result of a finished job as carried by the `JobRemoved` signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobResult {
    /// The job finished successfully.
    Done,
    /// The job failed.
    Failed,
    /// The job was cancelled before completion.
    Cancelled,
    /// The job timed out.
    Timeout,
    /// A dependency of the job failed.
    Dependency,
    /// The job was skipped.
    Skipped,
    /// A result string this crate does not know about, kept verbatim.
    Other(String),
}

impl From<&str> for JobResult {
    fn from(s: &str) -> JobResult {
        match s {
            "done" => JobResult::Done,
            "failed" => JobResult::Failed,
            "cancelled" => JobResult::Cancelled,
            "timeout" => JobResult::Timeout,
            "dependency" => JobResult::Dependency,
            "skipped" => JobResult::Skipped,
            other => JobResult::Other(other.to_string()),
        }
    }
}

impl fmt::Display for JobResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JobResult {
    fn as_str(&self) -> &str {
        match self {
            JobResult::Done => "done",
            JobResult::Failed => "failed",
            JobResult::Cancelled => "cancelled",
            JobResult::Timeout => "timeout",
            JobResult::Dependency => "dependency",
            JobResult::Skipped => "skipped",
            JobResult::Other(s) => s,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn node_status_parsing() {
        assert_eq!(NodeStatus::parse("online"), NodeStatus::Online);
        assert_eq!(NodeStatus::parse("Online"), NodeStatus::Online);
        assert_eq!(NodeStatus::parse("OFFLINE"), NodeStatus::Offline);
        assert_eq!(
            NodeStatus::parse("degraded"),
            NodeStatus::Unknown("degraded".to_string())
        );
        assert!(NodeStatus::parse("online").is_online());
        assert_eq!(NodeStatus::Unknown("degraded".into()).to_string(), "degraded");
    }

    #[test]
    fn node_info_is_positional() {
        let info = NodeInfo::from((
            "node1".to_string(),
            dbus::Path::from("/org/eclipse/bluechi/node/node1"),
            "online".to_string(),
        ));
        assert_eq!(info.name, "node1");
        assert_eq!(&*info.path, "/org/eclipse/bluechi/node/node1");
        assert_eq!(info.status, "online");
        assert_eq!(info.status_kind(), NodeStatus::Online);
    }

    #[test]
    fn unit_info_is_positional() {
        let unit = UnitInfo::from((
            "nginx.service".to_string(),
            "A web server".to_string(),
            "loaded".to_string(),
            "active".to_string(),
            "running".to_string(),
            String::new(),
            dbus::Path::from("/org/freedesktop/systemd1/unit/nginx_2eservice"),
            7,
            "start".to_string(),
            dbus::Path::from("/org/freedesktop/systemd1/job/7"),
        ));
        assert_eq!(unit.id, "nginx.service");
        assert_eq!(unit.sub_state, "running");
        assert_eq!(unit.job_id, 7);
    }

    #[test]
    fn node_unit_info_keeps_node_first() {
        let t: NodeUnitTuple = (
            "worker1".to_string(),
            "nginx.service".to_string(),
            "A web server".to_string(),
            "loaded".to_string(),
            "active".to_string(),
            "running".to_string(),
            String::new(),
            dbus::Path::from("/u"),
            0,
            String::new(),
            dbus::Path::from("/"),
        );
        let nu = NodeUnitInfo::from(t);
        assert_eq!(nu.node, "worker1");
        assert_eq!(nu.unit.id, "nginx.service");
        assert_eq!(nu.unit.job_id, 0);
    }

    #[test]
    fn enablement_changes() {
        let resp = EnableUnitFilesResponse::from((
            true,
            vec![(
                "symlink".to_string(),
                "/etc/systemd/system/multi-user.target.wants/nginx.service".to_string(),
                "/usr/lib/systemd/system/nginx.service".to_string(),
            )],
        ));
        assert!(resp.carries_install_info);
        assert_eq!(resp.changes.len(), 1);
        assert_eq!(resp.changes[0].kind, EnablementChangeKind::Symlink);

        let ch = EnablementChange::from((
            "unlink".to_string(),
            "/etc/systemd/system/x.service".to_string(),
            String::new(),
        ));
        assert_eq!(ch.kind, EnablementChangeKind::Unlink);
    }

    #[test]
    fn job_results() {
        assert_eq!(JobResult::from("done"), JobResult::Done);
        assert_eq!(JobResult::from("timeout"), JobResult::Timeout);
        assert_eq!(JobResult::from("weird"), JobResult::Other("weird".into()));
        assert_eq!(JobResult::Failed.to_string(), "failed");
        assert_eq!(JobResult::Other("weird".into()).to_string(), "weird");
    }
}

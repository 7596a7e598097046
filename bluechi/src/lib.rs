//! Client bindings for the [Eclipse BlueChi](https://github.com/eclipse-bluechi/bluechi)
//! node manager.
//!
//! BlueChi is a deployment manager for multi-node environments: a manager
//! service runs on one node, agents run on every managed node, and the
//! manager exposes the whole cluster on the system D-Bus under the well-known
//! name `org.eclipse.bluechi`. This crate talks to that API with the blocking
//! interface of the [dbus](https://docs.rs/dbus) crate.
//!
//! The quickest way in is [`Client`]:
//!
//! ```no_run
//! use bluechi::Client;
//!
//! let client = Client::new_system()?;
//! for node in client.list_nodes()? {
//!     println!("{} is {}", node.name, node.status);
//! }
//! # Ok::<(), bluechi::Error>(())
//! ```
//!
//! For full control over the remote interfaces, the [`api`] module provides
//! one trait per D-Bus interface, implemented for
//! `dbus::blocking::Proxy` in the same style as the `dbus` crate's own
//! standard-interface module. The examples directory contains small complete
//! programs for the common flows (listing nodes, listing units on a node,
//! watching node connection state).

#![warn(missing_docs)]

use std::time::Duration;

/// Well-known bus name of the BlueChi manager service.
pub const BC_DBUS_NAME: &str = "org.eclipse.bluechi";

/// Object path of the manager object.
pub const BC_OBJECT_PATH: &str = "/org/eclipse/bluechi";

/// Object path below which per-node objects are registered.
pub const BC_NODE_OBJECT_PATH_PREFIX: &str = "/org/eclipse/bluechi/node";

/// Object path below which job objects are registered.
pub const BC_JOB_OBJECT_PATH_PREFIX: &str = "/org/eclipse/bluechi/job";

/// Object path the metrics signals are emitted from.
pub const BC_METRICS_OBJECT_PATH: &str = "/org/eclipse/bluechi/metrics";

/// The manager interface, `org.eclipse.bluechi.Manager`.
pub const MANAGER_INTERFACE: &str = "org.eclipse.bluechi.Manager";

/// The per-node interface, `org.eclipse.bluechi.Node`.
pub const NODE_INTERFACE: &str = "org.eclipse.bluechi.Node";

/// The monitor interface, `org.eclipse.bluechi.Monitor`.
pub const MONITOR_INTERFACE: &str = "org.eclipse.bluechi.Monitor";

/// The job interface, `org.eclipse.bluechi.Job`.
pub const JOB_INTERFACE: &str = "org.eclipse.bluechi.Job";

/// The metrics interface, `org.eclipse.bluechi.Metrics`.
pub const METRICS_INTERFACE: &str = "org.eclipse.bluechi.Metrics";

/// Default timeout for remote method calls, the same 30 seconds the C
/// implementation uses for its sd-bus calls.
pub const DEFAULT_DBUS_TIMEOUT: Duration = Duration::from_secs(30);

mod error;
pub use crate::error::Error;

mod strings;
pub use crate::strings::{NodeName, UnitName};

mod path;
pub use crate::path::{escape_path_label, job_path, node_path};

pub mod types;

pub mod api;

mod client;
pub use crate::client::Client;

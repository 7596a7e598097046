use std::time::Duration;

use dbus::blocking::{Connection, Proxy};
use log::debug;

use crate::api::OrgEclipseBluechiManager;
use crate::types::NodeInfo;
use crate::{node_path, Error, NodeName, BC_DBUS_NAME, BC_OBJECT_PATH, DEFAULT_DBUS_TIMEOUT};

/// A connection to the BlueChi manager.
///
/// Owns a blocking D-Bus connection and a per-call timeout, and hands out
/// proxies for the manager and node objects. All remote traffic goes through
/// the [`crate::api`] traits; the convenience methods here add name
/// validation, object path handling and the typed record structs.
pub struct Client {
    conn: Connection,
    timeout: Duration,
}

impl Client {
    /// Connects to the system bus, where a real BlueChi deployment lives.
    pub fn new_system() -> Result<Client, Error> {
        Ok(Client {
            conn: Connection::new_system()?,
            timeout: DEFAULT_DBUS_TIMEOUT,
        })
    }

    /// Connects to the session bus.
    ///
    /// Useful against a service started on the session bus for testing, the
    /// same escape hatch the project's python bindings offer.
    pub fn new_session() -> Result<Client, Error> {
        Ok(Client {
            conn: Connection::new_session()?,
            timeout: DEFAULT_DBUS_TIMEOUT,
        })
    }

    /// Changes the timeout used for remote calls made through this client.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// The timeout used for remote calls made through this client.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The underlying connection, for match rules and custom proxies.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// A proxy for the manager object.
    pub fn manager(&self) -> Proxy<'_, &Connection> {
        self.conn.with_proxy(BC_DBUS_NAME, BC_OBJECT_PATH, self.timeout)
    }

    /// A proxy for an arbitrary object of the BlueChi service.
    pub fn proxy(&self, path: dbus::Path<'static>) -> Proxy<'_, &Connection> {
        self.conn.with_proxy(BC_DBUS_NAME, path, self.timeout)
    }

    /// A proxy for the named node, addressed by its assembled object path.
    ///
    /// No round trip is made; this is how the C client addresses nodes.
    pub fn node(&self, name: &NodeName) -> Proxy<'_, &Connection> {
        self.proxy(node_path(name))
    }

    /// A proxy for the named node, resolved through `Manager.GetNode`.
    ///
    /// Unlike [`Client::node`] this verifies the node exists and reports
    /// [`Error::NoSuchNode`] if it does not.
    pub fn resolve_node(&self, name: &NodeName) -> Result<Proxy<'_, &Connection>, Error> {
        debug!("resolving node {} via GetNode", name);
        let path = self
            .manager()
            .get_node(name)
            .map_err(|e| Error::from_get_node(name, e))?;
        Ok(self.proxy(path))
    }

    /// Lists all nodes known to the manager.
    pub fn list_nodes(&self) -> Result<Vec<NodeInfo>, Error> {
        let nodes = self.manager().list_nodes()?;
        debug!("manager reported {} node(s)", nodes.len());
        Ok(nodes.into_iter().map(NodeInfo::from).collect())
    }

    /// Creates a monitor object and returns a proxy for it.
    pub fn create_monitor(&self) -> Result<Proxy<'_, &Connection>, Error> {
        let path = self.manager().create_monitor()?;
        debug!("created monitor {}", path);
        Ok(self.proxy(path))
    }

    /// Handles incoming messages for up to `timeout`, dispatching signal
    /// callbacks registered on the connection.
    pub fn process(&self, timeout: Duration) -> Result<bool, Error> {
        Ok(self.conn.process(timeout)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Needs a session bus; run with --ignored on a desktop machine.
    #[test]
    #[ignore]
    fn session_connection() {
        let client = Client::new_session().unwrap();
        assert_eq!(client.timeout(), DEFAULT_DBUS_TIMEOUT);
        assert!(!client.connection().unique_name().to_string().is_empty());
    }

    #[test]
    #[ignore]
    fn missing_node_is_reported() {
        let client = Client::new_session().unwrap();
        let name = NodeName::new("no-such-node").unwrap();
        // No BlueChi service on the session bus, so any bus error is fine;
        // this mainly exercises the proxy plumbing end to end.
        assert!(client.resolve_node(&name).is_err());
    }
}

use thiserror::Error;

/// Errors reported by this crate.
///
/// Remote failures keep the underlying [`dbus::Error`] so callers can still
/// get at the D-Bus error name; everything the library rejects locally gets
/// its own variant.
#[derive(Debug, Error)]
pub enum Error {
    /// The bus connection or a remote call failed.
    #[error("D-Bus error: {0}")]
    Bus(#[from] dbus::Error),

    /// A node name failed validation before anything was sent on the bus.
    #[error("invalid node name {0:?}")]
    InvalidNodeName(String),

    /// A unit name failed validation before anything was sent on the bus.
    #[error("invalid unit name {0:?}")]
    InvalidUnitName(String),

    /// The manager does not know the requested node.
    #[error("no such node {0:?}")]
    NoSuchNode(String),
}

impl Error {
    /// Translate a failed `GetNode` reply.
    ///
    /// The manager answers an unknown node name with
    /// `org.freedesktop.DBus.Error.ServiceUnknown`, so that specific error is
    /// folded into [`Error::NoSuchNode`] carrying the requested name.
    pub(crate) fn from_get_node(name: &str, e: dbus::Error) -> Error {
        if e.name() == Some("org.freedesktop.DBus.Error.ServiceUnknown") {
            Error::NoSuchNode(name.to_string())
        } else {
            Error::Bus(e)
        }
    }
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn get_node_translation() {
        let e = dbus::Error::new_custom("org.freedesktop.DBus.Error.ServiceUnknown", "Node not found");
        match Error::from_get_node("worker1", e) {
            Error::NoSuchNode(n) => assert_eq!(n, "worker1"),
            other => panic!("unexpected {:?}", other),
        }

        let e = dbus::Error::new_custom("org.freedesktop.DBus.Error.AccessDenied", "nope");
        assert!(matches!(Error::from_get_node("worker1", e), Error::Bus(_)));
    }

    #[test]
    fn display_includes_offending_name() {
        let msg = Error::InvalidNodeName("a/b".into()).to_string();
        assert!(msg.contains("a/b"));
    }
}

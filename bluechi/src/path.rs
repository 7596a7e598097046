//! Object path assembly for the objects the manager registers.

use std::fmt::Write;

use crate::{NodeName, BC_JOB_OBJECT_PATH_PREFIX, BC_NODE_OBJECT_PATH_PREFIX};

/// Escapes a string for use as a single object path component.
///
/// This is the sd-bus label escaping the service itself uses when it
/// registers node objects: ASCII letters and digits pass through, every other
/// byte becomes `_` followed by two lowercase hex digits. The empty string
/// escapes to `_`.
pub fn escape_path_label(label: &str) -> String {
    if label.is_empty() {
        return "_".to_string();
    }
    let mut out = String::with_capacity(label.len());
    for b in label.bytes() {
        if b.is_ascii_alphanumeric() {
            out.push(b as char);
        } else {
            // write! to a String cannot fail
            let _ = write!(out, "_{:02x}", b);
        }
    }
    out
}

/// Returns the object path of the named node.
pub fn node_path(name: &NodeName) -> dbus::Path<'static> {
    format!("{}/{}", BC_NODE_OBJECT_PATH_PREFIX, escape_path_label(name)).into()
}

/// Returns the object path of the job with the given id.
pub fn job_path(id: u32) -> dbus::Path<'static> {
    format!("{}/{}", BC_JOB_OBJECT_PATH_PREFIX, id).into()
}

#[cfg(test)]
mod test {
    use super::{escape_path_label, job_path, node_path};
    use crate::NodeName;

    #[test]
    fn plain_labels_pass_through() {
        assert_eq!(escape_path_label("worker1"), "worker1");
        assert_eq!(escape_path_label("ABCxyz019"), "ABCxyz019");
    }

    #[test]
    fn special_bytes_are_hex_escaped() {
        assert_eq!(escape_path_label("node-1"), "node_2d1");
        assert_eq!(escape_path_label("node.example"), "node_2eexample");
        assert_eq!(escape_path_label("a_b"), "a_5fb");
        assert_eq!(escape_path_label(""), "_");
    }

    #[test]
    fn node_and_job_paths() {
        let n = NodeName::new("worker1").unwrap();
        assert_eq!(&*node_path(&n), "/org/eclipse/bluechi/node/worker1");

        let n = NodeName::new("node-1").unwrap();
        assert_eq!(&*node_path(&n), "/org/eclipse/bluechi/node/node_2d1");

        assert_eq!(&*job_path(42), "/org/eclipse/bluechi/job/42");
    }
}

//! String wrappers that are guaranteed valid on construction.

use std::{fmt, ops, str::FromStr};

use crate::Error;

// Shared impls for the validated wrappers; the validator runs once in new()
// and everything else just exposes the inner str.
macro_rules! name_wrapper {
    ($t: ident, $check: ident, $err: ident) => {

impl $t {
    /// Creates a new wrapper, validating the input.
    pub fn new<S: Into<String>>(s: S) -> Result<$t, Error> {
        let s = s.into();
        if $check(&s) { Ok($t(s)) } else { Err(Error::$err(s)) }
    }

    /// Consumes the wrapper and returns the inner string.
    pub fn into_string(self) -> String { self.0 }
}

impl ops::Deref for $t {
    type Target = str;
    fn deref(&self) -> &str { &self.0 }
}

impl AsRef<str> for $t {
    fn as_ref(&self) -> &str { &self.0 }
}

impl fmt::Display for $t {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { self.0.fmt(f) }
}

impl FromStr for $t {
    type Err = Error;
    fn from_str(s: &str) -> Result<$t, Error> { $t::new(s) }
}

impl TryFrom<&str> for $t {
    type Error = Error;
    fn try_from(s: &str) -> Result<$t, Error> { $t::new(s) }
}

impl TryFrom<String> for $t {
    type Error = Error;
    fn try_from(s: String) -> Result<$t, Error> { $t::new(s) }
}

}}

/// A wrapper around a string that is guaranteed to be a usable BlueChi node
/// name: nonempty, at most 255 bytes and free of `/`.
///
/// Any other byte is allowed; [`crate::node_path`] escapes the name before it
/// becomes an object path component.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct NodeName(String);

fn node_name_valid(s: &str) -> bool {
    !s.is_empty() && s.len() <= 255 && !s.contains('/')
}

name_wrapper!(NodeName, node_name_valid, InvalidNodeName);

/// A wrapper around a string that is guaranteed to look like a systemd unit
/// name: nonempty, at most 255 bytes, free of `/`, with a nonempty type
/// suffix after a dot (`foo.service`, `bar.timer`).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct UnitName(String);

fn unit_name_valid(s: &str) -> bool {
    if s.is_empty() || s.len() > 255 || s.contains('/') {
        return false;
    }
    match s.rfind('.') {
        Some(0) | None => false,
        Some(i) => i + 1 < s.len(),
    }
}

name_wrapper!(UnitName, unit_name_valid, InvalidUnitName);

#[cfg(test)]
mod test {
    use super::{NodeName, UnitName};
    use crate::Error;

    #[test]
    fn node_names() {
        assert!(NodeName::new("primary").is_ok());
        assert!(NodeName::new("node-1.example.org").is_ok());

        assert!(matches!(NodeName::new(""), Err(Error::InvalidNodeName(_))));
        assert!(matches!(NodeName::new("a/b"), Err(Error::InvalidNodeName(_))));
        assert!(matches!(NodeName::new("x".repeat(256)), Err(Error::InvalidNodeName(_))));
    }

    #[test]
    fn unit_names() {
        assert!(UnitName::new("nginx.service").is_ok());
        assert!(UnitName::new("dbus.socket").is_ok());
        assert!(UnitName::new("app@1.service").is_ok());

        assert!(matches!(UnitName::new(""), Err(Error::InvalidUnitName(_))));
        assert!(matches!(UnitName::new("nosuffix"), Err(Error::InvalidUnitName(_))));
        assert!(matches!(UnitName::new(".service"), Err(Error::InvalidUnitName(_))));
        assert!(matches!(UnitName::new("trailingdot."), Err(Error::InvalidUnitName(_))));
        assert!(matches!(UnitName::new("a/b.service"), Err(Error::InvalidUnitName(_))));
    }

    #[test]
    fn wrapper_behaves_like_str() {
        let n = NodeName::new("primary").unwrap();
        assert_eq!(&*n, "primary");
        assert_eq!(n.to_string(), "primary");
        assert_eq!(n.into_string(), "primary");
    }
}

//! Host entry type.

use std::fmt;

/// Standard remote-shell port, used when a line gives no port or port 0.
pub const DEFAULT_PORT: u16 = 22;

/// Ordinal of an entry within a [`HostList`](crate::HostList).
///
/// Assigned in file order as entries are committed, starting at 0.
///
/// # Display Format
///
/// Formats as `"#{index}"`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position(usize);

impl Position {
    /// Creates a new `Position` from an index.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One target machine read from the host file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    /// Login to connect as. `None` when neither the line nor the caller gave one.
    pub login: Option<String>,
    /// Never empty.
    pub hostname: String,
    pub port: u16,
    pub position: Position,
    /// 1-based line number in the source file.
    pub line: usize,
}

impl HostEntry {
    /// Returns the `ssh` style destination: `login@hostname`, or just the
    /// hostname when there is no login.
    #[must_use]
    pub fn destination(&self) -> String {
        match self.login.as_deref() {
            Some(login) if !login.is_empty() => format!("{login}@{}", self.hostname),
            _ => self.hostname.clone(),
        }
    }

    /// Length of the login in characters, 0 when absent.
    #[must_use]
    pub fn login_len(&self) -> usize {
        self.login.as_deref().map_or(0, |l| l.chars().count())
    }

    /// Length of the hostname in characters.
    #[must_use]
    pub fn hostname_len(&self) -> usize {
        self.hostname.chars().count()
    }
}

impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.destination(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(login: Option<&str>, hostname: &str, port: u16) -> HostEntry {
        HostEntry {
            login: login.map(String::from),
            hostname: hostname.into(),
            port,
            position: Position::from_index(0),
            line: 1,
        }
    }

    #[test]
    fn test_destination_with_login() {
        assert_eq!(entry(Some("root"), "db1", 22).destination(), "root@db1");
    }

    #[test]
    fn test_destination_without_login() {
        assert_eq!(entry(None, "db1", 22).destination(), "db1");
        assert_eq!(entry(Some(""), "db1", 22).destination(), "db1");
    }

    #[test]
    fn test_display_includes_port() {
        assert_eq!(entry(Some("ops"), "web", 2222).to_string(), "ops@web:2222");
    }

    #[test]
    fn test_lengths() {
        let e = entry(Some("admin"), "web-01.example", 22);
        assert_eq!(e.login_len(), 5);
        assert_eq!(e.hostname_len(), 14);
        assert_eq!(entry(None, "a", 22).login_len(), 0);
    }

    #[test]
    fn test_position_display() {
        let pos = Position::from_index(7);
        assert_eq!(pos.to_string(), "#7");
        assert_eq!(pos.index(), 7);
        assert!(Position::from_index(1) < Position::from_index(2));
    }
}

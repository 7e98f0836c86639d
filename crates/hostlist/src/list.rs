//! Ordered host list and the builder that assembles it during a load.

use crate::host::{HostEntry, Position};
use crate::parser::ParsedLine;
use crate::stats::LoadStats;
use std::collections::TryReserveError;

/// Hosts read from a host file, in file order, with their load statistics.
///
/// Built only by a successful load; there is no way to add entries afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostList {
    entries: Vec<HostEntry>,
    stats: LoadStats,
}

impl HostList {
    /// O(1) lookup by position.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&HostEntry> {
        self.entries.get(position.index())
    }

    /// Iterate entries in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, HostEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[HostEntry] {
        &self.entries
    }

    #[must_use]
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no host survived loading.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Splits the list into its entries and statistics.
    #[must_use]
    pub fn into_parts(self) -> (Vec<HostEntry>, LoadStats) {
        (self.entries, self.stats)
    }
}

impl IntoIterator for HostList {
    type Item = HostEntry;
    type IntoIter = std::vec::IntoIter<HostEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a HostList {
    type Item = &'a HostEntry;
    type IntoIter = std::slice::Iter<'a, HostEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Accumulates entries for a single load.
///
/// Dropping the builder discards everything collected so far; the list only
/// becomes visible through [`HostListBuilder::finish`].
#[derive(Debug, Default)]
pub(crate) struct HostListBuilder {
    entries: Vec<HostEntry>,
    stats: LoadStats,
}

impl HostListBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Commits a parsed line as the next entry.
    pub(crate) fn push(
        &mut self,
        parsed: ParsedLine<'_>,
        line: usize,
    ) -> Result<(), TryReserveError> {
        self.entries.try_reserve(1)?;

        let entry = HostEntry {
            login: parsed.login.map(str::to_owned),
            hostname: parsed.hostname.to_owned(),
            port: parsed.port,
            position: Position::from_index(self.entries.len()),
            line,
        };
        self.stats.record(&entry);
        self.entries.push(entry);
        Ok(())
    }

    /// Notes a line that had content but no usable hostname.
    pub(crate) fn skip(&mut self) {
        self.stats.record_skipped();
    }

    pub(crate) fn finish(self) -> HostList {
        HostList {
            entries: self.entries,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed<'a>(login: Option<&'a str>, hostname: &'a str, port: u16) -> ParsedLine<'a> {
        ParsedLine {
            login,
            hostname,
            port,
        }
    }

    fn sample() -> HostList {
        let mut builder = HostListBuilder::new();
        builder.push(parsed(Some("root"), "alpha", 22), 1).unwrap();
        builder.push(parsed(None, "beta", 2222), 3).unwrap();
        builder.push(parsed(Some("ops"), "alpha", 22), 4).unwrap();
        builder.finish()
    }

    #[test]
    fn test_positions_follow_insertion_order() {
        let list = sample();
        let positions: Vec<_> = list.iter().map(|e| e.position.index()).collect();
        assert_eq!(positions, vec![0, 1, 2]);

        let lines: Vec<_> = list.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
    }

    #[test]
    fn test_lookup_by_position() {
        let list = sample();
        assert_eq!(list.get(Position::from_index(1)).unwrap().hostname, "beta");
        assert!(list.get(Position::from_index(99)).is_none());
    }

    #[test]
    fn test_duplicate_hosts_are_kept() {
        let list = sample();
        let names: Vec<_> = list.iter().map(|e| e.hostname.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "alpha"]);
    }

    #[test]
    fn test_stats_follow_entries() {
        let mut builder = HostListBuilder::new();
        builder.push(parsed(Some("root"), "alpha", 22), 1).unwrap();
        builder.skip();
        let list = builder.finish();

        assert_eq!(list.stats().count, list.len());
        assert_eq!(list.stats().max_login_len, 4);
        assert_eq!(list.stats().max_hostname_len, 5);
        assert_eq!(list.stats().skipped, 1);
    }

    #[test]
    fn test_into_parts_and_iterators() {
        let list = sample();
        let borrowed: Vec<_> = (&list).into_iter().map(|e| e.port).collect();
        assert_eq!(borrowed, vec![22, 2222, 22]);

        let (entries, stats) = list.clone().into_parts();
        assert_eq!(entries.len(), 3);
        assert_eq!(stats.count, 3);

        let owned: Vec<HostEntry> = list.into_iter().collect();
        assert_eq!(owned, entries);
    }

    #[test]
    fn test_empty_list() {
        let list = HostListBuilder::new().finish();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(*list.stats(), LoadStats::default());
    }
}

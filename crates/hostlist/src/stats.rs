use crate::host::HostEntry;

/// Figures gathered while loading a host list.
///
/// `count` and the maxima cover committed entries only. Output code uses the
/// maxima to align columns; schedulers use `count` to bound concurrency.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of entries in the list.
    pub count: usize,
    /// Longest login, in characters.
    pub max_login_len: usize,
    /// Longest hostname, in characters.
    pub max_hostname_len: usize,
    /// Non-blank, non-label lines dropped because they had no hostname.
    /// Lines hidden by a label filter are not counted.
    pub skipped: usize,
}

impl LoadStats {
    /// Accounts for a committed entry.
    pub(crate) fn record(&mut self, entry: &HostEntry) {
        self.max_login_len = self.max_login_len.max(entry.login_len());
        self.max_hostname_len = self.max_hostname_len.max(entry.hostname_len());
        self.count += 1;
    }

    pub(crate) fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Limits a requested number of concurrent sessions to the host count.
    #[must_use]
    pub fn clamp_concurrency(&self, max: usize) -> usize {
        max.min(self.count)
    }
}

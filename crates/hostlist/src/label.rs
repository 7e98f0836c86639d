//! Label sections: `%name` lines scope the host lines that follow them.

/// Marker that starts a label line.
pub const LABEL_MARKER: char = '%';

/// Tracks the active label while scanning a host file.
#[derive(Debug, Default)]
pub struct LabelContext {
    current: Option<String>,
}

impl LabelContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// If `line` is a label line, makes its name the active label and returns
    /// `true`. The name may be empty.
    pub fn observe(&mut self, line: &str) -> bool {
        match line.strip_prefix(LABEL_MARKER) {
            Some(name) => {
                self.current = Some(name.to_owned());
                true
            }
            None => false,
        }
    }

    /// The active label, if any label line has been seen.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether a host line under the active label passes `filter`.
    ///
    /// With no filter every host is accepted. With a filter the active label
    /// must match it exactly; hosts before the first label never match.
    #[must_use]
    pub fn accepts(&self, filter: Option<&str>) -> bool {
        match filter {
            None => true,
            Some(wanted) => self.current() == Some(wanted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_label_line() {
        let mut ctx = LabelContext::new();
        assert!(ctx.observe("%db"));
        assert_eq!(ctx.current(), Some("db"));
    }

    #[test]
    fn test_observe_host_line() {
        let mut ctx = LabelContext::new();
        assert!(!ctx.observe("db1"));
        assert_eq!(ctx.current(), None);
    }

    #[test]
    fn test_new_label_replaces_old() {
        let mut ctx = LabelContext::new();
        ctx.observe("%a");
        ctx.observe("%b");
        assert_eq!(ctx.current(), Some("b"));
    }

    #[test]
    fn test_empty_label() {
        let mut ctx = LabelContext::new();
        assert!(ctx.observe("%"));
        assert_eq!(ctx.current(), Some(""));
        assert!(!ctx.accepts(Some("a")));
    }

    #[test]
    fn test_accepts_without_filter() {
        let mut ctx = LabelContext::new();
        assert!(ctx.accepts(None));
        ctx.observe("%web");
        assert!(ctx.accepts(None));
    }

    #[test]
    fn test_accepts_exact_match_only() {
        let mut ctx = LabelContext::new();
        ctx.observe("%web");
        assert!(ctx.accepts(Some("web")));
        assert!(!ctx.accepts(Some("Web")));
        assert!(!ctx.accepts(Some("we")));
        assert!(!ctx.accepts(Some("web1")));
    }

    #[test]
    fn test_no_label_yet_rejected_when_filtering() {
        let ctx = LabelContext::new();
        assert!(!ctx.accepts(Some("web")));
    }
}

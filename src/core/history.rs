//! Transition history tracking.
//!
//! Provides an immutable audit log of Zab transitions, following
//! functional programming principles: recording returns a new history.

use super::arg::Arg;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single transition.
///
/// Entries are display strings, not structured state: `before` and `after`
/// are snapshots as produced by [`Zab::snapshot`](super::Zab::snapshot), and
/// `call` is the rendered function call. The timestamp is metadata and is
/// not part of the rendered line.
///
/// # Example
///
/// ```rust
/// use zab::core::{Arg, HistoryEntry};
///
/// let entry = HistoryEntry::new(
///     "(name: Cama, bim: Red, pim: 1)",
///     "mox",
///     &[Arg::Int(3)],
///     "(name: Cama, bim: Yellow, pim: 1)",
/// );
/// assert_eq!(
///     entry.to_string(),
///     "(name: Cama, bim: Red, pim: 1) -> mox(3) -> (name: Cama, bim: Yellow, pim: 1)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Snapshot of the state before the call
    pub before: String,
    /// The rendered function call, e.g. `mox(3)`
    pub call: String,
    /// Snapshot of the state after the call
    pub after: String,
    /// When the transition was recorded
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        before: impl Into<String>,
        function: &str,
        args: &[Arg],
        after: impl Into<String>,
    ) -> Self {
        Self {
            before: before.into(),
            call: render_call(function, args),
            after: after.into(),
            recorded_at: Utc::now(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} -> {}", self.before, self.call, self.after)
    }
}

/// Render a call as `name()` or `name(a, b)`.
pub fn render_call(function: &str, args: &[Arg]) -> String {
    let rendered: Vec<String> = args.iter().map(Arg::to_string).collect();
    format!("{function}({})", rendered.join(", "))
}

/// Ordered, append-only history of transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the entry added and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use zab::core::{History, HistoryEntry};
///
/// let history = History::new();
/// let entry = HistoryEntry::new("(a)", "fin", &[], "(b)");
///
/// let new_history = history.record(entry);
/// assert_eq!(new_history.len(), 1);
/// assert!(history.is_empty()); // Receiver unchanged
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// This is a pure function - the backing sequence is copied before the
    /// push, so histories held by earlier states never observe the entry.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Get all entries in order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The rendered history lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(HistoryEntry::to_string).collect()
    }

    /// The most recent entry, if any.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(call: &str) -> HistoryEntry {
        HistoryEntry::new("(before)", call, &[], "(after)")
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert_eq!(history.len(), 0);
        assert!(history.lines().is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_adds_entry() {
        let history = History::new().record(entry("fin"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.lines(), vec!["(before) -> fin() -> (after)"]);
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new().record(entry("fin"));
        let newer = history.record(entry("tox"));

        assert_eq!(history.len(), 1);
        assert_eq!(newer.len(), 2);
        assert_eq!(history.entries()[0], newer.entries()[0]);
    }

    #[test]
    fn entries_preserve_order() {
        let history = History::new()
            .record(entry("fin"))
            .record(entry("tox"))
            .record(entry("sox"));

        let calls: Vec<&str> = history.entries().iter().map(|e| e.call.as_str()).collect();
        assert_eq!(calls, vec!["fin()", "tox()", "sox()"]);
    }

    #[test]
    fn render_call_joins_arguments() {
        assert_eq!(render_call("hox", &[]), "hox()");
        assert_eq!(render_call("rox", &[Arg::from("triangle")]), "rox(triangle)");
        assert_eq!(
            render_call("pair", &[Arg::from(1), Arg::from("two")]),
            "pair(1, two)"
        );
    }

    #[test]
    fn timestamp_is_not_rendered() {
        let e = entry("fin");
        assert!(!e.to_string().contains(&e.recorded_at.to_rfc3339()));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = History::new().record(entry("fin"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}

//! Dispatch history tracking.
//!
//! The machine records every applied dispatch in an immutable log. The log
//! is debugging and persistence surface only: the reducer never reads it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::action::ActionId;
use crate::core::state::StateId;

/// Record of a single applied dispatch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// The state the machine was in.
    pub from: StateId,
    /// The state the dispatch moved it to.
    pub to: StateId,
    /// The action that caused the move.
    pub action: ActionId,
    /// When the dispatch was applied.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of applied dispatches.
///
/// The log is immutable: [`record`](Self::record) returns a new log with
/// the entry added. Dispatches the reducer rejected as no-ops are never
/// recorded.
///
/// # Example
///
/// ```rust
/// use segue::core::{ActionId, DispatchRecord, StateId, TransitionLog};
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
/// let log = log.record(DispatchRecord {
///     from: StateId::Exited,
///     to: StateId::EnterPending,
///     action: ActionId::TransitionTrigger,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.records().len(), 1);
/// assert_eq!(log.path(), vec![StateId::Exited, StateId::EnterPending]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<DispatchRecord>,
}

impl TransitionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dispatch, returning a new log. The existing log is not
    /// modified.
    pub fn record(&self, record: DispatchRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All recorded dispatches, oldest first.
    pub fn records(&self) -> &[DispatchRecord] {
        &self.records
    }

    /// The path of states traversed: the first record's origin, then the
    /// destination of every record.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// Time between the first and last recorded dispatch. `None` on an
    /// empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// How many recorded dispatches finished a transition.
    pub fn completions(&self) -> usize {
        self.records
            .iter()
            .filter(|record| {
                record.to.is_resting() && (record.from.in_transition() || record.from.is_pending())
            })
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: StateId, to: StateId, action: ActionId) -> DispatchRecord {
        DispatchRecord {
            from,
            to,
            action,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log = TransitionLog::new();

        assert!(log.is_empty());
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_is_pure() {
        let log = TransitionLog::new();
        let next = log.record(record(
            StateId::Exited,
            StateId::EnterPending,
            ActionId::TransitionTrigger,
        ));

        assert_eq!(log.len(), 0);
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn path_includes_the_origin() {
        let log = TransitionLog::new()
            .record(record(
                StateId::Exited,
                StateId::EnterPending,
                ActionId::TransitionTrigger,
            ))
            .record(record(
                StateId::EnterPending,
                StateId::Entering,
                ActionId::TransitionStart,
            ));

        assert_eq!(
            log.path(),
            vec![StateId::Exited, StateId::EnterPending, StateId::Entering]
        );
    }

    #[test]
    fn completions_count_settled_transitions() {
        let log = TransitionLog::new()
            .record(record(
                StateId::Exited,
                StateId::EnterPending,
                ActionId::TransitionTrigger,
            ))
            .record(record(
                StateId::EnterPending,
                StateId::Entering,
                ActionId::TransitionStart,
            ))
            .record(record(
                StateId::Entering,
                StateId::Entered,
                ActionId::TransitionComplete,
            ));

        assert_eq!(log.completions(), 1);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let log = TransitionLog::new()
            .record(DispatchRecord {
                from: StateId::Exited,
                to: StateId::EnterPending,
                action: ActionId::TransitionTrigger,
                timestamp: start,
            })
            .record(DispatchRecord {
                from: StateId::EnterPending,
                to: StateId::Entering,
                action: ActionId::TransitionStart,
                timestamp: start + chrono::Duration::milliseconds(16),
            });

        assert_eq!(log.duration(), Some(Duration::from_millis(16)));
    }

    #[test]
    fn log_roundtrip_serialization() {
        let log = TransitionLog::new().record(record(
            StateId::Exited,
            StateId::EnterPending,
            ActionId::TransitionTrigger,
        ));

        let json = serde_json::to_string(&log).unwrap();
        let back: TransitionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}

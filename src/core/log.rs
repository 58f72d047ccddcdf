//! Transition log: an ordered record of state changes.
//!
//! The controller appends one record per state change, giving the caller an
//! inspectable, serializable trace of where the machine has been. This is
//! in-memory observability only; nothing is persisted by the engine.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single state change.
///
/// `from` is `None` for the initial `set_state`, which has no outgoing
/// state. Handles refer into the graph the controller was driven with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state that was exited, if any.
    pub from: Option<StateId>,
    /// The state that was entered.
    pub to: StateId,
    /// When the change happened.
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of every state change a controller has executed.
///
/// # Example
///
/// ```rust
/// use canopy::{Hfsm, StateGraph};
///
/// let mut graph = StateGraph::new();
/// let a = graph.state("a").build();
/// let b = graph.state("b").build();
/// graph.transition(a, b);
///
/// let mut hfsm = Hfsm::new();
/// hfsm.set_state(&mut graph, a);
/// hfsm.tick(&mut graph).unwrap();
///
/// assert_eq!(hfsm.history().path(), vec![a, b]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        TransitionLog {
            records: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, record: TransitionRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    /// Number of state changes recorded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no state change has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sequence of states visited, in order of entry.
    ///
    /// Equals every record's `to`; each entry corresponds to exactly one
    /// `on_enter` call made by the controller.
    pub fn path(&self) -> Vec<StateId> {
        self.records.iter().map(|record| record.to).collect()
    }
}

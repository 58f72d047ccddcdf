//! State handles and per-state node data.
//!
//! States live in a [`StateGraph`](super::StateGraph) arena and are addressed
//! by [`StateId`], a small copyable handle. Handles stay valid for the life
//! of the graph they came from; the graph never removes or reorders nodes.

use super::behavior::Behavior;
use super::condition::Condition;
use serde::{Deserialize, Serialize};

/// Stable handle to a state inside a [`StateGraph`](super::StateGraph).
///
/// Identity is positional: two `StateId`s are equal exactly when they refer
/// to the same node of the same graph. A state's name is display-only and
/// never participates in identity or lookup.
///
/// Using a `StateId` with a graph other than the one that issued it is a
/// logic error and will panic or address an unrelated state.
///
/// # Example
///
/// ```rust
/// use canopy::StateGraph;
///
/// let mut graph = StateGraph::new();
/// let idle = graph.state("idle").build();
/// let walk = graph.state("walk").build();
///
/// assert_ne!(idle, walk);
/// assert_eq!(graph.name(idle), "idle");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// The node's position in its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena node backing one state.
///
/// `parents` is the inverse of the composite/child relation and exists only
/// for upward transition search; it implies no ownership. `entry` is the
/// default child entered when this state is active and composite.
pub(crate) struct StateNode {
    pub(crate) name: String,
    pub(crate) behavior: Box<dyn Behavior + Send>,
    pub(crate) transitions: Vec<(StateId, Condition)>,
    pub(crate) parents: Vec<StateId>,
    pub(crate) entry: Option<StateId>,
}

impl StateNode {
    pub(crate) fn new(name: String, behavior: Box<dyn Behavior + Send>) -> Self {
        Self {
            name,
            behavior,
            transitions: Vec::new(),
            parents: Vec::new(),
            entry: None,
        }
    }
}

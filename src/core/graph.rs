//! The state arena: composition, transition wiring, and resolution.
//!
//! `StateGraph` owns every state node and is the only place the
//! parent/child and transition relations live. The controller side
//! ([`Hfsm`](crate::Hfsm)) holds nothing but a [`StateId`] into this arena,
//! which keeps the shared, non-owning associations of a state hierarchy
//! (multi-parent children, back-references) free of lifetime and aliasing
//! hazards.

use super::condition::Condition;
use super::state::{StateId, StateNode};

/// Arena of composed states: the tree, the transition graph, and the
/// lifecycle hooks all in one owner.
///
/// Build once during setup (states via [`state`](Self::state), composition
/// via [`add_children`](Self::add_children), transitions via
/// [`transition`](Self::transition) / [`transition_when`](Self::transition_when)),
/// then hand `&mut StateGraph` to [`Hfsm::tick`](crate::Hfsm::tick) every
/// control cycle. Rewiring between ticks is allowed; resolution reads the
/// graph fresh on every tick.
///
/// The graph does not validate its own shape. A cyclic entry chain or a
/// cyclic composition is a caller bug and makes resolution loop forever.
///
/// # Example
///
/// ```rust
/// use canopy::{Hfsm, StateGraph};
///
/// let mut graph = StateGraph::new();
/// let root = graph.state("root").build();
/// let idle = graph.state("idle").build();
/// let walk = graph.state("walk").build();
/// graph.add_children(root, &[idle, walk]);
///
/// let mut hfsm = Hfsm::new();
/// hfsm.set_state(&mut graph, root);
/// hfsm.tick(&mut graph).unwrap();
///
/// // The tick descended from the composite root into its entry child.
/// assert_eq!(hfsm.current_state(), Some(idle));
/// ```
pub struct StateGraph {
    states: Vec<StateNode>,
}

impl StateGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        StateGraph { states: Vec::new() }
    }

    /// Number of states in the arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the arena holds no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub(crate) fn insert(&mut self, node: StateNode) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(node);
        id
    }

    fn node(&self, id: StateId) -> &StateNode {
        &self.states[id.0]
    }

    fn node_mut(&mut self, id: StateId) -> &mut StateNode {
        &mut self.states[id.0]
    }

    /// The state's display name.
    pub fn name(&self, id: StateId) -> &str {
        &self.node(id).name
    }

    /// Register `children` under `parent` and make the first child the
    /// parent's default entry state.
    ///
    /// Every child gains `parent` as a back-reference for upward transition
    /// search. A state may be registered under several parents; the
    /// hierarchy shares it by handle, never by ownership.
    pub fn add_children(&mut self, parent: StateId, children: &[StateId]) {
        if let Some(&first) = children.first() {
            self.node_mut(parent).entry = Some(first);
        }
        for &child in children {
            self.node_mut(child).parents.push(parent);
        }
    }

    /// Override the default entry child set by [`add_children`](Self::add_children).
    pub fn set_entry_state(&mut self, parent: StateId, child: StateId) {
        self.node_mut(parent).entry = Some(child);
    }

    /// The state's default entry child, or `None` for a leaf.
    pub fn entry_state(&self, id: StateId) -> Option<StateId> {
        self.node(id).entry
    }

    /// The parents registered for this state, in registration order.
    pub fn parents(&self, id: StateId) -> &[StateId] {
        &self.node(id).parents
    }

    /// Add an unconditional transition from `from` to `to`.
    ///
    /// The guard is [`Condition::always`], so the transition fires the first
    /// time it is probed (unless an earlier transition or an ancestor
    /// transition fires before it). Returns `to`, so linear stretches of a
    /// machine chain naturally:
    ///
    /// ```rust
    /// use canopy::StateGraph;
    ///
    /// let mut graph = StateGraph::new();
    /// let load = graph.state("load").build();
    /// let run = graph.state("run").build();
    /// let done = graph.state("done").build();
    ///
    /// let next = graph.transition(load, run);
    /// let end = graph.transition(next, done);
    /// assert_eq!(end, done);
    /// ```
    pub fn transition(&mut self, from: StateId, to: StateId) -> StateId {
        self.transition_when(from, to, Condition::always())
    }

    /// Add a guarded transition from `from` to `to`.
    ///
    /// Transitions out of a state are probed in the order they were added;
    /// the first whose condition holds wins. Returns `to` for chaining.
    pub fn transition_when(&mut self, from: StateId, to: StateId, condition: Condition) -> StateId {
        self.node_mut(from).transitions.push((to, condition));
        to
    }

    /// Resolve the terminal default-entry leaf below `id`.
    ///
    /// Follows `entry` links until a state with no entry child is reached
    /// and returns it, or `None` when `id` is already a leaf. Pure read;
    /// the controller re-resolves this every tick because entry wiring may
    /// change between ticks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use canopy::StateGraph;
    ///
    /// let mut graph = StateGraph::new();
    /// let root = graph.state("root").build();
    /// let mid = graph.state("mid").build();
    /// let leaf = graph.state("leaf").build();
    /// graph.add_children(root, &[mid]);
    /// graph.add_children(mid, &[leaf]);
    ///
    /// assert_eq!(graph.final_entry_state(root), Some(leaf));
    /// assert_eq!(graph.final_entry_state(mid), Some(leaf));
    /// assert_eq!(graph.final_entry_state(leaf), None);
    /// ```
    pub fn final_entry_state(&self, id: StateId) -> Option<StateId> {
        let mut entry = self.node(id).entry?;
        while let Some(deeper) = self.node(entry).entry {
            entry = deeper;
        }
        Some(entry)
    }

    /// Resolve which transition, if any, fires from the active state `id`.
    ///
    /// Ancestors are consulted strictly before the state's own transitions:
    /// each registered parent is asked recursively (depth-first, in
    /// registration order), so an outer state's transition interrupts any
    /// of its descendants no matter which child is currently active. Only
    /// when no ancestor fires are `id`'s own transitions probed, in
    /// insertion order; the first satisfied condition wins. Returns `None`
    /// when nothing fires.
    pub fn transition_state(&self, id: StateId) -> Option<StateId> {
        let node = self.node(id);

        for &parent in &node.parents {
            if let Some(to) = self.transition_state(parent) {
                return Some(to);
            }
        }

        node.transitions
            .iter()
            .find(|(_, condition)| condition.check())
            .map(|&(to, _)| to)
    }

    /// Run the state's `on_enter` hook.
    pub fn run_enter(&mut self, id: StateId) {
        self.node_mut(id).behavior.on_enter();
    }

    /// Run the state's `on_update` hook.
    pub fn run_update(&mut self, id: StateId) {
        self.node_mut(id).behavior.on_update();
    }

    /// Run the state's `on_exit` hook.
    pub fn run_exit(&mut self, id: StateId) {
        self.node_mut(id).behavior.on_exit();
    }
}

impl Default for StateGraph {
    fn default() -> Self {
        Self::new()
    }
}

//! The HFSM controller: holds the current state and drives the tick cycle.

pub mod error;

pub use error::TickError;

use crate::core::{StateGraph, StateId, TransitionLog, TransitionRecord};
use chrono::Utc;

/// Controller for one hierarchy instance.
///
/// An `Hfsm` holds the single current state of a hierarchy living in a
/// [`StateGraph`] and advances it with [`tick`](Self::tick), once per
/// control cycle. It starts uninitialized; the first
/// [`set_state`](Self::set_state) activates it and it then runs until the
/// caller stops ticking. There is no terminal state.
///
/// The controller is purely synchronous and expects one logical thread of
/// control per instance. Independent controllers over disjoint graphs may
/// run on separate threads without coordination.
///
/// # Example
///
/// ```rust
/// use canopy::{Condition, Hfsm, StateGraph};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let mut graph = StateGraph::new();
/// let patrol = graph.state("patrol").build();
/// let alert = graph.state("alert").build();
///
/// let spotted = Arc::new(AtomicBool::new(false));
/// let seen = Arc::clone(&spotted);
/// graph.transition_when(patrol, alert, Condition::new(move || seen.load(Ordering::SeqCst)));
///
/// let mut hfsm = Hfsm::new();
/// hfsm.set_state(&mut graph, patrol);
///
/// hfsm.tick(&mut graph).unwrap();
/// assert_eq!(hfsm.current_state(), Some(patrol));
///
/// spotted.store(true, Ordering::SeqCst);
/// hfsm.tick(&mut graph).unwrap();
/// assert_eq!(hfsm.current_state(), Some(alert));
/// ```
pub struct Hfsm {
    current: Option<StateId>,
    log: TransitionLog,
}

impl Hfsm {
    /// Create an uninitialized controller.
    pub fn new() -> Self {
        Hfsm {
            current: None,
            log: TransitionLog::new(),
        }
    }

    /// The current state, or `None` before the first
    /// [`set_state`](Self::set_state).
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// The record of every state change this controller has executed.
    pub fn history(&self) -> &TransitionLog {
        &self.log
    }

    /// Make `to` the current state.
    ///
    /// Runs the outgoing state's `on_exit` (when one exists), records the
    /// change, then runs `to`'s `on_enter`. Used both to initialize the
    /// controller and to execute a fired transition. The current-state
    /// assignment happens before `on_enter` runs, so a panicking hook
    /// leaves the controller either fully transitioned or fully not.
    pub fn set_state(&mut self, graph: &mut StateGraph, to: StateId) {
        let from = self.current;
        if let Some(from) = from {
            graph.run_exit(from);
        }
        self.current = Some(to);
        self.log.record(TransitionRecord {
            from,
            to,
            timestamp: Utc::now(),
        });
        graph.run_enter(to);
    }

    /// Advance the hierarchy by one cycle.
    ///
    /// Executes the fixed per-tick order:
    ///
    /// 1. Resolve the current state's final default-entry leaf; if there is
    ///    one, the current state is an unresolved composite, so switch to
    ///    that leaf (its `on_enter` runs, the composite's `on_exit` runs).
    ///    Multi-level nesting resolves in this single step.
    /// 2. Run the active leaf's `on_update` exactly once.
    /// 3. Resolve the transition graph from the active leaf (ancestors
    ///    first, see [`StateGraph::transition_state`]); if a transition
    ///    fires, switch to its target. A composite target is descended into
    ///    on the next tick's step 1, not this one.
    ///
    /// # Errors
    ///
    /// [`TickError::NotStarted`] when no state has been set. This is a
    /// caller setup bug; it is reported loudly rather than no-opped so it
    /// cannot be masked.
    pub fn tick(&mut self, graph: &mut StateGraph) -> Result<(), TickError> {
        let mut active = self.current.ok_or(TickError::NotStarted)?;

        if let Some(entry) = graph.final_entry_state(active) {
            self.set_state(graph, entry);
            active = entry;
        }

        graph.run_update(active);

        if let Some(to) = graph.transition_state(active) {
            self.set_state(graph, to);
        }

        Ok(())
    }
}

impl Default for Hfsm {
    fn default() -> Self {
        Self::new()
    }
}

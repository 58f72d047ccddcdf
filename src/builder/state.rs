//! Builder for configuring states.

use crate::core::{Behavior, Callbacks, Hook, StateGraph, StateNode};

/// Builder for a single state's configuration.
///
/// Collapses the many construction shapes of a state (name only, name plus
/// update, full hook set, trait-object behavior) into one explicit path:
/// every combination is expressed by calling only the setters you need, and
/// [`build`](Self::build) inserts the state into the graph and returns its
/// handle.
///
/// # Example
///
/// ```rust
/// use canopy::StateGraph;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
///
/// let ticks = Arc::new(AtomicU32::new(0));
/// let counter = Arc::clone(&ticks);
///
/// let mut graph = StateGraph::new();
/// let working = graph
///     .state("working")
///     .on_enter(|| println!("started"))
///     .on_update(move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     })
///     .build();
///
/// graph.run_update(working);
/// assert_eq!(ticks.load(Ordering::SeqCst), 1);
/// ```
pub struct StateBuilder<'g> {
    graph: &'g mut StateGraph,
    name: String,
    behavior: Option<Box<dyn Behavior + Send>>,
    enter: Option<Hook>,
    update: Option<Hook>,
    exit: Option<Hook>,
}

impl<'g> StateBuilder<'g> {
    pub(crate) fn new(graph: &'g mut StateGraph, name: String) -> Self {
        Self {
            graph,
            name,
            behavior: None,
            enter: None,
            update: None,
            exit: None,
        }
    }

    /// Set the enter hook.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.enter = Some(Box::new(hook));
        self
    }

    /// Set the update hook, run once per tick while the state is the
    /// active leaf.
    pub fn on_update<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.update = Some(Box::new(hook));
        self
    }

    /// Set the exit hook.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.exit = Some(Box::new(hook));
        self
    }

    /// Supply a complete [`Behavior`] implementation instead of closures.
    ///
    /// Takes precedence over any closure hooks set on this builder.
    pub fn behavior<B>(mut self, behavior: B) -> Self
    where
        B: Behavior + Send + 'static,
    {
        self.behavior = Some(Box::new(behavior));
        self
    }

    /// Insert the state into the graph and return its handle.
    ///
    /// Hooks that were never set stay no-ops, so a bare named state is a
    /// valid leaf with empty behavior.
    pub fn build(self) -> crate::StateId {
        let behavior = self.behavior.unwrap_or_else(|| {
            Box::new(Callbacks {
                enter: self.enter,
                update: self.update,
                exit: self.exit,
            })
        });
        self.graph.insert(StateNode::new(self.name, behavior))
    }
}

impl StateGraph {
    /// Start configuring a new state named `name`.
    ///
    /// The state is inserted into the graph when the returned builder's
    /// [`build`](StateBuilder::build) is called.
    pub fn state(&mut self, name: &str) -> StateBuilder<'_> {
        StateBuilder::new(self, name.to_string())
    }
}

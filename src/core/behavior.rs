//! State behaviors: enter, update, and exit hooks.
//!
//! A state's logic is a capability set of three lifecycle hooks. Concrete
//! state logic either implements [`Behavior`] directly or supplies closures
//! through the builder, which wraps them in an adapter behind the scenes.

/// Lifecycle hooks for one state.
///
/// Every hook defaults to a no-op, so an implementation only overrides the
/// lifecycle points it cares about. The engine calls `on_enter` when a state
/// becomes current, `on_update` exactly once per tick while it is the active
/// leaf, and `on_exit` when it stops being current.
///
/// Hooks take `&mut self`, so a behavior may keep its own mutable state
/// across calls (counters, timers, scratch data).
///
/// # Example
///
/// ```rust
/// use canopy::{Behavior, StateGraph};
///
/// struct Patrol {
///     steps: u32,
/// }
///
/// impl Behavior for Patrol {
///     fn on_enter(&mut self) {
///         self.steps = 0;
///     }
///
///     fn on_update(&mut self) {
///         self.steps += 1;
///     }
/// }
///
/// let mut graph = StateGraph::new();
/// let patrol = graph.state("patrol").behavior(Patrol { steps: 0 }).build();
/// assert_eq!(graph.name(patrol), "patrol");
/// ```
pub trait Behavior {
    /// Called when the state becomes the current state.
    fn on_enter(&mut self) {}

    /// Called once per tick while the state is the active leaf.
    fn on_update(&mut self) {}

    /// Called when the state stops being the current state.
    fn on_exit(&mut self) {}
}

pub(crate) type Hook = Box<dyn FnMut() + Send>;

/// Closure-backed behavior used by the builder's `on_enter` / `on_update` /
/// `on_exit` methods. Missing hooks stay no-ops.
pub(crate) struct Callbacks {
    pub(crate) enter: Option<Hook>,
    pub(crate) update: Option<Hook>,
    pub(crate) exit: Option<Hook>,
}

impl Behavior for Callbacks {
    fn on_enter(&mut self) {
        if let Some(hook) = &mut self.enter {
            hook();
        }
    }

    fn on_update(&mut self) {
        if let Some(hook) = &mut self.update {
            hook();
        }
    }

    fn on_exit(&mut self) {
        if let Some(hook) = &mut self.exit {
            hook();
        }
    }
}

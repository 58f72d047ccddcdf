//! Macros for ergonomic hierarchy construction.

/// Declare several bare named states at once.
///
/// Each identifier becomes a `let` binding holding the new state's
/// [`StateId`](crate::StateId), with the identifier itself as the state's
/// display name. The states carry no hooks; wire behavior-heavy states
/// through [`StateGraph::state`](crate::StateGraph::state) instead.
///
/// # Example
///
/// ```rust
/// use canopy::{states, StateGraph};
///
/// let mut graph = StateGraph::new();
/// states!(graph => idle, walk, run);
///
/// graph.add_children(idle, &[walk, run]);
/// assert_eq!(graph.name(walk), "walk");
/// assert_eq!(graph.entry_state(idle), Some(walk));
/// ```
#[macro_export]
macro_rules! states {
    ($graph:expr => $($name:ident),+ $(,)?) => {
        $(
            let $name = $graph.state(stringify!($name)).build();
        )+
    };
}

//! Builder API for ergonomic hierarchy construction.
//!
//! States are configured through [`StateBuilder`] (reached via
//! [`StateGraph::state`](crate::StateGraph::state)), which replaces a pile
//! of constructor overloads with one explicit configuration path. The
//! [`states!`](crate::states) macro covers the common case of declaring a
//! batch of bare named states.

pub mod macros;
pub mod state;

pub use state::StateBuilder;

//! Core hierarchy types and resolution logic.
//!
//! This module contains everything the controller drives:
//! - State handles and the arena that owns them ([`StateId`], [`StateGraph`])
//! - Lifecycle hooks via the [`Behavior`] trait
//! - Guard predicates via [`Condition`]
//! - The [`TransitionLog`] observability trace
//!
//! Resolution (`final_entry_state`, `transition_state`) is pure: it reads
//! the graph and probes conditions without mutating anything.

mod behavior;
mod condition;
mod graph;
mod log;
mod state;

pub use behavior::Behavior;
pub use condition::Condition;
pub use graph::StateGraph;
pub use log::{TransitionLog, TransitionRecord};
pub use state::StateId;

pub(crate) use behavior::{Callbacks, Hook};
pub(crate) use state::StateNode;

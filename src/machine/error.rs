//! Controller errors.

use thiserror::Error;

/// Errors surfaced by [`Hfsm::tick`](crate::Hfsm::tick).
///
/// The engine has no recoverable runtime errors of its own; the only
/// failure is the precondition violation of ticking a controller that was
/// never given a state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TickError {
    #[error("no current state: call set_state(..) before tick()")]
    NotStarted,
}

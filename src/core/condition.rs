//! Guard conditions for controlling transitions.
//!
//! Conditions are zero-argument boolean predicates probed each time the
//! transition graph is evaluated. They read whatever world state the caller
//! captured when wiring the graph; the engine never passes them anything.

/// Predicate deciding whether a transition may fire.
///
/// Evaluated with no arguments every time the owning transition is probed,
/// so a condition usually captures shared caller state (an `Arc<AtomicBool>`,
/// a channel probe, a clock comparison). Conditions should be fast and
/// non-blocking; a slow condition stalls the tick for exactly its duration.
///
/// # Example
///
/// ```rust
/// use canopy::Condition;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let alarm = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&alarm);
/// let triggered = Condition::new(move || flag.load(Ordering::SeqCst));
///
/// assert!(!triggered.check());
/// alarm.store(true, Ordering::SeqCst);
/// assert!(triggered.check());
/// ```
pub struct Condition {
    predicate: Box<dyn Fn() -> bool + Send + Sync>,
}

impl Condition {
    /// Create a condition from a predicate closure.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Condition {
            predicate: Box::new(predicate),
        }
    }

    /// The unconditional guard: always fires.
    ///
    /// This is what [`StateGraph::transition`](crate::StateGraph::transition)
    /// attaches when no explicit condition is given.
    pub fn always() -> Self {
        Condition::new(|| true)
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }

    /// Combine two conditions; the result holds only when both hold.
    ///
    /// Evaluation short-circuits: `other` is not probed when `self` fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use canopy::Condition;
    ///
    /// let both = Condition::new(|| true).and(Condition::new(|| false));
    /// assert!(!both.check());
    /// ```
    pub fn and(self, other: Condition) -> Condition {
        Condition::new(move || self.check() && other.check())
    }
}

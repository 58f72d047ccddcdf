//! Canopy: a hierarchical finite state machine engine.
//!
//! Canopy lets a caller compose nested states with enter/update/exit
//! behavior and guarded transitions, then drive the whole hierarchy with a
//! single [`Hfsm::tick`] per control cycle. It is built for embedding in a
//! larger loop (game logic, robotics behavior, UI mode management) where
//! the host owns timing: wire the hierarchy once during setup, then call
//! `tick` once per cycle for the life of the machine.
//!
//! # Core Concepts
//!
//! - **[`StateGraph`]**: arena owning every state; composition and
//!   transitions are wired through it and addressed by [`StateId`] handles
//! - **[`Behavior`]**: per-state enter/update/exit hooks, as a trait or as
//!   closures on the builder
//! - **[`Condition`]**: zero-argument guard predicates on transitions
//! - **[`Hfsm`]**: the controller; holds the current state and runs the
//!   per-tick descend/update/transition cycle
//!
//! Each tick descends composite states into their default entry leaf, runs
//! the active leaf's update, then probes the transition graph from the
//! outside in: an ancestor's satisfied guard always preempts the leaf's
//! own transitions, so an outer state can interrupt whichever descendant
//! happens to be active.
//!
//! # Example
//!
//! ```rust
//! use canopy::{Condition, Hfsm, StateGraph};
//! use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
//! use std::sync::Arc;
//!
//! let mut graph = StateGraph::new();
//!
//! let steps = Arc::new(AtomicU32::new(0));
//! let walker = Arc::clone(&steps);
//! let on_duty = graph.state("on_duty").build();
//! let patrol = graph
//!     .state("patrol")
//!     .on_update(move || {
//!         walker.fetch_add(1, Ordering::SeqCst);
//!     })
//!     .build();
//! let off_duty = graph.state("off_duty").build();
//! graph.add_children(on_duty, &[patrol]);
//!
//! // A shift-end transition on the composite interrupts any active child.
//! let shift_over = Arc::new(AtomicBool::new(false));
//! let clock = Arc::clone(&shift_over);
//! graph.transition_when(on_duty, off_duty, Condition::new(move || clock.load(Ordering::SeqCst)));
//!
//! let mut hfsm = Hfsm::new();
//! hfsm.set_state(&mut graph, on_duty);
//!
//! hfsm.tick(&mut graph).unwrap(); // descends to patrol, walks one step
//! hfsm.tick(&mut graph).unwrap();
//! assert_eq!(hfsm.current_state(), Some(patrol));
//! assert_eq!(steps.load(Ordering::SeqCst), 2);
//!
//! shift_over.store(true, Ordering::SeqCst);
//! hfsm.tick(&mut graph).unwrap();
//! assert_eq!(hfsm.current_state(), Some(off_duty));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::StateBuilder;
pub use core::{Behavior, Condition, StateGraph, StateId, TransitionLog, TransitionRecord};
pub use machine::{Hfsm, TickError};

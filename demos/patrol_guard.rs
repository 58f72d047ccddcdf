//! Patrol Guard Hierarchy
//!
//! This example demonstrates nested composition and ancestor interruption:
//! a composite "on duty" state contains patrol/chase children, and the
//! shift-end transition on the composite preempts whichever child is
//! active.
//!
//! Key concepts:
//! - Composite states with default entry children
//! - Upward transition search (outer states interrupt inner ones)
//! - Transition log inspection after the run
//!
//! Run with: cargo run --example patrol_guard

use canopy::{Condition, Hfsm, StateGraph};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

fn main() {
    println!("=== Patrol Guard ===\n");

    let mut graph = StateGraph::new();

    let clock = Arc::new(AtomicU32::new(0));
    let intruder = Arc::new(AtomicBool::new(false));

    let on_duty = graph.state("on_duty").build();
    let ticker = Arc::clone(&clock);
    let patrol = graph
        .state("patrol")
        .on_enter(|| println!("patrolling the perimeter"))
        .on_update(move || {
            ticker.fetch_add(1, Ordering::SeqCst);
        })
        .build();
    let chase = graph
        .state("chase")
        .on_enter(|| println!("intruder spotted, giving chase"))
        .on_exit(|| println!("breaking off the chase"))
        .build();
    let off_duty = graph
        .state("off_duty")
        .on_enter(|| println!("shift over, heading home"))
        .build();

    graph.add_children(on_duty, &[patrol, chase]);

    let spotted = Arc::clone(&intruder);
    graph.transition_when(patrol, chase, Condition::new(move || spotted.load(Ordering::SeqCst)));
    let calmed = Arc::clone(&intruder);
    graph.transition_when(chase, patrol, Condition::new(move || !calmed.load(Ordering::SeqCst)));

    // Shift end lives on the composite: it fires no matter which child is
    // active when the clock runs out.
    let shift = Arc::clone(&clock);
    graph.transition_when(on_duty, off_duty, Condition::new(move || {
        shift.load(Ordering::SeqCst) >= 6
    }));

    let mut hfsm = Hfsm::new();
    hfsm.set_state(&mut graph, on_duty);

    for tick in 0..10 {
        intruder.store(tick == 3, Ordering::SeqCst);
        hfsm.tick(&mut graph).expect("machine was initialized");
        if let Some(current) = hfsm.current_state() {
            println!("tick {tick}: {}", graph.name(current));
        }
    }

    let path: Vec<&str> = hfsm
        .history()
        .path()
        .into_iter()
        .map(|id| graph.name(id))
        .collect();
    println!("\nVisited: {}", path.join(" -> "));
    println!("\n=== Example Complete ===");
}

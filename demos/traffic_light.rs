//! Traffic Light Hierarchy
//!
//! This example demonstrates a flat cyclic machine driven by per-frame
//! ticks.
//!
//! Key concepts:
//! - Guarded cyclic transitions (states repeat)
//! - Tick-counting guards captured by conditions
//! - The caller owns timing: one tick() call per cycle
//!
//! Run with: cargo run --example traffic_light

use canopy::{Condition, Hfsm, StateGraph};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

fn timed_light(
    graph: &mut StateGraph,
    name: &'static str,
    timer: &Arc<AtomicU32>,
) -> canopy::StateId {
    let reset = Arc::clone(timer);
    let advance = Arc::clone(timer);
    graph
        .state(name)
        .on_enter(move || {
            println!("{name}: on");
            reset.store(0, Ordering::SeqCst);
        })
        .on_update(move || {
            advance.fetch_add(1, Ordering::SeqCst);
        })
        .build()
}

fn main() {
    println!("=== Traffic Light ===\n");

    let mut graph = StateGraph::new();
    let timer = Arc::new(AtomicU32::new(0));

    let red = timed_light(&mut graph, "red", &timer);
    let green = timed_light(&mut graph, "green", &timer);
    let yellow = timed_light(&mut graph, "yellow", &timer);

    // Each light holds for a fixed number of ticks before handing over.
    let after = |timer: &Arc<AtomicU32>, ticks: u32| {
        let probe = Arc::clone(timer);
        Condition::new(move || probe.load(Ordering::SeqCst) >= ticks)
    };
    graph.transition_when(red, green, after(&timer, 4));
    graph.transition_when(green, yellow, after(&timer, 3));
    graph.transition_when(yellow, red, after(&timer, 1));

    let mut hfsm = Hfsm::new();
    hfsm.set_state(&mut graph, red);

    for _ in 0..16 {
        hfsm.tick(&mut graph).expect("machine was initialized");
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

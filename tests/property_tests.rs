//! Property-based tests for the hierarchy engine.
//!
//! These tests use proptest to verify the engine's invariants across many
//! randomly generated hierarchies and tick schedules.

use canopy::{Condition, Hfsm, StateGraph};
use proptest::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Shared journal of lifecycle events, used to assert ordering invariants.
#[derive(Clone, Default)]
struct Journal(Arc<Mutex<Vec<(usize, &'static str)>>>);

impl Journal {
    fn push(&self, state: usize, kind: &'static str) {
        self.0.lock().unwrap().push((state, kind));
    }

    fn events(&self) -> Vec<(usize, &'static str)> {
        self.0.lock().unwrap().clone()
    }
}

fn journaled_state(graph: &mut StateGraph, journal: &Journal, tag: usize) -> canopy::StateId {
    let (e, u, x) = (journal.clone(), journal.clone(), journal.clone());
    graph
        .state(&format!("s{tag}"))
        .on_enter(move || e.push(tag, "enter"))
        .on_update(move || u.push(tag, "update"))
        .on_exit(move || x.push(tag, "exit"))
        .build()
}

proptest! {
    /// For any finite acyclic composition depth, the resolved default entry
    /// of a composite is a leaf.
    #[test]
    fn final_entry_state_is_always_a_leaf(depth in 1usize..32) {
        let mut graph = StateGraph::new();
        let root = graph.state("root").build();

        let mut parent = root;
        for level in 0..depth {
            let child = graph.state(&format!("level{level}")).build();
            graph.add_children(parent, &[child]);
            parent = child;
        }

        let resolved = graph.final_entry_state(root).unwrap();
        prop_assert_eq!(graph.entry_state(resolved), None);
        prop_assert_eq!(resolved, parent);
    }

    /// The first transition whose guard holds wins, in insertion order.
    #[test]
    fn transition_priority_is_insertion_order(guards in prop::collection::vec(any::<bool>(), 1..10)) {
        let mut graph = StateGraph::new();
        let from = graph.state("from").build();

        let mut targets = Vec::new();
        for (i, &open) in guards.iter().enumerate() {
            let target = graph.state(&format!("t{i}")).build();
            graph.transition_when(from, target, Condition::new(move || open));
            targets.push(target);
        }

        let expected = guards
            .iter()
            .position(|&open| open)
            .map(|i| targets[i]);
        prop_assert_eq!(graph.transition_state(from), expected);
    }

    /// Across any tick schedule, enters equal exits plus one, and no state
    /// is entered twice without an intervening exit.
    #[test]
    fn enter_exit_pairing_holds(schedule in prop::collection::vec(any::<bool>(), 1..40)) {
        let journal = Journal::default();
        let mut graph = StateGraph::new();
        let a = journaled_state(&mut graph, &journal, 0);
        let b = journaled_state(&mut graph, &journal, 1);
        let c = journaled_state(&mut graph, &journal, 2);

        let advance = Arc::new(AtomicU32::new(0));
        for (from, to) in [(a, b), (b, c), (c, a)] {
            let probe = Arc::clone(&advance);
            graph.transition_when(from, to, Condition::new(move || probe.load(Ordering::SeqCst) == 1));
        }

        let mut hfsm = Hfsm::new();
        hfsm.set_state(&mut graph, a);
        for &go in &schedule {
            advance.store(u32::from(go), Ordering::SeqCst);
            hfsm.tick(&mut graph).unwrap();
        }

        let events = journal.events();
        let enters = events.iter().filter(|(_, kind)| *kind == "enter").count();
        let exits = events.iter().filter(|(_, kind)| *kind == "exit").count();
        prop_assert_eq!(enters, exits + 1);

        let mut active: Option<usize> = None;
        for &(state, kind) in &events {
            match kind {
                "enter" => {
                    prop_assert!(active.is_none());
                    active = Some(state);
                }
                "exit" => {
                    prop_assert_eq!(active, Some(state));
                    active = None;
                }
                _ => {}
            }
        }
    }

    /// If no guard ever holds, repeated ticking only re-runs the same
    /// leaf's update and never enters or exits again after the first
    /// descent.
    #[test]
    fn stable_ticking_is_idempotent(ticks in 1usize..50) {
        let journal = Journal::default();
        let mut graph = StateGraph::new();
        let root = journaled_state(&mut graph, &journal, 0);
        let leaf = journaled_state(&mut graph, &journal, 1);
        let other = journaled_state(&mut graph, &journal, 2);
        graph.add_children(root, &[leaf]);
        graph.transition_when(leaf, other, Condition::new(|| false));

        let mut hfsm = Hfsm::new();
        hfsm.set_state(&mut graph, root);
        for _ in 0..ticks {
            hfsm.tick(&mut graph).unwrap();
        }

        let events = journal.events();
        let updates = events.iter().filter(|&&(s, k)| s == 1 && k == "update").count();
        let enters = events.iter().filter(|&&(_, k)| k == "enter").count();
        prop_assert_eq!(updates, ticks);
        prop_assert_eq!(enters, 2); // root once, leaf once
        prop_assert_eq!(hfsm.current_state(), Some(leaf));
    }

    /// The transition log's path is exactly the sequence of entered states.
    #[test]
    fn history_path_matches_enter_sequence(schedule in prop::collection::vec(any::<bool>(), 1..30)) {
        let journal = Journal::default();
        let mut graph = StateGraph::new();
        let a = journaled_state(&mut graph, &journal, 0);
        let b = journaled_state(&mut graph, &journal, 1);

        let advance = Arc::new(AtomicU32::new(0));
        for (from, to) in [(a, b), (b, a)] {
            let probe = Arc::clone(&advance);
            graph.transition_when(from, to, Condition::new(move || probe.load(Ordering::SeqCst) == 1));
        }

        let mut hfsm = Hfsm::new();
        hfsm.set_state(&mut graph, a);
        for &go in &schedule {
            advance.store(u32::from(go), Ordering::SeqCst);
            hfsm.tick(&mut graph).unwrap();
        }

        let entered: Vec<usize> = journal
            .events()
            .iter()
            .filter(|(_, kind)| *kind == "enter")
            .map(|&(state, _)| state)
            .collect();
        let path: Vec<usize> = hfsm.history().path().iter().map(|id| id.index()).collect();
        prop_assert_eq!(path, entered);
    }
}

//! Integration tests for `SharedSet`.
//!
//! These tests verify that a `SharedSet` handle can be cloned across threads
//! while the core `Set` stays single-threaded.

#![cfg(feature = "shared")]

use rstest::rstest;
use setwise::set::{Set, SharedSet};
use std::thread;

#[rstest]
fn test_cross_thread_inserts_are_visible() {
    let shared = SharedSet::new();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let handle = shared.clone();
            thread::spawn(move || {
                for offset in 0..100 {
                    handle.insert(worker * 100 + offset);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(shared.snapshot(), Set::of(0..400));
}

#[rstest]
fn test_duplicate_inserts_across_threads_collapse() {
    let shared = SharedSet::new();

    thread::scope(|scope| {
        for _ in 0..8 {
            let handle = shared.clone();
            scope.spawn(move || {
                for element in 0..50 {
                    handle.insert(element);
                }
            });
        }
    });

    assert_eq!(shared.len(), 50);
}

#[rstest]
fn test_readers_observe_consistent_batches() {
    let shared = SharedSet::from(Set::of([0, 1]));

    thread::scope(|scope| {
        let writer = shared.clone();
        scope.spawn(move || {
            for round in 1..100 {
                // Each batch keeps the pair {2n, 2n + 1} together
                writer.write(|set| {
                    set.clear();
                    set.insert(round * 2);
                    set.insert(round * 2 + 1);
                });
            }
        });

        let reader = shared.clone();
        scope.spawn(move || {
            for _ in 0..100 {
                reader.read(|set| {
                    assert_eq!(set.len(), 2);
                    let low = set.iter().copied().min().expect("pair is never empty");
                    assert_eq!(low % 2, 0);
                    assert!(set.contains(&(low + 1)));
                });
            }
        });
    });

    assert_eq!(shared.snapshot(), Set::of([198, 199]));
}

#[rstest]
fn test_snapshot_survives_later_mutation() {
    let shared = SharedSet::from(Set::of(["alpha", "beta"]));
    let snapshot = shared.snapshot();

    thread::scope(|scope| {
        let handle = shared.clone();
        scope.spawn(move || handle.remove("alpha"));
    });

    assert!(snapshot.contains("alpha"));
    assert!(!shared.contains("alpha"));
}

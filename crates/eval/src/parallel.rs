// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use std::thread;

use crate::{Card, Combinations, binomial};

/// Calls the `f` closure for each k-cards subset of `cards` from `num_tasks`
/// scoped threads.
///
/// The closure takes the task identifier (0..num_tasks) and a slice of k
/// cards. Subsets are split in contiguous ranges, one for each task, so each
/// subset is visited exactly once.
///
/// Panics if k is not 2 <= k <= 7 or if `num_tasks` is zero.
///
/// ```
/// # use primerank_eval::*;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let cards = Card::all().take(10).collect::<Vec<_>>();
/// let count = AtomicUsize::new(0);
/// par_for_each(&cards, 4, 5, |_task_id, hand| {
///     assert_eq!(hand.len(), 5);
///     count.fetch_add(1, Ordering::Relaxed);
/// });
/// assert_eq!(count.into_inner(), 252);
/// ```
pub fn par_for_each<F>(cards: &[Card], num_tasks: usize, k: usize, f: F)
where
    F: Fn(usize, &[Card]) + Send + Sync,
{
    assert!(num_tasks > 0, "num_tasks must be positive");

    match k {
        2 => par_for_each_k::<2, _>(cards, num_tasks, &f),
        3 => par_for_each_k::<3, _>(cards, num_tasks, &f),
        4 => par_for_each_k::<4, _>(cards, num_tasks, &f),
        5 => par_for_each_k::<5, _>(cards, num_tasks, &f),
        6 => par_for_each_k::<6, _>(cards, num_tasks, &f),
        7 => par_for_each_k::<7, _>(cards, num_tasks, &f),
        _ => panic!("k={k} must be 2 <= k <= 7"),
    }
}

fn par_for_each_k<const K: usize, F>(cards: &[Card], num_tasks: usize, f: &F)
where
    F: Fn(usize, &[Card]) + Sync,
{
    let n = cards.len();
    let num_hands = binomial(n, K);
    let hands_per_task = num_hands.div_ceil(num_tasks);

    thread::scope(|s| {
        for task_id in 0..num_tasks {
            let start = task_id * hands_per_task;
            if start >= num_hands {
                break;
            }

            s.spawn(move || {
                for idx in Combinations::<K>::starting_at(n, start).take(hands_per_task) {
                    f(task_id, &idx.map(|i| cards[i]));
                }
            });
        }
    });
}

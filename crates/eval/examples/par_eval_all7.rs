// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_eval_all7 -- --tasks 8
// ```

use anyhow::{Result, ensure};
use clap::Parser;
use log::{error, info};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use primerank_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 4)]
    tasks: usize,
    /// Number of cards in each hand, from 5 to 7.
    #[clap(long, short = 'n', default_value_t = 7)]
    hand_size: usize,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    const NUM_CATEGORIES: usize = 9;

    ensure!(cli.tasks > 0, "the number of tasks must be positive");
    if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&cli.hand_size) {
        return Err(EvalError::InvalidHandSize(cli.hand_size).into());
    }

    lookup_table();
    info!(
        "Evaluating all {} cards hands with {} tasks",
        cli.hand_size, cli.tasks
    );

    // Per task counters to avoid contention.
    let task_counters = (0..cli.tasks)
        .map(|_| {
            (0..NUM_CATEGORIES)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let deck = Card::all().collect::<Vec<_>>();
    let failures = AtomicU64::new(0);
    let now = Instant::now();

    par_for_each(&deck, cli.tasks, cli.hand_size, |task_id, hand| {
        match classify_hand(hand) {
            Ok(category) => {
                let counters = &task_counters[task_id];
                counters[category.class_rank() as usize - 1].fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                error!("Task {task_id} failed to evaluate hand: {e}");
                failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let failures = failures.into_inner();
    ensure!(failures == 0, "{failures} hands failed to evaluate");

    // Aggregate counters.
    let agg = (0..NUM_CATEGORIES)
        .map(|c| {
            task_counters
                .iter()
                .map(|counts| counts[c].load(Ordering::Relaxed))
                .sum()
        })
        .collect::<Vec<u64>>();

    let total = agg.iter().sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for (category, count) in Category::ALL.iter().zip(agg) {
        println!("{:<17}{count}", format!("{category}:"));
    }

    Ok(())
}

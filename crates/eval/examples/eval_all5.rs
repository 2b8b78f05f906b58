// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// Distinct ranks:  7462
//
// Straight Flush:  40
// Four of a Kind:  624
// Full House:      3744
// Flush:           5108
// Straight:        10200
// Three of a Kind: 54912
// Two Pair:        123552
// Pair:            1098240
// High Card:       1302540
// ```

use ahash::AHashSet;
use anyhow::{Result, ensure};
use log::{error, info};
use std::time::Instant;

use primerank_eval::*;

/// Expected number of hands for each category, from the strongest.
const EXPECTED: [u64; 9] = [40, 624, 3744, 5108, 10200, 54912, 123552, 1098240, 1302540];

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let now = Instant::now();
    let table = lookup_table();
    info!(
        "Built tables with {} flush and {} unsuited entries in {:.3}s",
        table.flush_len(),
        table.unsuited_len(),
        now.elapsed().as_secs_f64()
    );

    let deck = Card::all().collect::<Vec<_>>();
    let mut counts = [0u64; 9];
    let mut ranks = AHashSet::default();

    let now = Instant::now();
    for hand in combinations::<5, _>(&deck) {
        let rank = evaluate(&hand)?;
        counts[rank.category().class_rank() as usize - 1] += 1;
        ranks.insert(rank);
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}", total as f64 / elapsed);
    println!("Distinct ranks:  {}\n", ranks.len());

    for (category, count) in Category::ALL.iter().zip(counts) {
        println!("{:<17}{count}", format!("{category}:"));
    }

    ensure!(
        ranks.len() == MAX_HIGH_CARD as usize,
        "expected {MAX_HIGH_CARD} distinct ranks, got {}",
        ranks.len()
    );
    ensure!(counts == EXPECTED, "unexpected category counts {counts:?}");

    Ok(())
}

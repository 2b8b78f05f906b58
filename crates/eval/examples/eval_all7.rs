// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
//
// Straight Flush:  41584
// Four of a Kind:  224848
// Full House:      3473184
// Flush:           4047644
// Straight:        6180020
// Three of a Kind: 6461620
// Two Pair:        31433400
// Pair:            58627800
// High Card:       23294460
// ```

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::time::Instant;

use primerank_eval::*;

#[derive(Debug, Parser)]
struct Cli {
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
    // Force the tables build so that it is not included in the timing.
    lookup_table();

    let deck = Card::all().collect::<Vec<_>>();
    info!("Evaluating all {} cards hands", cli.hand_size);

    let now = Instant::now();
    let counts = match cli.hand_size {
        5 => count_categories::<5>(&deck)?,
        6 => count_categories::<6>(&deck)?,
        7 => count_categories::<7>(&deck)?,
        n => return Err(EvalError::InvalidHandSize(n).into()),
    };

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for (category, count) in Category::ALL.iter().zip(counts) {
        println!("{:<17}{count}", format!("{category}:"));
    }

    Ok(())
}

/// Counts the hands in each category for all the R cards hands.
fn count_categories<const R: usize>(deck: &[Card]) -> Result<[u64; 9]> {
    let mut counts = [0u64; 9];
    for hand in combinations::<R, _>(deck) {
        let category = classify_hand(&hand)?;
        counts[category.class_rank() as usize - 1] += 1;
    }

    Ok(counts)
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Primerank Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. This evaluator is a variant
//! of the [Cactus Kev's][kevlink] poker evaluator: every distinct 5 cards hand
//! is mapped to a product of primes, one prime per rank, and the product is used
//! to look up the hand rank in a table built once on first use.
//!
//! Ranks go from 1 for a royal flush to 7462 for the worst high card, a lower
//! rank is a better hand:
//!
//! ```
//! # use primerank_eval::*;
//! let cards = [Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]
//!     .map(|r| Card::new(r, Suit::Spades));
//! let rank = evaluate(&cards).unwrap();
//! assert_eq!(rank.category(), Category::StraightFlush);
//! assert!(rank.is_better_than(HandRank::WORST));
//! ```
//!
//! [HandValue] adds the hand classification to the rank and compares a better
//! hand as greater:
//!
//! ```
//! # use primerank_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Card::all()
//!     .filter(|c| c.suit() == Suit::Clubs)
//!     .take(10)
//!     .collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&cards[5..]).unwrap();
//! assert!(v2 > v1);
//! assert_eq!(v2.class(), Classification::StraightFlush { high: Rank::Jack });
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod bits;
pub use bits::{BitPermutations, next_bit_permutation};

mod combinations;
pub use combinations::{Combinations, binomial, combinations};

mod error;
pub use error::EvalError;

mod eval;
pub use eval::{MAX_HAND_SIZE, MIN_HAND_SIZE, classify_hand, evaluate, evaluate_with_board};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_for_each;

mod rank;
pub use rank::{
    Category, HandRank, MAX_FLUSH, MAX_FOUR_OF_A_KIND, MAX_FULL_HOUSE, MAX_HIGH_CARD, MAX_PAIR,
    MAX_STRAIGHT, MAX_STRAIGHT_FLUSH, MAX_THREE_OF_A_KIND, MAX_TWO_PAIR, classify, percentile,
};

mod table;
pub use table::{FLUSH_TABLE_SIZE, LookupTable, UNSUITED_TABLE_SIZE, lookup_table};

mod value;
pub use value::{Classification, HandValue};

// Reexport cards types.
pub use primerank_cards::{
    Card, InvalidCard, PRIMES, Rank, Suit, WHEEL_BITS, high_rank_from_rank_bits,
    prime_product_from_hand, prime_product_from_rank_bits,
};

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Primerank Poker cards types.
//!
//! This crate defines the bit-packed [Card] type used by the evaluator:
//!
//! ```
//! # use primerank_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let ad = Card::new(Rank::Ace, Suit::Diamonds);
//! assert_eq!(ah.prime(), 41);
//! assert_ne!(ah, ad);
//! ```
//!
//! and the prime products used as keys in the evaluator lookup tables, the
//! product of a hand primes does not depend on the cards order:
//!
//! ```
//! # use primerank_cards::{Card, Rank, Suit, prime_product_from_hand};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(prime_product_from_hand(&[ah, kd]), 41 * 37);
//! assert_eq!(prime_product_from_hand(&[kd, ah]), 41 * 37);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, InvalidCard, PRIMES, Rank, Suit};

mod prime;
pub use prime::{
    WHEEL_BITS, high_rank_from_rank_bits, prime_product_from_hand, prime_product_from_rank_bits,
};

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Prime products of ranks.
//!
//! Every rank maps to a distinct prime so that, by unique factorization, the
//! product of a hand primes identifies its ranks multiset regardless of the
//! cards order. The largest product for 7 cards (four aces and three kings)
//! fits comfortably in a `u64`.
use crate::{Card, PRIMES, Rank};

/// Bit mask with the wheel ranks (A-2-3-4-5) set.
pub const WHEEL_BITS: u16 = 0b1_0000_0000_1111;

/// Multiplies the primes of all the cards in the hand.
#[inline]
pub fn prime_product_from_hand(cards: &[Card]) -> u64 {
    cards.iter().map(|c| c.prime() as u64).product()
}

/// Multiplies the primes of the ranks whose bits are set in `rank_bits`.
///
/// Only the 13 low bits are considered, suits are irrelevant.
pub fn prime_product_from_rank_bits(rank_bits: u16) -> u64 {
    PRIMES
        .iter()
        .enumerate()
        .filter(|(i, _)| rank_bits & (1 << i) != 0)
        .map(|(_, &p)| p as u64)
        .product()
}

/// Returns the highest rank set in `rank_bits`.
///
/// The wheel (A-2-3-4-5) is a five high straight so it returns [Rank::Five].
///
/// Panics if no rank bit is set.
pub fn high_rank_from_rank_bits(rank_bits: u16) -> Rank {
    if rank_bits & 0x1fff == WHEEL_BITS {
        return Rank::Five;
    }

    let bits = rank_bits & 0x1fff;
    assert!(bits != 0, "No rank bits set");
    let index = 15 - bits.leading_zeros() as u8;
    Rank::ALL[index as usize]
}

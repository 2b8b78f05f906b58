// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Same population count bit permutations.
//!
//! Uses the [next bit permutation][bithacks] trick to enumerate all the
//! integers with the same number of set bits in increasing order. For rank
//! masks with 5 bits set the increasing order is also the poker order for
//! hands of 5 distinct ranks, a higher mask always has a better high card.
//!
//! [bithacks]: http://www-graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation

/// Returns the next integer greater than `v` with the same number of bits set.
///
/// The value `v` must be nonzero.
#[inline]
pub fn next_bit_permutation(v: u32) -> u32 {
    let t = v | v.wrapping_sub(1);
    let not_t = !t;
    let low = (not_t & not_t.wrapping_neg()).wrapping_sub(1);
    t.wrapping_add(1) | low.checked_shr(v.trailing_zeros() + 1).unwrap_or(0)
}

/// An iterator over bit permutations that fit in a given width.
///
/// The iterator yields the seed followed by every permutation greater than the
/// seed that has no bits set above `width`.
#[derive(Debug, Clone)]
pub struct BitPermutations {
    next: u32,
    limit: u32,
}

impl BitPermutations {
    /// Creates an iterator starting at `seed` with values below `1 << width`.
    ///
    /// Panics if seed is zero or if width is greater than 31.
    pub fn new(seed: u32, width: u32) -> Self {
        assert!(seed != 0, "seed must have at least one bit set");
        assert!(width < 32, "width={width} must be < 32");

        Self {
            next: seed,
            limit: 1 << width,
        }
    }
}

impl Iterator for BitPermutations {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.next >= self.limit {
            return None;
        }

        let bits = self.next;
        self.next = next_bit_permutation(bits);
        Some(bits)
    }
}

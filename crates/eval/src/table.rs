// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values lookup tables.
//!
//! The evaluator uses two tables keyed by the prime product of a hand ranks:
//!
//! - the flush table, with an entry for each of the 1287 sets of 5 distinct
//!   ranks, for hands where all cards have the same suit.
//! - the unsuited table, with 6175 entries for all the other hands: straights,
//!   high cards, and hands with paired ranks.
//!
//! Tables are built by enumerating each category from the strongest to the
//! weakest hand and assigning increasing hand ranks, so that the 7462 distinct
//! hands end up with distinct, totally ordered ranks.
use ahash::AHashMap;
use log::debug;
use std::{sync::LazyLock, time::Instant};

use crate::{
    BitPermutations, Classification, HandRank, HandValue, Rank, WHEEL_BITS, combinations,
    high_rank_from_rank_bits, prime_product_from_rank_bits, rank::*,
};

/// Number of entries in the flush table (13 choose 5).
pub const FLUSH_TABLE_SIZE: usize = 1287;

/// Number of entries in the unsuited table.
pub const UNSUITED_TABLE_SIZE: usize = 6175;

/// Straight rank masks from the ace high straight down to the wheel.
const STRAIGHTS: [u16; 10] = [
    0b1_1111_0000_0000,
    0b0_1111_1000_0000,
    0b0_0111_1100_0000,
    0b0_0011_1110_0000,
    0b0_0001_1111_0000,
    0b0_0000_1111_1000,
    0b0_0000_0111_1100,
    0b0_0000_0011_1110,
    0b0_0000_0001_1111,
    WHEEL_BITS,
];

/// The process wide tables, built on first use.
static TABLE: LazyLock<LookupTable> = LazyLock::new(LookupTable::build);

/// Returns the shared lookup table, building it if this is the first call.
///
/// Concurrent first calls block until the table is built by one of them.
pub fn lookup_table() -> &'static LookupTable {
    &TABLE
}

/// Maps from prime products to hand values.
#[derive(Debug, Clone)]
pub struct LookupTable {
    flush: AHashMap<u64, HandValue>,
    unsuited: AHashMap<u64, HandValue>,
}

impl LookupTable {
    /// Builds the flush and unsuited tables.
    ///
    /// Prefer [lookup_table] that builds the tables only once.
    pub fn build() -> Self {
        let now = Instant::now();

        let mut table = Self {
            flush: AHashMap::with_capacity(FLUSH_TABLE_SIZE),
            unsuited: AHashMap::with_capacity(UNSUITED_TABLE_SIZE),
        };

        table.straights_and_flushes();
        table.four_of_a_kind();
        table.full_house();
        table.three_of_a_kind();
        table.two_pair();
        table.pair();

        debug!(
            "Built lookup tables flush={} unsuited={} in {:.3}ms",
            table.flush.len(),
            table.unsuited.len(),
            now.elapsed().as_secs_f64() * 1000.0
        );

        table
    }

    /// Gets the value for 5 cards of the same suit given their ranks product.
    #[inline]
    pub fn flush(&self, product: u64) -> Option<&HandValue> {
        self.flush.get(&product)
    }

    /// Gets the value for 5 cards of mixed suits given their ranks product.
    #[inline]
    pub fn unsuited(&self, product: u64) -> Option<&HandValue> {
        self.unsuited.get(&product)
    }

    /// Number of entries in the flush table.
    pub fn flush_len(&self) -> usize {
        self.flush.len()
    }

    /// Number of entries in the unsuited table.
    pub fn unsuited_len(&self) -> usize {
        self.unsuited.len()
    }

    /// Iterates the flush table entries in arbitrary order.
    pub fn flush_entries(&self) -> impl Iterator<Item = (u64, &HandValue)> {
        self.flush.iter().map(|(&p, v)| (p, v))
    }

    /// Iterates the unsuited table entries in arbitrary order.
    pub fn unsuited_entries(&self) -> impl Iterator<Item = (u64, &HandValue)> {
        self.unsuited.iter().map(|(&p, v)| (p, v))
    }

    /// Straight flushes, straights, flushes, and high cards.
    ///
    /// These are all the hands with 5 distinct ranks, the same rank mask is a
    /// flush or straight flush when suited and a straight or high card when
    /// unsuited.
    fn straights_and_flushes(&mut self) {
        for (offset, &bits) in (1..).zip(STRAIGHTS.iter()) {
            let product = prime_product_from_rank_bits(bits);
            let high = high_rank_from_rank_bits(bits);

            insert(
                &mut self.flush,
                product,
                offset,
                Classification::StraightFlush { high },
            );
            insert(
                &mut self.unsuited,
                product,
                MAX_FLUSH + offset,
                Classification::Straight { high },
            );
        }

        // Masks are generated weakest first.
        let flushes = BitPermutations::new(0b11111, 13)
            .map(|bits| bits as u16)
            .filter(|bits| !STRAIGHTS.contains(bits))
            .collect::<Vec<_>>();
        debug_assert_eq!(flushes.len(), Category::Flush.count() as usize);

        for (offset, &bits) in (1..).zip(flushes.iter().rev()) {
            let product = prime_product_from_rank_bits(bits);
            let high = high_rank_from_rank_bits(bits);

            insert(
                &mut self.flush,
                product,
                MAX_FULL_HOUSE + offset,
                Classification::Flush { high },
            );
            insert(
                &mut self.unsuited,
                product,
                MAX_PAIR + offset,
                Classification::HighCard { high },
            );
        }
    }

    fn four_of_a_kind(&mut self) {
        let mut rank = MAX_STRAIGHT_FLUSH;
        for quads in Rank::ranks().rev() {
            for kicker in Rank::ranks().rev().filter(|&k| k != quads) {
                rank += 1;
                let product = prime(quads).pow(4) * prime(kicker);
                insert(
                    &mut self.unsuited,
                    product,
                    rank,
                    Classification::FourOfAKind { quads },
                );
            }
        }

        debug_assert_eq!(rank, MAX_FOUR_OF_A_KIND);
    }

    fn full_house(&mut self) {
        let mut rank = MAX_FOUR_OF_A_KIND;
        for trips in Rank::ranks().rev() {
            for pair in Rank::ranks().rev().filter(|&p| p != trips) {
                rank += 1;
                let product = prime(trips).pow(3) * prime(pair).pow(2);
                insert(
                    &mut self.unsuited,
                    product,
                    rank,
                    Classification::FullHouse { trips, pair },
                );
            }
        }

        debug_assert_eq!(rank, MAX_FULL_HOUSE);
    }

    fn three_of_a_kind(&mut self) {
        let mut rank = MAX_STRAIGHT;
        for trips in Rank::ranks().rev() {
            let kickers = descending_ranks_without(&[trips]);
            for [k1, k2] in combinations::<2, _>(&kickers) {
                rank += 1;
                let product = prime(trips).pow(3) * prime(k1) * prime(k2);
                insert(
                    &mut self.unsuited,
                    product,
                    rank,
                    Classification::ThreeOfAKind { trips },
                );
            }
        }

        debug_assert_eq!(rank, MAX_THREE_OF_A_KIND);
    }

    fn two_pair(&mut self) {
        let mut rank = MAX_THREE_OF_A_KIND;
        let ranks = descending_ranks_without(&[]);
        for [high_pair, low_pair] in combinations::<2, _>(&ranks) {
            for kicker in descending_ranks_without(&[high_pair, low_pair]) {
                rank += 1;
                let product = prime(high_pair).pow(2) * prime(low_pair).pow(2) * prime(kicker);
                insert(
                    &mut self.unsuited,
                    product,
                    rank,
                    Classification::TwoPair {
                        high_pair,
                        low_pair,
                    },
                );
            }
        }

        debug_assert_eq!(rank, MAX_TWO_PAIR);
    }

    fn pair(&mut self) {
        let mut rank = MAX_TWO_PAIR;
        for pair in Rank::ranks().rev() {
            let kickers = descending_ranks_without(&[pair]);
            for [k1, k2, k3] in combinations::<3, _>(&kickers) {
                rank += 1;
                let product = prime(pair).pow(2) * prime(k1) * prime(k2) * prime(k3);
                insert(
                    &mut self.unsuited,
                    product,
                    rank,
                    Classification::Pair { pair },
                );
            }
        }

        debug_assert_eq!(rank, MAX_PAIR);
    }
}

/// Inserts a new entry, every product must map to exactly one hand.
fn insert(map: &mut AHashMap<u64, HandValue>, product: u64, rank: u16, class: Classification) {
    let rank = HandRank::new_unchecked(rank);
    debug_assert_eq!(rank.category(), class.category(), "{class:?} rank {rank}");

    let prev = map.insert(product, HandValue::new(rank, class));
    assert!(prev.is_none(), "Duplicate prime product {product} for {class:?}");
}

#[inline]
fn prime(rank: Rank) -> u64 {
    rank.prime() as u64
}

/// Ranks from ace to deuce skipping the excluded ones.
fn descending_ranks_without(excluded: &[Rank]) -> Vec<Rank> {
    Rank::ranks()
        .rev()
        .filter(|r| !excluded.contains(r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Suit, prime_product_from_hand};
    use ahash::{AHashMap, HashSet};
    use std::thread;

    fn product(ranks: &[Rank]) -> u64 {
        ranks.iter().map(|&r| prime(r)).product()
    }

    #[test]
    fn table_sizes() {
        let table = lookup_table();
        assert_eq!(table.flush_len(), FLUSH_TABLE_SIZE);
        assert_eq!(table.unsuited_len(), UNSUITED_TABLE_SIZE);
    }

    #[test]
    fn category_cardinalities() {
        let table = lookup_table();
        let mut counts = AHashMap::<Category, u16>::default();
        for (_, value) in table.flush_entries().chain(table.unsuited_entries()) {
            *counts.entry(value.category()).or_default() += 1;
        }

        for category in Category::ALL {
            assert_eq!(counts[&category], category.count(), "{category}");
        }

        assert!(
            table
                .flush_entries()
                .all(|(_, v)| matches!(v.category(), Category::StraightFlush | Category::Flush))
        );
    }

    #[test]
    fn ranks_are_unique_and_complete() {
        let table = lookup_table();
        let ranks = table
            .flush_entries()
            .chain(table.unsuited_entries())
            .map(|(_, v)| v.rank().get())
            .collect::<HashSet<_>>();

        assert_eq!(ranks.len(), MAX_HIGH_CARD as usize);
        assert!((1..=MAX_HIGH_CARD).all(|r| ranks.contains(&r)));
    }

    #[test]
    fn ranks_match_categories() {
        let table = lookup_table();
        for (_, value) in table.flush_entries().chain(table.unsuited_entries()) {
            assert_eq!(value.rank().category(), value.category(), "{value}");
        }
    }

    #[test]
    fn straights() {
        use Rank::*;

        let table = lookup_table();
        let royal = product(&[Ten, Jack, Queen, King, Ace]);
        let value = table.flush(royal).unwrap();
        assert_eq!(value.rank().get(), 1);
        assert_eq!(value.class(), Classification::StraightFlush { high: Ace });

        let value = table.unsuited(royal).unwrap();
        assert_eq!(value.rank().get(), 1600);
        assert_eq!(value.class(), Classification::Straight { high: Ace });

        let nine_high = product(&[Five, Six, Seven, Eight, Nine]);
        assert_eq!(table.flush(nine_high).unwrap().rank().get(), 6);
        assert_eq!(table.unsuited(nine_high).unwrap().rank().get(), 1605);

        let wheel = product(&[Ace, Deuce, Trey, Four, Five]);
        let value = table.flush(wheel).unwrap();
        assert_eq!(value.rank().get(), MAX_STRAIGHT_FLUSH);
        assert_eq!(value.class(), Classification::StraightFlush { high: Five });
        assert_eq!(table.unsuited(wheel).unwrap().rank().get(), MAX_STRAIGHT);
    }

    #[test]
    fn flushes_and_high_cards() {
        use Rank::*;

        let table = lookup_table();
        let best = product(&[Ace, King, Queen, Jack, Nine]);
        let value = table.flush(best).unwrap();
        assert_eq!(value.rank().get(), MAX_FULL_HOUSE + 1);
        assert_eq!(value.class(), Classification::Flush { high: Ace });
        let value = table.unsuited(best).unwrap();
        assert_eq!(value.rank().get(), MAX_PAIR + 1);
        assert_eq!(value.class(), Classification::HighCard { high: Ace });

        let worst = product(&[Seven, Five, Four, Trey, Deuce]);
        assert_eq!(table.flush(worst).unwrap().rank().get(), MAX_FLUSH);
        let value = table.unsuited(worst).unwrap();
        assert_eq!(value.rank(), HandRank::WORST);
        assert_eq!(value.class(), Classification::HighCard { high: Seven });
    }

    #[test]
    fn multiples() {
        use Rank::*;

        let table = lookup_table();
        let cases = [
            (&[Ace, Ace, Ace, Ace, King], 11),
            (&[Deuce, Deuce, Deuce, Deuce, Trey], MAX_FOUR_OF_A_KIND),
            (&[Ace, Ace, Ace, King, King], MAX_FOUR_OF_A_KIND + 1),
            (&[Deuce, Deuce, Deuce, Trey, Trey], MAX_FULL_HOUSE),
            (&[Ace, Ace, Ace, King, Queen], MAX_STRAIGHT + 1),
            (&[Deuce, Deuce, Deuce, Four, Trey], MAX_THREE_OF_A_KIND),
            (&[Ace, Ace, King, King, Queen], MAX_THREE_OF_A_KIND + 1),
            (&[Trey, Trey, Deuce, Deuce, Four], MAX_TWO_PAIR),
            (&[Ace, Ace, King, Queen, Jack], MAX_TWO_PAIR + 1),
            (&[Deuce, Deuce, Five, Four, Trey], MAX_PAIR),
        ];

        for (ranks, expected) in cases {
            let value = table.unsuited(product(ranks)).unwrap();
            assert_eq!(value.rank().get(), expected, "{ranks:?}");
        }

        let full_house = table.unsuited(product(&[Ten, Ten, Ten, Four, Four])).unwrap();
        assert_eq!(
            full_house.class(),
            Classification::FullHouse {
                trips: Ten,
                pair: Four
            }
        );

        let two_pair = table.unsuited(product(&[Four, Nine, Four, Nine, Ace])).unwrap();
        assert_eq!(
            two_pair.class(),
            Classification::TwoPair {
                high_pair: Nine,
                low_pair: Four
            }
        );
    }

    #[test]
    fn categories_are_monotonic() {
        // Within a category a better kicker must have a better rank.
        use Rank::*;

        let table = lookup_table();
        let rank = |ranks: &[Rank]| table.unsuited(product(ranks)).unwrap().rank();

        let pairs = rank(&[King, King, Ace, Queen, Jack]);
        assert!(pairs.is_better_than(rank(&[King, King, Ace, Queen, Ten])));

        let trips = rank(&[Nine, Nine, Nine, Ace, Deuce]);
        assert!(trips.is_better_than(rank(&[Nine, Nine, Nine, King, Queen])));

        let two_pair = rank(&[Ace, Ace, Deuce, Deuce, Trey]);
        assert!(two_pair.is_better_than(rank(&[King, King, Queen, Queen, Ace])));
    }

    #[test]
    fn keys_match_hand_products() {
        let table = lookup_table();
        let cards = [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Deuce, Suit::Hearts),
        ];

        let value = table.unsuited(prime_product_from_hand(&cards)).unwrap();
        assert_eq!(
            value.class(),
            Classification::FourOfAKind { quads: Rank::Ace }
        );
    }

    #[test]
    fn built_once() {
        let tables = thread::scope(|s| {
            let handles = (0..4)
                .map(|_| s.spawn(|| lookup_table() as *const LookupTable as usize))
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        assert!(tables.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn build_is_deterministic() {
        let table = LookupTable::build();
        let shared = lookup_table();
        for (product, value) in table.unsuited_entries() {
            assert_eq!(shared.unsuited(product).unwrap().class(), value.class());
        }
        for (product, value) in table.flush_entries() {
            assert_eq!(shared.flush(product), Some(value));
        }
    }
}

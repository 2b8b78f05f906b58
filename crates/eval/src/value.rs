// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, hash};

use crate::{Category, HandRank, Rank};

/// A hand category with the ranks that identify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// A straight flush with its high card, a five for the wheel.
    StraightFlush {
        /// The straight high card.
        high: Rank,
    },
    /// Four of a kind.
    FourOfAKind {
        /// The quads rank.
        quads: Rank,
    },
    /// A full house.
    FullHouse {
        /// The three of a kind rank.
        trips: Rank,
        /// The pair rank.
        pair: Rank,
    },
    /// A flush with its high card.
    Flush {
        /// The highest card.
        high: Rank,
    },
    /// A straight with its high card, a five for the wheel.
    Straight {
        /// The straight high card.
        high: Rank,
    },
    /// Three of a kind.
    ThreeOfAKind {
        /// The trips rank.
        trips: Rank,
    },
    /// Two pair.
    TwoPair {
        /// The higher pair rank.
        high_pair: Rank,
        /// The lower pair rank.
        low_pair: Rank,
    },
    /// One pair.
    Pair {
        /// The pair rank.
        pair: Rank,
    },
    /// High card.
    HighCard {
        /// The highest card.
        high: Rank,
    },
}

impl Classification {
    /// The category for this classification.
    pub fn category(&self) -> Category {
        match self {
            Classification::StraightFlush { .. } => Category::StraightFlush,
            Classification::FourOfAKind { .. } => Category::FourOfAKind,
            Classification::FullHouse { .. } => Category::FullHouse,
            Classification::Flush { .. } => Category::Flush,
            Classification::Straight { .. } => Category::Straight,
            Classification::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            Classification::TwoPair { .. } => Category::TwoPair,
            Classification::Pair { .. } => Category::Pair,
            Classification::HighCard { .. } => Category::HighCard,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::StraightFlush { high } => write!(f, "Straight Flush, {high} high"),
            Classification::FourOfAKind { quads } => write!(f, "Four of a Kind, {quads}s"),
            Classification::FullHouse { trips, pair } => {
                write!(f, "Full House, {trips}s over {pair}s")
            }
            Classification::Flush { high } => write!(f, "Flush, {high} high"),
            Classification::Straight { high } => write!(f, "Straight, {high} high"),
            Classification::ThreeOfAKind { trips } => write!(f, "Three of a Kind, {trips}s"),
            Classification::TwoPair {
                high_pair,
                low_pair,
            } => write!(f, "Two Pair, {high_pair}s and {low_pair}s"),
            Classification::Pair { pair } => write!(f, "Pair, {pair}s"),
            Classification::HighCard { high } => write!(f, "High Card, {high}"),
        }
    }
}

/// The value of a hand, its rank and classification.
///
/// Values compare by strength so that a better hand is greater than a worse
/// one, equality and hashing only depend on the hand rank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    class: Classification,
}

impl HandValue {
    pub(crate) const fn new(rank: HandRank, class: Classification) -> Self {
        Self { rank, class }
    }

    /// The hand rank, lower is better.
    #[inline]
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand classification.
    #[inline]
    pub fn class(&self) -> Classification {
        self.class
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.class.category()
    }

    /// Checks if this hand is a straight flush, including a royal flush.
    pub fn is_straight_flush(&self) -> bool {
        matches!(self.class, Classification::StraightFlush { .. })
    }

    /// Checks if this hand is a royal flush.
    pub fn is_royal_flush(&self) -> bool {
        self.rank == HandRank::BEST
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for HandValue {}

impl hash::Hash for HandValue {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank.cmp(&self.rank)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.class, self.rank)
    }
}

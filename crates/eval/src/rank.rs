// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranks and categories.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::EvalError;

/// The worst straight flush rank.
pub const MAX_STRAIGHT_FLUSH: u16 = 10;
/// The worst four of a kind rank.
pub const MAX_FOUR_OF_A_KIND: u16 = 166;
/// The worst full house rank.
pub const MAX_FULL_HOUSE: u16 = 322;
/// The worst flush rank.
pub const MAX_FLUSH: u16 = 1599;
/// The worst straight rank.
pub const MAX_STRAIGHT: u16 = 1609;
/// The worst three of a kind rank.
pub const MAX_THREE_OF_A_KIND: u16 = 2467;
/// The worst two pair rank.
pub const MAX_TWO_PAIR: u16 = 3325;
/// The worst pair rank.
pub const MAX_PAIR: u16 = 6185;
/// The worst high card rank, this is also the number of distinct ranks.
pub const MAX_HIGH_CARD: u16 = 7462;

/// The strength of a 5 cards hand.
///
/// Ranks go from 1 for a royal flush to 7462 for 7-5-4-3-2 unsuited, a lower
/// rank is a better hand. Hands with the same strength but different suits
/// have the same rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandRank(u16);

impl HandRank {
    /// The best possible rank, a royal flush.
    pub const BEST: HandRank = HandRank(1);

    /// The worst possible rank.
    pub const WORST: HandRank = HandRank(MAX_HIGH_CARD);

    /// Creates a rank from its integer value.
    pub fn new(rank: u16) -> Result<Self, EvalError> {
        if (1..=MAX_HIGH_CARD).contains(&rank) {
            Ok(Self(rank))
        } else {
            Err(EvalError::InvalidHandRank(rank))
        }
    }

    /// Creates a rank from a value known to be in range.
    pub(crate) const fn new_unchecked(rank: u16) -> Self {
        Self(rank)
    }

    /// The integer value of this rank.
    #[inline]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Checks if this rank is a stronger hand than `other`.
    #[inline]
    pub fn is_better_than(&self, other: HandRank) -> bool {
        self.0 < other.0
    }

    /// The category for this rank.
    pub fn category(&self) -> Category {
        Category::ALL
            .into_iter()
            .find(|c| self.0 <= c.max_rank())
            .unwrap_or(Category::HighCard)
    }

    /// The rank scaled to the (0.0, 1.0] range.
    pub fn percentile(&self) -> f64 {
        percentile(self.0)
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<HandRank> for u16 {
    fn from(rank: HandRank) -> Self {
        rank.0
    }
}

impl TryFrom<u16> for HandRank {
    type Error = EvalError;

    fn try_from(rank: u16) -> Result<Self, Self::Error> {
        HandRank::new(rank)
    }
}

/// A hand category, from the strongest to the weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Five cards in a sequence all with the same suit.
    StraightFlush,
    /// Four cards with the same rank.
    FourOfAKind,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Five cards with the same suit.
    Flush,
    /// Five cards in a sequence.
    Straight,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Two different pairs.
    TwoPair,
    /// Two cards with the same rank.
    Pair,
    /// None of the above.
    HighCard,
}

impl Category {
    /// All categories from the strongest to the weakest.
    pub const ALL: [Category; 9] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    /// The worst hand rank in this category.
    pub const fn max_rank(&self) -> u16 {
        match self {
            Category::StraightFlush => MAX_STRAIGHT_FLUSH,
            Category::FourOfAKind => MAX_FOUR_OF_A_KIND,
            Category::FullHouse => MAX_FULL_HOUSE,
            Category::Flush => MAX_FLUSH,
            Category::Straight => MAX_STRAIGHT,
            Category::ThreeOfAKind => MAX_THREE_OF_A_KIND,
            Category::TwoPair => MAX_TWO_PAIR,
            Category::Pair => MAX_PAIR,
            Category::HighCard => MAX_HIGH_CARD,
        }
    }

    /// The best hand rank in this category.
    pub const fn min_rank(&self) -> u16 {
        match self {
            Category::StraightFlush => 1,
            Category::FourOfAKind => MAX_STRAIGHT_FLUSH + 1,
            Category::FullHouse => MAX_FOUR_OF_A_KIND + 1,
            Category::Flush => MAX_FULL_HOUSE + 1,
            Category::Straight => MAX_FLUSH + 1,
            Category::ThreeOfAKind => MAX_STRAIGHT + 1,
            Category::TwoPair => MAX_THREE_OF_A_KIND + 1,
            Category::Pair => MAX_TWO_PAIR + 1,
            Category::HighCard => MAX_PAIR + 1,
        }
    }

    /// The number of distinct hand ranks in this category.
    pub const fn count(&self) -> u16 {
        self.max_rank() - self.min_rank() + 1
    }

    /// The class integer, 1 for a straight flush up to 9 for a high card.
    pub const fn class_rank(&self) -> u8 {
        *self as u8 + 1
    }

    /// Creates a category from its class integer.
    pub fn from_class_rank(class_rank: u8) -> Result<Self, EvalError> {
        class_rank
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize))
            .copied()
            .ok_or(EvalError::InvalidClassInteger(class_rank))
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A stronger category compares greater.
impl Ord for Category {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.class_rank().cmp(&self.class_rank())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::Pair => "Pair",
            Category::HighCard => "High Card",
        };

        write!(f, "{name}")
    }
}

/// Returns the category for a hand rank.
pub fn classify(hand_rank: u16) -> Result<Category, EvalError> {
    HandRank::new(hand_rank).map(|r| r.category())
}

/// Scales a hand rank by the number of distinct ranks.
///
/// The royal flush scales to ~0.0001 and the worst high card to 1.0.
pub fn percentile(hand_rank: u16) -> f64 {
    hand_rank as f64 / MAX_HIGH_CARD as f64
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Primes used to encode a card rank, the i-th rank maps to the i-th prime.
pub const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// A Poker card.
///
/// A card is represented using the encoding in the [Cactus Kev's][kevlink] Poker
/// hand evaluator with each card having the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// Two cards are equal only if they have the same rank and suit, so the packed
/// integer can be used as a card identity.
///
/// Cards serialize as their packed integer, deserialization rejects integers
/// that are not one of the 52 card encodings.
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Card(u32);

/// Error returned when an integer is not a valid card encoding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid card encoding 0x{0:08x}")]
pub struct InvalidCard(pub u32);

impl Card {
    /// The number of distinct cards.
    pub const COUNT: usize = 52;

    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self(PRIMES[rank as usize] | (rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// Returns all the 52 cards, grouped by suit and sorted by rank.
    pub fn all() -> impl Iterator<Item = Card> {
        Suit::suits().flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
    }

    /// This card packed encoding.
    #[inline]
    pub const fn id(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match Suit::from_bits(self.suit_bits()) {
            Some(suit) => suit,
            None => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match Rank::from_index(self.rank_index()) {
            Some(rank) => rank,
            None => panic!("Invalid rank 0x{:x}", self.0),
        }
    }

    /// The prime number associated with this card rank.
    #[inline]
    pub const fn prime(&self) -> u32 {
        self.0 & 0xff
    }

    /// The rank index, 0 for a deuce up to 12 for an ace.
    #[inline]
    pub const fn rank_index(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// The one-hot suit bits.
    #[inline]
    pub const fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// The 13 bits rank mask with only this card rank bit set.
    #[inline]
    pub const fn rank_bit(&self) -> u16 {
        (self.0 >> 16) as u16
    }
}

impl TryFrom<u32> for Card {
    type Error = InvalidCard;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        let rank = Rank::from_index(((id >> 8) & 0xf) as u8);
        let suit = Suit::from_bits(((id >> 12) & 0xf) as u8);
        rank.zip(suit)
            .map(|(rank, suit)| Card::new(rank, suit))
            .filter(|card| card.0 == id)
            .ok_or(InvalidCard(id))
    }
}

impl From<Card> for u32 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// All ranks from deuce to ace.
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> + Clone {
        Self::ALL.into_iter()
    }

    /// Returns the rank for the given index, 0 for a deuce up to 12 for an ace.
    pub const fn from_index(index: u8) -> Option<Rank> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// The prime used to encode this rank.
    #[inline]
    pub const fn prime(self) -> u32 {
        PRIMES[self as usize]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Each suit is a single bit so that ANDing the suit bits of a hand is
/// nonzero only if all cards share a suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns the suit for the given one-hot suit bits.
    pub const fn from_bits(bits: u8) -> Option<Suit> {
        match bits {
            0x8 => Some(Suit::Clubs),
            0x4 => Some(Suit::Diamonds),
            0x2 => Some(Suit::Hearts),
            0x1 => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> + Clone {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }
}

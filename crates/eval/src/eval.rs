// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator is a variant of the [Cactus Kev's][kevlink] evaluator that
//! uses hash tables keyed by prime products for all hands. A 5 cards hand
//! takes a single lookup, 6 and 7 cards hands take the best of their 6 and 21
//! 5-cards subsets.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
use crate::{
    Card, Category, Classification, Combinations, EvalError, HandRank, HandValue, LookupTable,
    Rank, Suit, lookup_table, prime_product_from_hand, prime_product_from_rank_bits,
};

/// Minimum number of cards in a hand.
pub const MIN_HAND_SIZE: usize = 5;

/// Maximum number of cards in a hand.
pub const MAX_HAND_SIZE: usize = 7;

impl HandValue {
    /// The worst possible hand value, 7-5-4-3-2 unsuited.
    pub const WORST: HandValue = HandValue::new(
        HandRank::WORST,
        Classification::HighCard { high: Rank::Seven },
    );

    /// The best possible hand value, a royal flush.
    pub const BEST: HandValue = HandValue::new(
        HandRank::BEST,
        Classification::StraightFlush { high: Rank::Ace },
    );

    /// Evaluates a 5, 6 or 7 cards hand.
    ///
    /// For 6 and 7 cards the value is the best value of all the 5 cards
    /// subsets. Returns an error if the cards are not all distinct or if there
    /// are less than 5 or more than 7 cards.
    ///
    /// ```
    /// # use primerank_eval::*;
    /// let royal = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
    ///     .map(|r| Card::new(r, Suit::Hearts));
    /// let value = HandValue::eval(&royal).unwrap();
    /// assert!(value.is_royal_flush());
    /// assert_eq!(value.rank().get(), 1);
    /// ```
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        validate(cards)?;

        let table = lookup_table();
        if cards.len() == MIN_HAND_SIZE {
            return Ok(eval5(table, cards));
        }

        let best = Combinations::<5>::new(cards.len())
            .map(|idx| eval5(table, &idx.map(|i| cards[i])))
            .fold(HandValue::WORST, |best, value| {
                if value.rank().is_better_than(best.rank()) {
                    value
                } else {
                    best
                }
            });

        Ok(best)
    }

    /// Evaluates a player cards together with the board cards.
    ///
    /// The total number of cards must be between 5 and 7.
    pub fn eval_with_board(hand: &[Card], board: &[Card]) -> Result<HandValue, EvalError> {
        let total = hand.len() + board.len();
        if total > MAX_HAND_SIZE {
            // Reports duplicates before the invalid size.
            let cards = hand.iter().chain(board).copied().collect::<Vec<_>>();
            return Self::eval(&cards);
        }

        let mut cards = [Card::new(Rank::Deuce, Suit::Spades); MAX_HAND_SIZE];
        cards[..hand.len()].copy_from_slice(hand);
        cards[hand.len()..total].copy_from_slice(board);
        Self::eval(&cards[..total])
    }
}

/// Evaluates a 5, 6 or 7 cards hand and returns its rank, lower is better.
///
/// ```
/// # use primerank_eval::*;
/// let quads = [
///     Card::new(Rank::Ace, Suit::Clubs),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Diamonds),
///     Card::new(Rank::Deuce, Suit::Hearts),
/// ];
/// let rank = evaluate(&quads).unwrap();
/// assert_eq!(rank.category(), Category::FourOfAKind);
///
/// let err = evaluate(&quads[..4]).unwrap_err();
/// assert_eq!(err, EvalError::InvalidHandSize(4));
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandRank, EvalError> {
    HandValue::eval(cards).map(|v| v.rank())
}

/// Evaluates a player cards together with the board cards and returns the rank.
pub fn evaluate_with_board(hand: &[Card], board: &[Card]) -> Result<HandRank, EvalError> {
    HandValue::eval_with_board(hand, board).map(|v| v.rank())
}

/// Evaluates a hand and returns its category.
pub fn classify_hand(cards: &[Card]) -> Result<Category, EvalError> {
    HandValue::eval(cards).map(|v| v.category())
}

/// Checks the cards are distinct and that there are 5 to 7 of them.
fn validate(cards: &[Card]) -> Result<(), EvalError> {
    let mut duplicates = Vec::new();
    for (pos, card) in cards.iter().enumerate() {
        if cards[..pos].contains(card) && !duplicates.contains(card) {
            duplicates.push(*card);
        }
    }

    if !duplicates.is_empty() {
        return Err(EvalError::DuplicateCards(duplicates));
    }

    if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&cards.len()) {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }

    Ok(())
}

/// Evaluates 5 distinct cards.
#[inline]
fn eval5(table: &LookupTable, cards: &[Card]) -> HandValue {
    debug_assert_eq!(cards.len(), MIN_HAND_SIZE);

    // The suit bits are one-hot so they survive the AND only for a flush.
    let suits = cards.iter().fold(0xf000, |acc, c| acc & c.id());
    if suits != 0 {
        let rank_bits = cards.iter().fold(0, |acc, c| acc | c.rank_bit());
        let product = prime_product_from_rank_bits(rank_bits);
        match table.flush(product) {
            Some(value) => *value,
            None => panic!("No flush entry for rank bits {rank_bits:#015b}"),
        }
    } else {
        let product = prime_product_from_hand(cards);
        match table.unsuited(product) {
            Some(value) => *value,
            None => panic!("No unsuited entry for prime product {product}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    /// Parses space separated cards like "Ah Kd 5c".
    fn hand(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| {
                let mut chars = c.chars();
                let rank = match chars.next().unwrap() {
                    '2' => Rank::Deuce,
                    '3' => Rank::Trey,
                    '4' => Rank::Four,
                    '5' => Rank::Five,
                    '6' => Rank::Six,
                    '7' => Rank::Seven,
                    '8' => Rank::Eight,
                    '9' => Rank::Nine,
                    'T' => Rank::Ten,
                    'J' => Rank::Jack,
                    'Q' => Rank::Queen,
                    'K' => Rank::King,
                    'A' => Rank::Ace,
                    r => panic!("Invalid rank {r}"),
                };
                let suit = match chars.next().unwrap() {
                    'c' => Suit::Clubs,
                    'd' => Suit::Diamonds,
                    'h' => Suit::Hearts,
                    's' => Suit::Spades,
                    s => panic!("Invalid suit {s}"),
                };
                Card::new(rank, suit)
            })
            .collect()
    }

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&hand(s)).unwrap()
    }

    #[test]
    fn royal_flush() {
        let value = eval("Th Jh Qh Kh Ah");
        assert_eq!(value.rank().get(), 1);
        assert_eq!(value.category(), Category::StraightFlush);
        assert!(value.is_royal_flush());
        assert_eq!(value, HandValue::BEST);
    }

    #[test]
    fn straight_flushes() {
        let value = eval("5s 6s 7s 8s 9s");
        assert_eq!(value.class(), Classification::StraightFlush { high: Rank::Nine });
        assert_eq!(value.rank().get(), 6);
        assert!(!value.is_royal_flush());

        let wheel = eval("As 2s 3s 4s 5s");
        assert_eq!(wheel.class(), Classification::StraightFlush { high: Rank::Five });
        assert_eq!(wheel.rank().get(), 10);
        assert!(value > wheel);
    }

    #[test]
    fn four_of_a_kind() {
        let value = eval("Ac Ah As Ad 2h");
        assert_eq!(value.class(), Classification::FourOfAKind { quads: Rank::Ace });
        assert_eq!(value.rank().get(), 22);
    }

    #[test]
    fn five_cards_categories() {
        let cases = [
            ("Ah 8s 6d 4c 2h", Category::HighCard),
            ("Ac Ah 9s 8d 7c", Category::Pair),
            ("Kd Kc Qh Qs Jd", Category::TwoPair),
            ("Ac Ah As 2d 7c", Category::ThreeOfAKind),
            ("5h 6c 7d 8s 9h", Category::Straight),
            ("Ac 5c Tc Jc 8c", Category::Flush),
            ("As Ad Ac Kh Ks", Category::FullHouse),
            ("Ac Ah As Ad 2h", Category::FourOfAKind),
            ("5s 6s 7s 8s 9s", Category::StraightFlush),
            ("Th Jh Qh Kh Ah", Category::StraightFlush),
        ];

        for (cards, category) in cases {
            assert_eq!(classify_hand(&hand(cards)), Ok(category), "{cards}");
        }

        // Categories listed from the weakest to the strongest.
        let ranks = cases.map(|(cards, _)| evaluate(&hand(cards)).unwrap());
        assert!(ranks.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn six_and_seven_cards_categories() {
        let cases = [
            ("Ah 8s", "6d 4c 2h Jh", Category::HighCard),
            ("Ac Ah", "9s 8d 7c 6c", Category::Pair),
            ("Kd Kc", "Qh Qs Jd 2c", Category::TwoPair),
            ("Ac Ah", "As 2d 7c 3h", Category::ThreeOfAKind),
            ("5h 6c", "7d 8s 9h 2d", Category::Straight),
            ("Ac 5c", "Tc Jc 8c 4h", Category::Flush),
            ("As Ad", "Ac Kh Ks 2d", Category::FullHouse),
            ("Ac Ah", "As Ad 2h 3c", Category::FourOfAKind),
            ("5s 6s", "7s 8s 9s Ts", Category::StraightFlush),
            ("Ah 8s", "6d 4c 2h Jh Ts", Category::HighCard),
            ("Ac Ah", "9s 8d 7c 6c 2h", Category::Pair),
            ("Kd Kc", "Qh Qs Jd 2c 3s", Category::TwoPair),
            ("Ac Ah", "As 2d 7c 3h 5s", Category::ThreeOfAKind),
            ("5h 6c", "7d 8s 9h 2d Ac", Category::Straight),
            ("Ac 5c", "Tc Jc 8c 4h As", Category::Flush),
            ("As Ad", "Ac Kh Ks 2d 3c", Category::FullHouse),
            ("Ac Ah", "As Ad 2h 3c 4d", Category::FourOfAKind),
            ("5s 6s", "7s 8s 9s Ts 2c", Category::StraightFlush),
            ("Th Jh", "Qh Kh Ah 2c 3s", Category::StraightFlush),
        ];

        for (cards, board, category) in cases {
            let value = HandValue::eval_with_board(&hand(cards), &hand(board)).unwrap();
            assert_eq!(value.category(), category, "{cards} {board}");
        }

        let rank = evaluate_with_board(&hand("Th Jh"), &hand("Qh Kh Ah 2c 3s")).unwrap();
        assert_eq!(rank, HandRank::BEST);
    }

    #[test]
    fn seven_cards_high_card() {
        let value = eval("Ah 8s 6d 4c 2h Jh Ts");
        assert_eq!(value.class(), Classification::HighCard { high: Rank::Ace });
        assert_eq!(value, eval("Ah Jh Ts 8s 6d"));
    }

    #[test]
    fn duplicate_cards() {
        let err = HandValue::eval(&hand("5c 5c Ad 3h 7d")).unwrap_err();
        assert_eq!(err, EvalError::DuplicateCards(hand("5c")));
        assert!(err.to_string().contains("5c"));

        // Duplicates are reported once even if repeated many times.
        let err = evaluate(&hand("5c 5c Ad Ad 5c 7d")).unwrap_err();
        assert_eq!(err, EvalError::DuplicateCards(hand("5c Ad")));

        // Duplicates are checked before the hand size.
        let err = evaluate(&hand("5c 5c")).unwrap_err();
        assert_eq!(err, EvalError::DuplicateCards(hand("5c")));

        let err = evaluate_with_board(&hand("Ah Kh"), &hand("Ah 2c 3d")).unwrap_err();
        assert_eq!(err, EvalError::DuplicateCards(hand("Ah")));
    }

    #[test]
    fn invalid_hand_size() {
        assert_eq!(
            evaluate(&hand("Ah Kh Qh Jh")),
            Err(EvalError::InvalidHandSize(4))
        );
        assert_eq!(evaluate(&[]), Err(EvalError::InvalidHandSize(0)));
        assert_eq!(
            evaluate(&hand("Ah Kh Qh Jh Th 9h 8h 7h")),
            Err(EvalError::InvalidHandSize(8))
        );
        assert_eq!(
            evaluate_with_board(&hand("Ah Kh"), &hand("2c 3c 4c 5c 6c 7c")),
            Err(EvalError::InvalidHandSize(8))
        );
        assert_eq!(
            evaluate_with_board(&hand("Ah Kh"), &hand("2c")),
            Err(EvalError::InvalidHandSize(3))
        );
    }

    #[test]
    fn order_independent() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = Card::all().collect::<Vec<_>>();

        for k in MIN_HAND_SIZE..=MAX_HAND_SIZE {
            for _ in 0..500 {
                deck.shuffle(&mut rng);
                let mut cards = deck[..k].to_vec();
                let rank = evaluate(&cards).unwrap();

                cards.shuffle(&mut rng);
                assert_eq!(evaluate(&cards).unwrap(), rank);
                assert_eq!(evaluate(&cards).unwrap(), rank);
            }
        }
    }

    #[test]
    fn best_of_five_cards_subsets() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut deck = Card::all().collect::<Vec<_>>();

        for k in [6, 7] {
            for _ in 0..2_000 {
                deck.shuffle(&mut rng);
                let cards = &deck[..k];

                let best = crate::combinations::<5, _>(cards)
                    .map(|five| evaluate(&five).unwrap())
                    .min()
                    .unwrap();
                assert_eq!(evaluate(cards).unwrap(), best);
            }
        }
    }

    #[test]
    fn more_cards_never_worse() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut deck = Card::all().collect::<Vec<_>>();

        for _ in 0..2_000 {
            deck.shuffle(&mut rng);
            let five = evaluate(&deck[..5]).unwrap();
            let six = evaluate(&deck[..6]).unwrap();
            let seven = evaluate(&deck[..7]).unwrap();
            assert!(six <= five);
            assert!(seven <= six);
        }
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use std::fmt;
use thiserror::Error;

use crate::Card;

/// Errors returned when the evaluator inputs are invalid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The hand contains the same card more than once.
    #[error("duplicate cards: {}", DisplayCards(.0))]
    DuplicateCards(Vec<Card>),
    /// The hand doesn't have between 5 and 7 cards.
    #[error("invalid hand size {0}, expected 5 to 7 cards")]
    InvalidHandSize(usize),
    /// The hand rank is outside the 1..=7462 range.
    #[error("invalid hand rank {0}, expected a value from 1 to 7462")]
    InvalidHandRank(u16),
    /// The class rank is outside the 1..=9 range.
    #[error("invalid hand class {0}, expected a value from 1 to 9")]
    InvalidClassInteger(u8),
}

/// Space separated cards.
struct DisplayCards<'a>(&'a [Card]);

impl fmt::Display for DisplayCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, card) in self.0.iter().enumerate() {
            if pos > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

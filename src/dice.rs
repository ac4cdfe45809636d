//! Dice roll-off that decides which side opens the match.

use crate::board::Side;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of the opening roll-off. The two scores are always distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// X's die.
    pub x: u8,
    /// O's die.
    pub o: u8,
}

impl DiceRoll {
    /// The side that takes the first move of every round in the match.
    pub fn starting_side(self) -> Side {
        if self.x > self.o { Side::X } else { Side::O }
    }
}

/// Rolls one die per side, uniform in 1..=5, re-rolling until the
/// scores differ.
pub fn roll_off<R: Rng>(rng: &mut R) -> DiceRoll {
    loop {
        let x = rng.random_range(1..=5);
        let o = rng.random_range(1..=5);
        if x != o {
            return DiceRoll { x, o };
        }
    }
}

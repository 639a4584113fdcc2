//! Raw category scores for a dice hand.
//!
//! Scores here never include the upper-section or repeated-yahtzee bonuses; those depend on
//! the scorecard and are applied by the engine.

use crate::category::{Category, NUM_CATS};
use crate::dice::Dice;

pub const FULL_HOUSE_SCORE: u32 = 25;
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
pub const LARGE_STRAIGHT_SCORE: u32 = 40;
pub const YAHTZEE_SCORE: u32 = 50;

/// Score `dice` in `cat`.
pub fn score(dice: &Dice, cat: Category) -> u32 {
    let counts = dice.counts();
    match cat {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            let face = cat.index() + 1;
            counts[cat.index()] as u32 * face as u32
        }
        Category::ThreeOfAKind => of_a_kind(dice, 3),
        Category::FourOfAKind => of_a_kind(dice, 4),
        Category::FullHouse => {
            let has3 = counts.iter().any(|&c| c == 3);
            let has2 = counts.iter().any(|&c| c == 2);
            // Five of a kind also counts as a house.
            if (has3 && has2) || counts.iter().any(|&c| c == 5) {
                FULL_HOUSE_SCORE
            } else {
                0
            }
        }
        Category::SmallStraight => {
            if has_run(dice, 4) {
                SMALL_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if has_run(dice, 5) {
                LARGE_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::Yahtzee => {
            if dice.five_of_a_kind().is_some() {
                YAHTZEE_SCORE
            } else {
                0
            }
        }
        Category::Chance => dice.sum(),
    }
}

/// Compute raw scores for every category at once, in index order.
pub fn scores_for_dice(dice: &Dice) -> [u32; NUM_CATS] {
    let mut out = [0u32; NUM_CATS];
    for cat in Category::ALL {
        out[cat.index()] = score(dice, cat);
    }
    out
}

fn of_a_kind(dice: &Dice, n: u8) -> u32 {
    if dice.counts().iter().any(|&c| c >= n) {
        dice.sum()
    } else {
        0
    }
}

/// True if some window of `len` consecutive faces is fully present.
fn has_run(dice: &Dice, len: usize) -> bool {
    dice.counts().windows(len).any(|w| w.iter().all(|&c| c > 0))
}

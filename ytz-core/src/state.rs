//! Turn state representations.
//!
//! [`FullState`] records the exact score of every used category. [`CompactState`] keeps only
//! which categories are used plus a few aggregates captured at projection time, which makes
//! it a much smaller search key. Both implement [`TurnState`], the contract that legal-move
//! enumeration and move application are written against.

use serde::{Deserialize, Serialize};

use crate::category::{Category, LOWER_START, NUM_CATS};
use crate::config::RulesConfig;
use crate::dice::Dice;
use crate::error::CoreError;

/// Highest re-roll count a state may hold.
pub const MAX_REROLLS: u8 = 3;

/// Re-rolls granted to a fresh state under standard rules.
pub const DEFAULT_REROLLS: u8 = 2;

/// Upper total needed for the upper-section bonus under standard rules.
pub const UPPER_BONUS_THRESHOLD: u32 = 63;

/// Operations shared by both state representations.
pub trait TurnState: Clone {
    fn is_category_used(&self, cat: Category) -> bool;

    /// Record `score` into `cat`, marking it used.
    fn record_score(&mut self, cat: Category, score: u32);

    fn dice(&self) -> &Dice;
    fn set_dice(&mut self, dice: Dice);

    fn remaining_rerolls(&self) -> u8;
    fn set_remaining_rerolls(&mut self, count: u8) -> Result<(), CoreError>;

    /// Spend one re-roll. No-op at zero.
    fn consume_reroll(&mut self);

    /// Points still missing from the upper-section bonus threshold.
    fn remaining_upper_bonus(&self) -> u32;

    /// True once Yahtzee has been recorded with a positive score.
    fn is_yahtzee_recorded(&self) -> bool;

    /// Exact cumulative upper-section total, when this representation tracks it.
    fn upper_total(&self) -> Option<u32>;

    fn used_count(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|&&c| self.is_category_used(c))
            .count()
    }
}

/// All categories used.
pub fn is_terminal<S: TurnState>(state: &S) -> bool {
    state.used_count() == NUM_CATS
}

fn check_rerolls(count: u8) -> Result<(), CoreError> {
    if count > MAX_REROLLS {
        return Err(CoreError::OutOfRange {
            what: "rerolls",
            value: count as u32,
            max: MAX_REROLLS as u32,
        });
    }
    Ok(())
}

/// Scorecard with the exact value recorded in each category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullState {
    scores: [Option<u32>; NUM_CATS],
    dice: Dice,
    rerolls_left: u8,
}

impl Default for FullState {
    fn default() -> Self {
        Self::new()
    }
}

impl FullState {
    /// Fresh state: nothing scored, no dice, two re-rolls.
    pub fn new() -> Self {
        Self {
            scores: [None; NUM_CATS],
            dice: Dice::new(),
            rerolls_left: DEFAULT_REROLLS,
        }
    }

    /// Fresh state with the re-roll allowance taken from `rules`.
    pub fn with_rules(rules: &RulesConfig) -> Result<Self, CoreError> {
        let mut s = Self::new();
        s.set_remaining_rerolls(rules.initial_rerolls)?;
        Ok(s)
    }

    /// Recorded value, or `None` while the category is unused. Zero still counts as used.
    pub fn category_score(&self, cat: Category) -> Option<u32> {
        self.scores[cat.index()]
    }

    /// Sum of recorded upper-section values.
    pub fn upper_sum(&self) -> u32 {
        self.scores[..LOWER_START].iter().flatten().sum()
    }

    /// Sum of all recorded category values. Bonuses are reported through move deltas only.
    pub fn total_score(&self) -> u32 {
        self.scores.iter().flatten().sum()
    }
}

impl TurnState for FullState {
    fn is_category_used(&self, cat: Category) -> bool {
        self.scores[cat.index()].is_some()
    }

    /// Adds to any value already recorded, so a second Yahtzee accumulates to 100.
    fn record_score(&mut self, cat: Category, score: u32) {
        let slot = &mut self.scores[cat.index()];
        *slot = Some(slot.unwrap_or(0) + score);
    }

    fn dice(&self) -> &Dice {
        &self.dice
    }

    fn set_dice(&mut self, dice: Dice) {
        self.dice = dice;
    }

    fn remaining_rerolls(&self) -> u8 {
        self.rerolls_left
    }

    fn set_remaining_rerolls(&mut self, count: u8) -> Result<(), CoreError> {
        check_rerolls(count)?;
        self.rerolls_left = count;
        Ok(())
    }

    fn consume_reroll(&mut self) {
        self.rerolls_left = self.rerolls_left.saturating_sub(1);
    }

    fn remaining_upper_bonus(&self) -> u32 {
        UPPER_BONUS_THRESHOLD.saturating_sub(self.upper_sum())
    }

    fn is_yahtzee_recorded(&self) -> bool {
        matches!(self.category_score(Category::Yahtzee), Some(v) if v > 0)
    }

    fn upper_total(&self) -> Option<u32> {
        Some(self.upper_sum())
    }
}

/// Lossy projection of a [`FullState`]: used flags instead of scores.
///
/// `remaining_upper_bonus` is captured when the projection is taken and is not updated as
/// upper categories are filled afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompactState {
    used: [bool; NUM_CATS],
    dice: Dice,
    rerolls_left: u8,
    remaining_upper_bonus: u32,
    yahtzee_recorded: bool,
}

impl Default for CompactState {
    /// Projection of a fresh [`FullState`].
    fn default() -> Self {
        Self::from(&FullState::new())
    }
}

impl From<&FullState> for CompactState {
    fn from(full: &FullState) -> Self {
        let mut used = [false; NUM_CATS];
        for cat in Category::ALL {
            used[cat.index()] = full.is_category_used(cat);
        }
        Self {
            used,
            dice: *full.dice(),
            rerolls_left: full.remaining_rerolls(),
            remaining_upper_bonus: full.remaining_upper_bonus(),
            yahtzee_recorded: full.is_yahtzee_recorded(),
        }
    }
}

impl From<FullState> for CompactState {
    fn from(full: FullState) -> Self {
        Self::from(&full)
    }
}

impl TurnState for CompactState {
    fn is_category_used(&self, cat: Category) -> bool {
        self.used[cat.index()]
    }

    fn record_score(&mut self, cat: Category, score: u32) {
        if cat == Category::Yahtzee && score > 0 {
            self.yahtzee_recorded = true;
        }
        self.used[cat.index()] = true;
    }

    fn dice(&self) -> &Dice {
        &self.dice
    }

    fn set_dice(&mut self, dice: Dice) {
        self.dice = dice;
    }

    fn remaining_rerolls(&self) -> u8 {
        self.rerolls_left
    }

    fn set_remaining_rerolls(&mut self, count: u8) -> Result<(), CoreError> {
        check_rerolls(count)?;
        self.rerolls_left = count;
        Ok(())
    }

    fn consume_reroll(&mut self) {
        self.rerolls_left = self.rerolls_left.saturating_sub(1);
    }

    fn remaining_upper_bonus(&self) -> u32 {
        self.remaining_upper_bonus
    }

    fn is_yahtzee_recorded(&self) -> bool {
        self.yahtzee_recorded
    }

    fn upper_total(&self) -> Option<u32> {
        None
    }
}

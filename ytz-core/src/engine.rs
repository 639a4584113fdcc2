//! Move application: the single place that turns a state and a move into a successor state
//! and a score delta.

use serde::{Deserialize, Serialize};

use crate::action::Move;
use crate::category::Category;
use crate::config::RulesConfig;
use crate::error::CoreError;
use crate::scoring::{score, YAHTZEE_SCORE};
use crate::state::TurnState;

/// Successor state plus the points earned by the move, bonuses included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome<S> {
    pub state: S,
    pub score_delta: u32,
}

/// Apply `mv` under the standard rules. `state` is left untouched.
pub fn apply_move<S: TurnState>(state: &S, mv: &Move) -> MoveOutcome<S> {
    apply_move_with(state, mv, &RulesConfig::default())
}

/// Apply `mv` with the bonus amounts from `rules`.
///
/// - Reroll: spends one re-roll (floored at zero). Dice are left for the caller to re-roll.
/// - Score(cat): records the raw score into `cat`, then adds
///   - the upper bonus if `cat` is an upper category and the state tracks an upper total
///     that is now at or above the threshold
///   - the repeated-Yahtzee bonus if a 50 goes into Yahtzee after a positive Yahtzee
pub fn apply_move_with<S: TurnState>(state: &S, mv: &Move, rules: &RulesConfig) -> MoveOutcome<S> {
    let mut next = state.clone();
    match mv {
        Move::Reroll(_) => {
            next.consume_reroll();
            MoveOutcome {
                state: next,
                score_delta: 0,
            }
        }
        Move::Score(cat) => {
            let cat = *cat;
            let dice = state.dice();
            let base = score(dice, cat);
            let yahtzee_roll = score(dice, Category::Yahtzee) == YAHTZEE_SCORE;
            let yahtzee_already_positive = state.is_yahtzee_recorded();

            next.record_score(cat, base);

            let mut upper_bonus = 0;
            if cat.is_upper() {
                if let Some(total) = next.upper_total() {
                    if total >= rules.upper_bonus_threshold {
                        upper_bonus = rules.upper_bonus;
                    }
                }
            }

            let yahtzee_bonus =
                if cat == Category::Yahtzee && base == YAHTZEE_SCORE && yahtzee_already_positive {
                    rules.yahtzee_bonus
                } else {
                    0
                };

            let score_delta = base + upper_bonus + yahtzee_bonus;
            tracing::debug!(
                %cat,
                dice = %dice,
                base,
                upper_bonus,
                yahtzee_bonus,
                joker = yahtzee_roll && yahtzee_already_positive,
                score_delta,
                "applied score move"
            );
            MoveOutcome {
                state: next,
                score_delta,
            }
        }
    }
}

/// Decode a raw move index and apply it under the standard rules.
pub fn apply_move_index<S: TurnState>(state: &S, idx: u16) -> Result<MoveOutcome<S>, CoreError> {
    let mv = Move::from_index(idx)?;
    Ok(apply_move(state, &mv))
}

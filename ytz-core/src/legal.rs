//! Legal move enumeration.
//!
//! Rules:
//! - If rerolls remain: one Reroll per distinct keep multiset of the current dice, from
//!   keep-nothing to keep-everything.
//! - Score moves: every unused category, unless the joker condition holds (five of a kind
//!   rolled after Yahtzee was recorded positively):
//!   - matching upper category unused -> that category is the only score move
//!   - otherwise -> every unused lower category

use crate::action::{KeepList, Move};
use crate::category::Category;
use crate::dice::Dice;
use crate::state::TurnState;

/// All legal moves from `state`: rerolls first, then score moves.
pub fn legal_moves<S: TurnState>(state: &S) -> Vec<Move> {
    let mut moves = Vec::new();
    if state.remaining_rerolls() > 0 {
        moves.extend(reroll_moves(state.dice()).into_iter().map(Move::Reroll));
    }
    let n_rerolls = moves.len();
    moves.extend(score_moves(state).into_iter().map(Move::Score));

    tracing::trace!(
        dice = %state.dice(),
        rerolls_left = state.remaining_rerolls(),
        n_rerolls,
        n_scores = moves.len() - n_rerolls,
        "enumerated legal moves"
    );
    moves
}

/// Every distinct sorted keep-list for `dice`.
///
/// Walks per-face keep counts directly instead of deduplicating index subsets, so each
/// multiset is produced exactly once. Output is ordered by keep count of the sixes, then the
/// fives, and so on down to the ones.
pub fn reroll_moves(dice: &Dice) -> Vec<KeepList> {
    let counts = dice.counts();
    let n_keeps: usize = counts.iter().map(|&c| c as usize + 1).product();
    let mut out = Vec::with_capacity(n_keeps);

    let mut keep = [0u8; 6];
    loop {
        out.push(KeepList::from_counts(&keep));

        // Odometer step over keep[i] in 0..=counts[i].
        let mut i = 0;
        while i < keep.len() && keep[i] == counts[i] {
            keep[i] = 0;
            i += 1;
        }
        if i == keep.len() {
            break;
        }
        keep[i] += 1;
    }
    out
}

/// True when the current dice trigger the joker rule.
pub fn joker_active<S: TurnState>(state: &S) -> bool {
    state.dice().five_of_a_kind().is_some() && state.is_yahtzee_recorded()
}

/// Score moves available from `state`, in category index order.
pub fn score_moves<S: TurnState>(state: &S) -> Vec<Category> {
    if let Some(face) = state.dice().five_of_a_kind() {
        if state.is_yahtzee_recorded() {
            if let Some(upper) = Category::upper_for_face(face) {
                if !state.is_category_used(upper) {
                    tracing::trace!(%upper, "joker: forced upper placement");
                    return vec![upper];
                }
            }
            return Category::lower()
                .filter(|&c| !state.is_category_used(c))
                .collect();
        }
    }

    Category::ALL
        .iter()
        .copied()
        .filter(|&c| !state.is_category_used(c))
        .collect()
}

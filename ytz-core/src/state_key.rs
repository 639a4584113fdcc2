//! Stable key for compact states.

use crate::category::Category;
use crate::error::CoreError;
use crate::state::{CompactState, TurnState};

/// A compact, stable key for a [`CompactState`].
///
/// Independent of Rust's `Hash` randomness so transposition tables can be persisted or shared
/// between runs.
pub type StateKey = u64;

const COUNT_MAX: u64 = 0xF;
const REROLLS_MAX: u64 = 0x3;
const UPPER_REMAINING_MAX: u64 = 0x7F;

/// Pack `s` into a [`StateKey`].
///
/// Every field must fit its slot, so distinct states never share a key. Fails with
/// `OutOfRange` when a face count exceeds 15, the re-roll counter exceeds 3, or the remaining
/// upper bonus exceeds 127 (possible with a custom threshold).
pub fn state_key(s: &CompactState) -> Result<StateKey, CoreError> {
    // Layout (low -> high bits):
    // - used flags: 13 bits (bit i = Category index i)
    // - dice counts: 6 * 4 bits (ones first)
    // - rerolls_left: 2 bits
    // - remaining_upper_bonus: 7 bits (0..=63 under default rules)
    // - yahtzee_recorded: 1 bit
    //
    // Total: 13+24+2+7+1 = 47 bits.

    let mut x: u64 = 0;
    let mut shift: u32 = 0;

    for cat in Category::ALL {
        if s.is_category_used(cat) {
            x |= 1u64 << cat.index();
        }
    }
    shift += 13;

    for &c in s.dice().counts() {
        x |= fit("die count", c as u64, COUNT_MAX)? << shift;
        shift += 4;
    }

    x |= fit("rerolls", s.remaining_rerolls() as u64, REROLLS_MAX)? << shift;
    shift += 2;
    x |= fit(
        "remaining upper bonus",
        s.remaining_upper_bonus() as u64,
        UPPER_REMAINING_MAX,
    )? << shift;
    shift += 7;
    x |= (s.is_yahtzee_recorded() as u64) << shift;

    Ok(x)
}

fn fit(what: &'static str, value: u64, max: u64) -> Result<u64, CoreError> {
    if value > max {
        return Err(CoreError::OutOfRange {
            what,
            value: value as u32,
            max: max as u32,
        });
    }
    Ok(value)
}

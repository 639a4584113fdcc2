//! Move types and the fixed move-index mapping.
//!
//! Index space:
//! - idx 0..=12          : Score(cat) where cat = idx
//! - idx 13..13 + 6^6    : Reroll(keep), keep encoded as base-6 digits of per-face keep counts
//!                         (ones in the least significant digit, each count 0..=5)

use serde::{Deserialize, Serialize};

use crate::category::{Category, NUM_CATS};
use crate::dice::{check_face, NUM_FACES};
use crate::error::CoreError;

/// Base of the per-face keep-count digits.
const KEEP_RADIX: u16 = 6;

/// Number of distinct reroll indices (6^6).
pub const NUM_KEEP_CODES: u16 = 46_656;

/// Size of the move-index space.
pub const NUM_MOVE_INDICES: u16 = NUM_CATS as u16 + NUM_KEEP_CODES;

/// Faces a reroll keeps; the remaining dice are re-rolled by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct KeepList(Vec<u8>);

impl KeepList {
    /// Validate every face; order is preserved as given.
    pub fn new(values: Vec<u8>) -> Result<Self, CoreError> {
        for &v in &values {
            check_face(v)?;
        }
        Ok(Self(values))
    }

    /// Sorted keep-list holding `counts[i]` copies of face `i + 1`.
    pub(crate) fn from_counts(counts: &[u8; NUM_FACES]) -> Self {
        let mut keep = Vec::with_capacity(counts.iter().map(|&c| c as usize).sum());
        for (face, &c) in (1u8..).zip(counts.iter()) {
            keep.extend(std::iter::repeat(face).take(c as usize));
        }
        Self(keep)
    }

    pub fn values(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Per-face keep counts; index 0 holds the ones.
    pub fn counts(&self) -> [usize; NUM_FACES] {
        let mut out = [0usize; NUM_FACES];
        for &v in &self.0 {
            out[(v - 1) as usize] += 1;
        }
        out
    }
}

impl TryFrom<Vec<u8>> for KeepList {
    type Error = CoreError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<KeepList> for Vec<u8> {
    fn from(k: KeepList) -> Self {
        k.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Keep these faces and re-roll the rest.
    Reroll(KeepList),
    /// Commit the current dice to a category.
    Score(Category),
}

impl Move {
    pub fn reroll(keep: Vec<u8>) -> Result<Self, CoreError> {
        Ok(Move::Reroll(KeepList::new(keep)?))
    }

    pub fn score(cat: Category) -> Self {
        Move::Score(cat)
    }

    pub fn is_reroll(&self) -> bool {
        matches!(self, Move::Reroll(_))
    }

    /// Map to the fixed index space. `None` when a keep count exceeds 5.
    pub fn to_index(&self) -> Option<u16> {
        match self {
            Move::Score(cat) => Some(cat.index() as u16),
            Move::Reroll(keep) => {
                let mut code: u16 = 0;
                for &c in keep.counts().iter().rev() {
                    if c >= KEEP_RADIX as usize {
                        return None;
                    }
                    code = code * KEEP_RADIX + c as u16;
                }
                Some(NUM_CATS as u16 + code)
            }
        }
    }

    /// Decode an index produced by [`Move::to_index`]. Reroll keep-lists come back sorted.
    pub fn from_index(idx: u16) -> Result<Self, CoreError> {
        if let Some(cat) = Category::from_index(idx as usize) {
            return Ok(Move::Score(cat));
        }
        if idx >= NUM_MOVE_INDICES {
            return Err(CoreError::InvalidMove { index: idx });
        }
        let mut code = idx - NUM_CATS as u16;
        let mut counts = [0u8; NUM_FACES];
        for c in counts.iter_mut() {
            *c = (code % KEEP_RADIX) as u8;
            code /= KEEP_RADIX;
        }
        Ok(Move::Reroll(KeepList::from_counts(&counts)))
    }
}

//! Dice multiset: per-face counters for faces 1..=6.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const NUM_FACES: usize = 6;

/// Unordered hand of dice, stored as one counter per face.
///
/// Order of the dice never matters for scoring, so two hands holding the same faces compare
/// equal regardless of how they were built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    counts: [u8; NUM_FACES],
}

/// Reject faces outside 1..=6.
pub fn check_face(face: u8) -> Result<(), CoreError> {
    if (1..=6).contains(&face) {
        Ok(())
    } else {
        Err(CoreError::InvalidValue { value: face })
    }
}

impl Dice {
    pub const fn new() -> Self {
        Self {
            counts: [0; NUM_FACES],
        }
    }

    /// Build a hand by adding each face in turn. Fails on the first invalid face.
    pub fn from_faces<I>(faces: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut dice = Self::new();
        for face in faces {
            dice.add(face)?;
        }
        Ok(dice)
    }

    /// Add one die showing `face`.
    ///
    /// Fails with `InvalidValue` when `face` is outside 1..=6, and with `OutOfRange` when the
    /// counter for `face` is already at 255. The dice are unchanged on failure.
    pub fn add(&mut self, face: u8) -> Result<(), CoreError> {
        check_face(face)?;
        let slot = &mut self.counts[(face - 1) as usize];
        *slot = slot.checked_add(1).ok_or(CoreError::OutOfRange {
            what: "die count",
            value: u8::MAX as u32 + 1,
            max: u8::MAX as u32,
        })?;
        Ok(())
    }

    /// Number of dice showing `face`.
    pub fn count_of(&self, face: u8) -> Result<u8, CoreError> {
        if !(1..=6).contains(&face) {
            return Err(CoreError::OutOfRange {
                what: "die face",
                value: face as u32,
                max: NUM_FACES as u32,
            });
        }
        Ok(self.counts[(face - 1) as usize])
    }

    /// Per-face counters; index 0 holds the ones.
    pub fn counts(&self) -> &[u8; NUM_FACES] {
        &self.counts
    }

    /// Number of dice in the hand.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    /// Sum of pips.
    pub fn sum(&self) -> u32 {
        self.counts
            .iter()
            .zip(1u32..)
            .map(|(&c, face)| c as u32 * face)
            .sum()
    }

    pub fn reset(&mut self) {
        self.counts = [0; NUM_FACES];
    }

    /// Face values in ascending order, one entry per die.
    pub fn faces(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total() as usize);
        for (face, &c) in (1u8..).zip(self.counts.iter()) {
            out.extend(std::iter::repeat(face).take(c as usize));
        }
        out
    }

    /// The face shown by all dice when the hand is exactly five of a kind.
    pub fn five_of_a_kind(&self) -> Option<u8> {
        self.counts
            .iter()
            .position(|&c| c == 5)
            .map(|i| i as u8 + 1)
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.faces())
    }
}

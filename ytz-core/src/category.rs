//! Scoring categories (upper section 0..=5, lower section 6..=12).

use std::fmt;

use serde::{Deserialize, Serialize};

pub const NUM_CATS: usize = 13;

/// First lower-section index.
pub const LOWER_START: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl Category {
    /// All categories in index order.
    pub const ALL: [Category; NUM_CATS] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Category> {
        Self::ALL.get(idx).copied()
    }

    pub const fn is_upper(self) -> bool {
        self.index() < LOWER_START
    }

    pub const fn is_lower(self) -> bool {
        !self.is_upper()
    }

    /// Upper category counting `face` (1 -> Ones, ..., 6 -> Sixes).
    pub fn upper_for_face(face: u8) -> Option<Category> {
        match face {
            1..=6 => Self::from_index(face as usize - 1),
            _ => None,
        }
    }

    /// Lower-section categories in index order.
    pub fn lower() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().skip(LOWER_START)
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::Yahtzee => "Yahtzee",
            Category::Chance => "Chance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Scoring category enumeration and the canonical category order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Number of scoring categories on a card (6 upper, 7 lower).
pub const NUM_CATEGORIES: usize = 13;

/// Closed set of scoring categories.
///
/// Declaration order is the canonical enumeration order: it fixes the
/// category index mapping (0..=12) and the opponent policy's tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
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

/// Stable snake_case names in index order (0..=12).
pub const CATEGORY_NAMES: [&str; NUM_CATEGORIES] = [
    "ones",
    "twos",
    "threes",
    "fours",
    "fives",
    "sixes",
    "three_of_a_kind",
    "four_of_a_kind",
    "full_house",
    "small_straight",
    "large_straight",
    "yahtzee",
    "chance",
];

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; NUM_CATEGORIES] = [
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

    /// Index of this category in canonical order (0..=12).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Category::index`].
    pub fn from_index(idx: usize) -> Result<Category, GameError> {
        Category::ALL
            .get(idx)
            .copied()
            .ok_or_else(|| GameError::UnknownCategory {
                name: idx.to_string(),
            })
    }

    /// True for Ones..=Sixes.
    pub fn is_upper(self) -> bool {
        (self as usize) < 6
    }

    /// Face value counted by an upper category (Ones => 1, ..., Sixes => 6).
    pub fn face_value(self) -> Option<u8> {
        if self.is_upper() {
            Some(self as u8 + 1)
        } else {
            None
        }
    }

    /// Stable snake_case name, e.g. `"three_of_a_kind"`.
    pub fn name(self) -> &'static str {
        CATEGORY_NAMES[self.index()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORY_NAMES
            .iter()
            .position(|&n| n == s)
            .map(|i| Category::ALL[i])
            .ok_or_else(|| GameError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

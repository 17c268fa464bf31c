//! Pure category scoring.
//!
//! `score_category` and `potential_scores` are referentially transparent:
//! identical dice always produce identical scores. Upper bonus and Yahtzee
//! bonus accounting live on the score card, not here.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::category::{Category, NUM_CATEGORIES};
use crate::dice::NUM_DICE;

/// Fixed score for a full house (two distinct faces, counts 3 and 2).
pub const FULL_HOUSE_SCORE: u32 = 25;
/// Fixed score for a small straight (four consecutive faces).
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
/// Fixed score for a large straight (five consecutive faces).
pub const LARGE_STRAIGHT_SCORE: u32 = 40;
/// Fixed score for a Yahtzee (five of a kind).
pub const YAHTZEE_SCORE: u32 = 50;

/// Per-category scores for one hand, indexed by [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable([u32; NUM_CATEGORIES]);

impl ScoreTable {
    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    /// Iterate (category, score) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

impl Index<Category> for ScoreTable {
    type Output = u32;

    fn index(&self, category: Category) -> &u32 {
        &self.0[category.index()]
    }
}

/// Occurrences of each face, `counts[v - 1]` for face `v` in 1..=6.
pub(crate) fn face_counts(dice: [u8; NUM_DICE]) -> [u8; 6] {
    let mut counts = [0u8; 6];
    for &d in &dice {
        debug_assert!((1..=6).contains(&d), "die value out of range: {}", d);
        counts[(d - 1) as usize] += 1;
    }
    counts
}

fn sum(dice: [u8; NUM_DICE]) -> u32 {
    dice.iter().map(|&d| d as u32).sum()
}

/// The three windows of four consecutive faces.
const SMALL_STRAIGHT_RUNS: [[u8; 4]; 3] = [[1, 2, 3, 4], [2, 3, 4, 5], [3, 4, 5, 6]];

/// Score one hand in one category.
///
/// Input dice must be in 1..=6. Order does not matter.
pub fn score_category(dice: [u8; NUM_DICE], category: Category) -> u32 {
    let counts = face_counts(dice);
    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            // Upper categories occupy indices 0..=5; face = index + 1.
            let face = category.index() as u32 + 1;
            face * counts[category.index()] as u32
        }
        Category::ThreeOfAKind => {
            if counts.iter().any(|&c| c >= 3) {
                sum(dice)
            } else {
                0
            }
        }
        Category::FourOfAKind => {
            if counts.iter().any(|&c| c >= 4) {
                sum(dice)
            } else {
                0
            }
        }
        Category::FullHouse => {
            // Exactly two distinct faces with counts 3 and 2. A five-of-a-kind
            // has no count of 2 and does not qualify.
            if counts.contains(&3) && counts.contains(&2) {
                FULL_HOUSE_SCORE
            } else {
                0
            }
        }
        Category::SmallStraight => {
            let hit = SMALL_STRAIGHT_RUNS
                .iter()
                .any(|run| run.iter().all(|&f| counts[(f - 1) as usize] > 0));
            if hit {
                SMALL_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::LargeStraight => {
            let low = (1..=5).all(|f| counts[f - 1] == 1);
            let high = (2..=6).all(|f| counts[f - 1] == 1);
            if low || high {
                LARGE_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::Yahtzee => {
            if counts.iter().any(|&c| c == 5) {
                YAHTZEE_SCORE
            } else {
                0
            }
        }
        Category::Chance => sum(dice),
    }
}

/// Score one hand in every category, including already-recorded ones
/// (preview use).
pub fn potential_scores(dice: [u8; NUM_DICE]) -> ScoreTable {
    let mut out = [0u32; NUM_CATEGORIES];
    for cat in Category::ALL {
        out[cat.index()] = score_category(dice, cat);
    }
    ScoreTable(out)
}

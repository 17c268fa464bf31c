//! Per-player score card: recorded categories, totals, and bonus accounting.

use serde::{Deserialize, Serialize};

use crate::category::{Category, NUM_CATEGORIES};
use crate::error::GameError;
use crate::scoring::YAHTZEE_SCORE;

/// Upper-section bonus awarded at [`UPPER_BONUS_THRESHOLD`].
pub const UPPER_BONUS: u32 = 35;
/// Minimum upper-section total that earns the bonus.
pub const UPPER_BONUS_THRESHOLD: u32 = 63;
/// Points per extra five-of-a-kind rolled after Yahtzee was recorded at 50.
pub const YAHTZEE_BONUS: u32 = 100;

/// Category -> recorded score (unset = not yet played) plus bonus counters.
///
/// Once a category holds a value it is immutable for the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreCard {
    scores: [Option<u32>; NUM_CATEGORIES],
    yahtzee_bonus_count: u32,
}

impl ScoreCard {
    pub fn new() -> Self {
        ScoreCard::default()
    }

    /// Recorded score for a category, or `None` if not yet played.
    pub fn score(&self, category: Category) -> Option<u32> {
        self.scores[category.index()]
    }

    /// Commit a category permanently. Fails if the category already holds a
    /// value; the card is left unchanged in that case.
    pub fn record(&mut self, category: Category, value: u32) -> Result<(), GameError> {
        let slot = &mut self.scores[category.index()];
        if slot.is_some() {
            return Err(GameError::AlreadyScored { category });
        }
        *slot = Some(value);
        Ok(())
    }

    /// Sum of recorded Ones..=Sixes (unset counts as 0).
    pub fn upper_total(&self) -> u32 {
        Category::ALL
            .iter()
            .filter(|c| c.is_upper())
            .filter_map(|&c| self.score(c))
            .sum()
    }

    /// 35 iff the upper total has reached 63, else 0.
    pub fn upper_bonus(&self) -> u32 {
        if self.upper_total() >= UPPER_BONUS_THRESHOLD {
            UPPER_BONUS
        } else {
            0
        }
    }

    /// Sum of recorded ThreeOfAKind..=Chance (unset counts as 0).
    pub fn lower_total(&self) -> u32 {
        Category::ALL
            .iter()
            .filter(|c| !c.is_upper())
            .filter_map(|&c| self.score(c))
            .sum()
    }

    pub fn yahtzee_bonus_count(&self) -> u32 {
        self.yahtzee_bonus_count
    }

    pub fn grand_total(&self) -> u32 {
        self.upper_total()
            + self.upper_bonus()
            + self.lower_total()
            + self.yahtzee_bonus_count * YAHTZEE_BONUS
    }

    /// True once all 13 categories are recorded.
    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(|s| s.is_some())
    }

    /// True while a rolled five-of-a-kind earns the 100-point bonus: the
    /// Yahtzee category must already be recorded at 50. A sacrificed Yahtzee
    /// (recorded as 0) never earns bonuses.
    pub fn bonus_eligible(&self) -> bool {
        self.score(Category::Yahtzee) == Some(YAHTZEE_SCORE)
    }

    pub(crate) fn add_yahtzee_bonus(&mut self) {
        self.yahtzee_bonus_count += 1;
    }

    /// Categories not yet recorded, in canonical order.
    pub fn unset_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .iter()
            .copied()
            .filter(move |&c| self.score(c).is_none())
    }
}

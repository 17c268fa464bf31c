//! Deterministic opponent heuristics.
//!
//! Pure, synchronous functions over the current hand and the opponent's
//! card; no look-ahead beyond the current roll. Any pacing ("thinking"
//! delays) is a presentation concern layered on top.

use crate::card::ScoreCard;
use crate::category::Category;
use crate::dice::NUM_DICE;
use crate::scoring::{
    face_counts, ScoreTable, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, SMALL_STRAIGHT_SCORE,
    YAHTZEE_SCORE,
};

/// Decide which dice to keep before the next reroll.
///
/// In order: keep every die of the most frequent face (ties go to the higher
/// face); with four or more distinct faces keep the first occurrence of each
/// (straight potential); otherwise keep every die showing the maximum face.
pub fn choose_holds(dice: [u8; NUM_DICE]) -> [bool; NUM_DICE] {
    let counts = face_counts(dice);

    let mut best_face = 0u8;
    let mut best_count = 0u8;
    for face in 1u8..=6 {
        let c = counts[(face - 1) as usize];
        if c > 0 && c >= best_count {
            best_face = face;
            best_count = c;
        }
    }

    if best_count >= 2 {
        return dice.map(|d| d == best_face);
    }

    let distinct = counts.iter().filter(|&&c| c > 0).count();
    if distinct >= 4 {
        let mut seen = [false; 6];
        let mut holds = [false; NUM_DICE];
        for (hold, &d) in holds.iter_mut().zip(dice.iter()) {
            let slot = (d - 1) as usize;
            if !seen[slot] {
                seen[slot] = true;
                *hold = true;
            }
        }
        return holds;
    }

    let max_face = dice.iter().copied().max().unwrap_or(1);
    dice.map(|d| d == max_face)
}

/// Fixed-score lower categories checked ahead of the greedy pass, in
/// priority order.
const PRIORITY_CATEGORIES: [(Category, u32); 3] = [
    (Category::FullHouse, FULL_HOUSE_SCORE),
    (Category::SmallStraight, SMALL_STRAIGHT_SCORE),
    (Category::LargeStraight, LARGE_STRAIGHT_SCORE),
];

/// Choose the category to commit after the final roll.
///
/// A 50-point Yahtzee wins outright; next an achievable FullHouse,
/// SmallStraight, or LargeStraight in that fixed priority; then the unset
/// category with the highest potential score, ties broken by
/// [`Category::ALL`] order. If nothing scores, the first unset category
/// absorbs a zero.
pub fn choose_category(table: &ScoreTable, card: &ScoreCard) -> Category {
    debug_assert!(!card.is_complete(), "no category left to choose");

    if card.score(Category::Yahtzee).is_none() && table[Category::Yahtzee] == YAHTZEE_SCORE {
        return Category::Yahtzee;
    }

    for (cat, target) in PRIORITY_CATEGORIES {
        if card.score(cat).is_none() && table[cat] == target {
            return cat;
        }
    }

    let mut best: Option<(Category, u32)> = None;
    for cat in card.unset_categories() {
        let score = table[cat];
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((cat, score));
        }
    }

    // A complete card never reaches here; fall back to Chance defensively.
    best.map(|(cat, _)| cat).unwrap_or(Category::Chance)
}

//! Rules engine: state transitions for rolls, holds, and category commits.
//!
//! This module is the single place that mutates `GameState` via rules. Every
//! transition takes the state by value and either returns the next state or
//! an error, leaving the caller's copy untouched.

use rand::Rng;

use crate::category::Category;
use crate::config::GameMode;
use crate::dice::NUM_DICE;
use crate::error::GameError;
use crate::scoring;
use crate::state::{GameState, Player, TurnPhase, Winner, ROLLS_PER_TURN};

/// Reroll all non-held dice and decrement the roll counter.
///
/// After the dice settle, a five-of-a-kind credits the active card's Yahtzee
/// bonus counter when that card already holds a 50-point Yahtzee. The check
/// runs on every roll, including one that rerolls zero dice.
pub fn roll<R: Rng>(mut state: GameState, rng: &mut R) -> Result<GameState, GameError> {
    if state.game_over {
        return Err(GameError::GameAlreadyOver);
    }
    if state.rolls_remaining == 0 {
        return Err(GameError::NoRollsLeft);
    }

    state.dice.roll(rng);
    state.rolls_remaining -= 1;

    if state.dice.is_five_of_a_kind() && state.card(state.active).bonus_eligible() {
        state.card_mut(state.active).add_yahtzee_bonus();
    }

    Ok(state)
}

/// Flip the hold flag for one die.
///
/// Holds may change only after the turn's first roll and before its commit.
pub fn toggle_hold(mut state: GameState, index: usize) -> Result<GameState, GameError> {
    if state.game_over {
        return Err(GameError::GameAlreadyOver);
    }
    if index >= NUM_DICE || state.phase() == TurnPhase::AwaitingRoll {
        return Err(GameError::InvalidHold { index });
    }

    state.dice.toggle_hold(index);
    Ok(state)
}

/// Overwrite all five hold flags at once (opponent hold decisions).
///
/// Same legality window as [`toggle_hold`].
pub fn set_holds(mut state: GameState, holds: [bool; NUM_DICE]) -> Result<GameState, GameError> {
    if state.game_over {
        return Err(GameError::GameAlreadyOver);
    }
    if state.phase() == TurnPhase::AwaitingRoll {
        return Err(GameError::InvalidHold { index: 0 });
    }

    state.dice.set_holds(holds);
    Ok(state)
}

/// Commit the current hand into a category and end the turn: the score is
/// recorded permanently, the roll budget refills, holds clear, and the other
/// seat becomes active (versus mode).
///
/// Returns the next state and the committed score.
pub fn score_category(
    mut state: GameState,
    category: Category,
) -> Result<(GameState, u32), GameError> {
    if state.game_over {
        return Err(GameError::GameAlreadyOver);
    }
    if state.phase() == TurnPhase::AwaitingRoll {
        return Err(GameError::PrematureScore);
    }

    let value = scoring::score_category(state.dice.values(), category);
    state.card_mut(state.active).record(category, value)?;

    state.rolls_remaining = ROLLS_PER_TURN;
    state.dice.clear_holds();
    if state.mode == GameMode::VersusOpponent {
        state.active = state.active.other();
    }

    resolve_outcome(&mut state);
    Ok((state, value))
}

/// True once every participating card is complete.
pub fn is_finished(state: &GameState) -> bool {
    state
        .participants()
        .iter()
        .all(|&p| state.card(p).is_complete())
}

/// Winner of a finished versus game; solo games have none.
pub fn decide_winner(state: &GameState) -> Option<Winner> {
    if state.mode == GameMode::Solo {
        return None;
    }
    let human = state.card(Player::Human).grand_total();
    let opponent = state.card(Player::Opponent).grand_total();
    Some(match human.cmp(&opponent) {
        std::cmp::Ordering::Greater => Winner::Human,
        std::cmp::Ordering::Less => Winner::Opponent,
        std::cmp::Ordering::Equal => Winner::Tie,
    })
}

fn resolve_outcome(state: &mut GameState) {
    if is_finished(state) {
        state.game_over = true;
        state.winner = decide_winner(state);
    }
}

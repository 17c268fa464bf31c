//! Canonical game state value and turn phases.

use serde::{Deserialize, Serialize};

use crate::card::ScoreCard;
use crate::config::GameMode;
use crate::dice::DiceSet;

/// Rolls available at the start of every turn.
pub const ROLLS_PER_TURN: u8 = 3;

/// The two seats. Solo games only use [`Player::Human`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Outcome of a finished versus game. Solo games finish without a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Human,
    Opponent,
    Tie,
}

/// Phase of the current turn, derived from the roll counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// No roll taken yet; holds and commits are rejected.
    AwaitingRoll,
    /// One or two rolls taken; holds and commits are allowed.
    MidTurn,
    /// All three rolls used; only a commit can end the turn.
    ReadyToScore,
}

/// The whole game as one value: both cards, the shared dice tray, the roll
/// counter, and the active seat. Transitions live in [`crate::engine`];
/// nothing else mutates this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub cards: [ScoreCard; 2],
    pub dice: DiceSet,
    pub rolls_remaining: u8,
    pub active: Player,
    pub mode: GameMode,
    pub game_over: bool,
    pub winner: Option<Winner>,
}

impl GameState {
    /// Fresh game: all categories unset, full roll budget, human to act.
    pub fn new(mode: GameMode) -> Self {
        GameState {
            cards: [ScoreCard::new(); 2],
            dice: DiceSet::new(),
            rolls_remaining: ROLLS_PER_TURN,
            active: Player::Human,
            mode,
            game_over: false,
            winner: None,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        match self.rolls_remaining {
            ROLLS_PER_TURN => TurnPhase::AwaitingRoll,
            0 => TurnPhase::ReadyToScore,
            _ => TurnPhase::MidTurn,
        }
    }

    pub fn card(&self, player: Player) -> &ScoreCard {
        &self.cards[player.index()]
    }

    pub(crate) fn card_mut(&mut self, player: Player) -> &mut ScoreCard {
        &mut self.cards[player.index()]
    }

    /// Seats that fill a card this game.
    pub fn participants(&self) -> &'static [Player] {
        match self.mode {
            GameMode::Solo => &[Player::Human],
            GameMode::VersusOpponent => &[Player::Human, Player::Opponent],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_the_roll_counter() {
        let mut s = GameState::new(GameMode::VersusOpponent);
        assert_eq!(s.phase(), TurnPhase::AwaitingRoll);
        s.rolls_remaining = 2;
        assert_eq!(s.phase(), TurnPhase::MidTurn);
        s.rolls_remaining = 1;
        assert_eq!(s.phase(), TurnPhase::MidTurn);
        s.rolls_remaining = 0;
        assert_eq!(s.phase(), TurnPhase::ReadyToScore);
    }

    #[test]
    fn participants_per_mode() {
        assert_eq!(
            GameState::new(GameMode::Solo).participants(),
            &[Player::Human]
        );
        assert_eq!(
            GameState::new(GameMode::VersusOpponent).participants(),
            &[Player::Human, Player::Opponent]
        );
    }
}

//! Game orchestrator: owns the state value and the shared dice RNG.
//!
//! All mutation funnels through [`crate::engine`]; presentation layers read
//! snapshots and never touch dice, holds, or cards directly.

use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::card::ScoreCard;
use crate::category::Category;
use crate::config::{GameConfig, GameMode};
use crate::dice::NUM_DICE;
use crate::engine;
use crate::error::GameError;
use crate::policy;
use crate::scoring;
use crate::state::{GameState, Player, Winner};

/// One category slot on a card snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    /// `None` until the category is played.
    pub score: Option<u32>,
}

/// Read-only view of one player's card, totals included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub player: Player,
    pub scores: Vec<CategoryScore>,
    pub upper_total: u32,
    pub upper_bonus: u32,
    pub lower_total: u32,
    pub yahtzee_bonus_count: u32,
    pub grand_total: u32,
    pub complete: bool,
}

impl CardSnapshot {
    fn capture(player: Player, card: &ScoreCard) -> Self {
        let scores = Category::ALL
            .iter()
            .map(|&category| CategoryScore {
                category,
                score: card.score(category),
            })
            .collect();
        CardSnapshot {
            player,
            scores,
            upper_total: card.upper_total(),
            upper_bonus: card.upper_bonus(),
            lower_total: card.lower_total(),
            yahtzee_bonus_count: card.yahtzee_bonus_count(),
            grand_total: card.grand_total(),
            complete: card.is_complete(),
        }
    }
}

/// Dice tray after a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSnapshot {
    pub values: [u8; NUM_DICE],
    pub holds: [bool; NUM_DICE],
    pub rolls_remaining: u8,
}

/// Result of a committed category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub category: Category,
    pub score: u32,
    /// The committing player's card after the commit.
    pub card: CardSnapshot,
}

/// Full read-only state view; the natural serialization unit if persistence
/// is layered on externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub dice: [u8; NUM_DICE],
    pub holds: [bool; NUM_DICE],
    pub rolls_remaining: u8,
    pub score_cards: Vec<CardSnapshot>,
    pub active_player: Player,
    pub game_over: bool,
    pub winner: Option<Winner>,
}

/// One suspension point of the opponent's turn, in order. Presentation
/// layers replay these with whatever pacing they like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpponentEvent {
    Rolled {
        dice: [u8; NUM_DICE],
        rolls_remaining: u8,
    },
    YahtzeeBonus {
        count: u32,
    },
    Held {
        holds: [bool; NUM_DICE],
    },
    Scored {
        category: Category,
        score: u32,
    },
}

/// A running game: one state value plus the injectable seedable RNG shared
/// by both seats.
pub struct Game {
    state: GameState,
    rng: ChaCha8Rng,
    config: GameConfig,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Game {
            state: GameState::new(config.mode),
            rng: rng_for(&config),
            config,
        }
    }

    /// Reproducible versus game from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Game::new(GameConfig {
            mode: GameMode::VersusOpponent,
            seed: Some(seed),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn active_player(&self) -> Player {
        self.state.active
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// Read-only snapshot of everything the presentation layer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            dice: self.state.dice.values(),
            holds: self.state.dice.holds(),
            rolls_remaining: self.state.rolls_remaining,
            score_cards: self
                .state
                .participants()
                .iter()
                .map(|&p| CardSnapshot::capture(p, self.state.card(p)))
                .collect(),
            active_player: self.state.active,
            game_over: self.state.game_over,
            winner: self.state.winner,
        }
    }

    /// Preview scores for the current hand across all 13 categories.
    pub fn potential_scores(&self) -> scoring::ScoreTable {
        scoring::potential_scores(self.state.dice.values())
    }

    /// Reroll the non-held dice for the active player.
    pub fn roll(&mut self) -> Result<DiceSnapshot, GameError> {
        self.state = engine::roll(self.state, &mut self.rng)?;
        Ok(DiceSnapshot {
            values: self.state.dice.values(),
            holds: self.state.dice.holds(),
            rolls_remaining: self.state.rolls_remaining,
        })
    }

    /// Flip the hold flag on one die.
    pub fn toggle_hold(&mut self, index: usize) -> Result<(), GameError> {
        self.state = engine::toggle_hold(self.state, index)?;
        Ok(())
    }

    /// Commit the current hand into a category, ending the active turn.
    pub fn score_category(&mut self, category: Category) -> Result<ScoreEvent, GameError> {
        let committer = self.state.active;
        let (next, score) = engine::score_category(self.state, category)?;
        self.state = next;
        Ok(ScoreEvent {
            category,
            score,
            card: CardSnapshot::capture(committer, self.state.card(committer)),
        })
    }

    /// Parse-and-commit convenience for string-keyed callers.
    pub fn score_category_by_name(&mut self, name: &str) -> Result<ScoreEvent, GameError> {
        let category: Category = name.parse()?;
        self.score_category(category)
    }

    /// Play out the opponent's whole turn and return the ordered transcript
    /// of its suspension points: each roll, each bonus credit, each hold
    /// decision, and the final commit.
    ///
    /// Returns an empty transcript when it is not the opponent's move.
    pub fn play_opponent_turn(&mut self) -> Result<Vec<OpponentEvent>, GameError> {
        if self.state.game_over {
            return Err(GameError::GameAlreadyOver);
        }
        let mut events = Vec::new();
        if self.state.mode != GameMode::VersusOpponent || self.state.active != Player::Opponent {
            return Ok(events);
        }

        while self.state.rolls_remaining > 0 {
            let bonuses_before = self.state.card(Player::Opponent).yahtzee_bonus_count();
            self.state = engine::roll(self.state, &mut self.rng)?;
            events.push(OpponentEvent::Rolled {
                dice: self.state.dice.values(),
                rolls_remaining: self.state.rolls_remaining,
            });

            let bonuses = self.state.card(Player::Opponent).yahtzee_bonus_count();
            if bonuses > bonuses_before {
                events.push(OpponentEvent::YahtzeeBonus { count: bonuses });
            }

            if self.state.rolls_remaining > 0 {
                let holds = policy::choose_holds(self.state.dice.values());
                self.state = engine::set_holds(self.state, holds)?;
                events.push(OpponentEvent::Held { holds });
            }
        }

        let table = scoring::potential_scores(self.state.dice.values());
        let category = policy::choose_category(&table, self.state.card(Player::Opponent));
        let (next, score) = engine::score_category(self.state, category)?;
        self.state = next;
        events.push(OpponentEvent::Scored { category, score });

        Ok(events)
    }

    /// Discard the current game and start over under the same config. With a
    /// fixed seed the new game replays the same dice sequence.
    pub fn reset(&mut self) {
        self.state = GameState::new(self.config.mode);
        self.rng = rng_for(&self.config);
    }
}

fn rng_for(config: &GameConfig) -> ChaCha8Rng {
    match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

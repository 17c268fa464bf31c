//! Engine errors.
//!
//! Every variant is a local precondition violation; the engine has no
//! environment or I/O failure modes. A rejected operation never mutates
//! state and is never fatal to the game.

use thiserror::Error;

use crate::category::Category;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no rolls left this turn")]
    NoRollsLeft,
    #[error("invalid hold for die index {index}")]
    InvalidHold { index: usize },
    #[error("cannot score a category before the first roll")]
    PrematureScore,
    #[error("category {category} is already scored")]
    AlreadyScored { category: Category },
    #[error("unknown category: {name}")]
    UnknownCategory { name: String },
    #[error("game is already over")]
    GameAlreadyOver,
}

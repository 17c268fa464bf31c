//! yh-logging: append-only NDJSON game-event logs.
//!
//! Each call writes exactly one JSON object followed by a newline, so a log
//! survives a crash with at most one torn trailing line. A header record
//! carrying a (seed, mode) digest names the reproducible dice stream the
//! events came from.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use yh_core::{Category, DiceSnapshot, GameSnapshot, Player, ScoreEvent, Winner};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event schema version; bump on breaking field changes.
pub const LOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("log I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("event serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Hex digest naming a reproducible game stream: same seed and mode, same
/// digest.
pub fn game_digest(seed: u64, mode: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&seed.to_le_bytes());
    hasher.update(mode.as_bytes());
    hasher.finalize().to_hex().to_string()
}

/// First record of every log stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLogHeaderV1 {
    pub schema_version: u32,
    pub ts_ms: u64,
    /// `game_digest(seed, mode)`.
    pub game_id: String,
    pub seed: u64,
    pub mode: String,
}

impl GameLogHeaderV1 {
    pub fn new(seed: u64, mode: &str) -> Self {
        GameLogHeaderV1 {
            schema_version: LOG_SCHEMA_VERSION,
            ts_ms: now_ms(),
            game_id: game_digest(seed, mode),
            seed,
            mode: mode.to_string(),
        }
    }
}

/// One state transition, as observed through the engine's public API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEventV1 {
    Roll {
        ts_ms: u64,
        player: Player,
        dice: [u8; 5],
        rolls_remaining: u8,
    },
    Hold {
        ts_ms: u64,
        player: Player,
        holds: [bool; 5],
    },
    Mark {
        ts_ms: u64,
        player: Player,
        category: Category,
        score: u32,
        grand_total: u32,
    },
    YahtzeeBonus {
        ts_ms: u64,
        player: Player,
        count: u32,
    },
    GameOver {
        ts_ms: u64,
        winner: Option<Winner>,
        totals: Vec<u32>,
    },
}

impl GameEventV1 {
    pub fn roll(player: Player, dice: &DiceSnapshot) -> Self {
        GameEventV1::Roll {
            ts_ms: now_ms(),
            player,
            dice: dice.values,
            rolls_remaining: dice.rolls_remaining,
        }
    }

    pub fn mark(player: Player, event: &ScoreEvent) -> Self {
        GameEventV1::Mark {
            ts_ms: now_ms(),
            player,
            category: event.category,
            score: event.score,
            grand_total: event.card.grand_total,
        }
    }

    pub fn game_over(snapshot: &GameSnapshot) -> Self {
        GameEventV1::GameOver {
            ts_ms: now_ms(),
            winner: snapshot.winner,
            totals: snapshot
                .score_cards
                .iter()
                .map(|card| card.grand_total)
                .collect(),
        }
    }
}

/// Append-only NDJSON writer.
pub struct GameLogWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl GameLogWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, LogError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines = 0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, LogError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(GameLogWriter {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_header(&mut self, header: &GameLogHeaderV1) -> Result<(), LogError> {
        self.append(header)
    }

    pub fn write_event(&mut self, event: &GameEventV1) -> Result<(), LogError> {
        self.append(event)
    }

    fn append<T: Serialize>(&mut self, record: &T) -> Result<(), LogError> {
        let mut buf = serde_json::to_vec(record)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), LogError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

/// Parse every complete line of an NDJSON log, skipping blank lines and a
/// torn trailing line.
pub fn read_events_lenient(path: impl AsRef<Path>) -> Result<Vec<serde_json::Value>, LogError> {
    let contents = std::fs::read_to_string(path)?;
    let mut out = Vec::new();
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(v) = serde_json::from_str::<serde_json::Value>(line) {
            out.push(v);
        }
    }
    Ok(out)
}

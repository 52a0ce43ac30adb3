//! Render snapshots for inter-thread communication.
//!
//! Snapshots are immutable captures of game state sent from the logic thread
//! to the render side. This decouples game logic from rendering.

use crate::models::buzz::Buzz;

/// High-level render state representing the active screen.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderState {
    /// A round in progress.
    InGame(GameSnapshot),
    /// Post-round score screen.
    Score(ScoreSnapshot),
}

/// Snapshot of a running round.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    /// Word currently on display.
    pub word: String,
    /// Running score.
    pub score: i32,
    /// Seconds left on the clock. `None` for untimed rounds.
    pub remaining_seconds: Option<u64>,
    /// Remaining time formatted as `MM:SS`. `None` for untimed rounds.
    pub remaining_time_text: Option<String>,
    /// Whether the round has ended.
    pub finished: bool,
    /// Pending haptic signal.
    pub buzz: Buzz,
}

/// Snapshot of the score screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreSnapshot {
    /// Score the round ended with.
    pub final_score: i32,
    /// Whether another round was requested.
    pub play_again: bool,
}

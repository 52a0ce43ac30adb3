//! Application state enum for the state machine.

use crate::state::{GameState, ScoreState};

/// High-level screen states driven by `GlobalState`.
pub(super) enum AppState {
    /// A round in progress.
    Game(GameState),
    /// Post-round score screen.
    Score(ScoreState),
}

//! Snapshot creation for GameState.

use super::GameState;
use crate::shared::snapshot::GameSnapshot;
use crate::state::traits::Snapshot;

impl Snapshot for GameState {
    type Output = GameSnapshot;

    /// Creates a snapshot of the current round for rendering. The clock
    /// fields are only populated under timed rules.
    fn create_snapshot(&self) -> GameSnapshot {
        let timed = self.rules().is_timed();
        GameSnapshot {
            word: self.word.get(),
            score: self.score.get(),
            remaining_seconds: timed.then(|| self.remaining_seconds.get()),
            remaining_time_text: timed.then(|| self.remaining_time_text.get()),
            finished: self.finished.get(),
            buzz: self.buzz.get(),
        }
    }
}

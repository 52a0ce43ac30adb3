//! Post-round score screen state.

pub mod actions;

use crate::shared::observable::Observable;

/// State holder for the score screen.
///
/// Carries the terminal score of the round that just ended plus a one-shot
/// play-again request. There is no reset: the holder is discarded once the
/// owner has reacted.
pub struct ScoreState {
    final_score: i32,
    /// One-shot play-again request.
    pub play_again: Observable<bool>,
}

impl ScoreState {
    /// Captures the terminal score handed over at the end of a round.
    pub fn new(final_score: i32) -> Self {
        log::info!("SCORE: Final score is {}", final_score);
        Self {
            final_score,
            play_again: Observable::new(false),
        }
    }

    /// Score the round ended with.
    pub fn final_score(&self) -> i32 {
        self.final_score
    }

    /// Requests another round.
    pub fn on_play_again(&mut self) {
        self.play_again.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_the_terminal_score() {
        let state = ScoreState::new(42);
        assert_eq!(state.final_score(), 42);
        assert!(!state.play_again.get());
    }

    #[test]
    fn play_again_is_idempotent() {
        let mut state = ScoreState::new(3);
        state.on_play_again();
        state.on_play_again();
        assert!(state.play_again.get());
    }
}

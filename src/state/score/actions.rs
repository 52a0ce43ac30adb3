//! Trait implementations for ScoreState.

use super::ScoreState;
use crate::input::events::PlayerAction;
use crate::shared::snapshot::ScoreSnapshot;
use crate::state::traits::{HandleAction, Snapshot, Transition, Update};

impl Snapshot for ScoreState {
    type Output = ScoreSnapshot;

    fn create_snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            final_score: self.final_score(),
            play_again: self.play_again.get(),
        }
    }
}

// Score screen is static - no time-driven updates needed.
impl Update for ScoreState {
    fn update(&mut self) -> Option<Transition> {
        None
    }
}

impl HandleAction for ScoreState {
    fn handle_action(&mut self, action: &PlayerAction) -> Transition {
        match action {
            PlayerAction::PlayAgain => {
                self.on_play_again();
                Transition::ToGame
            }
            PlayerAction::Quit => Transition::Exit,
            _ => Transition::None,
        }
    }
}

//! Trait implementations for GameState.

use super::GameState;
use crate::input::events::PlayerAction;
use crate::state::traits::{HandleAction, Transition, Update};

// GameState advances its countdown between actions. When the round is over
// it hands the terminal score to the score screen.
impl Update for GameState {
    fn update(&mut self) -> Option<Transition> {
        self.poll_ticks();

        if self.is_finished() {
            return Some(Transition::ToScore(self.score.get()));
        }
        None
    }
}

impl HandleAction for GameState {
    fn handle_action(&mut self, action: &PlayerAction) -> Transition {
        match action {
            PlayerAction::Correct => self.on_correct(),
            PlayerAction::Skip => self.on_skip(),
            PlayerAction::BuzzDone => self.acknowledge_buzz(),
            // Only meaningful on the score screen
            PlayerAction::PlayAgain => {}
            PlayerAction::Quit => return Transition::Exit,
        }

        // A bounded round can end on the action itself
        if self.is_finished() {
            Transition::ToScore(self.score.get())
        } else {
            Transition::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rules::GameRules;
    use crate::system::scheduler::ManualScheduler;

    #[test]
    fn exhausting_a_bounded_round_transitions_to_the_score_screen() {
        let scheduler = ManualScheduler::new();
        let mut game = GameState::new(
            GameRules::Bounded,
            vec!["only".to_string()],
            &scheduler,
        );
        assert_eq!(
            game.handle_action(&PlayerAction::Correct),
            Transition::ToScore(1)
        );
    }

    #[test]
    fn an_expired_countdown_transitions_on_update() {
        let scheduler = ManualScheduler::new();
        let rules = GameRules::Timed {
            total_seconds: 2,
            panic_seconds: 1,
        };
        let mut game = GameState::new(rules, vec!["word".to_string()], &scheduler);
        assert_eq!(Update::update(&mut game), None);

        scheduler.fire_many(2);
        assert_eq!(Update::update(&mut game), Some(Transition::ToScore(0)));
    }
}

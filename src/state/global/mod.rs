//! Global state management for the game state machine.

mod app_state;

use app_state::AppState;

use crate::input::events::PlayerAction;
use crate::models::buzz::Buzz;
use crate::models::settings::GameSettings;
use crate::shared::snapshot::RenderState;
use crate::state::traits::{HandleAction, Snapshot, Transition, Update};
use crate::state::{GameState, ScoreState};
use crate::system::bus::GameBus;
use crate::system::scheduler::Scheduler;

/// Owns the long-lived state machine for rounds and score screens.
pub struct GlobalState {
    current_state: AppState,
    settings: GameSettings,
    scheduler: Box<dyn Scheduler>,
    bus: GameBus,
    exited: bool,
}

impl GlobalState {
    /// Creates the state machine with a first round already running.
    pub fn new(settings: GameSettings, scheduler: Box<dyn Scheduler>, bus: GameBus) -> Self {
        log::info!("LOGIC: Initializing global state");
        let game = new_round(&settings, scheduler.as_ref(), &bus);
        Self {
            current_state: AppState::Game(game),
            settings,
            scheduler,
            bus,
            exited: false,
        }
    }

    /// Routes one player action to the active state and applies any
    /// resulting transition.
    pub fn handle_action(&mut self, action: PlayerAction) {
        let transition = match &mut self.current_state {
            AppState::Game(game) => game.handle_action(&action),
            AppState::Score(score) => score.handle_action(&action),
        };
        self.apply_transition(transition);
    }

    /// Ticks the active state and processes end-of-round transitions.
    pub fn update(&mut self) {
        let transition = match &mut self.current_state {
            AppState::Game(game) => Update::update(game),
            AppState::Score(score) => Update::update(score),
        };
        if let Some(transition) = transition {
            self.apply_transition(transition);
        }
    }

    /// Tears down the active state. Stops any running countdown.
    pub fn shutdown(&mut self) {
        if let AppState::Game(game) = &mut self.current_state {
            game.shutdown();
        }
        self.exited = true;
    }

    /// True once an exit was requested.
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Creates an immutable snapshot of the active screen.
    pub fn create_snapshot(&self) -> RenderState {
        match &self.current_state {
            AppState::Game(game) => RenderState::InGame(game.create_snapshot()),
            AppState::Score(score) => RenderState::Score(score.create_snapshot()),
        }
    }

    fn apply_transition(&mut self, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::ToScore(final_score) => {
                // Countdown teardown is mandatory before the round state
                // is dropped
                if let AppState::Game(game) = &mut self.current_state {
                    game.shutdown();
                }
                self.current_state = AppState::Score(ScoreState::new(final_score));
            }
            Transition::ToGame => {
                let game = new_round(&self.settings, self.scheduler.as_ref(), &self.bus);
                self.current_state = AppState::Game(game);
            }
            Transition::Exit => self.shutdown(),
        }
    }
}

/// Builds a fresh round from the settings and wires its buzz observable to
/// the haptic channel.
fn new_round(settings: &GameSettings, scheduler: &dyn Scheduler, bus: &GameBus) -> GameState {
    log::info!("LOGIC: Starting a round with rules {:?}", settings.rules());
    let mut game = GameState::new(settings.rules(), settings.vocabulary(), scheduler);

    let haptic_tx = bus.haptic_tx.clone();
    game.buzz.subscribe(move |buzz| {
        if !matches!(buzz, Buzz::NoBuzz) {
            let _ = haptic_tx.send(buzz.pattern());
        }
    });
    game
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::GameMode;
    use crate::system::scheduler::ManualScheduler;
    use std::rc::Rc;

    fn machine() -> (Rc<ManualScheduler>, GameBus, GlobalState) {
        let scheduler = Rc::new(ManualScheduler::new());
        let bus = GameBus::new();
        let global = GlobalState::new(
            GameSettings::default(),
            Box::new(scheduler.clone()),
            bus.clone(),
        );
        (scheduler, bus, global)
    }

    #[test]
    fn finished_round_lands_on_the_score_screen_with_the_terminal_score() {
        let (scheduler, _bus, mut global) = machine();
        global.handle_action(PlayerAction::Correct);
        global.handle_action(PlayerAction::Correct);

        scheduler.fire_many(60);
        global.update();

        match global.create_snapshot() {
            RenderState::Score(snap) => {
                assert_eq!(snap.final_score, 2);
                assert!(!snap.play_again);
            }
            other => panic!("expected score screen, got {:?}", other),
        }
    }

    #[test]
    fn play_again_starts_a_fresh_round() {
        let (scheduler, _bus, mut global) = machine();
        global.handle_action(PlayerAction::Skip);
        scheduler.fire_many(60);
        global.update();

        global.handle_action(PlayerAction::PlayAgain);
        match global.create_snapshot() {
            RenderState::InGame(snap) => {
                assert_eq!(snap.score, 0);
                assert!(!snap.finished);
                assert_eq!(snap.remaining_seconds, Some(60));
            }
            other => panic!("expected a running round, got {:?}", other),
        }
    }

    #[test]
    fn buzz_patterns_reach_the_haptic_channel() {
        let (_scheduler, bus, mut global) = machine();
        global.handle_action(PlayerAction::Correct);
        assert_eq!(bus.haptic_rx.try_recv().ok(), Some(Buzz::Correct.pattern()));

        // Acknowledged: nothing further is forwarded
        global.handle_action(PlayerAction::BuzzDone);
        assert!(bus.haptic_rx.try_recv().is_err());
    }

    #[test]
    fn game_over_forwards_its_pattern_before_the_screen_switch() {
        let (scheduler, bus, mut global) = machine();
        scheduler.fire_many(55);
        global.update();
        assert_eq!(
            bus.haptic_rx.try_recv().ok(),
            Some(Buzz::CountdownPanic.pattern())
        );

        scheduler.fire_many(5);
        global.update();
        assert_eq!(bus.haptic_rx.try_recv().ok(), Some(Buzz::GameOver.pattern()));
        assert!(matches!(global.create_snapshot(), RenderState::Score(_)));
    }

    #[test]
    fn classic_rounds_have_no_clock() {
        let scheduler = Rc::new(ManualScheduler::new());
        let bus = GameBus::new();
        let settings = GameSettings {
            mode: GameMode::Classic,
            ..GameSettings::default()
        };
        let global = GlobalState::new(settings, Box::new(scheduler), bus);

        match global.create_snapshot() {
            RenderState::InGame(snap) => {
                assert_eq!(snap.remaining_seconds, None);
                assert_eq!(snap.remaining_time_text, None);
            }
            other => panic!("expected a running round, got {:?}", other),
        }
    }

    #[test]
    fn quit_tears_down_the_machine() {
        let (_scheduler, _bus, mut global) = machine();
        global.handle_action(PlayerAction::Quit);
        assert!(global.has_exited());
    }
}

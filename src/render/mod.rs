//! Terminal front end.
//!
//! Thin platform binding that consumes `RenderState` snapshots off the bus
//! and prints them, and stands in for the vibration service by logging
//! each haptic pattern before acknowledging it.

use crate::input::events::PlayerAction;
use crate::shared::snapshot::RenderState;
use crate::system::bus::GameBus;
use crossbeam_channel::select;
use std::thread::JoinHandle;
use std::time::Duration;

/// Runs the render loop on the calling thread until the logic thread ends.
pub fn run(bus: GameBus, logic: JoinHandle<()>) {
    println!("guessword: describe the word, your team shouts guesses!");
    println!("commands: (c)orrect  (s)kip  (q)uit");

    loop {
        select! {
            recv(bus.render_rx) -> msg => match msg {
                Ok(state) => draw(&state),
                Err(_) => break,
            },
            recv(bus.haptic_rx) -> msg => match msg {
                Ok(pattern) => vibrate(pattern, &bus),
                Err(_) => break,
            },
            default(Duration::from_millis(50)) => {
                if logic.is_finished() {
                    break;
                }
            }
        }
    }

    let _ = logic.join();
    log::info!("RENDER: Goodbye");
}

fn draw(state: &RenderState) {
    match state {
        RenderState::InGame(game) => {
            // The score screen arrives on the next snapshot
            if game.finished {
                return;
            }
            match &game.remaining_time_text {
                Some(time) => {
                    println!("[{}] word: {:<12} score: {}", time, game.word, game.score)
                }
                None => println!("word: {:<12} score: {}", game.word, game.score),
            }
        }
        RenderState::Score(score) => {
            println!("Round over! Final score: {}", score.final_score);
            println!("(p)lay again or (q)uit?");
        }
    }
}

/// Stand-in for the platform vibration service: log the pattern, then
/// report completion so the pending signal is cleared.
fn vibrate(pattern: &'static [u64], bus: &GameBus) {
    log::info!("HAPTIC: vibrate {:?}", pattern);
    let _ = bus.action_tx.send(PlayerAction::BuzzDone);
}

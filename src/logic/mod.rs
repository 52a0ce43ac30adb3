//! Logic thread module for game state management and updates.
//!
//! This module contains the dispatch loop that serializes player actions
//! and countdown ticks on one thread, so no two mutations of the game
//! state ever race.

use crate::models::settings::GameSettings;
use crate::state::GlobalState;
use crate::system::bus::GameBus;
use crate::system::scheduler::IntervalScheduler;
use std::thread;
use std::time::Duration;

/// Spawns the logic thread that owns the state machine.
///
/// The loop:
/// 1. Drains player actions from the bus
/// 2. Polls the countdown and applies end-of-round transitions
/// 3. Publishes a snapshot whenever the visible state changed
pub fn start_thread(bus: GameBus, settings: GameSettings) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("Logic Thread".to_string())
        .spawn(move || {
            log::info!("LOGIC: Thread started");

            let scheduler = Box::new(IntervalScheduler);
            let mut state = GlobalState::new(settings, scheduler, bus.clone());
            let mut last_snapshot = None;

            loop {
                // 1. Process player actions
                while let Ok(action) = bus.action_rx.try_recv() {
                    state.handle_action(action);
                }

                // 2. Advance time-driven state
                state.update();

                if state.has_exited() {
                    log::info!("LOGIC: Exit requested, shutting down");
                    return;
                }

                // 3. Publish only when something visible changed
                let snapshot = state.create_snapshot();
                if last_snapshot.as_ref() != Some(&snapshot) {
                    let _ = bus.render_tx.try_send(snapshot.clone());
                    last_snapshot = Some(snapshot);
                }

                thread::sleep(Duration::from_millis(1));
            }
        })
        .expect("Failed to spawn Logic thread")
}

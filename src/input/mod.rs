//! Input thread bootstrapping.

pub mod events;

use crate::input::events::PlayerAction;
use crate::system::bus::GameBus;
use std::io::BufRead;
use std::thread;

/// Spawns the stdin reader thread feeding player actions onto the bus.
pub fn start_thread(bus: GameBus) {
    thread::Builder::new()
        .name("Input Thread".to_string())
        .spawn(move || {
            log::info!("INPUT: Thread started");

            // Blocking loop: one action per line of input.
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                match PlayerAction::parse(&line) {
                    Some(action) => {
                        let quit = action == PlayerAction::Quit;
                        if bus.action_tx.send(action).is_err() {
                            log::error!("INPUT: Failed to send action (Logic thread died?)");
                            break;
                        }
                        if quit {
                            break;
                        }
                    }
                    None => {
                        if !line.trim().is_empty() {
                            log::warn!("INPUT: Unrecognized command {:?}", line.trim());
                        }
                    }
                }
            }

            log::info!("INPUT: Thread stopped");
        })
        .expect("Failed to spawn Input thread");
}

//! Application entry point and thread bootstrapper.

mod input;
mod logic;
mod render;
mod system;

mod models;
mod shared;
mod state;

use crate::models::settings::GameSettings;
use crate::system::bus::GameBus;

fn main() {
    unsafe {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    log::info!("MAIN: Booting guessword...");

    let settings = GameSettings::load();
    let bus = GameBus::new();

    input::start_thread(bus.clone());
    let logic = logic::start_thread(bus.clone(), settings);

    render::run(bus, logic);
}

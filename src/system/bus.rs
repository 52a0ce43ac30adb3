//! Shared channel infrastructure between system threads.
//!
//! The `GameBus` provides a centralized communication hub for all threads
//! in the application, using lock-free channels for message passing.

use crate::input::events::PlayerAction;
use crate::shared::snapshot::RenderState;
use crossbeam_channel::{Receiver, Sender, bounded, unbounded};

/// Aggregates the cross-thread communication channels.
///
/// The `GameBus` is the central hub for inter-thread communication,
/// providing channels for:
/// - Player actions from the input thread
/// - State snapshots to the render side
/// - Vibration patterns to the haptic consumer
#[derive(Clone)]
pub struct GameBus {
    /// Input → Logic: player actions.
    pub action_tx: Sender<PlayerAction>,
    pub action_rx: Receiver<PlayerAction>,

    /// Logic → Render: state snapshots.
    pub render_tx: Sender<RenderState>,
    pub render_rx: Receiver<RenderState>,

    /// Logic → Render: vibration patterns to play.
    pub haptic_tx: Sender<&'static [u64]>,
    pub haptic_rx: Receiver<&'static [u64]>,
}

impl GameBus {
    /// Creates a new bus with all channels initialized.
    pub fn new() -> Self {
        let (action_tx, action_rx) = unbounded();

        // Bounded render channel: max 2 snapshots queued to limit latency
        let (render_tx, render_rx) = bounded(2);

        let (haptic_tx, haptic_rx) = unbounded();

        Self {
            action_tx,
            action_rx,
            render_tx,
            render_rx,
            haptic_tx,
            haptic_rx,
        }
    }
}

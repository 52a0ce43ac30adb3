//! Traits for state management.
//!
//! These traits define the common interface for all screen states.

use crate::input::events::PlayerAction;

/// Transition result from handling an action or update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Stay in current state.
    None,
    /// Round over: move to the score screen with the terminal score.
    ToScore(i32),
    /// Start a fresh round.
    ToGame,
    /// Exit the application.
    Exit,
}

/// Trait for creating render-ready snapshots.
///
/// Snapshots are immutable captures of state sent to the render side.
/// They decouple game logic from rendering.
pub trait Snapshot {
    /// The snapshot type produced.
    type Output;

    /// Creates an immutable snapshot for rendering.
    fn create_snapshot(&self) -> Self::Output;
}

/// Trait for per-iteration updates.
///
/// States with time-driven behavior (the countdown) implement this. It is
/// invoked once per dispatch-loop iteration, serialized with action
/// handling, and returns an optional transition to another state.
pub trait Update {
    /// Advances time-driven state.
    ///
    /// # Returns
    /// Optional transition to another state.
    fn update(&mut self) -> Option<Transition>;
}

/// Trait for handling player actions.
///
/// Each state can handle actions differently and return transitions
/// to other states.
pub trait HandleAction {
    /// Handles a player action and returns any state transition.
    fn handle_action(&mut self, action: &PlayerAction) -> Transition;
}

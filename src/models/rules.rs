//! Round rulesets.

/// The two round rulesets.
///
/// These are genuinely different games and are never blended: a bounded
/// round has no clock and ends when the word queue empties, while a timed
/// round reshuffles the vocabulary for as long as the clock runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameRules {
    /// Play through the shuffled vocabulary once. No timer, no haptics.
    Bounded,
    /// Play against a countdown, refilling the queue as needed.
    Timed {
        /// Round length in seconds.
        total_seconds: u64,
        /// Remaining seconds at which the panic buzz fires.
        panic_seconds: u64,
    },
}

impl GameRules {
    pub fn is_timed(&self) -> bool {
        matches!(self, GameRules::Timed { .. })
    }
}

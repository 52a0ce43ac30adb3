//! Player actions entering the logic thread.

/// Commands a player can issue during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// The current word was guessed correctly.
    Correct,
    /// Give up on the current word.
    Skip,
    /// The platform finished playing a vibration pattern.
    BuzzDone,
    /// Start another round from the score screen.
    PlayAgain,
    /// Leave the application.
    Quit,
}

impl PlayerAction {
    /// Parses a line of terminal input. Whole words and single-letter
    /// shortcuts are both accepted.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "c" | "correct" | "got" => Some(Self::Correct),
            "s" | "skip" => Some(Self::Skip),
            "p" | "play" | "again" => Some(Self::PlayAgain),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

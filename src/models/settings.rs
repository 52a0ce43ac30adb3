//! Game settings loaded from a TOML file.
//!
//! The file is optional: a missing or malformed `guessword.toml` falls back
//! to the default timed ruleset with the built-in vocabulary.

use crate::models::rules::GameRules;
use crate::models::words::default_vocabulary;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file name, looked up in the working directory.
const SETTINGS_FILE: &str = "guessword.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// One pass through the vocabulary, no timer.
    Classic,
    /// Race the countdown.
    Timed,
}

/// Tunable game settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub mode: GameMode,
    /// Round length for timed mode, in seconds.
    pub countdown_seconds: u64,
    /// Remaining seconds at which the panic buzz fires.
    pub panic_seconds: u64,
    /// Vocabulary override. Empty means the built-in word list.
    pub words: Vec<String>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::Timed,
            countdown_seconds: 60,
            panic_seconds: 5,
            words: Vec::new(),
        }
    }
}

impl GameSettings {
    /// Loads settings from the working directory, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("SETTINGS: Failed to parse {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::warn!("SETTINGS: {:?} not found, using defaults", path);
                Self::default()
            }
        }
    }

    /// Ruleset selected by these settings.
    pub fn rules(&self) -> GameRules {
        match self.mode {
            GameMode::Classic => GameRules::Bounded,
            GameMode::Timed => GameRules::Timed {
                total_seconds: self.countdown_seconds,
                panic_seconds: self.panic_seconds,
            },
        }
    }

    /// Vocabulary for a new round.
    pub fn vocabulary(&self) -> Vec<String> {
        if self.words.is_empty() {
            default_vocabulary()
        } else {
            self.words.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_timed_ruleset() {
        let settings = GameSettings::default();
        assert_eq!(
            settings.rules(),
            GameRules::Timed {
                total_seconds: 60,
                panic_seconds: 5
            }
        );
        assert_eq!(settings.vocabulary().len(), 21);
    }

    #[test]
    fn classic_mode_selects_bounded_rules() {
        let settings: GameSettings = toml::from_str("mode = \"classic\"").unwrap();
        assert_eq!(settings.rules(), GameRules::Bounded);
    }

    #[test]
    fn countdown_overrides_apply() {
        let settings: GameSettings =
            toml::from_str("countdown_seconds = 10\npanic_seconds = 3").unwrap();
        assert_eq!(
            settings.rules(),
            GameRules::Timed {
                total_seconds: 10,
                panic_seconds: 3
            }
        );
    }

    #[test]
    fn custom_words_override_the_vocabulary() {
        let settings: GameSettings = toml::from_str("words = [\"ant\", \"bee\"]").unwrap();
        assert_eq!(settings.vocabulary(), vec!["ant", "bee"]);
    }
}

//! Built-in vocabulary.

/// The stock word list served when the settings provide no override.
pub const VOCABULARY: [&str; 21] = [
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
];

/// The stock word list as owned strings, ready to shuffle.
pub fn default_vocabulary() -> Vec<String> {
    VOCABULARY.iter().map(|w| w.to_string()).collect()
}

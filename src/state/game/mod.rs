//! Round state for an active game.
//!
//! The `GameState` handles all round logic including:
//! - Word queue shuffling and progression
//! - Score tracking
//! - The one-second countdown
//! - One-shot haptic signals

pub mod actions;

mod snapshot;

use crate::models::buzz::Buzz;
use crate::models::rules::GameRules;
use crate::shared::observable::Observable;
use crate::system::scheduler::{Scheduler, TickHandle};
use rand::seq::SliceRandom;
use std::time::Duration;

/// Countdown tick interval.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// State holder for a round in progress.
///
/// All mutation happens on the logic thread; time only reaches the round
/// through the injected [`Scheduler`], one tick per second.
pub struct GameState {
    /// Full vocabulary for this round, kept for queue refills.
    vocabulary: Vec<String>,
    /// Shuffled words still to be served. The front is the next word.
    word_queue: Vec<String>,

    /// Word currently on display.
    pub word: Observable<String>,
    /// Running score. Unbounded in both directions.
    pub score: Observable<i32>,
    /// Seconds left on the clock. Stays at zero for untimed rules.
    pub remaining_seconds: Observable<u64>,
    /// `MM:SS` rendering of the remaining time.
    pub remaining_time_text: Observable<String>,
    /// True once the round has ended.
    pub finished: Observable<bool>,
    /// Pending haptic signal, cleared via [`acknowledge_buzz`].
    ///
    /// [`acknowledge_buzz`]: GameState::acknowledge_buzz
    pub buzz: Observable<Buzz>,

    rules: GameRules,
    ticker: Option<TickHandle>,
}

impl GameState {
    /// Builds a fresh round: shuffles the vocabulary, serves the first
    /// word and, for timed rules, starts the one-second ticker.
    ///
    /// Every observable holds a defined value before this returns, so no
    /// command can ever see uninitialized state.
    pub fn new(rules: GameRules, vocabulary: Vec<String>, scheduler: &dyn Scheduler) -> Self {
        let mut word_queue = vocabulary.clone();
        word_queue.shuffle(&mut rand::rng());

        let (remaining, ticker) = match rules {
            GameRules::Timed { total_seconds, .. } => {
                (total_seconds, Some(scheduler.every(TICK_INTERVAL)))
            }
            GameRules::Bounded => (0, None),
        };

        let mut state = Self {
            vocabulary,
            word_queue,
            word: Observable::new(String::new()),
            score: Observable::new(0),
            remaining_seconds: Observable::new(remaining),
            remaining_time_text: Observable::new(format_elapsed(remaining)),
            finished: Observable::new(false),
            buzz: Observable::new(Buzz::NoBuzz),
            rules,
            ticker,
        };
        state.advance_word();
        state
    }

    /// Skip the current word. Costs one point.
    pub fn on_skip(&mut self) {
        self.score.set(self.score.get() - 1);
        self.advance_word();
    }

    /// The current word was guessed. Worth one point; timed rules buzz.
    pub fn on_correct(&mut self) {
        self.score.set(self.score.get() + 1);
        self.advance_word();
        if self.rules.is_timed() {
            self.buzz.set(Buzz::Correct);
        }
    }

    /// Clears the pending haptic signal once the platform has played it.
    pub fn acknowledge_buzz(&mut self) {
        self.buzz.set(Buzz::NoBuzz);
    }

    /// Drains pending countdown ticks. Called from the dispatch loop so
    /// ticks and player actions stay serialized.
    pub fn poll_ticks(&mut self) {
        while self.ticker.as_ref().is_some_and(|t| t.try_tick()) {
            self.on_tick();
        }
    }

    /// Stops the countdown. Mandatory teardown before the state holder is
    /// discarded; afterwards no tick is ever delivered again.
    pub fn shutdown(&mut self) {
        self.cancel_countdown();
    }

    /// Ruleset this round runs under.
    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }

    /// One second elapsed on the clock.
    fn on_tick(&mut self) {
        let GameRules::Timed { panic_seconds, .. } = self.rules else {
            return;
        };

        let remaining = self.remaining_seconds.get().saturating_sub(1);
        self.remaining_seconds.set(remaining);
        self.remaining_time_text.set(format_elapsed(remaining));

        // The clock passes the panic mark exactly once, so the buzz cannot
        // re-trigger on later ticks
        if remaining == panic_seconds {
            self.buzz.set(Buzz::CountdownPanic);
        }
        if remaining == 0 {
            self.finished.set(true);
            self.buzz.set(Buzz::GameOver);
            self.cancel_countdown();
        }
    }

    /// Serves the next word. An empty queue either refills (timed rules)
    /// or ends the round with the current word untouched (bounded rules).
    fn advance_word(&mut self) {
        if self.word_queue.is_empty() {
            match self.rules {
                GameRules::Timed { .. } => self.refill_queue(),
                GameRules::Bounded => {
                    self.finished.set(true);
                    return;
                }
            }
        }
        if self.word_queue.is_empty() {
            // Empty vocabulary; nothing to serve
            return;
        }
        let next = self.word_queue.remove(0);
        self.word.set(next);
    }

    /// Reshuffles a fresh copy of the vocabulary into the queue.
    fn refill_queue(&mut self) {
        self.word_queue = self.vocabulary.clone();
        self.word_queue.shuffle(&mut rand::rng());
    }

    fn cancel_countdown(&mut self) {
        if let Some(ticker) = &mut self.ticker {
            ticker.cancel();
        }
    }
}

/// Formats a second count as `MM:SS`.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

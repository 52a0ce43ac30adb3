//! Injectable periodic timer.
//!
//! The countdown must be testable without real time, so the state machine
//! only ever sees this capability: `every(interval)` hands back a tick
//! channel with explicit cancellation. The wall-clock implementation rides
//! on `crossbeam_channel::tick`; tests drive a hand-fired one.

use crossbeam_channel::{Receiver, tick};
use std::time::{Duration, Instant};

/// Periodic timer capability injected into the state machine.
pub trait Scheduler {
    /// Starts a periodic tick stream with the given interval.
    fn every(&self, interval: Duration) -> TickHandle;
}

/// A running tick stream.
///
/// Cancellation is explicit and mandatory at teardown: a cancelled handle
/// never delivers another tick, even if the underlying timer keeps firing.
pub struct TickHandle {
    rx: Option<Receiver<Instant>>,
}

impl TickHandle {
    fn new(rx: Receiver<Instant>) -> Self {
        Self { rx: Some(rx) }
    }

    /// Consumes one pending tick if available.
    pub fn try_tick(&self) -> bool {
        match &self.rx {
            Some(rx) => rx.try_recv().is_ok(),
            None => false,
        }
    }

    /// Stops delivery. Further `try_tick` calls always return `false`.
    pub fn cancel(&mut self) {
        self.rx = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.rx.is_none()
    }
}

/// Wall-clock scheduler, one tick per elapsed interval.
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    fn every(&self, interval: Duration) -> TickHandle {
        TickHandle::new(tick(interval))
    }
}

/// Hand-driven scheduler for tests: `fire` pushes one tick to every handle
/// created so far.
#[cfg(test)]
pub struct ManualScheduler {
    senders: std::cell::RefCell<Vec<crossbeam_channel::Sender<Instant>>>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            senders: std::cell::RefCell::new(Vec::new()),
        }
    }

    /// Delivers one tick to every outstanding handle.
    pub fn fire(&self) {
        for tx in self.senders.borrow().iter() {
            let _ = tx.send(Instant::now());
        }
    }

    /// Delivers `n` ticks.
    pub fn fire_many(&self, n: u64) {
        for _ in 0..n {
            self.fire();
        }
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn every(&self, _interval: Duration) -> TickHandle {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.senders.borrow_mut().push(tx);
        TickHandle::new(rx)
    }
}

#[cfg(test)]
impl Scheduler for std::rc::Rc<ManualScheduler> {
    fn every(&self, interval: Duration) -> TickHandle {
        self.as_ref().every(interval)
    }
}

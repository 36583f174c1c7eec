//! Per-question countdown, modeled as a cooperative tick source.
//!
//! The sequencer never touches time directly: the host drives ticks (one per
//! second, or whatever cadence it renders at) and reacts to [`Tick::Expired`]
//! by auto-submitting. A countdown expires at most once; it must be `reset`
//! on every advance to the next question.

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Time remains on the clock.
    Running { remaining: u32 },
    /// The clock just reached zero. Reported exactly once per countdown.
    Expired,
    /// The countdown already expired; nothing to do.
    Idle,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
    expired: bool,
}

impl Countdown {
    pub fn new(limit_seconds: u32) -> Self {
        Countdown {
            limit: limit_seconds,
            remaining: limit_seconds,
            expired: false,
        }
    }

    /// Restarts the clock for a new question.
    pub fn reset(&mut self, limit_seconds: u32) {
        *self = Countdown::new(limit_seconds);
    }

    /// Advances the clock by one second.
    pub fn tick(&mut self) -> Tick {
        if self.expired {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.expired = true;
            Tick::Expired
        } else {
            Tick::Running {
                remaining: self.remaining,
            }
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

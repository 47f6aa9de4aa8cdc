//! Tick sources and feedback countdowns
//!
//! `TickClock` is the single authoritative tick source a session embedder
//! owns: it converts wall-clock elapsed time into a bounded number of fixed
//! steps and stops dead once cancelled. `Countdown` backs the ancillary
//! reveal/advance windows; it only moves when ticked by the authoritative
//! loop, so it can never fire after the loop has stopped.

use crate::consts::{MAX_SUBSTEPS, TICK_DT};

/// Fixed-timestep accumulator tied to one session's lifetime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    accumulator: f32,
    cancelled: bool,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            cancelled: false,
        }
    }

    /// Feed wall-clock elapsed seconds; returns how many fixed steps to run.
    ///
    /// Elapsed time is clamped and the step count capped at `MAX_SUBSTEPS`
    /// so a long stall cannot snowball. After `cancel`, always 0.
    pub fn advance(&mut self, elapsed_secs: f32) -> u32 {
        if self.cancelled {
            return 0;
        }
        self.accumulator += elapsed_secs.clamp(0.0, 0.1);
        let mut steps = 0;
        while self.accumulator >= TICK_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= TICK_DT;
            steps += 1;
        }
        steps
    }

    /// Tear down this tick source; no step is ever produced again
    pub fn cancel(&mut self) {
        if !self.cancelled {
            self.cancelled = true;
            log::debug!("tick clock cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Tick-counted delay for non-authoritative feedback windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn ticks(n: u32) -> Self {
        Self { remaining: n }
    }

    /// Advance one tick; true exactly on the tick the countdown expires.
    /// Ticking an expired countdown is a guarded no-op.
    pub fn tick(&mut self) -> bool {
        match self.remaining {
            0 => false,
            1 => {
                self.remaining = 0;
                true
            }
            _ => {
                self.remaining -= 1;
                false
            }
        }
    }

    pub fn running(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_fixed_steps() {
        let mut clock = TickClock::new();
        // Four periods (nudged past float rounding)
        assert_eq!(clock.advance(TICK_DT * 4.0 + 1e-4), 4);
        // A fraction carries over
        assert_eq!(clock.advance(TICK_DT * 0.5), 0);
        assert_eq!(clock.advance(TICK_DT * 0.5), 1);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(10.0), MAX_SUBSTEPS);
    }

    #[test]
    fn no_steps_after_cancel() {
        let mut clock = TickClock::new();
        assert!(clock.advance(TICK_DT * 2.0) > 0);
        clock.cancel();
        assert_eq!(clock.advance(1.0), 0);
        assert_eq!(clock.advance(TICK_DT), 0);
        assert!(clock.is_cancelled());
    }

    #[test]
    fn countdown_fires_once_then_noops() {
        let mut cd = Countdown::ticks(3);
        assert!(!cd.tick());
        assert!(!cd.tick());
        assert!(cd.tick());
        assert!(!cd.tick());
        assert!(!cd.running());
    }
}

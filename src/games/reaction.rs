//! Reaction tester: click when the light turns green
//!
//! Each round arms a random delay before the go signal; clicking early is
//! "too soon" and records nothing. Enough recorded rounds with a qualifying
//! average reaction wins. There is no loss state: a slow average just never
//! qualifies.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::clock::Countdown;
use crate::sim::session::{Challenge, Outcome, Stats};
use crate::tuning::ReactionTuning;
use crate::{ms_for_ticks, ticks_for_ms};

/// Per-tick input commands
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactionInput {
    /// Arm the next round (start button)
    pub arm: bool,
    /// The reaction click
    pub press: bool,
}

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq)]
enum RoundState {
    Waiting,
    Armed { delay: Countdown },
    Go { elapsed: u32 },
    Scored { ms: f32 },
    TooSoon,
}

/// Round state tag as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundPhase {
    Waiting,
    Armed,
    Go,
    Scored,
    TooSoon,
}

/// Render payload for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct ReactionView {
    pub round: RoundPhase,
    pub attempts_ms: Vec<f32>,
    pub average_ms: Option<f32>,
    pub last_ms: Option<f32>,
}

pub struct Reaction {
    tuning: ReactionTuning,
    state: RoundState,
    attempts_ms: Vec<f32>,
}

impl Reaction {
    pub fn new(tuning: ReactionTuning) -> Self {
        Self {
            tuning,
            state: RoundState::Waiting,
            attempts_ms: Vec::new(),
        }
    }

    pub fn attempts_ms(&self) -> &[f32] {
        &self.attempts_ms
    }

    pub fn average_ms(&self) -> Option<f32> {
        if self.attempts_ms.is_empty() {
            return None;
        }
        Some(self.attempts_ms.iter().sum::<f32>() / self.attempts_ms.len() as f32)
    }

    /// Record one round's reaction time; extra rounds are ignored
    pub fn record_attempt(&mut self, ms: f32) {
        if (self.attempts_ms.len() as u32) < self.tuning.rounds {
            self.attempts_ms.push(ms);
        }
    }

    fn rounds_remaining(&self) -> bool {
        (self.attempts_ms.len() as u32) < self.tuning.rounds
    }

    fn arm(&mut self, rng: &mut Pcg32) {
        let delay_ms = rng.random_range(self.tuning.min_delay_ms..self.tuning.max_delay_ms);
        self.state = RoundState::Armed {
            delay: Countdown::ticks(ticks_for_ms(delay_ms)),
        };
    }
}

impl Challenge for Reaction {
    type Input = ReactionInput;
    type View = ReactionView;

    fn step(&mut self, input: &ReactionInput, rng: &mut Pcg32) {
        match self.state {
            RoundState::Waiting => {
                if input.arm && self.rounds_remaining() {
                    self.arm(rng);
                }
            }
            RoundState::Armed { mut delay } => {
                if input.press {
                    self.state = RoundState::TooSoon;
                } else if delay.tick() {
                    self.state = RoundState::Go { elapsed: 0 };
                } else {
                    self.state = RoundState::Armed { delay };
                }
            }
            RoundState::Go { elapsed } => {
                // The press tick itself counts toward the reaction time
                let elapsed = elapsed + 1;
                if input.press {
                    let ms = ms_for_ticks(elapsed);
                    self.record_attempt(ms);
                    self.state = RoundState::Scored { ms };
                } else {
                    self.state = RoundState::Go { elapsed };
                }
            }
            RoundState::Scored { .. } | RoundState::TooSoon => {
                if input.arm && self.rounds_remaining() {
                    self.arm(rng);
                }
            }
        }
    }

    fn evaluate(&self) -> Option<Outcome> {
        if !self.rounds_remaining()
            && self.average_ms().is_some_and(|avg| avg <= self.tuning.max_avg_ms)
        {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    fn stats(&self) -> Stats {
        Stats {
            score: self.attempts_ms.len() as u64,
            moves: self.attempts_ms.len() as u32,
            ..Stats::default()
        }
    }

    fn view(&self) -> ReactionView {
        let (round, last_ms) = match self.state {
            RoundState::Waiting => (RoundPhase::Waiting, None),
            RoundState::Armed { .. } => (RoundPhase::Armed, None),
            RoundState::Go { .. } => (RoundPhase::Go, None),
            RoundState::Scored { ms } => (RoundPhase::Scored, Some(ms)),
            RoundState::TooSoon => (RoundPhase::TooSoon, None),
        };
        ReactionView {
            round,
            attempts_ms: self.attempts_ms.clone(),
            average_ms: self.average_ms(),
            last_ms,
        }
    }

    fn reset(&mut self, _rng: &mut Pcg32) {
        *self = Reaction::new(self.tuning.clone());
    }
}

//! Logo quiz: name the brand
//!
//! A shuffled roster of logos; a correct guess scores and, after a short
//! reveal pause, advances. Wrong guesses leave the round open. Clearing the
//! whole roster wins.

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::clock::Countdown;
use crate::sim::session::{Challenge, Outcome, Stats};
use crate::tuning::LogoTuning;

/// One quiz entry: accepted name plus the asset tag the UI shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoCard {
    pub name: &'static str,
    pub asset: &'static str,
}

/// The fixed roster every run draws from
pub static ROSTER: [LogoCard; 5] = [
    LogoCard {
        name: "mastercard",
        asset: "master.webp",
    },
    LogoCard {
        name: "tinkerhub",
        asset: "tinker.webp",
    },
    LogoCard {
        name: "duckduckgo",
        asset: "duck.webp",
    },
    LogoCard {
        name: "linux",
        asset: "linux.webp",
    },
    LogoCard {
        name: "java",
        asset: "java.webp",
    },
];

/// Per-tick input commands
#[derive(Debug, Clone, Default)]
pub struct LogoInput {
    /// Submit a guess for the current logo
    pub guess: Option<String>,
}

/// Render payload for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct LogoView {
    /// Asset tag of the logo on screen, None once the roster is cleared
    pub asset: Option<String>,
    pub score: u64,
    pub solved: usize,
    pub total: usize,
    /// Whether the last submitted guess was correct
    pub last_correct: Option<bool>,
}

pub struct LogoQuiz {
    tuning: LogoTuning,
    /// Shuffled indices into `ROSTER`
    order: Vec<usize>,
    current: usize,
    score: u64,
    /// Reveal pause after a correct guess; guesses are ignored while running
    advance: Option<Countdown>,
    last_correct: Option<bool>,
}

impl LogoQuiz {
    pub fn new(tuning: LogoTuning, rng: &mut Pcg32) -> Self {
        let mut order: Vec<usize> = (0..ROSTER.len()).collect();
        order.shuffle(rng);
        Self {
            tuning,
            order,
            current: 0,
            score: 0,
            advance: None,
            last_correct: None,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn solved(&self) -> usize {
        self.current
    }

    fn current_card(&self) -> Option<&'static LogoCard> {
        self.order.get(self.current).map(|&i| &ROSTER[i])
    }

    fn submit(&mut self, guess: &str) {
        let guess = guess.trim();
        if guess.is_empty() {
            return;
        }
        let Some(card) = self.current_card() else {
            return;
        };
        if guess.eq_ignore_ascii_case(card.name) {
            self.score += 1;
            self.last_correct = Some(true);
            self.advance = Some(Countdown::ticks(self.tuning.advance_ticks));
        } else {
            self.last_correct = Some(false);
        }
    }
}

impl Challenge for LogoQuiz {
    type Input = LogoInput;
    type View = LogoView;

    fn step(&mut self, input: &LogoInput, _rng: &mut Pcg32) {
        // During the reveal pause new guesses are ignored
        if let Some(pause) = self.advance.as_mut() {
            if pause.tick() {
                self.advance = None;
                self.current += 1;
                self.last_correct = None;
            }
            return;
        }
        if let Some(guess) = &input.guess {
            self.submit(guess);
        }
    }

    fn evaluate(&self) -> Option<Outcome> {
        if self.current >= self.order.len() {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    fn stats(&self) -> Stats {
        Stats {
            score: self.score,
            moves: self.current as u32,
            ..Stats::default()
        }
    }

    fn view(&self) -> LogoView {
        LogoView {
            asset: self.current_card().map(|c| c.asset.to_string()),
            score: self.score,
            solved: self.current,
            total: self.order.len(),
            last_correct: self.last_correct,
        }
    }

    fn reset(&mut self, rng: &mut Pcg32) {
        *self = LogoQuiz::new(self.tuning.clone(), rng);
    }
}

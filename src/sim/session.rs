//! Session driver: the game loop state machine
//!
//! `Session` owns one play-through of a single challenge: Idle → Running →
//! Terminal(Won|Lost). Terminal is absorbing; only an explicit `reset`
//! returns to Idle. The driver is the sole mutator of the phase flag, and
//! the terminal check is a single evaluation point per tick.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rng::RngState;

/// Terminal reason tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Created or reset, waiting for an explicit start signal
    Idle,
    /// Ticking
    Running,
    /// Absorbing end state with its reason
    Terminal(Outcome),
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Terminal(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Terminal(o) => Some(*o),
            _ => None,
        }
    }
}

/// Aggregate counters every challenge reports each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub score: u64,
    pub lives: u32,
    pub moves: u32,
    pub matches: u32,
}

/// Per-tick render snapshot handed to the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<V> {
    pub phase: Phase,
    pub ticks: u64,
    pub stats: Stats,
    pub view: V,
}

/// One mini-game plugged into the session driver.
///
/// `step` performs the fixed tick sequence for the game (physics, collision,
/// spawn, scoring, in that order for the scrolling games). `evaluate` is the
/// win/loss threshold check; the driver calls it exactly once per tick and
/// never again after a terminal transition.
pub trait Challenge {
    /// Input commands consumed on one tick
    type Input;
    /// Game-specific snapshot payload
    type View: Serialize;

    fn step(&mut self, input: &Self::Input, rng: &mut Pcg32);
    fn evaluate(&self) -> Option<Outcome>;
    fn stats(&self) -> Stats;
    fn view(&self) -> Self::View;
    /// Rebuild the challenge to its pre-start state (reshuffling via `rng`)
    fn reset(&mut self, rng: &mut Pcg32);
}

/// Hook invoked once when a session transitions to Won
pub type CompletionHook = Box<dyn FnMut(&Stats)>;

/// One play-through of a single challenge
pub struct Session<C: Challenge> {
    seed: u64,
    rng: Pcg32,
    phase: Phase,
    ticks: u64,
    challenge: C,
    completion_fired: bool,
    on_complete: Option<CompletionHook>,
}

impl<C: Challenge> Session<C> {
    pub fn new(seed: u64, challenge: C) -> Self {
        Self {
            seed,
            rng: RngState::new(seed).to_rng(),
            phase: Phase::Idle,
            ticks: 0,
            challenge,
            completion_fired: false,
            on_complete: None,
        }
    }

    /// Register the completion hook fired on the Won transition
    pub fn on_complete(&mut self, hook: CompletionHook) {
        self.on_complete = Some(hook);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn challenge(&self) -> &C {
        &self.challenge
    }

    /// Explicit start signal: Idle → Running. Any other phase is a no-op.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
            log::info!("session started (seed {})", self.seed);
        }
    }

    /// Advance one authoritative tick.
    ///
    /// Outside Running this is a guarded no-op: terminal sessions never
    /// mutate score, lives, or entity state again.
    pub fn tick(&mut self, input: &C::Input) {
        if !self.phase.is_running() {
            return;
        }

        self.ticks += 1;
        self.challenge.step(input, &mut self.rng);

        // Single authoritative terminal evaluation per tick
        if let Some(outcome) = self.challenge.evaluate() {
            self.phase = Phase::Terminal(outcome);
            let stats = self.challenge.stats();
            log::info!(
                "session terminal: {:?} after {} ticks (score {})",
                outcome,
                self.ticks,
                stats.score
            );
            if outcome == Outcome::Won && !self.completion_fired {
                self.completion_fired = true;
                if let Some(hook) = self.on_complete.as_mut() {
                    hook(&stats);
                }
            }
        }
    }

    /// Discard all play state and return to Idle
    pub fn reset(&mut self) {
        self.challenge.reset(&mut self.rng);
        self.ticks = 0;
        self.completion_fired = false;
        self.phase = Phase::Idle;
        log::debug!("session reset (seed {})", self.seed);
    }

    pub fn snapshot(&self) -> Snapshot<C::View> {
        Snapshot {
            phase: self.phase,
            ticks: self.ticks,
            stats: self.challenge.stats(),
            view: self.challenge.view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Minimal challenge: scores 1/tick, wins at 5, loses if `poison` set
    #[derive(Default)]
    struct Counter {
        score: u64,
        poison: bool,
    }

    struct CounterInput {
        poison: bool,
    }

    impl Challenge for Counter {
        type Input = CounterInput;
        type View = u64;

        fn step(&mut self, input: &CounterInput, _rng: &mut Pcg32) {
            self.score += 1;
            if input.poison {
                self.poison = true;
            }
        }

        fn evaluate(&self) -> Option<Outcome> {
            if self.poison {
                Some(Outcome::Lost)
            } else if self.score >= 5 {
                Some(Outcome::Won)
            } else {
                None
            }
        }

        fn stats(&self) -> Stats {
            Stats {
                score: self.score,
                ..Stats::default()
            }
        }

        fn view(&self) -> u64 {
            self.score
        }

        fn reset(&mut self, _rng: &mut Pcg32) {
            *self = Counter::default();
        }
    }

    const RUN: CounterInput = CounterInput { poison: false };
    const POISON: CounterInput = CounterInput { poison: true };

    #[test]
    fn ticks_ignored_before_start() {
        let mut s = Session::new(1, Counter::default());
        s.tick(&RUN);
        assert_eq!(s.ticks(), 0);
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn runs_to_won_and_freezes() {
        let mut s = Session::new(1, Counter::default());
        s.start();
        for _ in 0..10 {
            s.tick(&RUN);
        }
        assert_eq!(s.phase(), Phase::Terminal(Outcome::Won));
        // Terminal is absorbing: nothing changes on further ticks
        let frozen = s.snapshot();
        s.tick(&RUN);
        s.tick(&POISON);
        let after = s.snapshot();
        assert_eq!(after.ticks, frozen.ticks);
        assert_eq!(after.stats, frozen.stats);
        assert_eq!(after.phase, frozen.phase);
    }

    #[test]
    fn loss_wins_no_callback() {
        let fired = Rc::new(Cell::new(0u32));
        let hook_fired = fired.clone();
        let mut s = Session::new(1, Counter::default());
        s.on_complete(Box::new(move |_| hook_fired.set(hook_fired.get() + 1)));
        s.start();
        s.tick(&POISON);
        assert_eq!(s.phase(), Phase::Terminal(Outcome::Lost));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn completion_hook_fires_exactly_once() {
        let fired = Rc::new(Cell::new(0u32));
        let hook_fired = fired.clone();
        let mut s = Session::new(1, Counter::default());
        s.on_complete(Box::new(move |stats| {
            assert_eq!(stats.score, 5);
            hook_fired.set(hook_fired.get() + 1);
        }));
        s.start();
        for _ in 0..20 {
            s.tick(&RUN);
        }
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn reset_returns_to_idle_and_rearms_hook() {
        let fired = Rc::new(Cell::new(0u32));
        let hook_fired = fired.clone();
        let mut s = Session::new(1, Counter::default());
        s.on_complete(Box::new(move |_| hook_fired.set(hook_fired.get() + 1)));
        s.start();
        for _ in 0..5 {
            s.tick(&RUN);
        }
        assert_eq!(fired.get(), 1);

        s.reset();
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.ticks(), 0);
        assert_eq!(s.snapshot().stats.score, 0);

        // A fresh play-through fires the hook again
        s.start();
        for _ in 0..5 {
            s.tick(&RUN);
        }
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn score_monotone_while_running() {
        let mut s = Session::new(1, Counter::default());
        s.start();
        let mut last = 0;
        while s.phase().is_running() {
            s.tick(&RUN);
            let score = s.snapshot().stats.score;
            assert!(score >= last);
            last = score;
        }
    }
}

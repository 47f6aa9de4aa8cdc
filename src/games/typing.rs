//! Speed typing: three pangrams against the clock
//!
//! The working input is replaced wholesale each keystroke event. WPM and
//! accuracy update live from tick time; a sentence completes when the input
//! matches it exactly. Qualifying speed and accuracy on the final sentence
//! wins; anything else stays non-won.

use rand_pcg::Pcg32;
use serde::Serialize;

use crate::clock::Countdown;
use crate::ms_for_ticks;
use crate::sim::session::{Challenge, Outcome, Stats};
use crate::tuning::TypingTuning;

/// The sentences every run types, in order
pub const SENTENCES: [&str; 3] = [
    "The quick brown fox jumps over the lazy dog",
    "Pack my box with five dozen liquor jugs",
    "How vexingly quick daft zebras jump",
];

/// Per-tick input commands
#[derive(Debug, Clone, Default)]
pub struct TypingInput {
    /// Replace the working input with this text (the field's new contents)
    pub text: Option<String>,
}

/// Render payload for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct TypingView {
    pub sentence: String,
    pub sentence_index: usize,
    pub input: String,
    pub wpm: f32,
    pub accuracy: f32,
    pub complete: bool,
}

pub struct Typing {
    tuning: TypingTuning,
    sentence_index: usize,
    input: String,
    /// Ticks since the current sentence started
    elapsed: u32,
    wpm: f32,
    accuracy: f32,
    complete: bool,
    /// Pause between a completed sentence and the next one
    advance: Option<Countdown>,
}

impl Typing {
    pub fn new(tuning: TypingTuning) -> Self {
        Self {
            tuning,
            sentence_index: 0,
            input: String::new(),
            elapsed: 0,
            wpm: 0.0,
            accuracy: 100.0,
            complete: false,
            advance: None,
        }
    }

    pub fn wpm(&self) -> f32 {
        self.wpm
    }

    pub fn accuracy(&self) -> f32 {
        self.accuracy
    }

    pub fn complete(&self) -> bool {
        self.complete
    }

    fn target(&self) -> &'static str {
        SENTENCES[self.sentence_index.min(SENTENCES.len() - 1)]
    }

    /// Live stats for the current input against the current sentence
    fn recompute_stats(&mut self) {
        let target = self.target();
        let minutes = ms_for_ticks(self.elapsed) / 60_000.0;
        if minutes > 0.0 {
            let words = self.input.trim().split(' ').count() as f32;
            self.wpm = (words / minutes).round();
        }
        let correct = self
            .input
            .chars()
            .zip(target.chars())
            .filter(|(a, b)| a == b)
            .count() as f32;
        self.accuracy = (correct / target.chars().count() as f32 * 100.0).round();
    }

    fn finish_sentence(&mut self) {
        if self.sentence_index + 1 < SENTENCES.len() {
            self.advance = Some(Countdown::ticks(self.tuning.advance_ticks));
        } else {
            self.complete = true;
        }
    }
}

impl Challenge for Typing {
    type Input = TypingInput;
    type View = TypingView;

    fn step(&mut self, input: &TypingInput, _rng: &mut Pcg32) {
        if self.complete {
            return;
        }

        // Between sentences: wait out the pause, ignore keystrokes
        if let Some(pause) = self.advance.as_mut() {
            if pause.tick() {
                self.advance = None;
                self.sentence_index += 1;
                self.input.clear();
                self.elapsed = 0;
            }
            return;
        }

        self.elapsed += 1;
        if let Some(text) = &input.text {
            self.input = text.clone();
            self.recompute_stats();
            if self.input == self.target() {
                self.finish_sentence();
            }
        }
    }

    fn evaluate(&self) -> Option<Outcome> {
        if self.complete
            && self.wpm >= self.tuning.target_wpm
            && self.accuracy >= self.tuning.target_accuracy
        {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    fn stats(&self) -> Stats {
        Stats {
            score: self.wpm.max(0.0) as u64,
            moves: self.sentence_index as u32,
            ..Stats::default()
        }
    }

    fn view(&self) -> TypingView {
        TypingView {
            sentence: self.target().to_string(),
            sentence_index: self.sentence_index,
            input: self.input.clone(),
            wpm: self.wpm,
            accuracy: self.accuracy,
            complete: self.complete,
        }
    }

    fn reset(&mut self, _rng: &mut Pcg32) {
        *self = Typing::new(self.tuning.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::RngState;
    use crate::sim::session::{Phase, Session};
    use crate::ticks_for_ms;

    fn rng() -> Pcg32 {
        RngState::new(8).to_rng()
    }

    const IDLE: TypingInput = TypingInput { text: None };

    fn typed(s: &str) -> TypingInput {
        TypingInput {
            text: Some(s.to_string()),
        }
    }

    /// Drive one sentence to completion over `ticks` ticks
    fn type_sentence(t: &mut Typing, r: &mut Pcg32, sentence: &str, ticks: u32) {
        for _ in 0..ticks - 1 {
            t.step(&IDLE, r);
        }
        t.step(&typed(sentence), r);
    }

    #[test]
    fn fast_accurate_run_wins() {
        let mut typing = Typing::new(TypingTuning::default());
        let mut r = rng();
        let pause = TypingTuning::default().advance_ticks;

        // Each sentence "typed" in ~3 seconds: far above 40 WPM
        let fast = ticks_for_ms(3000);
        for (i, sentence) in SENTENCES.iter().enumerate() {
            type_sentence(&mut typing, &mut r, sentence, fast);
            if i + 1 < SENTENCES.len() {
                for _ in 0..pause {
                    typing.step(&IDLE, &mut r);
                }
            }
        }
        assert!(typing.complete());
        assert!(typing.wpm() >= 40.0);
        assert_eq!(typing.accuracy(), 100.0);
        assert_eq!(typing.evaluate(), Some(Outcome::Won));
    }

    #[test]
    fn slow_run_completes_but_never_wins() {
        let mut typing = Typing::new(TypingTuning::default());
        let mut r = rng();
        let pause = TypingTuning::default().advance_ticks;

        // One minute per sentence: 7-9 words/min, well under target
        let slow = ticks_for_ms(60_000);
        for (i, sentence) in SENTENCES.iter().enumerate() {
            type_sentence(&mut typing, &mut r, sentence, slow);
            if i + 1 < SENTENCES.len() {
                for _ in 0..pause {
                    typing.step(&IDLE, &mut r);
                }
            }
        }
        assert!(typing.complete());
        assert!(typing.wpm() < 40.0);
        assert_eq!(typing.evaluate(), None);
    }

    #[test]
    fn wrong_characters_hurt_accuracy() {
        let mut typing = Typing::new(TypingTuning::default());
        let mut r = rng();
        typing.step(&typed("Txx quick"), &mut r);
        assert!(typing.accuracy() < 100.0);
        // A corrected input restores it
        typing.step(&typed("The quick"), &mut r);
        assert_eq!(
            typing.accuracy(),
            (9.0 / SENTENCES[0].chars().count() as f32 * 100.0).round()
        );
    }

    #[test]
    fn keystrokes_during_the_pause_are_ignored() {
        let mut typing = Typing::new(TypingTuning::default());
        let mut r = rng();
        type_sentence(&mut typing, &mut r, SENTENCES[0], 10);
        assert!(typing.advance.is_some());
        typing.step(&typed("stray input"), &mut r);
        assert_eq!(typing.input, SENTENCES[0]);
    }

    #[test]
    fn session_reports_won_only_after_final_sentence() {
        let mut session = Session::new(8, Typing::new(TypingTuning::default()));
        session.start();
        session.tick(&typed(SENTENCES[0]));
        assert_eq!(session.phase(), Phase::Running);
        // Wait out the pause, then finish the rest quickly
        let pause = TypingTuning::default().advance_ticks;
        for _ in 0..pause {
            session.tick(&IDLE);
        }
        session.tick(&typed(SENTENCES[1]));
        for _ in 0..pause {
            session.tick(&IDLE);
        }
        session.tick(&typed(SENTENCES[2]));
        assert_eq!(session.phase(), Phase::Terminal(Outcome::Won));
    }
}

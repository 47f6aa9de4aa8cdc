//! Memory match: find all the pairs
//!
//! Twelve face-down cards, six faces. Two revealed cards count one move and
//! resolve after a reveal window: matched pairs lock in, mismatches flip
//! back. All pairs matched wins; there is no loss state.

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::clock::Countdown;
use crate::sim::session::{Challenge, Outcome, Stats};
use crate::tuning::MemoryTuning;

/// Card face categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    Rocket,
    Star,
    Gamepad,
    Trophy,
    Gem,
    Flame,
}

impl CardFace {
    pub const ALL: [CardFace; 6] = [
        CardFace::Rocket,
        CardFace::Star,
        CardFace::Gamepad,
        CardFace::Trophy,
        CardFace::Gem,
        CardFace::Flame,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardFace::Rocket => "rocket",
            CardFace::Star => "star",
            CardFace::Gamepad => "gamepad",
            CardFace::Trophy => "trophy",
            CardFace::Gem => "gem",
            CardFace::Flame => "flame",
        }
    }
}

/// One card on the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub face: CardFace,
    pub revealed: bool,
    pub matched: bool,
}

/// A revealed pair waiting out its reveal window
#[derive(Debug, Clone, Copy)]
struct PendingPair {
    first: usize,
    second: usize,
    matched: bool,
    window: Countdown,
}

/// Per-tick input commands
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryInput {
    /// Flip the card at this index; invalid flips are no-ops
    pub flip: Option<usize>,
}

/// Render payload for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct MemoryView {
    pub cards: Vec<Card>,
    pub matches: u32,
    pub moves: u32,
}

pub struct MemoryMatch {
    tuning: MemoryTuning,
    cards: Vec<Card>,
    /// Index of a single revealed card awaiting its partner
    open: Option<usize>,
    pending: Option<PendingPair>,
    matches: u32,
    moves: u32,
}

impl MemoryMatch {
    pub fn new(tuning: MemoryTuning, rng: &mut Pcg32) -> Self {
        let cards = Self::shuffled_deck(&tuning, rng);
        Self {
            tuning,
            cards,
            open: None,
            pending: None,
            matches: 0,
            moves: 0,
        }
    }

    fn shuffled_deck(tuning: &MemoryTuning, rng: &mut Pcg32) -> Vec<Card> {
        let pairs = (tuning.pairs as usize).min(CardFace::ALL.len());
        let mut faces: Vec<CardFace> = CardFace::ALL[..pairs]
            .iter()
            .chain(CardFace::ALL[..pairs].iter())
            .copied()
            .collect();
        faces.shuffle(rng);
        faces
            .into_iter()
            .map(|face| Card {
                face,
                revealed: false,
                matched: false,
            })
            .collect()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Flip a card face up; returns whether anything changed
    fn flip(&mut self, idx: usize) -> bool {
        // A pending pair locks the table until its window resolves
        if self.pending.is_some() {
            return false;
        }
        let Some(card) = self.cards.get(idx) else {
            return false;
        };
        if card.revealed || card.matched {
            return false;
        }
        self.cards[idx].revealed = true;

        match self.open.take() {
            None => {
                self.open = Some(idx);
            }
            Some(first) => {
                self.moves += 1;
                let matched = self.cards[first].face == self.cards[idx].face;
                let window = if matched {
                    self.tuning.match_reveal_ticks
                } else {
                    self.tuning.mismatch_reveal_ticks
                };
                self.pending = Some(PendingPair {
                    first,
                    second: idx,
                    matched,
                    window: Countdown::ticks(window),
                });
            }
        }
        true
    }

    fn resolve_pending(&mut self) {
        let Some(mut pair) = self.pending else {
            return;
        };
        if pair.window.tick() {
            if pair.matched {
                self.cards[pair.first].matched = true;
                self.cards[pair.second].matched = true;
                self.cards[pair.first].revealed = false;
                self.cards[pair.second].revealed = false;
                self.matches += 1;
            } else {
                self.cards[pair.first].revealed = false;
                self.cards[pair.second].revealed = false;
            }
            self.pending = None;
        } else {
            self.pending = Some(pair);
        }
    }
}

impl Challenge for MemoryMatch {
    type Input = MemoryInput;
    type View = MemoryView;

    fn step(&mut self, input: &MemoryInput, _rng: &mut Pcg32) {
        self.resolve_pending();
        if let Some(idx) = input.flip {
            self.flip(idx);
        }
    }

    fn evaluate(&self) -> Option<Outcome> {
        if self.matches >= self.tuning.pairs {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    fn stats(&self) -> Stats {
        Stats {
            matches: self.matches,
            moves: self.moves,
            ..Stats::default()
        }
    }

    fn view(&self) -> MemoryView {
        MemoryView {
            cards: self.cards.clone(),
            matches: self.matches,
            moves: self.moves,
        }
    }

    fn reset(&mut self, rng: &mut Pcg32) {
        *self = MemoryMatch::new(self.tuning.clone(), rng);
    }
}

//! Sliding number puzzle: order the tiles, hole last
//!
//! Shuffled by random valid hole-moves from the solved state, so every deal
//! is solvable. Sliding a tile not adjacent to the hole is a no-op.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::sim::session::{Challenge, Outcome, Stats};
use crate::tuning::PuzzleTuning;

/// Per-tick input commands
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleInput {
    /// Slide the tile at this grid index into the hole
    pub slide: Option<usize>,
}

/// Render payload for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleView {
    /// Row-major tiles; None is the hole
    pub grid: Vec<Option<u8>>,
    pub side: usize,
    pub moves: u32,
    pub solved: bool,
}

pub struct SlidingPuzzle {
    tuning: PuzzleTuning,
    grid: Vec<Option<u8>>,
    moves: u32,
}

impl SlidingPuzzle {
    pub fn new(tuning: PuzzleTuning, rng: &mut Pcg32) -> Self {
        let grid = Self::shuffled_grid(&tuning, rng);
        Self {
            tuning,
            grid,
            moves: 0,
        }
    }

    fn solved_grid(side: usize) -> Vec<Option<u8>> {
        let mut grid: Vec<Option<u8>> = (1..(side * side) as u8).map(Some).collect();
        grid.push(None);
        grid
    }

    /// Shuffle by applying random valid hole-moves to the solved state
    fn shuffled_grid(tuning: &PuzzleTuning, rng: &mut Pcg32) -> Vec<Option<u8>> {
        let side = tuning.side;
        let mut grid = Self::solved_grid(side);
        for _ in 0..tuning.shuffle_moves {
            let hole = grid.iter().position(|t| t.is_none()).unwrap_or(0);
            let neighbors = Self::neighbors_of(hole, side);
            let pick = neighbors[rng.random_range(0..neighbors.len())];
            grid.swap(hole, pick);
        }
        grid
    }

    /// Grid indices orthogonally adjacent to `idx`
    fn neighbors_of(idx: usize, side: usize) -> Vec<usize> {
        let row = idx / side;
        let col = idx % side;
        let mut out = Vec::with_capacity(4);
        if row > 0 {
            out.push(idx - side);
        }
        if row < side - 1 {
            out.push(idx + side);
        }
        if col > 0 {
            out.push(idx - 1);
        }
        if col < side - 1 {
            out.push(idx + 1);
        }
        out
    }

    fn hole(&self) -> usize {
        // One hole always exists
        self.grid
            .iter()
            .position(|t| t.is_none())
            .unwrap_or(self.grid.len() - 1)
    }

    pub fn grid(&self) -> &[Option<u8>] {
        &self.grid
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn solved(&self) -> bool {
        let side = self.tuning.side;
        let last = side * side - 1;
        self.grid[..last]
            .iter()
            .enumerate()
            .all(|(i, t)| *t == Some(i as u8 + 1))
            && self.grid[last].is_none()
    }

    /// Slide the tile at `idx` into the hole if adjacent
    fn slide(&mut self, idx: usize) {
        if idx >= self.grid.len() || self.grid[idx].is_none() {
            return;
        }
        let hole = self.hole();
        if Self::neighbors_of(hole, self.tuning.side).contains(&idx) {
            self.grid.swap(hole, idx);
            self.moves += 1;
        }
    }
}

impl Challenge for SlidingPuzzle {
    type Input = PuzzleInput;
    type View = PuzzleView;

    fn step(&mut self, input: &PuzzleInput, _rng: &mut Pcg32) {
        if let Some(idx) = input.slide {
            self.slide(idx);
        }
    }

    fn evaluate(&self) -> Option<Outcome> {
        if self.solved() {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    fn stats(&self) -> Stats {
        Stats {
            moves: self.moves,
            ..Stats::default()
        }
    }

    fn view(&self) -> PuzzleView {
        PuzzleView {
            grid: self.grid.clone(),
            side: self.tuning.side,
            moves: self.moves,
            solved: self.solved(),
        }
    }

    fn reset(&mut self, rng: &mut Pcg32) {
        *self = SlidingPuzzle::new(self.tuning.clone(), rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::RngState;
    use crate::sim::session::{Phase, Session};

    fn rng() -> Pcg32 {
        RngState::new(21).to_rng()
    }

    #[test]
    fn shuffle_keeps_all_tiles() {
        let p = SlidingPuzzle::new(PuzzleTuning::default(), &mut rng());
        let mut seen: Vec<u8> = p.grid().iter().flatten().copied().collect();
        seen.sort_unstable();
        let expected: Vec<u8> = (1..16).collect();
        assert_eq!(seen, expected);
        assert_eq!(p.grid().iter().filter(|t| t.is_none()).count(), 1);
    }

    #[test]
    fn slide_next_to_hole_swaps_and_counts() {
        let mut p = SlidingPuzzle::new(PuzzleTuning::default(), &mut rng());
        let hole = p.hole();
        let neighbor = SlidingPuzzle::neighbors_of(hole, 4)[0];
        let tile = p.grid()[neighbor];
        p.step(&PuzzleInput { slide: Some(neighbor) }, &mut rng());
        assert_eq!(p.grid()[hole], tile);
        assert!(p.grid()[neighbor].is_none());
        assert_eq!(p.moves(), 1);
    }

    #[test]
    fn far_tile_and_out_of_bounds_are_no_ops() {
        let mut p = SlidingPuzzle::new(PuzzleTuning::default(), &mut rng());
        let hole = p.hole();
        // A tile two rows away can never be adjacent
        let far = if hole < 8 { hole + 8 } else { hole - 8 };
        let before = p.grid().to_vec();
        p.step(&PuzzleInput { slide: Some(far) }, &mut rng());
        p.step(&PuzzleInput { slide: Some(640) }, &mut rng());
        p.step(&PuzzleInput { slide: Some(hole) }, &mut rng());
        assert_eq!(p.grid(), &before[..]);
        assert_eq!(p.moves(), 0);
    }

    #[test]
    fn solving_wins_exactly_at_the_ordered_grid() {
        // One shuffle move leaves a single slide to solve
        let tuning = PuzzleTuning {
            shuffle_moves: 1,
            ..PuzzleTuning::default()
        };
        let mut session = Session::new(21, SlidingPuzzle::new(tuning, &mut rng()));
        session.start();
        assert!(session.phase().is_running());

        let hole = session.challenge().hole();
        // The solving move puts the displaced tile back: slide index 15
        // (solved hole position) is adjacent to wherever one move left it
        let fix = 15;
        session.tick(&PuzzleInput { slide: Some(fix) });
        assert_eq!(session.phase(), Phase::Terminal(Outcome::Won));
        assert_ne!(hole, 15);
        assert_eq!(session.snapshot().stats.moves, 1);
    }
}

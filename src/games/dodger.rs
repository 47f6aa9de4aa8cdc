//! Dodger: sidestep the scrolling legal clauses
//!
//! Free 2-D movement in discrete steps while banners of legal text scroll
//! in from the right. Survive the clock to win; run out of lives to lose.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::sim::entity::{EntityView, Obstacle, Player, PlayerView};
use crate::sim::session::{Challenge, Outcome, Stats};
use crate::sim::spawn::{self, SpawnGate};
use crate::tuning::DodgerTuning;

/// Discrete movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Per-tick input commands
#[derive(Debug, Clone, Copy, Default)]
pub struct DodgerInput {
    /// Move one discrete step; out-of-bounds moves clamp silently
    pub step: Option<Direction>,
}

/// Render payload for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct DodgerView {
    pub player: PlayerView,
    pub entities: Vec<EntityView>,
}

pub struct Dodger {
    tuning: DodgerTuning,
    player: Player,
    obstacles: Vec<Obstacle>,
    gate: SpawnGate,
    elapsed: u32,
    next_id: u32,
}

impl Dodger {
    pub fn new(tuning: DodgerTuning) -> Self {
        let player = Player::new(tuning.player_start, tuning.player_size, tuning.lives);
        let gate = SpawnGate::every(tuning.spawn_interval);
        Self {
            tuning,
            player,
            obstacles: Vec::new(),
            gate,
            elapsed: 0,
            next_id: 1,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    fn apply_step(&mut self, dir: Direction) {
        let t = &self.tuning;
        match dir {
            Direction::Up => self.player.pos.y = (self.player.pos.y - t.step_y).max(0.0),
            Direction::Down => {
                self.player.pos.y = (self.player.pos.y + t.step_y).min(t.bound_max.y)
            }
            Direction::Left => self.player.pos.x = (self.player.pos.x - t.step_x).max(0.0),
            Direction::Right => {
                self.player.pos.x = (self.player.pos.x + t.step_x).min(t.bound_max.x)
            }
        }
    }
}

impl Challenge for Dodger {
    type Input = DodgerInput;
    type View = DodgerView;

    fn step(&mut self, input: &DodgerInput, rng: &mut Pcg32) {
        // Physics: discrete player steps, obstacle scroll
        if let Some(dir) = input.step {
            self.apply_step(dir);
        }
        for o in &mut self.obstacles {
            o.scroll();
        }
        self.obstacles.retain(|o| !o.off_screen());

        // Collision: every overlapping banner is consumed, one life each
        let player_box = self.player.aabb();
        let mut hits = 0u32;
        self.obstacles.retain(|o| {
            if player_box.overlaps(&o.aabb()) {
                hits += 1;
                false
            } else {
                true
            }
        });
        self.player.lives = self.player.lives.saturating_sub(hits);

        // Spawn: time-gated, one banner per interval
        if self.gate.tick() {
            let id = self.next_id;
            self.next_id += 1;
            self.obstacles.push(spawn::dodger_obstacle(id, rng, &self.tuning));
        }

        // Score: one point per surviving tick
        self.elapsed += 1;
        self.player.score += 1;
    }

    fn evaluate(&self) -> Option<Outcome> {
        if self.player.lives == 0 {
            Some(Outcome::Lost)
        } else if self.elapsed >= self.tuning.survive_ticks {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    fn stats(&self) -> Stats {
        Stats {
            score: self.player.score,
            lives: self.player.lives,
            ..Stats::default()
        }
    }

    fn view(&self) -> DodgerView {
        DodgerView {
            player: self.player.view(),
            entities: self.obstacles.iter().map(EntityView::of_obstacle).collect(),
        }
    }

    fn reset(&mut self, _rng: &mut Pcg32) {
        *self = Dodger::new(self.tuning.clone());
    }
}

//! Flappy clone: thread the bird through the pipes
//!
//! Single life: touching a pipe, the ceiling, or the floor ends the run.
//! Clearing enough pipes wins.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::collision::Aabb;
use crate::sim::entity::{EntityKind, EntityView, Player, PlayerView};
use crate::sim::physics;
use crate::sim::session::{Challenge, Outcome, Stats};
use crate::tuning::FlappyTuning;

/// Per-tick input commands
#[derive(Debug, Clone, Copy, Default)]
pub struct FlappyInput {
    /// Flap signal; unlike a grounded jump this always applies
    pub flap: bool,
}

/// A pipe pair: two boxes sharing one gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    pub x: f32,
    /// Bottom edge of the top pipe (top of the gap)
    pub gap_top: f32,
    /// Whether this pipe already scored
    pub scored: bool,
}

impl Pipe {
    fn top_box(&self, t: &FlappyTuning) -> Aabb {
        Aabb::from_parts(self.x, 0.0, t.pipe_width, self.gap_top)
    }

    fn bottom_box(&self, t: &FlappyTuning) -> Aabb {
        let gap_bottom = self.gap_top + t.pipe_gap;
        Aabb::from_parts(self.x, gap_bottom, t.pipe_width, t.arena.y - gap_bottom)
    }
}

/// Render payload for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct FlappyView {
    pub player: PlayerView,
    pub entities: Vec<EntityView>,
}

pub struct Flappy {
    tuning: FlappyTuning,
    bird: Player,
    pipes: Vec<Pipe>,
    next_id: u32,
}

impl Flappy {
    pub fn new(tuning: FlappyTuning) -> Self {
        let bird = Player::new(
            Vec2::new(tuning.bird_x, tuning.bird_start_y),
            Vec2::splat(tuning.bird_size),
            1,
        );
        Self {
            tuning,
            bird,
            pipes: Vec::new(),
            next_id: 1,
        }
    }

    pub fn bird(&self) -> &Player {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    fn crash(&mut self) {
        self.bird.lives = 0;
    }

    fn should_spawn(&self) -> bool {
        match self.pipes.last() {
            None => true,
            Some(p) => p.x < self.tuning.spawn_behind_x,
        }
    }
}

impl Challenge for Flappy {
    type Input = FlappyInput;
    type View = FlappyView;

    fn step(&mut self, input: &FlappyInput, rng: &mut Pcg32) {
        // Physics
        if input.flap {
            physics::flap(&mut self.bird, self.tuning.flap_impulse);
        }
        physics::step_gravity(&mut self.bird, self.tuning.gravity);
        for pipe in &mut self.pipes {
            pipe.x -= self.tuning.scroll_speed;
        }
        self.pipes.retain(|p| p.x + self.tuning.pipe_width > 0.0);

        // Collision: arena bounds, then pipe boxes
        if self.bird.pos.y <= 0.0 || self.bird.pos.y >= self.tuning.kill_floor() {
            self.crash();
        }
        let bird_box = self.bird.aabb();
        let hit = self
            .pipes
            .iter()
            .any(|p| bird_box.overlaps(&p.top_box(&self.tuning)) || bird_box.overlaps(&p.bottom_box(&self.tuning)));
        if hit {
            self.crash();
        }

        // Spawn after collision
        if self.should_spawn() {
            let gap_top = rng.random_range(self.tuning.gap_top_min..self.tuning.gap_top_max);
            let id = self.next_id;
            self.next_id += 1;
            self.pipes.push(Pipe {
                id,
                x: self.tuning.arena.x,
                gap_top,
                scored: false,
            });
        }

        // Score: a pipe whose trailing edge passed the bird counts once
        for pipe in &mut self.pipes {
            if !pipe.scored && pipe.x + self.tuning.pipe_width < self.bird.pos.x {
                pipe.scored = true;
                self.bird.score += 1;
            }
        }
    }

    fn evaluate(&self) -> Option<Outcome> {
        if self.bird.lives == 0 {
            Some(Outcome::Lost)
        } else if self.bird.score >= self.tuning.win_score {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    fn stats(&self) -> Stats {
        Stats {
            score: self.bird.score,
            lives: self.bird.lives,
            ..Stats::default()
        }
    }

    fn view(&self) -> FlappyView {
        let mut entities = Vec::with_capacity(self.pipes.len() * 2);
        for pipe in &self.pipes {
            let top = pipe.top_box(&self.tuning);
            let bottom = pipe.bottom_box(&self.tuning);
            entities.push(EntityView {
                id: pipe.id,
                kind: EntityKind::PipeTop,
                pos: top.pos,
                size: top.size,
            });
            entities.push(EntityView {
                id: pipe.id,
                kind: EntityKind::PipeBottom,
                pos: bottom.pos,
                size: bottom.size,
            });
        }
        FlappyView {
            player: self.bird.view(),
            entities,
        }
    }

    fn reset(&mut self, _rng: &mut Pcg32) {
        *self = Flappy::new(self.tuning.clone());
    }
}

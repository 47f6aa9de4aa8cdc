//! Spawner: probabilistic and time-gated entity creation
//!
//! Entities appear at the trailing edge of the visible area with secondary
//! attributes drawn from fixed ranges. Spacing is only guaranteed indirectly
//! via probability tuning, not hard distance checks.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Obstacle, ObstacleKind, PowerUp, PowerUpKind};
use crate::tuning::{DodgerTuning, RunnerTuning};

/// Independent per-tick Bernoulli trial
#[inline]
pub fn chance(rng: &mut Pcg32, probability: f32) -> bool {
    rng.random::<f32>() < probability
}

/// Fixed footprint for each runner obstacle kind
pub fn runner_obstacle_size(kind: ObstacleKind) -> Vec2 {
    match kind {
        ObstacleKind::Checkbox => Vec2::new(40.0, 40.0),
        ObstacleKind::TextWall => Vec2::new(60.0, 120.0),
        ObstacleKind::Popup => Vec2::new(80.0, 60.0),
        ObstacleKind::Captcha => Vec2::new(100.0, 80.0),
        // Dodger-only kind; never rolled by the runner spawner
        ObstacleKind::LegalText => Vec2::new(80.0, 30.0),
    }
}

/// Construct a runner obstacle at the trailing edge
pub fn runner_obstacle(id: u32, rng: &mut Pcg32, t: &RunnerTuning) -> Obstacle {
    let kind = match rng.random_range(0..4u8) {
        0 => ObstacleKind::Checkbox,
        1 => ObstacleKind::TextWall,
        2 => ObstacleKind::Popup,
        _ => ObstacleKind::Captcha,
    };
    let size = runner_obstacle_size(kind);
    let y = 50.0 + rng.random::<f32>() * (t.arena.y - size.y - 100.0);
    Obstacle {
        id,
        kind,
        pos: Vec2::new(t.arena.x, y),
        size,
        speed: t.scroll_speed,
    }
}

/// Construct a runner power-up at the trailing edge
pub fn runner_power_up(id: u32, rng: &mut Pcg32, t: &RunnerTuning) -> PowerUp {
    let kind = match rng.random_range(0..3u8) {
        0 => PowerUpKind::ClearCookies,
        1 => PowerUpKind::Incognito,
        _ => PowerUpKind::MuteNotifications,
    };
    let y = 50.0 + rng.random::<f32>() * (t.arena.y - 100.0);
    PowerUp {
        id,
        kind,
        pos: Vec2::new(t.arena.x, y),
        size: Vec2::splat(30.0),
        speed: t.scroll_speed,
        collected: false,
    }
}

/// Construct a dodger obstacle (randomized width and speed)
pub fn dodger_obstacle(id: u32, rng: &mut Pcg32, t: &DodgerTuning) -> Obstacle {
    let width = 40.0 + rng.random::<f32>() * 80.0;
    let speed = 2.0 + rng.random::<f32>() * 3.0;
    let y = rng.random::<f32>() * (t.arena.y - 100.0);
    Obstacle {
        id,
        kind: ObstacleKind::LegalText,
        pos: Vec2::new(t.arena.x, y),
        size: Vec2::new(width, 30.0),
        speed,
    }
}

/// Time-gated spawn trigger: fires once every `interval` ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnGate {
    interval: u32,
    elapsed: u32,
}

impl SpawnGate {
    pub fn every(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            elapsed: 0,
        }
    }

    /// Advance one tick; true exactly when the gate fires
    pub fn tick(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.interval {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}

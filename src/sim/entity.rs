//! Entity model: plain data records for the player and everything it can hit
//!
//! Kinds are closed enums; spawn, snapshot, and collision-effect sites match
//! on them exhaustively.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// The player-controlled actor (runner, bird, or dodger)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub lives: u32,
    pub score: u64,
    /// Remaining ticks of damage immunity (0 = vulnerable)
    pub invulnerable_ticks: u32,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2, lives: u32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            lives,
            score: 0,
            invulnerable_ticks: 0,
        }
    }

    pub fn invulnerable(&self) -> bool {
        self.invulnerable_ticks > 0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Count down the immunity window (call once per tick)
    pub fn decay_invulnerability(&mut self) {
        self.invulnerable_ticks = self.invulnerable_ticks.saturating_sub(1);
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            pos: self.pos,
            size: self.size,
            lives: self.lives,
            invulnerable: self.invulnerable(),
        }
    }
}

/// Damaging obstacle categories across the scrolling games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Pre-ticked consent checkbox (runner)
    Checkbox,
    /// Wall of terms-and-conditions text (runner)
    TextWall,
    /// Cookie-consent popup (runner)
    Popup,
    /// Traffic-light captcha (runner)
    Captcha,
    /// Scrolling legal-clause banner (dodger)
    LegalText,
}

impl ObstacleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Checkbox => "checkbox",
            ObstacleKind::TextWall => "text-wall",
            ObstacleKind::Popup => "popup",
            ObstacleKind::Captcha => "captcha",
            ObstacleKind::LegalText => "legal-text",
        }
    }
}

/// A scrolling damaging entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward scroll speed in px/tick
    pub speed: f32,
}

impl Obstacle {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Advance one tick along the scroll axis (x strictly decreases)
    pub fn scroll(&mut self) {
        self.pos.x -= self.speed;
    }

    /// True once the obstacle has fully left the visible area
    pub fn off_screen(&self) -> bool {
        self.pos.x + self.size.x <= 0.0
    }
}

/// Power-up effect categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Despawns every live obstacle
    ClearCookies,
    /// Grants a damage-immunity window
    Incognito,
    /// Suppresses obstacle spawns for a window
    MuteNotifications,
}

impl PowerUpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::ClearCookies => "clear-cookies",
            PowerUpKind::Incognito => "incognito",
            PowerUpKind::MuteNotifications => "mute-notifications",
        }
    }
}

/// A scrolling collectible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub collected: bool,
}

impl PowerUp {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn scroll(&mut self) {
        self.pos.x -= self.speed;
    }

    pub fn off_screen(&self) -> bool {
        self.pos.x + self.size.x <= 0.0
    }
}

/// Entity category tag as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Obstacle(ObstacleKind),
    PowerUp(PowerUpKind),
    PipeTop,
    PipeBottom,
}

/// One entity in a render snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub size: Vec2,
}

impl EntityView {
    pub fn of_obstacle(o: &Obstacle) -> Self {
        Self {
            id: o.id,
            kind: EntityKind::Obstacle(o.kind),
            pos: o.pos,
            size: o.size,
        }
    }

    pub fn of_power_up(p: &PowerUp) -> Self {
        Self {
            id: p.id,
            kind: EntityKind::PowerUp(p.kind),
            pos: p.pos,
            size: p.size,
        }
    }
}

/// The player in a render snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
    pub lives: u32,
    pub invulnerable: bool,
}

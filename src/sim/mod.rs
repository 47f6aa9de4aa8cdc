//! Deterministic challenge-loop engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Step order within one tick is fixed: physics, then collision, then spawn,
//! then scoring. Spawning after collision means an entity spawned at the far
//! boundary is never collision-eligible on its spawn tick.

pub mod collision;
pub mod entity;
pub mod physics;
pub mod rng;
pub mod session;
pub mod spawn;

pub use collision::{Aabb, aabb_overlap};
pub use entity::{
    EntityKind, EntityView, Obstacle, ObstacleKind, Player, PlayerView, PowerUp, PowerUpKind,
};
pub use rng::RngState;
pub use session::{Challenge, Outcome, Phase, Session, Snapshot, Stats};
pub use spawn::SpawnGate;

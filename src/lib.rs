//! Signup Gauntlet - the mini-game challenge core of a satirical signup flow
//!
//! Core modules:
//! - `sim`: Deterministic challenge-loop engine (entities, physics, collisions, sessions)
//! - `games`: The concrete mini-game challenges
//! - `clock`: Fixed-timestep tick source and feedback countdowns
//! - `tuning`: Data-driven game balance
//! - `scoreboard`: In-memory best-results ledger
//!
//! The crate is headless: input commands go in, serializable snapshots come
//! out. Rendering, staging, and audio are the embedder's problem.

pub mod clock;
pub mod games;
pub mod scoreboard;
pub mod sim;
pub mod tuning;

pub use clock::{Countdown, TickClock};
pub use scoreboard::Scoreboard;
pub use sim::{Challenge, Outcome, Phase, Session, Snapshot, Stats};

/// Engine configuration constants
pub mod consts {
    /// Authoritative tick rate (ticks per second)
    pub const TICK_HZ: u32 = 60;
    /// Fixed tick period in milliseconds
    pub const TICK_MS: u32 = 16;
    /// Fixed tick period in seconds (for wall-clock accumulation)
    pub const TICK_DT: f32 = TICK_MS as f32 / 1000.0;
    /// Maximum substeps per clock advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Ticks needed to cover `ms` milliseconds (rounded down, min 1)
#[inline]
pub fn ticks_for_ms(ms: u32) -> u32 {
    (ms / consts::TICK_MS).max(1)
}

/// Milliseconds covered by `ticks` ticks
#[inline]
pub fn ms_for_ticks(ticks: u32) -> f32 {
    ticks as f32 * consts::TICK_MS as f32
}

//! Data-driven game balance
//!
//! One tunable struct per challenge; defaults reproduce the original
//! experience. An embedder can rebalance from JSON without recompiling; the
//! core itself never touches a file.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Runner ("escape the terms & conditions") balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerTuning {
    /// Visible area (px)
    pub arena: Vec2,
    pub player_size: f32,
    /// Fixed horizontal player position
    pub player_x: f32,
    /// Ground strip height at the bottom of the arena
    pub ground_margin: f32,
    /// px/tick² downward
    pub gravity: f32,
    /// px/tick upward (negative)
    pub jump_impulse: f32,
    /// Leftward scroll speed for everything spawned
    pub scroll_speed: f32,
    /// Per-tick obstacle spawn probability
    pub obstacle_chance: f32,
    /// Per-tick power-up spawn probability
    pub power_up_chance: f32,
    pub lives: u32,
    /// Score threshold for the Won transition (score strictly greater)
    pub win_score: u64,
    /// Damage-immunity window granted by incognito mode
    pub incognito_ticks: u32,
    /// Obstacle-spawn suppression window granted by muting notifications
    pub mute_ticks: u32,
}

impl Default for RunnerTuning {
    fn default() -> Self {
        Self {
            arena: Vec2::new(800.0, 400.0),
            player_size: 30.0,
            player_x: 100.0,
            ground_margin: 50.0,
            gravity: 0.8,
            jump_impulse: -15.0,
            scroll_speed: 3.0,
            obstacle_chance: 0.02,
            power_up_chance: 0.005,
            lives: 3,
            win_score: 3000,
            incognito_ticks: 180,
            mute_ticks: 120,
        }
    }
}

impl RunnerTuning {
    /// Highest y the player's top edge can rest at (the ground line)
    pub fn floor_y(&self) -> f32 {
        self.arena.y - self.player_size - self.ground_margin
    }
}

/// Flappy ("flappy bird challenge") balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlappyTuning {
    pub arena: Vec2,
    pub bird_size: f32,
    pub bird_x: f32,
    pub bird_start_y: f32,
    pub gravity: f32,
    pub flap_impulse: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub scroll_speed: f32,
    /// A new pipe spawns once the newest has scrolled left of this x
    pub spawn_behind_x: f32,
    /// Gap top edge range [min, max)
    pub gap_top_min: f32,
    pub gap_top_max: f32,
    /// Pipes cleared for the Won transition
    pub win_score: u64,
}

impl Default for FlappyTuning {
    fn default() -> Self {
        Self {
            arena: Vec2::new(600.0, 600.0),
            bird_size: 30.0,
            bird_x: 100.0,
            bird_start_y: 300.0,
            gravity: 0.6,
            flap_impulse: -12.0,
            pipe_width: 60.0,
            pipe_gap: 150.0,
            scroll_speed: 3.0,
            spawn_behind_x: 400.0,
            gap_top_min: 100.0,
            gap_top_max: 300.0,
            win_score: 3,
        }
    }
}

impl FlappyTuning {
    /// Lowest y the bird may reach before the run ends
    pub fn kill_floor(&self) -> f32 {
        self.arena.y - self.bird_size
    }
}

/// Dodger ("terms escape") balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DodgerTuning {
    pub arena: Vec2,
    pub player_size: Vec2,
    pub player_start: Vec2,
    /// Discrete vertical step per move command
    pub step_y: f32,
    /// Discrete horizontal step per move command
    pub step_x: f32,
    /// Inclusive movement bounds for the player's top-left corner
    pub bound_max: Vec2,
    /// Ticks between obstacle spawns
    pub spawn_interval: u32,
    pub lives: u32,
    /// Ticks to survive for the Won transition
    pub survive_ticks: u32,
}

impl Default for DodgerTuning {
    fn default() -> Self {
        Self {
            arena: Vec2::new(600.0, 400.0),
            player_size: Vec2::new(20.0, 30.0),
            player_start: Vec2::new(50.0, 300.0),
            step_y: 20.0,
            step_x: 15.0,
            bound_max: Vec2::new(580.0, 370.0),
            spawn_interval: 50,
            lives: 3,
            survive_ticks: 625,
        }
    }
}

/// Memory match balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryTuning {
    pub pairs: u32,
    /// Reveal window before a matched pair locks in
    pub match_reveal_ticks: u32,
    /// Reveal window before a mismatched pair flips back
    pub mismatch_reveal_ticks: u32,
}

impl Default for MemoryTuning {
    fn default() -> Self {
        Self {
            pairs: 6,
            match_reveal_ticks: 31,
            mismatch_reveal_ticks: 62,
        }
    }
}

/// Reaction ("lightning reflexes") balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionTuning {
    pub rounds: u32,
    /// Qualifying average reaction across all rounds
    pub max_avg_ms: f32,
    /// Armed-delay range [min, max) before the go signal
    pub min_delay_ms: u32,
    pub max_delay_ms: u32,
}

impl Default for ReactionTuning {
    fn default() -> Self {
        Self {
            rounds: 3,
            max_avg_ms: 500.0,
            min_delay_ms: 1000,
            max_delay_ms: 5000,
        }
    }
}

/// Sliding puzzle balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleTuning {
    /// Grid side length (4 = the classic 15-puzzle)
    pub side: usize,
    /// Random valid hole-moves applied when shuffling
    pub shuffle_moves: u32,
}

impl Default for PuzzleTuning {
    fn default() -> Self {
        Self {
            side: 4,
            shuffle_moves: 1000,
        }
    }
}

/// Typing challenge balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingTuning {
    pub target_wpm: f32,
    pub target_accuracy: f32,
    /// Pause between completed sentences
    pub advance_ticks: u32,
}

impl Default for TypingTuning {
    fn default() -> Self {
        Self {
            target_wpm: 40.0,
            target_accuracy: 90.0,
            advance_ticks: 62,
        }
    }
}

/// Logo quiz balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoTuning {
    /// Pause after a correct guess before the next logo
    pub advance_ticks: u32,
}

impl Default for LogoTuning {
    fn default() -> Self {
        Self { advance_ticks: 94 }
    }
}

/// Every challenge's balance in one embedder-facing bundle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub runner: RunnerTuning,
    pub flappy: FlappyTuning,
    pub dodger: DodgerTuning,
    pub memory: MemoryTuning,
    pub reaction: ReactionTuning,
    pub puzzle: PuzzleTuning,
    pub typing: TypingTuning,
    pub logo: LogoTuning,
}

impl Tuning {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back.runner.win_score, tuning.runner.win_score);
        assert_eq!(back.flappy.pipe_gap, tuning.flappy.pipe_gap);
        assert_eq!(back.dodger.survive_ticks, tuning.dodger.survive_ticks);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let tuning = Tuning::from_json(r#"{"runner": {"lives": 5, "arena": [800.0, 400.0],
            "player_size": 30.0, "player_x": 100.0, "ground_margin": 50.0, "gravity": 0.8,
            "jump_impulse": -15.0, "scroll_speed": 3.0, "obstacle_chance": 0.02,
            "power_up_chance": 0.005, "win_score": 3000, "incognito_ticks": 180,
            "mute_ticks": 120}}"#)
            .unwrap();
        assert_eq!(tuning.runner.lives, 5);
        assert_eq!(tuning.flappy.win_score, FlappyTuning::default().win_score);
    }

    #[test]
    fn runner_floor_matches_arena() {
        let t = RunnerTuning::default();
        assert_eq!(t.floor_y(), 320.0);
    }
}

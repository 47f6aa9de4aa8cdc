//! Side-scrolling runner: jump over the fine print
//!
//! The player sprints past an endless wall of consent checkboxes, terms
//! walls, cookie popups, and captchas. Surviving long enough wins; running
//! out of lives loses.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::sim::entity::{EntityView, Obstacle, Player, PlayerView, PowerUp, PowerUpKind};
use crate::sim::session::{Challenge, Outcome, Stats};
use crate::sim::{physics, spawn};
use crate::tuning::RunnerTuning;

/// Per-tick input commands
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerInput {
    /// Jump/act signal (key or pointer); ignored while airborne
    pub jump: bool,
}

/// Render payload for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct RunnerView {
    pub player: PlayerView,
    pub entities: Vec<EntityView>,
}

pub struct Runner {
    tuning: RunnerTuning,
    player: Player,
    obstacles: Vec<Obstacle>,
    power_ups: Vec<PowerUp>,
    /// Remaining obstacle-spawn suppression window
    mute_ticks: u32,
    next_id: u32,
}

impl Runner {
    pub fn new(tuning: RunnerTuning) -> Self {
        let player = Player::new(
            Vec2::new(tuning.player_x, tuning.floor_y()),
            Vec2::splat(tuning.player_size),
            tuning.lives,
        );
        Self {
            tuning,
            player,
            obstacles: Vec::new(),
            power_ups: Vec::new(),
            mute_ticks: 0,
            next_id: 1,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Apply a collected power-up's effect
    fn apply_power_up(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::ClearCookies => self.obstacles.clear(),
            PowerUpKind::Incognito => {
                self.player.invulnerable_ticks = self.tuning.incognito_ticks;
            }
            PowerUpKind::MuteNotifications => self.mute_ticks = self.tuning.mute_ticks,
        }
    }
}

impl Challenge for Runner {
    type Input = RunnerInput;
    type View = RunnerView;

    fn step(&mut self, input: &RunnerInput, rng: &mut Pcg32) {
        let floor = self.tuning.floor_y();

        // Physics
        if input.jump {
            physics::try_jump(&mut self.player, self.tuning.jump_impulse, floor);
        }
        physics::step_gravity(&mut self.player, self.tuning.gravity);
        physics::clamp_to_floor(&mut self.player, floor);
        for o in &mut self.obstacles {
            o.scroll();
        }
        for p in &mut self.power_ups {
            p.scroll();
        }
        self.obstacles.retain(|o| !o.off_screen());
        self.power_ups.retain(|p| !p.off_screen());

        // Collision: the first overlapping obstacle is consumed for one life
        let player_box = self.player.aabb();
        if !self.player.invulnerable() {
            if let Some(idx) = self
                .obstacles
                .iter()
                .position(|o| player_box.overlaps(&o.aabb()))
            {
                self.obstacles.remove(idx);
                self.player.lives = self.player.lives.saturating_sub(1);
            }
        }

        // Power-up collection applies even while invulnerable
        let mut collected: Vec<PowerUpKind> = Vec::new();
        self.power_ups.retain_mut(|p| {
            if player_box.overlaps(&p.aabb()) {
                p.collected = true;
                collected.push(p.kind);
                false
            } else {
                true
            }
        });
        for kind in collected {
            self.apply_power_up(kind);
        }
        self.player.decay_invulnerability();
        self.mute_ticks = self.mute_ticks.saturating_sub(1);

        // Spawn after collision: a fresh far-edge entity is not hit this tick
        if self.mute_ticks == 0 && spawn::chance(rng, self.tuning.obstacle_chance) {
            let id = self.next_entity_id();
            self.obstacles.push(spawn::runner_obstacle(id, rng, &self.tuning));
        }
        if spawn::chance(rng, self.tuning.power_up_chance) {
            let id = self.next_entity_id();
            self.power_ups.push(spawn::runner_power_up(id, rng, &self.tuning));
        }

        // Score: one point per surviving tick
        self.player.score += 1;
    }

    fn evaluate(&self) -> Option<Outcome> {
        if self.player.lives == 0 {
            Some(Outcome::Lost)
        } else if self.player.score > self.tuning.win_score {
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

    fn view(&self) -> RunnerView {
        let mut entities: Vec<EntityView> =
            self.obstacles.iter().map(EntityView::of_obstacle).collect();
        entities.extend(self.power_ups.iter().map(EntityView::of_power_up));
        RunnerView {
            player: self.player.view(),
            entities,
        }
    }

    fn reset(&mut self, _rng: &mut Pcg32) {
        *self = Runner::new(self.tuning.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::ObstacleKind;
    use crate::sim::rng::RngState;
    use crate::sim::session::{Phase, Session};

    fn rng() -> Pcg32 {
        RngState::new(1).to_rng()
    }

    /// An obstacle sitting on top of the player
    fn overlapping_obstacle(runner: &Runner, id: u32) -> Obstacle {
        Obstacle {
            id,
            kind: ObstacleKind::Checkbox,
            pos: runner.player.pos,
            size: Vec2::new(40.0, 40.0),
            speed: 3.0,
        }
    }

    /// Tuning with spawning disabled, for hand-built scenarios
    fn quiet_tuning() -> RunnerTuning {
        RunnerTuning {
            obstacle_chance: 0.0,
            power_up_chance: 0.0,
            ..RunnerTuning::default()
        }
    }

    #[test]
    fn three_collisions_lose_and_score_freezes() {
        let mut runner = Runner::new(quiet_tuning());
        for id in 0..3 {
            let o = overlapping_obstacle(&runner, 100 + id);
            runner.obstacles.push(o);
        }
        let mut session = Session::new(1, runner);
        session.start();

        let input = RunnerInput::default();
        // One obstacle consumed per tick, one life each
        session.tick(&input);
        assert_eq!(session.challenge().player().lives, 2);
        session.tick(&input);
        assert_eq!(session.challenge().player().lives, 1);
        session.tick(&input);
        assert_eq!(session.challenge().player().lives, 0);
        assert_eq!(session.phase(), Phase::Terminal(Outcome::Lost));

        let frozen = session.snapshot().stats.score;
        for _ in 0..10 {
            session.tick(&input);
        }
        assert_eq!(session.snapshot().stats.score, frozen);
    }

    #[test]
    fn consumed_obstacle_is_removed_exactly_once() {
        let mut runner = Runner::new(quiet_tuning());
        let o = overlapping_obstacle(&runner, 7);
        runner.obstacles.push(o);
        runner.step(&RunnerInput::default(), &mut rng());
        assert_eq!(runner.player.lives, 2);
        assert!(runner.obstacles.is_empty());
        // Nothing left to hit: lives stay put
        runner.step(&RunnerInput::default(), &mut rng());
        assert_eq!(runner.player.lives, 2);
    }

    #[test]
    fn incognito_ignores_damage_but_still_collects() {
        let mut runner = Runner::new(quiet_tuning());
        runner.player.invulnerable_ticks = 60;
        let o = overlapping_obstacle(&runner, 1);
        runner.obstacles.push(o);
        runner.power_ups.push(PowerUp {
            id: 2,
            kind: PowerUpKind::MuteNotifications,
            pos: runner.player.pos,
            size: Vec2::splat(30.0),
            speed: 3.0,
            collected: false,
        });
        runner.step(&RunnerInput::default(), &mut rng());
        assert_eq!(runner.player.lives, 3);
        assert!(runner.power_ups.is_empty());
        // Granted this tick, already decayed once
        assert_eq!(runner.mute_ticks, RunnerTuning::default().mute_ticks - 1);
    }

    #[test]
    fn clear_cookies_despawns_all_obstacles() {
        let mut runner = Runner::new(quiet_tuning());
        // Obstacles away from the player so nothing is consumed by damage
        for id in 0..4 {
            runner.obstacles.push(Obstacle {
                id,
                kind: ObstacleKind::Popup,
                pos: Vec2::new(500.0 + id as f32 * 60.0, 100.0),
                size: Vec2::new(80.0, 60.0),
                speed: 3.0,
            });
        }
        runner.power_ups.push(PowerUp {
            id: 9,
            kind: PowerUpKind::ClearCookies,
            pos: runner.player.pos,
            size: Vec2::splat(30.0),
            speed: 3.0,
            collected: false,
        });
        runner.step(&RunnerInput::default(), &mut rng());
        assert!(runner.obstacles.is_empty());
    }

    #[test]
    fn survives_to_win_threshold() {
        let tuning = RunnerTuning {
            win_score: 50,
            ..quiet_tuning()
        };
        let mut session = Session::new(3, Runner::new(tuning));
        session.start();
        let input = RunnerInput::default();
        for _ in 0..51 {
            session.tick(&input);
        }
        assert_eq!(session.phase(), Phase::Terminal(Outcome::Won));
        assert_eq!(session.snapshot().stats.score, 51);
    }

    #[test]
    fn full_run_with_default_tuning_stays_in_bounds() {
        let mut runner = Runner::new(RunnerTuning::default());
        let mut rng = RngState::new(1234).to_rng();
        let jump = RunnerInput { jump: true };
        let coast = RunnerInput::default();
        let floor = RunnerTuning::default().floor_y();
        for tick in 0..2000u32 {
            let input = if tick % 37 == 0 { &jump } else { &coast };
            runner.step(input, &mut rng);
            assert!(runner.player.pos.y <= floor);
            for o in &runner.obstacles {
                assert!(!o.off_screen());
            }
        }
        // The spawner was exercised
        assert!(runner.next_id > 1);
    }
}

//! Headless demo: auto-play the runner and print snapshots
//!
//! Runs a seeded runner session with a trivial auto-jump policy, emitting
//! snapshot JSON every second of game time. Useful for eyeballing the
//! core loop without any presentation layer.

use signup_gauntlet::consts::{TICK_DT, TICK_HZ};
use signup_gauntlet::games::runner::{Runner, RunnerInput};
use signup_gauntlet::sim::Session;
use signup_gauntlet::tuning::RunnerTuning;
use signup_gauntlet::{Scoreboard, TickClock};

/// Jump when the nearest obstacle is closing in at player height
fn auto_jump(runner: &Runner) -> bool {
    let player = runner.player();
    runner.obstacles().iter().any(|o| {
        let ahead = o.pos.x - (player.pos.x + player.size.x);
        let low = o.pos.y + o.size.y > player.pos.y;
        (0.0..90.0).contains(&ahead) && low
    })
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let mut session = Session::new(seed, Runner::new(RunnerTuning::default()));
    session.on_complete(Box::new(|stats| {
        log::info!("challenge complete: score {}", stats.score);
    }));
    session.start();

    let mut clock = TickClock::new();
    let mut input = RunnerInput::default();
    while session.phase().is_running() {
        // One simulated frame per tick period
        let steps = clock.advance(TICK_DT);
        for _ in 0..steps {
            input.jump = auto_jump(session.challenge());
            session.tick(&input);

            if session.ticks() % TICK_HZ as u64 == 0 {
                let json = serde_json::to_string(&session.snapshot())
                    .expect("snapshot serializes");
                println!("{json}");
            }
        }
    }
    // Session over: tear down its tick source
    clock.cancel();

    let stats = session.snapshot().stats;
    let mut board = Scoreboard::new();
    let rank = board.record(stats.score, session.ticks());
    println!(
        "seed {seed}: {:?} after {} ticks (score {}, lives {}, rank {:?})",
        session.phase().outcome().expect("session ended"),
        session.ticks(),
        stats.score,
        stats.lives,
        rank,
    );
}

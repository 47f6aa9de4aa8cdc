//! Per-tick vertical physics for the arcade challenges
//!
//! Units are pixels and pixels/tick; the fixed timestep is implicit. Gravity
//! is positive (y grows downward), jump impulses are negative.

use super::entity::Player;

/// Integrate gravity for one tick: velocity then position
pub fn step_gravity(player: &mut Player, gravity: f32) {
    player.vel.y += gravity;
    player.pos.y += player.vel.y;
}

/// Clamp the player to the floor line, zeroing velocity on contact
pub fn clamp_to_floor(player: &mut Player, floor_y: f32) {
    if player.pos.y >= floor_y {
        player.pos.y = floor_y;
        player.vel.y = 0.0;
    }
}

/// True when the player is resting on the floor line
pub fn grounded(player: &Player, floor_y: f32) -> bool {
    player.pos.y >= floor_y && player.vel.y == 0.0
}

/// Apply a jump impulse if grounded; airborne jumps are silent no-ops.
/// Returns whether the jump was taken.
pub fn try_jump(player: &mut Player, impulse: f32, floor_y: f32) -> bool {
    if !grounded(player, floor_y) {
        return false;
    }
    player.vel.y = impulse;
    true
}

/// Apply a flap impulse unconditionally (flappy-style, no ground)
pub fn flap(player: &mut Player, impulse: f32) {
    player.vel.y = impulse;
}

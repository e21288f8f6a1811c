//! Player physics - walking, gravity, ground contact, and footsteps.

use nightfall_logic::locomotion::{self, LocomotionParams, MoveFlags};

use crate::components::PlayerBody;
use crate::events::{CueKind, EventQueue};

/// Advance the player's body one tick. Does nothing unless the pointer is
/// locked.
pub fn physics_system(
    body: &mut PlayerBody,
    flags: &MoveFlags,
    locked: bool,
    delta: f32,
    wall_time: f64,
    params: &LocomotionParams,
    events: &mut EventQueue,
) {
    if !locked {
        return;
    }

    let planar = body.planar_velocity().accelerate(flags, delta, params);

    // One step cue per stride trough, not one per frame spent in it
    let trough = flags.any() && locomotion::stride_trough(wall_time);
    if trough && !body.stride_low {
        events.cue(CueKind::Step);
    }
    body.stride_low = trough;

    let forward = body.ground_forward();
    let right = body.ground_right();
    body.position += forward * (planar.forward * delta) + right * (planar.strafe * delta);

    let step = locomotion::fall(body.position.y, body.velocity.y, body.grounded, delta, params);
    body.position.y = step.y;
    body.velocity.y = step.vy;
    body.grounded = step.grounded;

    body.set_planar_velocity(planar.damp(delta, params));
}

/// Jump if standing on the ground right now. Checked when the key is
/// pressed, not when the next tick runs.
pub fn request_jump(body: &mut PlayerBody, params: &LocomotionParams) -> bool {
    match locomotion::jump_launch(body.grounded, params) {
        Some(speed) => {
            body.velocity.y = speed;
            body.grounded = false;
            true
        }
        None => false,
    }
}

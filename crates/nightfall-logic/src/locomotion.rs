//! Pure locomotion math - input intent, acceleration, damping, gravity.
//!
//! Horizontal velocity lives in the player's view frame: `strafe` along the
//! camera's right vector, `forward` along its horizontal facing. Vertical
//! motion is a plain gravity integration against a flat ground plane at eye
//! height.

use serde::{Deserialize, Serialize};

use crate::constants::player::{
    ACCELERATION, DAMPING, EYE_HEIGHT, GRAVITY, JUMP_SPEED, STRIDE_FREQUENCY, STRIDE_TROUGH,
};

/// Directional keys held this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveFlags {
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Unit-length `(strafe, forward)` intent, or zero when keys cancel out.
    /// Normalising keeps diagonal movement from being faster.
    pub fn intent(&self) -> (f32, f32) {
        let forward = f32::from(u8::from(self.forward)) - f32::from(u8::from(self.backward));
        let strafe = f32::from(u8::from(self.right)) - f32::from(u8::from(self.left));
        let len = (forward * forward + strafe * strafe).sqrt();
        if len > 0.0 {
            (strafe / len, forward / len)
        } else {
            (0.0, 0.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionParams {
    pub acceleration: f32,
    pub damping: f32,
    pub gravity: f32,
    pub jump_speed: f32,
    pub eye_height: f32,
}

impl Default for LocomotionParams {
    fn default() -> Self {
        Self {
            acceleration: ACCELERATION,
            damping: DAMPING,
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            eye_height: EYE_HEIGHT,
        }
    }
}

/// View-frame horizontal velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanarVelocity {
    pub strafe: f32,
    pub forward: f32,
}

impl PlanarVelocity {
    /// Push the velocity along the input intent. Does nothing without input.
    pub fn accelerate(self, flags: &MoveFlags, delta: f32, params: &LocomotionParams) -> Self {
        if !flags.any() {
            return self;
        }
        let (strafe, forward) = flags.intent();
        Self {
            strafe: self.strafe + strafe * params.acceleration * delta,
            forward: self.forward + forward * params.acceleration * delta,
        }
    }

    /// Exponential damping, applied every tick regardless of input.
    pub fn damp(self, delta: f32, params: &LocomotionParams) -> Self {
        Self {
            strafe: self.strafe - self.strafe * params.damping * delta,
            forward: self.forward - self.forward * params.damping * delta,
        }
    }
}

/// Outcome of one vertical integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalStep {
    pub y: f32,
    pub vy: f32,
    pub grounded: bool,
    /// Whether this step touched down from the air.
    pub landed: bool,
}

/// Apply gravity, integrate height, and resolve ground contact.
pub fn fall(y: f32, vy: f32, grounded: bool, delta: f32, params: &LocomotionParams) -> VerticalStep {
    let vy = vy - params.gravity * delta;
    let y = y + vy * delta;
    if y <= params.eye_height {
        VerticalStep {
            y: params.eye_height,
            vy: 0.0,
            grounded: true,
            landed: !grounded,
        }
    } else {
        VerticalStep {
            y,
            vy,
            grounded,
            landed: false,
        }
    }
}

/// Launch speed for a jump requested now, or `None` when airborne.
pub fn jump_launch(grounded: bool, params: &LocomotionParams) -> Option<f32> {
    grounded.then_some(params.jump_speed)
}

/// Whether the stride is in its footstep trough at `wall_time`.
pub fn stride_trough(wall_time: f64) -> bool {
    ((wall_time * STRIDE_FREQUENCY as f64).sin() as f32) < STRIDE_TROUGH
}

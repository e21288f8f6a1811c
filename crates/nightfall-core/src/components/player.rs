//! Player-owned state: the body that moves and the stats that keep it alive.

use nightfall_logic::daynight::hour_of_day;
use nightfall_logic::locomotion::PlanarVelocity;
use nightfall_logic::survival::Vitals;
use serde::{Deserialize, Serialize};

use super::Vec3;

/// The player's physical body. Written only by the physics system; every
/// other system reads `position` and `facing` for proximity and aiming.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Eye position.
    pub position: Vec3,
    /// `x` strafe and `z` forward in the view frame, `y` vertical in world space.
    pub velocity: Vec3,
    /// Unit camera direction; may tilt up or down.
    pub facing: Vec3,
    /// Resting on the ground; the only state that allows a jump.
    pub grounded: bool,
    /// Whether the last tick sat in a stride trough (footstep edge detection).
    pub(crate) stride_low: bool,
}

impl PlayerBody {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            facing: Vec3::FORWARD,
            grounded: true,
            stride_low: false,
        }
    }

    /// Point the camera. Zero or non-finite directions are ignored.
    pub fn look(&mut self, direction: Vec3) {
        let dir = direction.normalize();
        if dir.length() > 0.0 && dir.x.is_finite() && dir.y.is_finite() && dir.z.is_finite() {
            self.facing = dir;
        }
    }

    pub fn planar_velocity(&self) -> PlanarVelocity {
        PlanarVelocity {
            strafe: self.velocity.x,
            forward: self.velocity.z,
        }
    }

    pub fn set_planar_velocity(&mut self, v: PlanarVelocity) {
        self.velocity.x = v.strafe;
        self.velocity.z = v.forward;
    }

    /// Horizontal unit forward; falls back to the default facing when
    /// looking straight up or down.
    pub fn ground_forward(&self) -> Vec3 {
        let flat = self.facing.horizontal().normalize();
        if flat == Vec3::ZERO {
            Vec3::FORWARD
        } else {
            flat
        }
    }

    /// Horizontal unit right vector.
    pub fn ground_right(&self) -> Vec3 {
        let f = self.ground_forward();
        Vec3::new(-f.z, 0.0, f.x)
    }
}

/// Health, hunger, thirst, the clock, and the death flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurvivalState {
    pub vitals: Vitals,
    /// Unbounded; see [`SurvivalState::hour_of_day`] for the 24-unit reading.
    pub time_of_day: f32,
    /// Once set, nothing mutates this state until the world is reset.
    pub is_dead: bool,
}

impl SurvivalState {
    pub fn new(time_of_day: f32) -> Self {
        Self {
            vitals: Vitals::full(),
            time_of_day,
            is_dead: false,
        }
    }

    pub fn health(&self) -> f32 {
        self.vitals.health
    }

    pub fn hunger(&self) -> f32 {
        self.vitals.hunger
    }

    pub fn thirst(&self) -> f32 {
        self.vitals.thirst
    }

    pub fn hour_of_day(&self) -> f32 {
        hour_of_day(self.time_of_day)
    }
}

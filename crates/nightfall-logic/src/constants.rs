//! Game constants - tuning values for the survival loop.
//!
//! Plain `f32` constants grouped by subsystem. These are the defaults the
//! engine's configuration starts from; nothing here depends on the engine.

pub mod player {
    /// Eye height above the ground plane; the player rests here when grounded.
    pub const EYE_HEIGHT: f32 = 1.6;
    /// Horizontal acceleration applied along the input intent (units/s²).
    pub const ACCELERATION: f32 = 400.0;
    /// Exponential damping rate applied to horizontal velocity every tick.
    pub const DAMPING: f32 = 10.0;
    /// Downward acceleration (units/s²).
    pub const GRAVITY: f32 = 20.0;
    /// Vertical launch speed of a jump (units/s).
    pub const JUMP_SPEED: f32 = 8.0;
    /// Angular frequency of the stride; a step cue fires in each trough.
    pub const STRIDE_FREQUENCY: f32 = 15.0;
    /// Stride phase below which a footstep is audible.
    pub const STRIDE_TROUGH: f32 = -0.9;
}

pub mod survival {
    pub const STAT_MAX: f32 = 100.0;
    pub const STAT_MIN: f32 = 0.0;
    /// Hunger lost per time-unit.
    pub const HUNGER_DECAY: f32 = 0.5;
    /// Thirst lost per time-unit.
    pub const THIRST_DECAY: f32 = 0.8;
    /// Hunger restored by a can of beans.
    pub const BEANS_NOURISHMENT: f32 = 30.0;
}

pub mod cycle {
    /// Time-of-day at world start.
    pub const START_TIME: f32 = 12.0;
    /// Time-of-day advanced per elapsed time-unit.
    pub const RATE: f32 = 0.1;
    /// Angular rate mapping time-of-day onto the sun's arc.
    pub const ANGULAR_RATE: f32 = 0.5;
    /// Peak sun elevation.
    pub const SUN_AMPLITUDE: f32 = 100.0;
    /// Length of a conceptual day in cycle-units.
    pub const DAY_LENGTH: f32 = 24.0;
    /// Base intensity of the flickering threat fire-light at night.
    pub const FIRE_LIGHT_BASE: f32 = 2.0;
    pub const FIRE_LIGHT_FLICKER: f32 = 0.5;
    pub const FIRE_LIGHT_FREQUENCY: f32 = 10.0;
}

pub mod threat {
    /// Ring radius the threat spawns on around the player.
    pub const SPAWN_RADIUS: f32 = 30.0;
    /// Spawn height of the threat's centre.
    pub const SPAWN_HEIGHT: f32 = 1.5;
    /// Beyond this distance the threat snaps back onto the spawn ring.
    pub const LEASH_RADIUS: f32 = 60.0;
    /// Ring the threat is teleported onto when the leash fires.
    pub const LEASH_RETURN_RADIUS: f32 = 30.0;
    pub const ATTACK_RANGE: f32 = 2.0;
    /// Advance speed along the facing axis (units/s).
    pub const SPEED: f32 = 3.5;
    /// Health lost per time-unit while in attack range.
    pub const DAMAGE_PER_SECOND: f32 = 20.0;
    /// Fraction of the separation vector pushed onto the player per tick.
    pub const KNOCKBACK: f32 = 0.1;
    /// Range within which footfall cues can be heard.
    pub const AUDIBLE_RANGE: f32 = 15.0;
    /// Per-tick chance of a footfall cue while audible.
    pub const CUE_CHANCE: f32 = 0.05;
    /// Health deficit that maps to a fully opaque damage vignette.
    pub const VIGNETTE_SPAN: f32 = 50.0;
}

pub mod building {
    /// Distance ahead of the camera the preview is projected.
    pub const REACH: f32 = 5.0;
    pub const WALL_HEIGHT: f32 = 1.5;
    pub const CAMPFIRE_HEIGHT: f32 = 0.25;
}

pub mod fishing {
    pub const WAIT_MIN: f32 = 2.0;
    pub const WAIT_MAX: f32 = 7.0;
    pub const BITE_WINDOW: f32 = 1.5;
    /// Distance ahead of the camera the marker lands.
    pub const CAST_DISTANCE: f32 = 8.0;
    /// Marker height while waiting (water surface).
    pub const SURFACE_HEIGHT: f32 = -0.4;
    /// Marker height while a fish is biting.
    pub const BITE_HEIGHT: f32 = -1.0;
}

pub mod quest {
    pub const PICKUP_RADIUS: f32 = 2.0;
    pub const SIGNAL_VERY_CLOSE: f32 = 10.0;
    pub const SIGNAL_CLOSE: f32 = 30.0;
    pub const SIGNAL_WEAK: f32 = 60.0;
}

pub mod interact {
    /// Raycast range of a tool swing.
    pub const HARVEST_RANGE: f32 = 3.0;
    /// Raycast range of the examine action.
    pub const EXAMINE_RANGE: f32 = 4.0;
    /// Duration of the tool recoil pose.
    pub const RECOIL_DURATION: f32 = 0.15;
    /// Lifetime of a transient HUD message.
    pub const MESSAGE_DURATION: f32 = 2.0;
}

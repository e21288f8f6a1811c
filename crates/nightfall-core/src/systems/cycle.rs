//! Day-night cycle system - advances the clock and re-derives lighting.

use nightfall_logic::daynight::{self, CycleParams, Lighting};

use crate::components::SurvivalState;

/// Advance time-of-day and return this tick's lighting.
pub fn cycle_system(
    survival: &mut SurvivalState,
    delta: f32,
    wall_time: f64,
    params: &CycleParams,
) -> Lighting {
    survival.time_of_day = daynight::advance(survival.time_of_day, delta, params);
    Lighting::at(survival.time_of_day, wall_time, params)
}

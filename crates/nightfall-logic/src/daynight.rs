//! Day–night cycle - sun elevation and the lighting derived from it.
//!
//! Lighting is never stored authoritatively: it is recomputed every tick as
//! a pure function of the time-of-day (plus wall time for the fire flicker).

use serde::{Deserialize, Serialize};

use crate::constants::cycle::{
    ANGULAR_RATE, DAY_LENGTH, FIRE_LIGHT_BASE, FIRE_LIGHT_FLICKER, FIRE_LIGHT_FREQUENCY, RATE,
    SUN_AMPLITUDE,
};

/// Shape of the sun's arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleParams {
    /// Time-of-day advanced per elapsed time-unit.
    pub rate: f32,
    pub angular_rate: f32,
    pub amplitude: f32,
}

impl Default for CycleParams {
    fn default() -> Self {
        Self {
            rate: RATE,
            angular_rate: ANGULAR_RATE,
            amplitude: SUN_AMPLITUDE,
        }
    }
}

/// Fog tint: pitch black at night, dim grey by day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FogTone {
    Night,
    Day,
}

impl FogTone {
    /// Packed RGB colour of the tone.
    pub fn rgb(self) -> u32 {
        match self {
            Self::Night => 0x000000,
            Self::Day => 0x111111,
        }
    }
}

/// Derived lighting for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    pub sun_elevation: f32,
    /// Directional (sun) light intensity.
    pub sun_intensity: f32,
    pub fog: FogTone,
    /// Intensity of the flickering fire-light that marks the threat's hour.
    pub fire_light_intensity: f32,
}

impl Lighting {
    /// Compute the lighting for a time-of-day and wall time.
    pub fn at(time_of_day: f32, wall_time: f64, params: &CycleParams) -> Self {
        let sun_elevation = sun_elevation(time_of_day, params);
        if sun_elevation < 0.0 {
            let flicker = (wall_time * FIRE_LIGHT_FREQUENCY as f64).sin() as f32;
            Self {
                sun_elevation,
                sun_intensity: 0.0,
                fog: FogTone::Night,
                fire_light_intensity: FIRE_LIGHT_BASE + flicker * FIRE_LIGHT_FLICKER,
            }
        } else {
            Self {
                sun_elevation,
                sun_intensity: 1.0,
                fog: FogTone::Day,
                fire_light_intensity: 0.0,
            }
        }
    }

    pub fn is_night(&self) -> bool {
        self.sun_elevation < 0.0
    }
}

/// Advance the time-of-day by `delta` time-units.
pub fn advance(time_of_day: f32, delta: f32, params: &CycleParams) -> f32 {
    time_of_day + delta.max(0.0) * params.rate
}

pub fn sun_elevation(time_of_day: f32, params: &CycleParams) -> f32 {
    (time_of_day * params.angular_rate).sin() * params.amplitude
}

pub fn is_night(time_of_day: f32, params: &CycleParams) -> bool {
    sun_elevation(time_of_day, params) < 0.0
}

/// Conceptual 24-unit clock reading of an unbounded time-of-day.
pub fn hour_of_day(time_of_day: f32) -> f32 {
    time_of_day.rem_euclid(DAY_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_game_is_night() {
        // sin(12 * 0.5) = sin(6) < 0
        let params = CycleParams::default();
        assert!(is_night(12.0, &params));
    }

    #[test]
    fn test_noon_is_day() {
        let params = CycleParams::default();
        // sin(pi/2) peak
        let t = std::f32::consts::PI;
        assert!(!is_night(t, &params));
        assert!((sun_elevation(t, &params) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_lighting_night() {
        let params = CycleParams::default();
        let light = Lighting::at(12.0, 0.0, &params);
        assert!(light.is_night());
        assert_eq!(light.sun_intensity, 0.0);
        assert_eq!(light.fog, FogTone::Night);
        assert!((light.fire_light_intensity - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_lighting_fire_flicker_bounds() {
        let params = CycleParams::default();
        for i in 0..100 {
            let light = Lighting::at(12.0, i as f64 * 0.037, &params);
            assert!((1.5..=2.5).contains(&light.fire_light_intensity));
        }
    }

    #[test]
    fn test_lighting_day() {
        let params = CycleParams::default();
        let light = Lighting::at(2.0, 3.0, &params);
        assert!(!light.is_night());
        assert_eq!(light.sun_intensity, 1.0);
        assert_eq!(light.fog, FogTone::Day);
        assert_eq!(light.fire_light_intensity, 0.0);
        assert_eq!(light.fog.rgb(), 0x111111);
    }

    #[test]
    fn test_advance() {
        let params = CycleParams::default();
        assert!((advance(12.0, 10.0, &params) - 13.0).abs() < 1e-5);
        assert_eq!(advance(12.0, -1.0, &params), 12.0);
    }

    #[test]
    fn test_hour_of_day_wraps() {
        assert!((hour_of_day(25.5) - 1.5).abs() < 1e-5);
        assert!((hour_of_day(12.0) - 12.0).abs() < 1e-5);
    }
}

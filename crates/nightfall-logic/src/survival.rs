//! Pure survival rules - decay, clamping, and death determination.
//!
//! Health, hunger and thirst are all "fullness" scalars in [0, 100]:
//! 100 is fine, 0 is fatal. Hunger and thirst drain on their own; health
//! only drops through damage and never regenerates.

use serde::{Deserialize, Serialize};

use crate::constants::survival::{
    HUNGER_DECAY, STAT_MAX, STAT_MIN, THIRST_DECAY,
};

/// Clamp a survival stat into its legal range.
pub fn clamp_stat(value: f32) -> f32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

/// Per-time-unit drain of the passive stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayRates {
    pub hunger: f32,
    pub thirst: f32,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            hunger: HUNGER_DECAY,
            thirst: THIRST_DECAY,
        }
    }
}

/// The three bounded survival scalars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub health: f32,
    pub hunger: f32,
    pub thirst: f32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self::full()
    }
}

impl Vitals {
    pub fn full() -> Self {
        Self {
            health: STAT_MAX,
            hunger: STAT_MAX,
            thirst: STAT_MAX,
        }
    }

    /// Drain hunger and thirst for `delta` time-units. Negative deltas are
    /// treated as zero so a clock hiccup can never refill anything.
    pub fn decay(&mut self, delta: f32, rates: &DecayRates) {
        let delta = delta.max(0.0);
        self.hunger = clamp_stat(self.hunger - rates.hunger * delta);
        self.thirst = clamp_stat(self.thirst - rates.thirst * delta);
    }

    /// Apply damage to health, clamped at zero.
    pub fn wound(&mut self, amount: f32) {
        self.health = clamp_stat(self.health - amount.max(0.0));
    }

    /// Restore hunger, capped at the maximum.
    pub fn eat(&mut self, nourishment: f32) {
        self.hunger = clamp_stat(self.hunger + nourishment.max(0.0));
    }

    pub fn quench(&mut self) {
        self.thirst = STAT_MAX;
    }

    /// Whether any stat has reached the fatal floor.
    pub fn is_fatal(&self) -> bool {
        is_dead(self.health, self.hunger, self.thirst)
    }
}

/// Death rule: any of the three stats at or below zero.
pub fn is_dead(health: f32, hunger: f32, thirst: f32) -> bool {
    health <= STAT_MIN || hunger <= STAT_MIN || thirst <= STAT_MIN
}

//! Simulation configuration.
//!
//! Every section defaults to the game's stock tuning, and every field is
//! `#[serde(default)]`, so a host can deserialize a partial document and
//! only override what it cares about. The core itself never touches files.

use nightfall_logic::constants::{building, cycle, fishing, interact, quest, threat};
use nightfall_logic::daynight::CycleParams;
use nightfall_logic::items::ItemKind;
use nightfall_logic::locomotion::LocomotionParams;
use nightfall_logic::survival::DecayRates;
use serde::{Deserialize, Serialize};

use crate::components::Vec3;
use crate::generation::WorldConfig;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seeds every random roll in the simulation.
    pub seed: u64,
    pub player: PlayerConfig,
    pub survival: SurvivalConfig,
    pub cycle: CycleParams,
    pub threat: ThreatConfig,
    pub building: BuildConfig,
    pub fishing: FishingConfig,
    pub interact: InteractConfig,
    pub world: WorldConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            player: PlayerConfig::default(),
            survival: SurvivalConfig::default(),
            cycle: CycleParams::default(),
            threat: ThreatConfig::default(),
            building: BuildConfig::default(),
            fishing: FishingConfig::default(),
            interact: InteractConfig::default(),
            world: WorldConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Eye position at spawn; `y` is snapped to the eye height.
    pub spawn: Vec3,
    pub locomotion: LocomotionParams,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: Vec3::ZERO,
            locomotion: LocomotionParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalConfig {
    pub decay: DecayRates,
    /// Time-of-day at world start.
    pub start_time: f32,
    pub starting_inventory: Vec<ItemKind>,
}

impl Default for SurvivalConfig {
    fn default() -> Self {
        Self {
            decay: DecayRates::default(),
            start_time: cycle::START_TIME,
            starting_inventory: vec![ItemKind::Beans, ItemKind::Bandage],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatConfig {
    pub spawn_radius: f32,
    pub spawn_height: f32,
    pub leash_radius: f32,
    pub leash_return_radius: f32,
    pub attack_range: f32,
    pub speed: f32,
    pub damage_per_second: f32,
    /// Fraction of the separation pushed onto the player per attacking tick.
    pub knockback: f32,
    pub audible_range: f32,
    pub cue_chance: f32,
    pub vignette_span: f32,
}

impl Default for ThreatConfig {
    fn default() -> Self {
        Self {
            spawn_radius: threat::SPAWN_RADIUS,
            spawn_height: threat::SPAWN_HEIGHT,
            leash_radius: threat::LEASH_RADIUS,
            leash_return_radius: threat::LEASH_RETURN_RADIUS,
            attack_range: threat::ATTACK_RANGE,
            speed: threat::SPEED,
            damage_per_second: threat::DAMAGE_PER_SECOND,
            knockback: threat::KNOCKBACK,
            audible_range: threat::AUDIBLE_RANGE,
            cue_chance: threat::CUE_CHANCE,
            vignette_span: threat::VIGNETTE_SPAN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Distance ahead of the camera the preview is projected.
    pub reach: f32,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            reach: building::REACH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FishingConfig {
    /// Wait before a bite is drawn from `[wait_min, wait_max)`.
    pub wait_min: f32,
    pub wait_max: f32,
    pub bite_window: f32,
    pub cast_distance: f32,
    pub surface_height: f32,
    pub bite_height: f32,
}

impl Default for FishingConfig {
    fn default() -> Self {
        Self {
            wait_min: fishing::WAIT_MIN,
            wait_max: fishing::WAIT_MAX,
            bite_window: fishing::BITE_WINDOW,
            cast_distance: fishing::CAST_DISTANCE,
            surface_height: fishing::SURFACE_HEIGHT,
            bite_height: fishing::BITE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractConfig {
    pub harvest_range: f32,
    pub examine_range: f32,
    pub pickup_radius: f32,
    pub recoil_duration: f32,
    pub message_duration: f32,
}

impl Default for InteractConfig {
    fn default() -> Self {
        Self {
            harvest_range: interact::HARVEST_RANGE,
            examine_range: interact::EXAMINE_RANGE,
            pickup_radius: quest::PICKUP_RADIUS,
            recoil_duration: interact::RECOIL_DURATION,
            message_duration: interact::MESSAGE_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let json = r#"{ "seed": 9, "threat": { "speed": 5.0 }, "survival": { "start_time": 3.0 } }"#;
        let config: SimConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.threat.speed, 5.0);
        assert_eq!(config.threat.leash_radius, 60.0);
        assert_eq!(config.survival.start_time, 3.0);
        assert_eq!(config.survival.starting_inventory.len(), 2);
        assert_eq!(config.world.quest_parts.len(), 3);
    }

    #[test]
    fn test_round_trip() {
        let config = SimConfig::default().with_seed(42);
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

//! Threat system - the night stalker.
//!
//! Absent by day, present by night. While present it faces the player on
//! the ground plane, snaps back onto a ring when it falls too far behind,
//! walks in, and once in reach drains health and shoves the player away.

use std::f32::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{PlayerBody, SurvivalState, Vec3};
use crate::config::ThreatConfig;
use crate::events::{CueKind, EventQueue, SimEvent};
use crate::hud::Hud;

/// The single live threat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threat {
    pub position: Vec3,
    /// Heading on the ground plane, radians from +z towards +x.
    pub yaw: f32,
}

/// What changed about the threat this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatTransition {
    None,
    Spawned,
    Vanished,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreatController {
    pub threat: Option<Threat>,
}

impl ThreatController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_present(&self) -> bool {
        self.threat.is_some()
    }
}

/// Point on a horizontal ring of `radius` around `centre`.
fn ring_point(centre: Vec3, radius: f32, height: f32, rng: &mut impl Rng) -> Vec3 {
    let angle = rng.gen_range(0.0..TAU);
    Vec3::new(
        centre.x + angle.cos() * radius,
        height,
        centre.z + angle.sin() * radius,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn threat_system(
    controller: &mut ThreatController,
    is_night: bool,
    body: &mut PlayerBody,
    survival: &mut SurvivalState,
    hud: &mut Hud,
    delta: f32,
    config: &ThreatConfig,
    rng: &mut impl Rng,
    events: &mut EventQueue,
) -> ThreatTransition {
    let mut transition = ThreatTransition::None;

    match (is_night, controller.threat.is_some()) {
        (true, false) => {
            let position = ring_point(body.position, config.spawn_radius, config.spawn_height, rng);
            controller.threat = Some(Threat { position, yaw: 0.0 });
            events.push(SimEvent::ThreatSpawned { position });
            log::info!("Threat spawned at ({:.1}, {:.1})", position.x, position.z);
            transition = ThreatTransition::Spawned;
        }
        (false, true) => {
            controller.threat = None;
            hud.set_vignette(0.0);
            events.push(SimEvent::ThreatVanished);
            log::info!("Threat vanished at daybreak");
            return ThreatTransition::Vanished;
        }
        _ => {}
    }

    let Some(threat) = controller.threat.as_mut() else {
        return transition;
    };

    let distance = threat.position.distance(&body.position);

    let toward = (body.position - threat.position).horizontal().normalize();
    if toward != Vec3::ZERO {
        threat.yaw = toward.yaw();
    }

    if distance > config.leash_radius {
        threat.position = ring_point(body.position, config.leash_return_radius, threat.position.y, rng);
        log::debug!("Threat leashed back to {:.0} units", config.leash_return_radius);
    } else if distance > config.attack_range {
        threat.position += Vec3::from_yaw(threat.yaw) * (config.speed * delta);
        if distance < config.audible_range && rng.gen::<f32>() < config.cue_chance {
            events.cue(CueKind::Chop);
        }
    } else {
        survival.vitals.wound(config.damage_per_second * delta);
        hud.set_vignette((100.0 - survival.health()) / config.vignette_span);
        let push = (body.position - threat.position).horizontal() * config.knockback;
        body.position += push;
    }

    transition
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Fixture {
        controller: ThreatController,
        body: PlayerBody,
        survival: SurvivalState,
        hud: Hud,
        rng: StdRng,
        events: EventQueue,
        config: ThreatConfig,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                controller: ThreatController::new(),
                body: PlayerBody::at(Vec3::new(0.0, 1.6, 0.0)),
                survival: SurvivalState::new(12.0),
                hud: Hud::new(),
                rng: StdRng::seed_from_u64(1),
                events: EventQueue::new(),
                config: ThreatConfig::default(),
            }
        }

        fn tick(&mut self, night: bool, delta: f32) -> ThreatTransition {
            threat_system(
                &mut self.controller,
                night,
                &mut self.body,
                &mut self.survival,
                &mut self.hud,
                delta,
                &self.config,
                &mut self.rng,
                &mut self.events,
            )
        }

        fn place(&mut self, position: Vec3) {
            self.controller.threat = Some(Threat { position, yaw: 0.0 });
        }
    }

    #[test]
    fn test_spawns_on_ring_at_night() {
        let mut f = Fixture::new();
        assert_eq!(f.tick(true, 0.0), ThreatTransition::Spawned);
        let t = f.controller.threat.unwrap();
        assert!((t.position.horizontal().length() - 30.0).abs() < 1e-3);
        assert_eq!(t.position.y, 1.5);
    }

    #[test]
    fn test_vanishes_at_day_and_clears_vignette() {
        let mut f = Fixture::new();
        f.tick(true, 0.0);
        f.hud.set_vignette(0.7);
        assert_eq!(f.tick(false, 0.1), ThreatTransition::Vanished);
        assert!(f.controller.threat.is_none());
        assert_eq!(f.hud.vignette, 0.0);
    }

    #[test]
    fn test_no_threat_by_day() {
        let mut f = Fixture::new();
        assert_eq!(f.tick(false, 0.1), ThreatTransition::None);
        assert!(!f.controller.is_present());
    }

    #[test]
    fn test_leash_snaps_closer() {
        let mut f = Fixture::new();
        f.place(Vec3::new(100.0, 1.5, 0.0));
        f.tick(true, 0.016);
        let t = f.controller.threat.unwrap();
        assert!(t.position.distance(&f.body.position) <= 60.0);
        assert!((t.position.horizontal().length() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_approaches_player() {
        let mut f = Fixture::new();
        f.place(Vec3::new(0.0, 1.5, 20.0));
        let before = f.controller.threat.unwrap().position.distance(&f.body.position);
        f.tick(true, 1.0);
        let t = f.controller.threat.unwrap();
        let after = t.position.distance(&f.body.position);
        assert!((before - after - 3.5).abs() < 0.05);
        assert_eq!(t.position.y, 1.5);
    }

    #[test]
    fn test_attack_wounds_and_knocks_back() {
        let mut f = Fixture::new();
        f.place(Vec3::new(1.0, 1.5, 0.0));
        f.tick(true, 0.5);
        assert!((f.survival.health() - 90.0).abs() < 1e-4);
        assert!((f.hud.vignette - 0.2).abs() < 1e-4);
        // pushed away from +x by 10% of the separation
        assert!((f.body.position.x - -0.1).abs() < 1e-5);
        assert_eq!(f.body.position.y, 1.6);
    }

    #[test]
    fn test_knockback_stacks_each_attack_tick() {
        let mut f = Fixture::new();
        f.place(Vec3::new(1.0, 1.5, 0.0));
        f.tick(true, 0.5);
        assert!((f.body.position.x - -0.1).abs() < 1e-5);
        // separation is now 1.1, so the second push is 0.11
        f.tick(true, 0.5);
        assert!((f.body.position.x - -0.21).abs() < 1e-5);
        assert!((f.survival.health() - 80.0).abs() < 1e-4);
    }

    #[test]
    fn test_footfall_cue_only_within_earshot() {
        let mut f = Fixture::new();
        f.config.cue_chance = 1.0;

        f.place(Vec3::new(0.0, 1.5, 10.0));
        f.tick(true, 0.016);
        assert_eq!(f.events.drain(), vec![SimEvent::Cue(CueKind::Chop)]);

        f.place(Vec3::new(0.0, 1.5, 20.0));
        f.tick(true, 0.016);
        assert!(f.events.drain().is_empty());
    }
}

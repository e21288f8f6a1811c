//! Simulation engine - owns the whole world and advances it one tick at a time.

use hecs::World;
use nightfall_logic::daynight::Lighting;
use nightfall_logic::items::Tool;
use nightfall_logic::locomotion::MoveFlags;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::*;
use crate::config::SimConfig;
use crate::events::{CueKind, EventQueue, SimEvent};
use crate::generation::{populate_world, IslandLayout};
use crate::hud::Hud;
use crate::inventory::Inventory;
use crate::raycast::{ColliderRaycaster, Raycaster};
use crate::systems::*;
use crate::timeline::{Deferred, Timeline};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Won,
    Dead,
}

/// Main simulation engine.
///
/// Every piece of mutable game state lives here. Systems borrow the slices
/// they need for the duration of [`update`](Self::update); player actions
/// arrive through the methods in `interaction.rs` between ticks.
pub struct SimulationEngine {
    /// ECS world holding trees, water, the wreck, radio parts and structures
    pub world: World,
    pub config: SimConfig,
    pub body: PlayerBody,
    pub survival: SurvivalState,
    pub inventory: Inventory,
    pub holding: Option<Tool>,
    /// Derived from the time-of-day on every tick
    pub lighting: Lighting,
    pub threat: ThreatController,
    pub build: BuildController,
    pub fishing: FishingController,
    pub hud: Hud,
    pub layout: IslandLayout,

    pub(crate) timeline: Timeline,
    pub(crate) events: EventQueue,
    pub(crate) rng: StdRng,
    pub(crate) raycaster: Box<dyn Raycaster>,
    pub(crate) movement: MoveFlags,
    pub(crate) locked: bool,
    pub(crate) won: bool,

    /// Accumulated simulation time; deferred effects are keyed on it
    sim_time: f64,
    wall_time: f64,
}

impl SimulationEngine {
    /// Build a fresh world from `config`.
    pub fn new(config: SimConfig) -> Self {
        Self::with_raycaster(config, Box::new(ColliderRaycaster))
    }

    /// Build a fresh world that answers ray queries through `raycaster`.
    pub fn with_raycaster(config: SimConfig, raycaster: Box<dyn Raycaster>) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut world = World::new();
        let layout = populate_world(&mut world, &config.world, &mut rng);

        let mut spawn = config.player.spawn;
        spawn.y = config.player.locomotion.eye_height;

        let survival = SurvivalState::new(config.survival.start_time);
        let lighting = Lighting::at(survival.time_of_day, 0.0, &config.cycle);

        log::info!(
            "World ready: seed {}, {} trees, {} radio parts",
            config.seed,
            layout.trees.len(),
            config.world.quest_parts.len()
        );

        Self {
            world,
            body: PlayerBody::at(spawn),
            survival,
            inventory: Inventory::with_items(config.survival.starting_inventory.iter().copied()),
            holding: None,
            lighting,
            threat: ThreatController::new(),
            build: BuildController::new(),
            fishing: FishingController::new(),
            hud: Hud::new(),
            layout,
            timeline: Timeline::new(),
            events: EventQueue::new(),
            rng,
            raycaster,
            movement: MoveFlags::default(),
            locked: false,
            won: false,
            sim_time: 0.0,
            wall_time: 0.0,
            config,
        }
    }

    /// Throw the world away and start over from the stored config and seed.
    /// The only way out of a terminal state.
    pub fn reset(&mut self) {
        let raycaster = std::mem::replace(&mut self.raycaster, Box::new(ColliderRaycaster));
        *self = Self::with_raycaster(self.config.clone(), raycaster);
        log::info!("World reset");
    }

    pub fn outcome(&self) -> Outcome {
        if self.won {
            Outcome::Won
        } else if self.survival.is_dead {
            Outcome::Dead
        } else {
            Outcome::Playing
        }
    }

    /// Won or dead. Nothing but [`reset`](Self::reset) changes state after this.
    pub fn is_over(&self) -> bool {
        self.outcome() != Outcome::Playing
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn wall_time(&self) -> f64 {
        self.wall_time
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn movement(&self) -> MoveFlags {
        self.movement
    }

    /// Events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.events.drain()
    }

    /// Advance the simulation by `delta` seconds.
    pub fn update(&mut self, delta: f32, wall_time: f64) {
        if self.is_over() {
            return;
        }
        let delta = delta.max(0.0);
        self.sim_time += delta as f64;
        self.wall_time = wall_time;

        physics_system(
            &mut self.body,
            &self.movement,
            self.locked,
            delta,
            wall_time,
            &self.config.player.locomotion,
            &mut self.events,
        );

        self.lighting = cycle_system(&mut self.survival, delta, wall_time, &self.config.cycle);

        if survival_system(&mut self.survival, delta, &self.config.survival.decay) {
            self.die();
            return;
        }

        let transition = threat_system(
            &mut self.threat,
            self.lighting.is_night(),
            &mut self.body,
            &mut self.survival,
            &mut self.hud,
            delta,
            &self.config.threat,
            &mut self.rng,
            &mut self.events,
        );
        if transition == ThreatTransition::Spawned {
            self.show_message("Something stirs in the dark...");
        }
        if check_death(&mut self.survival) {
            self.die();
            return;
        }

        building_system(&mut self.build, &self.body, &self.config.building);

        if let Some(session) = fishing_system(&mut self.fishing, delta, &self.config.fishing) {
            self.events.cue(CueKind::Ui);
            self.events.push(SimEvent::FishHooked);
            self.show_message("Bite! Click now!");
            self.timeline.schedule(
                self.sim_time,
                self.config.fishing.bite_window,
                Deferred::BiteWindowClosed { session },
            );
        }

        let collected = quest_system(&mut self.world, self.body.position, self.config.interact.pickup_radius);
        for name in collected {
            self.events.cue(CueKind::Ui);
            self.events.push(SimEvent::ObjectiveCollected { name });
            self.show_message("Found a radio part!");
        }

        self.run_deferred();
    }

    /// Apply every deferred effect that has fallen due, skipping stale ones.
    fn run_deferred(&mut self) {
        for effect in self.timeline.take_due(self.sim_time) {
            match effect {
                Deferred::EndRecoil { generation } => {
                    self.hud.end_recoil(generation);
                }
                Deferred::ClearMessage { generation } => {
                    self.hud.clear_message(generation);
                }
                Deferred::BiteWindowClosed { session } => {
                    if self.fishing.close_window(session).is_some() {
                        self.events.push(SimEvent::FishEscaped);
                        self.show_message("The fish got away...");
                    }
                }
            }
        }
    }

    /// Put `text` on the message line and schedule its removal.
    pub(crate) fn show_message(&mut self, text: impl Into<String>) {
        let generation = self.hud.show(text);
        self.timeline.schedule(
            self.sim_time,
            self.config.interact.message_duration,
            Deferred::ClearMessage { generation },
        );
    }

    pub(crate) fn start_recoil(&mut self) {
        let generation = self.hud.start_recoil();
        self.timeline.schedule(
            self.sim_time,
            self.config.interact.recoil_duration,
            Deferred::EndRecoil { generation },
        );
    }

    fn die(&mut self) {
        log::warn!("Game over at t={:.1}", self.sim_time);
        self.events.push(SimEvent::Died);
    }

    pub(crate) fn win(&mut self) {
        self.won = true;
        self.show_message("Radio repaired! Calling for rescue...");
        self.events.cue(CueKind::Ui);
        self.events.push(SimEvent::Won);
        log::info!("Radio repaired at t={:.1}", self.sim_time);
    }
}

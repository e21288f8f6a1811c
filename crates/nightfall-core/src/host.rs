//! The boundary with the outside world.
//!
//! A [`Host`] supplies input and receives everything the simulation wants
//! shown or heard: sound cues, the HUD report, a render snapshot, and the
//! two terminal notifications. [`Driver`] runs one frame against a host.

use nightfall_logic::daynight::Lighting;
use nightfall_logic::items::{ItemKind, Recipe, Tool};
use nightfall_logic::locomotion::MoveFlags;
use nightfall_logic::signal::SignalReadout;
use serde::{Deserialize, Serialize};

use crate::clock::FrameClock;
use crate::components::{PlacedStructure, PlayerBody, Position, QuestObjective, Vec3};
use crate::engine::SimulationEngine;
use crate::events::{CueKind, SimEvent};
use crate::systems::{signal_readout, BuildGhost, Threat};

/// Input polled once per frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub movement: MoveFlags,
    pub jump: bool,
    pub primary: bool,
    pub examine: bool,
    pub locked: bool,
    /// New camera direction, if the mouse moved.
    pub facing: Option<Vec3>,
    /// Inventory panel clicks.
    pub craft: Option<Recipe>,
    pub use_item: Option<ItemKind>,
}

/// HUD fields pushed to the host each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiReport {
    pub health: u32,
    pub hunger: u32,
    pub thirst: u32,
    pub signal: SignalReadout,
    pub message: Option<String>,
    pub vignette: f32,
    pub inventory: Vec<ItemKind>,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub player: PlayerBody,
    pub threat: Option<Threat>,
    pub ghost: Option<BuildGhost>,
    pub structures: Vec<PlacedStructure>,
    pub objectives: Vec<(String, Vec3)>,
    pub fishing_marker: Option<Vec3>,
    pub lighting: Lighting,
    pub holding: Option<Tool>,
    pub recoiling: bool,
}

pub trait Host {
    fn read_input(&mut self) -> FrameInput;
    fn play_cue(&mut self, kind: CueKind);
    fn report_ui(&mut self, report: &UiReport);
    fn render(&mut self, snapshot: &WorldSnapshot);
    fn on_win(&mut self);
    fn on_death(&mut self);
    /// Events with no dedicated callback (focus requests, pickups, ...).
    fn on_event(&mut self, _event: &SimEvent) {}
}

impl SimulationEngine {
    /// Apply one frame's input: held state first, then the discrete presses.
    pub fn apply_input(&mut self, input: &FrameInput) {
        self.set_movement(input.movement);
        self.set_locked(input.locked);
        if let Some(facing) = input.facing {
            self.look(facing);
        }
        if let Some(recipe) = input.craft {
            // Rejections are reported on the message line
            let _ = self.craft(recipe);
        }
        if let Some(kind) = input.use_item {
            self.use_item(kind);
        }
        if input.jump {
            self.jump();
        }
        if input.primary {
            self.primary_action();
        }
        if input.examine {
            self.examine();
        }
    }

    pub fn ui_report(&self) -> UiReport {
        UiReport {
            health: self.survival.health().floor() as u32,
            hunger: self.survival.hunger().floor() as u32,
            thirst: self.survival.thirst().floor() as u32,
            signal: signal_readout(&self.world, self.body.position),
            message: self.hud.message().map(str::to_owned),
            vignette: self.hud.vignette,
            inventory: self.inventory.iter().collect(),
        }
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let structures = self
            .world
            .query::<&PlacedStructure>()
            .iter()
            .map(|(_, s)| *s)
            .collect();
        let objectives = self
            .world
            .query::<(&QuestObjective, &Position)>()
            .iter()
            .map(|(_, (q, p))| (q.name.clone(), p.0))
            .collect();
        WorldSnapshot {
            player: self.body,
            threat: self.threat.threat,
            ghost: self.build.ghost,
            structures,
            objectives,
            fishing_marker: self.fishing.session.map(|s| s.marker),
            lighting: self.lighting,
            holding: self.holding,
            recoiling: self.hud.is_recoiling(),
        }
    }
}

/// Whether the driver will keep ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Running,
    Halted,
}

/// Runs frames: sample the clock, read input, tick, then fan the results
/// out to the host. Stops ticking after a win or death notification.
pub struct Driver<C: FrameClock> {
    engine: SimulationEngine,
    clock: C,
    halted: bool,
}

impl<C: FrameClock> Driver<C> {
    pub fn new(engine: SimulationEngine, clock: C) -> Self {
        Self {
            engine,
            clock,
            halted: false,
        }
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Reset the world and resume ticking.
    pub fn restart(&mut self) {
        self.engine.reset();
        self.halted = false;
    }

    pub fn frame(&mut self, host: &mut impl Host) -> FrameStatus {
        if self.halted {
            return FrameStatus::Halted;
        }

        let time = self.clock.sample();
        let input = host.read_input();
        self.engine.apply_input(&input);
        self.engine.update(time.delta, time.wall_time);

        for event in self.engine.drain_events() {
            match event {
                SimEvent::Cue(kind) => host.play_cue(kind),
                SimEvent::Won => {
                    host.on_win();
                    self.halted = true;
                }
                SimEvent::Died => {
                    host.on_death();
                    self.halted = true;
                }
                other => host.on_event(&other),
            }
        }

        host.report_ui(&self.engine.ui_report());
        host.render(&self.engine.snapshot());

        if self.halted {
            FrameStatus::Halted
        } else {
            FrameStatus::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::SimConfig;

    #[derive(Default)]
    struct Recorder {
        input: FrameInput,
        cues: Vec<CueKind>,
        reports: Vec<UiReport>,
        frames: usize,
        wins: usize,
        deaths: usize,
    }

    impl Host for Recorder {
        fn read_input(&mut self) -> FrameInput {
            self.input.clone()
        }
        fn play_cue(&mut self, kind: CueKind) {
            self.cues.push(kind);
        }
        fn report_ui(&mut self, report: &UiReport) {
            self.reports.push(report.clone());
        }
        fn render(&mut self, _snapshot: &WorldSnapshot) {
            self.frames += 1;
        }
        fn on_win(&mut self) {
            self.wins += 1;
        }
        fn on_death(&mut self) {
            self.deaths += 1;
        }
    }

    #[test]
    fn test_frame_reports_and_renders() {
        let engine = SimulationEngine::new(SimConfig::default());
        let mut driver = Driver::new(engine, FixedClock::new(1.0 / 60.0));
        let mut host = Recorder::default();
        assert_eq!(driver.frame(&mut host), FrameStatus::Running);
        assert_eq!(host.frames, 1);
        let report = &host.reports[0];
        assert_eq!(report.health, 100);
        assert_eq!(report.thirst, 99);
        assert_eq!(report.inventory, vec![ItemKind::Beans, ItemKind::Bandage]);
    }

    #[test]
    fn test_death_halts_driver() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.survival.vitals.thirst = 0.01;
        let mut driver = Driver::new(engine, FixedClock::new(0.1));
        let mut host = Recorder::default();
        assert_eq!(driver.frame(&mut host), FrameStatus::Halted);
        assert_eq!(host.deaths, 1);
        assert_eq!(driver.frame(&mut host), FrameStatus::Halted);
        assert_eq!(host.frames, 1);

        driver.restart();
        assert_eq!(driver.frame(&mut host), FrameStatus::Running);
    }

    #[test]
    fn test_chop_cue_reaches_host() {
        let engine = SimulationEngine::new(SimConfig::default());
        let mut driver = Driver::new(engine, FixedClock::new(0.01));
        let mut host = Recorder {
            input: FrameInput {
                primary: true,
                locked: true,
                ..Default::default()
            },
            ..Default::default()
        };
        driver.frame(&mut host);
        assert!(host.cues.contains(&CueKind::Chop));
    }

    #[test]
    fn test_snapshot_lists_objectives() {
        let engine = SimulationEngine::new(SimConfig::default());
        let snap = engine.snapshot();
        assert_eq!(snap.objectives.len(), 3);
        assert!(snap.structures.is_empty());
        assert!(snap.fishing_marker.is_none());
    }
}

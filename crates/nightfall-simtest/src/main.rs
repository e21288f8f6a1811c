//! Nightfall Headless Simulation Harness
//!
//! Drives the survival loop with no window, audio or input devices. Runs
//! the pure rules, the scripted gameplay scenarios, and a long soak through
//! the frame driver, then prints a pass/fail table.
//!
//! Usage:
//!   cargo run -p nightfall-simtest
//!   cargo run -p nightfall-simtest -- --verbose --seed 7 --ticks 72000
//!   cargo run -p nightfall-simtest -- --config tuning.json

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::Parser;
use nightfall_core::prelude::*;
use nightfall_core::systems::Resolution;
use nightfall_logic::daynight::{self, CycleParams};
use nightfall_logic::signal::{SignalBand, SignalReadout};
use nightfall_logic::survival::{DecayRates, Vitals};
use thiserror::Error;

#[derive(Parser)]
#[command(
    name = "nightfall-simtest",
    about = "Headless validation harness for the Nightfall survival loop",
    version
)]
struct Args {
    /// Print every result, not just failures, and log at debug level
    #[arg(long)]
    verbose: bool,

    /// JSON file overriding parts of the simulation config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for every random roll (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to run in the soak test (60 per second)
    #[arg(long, default_value = "36000")]
    ticks: u32,
}

#[derive(Debug, Error)]
enum HarnessError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn load_config(path: &Path) -> Result<SimConfig, HarnessError> {
    let text = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| HarnessError::Json {
        path: path.to_path_buf(),
        source,
    })
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

const DT: f32 = 1.0 / 60.0;

fn main() {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(2);
            }
        },
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    println!("=== Nightfall Simulation Harness (seed {}) ===\n", config.seed);

    let mut results = Vec::new();

    // 1. Pure survival rules
    results.extend(validate_survival_rules());

    // 2. Day-night cycle
    results.extend(validate_day_night(&config.cycle));

    // 3. Signal readout
    results.extend(validate_signal());

    // 4. Scripted gameplay scenarios
    results.extend(validate_scenarios(&config));

    // 5. Threat behaviour
    results.extend(validate_threat(&config));

    // 6. Soak run through the frame driver
    results.extend(validate_soak(&config, args.ticks, args.verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn step(engine: &mut SimulationEngine, seconds: f32) {
    let frames = (seconds / DT).ceil() as u32;
    for _ in 0..frames {
        let wall = engine.wall_time() + DT as f64;
        engine.update(DT, wall);
    }
}

/// Same config, but starting in daylight so nothing hunts the player.
fn daytime(config: &SimConfig) -> SimulationEngine {
    let mut config = config.clone();
    config.survival.start_time = 2.0;
    let mut engine = SimulationEngine::new(config);
    engine.set_locked(true);
    engine
}

// ── 1. Survival Rules ───────────────────────────────────────────────────

fn validate_survival_rules() -> Vec<TestResult> {
    println!("--- Survival Rules ---");
    let mut results = Vec::new();
    let rates = DecayRates::default();

    // Stats stay in range across a spread of deltas
    let mut bounded = true;
    for i in 0..200 {
        let mut v = Vitals::full();
        v.decay(i as f32 * 3.7, &rates);
        v.wound(i as f32 * 1.3);
        bounded &= [v.health, v.hunger, v.thirst]
            .iter()
            .all(|s| (0.0..=100.0).contains(s));
    }
    results.push(TestResult::new("survival_bounded", bounded, "200 decay/wound samples stay in [0, 100]"));

    // Thirst runs out before hunger from full
    let mut v = Vitals::full();
    let mut seconds = 0;
    while !v.is_fatal() && seconds < 1000 {
        v.decay(1.0, &rates);
        seconds += 1;
    }
    results.push(TestResult::new(
        "survival_thirst_first",
        v.thirst == 0.0 && v.hunger > 0.0,
        format!("dehydrated after {}s, hunger left {:.1}", seconds, v.hunger),
    ));

    results
}

// ── 2. Day-Night Cycle ──────────────────────────────────────────────────

fn validate_day_night(params: &CycleParams) -> Vec<TestResult> {
    println!("--- Day-Night Cycle ---");
    let mut results = Vec::new();

    let mut flips = 0;
    let mut night = daynight::is_night(0.0, params);
    let mut tod = 0.0;
    for _ in 0..6000 {
        tod = daynight::advance(tod, 0.1, params);
        let now = daynight::is_night(tod, params);
        if now != night {
            flips += 1;
            night = now;
        }
    }
    results.push(TestResult::new(
        "cycle_alternates",
        flips >= 2,
        format!("{} day/night transitions over 600s", flips),
    ));

    let lit = (0..240).all(|i| {
        let t = i as f32 * 0.1;
        let light = daynight::Lighting::at(t, i as f64 * 0.05, params);
        if light.is_night() {
            light.sun_intensity == 0.0 && (1.5..=2.5).contains(&light.fire_light_intensity)
        } else {
            light.sun_intensity == 1.0 && light.fire_light_intensity == 0.0
        }
    });
    results.push(TestResult::new("cycle_lighting", lit, "sun and fire light follow the phase"));

    results
}

// ── 3. Signal ───────────────────────────────────────────────────────────

fn validate_signal() -> Vec<TestResult> {
    println!("--- Signal Readout ---");
    vec![
        TestResult::new(
            "signal_bands",
            SignalReadout::from_distances([5.0, 90.0]) == SignalReadout::Band(SignalBand::VeryClose)
                && SignalReadout::from_distances([45.0]) == SignalReadout::Band(SignalBand::Weak)
                && SignalReadout::from_distances([61.0]) == SignalReadout::Band(SignalBand::None),
            "nearest part decides the band",
        ),
        TestResult::new(
            "signal_complete",
            SignalReadout::from_distances(std::iter::empty()) == SignalReadout::AllFound,
            "no parts left reads as complete",
        ),
    ]
}

// ── 4. Scenarios ────────────────────────────────────────────────────────

fn validate_scenarios(config: &SimConfig) -> Vec<TestResult> {
    println!("--- Gameplay Scenarios ---");
    let mut results = Vec::new();

    // A: starvation
    let mut engine = daytime(config);
    engine.survival.vitals = Vitals {
        health: 100.0,
        hunger: 0.4,
        thirst: 50.0,
    };
    engine.update(1.0, 1.0);
    let frozen = engine.survival;
    engine.update(1.0, 2.0);
    results.push(TestResult::new(
        "scenario_a_starvation",
        engine.outcome() == Outcome::Dead && engine.survival == frozen,
        format!("dead={} thirst held at {:.1}", engine.survival.is_dead, engine.survival.thirst()),
    ));

    // B: jump while airborne
    let mut engine = daytime(config);
    engine.jump();
    step(&mut engine, 0.1);
    let vy = engine.body.velocity.y;
    let second = engine.jump();
    results.push(TestResult::new(
        "scenario_b_air_jump",
        !second && engine.body.velocity.y == vy && !engine.body.grounded,
        format!("vy stays {:.2}", vy),
    ));

    // C: wall with three wood
    let mut engine = daytime(config);
    for _ in 0..3 {
        engine.inventory.add(ItemKind::Wood);
    }
    let before = engine.inventory.clone();
    let rejected = engine.craft(Recipe::Wall);
    results.push(TestResult::new(
        "scenario_c_wall_rejected",
        rejected.is_err() && engine.inventory == before && engine.build.ghost.is_none(),
        match rejected {
            Err(e) => e.to_string(),
            Ok(o) => format!("unexpectedly crafted {:?}", o),
        },
    ));

    // D: fishing bite and catch
    let mut engine = daytime(config);
    engine.holding = Some(Tool::Rod);
    engine.primary_action();
    let wait = engine.fishing.session.map_or(0.0, |s| s.wait_remaining);
    step(&mut engine, wait + 0.1);
    let hooked = engine
        .drain_events()
        .iter()
        .filter(|e| **e == SimEvent::FishHooked)
        .count();
    let reel = engine.primary_action();
    results.push(TestResult::new(
        "scenario_d_fishing",
        hooked == 1
            && reel == PrimaryOutcome::Reeled(Resolution::Caught)
            && engine.inventory.count(ItemKind::RawTrout) == 1,
        format!("wait {:.2}s, hooked {}x, reel {:?}", wait, hooked, reel),
    ));

    // E: radio repair
    let mut engine = daytime(config);
    let goal = Vec3::new(
        config.world.wreck_position.x - 5.0,
        config.player.locomotion.eye_height,
        config.world.wreck_position.z,
    );
    engine.body.position = goal;
    engine.look(Vec3::new(1.0, 0.0, 0.0));
    let early = engine.examine();
    let parts: Vec<Vec3> = engine.snapshot().objectives.iter().map(|(_, p)| *p).collect();
    for part in &parts {
        engine.body.position = *part + Vec3::new(0.0, 1.1, 0.0);
        engine.update(DT, 0.0);
    }
    engine.body.position = goal;
    let late = engine.examine();
    results.push(TestResult::new(
        "scenario_e_radio",
        matches!(early, ExamineOutcome::PartsMissing(_)) && late == ExamineOutcome::Won,
        format!("before: {:?}, after {} pickups: {:?}", early, parts.len(), late),
    ));

    results
}

// ── 5. Threat ───────────────────────────────────────────────────────────

fn validate_threat(config: &SimConfig) -> Vec<TestResult> {
    println!("--- Threat ---");
    let mut results = Vec::new();

    let mut harmless = config.clone();
    harmless.threat.damage_per_second = 0.0;
    let mut engine = SimulationEngine::new(harmless);

    let mut mismatches = 0;
    let mut leash_breaks = 0;
    let mut max_distance: f32 = 0.0;
    for i in 0..2000 {
        engine.survival.vitals = Vitals::full();
        if i % 50 == 0 {
            engine.body.position += Vec3::new(120.0, 0.0, 0.0);
        }
        let wall = engine.wall_time() + 0.1;
        engine.update(0.1, wall);
        if engine.threat.is_present() != engine.lighting.is_night() {
            mismatches += 1;
        }
        if let Some(t) = engine.threat.threat {
            let d = t.position.distance(&engine.body.position);
            max_distance = max_distance.max(d);
            if d > config.threat.leash_radius {
                leash_breaks += 1;
            }
        }
    }
    results.push(TestResult::new(
        "threat_tracks_night",
        mismatches == 0,
        format!("{} ticks where presence disagreed with the sky", mismatches),
    ));
    results.push(TestResult::new(
        "threat_leash",
        leash_breaks == 0,
        format!("max separation after a tick {:.1}", max_distance),
    ));

    results
}

// ── 6. Soak ─────────────────────────────────────────────────────────────

/// Scripted player: wanders, swings at trees, drinks and eats when low,
/// crafts an axe and a campfire once it has the wood.
struct HeadlessHost {
    frame: u32,
    last_report: Option<UiReport>,
    cues: HashMap<CueKind, u32>,
    events: u32,
    structures_seen: usize,
    bounds_ok: bool,
    ended: Option<Outcome>,
}

impl HeadlessHost {
    fn new() -> Self {
        Self {
            frame: 0,
            last_report: None,
            cues: HashMap::new(),
            events: 0,
            structures_seen: 0,
            bounds_ok: true,
            ended: None,
        }
    }
}

impl Host for HeadlessHost {
    fn read_input(&mut self) -> FrameInput {
        self.frame += 1;
        let f = self.frame;
        let yaw = f as f32 * 0.002;
        let thirsty = self.last_report.as_ref().is_some_and(|r| r.thirst < 40);
        let hungry = self.last_report.as_ref().is_some_and(|r| r.hunger < 50);
        let wood = self
            .last_report
            .as_ref()
            .map_or(0, |r| r.inventory.iter().filter(|k| **k == ItemKind::Wood).count());

        FrameInput {
            movement: MoveFlags {
                forward: (f / 240) % 2 == 0,
                left: (f / 600) % 3 == 1,
                ..Default::default()
            },
            jump: f % 180 == 0,
            primary: f % 20 == 0,
            examine: thirsty && f % 60 == 0,
            locked: true,
            facing: Some(if thirsty {
                Vec3::new(yaw.sin(), -1.0, yaw.cos())
            } else {
                Vec3::from_yaw(yaw)
            }),
            craft: match wood {
                n if n >= 4 && f % 900 == 0 => Some(Recipe::Campfire),
                n if n >= 1 && f == 600 => Some(Recipe::StoneAxe),
                _ => None,
            },
            use_item: hungry.then_some(ItemKind::Beans),
        }
    }

    fn play_cue(&mut self, kind: CueKind) {
        *self.cues.entry(kind).or_default() += 1;
    }

    fn report_ui(&mut self, report: &UiReport) {
        self.bounds_ok &= [report.health, report.hunger, report.thirst]
            .iter()
            .all(|s| *s <= 100)
            && (0.0..=1.0).contains(&report.vignette);
        self.last_report = Some(report.clone());
    }

    fn render(&mut self, snapshot: &WorldSnapshot) {
        self.structures_seen = snapshot.structures.len();
    }

    fn on_win(&mut self) {
        self.ended = Some(Outcome::Won);
    }

    fn on_death(&mut self) {
        self.ended = Some(Outcome::Dead);
    }

    fn on_event(&mut self, event: &SimEvent) {
        log::debug!("frame {}: {:?}", self.frame, event);
        self.events += 1;
    }
}

fn validate_soak(config: &SimConfig, ticks: u32, verbose: bool) -> Vec<TestResult> {
    println!("--- Soak ({} frames) ---", ticks);
    let mut results = Vec::new();

    let engine = SimulationEngine::new(config.clone());
    let mut driver = Driver::new(engine, FixedClock::new(DT));
    let mut host = HeadlessHost::new();

    let mut frames = 0;
    let mut halted_cleanly = true;
    for _ in 0..ticks {
        frames += 1;
        if driver.frame(&mut host) == FrameStatus::Halted {
            halted_cleanly = host.ended.is_some();
            break;
        }
    }

    results.push(TestResult::new(
        "soak_hud_bounds",
        host.bounds_ok,
        "health/hunger/thirst/vignette stayed in range",
    ));
    results.push(TestResult::new(
        "soak_terminal_is_notified",
        halted_cleanly,
        match host.ended {
            Some(o) => format!("ended {:?} after {} frames", o, frames),
            None => format!("still playing after {} frames", frames),
        },
    ));
    let frozen_ok = match host.ended {
        Some(_) => {
            let before = driver.engine().survival;
            driver.engine_mut().update(1.0, 0.0);
            driver.engine().survival == before
        }
        None => true,
    };
    results.push(TestResult::new(
        "soak_terminal_freezes",
        frozen_ok,
        "no state changes after the end",
    ));

    let chops = host.cues.get(&CueKind::Chop).copied().unwrap_or(0);
    results.push(TestResult::new(
        "soak_cues",
        chops > 0,
        format!(
            "chop {} step {} ui {} other events {} structures {}",
            chops,
            host.cues.get(&CueKind::Step).copied().unwrap_or(0),
            host.cues.get(&CueKind::Ui).copied().unwrap_or(0),
            host.events,
            host.structures_seen
        ),
    ));

    if verbose {
        let e = driver.engine();
        println!(
            "  final: t={:.1}s hour {:.1} hp {:.0} hunger {:.0} thirst {:.0} inventory {}",
            e.sim_time(),
            e.survival.hour_of_day(),
            e.survival.health(),
            e.survival.hunger(),
            e.survival.thirst(),
            e.inventory.len()
        );
    }

    results
}

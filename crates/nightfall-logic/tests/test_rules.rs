//! Integration tests that run the pure rules together over many ticks.
//!
//! Exercises: locomotion → day–night → survival decay, with no engine.

use nightfall_logic::daynight::{self, CycleParams, Lighting};
use nightfall_logic::items::{ItemEffect, ItemKind};
use nightfall_logic::locomotion::{self, LocomotionParams, MoveFlags, PlanarVelocity};
use nightfall_logic::signal::{SignalBand, SignalReadout};
use nightfall_logic::survival::{DecayRates, Vitals};

const DT: f32 = 1.0 / 60.0;

// ── Survival over time ─────────────────────────────────────────────────

#[test]
fn thirst_kills_before_hunger_from_full() {
    let mut v = Vitals::full();
    let rates = DecayRates::default();
    let mut ticks = 0u32;
    while !v.is_fatal() {
        v.decay(DT, &rates);
        ticks += 1;
    }
    assert_eq!(v.thirst, 0.0);
    assert!(v.hunger > 0.0);
    // 100 / 0.8 = 125 time-units
    let elapsed = ticks as f32 * DT;
    assert!((elapsed - 125.0).abs() < 0.5, "elapsed {elapsed}");
}

#[test]
fn eating_beans_extends_hunger() {
    let mut v = Vitals::full();
    v.decay(100.0, &DecayRates::default());
    let before = v.hunger;
    if let ItemEffect::Eat { nourishment } = ItemKind::Beans.effect() {
        v.eat(nourishment);
    }
    assert!((v.hunger - (before + 30.0)).abs() < 1e-4);
}

// ── Day–night ──────────────────────────────────────────────────────────

#[test]
fn night_and_day_alternate() {
    let params = CycleParams::default();
    let mut t = 12.0;
    let mut transitions = 0;
    let mut was_night = daynight::is_night(t, &params);
    // one full sun period is 4π cycle-units = ~125.7 time-units
    for _ in 0..(130 * 60) {
        t = daynight::advance(t, DT, &params);
        let night = Lighting::at(t, 0.0, &params).is_night();
        if night != was_night {
            transitions += 1;
            was_night = night;
        }
    }
    assert_eq!(transitions, 2);
}

// ── Locomotion ─────────────────────────────────────────────────────────

#[test]
fn held_forward_reaches_terminal_speed() {
    let params = LocomotionParams::default();
    let flags = MoveFlags {
        forward: true,
        ..Default::default()
    };
    let mut v = PlanarVelocity::default();
    for _ in 0..600 {
        v = v.accelerate(&flags, DT, &params).damp(DT, &params);
    }
    let released = v;
    // terminal velocity is bounded by acceleration / damping
    assert!(v.forward > 0.0 && v.forward < params.acceleration / params.damping + 1.0);

    for _ in 0..600 {
        v = v.damp(DT, &params);
    }
    assert!(v.forward.abs() < released.forward * 1e-3);
}

#[test]
fn jump_arc_returns_to_ground() {
    let params = LocomotionParams::default();
    let mut y = params.eye_height;
    let mut vy = locomotion::jump_launch(true, &params).unwrap_or(0.0);
    let mut grounded = false;
    let mut peak = y;
    for _ in 0..120 {
        let step = locomotion::fall(y, vy, grounded, DT, &params);
        y = step.y;
        vy = step.vy;
        grounded = step.grounded;
        peak = peak.max(y);
        if step.landed {
            break;
        }
    }
    assert!(grounded);
    // v²/2g = 64/40 = 1.6
    assert!((peak - params.eye_height - 1.6).abs() < 0.2);
}

// ── Signal ─────────────────────────────────────────────────────────────

#[test]
fn signal_strengthens_on_approach() {
    assert_eq!(
        SignalReadout::from_distances([90.0, 200.0]),
        SignalReadout::Band(SignalBand::None)
    );
    let mut last = SignalBand::None;
    for d in [59.0, 29.0, 9.0] {
        match SignalReadout::from_distances([d, 200.0]) {
            SignalReadout::Band(band) => {
                assert!(band > last);
                last = band;
            }
            SignalReadout::AllFound => panic!("parts remain"),
        }
    }
}

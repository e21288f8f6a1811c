//! Pure survival rules for Nightfall.
//!
//! This crate holds the game rules that do not need an ECS world, a random
//! number generator, or a host: functions take plain data and return
//! results, so they stay unit-testable and reusable by any front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Tuning values for every subsystem |
//! | [`daynight`] | Sun elevation, night test, derived lighting |
//! | [`items`] | Item kinds, use-effects, tools, recipes, structures |
//! | [`locomotion`] | Input intent, acceleration, damping, gravity, jumping |
//! | [`signal`] | Quantised radio signal readout |
//! | [`survival`] | Health/hunger/thirst decay, clamping, death rule |

pub mod constants;
pub mod daynight;
pub mod items;
pub mod locomotion;
pub mod signal;
pub mod survival;

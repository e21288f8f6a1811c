//! Nightfall Core - first-person survival simulation loop
//!
//! One explicit world aggregate, advanced a tick at a time: player physics,
//! a day-night cycle that calls up a stalker at night, draining survival
//! stats, gathering and crafting, a build preview, a fishing mini-game, and
//! the radio-part hunt that ends the game.
//!
//! # Architecture
//!
//! - **World objects** (trees, water, the wreck, radio parts, placed
//!   structures) are `hecs` entities tagged with a [`components::ObjectKind`].
//! - **Singletons** (player body, survival stats, inventory, state machines)
//!   are plain fields on [`engine::SimulationEngine`].
//! - **Systems** are free functions run in a fixed order by
//!   [`engine::SimulationEngine::update`].
//! - **Deferred effects** (bite window, tool recoil, message expiry) sit on a
//!   [`timeline::Timeline`] and carry tokens that are checked before applying.
//! - **Collaborators** (input, audio, HUD, renderer) sit behind
//!   [`host::Host`]; ray queries go through [`raycast::Raycaster`].
//!
//! # Example
//!
//! ```rust,no_run
//! use nightfall_core::prelude::*;
//!
//! let mut engine = SimulationEngine::new(SimConfig::default());
//! engine.set_locked(true);
//!
//! let mut wall_time = 0.0;
//! while !engine.is_over() {
//!     wall_time += 1.0 / 60.0;
//!     engine.update(1.0 / 60.0, wall_time);
//!     for event in engine.drain_events() {
//!         println!("{:?}", event);
//!     }
//! }
//! ```

pub mod clock;
pub mod components;
pub mod config;
pub mod engine;
pub mod events;
pub mod generation;
pub mod host;
pub mod hud;
pub mod interaction;
pub mod inventory;
pub mod raycast;
pub mod systems;
pub mod timeline;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, FrameClock, FrameTime};
    pub use crate::components::*;
    pub use crate::config::SimConfig;
    pub use crate::engine::{Outcome, SimulationEngine};
    pub use crate::events::{CueKind, SimEvent};
    pub use crate::host::{Driver, FrameInput, FrameStatus, Host, UiReport, WorldSnapshot};
    pub use crate::interaction::{CraftError, ExamineOutcome, PrimaryOutcome};
    pub use crate::inventory::{Inventory, InventoryError};
    pub use nightfall_logic::items::{ItemKind, Recipe, StructureKind, Tool};
    pub use nightfall_logic::locomotion::MoveFlags;
}

//! Component definitions.
//!
//! Components are pure data. World objects live as entities in the `hecs`
//! world; the player's body and stats are singletons held by the engine.

mod common;
mod objects;
mod player;

pub use common::*;
pub use objects::*;
pub use player::*;

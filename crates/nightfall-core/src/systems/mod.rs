//! Systems - per-tick logic over the engine's state, run in a fixed order
//! by [`SimulationEngine::update`](crate::engine::SimulationEngine::update).

mod building;
mod cycle;
mod fishing;
mod physics;
mod quest;
mod survival;
mod threat;

pub use building::*;
pub use cycle::*;
pub use fishing::*;
pub use physics::*;
pub use quest::*;
pub use survival::*;
pub use threat::*;

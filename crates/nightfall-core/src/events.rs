//! Simulation events - what happened this tick, for the host to act on.
//!
//! Systems push into the engine's outbox; the host drains it once per frame
//! and turns cues into sound and terminal events into end screens.

use nightfall_logic::items::{ItemKind, StructureKind};
use serde::{Deserialize, Serialize};

use crate::components::Vec3;

/// Sound cue kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CueKind {
    Step,
    Chop,
    Ui,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    Cue(CueKind),
    /// Build preview started; the host should grab pointer focus and hide
    /// secondary panels.
    FocusRequested,
    ThreatSpawned { position: Vec3 },
    ThreatVanished,
    ItemGained(ItemKind),
    StructurePlaced { kind: StructureKind, position: Vec3, rotation: f32 },
    ObjectiveCollected { name: String },
    FishHooked,
    FishEscaped,
    Won,
    Died,
}

impl SimEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Died)
    }
}

/// Event outbox.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<SimEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    pub fn cue(&mut self, kind: CueKind) {
        self.events.push(SimEvent::Cue(kind));
    }

    pub fn drain(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties() {
        let mut q = EventQueue::new();
        q.cue(CueKind::Chop);
        q.push(SimEvent::Won);
        let out = q.drain();
        assert_eq!(out.len(), 2);
        assert!(out[1].is_terminal());
        assert!(q.drain().is_empty());
    }
}

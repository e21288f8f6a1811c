//! Building placement - the preview ghost and its confirmation.

use hecs::{Entity, World};
use nightfall_logic::items::StructureKind;
use serde::{Deserialize, Serialize};

use crate::components::{ObjectKind, PlacedStructure, PlayerBody, Position, Vec3, WorldObject};
use crate::config::BuildConfig;

/// The not-yet-placed structure following the player's aim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildGhost {
    pub kind: StructureKind,
    pub position: Vec3,
    pub rotation: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildController {
    pub ghost: Option<BuildGhost>,
}

impl BuildController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_previewing(&self) -> bool {
        self.ghost.is_some()
    }

    /// Enter preview for `kind`, discarding any earlier ghost. The ghost is
    /// posed immediately so it never sits at the origin for a frame.
    pub fn start(&mut self, kind: StructureKind, body: &PlayerBody, config: &BuildConfig) -> Option<BuildGhost> {
        let replaced = self.ghost.take();
        if let Some(old) = replaced {
            log::debug!("Discarding {} preview", old.kind.name());
        }
        self.ghost = Some(pose(kind, body, config));
        log::info!("Previewing {}", kind.name());
        replaced
    }

    /// Place the ghost as a permanent structure. `None` if not previewing.
    pub fn confirm(&mut self, world: &mut World) -> Option<(Entity, PlacedStructure)> {
        let ghost = self.ghost.take()?;
        let placed = PlacedStructure {
            kind: ghost.kind,
            position: ghost.position,
            rotation: ghost.rotation,
        };
        let entity = world.spawn((
            WorldObject::new(ObjectKind::Structure(ghost.kind)),
            Position(ghost.position),
            placed,
        ));
        log::info!(
            "Placed {} at ({:.1}, {:.1}, {:.1})",
            ghost.kind.name(),
            ghost.position.x,
            ghost.position.y,
            ghost.position.z
        );
        Some((entity, placed))
    }
}

/// Ghost transform for the current aim: `reach` ahead of the camera, held
/// at the kind's rest height, turned to the camera's yaw.
fn pose(kind: StructureKind, body: &PlayerBody, config: &BuildConfig) -> BuildGhost {
    let ahead = body.position + body.facing * config.reach;
    BuildGhost {
        kind,
        position: Vec3::new(ahead.x, kind.rest_height(), ahead.z),
        rotation: body.facing.x.atan2(body.facing.z),
    }
}

/// Keep the ghost glued to the player's aim.
pub fn building_system(controller: &mut BuildController, body: &PlayerBody, config: &BuildConfig) {
    if let Some(ghost) = controller.ghost.as_mut() {
        *ghost = pose(ghost.kind, body, config);
    }
}

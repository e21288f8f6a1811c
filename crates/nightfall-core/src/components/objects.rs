//! World objects: tagged entities the player can hit, collect, or build.
//!
//! Every interactable entity carries a [`WorldObject`] tag, so interaction
//! code switches on the kind of thing that was hit instead of comparing
//! identities.

use nightfall_logic::items::StructureKind;
use serde::{Deserialize, Serialize};

use super::{BoundingBox, Vec3};

/// What a world entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Harvestable for wood.
    Tree,
    /// The lake; drinkable.
    Water,
    /// The wrecked van; the radio is repaired here.
    Wreck,
    /// A missing radio part.
    QuestPart,
    /// Something the player built.
    Structure(StructureKind),
}

impl ObjectKind {
    pub fn is_harvestable(&self) -> bool {
        matches!(self, Self::Tree)
    }

    /// Targets of the examine action.
    pub fn is_examinable(&self) -> bool {
        matches!(self, Self::Water | Self::Wreck)
    }
}

/// Tag component carried by every world object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldObject {
    pub kind: ObjectKind,
}

impl WorldObject {
    pub fn new(kind: ObjectKind) -> Self {
        Self { kind }
    }
}

/// Hit shape, relative to the entity's [`Position`](super::Position).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    Sphere { radius: f32 },
    /// Axis-aligned box centred on the position.
    Box(BoundingBox),
    /// Upright cylinder whose base sits at the position.
    Cylinder { radius: f32, height: f32 },
    /// Flat horizontal disc at the position's height (water surface).
    Disc { radius: f32 },
}

/// A confirmed building. Never mutated after placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedStructure {
    pub kind: StructureKind,
    pub position: Vec3,
    /// Yaw in radians.
    pub rotation: f32,
}

/// A radio part that still has to be found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestObjective {
    pub id: u32,
    pub name: String,
}

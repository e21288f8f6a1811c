//! Item kinds, their use-effects, and crafting recipes.
//!
//! Every item is a closed [`ItemKind`]; what it does when used and what it
//! costs to make are looked up in small tables rather than by name.

use serde::{Deserialize, Serialize};

use crate::constants::building::{CAMPFIRE_HEIGHT, WALL_HEIGHT};
use crate::constants::survival::BEANS_NOURISHMENT;

/// Every item that can sit in the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemKind {
    Beans,
    Bandage,
    /// Raw material gathered by chopping trees.
    Wood,
    StoneAxe,
    FishingRod,
    RawTrout,
}

/// A tool the player can hold in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    Axe,
    Rod,
}

impl Tool {
    /// Whether this tool casts a fishing line on primary action.
    pub fn can_fish(self) -> bool {
        matches!(self, Self::Rod)
    }
}

/// What using an item from the inventory does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Consumed; restores this much hunger.
    Eat { nourishment: f32 },
    /// Kept; becomes the held tool.
    Equip(Tool),
    /// Nothing happens.
    Inert,
}

impl ItemKind {
    pub const ALL: [ItemKind; 6] = [
        Self::Beans,
        Self::Bandage,
        Self::Wood,
        Self::StoneAxe,
        Self::FishingRod,
        Self::RawTrout,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Beans => "Beans",
            Self::Bandage => "Bandage",
            Self::Wood => "Wood",
            Self::StoneAxe => "Stone Axe",
            Self::FishingRod => "Fishing Rod",
            Self::RawTrout => "Raw Trout",
        }
    }

    pub fn effect(self) -> ItemEffect {
        match self {
            Self::Beans => ItemEffect::Eat {
                nourishment: BEANS_NOURISHMENT,
            },
            Self::StoneAxe => ItemEffect::Equip(Tool::Axe),
            Self::FishingRod => ItemEffect::Equip(Tool::Rod),
            Self::Bandage | Self::Wood | Self::RawTrout => ItemEffect::Inert,
        }
    }
}

/// Structures that can be placed in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Campfire,
    Wall,
}

impl StructureKind {
    /// Height the preview and the placed structure snap to.
    pub fn rest_height(self) -> f32 {
        match self {
            Self::Campfire => CAMPFIRE_HEIGHT,
            Self::Wall => WALL_HEIGHT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Campfire => "Campfire",
            Self::Wall => "Wall",
        }
    }
}

/// What a recipe yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CraftOutput {
    /// Goes straight into the inventory.
    Item(ItemKind),
    /// Enters build preview; materials are spent up front.
    Structure(StructureKind),
}

/// Every craftable thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recipe {
    StoneAxe,
    FishingRod,
    Campfire,
    Wall,
}

impl Recipe {
    pub const ALL: [Recipe; 4] = [Self::StoneAxe, Self::FishingRod, Self::Campfire, Self::Wall];

    pub fn output(self) -> CraftOutput {
        match self {
            Self::StoneAxe => CraftOutput::Item(ItemKind::StoneAxe),
            Self::FishingRod => CraftOutput::Item(ItemKind::FishingRod),
            Self::Campfire => CraftOutput::Structure(StructureKind::Campfire),
            Self::Wall => CraftOutput::Structure(StructureKind::Wall),
        }
    }

    /// Material and quantity consumed.
    pub fn cost(self) -> (ItemKind, u32) {
        match self {
            Self::StoneAxe => (ItemKind::Wood, 1),
            Self::FishingRod => (ItemKind::Wood, 3),
            Self::Campfire | Self::Wall => (ItemKind::Wood, 4),
        }
    }
}

//! World population - scatters trees and places the lake, wreck and radio parts

use hecs::{Entity, World};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{
    BoundingBox, Collider, ObjectKind, Position, QuestObjective, Vec3, WorldObject,
};

/// A radio part placed at world start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestPartSpec {
    pub name: String,
    pub position: Vec3,
}

impl QuestPartSpec {
    pub fn new(name: impl Into<String>, x: f32, y: f32, z: f32) -> Self {
        Self {
            name: name.into(),
            position: Vec3::new(x, y, z),
        }
    }
}

/// Configuration for world population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Scatter attempts; attempts landing near the lake are dropped
    pub tree_attempts: u32,
    /// Trees are scattered over [-extent, extent] on both axes
    pub scatter_extent: f32,
    /// No trees closer than this to the lake centre
    pub lake_clearance: f32,
    pub lake_radius: f32,
    pub water_height: f32,
    pub tree_radius: f32,
    pub tree_height: f32,
    pub wreck_position: Vec3,
    /// Wreck body size (width, height, depth)
    pub wreck_size: Vec3,
    pub quest_part_radius: f32,
    pub quest_parts: Vec<QuestPartSpec>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tree_attempts: 300,
            scatter_extent: 90.0,
            lake_clearance: 35.0,
            lake_radius: 30.0,
            water_height: -0.5,
            tree_radius: 0.9,
            tree_height: 7.0,
            wreck_position: Vec3::new(40.0, 0.0, 0.0),
            wreck_size: Vec3::new(4.0, 2.5, 8.0),
            quest_part_radius: 0.35,
            quest_parts: vec![
                QuestPartSpec::new("Radio Battery", -60.0, 0.5, -60.0),
                QuestPartSpec::new("Antenna Cable", 60.0, 0.5, -40.0),
                QuestPartSpec::new("Frequency Module", 0.0, 0.5, -80.0),
            ],
        }
    }
}

/// Handles to the landmarks that live for the whole game. Radio parts are
/// despawned on pickup, so they are found by querying `QuestObjective`.
#[derive(Debug, Clone)]
pub struct IslandLayout {
    pub water: Entity,
    pub wreck: Entity,
    pub trees: Vec<Entity>,
}

/// Populate the ECS world with every static object
pub fn populate_world(world: &mut World, config: &WorldConfig, rng: &mut impl Rng) -> IslandLayout {
    let water = world.spawn((
        WorldObject::new(ObjectKind::Water),
        Position(Vec3::new(0.0, config.water_height, 0.0)),
        Collider::Disc {
            radius: config.lake_radius,
        },
    ));

    // The wreck body's centre sits at half its height
    let wreck = world.spawn((
        WorldObject::new(ObjectKind::Wreck),
        Position(config.wreck_position + Vec3::new(0.0, config.wreck_size.y / 2.0, 0.0)),
        Collider::Box(BoundingBox::from_size(
            config.wreck_size.x,
            config.wreck_size.y,
            config.wreck_size.z,
        )),
    ));

    let trees = scatter_trees(world, config, rng);

    for (i, part) in config.quest_parts.iter().enumerate() {
        world.spawn((
            WorldObject::new(ObjectKind::QuestPart),
            Position(part.position),
            Collider::Sphere {
                radius: config.quest_part_radius,
            },
            QuestObjective {
                id: i as u32,
                name: part.name.clone(),
            },
        ));
    }

    IslandLayout {
        water,
        wreck,
        trees,
    }
}

fn scatter_trees(world: &mut World, config: &WorldConfig, rng: &mut impl Rng) -> Vec<Entity> {
    let mut trees = Vec::with_capacity(config.tree_attempts as usize);
    let extent = config.scatter_extent.max(0.0);

    for _ in 0..config.tree_attempts {
        let x: f32 = rng.gen_range(-extent..=extent);
        let z: f32 = rng.gen_range(-extent..=extent);
        // Nothing grows in the lake
        if (x * x + z * z).sqrt() < config.lake_clearance {
            continue;
        }
        trees.push(world.spawn((
            WorldObject::new(ObjectKind::Tree),
            Position(Vec3::new(x, 0.0, z)),
            Collider::Cylinder {
                radius: config.tree_radius,
                height: config.tree_height,
            },
        )));
    }

    trees
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_populate_default_world() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(7);
        let layout = populate_world(&mut world, &WorldConfig::default(), &mut rng);

        assert_eq!(world.query::<&QuestObjective>().iter().count(), 3);
        assert!(!layout.trees.is_empty());
        assert!(layout.trees.len() <= 300);

        let kind = world.get::<&WorldObject>(layout.wreck).map(|o| o.kind).ok();
        assert_eq!(kind, Some(ObjectKind::Wreck));
    }

    #[test]
    fn test_no_trees_in_lake() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(11);
        let config = WorldConfig::default();
        populate_world(&mut world, &config, &mut rng);

        for (_, (obj, pos)) in world.query::<(&WorldObject, &Position)>().iter() {
            if obj.kind == ObjectKind::Tree {
                assert!(pos.0.horizontal().length() >= config.lake_clearance);
            }
        }
    }

    #[test]
    fn test_same_seed_same_forest() {
        let config = WorldConfig::default();
        let positions = |seed| {
            let mut world = World::new();
            let mut rng = StdRng::seed_from_u64(seed);
            let layout = populate_world(&mut world, &config, &mut rng);
            let found: Vec<Vec3> = layout
                .trees
                .iter()
                .filter_map(|&e| world.get::<&Position>(e).ok().map(|p| p.0))
                .collect();
            found
        };
        assert_eq!(positions(3), positions(3));
    }
}

//! Quest system - radio part pickup and the signal readout.

use hecs::{Entity, World};
use nightfall_logic::signal::SignalReadout;

use crate::components::{Position, QuestObjective, Vec3};

/// Collect every remaining part within `radius` of the player. Collected
/// parts are despawned; their names are returned in pickup order.
pub fn quest_system(world: &mut World, player: Vec3, radius: f32) -> Vec<String> {
    let found: Vec<(Entity, String)> = world
        .query::<(&QuestObjective, &Position)>()
        .iter()
        .filter(|(_, (_, pos))| pos.0.distance(&player) < radius)
        .map(|(entity, (objective, _))| (entity, objective.name.clone()))
        .collect();

    let mut names = Vec::with_capacity(found.len());
    for (entity, name) in found {
        if world.despawn(entity).is_ok() {
            log::info!("Collected {}", name);
            names.push(name);
        }
    }
    names
}

pub fn remaining_objectives(world: &World) -> usize {
    world.query::<&QuestObjective>().iter().count()
}

/// Signal line for the HUD: nearest remaining part, or all found.
pub fn signal_readout(world: &World, player: Vec3) -> SignalReadout {
    let mut query = world.query::<(&QuestObjective, &Position)>();
    let readout = SignalReadout::from_distances(query.iter().map(|(_, (_, pos))| pos.0.distance(&player)));
    readout
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightfall_logic::signal::SignalBand;

    fn world_with_part(at: Vec3) -> World {
        let mut world = World::new();
        world.spawn((
            QuestObjective {
                id: 0,
                name: "Radio Battery".into(),
            },
            Position(at),
        ));
        world
    }

    #[test]
    fn test_pickup_inside_radius() {
        let mut world = world_with_part(Vec3::new(1.0, 0.5, 0.0));
        let names = quest_system(&mut world, Vec3::new(0.0, 1.6, 0.0), 2.0);
        assert_eq!(names, vec!["Radio Battery".to_string()]);
        assert_eq!(remaining_objectives(&world), 0);
        assert_eq!(signal_readout(&world, Vec3::ZERO), SignalReadout::AllFound);
    }

    #[test]
    fn test_no_pickup_outside_radius() {
        let mut world = world_with_part(Vec3::new(5.0, 0.5, 0.0));
        assert!(quest_system(&mut world, Vec3::new(0.0, 1.6, 0.0), 2.0).is_empty());
        assert_eq!(remaining_objectives(&world), 1);
        assert_eq!(
            signal_readout(&world, Vec3::new(0.0, 0.5, 0.0)),
            SignalReadout::Band(SignalBand::VeryClose)
        );
    }
}

//! Interaction dispatch - everything the player does between ticks.
//!
//! The primary action is routed fresh on every press: a live build preview
//! takes it first, then a held fishing rod, then chopping. Examine is a
//! separate key that bypasses that chain.

use nightfall_logic::items::{CraftOutput, ItemEffect, ItemKind, Recipe, StructureKind};
use nightfall_logic::locomotion::MoveFlags;
use thiserror::Error;

use crate::components::{ObjectKind, Vec3};
use crate::engine::SimulationEngine;
use crate::events::{CueKind, SimEvent};
use crate::inventory::InventoryError;
use crate::raycast::Ray;
use crate::systems::{remaining_objectives, request_jump, Resolution};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CraftError {
    #[error("Not enough {} (needs {need})", .material.name())]
    Insufficient { material: ItemKind, have: u32, need: u32 },
    #[error("the game is over")]
    GameOver,
}

impl From<InventoryError> for CraftError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::Insufficient { kind, have, need } => Self::Insufficient {
                material: kind,
                have,
                need,
            },
        }
    }
}

/// What a primary-action press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryOutcome {
    /// Not locked, or the game is over.
    Ignored,
    Placed(StructureKind),
    Cast,
    Reeled(Resolution),
    /// Swung at whatever was ahead; `wood` if a tree was in reach.
    Chopped { wood: bool },
}

/// What an examine press found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamineOutcome {
    Nothing,
    Drank,
    PartsMissing(usize),
    Won,
}

impl SimulationEngine {
    /// Movement keys held this frame.
    pub fn set_movement(&mut self, flags: MoveFlags) {
        self.movement = flags;
    }

    /// Whether the pointer is captured. Motion and the primary action need it.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn look(&mut self, direction: Vec3) {
        if !self.is_over() {
            self.body.look(direction);
        }
    }

    /// Jump if grounded at the moment of the press.
    pub fn jump(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        let jumped = request_jump(&mut self.body, &self.config.player.locomotion);
        log::debug!("Jump requested, grounded={}", jumped);
        jumped
    }

    pub fn primary_action(&mut self) -> PrimaryOutcome {
        if self.is_over() || !self.locked {
            return PrimaryOutcome::Ignored;
        }

        if self.build.is_previewing() {
            return match self.build.confirm(&mut self.world) {
                Some((_, placed)) => {
                    self.events.cue(CueKind::Chop);
                    self.events.push(SimEvent::StructurePlaced {
                        kind: placed.kind,
                        position: placed.position,
                        rotation: placed.rotation,
                    });
                    PrimaryOutcome::Placed(placed.kind)
                }
                None => PrimaryOutcome::Ignored,
            };
        }

        if self.holding.is_some_and(|t| t.can_fish()) {
            return self.cast_or_reel();
        }

        self.chop()
    }

    /// A cast while a line is out reels it in instead.
    fn cast_or_reel(&mut self) -> PrimaryOutcome {
        if let Some(resolution) = self.fishing.reel() {
            match resolution {
                Resolution::Caught => {
                    self.inventory.add(ItemKind::RawTrout);
                    self.events.push(SimEvent::ItemGained(ItemKind::RawTrout));
                    self.events.cue(CueKind::Ui);
                    self.show_message("Caught a trout!");
                }
                _ => self.show_message("Reeled in (no bite)"),
            }
            return PrimaryOutcome::Reeled(resolution);
        }

        match self.fishing.cast(&self.body, &self.config.fishing, &mut self.rng) {
            Some(_) => {
                self.show_message("Waiting for a bite...");
                PrimaryOutcome::Cast
            }
            None => PrimaryOutcome::Ignored,
        }
    }

    fn chop(&mut self) -> PrimaryOutcome {
        self.events.cue(CueKind::Chop);
        self.start_recoil();

        let ray = Ray::new(self.body.position, self.body.facing);
        let hit = self
            .raycaster
            .nearest(&self.world, &ray, &|kind| kind.is_harvestable());
        let wood = hit.is_some_and(|h| h.distance < self.config.interact.harvest_range);
        if wood {
            self.inventory.add(ItemKind::Wood);
            self.events.push(SimEvent::ItemGained(ItemKind::Wood));
            self.show_message("Got 1x Wood");
        }
        PrimaryOutcome::Chopped { wood }
    }

    /// Drink from the lake or try the radio at the wreck.
    pub fn examine(&mut self) -> ExamineOutcome {
        if self.is_over() {
            return ExamineOutcome::Nothing;
        }

        let ray = Ray::new(self.body.position, self.body.facing);
        let hit = self
            .raycaster
            .nearest(&self.world, &ray, &|kind| kind.is_examinable());
        let Some(hit) = hit.filter(|h| h.distance < self.config.interact.examine_range) else {
            return ExamineOutcome::Nothing;
        };

        match hit.kind {
            ObjectKind::Water => {
                self.survival.vitals.quench();
                self.show_message("Drank water (risk of bacteria!)");
                ExamineOutcome::Drank
            }
            ObjectKind::Wreck => {
                let left = remaining_objectives(&self.world);
                if left == 0 {
                    self.win();
                    ExamineOutcome::Won
                } else {
                    self.show_message(format!("Still missing parts... ({} left)", left));
                    ExamineOutcome::PartsMissing(left)
                }
            }
            _ => ExamineOutcome::Nothing,
        }
    }

    /// Spend materials on `recipe`. Structures enter build preview, items go
    /// straight into the inventory. Nothing changes on failure.
    pub fn craft(&mut self, recipe: Recipe) -> Result<CraftOutput, CraftError> {
        if self.is_over() {
            return Err(CraftError::GameOver);
        }

        let (material, need) = recipe.cost();
        if let Err(err) = self.inventory.remove(material, need) {
            let err = CraftError::from(err);
            log::info!("Craft {:?} rejected: {}", recipe, err);
            self.show_message(err.to_string());
            return Err(err);
        }

        let output = recipe.output();
        match output {
            CraftOutput::Item(kind) => {
                self.inventory.add(kind);
                self.events.push(SimEvent::ItemGained(kind));
                self.show_message(format!("Crafted {}", kind.name()));
            }
            CraftOutput::Structure(kind) => {
                self.build.start(kind, &self.body, &self.config.building);
                self.events.push(SimEvent::FocusRequested);
            }
        }
        Ok(output)
    }

    /// Use an item from the inventory. Returns whether anything happened.
    pub fn use_item(&mut self, kind: ItemKind) -> bool {
        if self.is_over() || !self.inventory.contains(kind) {
            return false;
        }
        match kind.effect() {
            ItemEffect::Eat { nourishment } => {
                if self.inventory.remove(kind, 1).is_err() {
                    return false;
                }
                self.survival.vitals.eat(nourishment);
                self.show_message(format!("Ate {}", kind.name()));
                true
            }
            ItemEffect::Equip(tool) => {
                self.holding = Some(tool);
                self.events.push(SimEvent::FocusRequested);
                log::info!("Holding {:?}", tool);
                true
            }
            ItemEffect::Inert => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Collider, Position, WorldObject};
    use crate::config::SimConfig;
    use nightfall_logic::items::Tool;

    fn engine() -> SimulationEngine {
        let mut config = SimConfig::default().with_seed(8);
        config.survival.start_time = 2.0;
        let mut engine = SimulationEngine::new(config);
        engine.set_locked(true);
        engine
    }

    fn plant_tree(engine: &mut SimulationEngine, at: Vec3) {
        engine.world.spawn((
            WorldObject::new(ObjectKind::Tree),
            Position(at),
            Collider::Cylinder {
                radius: 0.9,
                height: 7.0,
            },
        ));
    }

    #[test]
    fn test_chop_tree_in_reach() {
        let mut e = engine();
        plant_tree(&mut e, Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(e.primary_action(), PrimaryOutcome::Chopped { wood: true });
        assert_eq!(e.inventory.count(ItemKind::Wood), 1);
        assert!(e.hud.is_recoiling());
        assert_eq!(e.hud.message(), Some("Got 1x Wood"));
    }

    #[test]
    fn test_chop_out_of_reach() {
        let mut e = engine();
        plant_tree(&mut e, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(e.primary_action(), PrimaryOutcome::Chopped { wood: false });
        assert_eq!(e.inventory.count(ItemKind::Wood), 0);
        assert!(e.drain_events().contains(&SimEvent::Cue(CueKind::Chop)));
    }

    #[test]
    fn test_recoil_ends() {
        let mut e = engine();
        e.primary_action();
        e.update(0.2, 0.2);
        assert!(!e.hud.is_recoiling());
    }

    #[test]
    fn test_primary_needs_lock() {
        let mut e = engine();
        e.set_locked(false);
        assert_eq!(e.primary_action(), PrimaryOutcome::Ignored);
    }

    #[test]
    fn test_craft_axe_and_equip() {
        let mut e = engine();
        e.inventory.add(ItemKind::Wood);
        assert_eq!(e.craft(Recipe::StoneAxe), Ok(CraftOutput::Item(ItemKind::StoneAxe)));
        assert_eq!(e.inventory.count(ItemKind::Wood), 0);
        assert!(e.use_item(ItemKind::StoneAxe));
        assert_eq!(e.holding, Some(Tool::Axe));
        assert!(e.inventory.contains(ItemKind::StoneAxe));
    }

    #[test]
    fn test_craft_rejected_message() {
        let mut e = engine();
        let err = e.craft(Recipe::Campfire).unwrap_err();
        assert_eq!(err.to_string(), "Not enough Wood (needs 4)");
        assert_eq!(e.hud.message(), Some("Not enough Wood (needs 4)"));
        assert!(!e.build.is_previewing());
    }

    #[test]
    fn test_preview_takes_priority_over_rod() {
        let mut e = engine();
        for _ in 0..4 {
            e.inventory.add(ItemKind::Wood);
        }
        e.holding = Some(Tool::Rod);
        e.craft(Recipe::Campfire).unwrap();
        assert!(e.drain_events().contains(&SimEvent::FocusRequested));
        assert_eq!(e.primary_action(), PrimaryOutcome::Placed(StructureKind::Campfire));
        assert!(!e.fishing.is_active());
        assert_eq!(e.primary_action(), PrimaryOutcome::Cast);
    }

    #[test]
    fn test_recast_reels_in() {
        let mut e = engine();
        e.holding = Some(Tool::Rod);
        assert_eq!(e.primary_action(), PrimaryOutcome::Cast);
        assert_eq!(e.primary_action(), PrimaryOutcome::Reeled(Resolution::Empty));
        assert!(!e.fishing.is_active());
        assert_eq!(e.hud.message(), Some("Reeled in (no bite)"));
    }

    #[test]
    fn test_eat_beans() {
        let mut e = engine();
        e.survival.vitals.hunger = 50.0;
        assert!(e.use_item(ItemKind::Beans));
        assert_eq!(e.survival.hunger(), 80.0);
        assert!(!e.inventory.contains(ItemKind::Beans));
        assert!(!e.use_item(ItemKind::Beans));
    }

    #[test]
    fn test_bandage_is_inert() {
        let mut e = engine();
        assert!(!e.use_item(ItemKind::Bandage));
        assert!(e.inventory.contains(ItemKind::Bandage));
    }

    #[test]
    fn test_drink_from_lake() {
        let mut e = engine();
        e.survival.vitals.thirst = 20.0;
        e.look(Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(e.examine(), ExamineOutcome::Drank);
        assert_eq!(e.survival.thirst(), 100.0);
    }

    #[test]
    fn test_examine_nothing() {
        let mut e = engine();
        e.look(Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(e.examine(), ExamineOutcome::Nothing);
    }
}

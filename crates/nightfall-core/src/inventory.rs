//! Inventory - ordered multiset of item kinds.

use nightfall_logic::items::ItemKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("not enough {} (have {have}, need {need})", .kind.name())]
    Insufficient { kind: ItemKind, have: u32, need: u32 },
}

/// Items in pickup order. Duplicates are separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<ItemKind>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = ItemKind>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn add(&mut self, kind: ItemKind) {
        self.items.push(kind);
    }

    pub fn count(&self, kind: ItemKind) -> u32 {
        self.items.iter().filter(|&&k| k == kind).count() as u32
    }

    pub fn contains(&self, kind: ItemKind) -> bool {
        self.items.contains(&kind)
    }

    /// Remove `n` entries of `kind`, oldest first. All or nothing.
    pub fn remove(&mut self, kind: ItemKind, n: u32) -> Result<(), InventoryError> {
        let have = self.count(kind);
        if have < n {
            return Err(InventoryError::Insufficient {
                kind,
                have,
                need: n,
            });
        }
        let mut left = n;
        self.items.retain(|&k| {
            if left > 0 && k == kind {
                left -= 1;
                false
            } else {
                true
            }
        });
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemKind> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

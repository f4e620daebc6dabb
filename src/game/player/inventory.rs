//! Inventory
//!
//! Fixed slot array split into a visible hotbar and hidden storage.
//! Adding an item stacks onto an existing slot of the same kind, else takes
//! the first empty slot, else is rejected.

use serde::{Deserialize, Serialize};

use super::items::ItemKind;

pub const VISIBLE_SLOTS: usize = 6;
pub const HIDDEN_SLOTS: usize = 6;
pub const TOTAL_SLOTS: usize = VISIBLE_SLOTS + HIDDEN_SLOTS;

/// One occupied slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: ItemKind,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    slots: Vec<Option<ItemStack>>,
    visible: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(TOTAL_SLOTS)
    }
}

impl Inventory {
    /// Inventory with `total_slots` slots, the first six visible.
    pub fn new(total_slots: usize) -> Self {
        Self {
            slots: vec![None; total_slots],
            visible: VISIBLE_SLOTS.min(total_slots),
        }
    }

    /// Rebuild from an exact slot array (save loading).
    pub fn from_slots(slots: Vec<Option<ItemStack>>) -> Self {
        let visible = VISIBLE_SLOTS.min(slots.len());
        Self { slots, visible }
    }

    /// Add `count` of `item`. Returns false (no mutation) when no slot fits.
    pub fn add_item(&mut self, item: ItemKind, count: u32) -> bool {
        if count == 0 {
            return true;
        }
        if let Some(stack) = self.slots.iter_mut().flatten().find(|s| s.item == item) {
            stack.count += count;
            return true;
        }
        if let Some(slot) = self.slots.iter_mut().find(|s| s.is_none()) {
            *slot = Some(ItemStack { item, count });
            return true;
        }
        false
    }

    /// Remove `count` of `item` from a single stack that holds at least that many.
    pub fn remove_item(&mut self, item: ItemKind, count: u32) -> bool {
        for slot in self.slots.iter_mut() {
            let Some(stack) = slot else { continue };
            if stack.item != item || stack.count < count {
                continue;
            }
            stack.count -= count;
            if stack.count == 0 {
                *slot = None;
            }
            return true;
        }
        false
    }

    pub fn has_item(&self, item: ItemKind, count: u32) -> bool {
        self.count_of(item) >= count
    }

    /// Total across all stacks.
    pub fn count_of(&self, item: ItemKind) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|s| s.item == item)
            .map(|s| s.count)
            .sum()
    }

    /// Remove every unit of `item`, returning how many were held.
    pub fn take_all(&mut self, item: ItemKind) -> u32 {
        let mut taken = 0;
        for slot in self.slots.iter_mut() {
            if let Some(stack) = *slot {
                if stack.item == item {
                    taken += stack.count;
                    *slot = None;
                }
            }
        }
        taken
    }

    pub fn visible_items(&self) -> &[Option<ItemStack>] {
        &self.slots[..self.visible]
    }

    pub fn all_items(&self) -> &[Option<ItemStack>] {
        &self.slots
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Add `extra` hidden slots (backpack upgrade).
    pub fn grow(&mut self, extra: usize) {
        self.slots.resize(self.slots.len() + extra, None);
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

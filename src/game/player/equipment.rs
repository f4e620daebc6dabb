//! Equipment
//!
//! Named slots for worn armor, two quick-use consumables and the weapon.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::items::{ArmorSlot, ItemKind};

/// Equipment slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Helmet,
    Chestplate,
    Leggings,
    Boots,
    Consumable1,
    Consumable2,
    Weapon,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 7] = [
        EquipmentSlot::Helmet,
        EquipmentSlot::Chestplate,
        EquipmentSlot::Leggings,
        EquipmentSlot::Boots,
        EquipmentSlot::Consumable1,
        EquipmentSlot::Consumable2,
        EquipmentSlot::Weapon,
    ];

    pub const ARMOR: [EquipmentSlot; 4] = [
        EquipmentSlot::Helmet,
        EquipmentSlot::Chestplate,
        EquipmentSlot::Leggings,
        EquipmentSlot::Boots,
    ];

    /// Quick-use slot for index 0 or 1.
    pub fn consumable(index: usize) -> Option<EquipmentSlot> {
        match index {
            0 => Some(EquipmentSlot::Consumable1),
            1 => Some(EquipmentSlot::Consumable2),
            _ => None,
        }
    }
}

impl From<ArmorSlot> for EquipmentSlot {
    fn from(slot: ArmorSlot) -> Self {
        match slot {
            ArmorSlot::Helmet => EquipmentSlot::Helmet,
            ArmorSlot::Chestplate => EquipmentSlot::Chestplate,
            ArmorSlot::Leggings => EquipmentSlot::Leggings,
            ArmorSlot::Boots => EquipmentSlot::Boots,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Equipment {
    slots: BTreeMap<EquipmentSlot, ItemKind>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `item` in `slot`, returning whatever was there.
    pub fn equip(&mut self, slot: EquipmentSlot, item: ItemKind) -> Option<ItemKind> {
        self.slots.insert(slot, item)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<ItemKind> {
        self.slots.remove(&slot)
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<ItemKind> {
        self.slots.get(&slot).copied()
    }

    /// Sum of armor values over the four armor slots.
    pub fn total_armor(&self) -> i32 {
        EquipmentSlot::ARMOR
            .iter()
            .filter_map(|slot| self.get(*slot))
            .filter_map(|item| item.armor())
            .map(|(_, value)| value)
            .sum()
    }

    /// Occupied slots in slot order.
    pub fn all_equipped(&self) -> impl Iterator<Item = (EquipmentSlot, ItemKind)> + '_ {
        self.slots.iter().map(|(s, i)| (*s, *i))
    }
}

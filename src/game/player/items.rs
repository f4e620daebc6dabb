//! Items
//!
//! Everything that can sit in an inventory slot or an equipment slot.
//! Item kinds serialize as snake_case strings, matching save documents.

use serde::{Deserialize, Serialize};

use crate::world::Material;

/// Types of items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    // Mined materials
    Dirt,
    Stone,
    CopperOre,

    // Crafting ingredients
    Wood,
    Leather,
    Herb,
    Water,
    RawMeat,

    // Armor
    LeatherHelmet,
    LeatherChestplate,
    LeatherLeggings,
    LeatherBoots,
    IronHelmet,
    IronChestplate,
    IronLeggings,
    IronBoots,

    // Consumables
    HealthPotion,
    StrengthPotion,
    SpeedPotion,
    CookedMeat,
    Bread,
    Stew,

    // Weapons
    Club,
    Sword,
    Wand,
    Bow,
    WoodenSword,
    IronSword,
    SteelSword,
    LegendarySword,
}

/// Equipment slot an armor piece fits into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorSlot {
    Helmet,
    Chestplate,
    Leggings,
    Boots,
}

/// What using a consumable does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsumableEffect {
    Heal(i32),
    /// Damage multiplier for a number of seconds
    Strength { multiplier: f32, duration: f32 },
    /// Speed multiplier for a number of seconds
    Speed { multiplier: f32, duration: f32 },
}

impl ItemKind {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Dirt => "Dirt",
            ItemKind::Stone => "Stone",
            ItemKind::CopperOre => "Copper Ore",
            ItemKind::Wood => "Wood",
            ItemKind::Leather => "Leather",
            ItemKind::Herb => "Herb",
            ItemKind::Water => "Water",
            ItemKind::RawMeat => "Raw Meat",
            ItemKind::LeatherHelmet => "Leather Helmet",
            ItemKind::LeatherChestplate => "Leather Chestplate",
            ItemKind::LeatherLeggings => "Leather Leggings",
            ItemKind::LeatherBoots => "Leather Boots",
            ItemKind::IronHelmet => "Iron Helmet",
            ItemKind::IronChestplate => "Iron Chestplate",
            ItemKind::IronLeggings => "Iron Leggings",
            ItemKind::IronBoots => "Iron Boots",
            ItemKind::HealthPotion => "Health Potion",
            ItemKind::StrengthPotion => "Strength Potion",
            ItemKind::SpeedPotion => "Speed Potion",
            ItemKind::CookedMeat => "Cooked Meat",
            ItemKind::Bread => "Bread",
            ItemKind::Stew => "Stew",
            ItemKind::Club => "Club",
            ItemKind::Sword => "Sword",
            ItemKind::Wand => "Wand",
            ItemKind::Bow => "Bow",
            ItemKind::WoodenSword => "Wooden Sword",
            ItemKind::IronSword => "Iron Sword",
            ItemKind::SteelSword => "Steel Sword",
            ItemKind::LegendarySword => "Legendary Sword",
        }
    }

    /// Slot and armor value for wearable pieces.
    pub fn armor(&self) -> Option<(ArmorSlot, i32)> {
        match self {
            ItemKind::LeatherHelmet => Some((ArmorSlot::Helmet, 1)),
            ItemKind::LeatherChestplate => Some((ArmorSlot::Chestplate, 2)),
            ItemKind::LeatherLeggings => Some((ArmorSlot::Leggings, 1)),
            ItemKind::LeatherBoots => Some((ArmorSlot::Boots, 1)),
            ItemKind::IronHelmet => Some((ArmorSlot::Helmet, 2)),
            ItemKind::IronChestplate => Some((ArmorSlot::Chestplate, 4)),
            ItemKind::IronLeggings => Some((ArmorSlot::Leggings, 3)),
            ItemKind::IronBoots => Some((ArmorSlot::Boots, 2)),
            _ => None,
        }
    }

    pub fn consumable(&self) -> Option<ConsumableEffect> {
        match self {
            ItemKind::HealthPotion => Some(ConsumableEffect::Heal(30)),
            ItemKind::CookedMeat => Some(ConsumableEffect::Heal(10)),
            ItemKind::Bread => Some(ConsumableEffect::Heal(5)),
            ItemKind::Stew => Some(ConsumableEffect::Heal(20)),
            ItemKind::StrengthPotion => Some(ConsumableEffect::Strength {
                multiplier: 1.5,
                duration: 30.0,
            }),
            ItemKind::SpeedPotion => Some(ConsumableEffect::Speed {
                multiplier: 1.5,
                duration: 30.0,
            }),
            _ => None,
        }
    }

    pub fn as_weapon(&self) -> Option<WeaponKind> {
        match self {
            ItemKind::Club => Some(WeaponKind::Club),
            ItemKind::Sword => Some(WeaponKind::Sword),
            ItemKind::Wand => Some(WeaponKind::Wand),
            ItemKind::Bow => Some(WeaponKind::Bow),
            ItemKind::WoodenSword => Some(WeaponKind::WoodenSword),
            ItemKind::IronSword => Some(WeaponKind::IronSword),
            ItemKind::SteelSword => Some(WeaponKind::SteelSword),
            ItemKind::LegendarySword => Some(WeaponKind::LegendarySword),
            _ => None,
        }
    }

    /// Gold paid by the smith when selling, for mined resources.
    pub fn sell_price(&self) -> Option<u32> {
        match self {
            ItemKind::Dirt => Some(1),
            ItemKind::Stone => Some(2),
            ItemKind::CopperOre => Some(4),
            _ => None,
        }
    }
}

impl From<Material> for ItemKind {
    fn from(material: Material) -> Self {
        match material {
            Material::Dirt => ItemKind::Dirt,
            Material::Stone => ItemKind::Stone,
            Material::CopperOre => ItemKind::CopperOre,
        }
    }
}

/// Projectile fired by a ranged weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileKind {
    Arrow,
    MagicBolt,
    Fireball,
}

/// How a weapon delivers damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackStyle {
    Melee,
    Ranged(ProjectileKind),
}

/// Weapons the player can wield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    Club,
    Sword,
    Wand,
    Bow,
    WoodenSword,
    IronSword,
    SteelSword,
    LegendarySword,
}

impl WeaponKind {
    pub fn base_damage(&self) -> i32 {
        match self {
            WeaponKind::Club => 10,
            WeaponKind::Sword => 15,
            WeaponKind::Wand => 12,
            WeaponKind::Bow => 14,
            WeaponKind::WoodenSword => 12,
            WeaponKind::IronSword => 20,
            WeaponKind::SteelSword => 30,
            WeaponKind::LegendarySword => 45,
        }
    }

    pub fn style(&self) -> AttackStyle {
        match self {
            WeaponKind::Bow => AttackStyle::Ranged(ProjectileKind::Arrow),
            WeaponKind::Wand => AttackStyle::Ranged(ProjectileKind::MagicBolt),
            _ => AttackStyle::Melee,
        }
    }

    pub fn item(&self) -> ItemKind {
        match self {
            WeaponKind::Club => ItemKind::Club,
            WeaponKind::Sword => ItemKind::Sword,
            WeaponKind::Wand => ItemKind::Wand,
            WeaponKind::Bow => ItemKind::Bow,
            WeaponKind::WoodenSword => ItemKind::WoodenSword,
            WeaponKind::IronSword => ItemKind::IronSword,
            WeaponKind::SteelSword => ItemKind::SteelSword,
            WeaponKind::LegendarySword => ItemKind::LegendarySword,
        }
    }

    pub fn name(&self) -> &'static str {
        self.item().name()
    }
}

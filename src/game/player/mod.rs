//! Player Module
//!
//! The player character and what it carries.

pub mod equipment;
pub mod inventory;
pub mod items;
pub mod player;

pub use equipment::{Equipment, EquipmentSlot};
pub use inventory::{HIDDEN_SLOTS, Inventory, ItemStack, TOTAL_SLOTS, VISIBLE_SLOTS};
pub use items::{ArmorSlot, AttackStyle, ConsumableEffect, ItemKind, ProjectileKind, WeaponKind};
pub use player::{Buff, Player};

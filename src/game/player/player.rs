//! Player
//!
//! The player character: a kinematic body plus hit points, gold, weapon,
//! inventory, equipment and temporary potion buffs.

use glam::Vec2;

use super::equipment::{Equipment, EquipmentSlot};
use super::inventory::Inventory;
use super::items::{ConsumableEffect, ItemKind, WeaponKind};
use crate::game::config::PlayerConfig;
use crate::physics::{Damageable, KinematicBody, Movable};

/// Seconds the attack pose lasts after a swing.
const ATTACK_POSE_SECONDS: f32 = 0.2;

/// A timed multiplier from a potion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Buff {
    pub multiplier: f32,
    pub remaining: f32,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub body: KinematicBody,
    hp: i32,
    max_hp: i32,
    pub gold: u32,
    pub weapon: WeaponKind,
    pub weapon_damage: i32,
    /// Seconds until the next attack is allowed
    pub attack_cooldown: f32,
    attack_pose: f32,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub strength: Option<Buff>,
    pub speed: Option<Buff>,
}

impl Player {
    /// New player with its top-left corner at `position`, holding a club.
    pub fn new(position: Vec2, config: &PlayerConfig, tile_size: f32) -> Self {
        let size = Vec2::new(config.size_tiles.0, config.size_tiles.1) * tile_size;
        let mut player = Self {
            body: KinematicBody::new(position, size),
            hp: config.max_hp,
            max_hp: config.max_hp,
            gold: config.starting_gold,
            weapon: WeaponKind::Club,
            weapon_damage: WeaponKind::Club.base_damage(),
            attack_cooldown: 0.0,
            attack_pose: 0.0,
            inventory: Inventory::default(),
            equipment: Equipment::new(),
            strength: None,
            speed: None,
        };
        player.equip_weapon(WeaponKind::Club);
        player
    }

    /// Wield `weapon` at its base damage.
    pub fn equip_weapon(&mut self, weapon: WeaponKind) {
        self.weapon = weapon;
        self.weapon_damage = weapon.base_damage();
        self.equipment.equip(EquipmentSlot::Weapon, weapon.item());
    }

    /// Wear an armor piece, returning the piece it replaced.
    pub fn wear(&mut self, item: ItemKind) -> Option<ItemKind> {
        let (slot, _) = item.armor()?;
        self.equipment.equip(slot.into(), item)
    }

    pub fn set_hp(&mut self, hp: i32) {
        self.hp = hp.clamp(0, self.max_hp);
    }

    pub fn set_max_hp(&mut self, max_hp: i32) {
        self.max_hp = max_hp.max(1);
        self.hp = self.hp.min(self.max_hp);
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
    }

    /// Restore to full health (bedroom).
    pub fn rest(&mut self) {
        self.hp = self.max_hp;
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Spend gold if the balance covers it; otherwise nothing changes.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    pub fn can_attack(&self) -> bool {
        self.attack_cooldown <= 0.0
    }

    /// Start the attack cooldown and pose.
    pub fn begin_attack(&mut self, cooldown: f32) {
        self.attack_cooldown = cooldown;
        self.attack_pose = ATTACK_POSE_SECONDS;
    }

    /// True for a short window after a swing; enemies hold their attacks.
    pub fn is_attacking(&self) -> bool {
        self.attack_pose > 0.0
    }

    /// Weapon damage with the strength buff applied.
    pub fn attack_damage(&self) -> i32 {
        let multiplier = self.strength.map_or(1.0, |b| b.multiplier);
        (self.weapon_damage as f32 * multiplier).round() as i32
    }

    /// Walk speed with the speed buff applied.
    pub fn move_speed(&self, base: f32) -> f32 {
        base * self.speed.map_or(1.0, |b| b.multiplier)
    }

    /// Advance cooldowns and buffs.
    pub fn tick_timers(&mut self, dt: f32) {
        if self.attack_cooldown > 0.0 {
            self.attack_cooldown -= dt;
        }
        if self.attack_pose > 0.0 {
            self.attack_pose -= dt;
        }
        for buff in [&mut self.strength, &mut self.speed] {
            if let Some(b) = buff {
                b.remaining -= dt;
                if b.remaining <= 0.0 {
                    *buff = None;
                }
            }
        }
    }

    /// Apply an effect without touching the inventory.
    pub fn apply_effect(&mut self, effect: ConsumableEffect) {
        match effect {
            ConsumableEffect::Heal(amount) => self.heal(amount),
            ConsumableEffect::Strength { multiplier, duration } => {
                self.strength = Some(Buff { multiplier, remaining: duration });
            }
            ConsumableEffect::Speed { multiplier, duration } => {
                self.speed = Some(Buff { multiplier, remaining: duration });
            }
        }
    }

    /// Consume one unit of the item assigned to quick slot `index`.
    ///
    /// The slot is cleared once the last unit is used. Returns the item used.
    pub fn use_consumable(&mut self, index: usize) -> Option<ItemKind> {
        let slot = EquipmentSlot::consumable(index)?;
        let item = self.equipment.get(slot)?;
        let effect = item.consumable()?;
        if !self.inventory.remove_item(item, 1) {
            return None;
        }
        self.apply_effect(effect);
        if !self.inventory.has_item(item, 1) {
            self.equipment.unequip(slot);
        }
        Some(item)
    }
}

impl Movable for Player {
    fn body(&self) -> &KinematicBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }
}

impl Damageable for Player {
    fn hp(&self) -> i32 {
        self.hp
    }

    fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Armor reduces each hit, but every hit deals at least 1.
    fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = (amount - self.equipment.total_armor()).max(1);
        let before = self.hp;
        self.hp = (self.hp - actual).max(0);
        before - self.hp
    }
}

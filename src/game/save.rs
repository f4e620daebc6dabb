//! Save Documents
//!
//! `SaveData` is the on-disk JSON document:
//! `player`, `day_night`, `quests`, `game_state`.
//! A document is fully validated before any of it is applied, so a bad
//! file never leaves the game half-loaded.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::area::AreaId;
use crate::game::economy::{Clock, ClockSnapshot};
use crate::game::player::{EquipmentSlot, Inventory, ItemKind, ItemStack, Player, WeaponKind};
use crate::physics::Damageable;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to access save file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse save: {0}")]
    Json(#[from] serde_json::Error),
    #[error("inconsistent save: {0}")]
    Invalid(String),
}

/// Inventory as parallel arrays; `counts[i]` is 0 for an empty slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryData {
    pub items: Vec<Option<ItemKind>>,
    pub counts: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub hp: i32,
    pub max_hp: i32,
    pub gold: u32,
    pub position: [f32; 2],
    pub weapon: WeaponKind,
    pub weapon_damage: i32,
    pub inventory: InventoryData,
    pub equipment: BTreeMap<EquipmentSlot, ItemKind>,
}

/// Tutorial and quest bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestProgress {
    pub tutorial_complete: bool,
    pub tutorial_stage: u32,
    pub completed_quests: Vec<String>,
}

impl QuestProgress {
    pub fn complete(&mut self, quest: &str) {
        if !self.is_completed(quest) {
            self.completed_quests.push(quest.to_string());
        }
    }

    pub fn is_completed(&self, quest: &str) -> bool {
        self.completed_quests.iter().any(|q| q == quest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub current_map: AreaId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub player: PlayerData,
    pub day_night: ClockSnapshot,
    #[serde(default)]
    pub quests: QuestProgress,
    pub game_state: SessionData,
}

impl SaveData {
    /// Snapshot the persistent parts of a session.
    pub fn capture(player: &Player, clock: &Clock, quests: &QuestProgress, current_map: AreaId) -> Self {
        let slots = player.inventory.all_items();
        let inventory = InventoryData {
            items: slots.iter().map(|s| s.map(|stack| stack.item)).collect(),
            counts: slots.iter().map(|s| s.map_or(0, |stack| stack.count)).collect(),
        };
        let position = player.body.position();

        Self {
            player: PlayerData {
                hp: player.hp(),
                max_hp: player.max_hp(),
                gold: player.gold,
                position: [position.x, position.y],
                weapon: player.weapon,
                weapon_damage: player.weapon_damage,
                inventory,
                equipment: player.equipment.all_equipped().collect(),
            },
            day_night: clock.snapshot(),
            quests: quests.clone(),
            game_state: SessionData { current_map },
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, SaveError> {
        let data: SaveData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    pub fn to_json_string(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), SaveError> {
        let player = &self.player;
        if player.max_hp <= 0 {
            return Err(SaveError::Invalid(format!("max_hp must be positive, got {}", player.max_hp)));
        }
        if player.hp < 0 || player.hp > player.max_hp {
            return Err(SaveError::Invalid(format!(
                "hp {} outside 0..={}",
                player.hp, player.max_hp
            )));
        }
        if !player.position.iter().all(|v| v.is_finite()) {
            return Err(SaveError::Invalid("position is not finite".to_string()));
        }

        let inventory = &player.inventory;
        if inventory.items.len() != inventory.counts.len() {
            return Err(SaveError::Invalid(format!(
                "inventory has {} items but {} counts",
                inventory.items.len(),
                inventory.counts.len()
            )));
        }
        for (i, (item, count)) in inventory.items.iter().zip(&inventory.counts).enumerate() {
            match (item, count) {
                (Some(_), 0) => {
                    return Err(SaveError::Invalid(format!("slot {i} holds an item with count 0")));
                }
                (None, c) if *c > 0 => {
                    return Err(SaveError::Invalid(format!("empty slot {i} has count {c}")));
                }
                _ => {}
            }
        }

        for (&slot, &item) in &player.equipment {
            let fits = match slot {
                EquipmentSlot::Weapon => item.as_weapon().is_some(),
                EquipmentSlot::Consumable1 | EquipmentSlot::Consumable2 => item.consumable().is_some(),
                armor => item.armor().is_some_and(|(s, _)| EquipmentSlot::from(s) == armor),
            };
            if !fits {
                return Err(SaveError::Invalid(format!("{item:?} cannot be equipped in {slot:?}")));
            }
        }
        Ok(())
    }

    /// Overwrite the player and clock with this snapshot.
    ///
    /// Validates first; on error nothing is touched.
    pub fn apply(&self, player: &mut Player, clock: &mut Clock) -> Result<(), SaveError> {
        self.validate()?;
        let data = &self.player;

        let slots = data
            .inventory
            .items
            .iter()
            .zip(&data.inventory.counts)
            .map(|(item, &count)| item.map(|item| ItemStack { item, count }))
            .collect();

        player.set_max_hp(data.max_hp);
        player.set_hp(data.hp);
        player.gold = data.gold;
        player.equip_weapon(data.weapon);
        player.weapon_damage = data.weapon_damage;
        player.inventory = Inventory::from_slots(slots);
        for slot in EquipmentSlot::ALL {
            player.equipment.unequip(slot);
        }
        for (&slot, &item) in &data.equipment {
            player.equipment.equip(slot, item);
        }
        player.body.place_at(Vec2::from(data.position));

        clock.restore(&self.day_night);
        Ok(())
    }
}

/// A save document on disk.
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn io_error(&self, source: std::io::Error) -> SaveError {
        SaveError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    pub fn write(&self, data: &SaveData) -> Result<(), SaveError> {
        let json = data.to_json_string()?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        log::info!("Saved game to {}", self.path.display());
        Ok(())
    }

    pub fn read(&self) -> Result<SaveData, SaveError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let data = SaveData::from_json_str(&text)?;
        log::info!("Loaded save from {}", self.path.display());
        Ok(data)
    }

    /// Read the save, treating any failure as "no save found".
    pub fn read_or_none(&self) -> Option<SaveData> {
        match self.read() {
            Ok(data) => Some(data),
            Err(err) => {
                log::warn!("Ignoring save: {err}");
                None
            }
        }
    }
}

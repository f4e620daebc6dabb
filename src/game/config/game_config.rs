//! Game Configuration
//!
//! Centralized tuning for the simulation. `Default` returns the shipped
//! tuning; every section is `#[serde(default)]` so a JSON file only needs to
//! name the values it overrides.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::enemy::EnemyKind;
use crate::game::systems::spawn_system::SpawnRule;
use crate::physics::{BallisticsConfig, ResolverConfig};
use crate::world::GridConfig;

/// Failure to load or validate a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Player tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Walk speed (pixels/second)
    pub speed: f32,
    pub max_hp: i32,
    /// Body size in tiles (width, height)
    pub size_tiles: (f32, f32),
    /// Seconds between attacks
    pub attack_cooldown: f32,
    pub starting_gold: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 300.0,
            max_hp: 100,
            size_tiles: (1.0, 2.0),
            attack_cooldown: 0.5,
            starting_gold: 0,
        }
    }
}

/// Melee, mining and placement tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Melee hitbox width as a multiple of the attacker's body width
    pub melee_reach_factor: f32,
    /// Mining radius in tiles, measured from the player center
    pub mining_radius_tiles: f32,
    /// Durability removed per mining hit
    pub mining_damage: i32,
    /// Chance per destroyed block to find bonus gold
    pub bonus_gold_chance: f64,
    /// Inclusive bonus gold range
    pub bonus_gold_min: u32,
    pub bonus_gold_max: u32,
    /// Placement range as a multiple of the mining radius
    pub placement_range_factor: f32,
    /// Platforms may only be placed at or below this grid row
    pub placement_min_row: i32,
    pub crit_chance: f64,
    pub crit_multiplier: f32,
    /// Knockback impulse on melee hits (pixels/second)
    pub knockback_force: f32,
    /// Seconds a knocked-back enemy slides before its AI steers again
    pub knockback_duration: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            melee_reach_factor: 1.5,
            mining_radius_tiles: 4.5,
            mining_damage: 8,
            bonus_gold_chance: 0.1,
            bonus_gold_min: 1,
            bonus_gold_max: 5,
            placement_range_factor: 1.5,
            placement_min_row: 10,
            crit_chance: 0.0,
            crit_multiplier: 2.0,
            knockback_force: 200.0,
            knockback_duration: 0.2,
        }
    }
}

/// Base stats for one enemy kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub hp: i32,
    pub damage: i32,
    /// Walk speed (pixels/second)
    pub speed: f32,
    /// Gold awarded on kill
    pub coins: u32,
}

/// Enemy AI tuning and the per-kind stat table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub stats: HashMap<EnemyKind, EnemyStats>,
    /// Body size in tiles (width, height)
    pub size_tiles: (f32, f32),
    /// Chase threshold (pixels)
    pub aggro_radius: f32,
    /// Chase threshold after taking damage (pixels)
    pub alerted_aggro_radius: f32,
    /// Attack threshold (pixels)
    pub attack_range: f32,
    /// Seconds between patrol direction flips
    pub patrol_flip_interval: f32,
    /// Patrol speed as a fraction of walk speed
    pub patrol_speed_factor: f32,
    /// No horizontal chase inside this distance (pixels)
    pub chase_deadzone: f32,
    /// Jump at the player only when horizontally within this band (pixels)
    pub jump_band: f32,
    pub jump_velocity: f32,
    pub attack_cooldown: f32,
    pub boss_hp_multiplier: i32,
    pub boss_damage_multiplier: i32,
    pub boss_coin_multiplier: u32,
    pub boss_special_cooldown: f32,
    /// Boss area attack radius (pixels)
    pub boss_special_radius: f32,
}

impl EnemyConfig {
    /// Stats for `kind`, falling back to the goblin row when missing.
    pub fn stats_for(&self, kind: EnemyKind) -> EnemyStats {
        self.stats
            .get(&kind)
            .or_else(|| self.stats.get(&EnemyKind::Goblin))
            .copied()
            .unwrap_or_else(|| default_stats(EnemyKind::Goblin))
    }
}

fn default_stats(kind: EnemyKind) -> EnemyStats {
    match kind {
        EnemyKind::Goblin => EnemyStats { hp: 30, damage: 5, speed: 80.0, coins: 5 },
        EnemyKind::Skeleton => EnemyStats { hp: 50, damage: 8, speed: 60.0, coins: 10 },
        EnemyKind::Orc => EnemyStats { hp: 80, damage: 12, speed: 50.0, coins: 15 },
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        let tile = 32.0;
        Self {
            stats: EnemyKind::ALL.iter().map(|&k| (k, default_stats(k))).collect(),
            size_tiles: (1.0, 2.0),
            aggro_radius: 300.0,
            alerted_aggro_radius: 500.0,
            attack_range: tile * 2.0,
            patrol_flip_interval: 3.0,
            patrol_speed_factor: 0.5,
            chase_deadzone: tile / 2.0,
            jump_band: tile * 3.0,
            jump_velocity: -400.0,
            attack_cooldown: 1.0,
            boss_hp_multiplier: 5,
            boss_damage_multiplier: 2,
            boss_coin_multiplier: 10,
            boss_special_cooldown: 8.0,
            boss_special_radius: tile * 3.0,
        }
    }
}

/// Day/night cycle tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Seconds per full day/night cycle
    pub cycle_duration: f32,
    /// Regenerate the shaft every N days
    pub reset_every_days: u32,
    /// Darkness overlay alpha at full night
    pub max_overlay_alpha: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            cycle_duration: 600.0,
            reset_every_days: 7,
            max_overlay_alpha: 150.0,
        }
    }
}

/// Ranged weapon tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub ballistics: BallisticsConfig,
    pub arrow_speed: f32,
    pub arrow_gravity_scale: f32,
    pub magic_bolt_speed: f32,
    pub fireball_speed: f32,
    /// Fireball explosion radius (pixels)
    pub fireball_radius: f32,
    pub max_projectiles: usize,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            ballistics: BallisticsConfig::default(),
            arrow_speed: 400.0,
            arrow_gravity_scale: 0.3,
            magic_bolt_speed: 500.0,
            fireball_speed: 300.0,
            fireball_radius: 64.0,
            max_projectiles: 64,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid: GridConfig,
    pub physics: ResolverConfig,
    pub player: PlayerConfig,
    pub combat: CombatConfig,
    pub enemy: EnemyConfig,
    pub clock: ClockConfig,
    pub spawn: Vec<SpawnRule>,
    pub projectiles: ProjectileConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            physics: ResolverConfig::default(),
            player: PlayerConfig::default(),
            combat: CombatConfig::default(),
            enemy: EnemyConfig::default(),
            clock: ClockConfig::default(),
            spawn: SpawnRule::defaults(),
            projectiles: ProjectileConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path`, or fall back to defaults with a warning.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Using default config: {err}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.tile_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be positive, got {}",
                self.grid.tile_size
            )));
        }
        if self.clock.cycle_duration <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cycle_duration must be positive, got {}",
                self.clock.cycle_duration
            )));
        }
        for rule in &self.spawn {
            if rule.interval <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "spawn interval for {:?} must be positive, got {}",
                    rule.kind, rule.interval
                )));
            }
            if !(0.0..=1.0).contains(&rule.rate) {
                return Err(ConfigError::Invalid(format!(
                    "spawn rate for {:?} must be within [0, 1], got {}",
                    rule.kind, rule.rate
                )));
            }
        }
        Ok(())
    }

    /// Mining radius in pixels.
    pub fn mining_radius(&self) -> f32 {
        self.combat.mining_radius_tiles * self.grid.tile_size
    }
}

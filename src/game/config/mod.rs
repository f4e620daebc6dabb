//! Config Module
//!
//! Centralized configuration for world geometry and gameplay parameters.

pub mod game_config;

pub use game_config::{
    ClockConfig, CombatConfig, ConfigError, EnemyConfig, EnemyStats, GameConfig, PlayerConfig,
    ProjectileConfig,
};

//! Game Module
//!
//! Contains game-specific systems that build on top of the engine.

pub mod area;
pub mod config;
pub mod economy;
pub mod enemy;
pub mod player;
pub mod save;
pub mod state;
pub mod systems;

pub use area::{AreaId, AreaManager, Building, BuildingKind, World};
pub use config::{ConfigError, GameConfig};
pub use economy::{Clock, DayPhase};
pub use enemy::{AiState, Enemy, EnemyId, EnemyKind};
pub use player::{Inventory, ItemKind, Player, WeaponKind};
pub use save::{QuestProgress, SaveData, SaveError, SaveFile};
pub use state::{GameState, TickEvents};
pub use systems::{CombatSystem, MineOutcome, PlaceError, ProjectileSystem, SpawnDirector, SpawnRule};

//! Game systems: self-contained modules that own state and logic.

pub mod combat_system;
pub mod projectile_system;
pub mod spawn_system;

pub use combat_system::{CombatSystem, MeleeOutcome, MineOutcome, PlaceError};
pub use projectile_system::{ProjectileHit, ProjectileSystem};
pub use spawn_system::{SpawnDirector, SpawnRule, depth_level};

//! Enemy Module
//!
//! Hostile creatures, their stat table and the chase/attack AI.

pub mod ai;
pub mod enemy;
pub mod kinds;

pub use ai::{AiOutcome, choose_state, update_enemy};
pub use enemy::{Enemy, EnemyId};
pub use kinds::{AiState, BossAbility, EnemyKind};

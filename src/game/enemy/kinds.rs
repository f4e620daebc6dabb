//! Enemy kinds

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Goblin,
    Skeleton,
    Orc,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Goblin, EnemyKind::Skeleton, EnemyKind::Orc];

    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Goblin => "goblin",
            EnemyKind::Skeleton => "skeleton",
            EnemyKind::Orc => "orc",
        }
    }
}

/// Per-enemy AI state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    /// Wandering back and forth at half speed
    #[default]
    Patrol,
    /// Walking toward the player
    Chase,
    /// Standing still and hitting the player on cooldown
    Attack,
}

/// Area attack carried by boss enemies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossAbility {
    /// Seconds between uses
    pub cooldown: f32,
    /// Seconds until the next use
    pub timer: f32,
    /// Reach from the boss center (pixels)
    pub radius: f32,
}

impl BossAbility {
    pub fn new(cooldown: f32, radius: f32) -> Self {
        Self {
            cooldown,
            timer: cooldown,
            radius,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer -= dt;
        }
    }

    pub fn is_ready(&self) -> bool {
        self.timer <= 0.0
    }

    pub fn trigger(&mut self) {
        self.timer = self.cooldown;
    }
}

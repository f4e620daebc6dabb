//! Enemy entity
//!
//! Stats come from the kind's row in [`EnemyConfig`]. A boss is the same
//! entity with scaled stats and a [`BossAbility`].

use glam::Vec2;

use super::kinds::{AiState, BossAbility, EnemyKind};
use crate::game::config::EnemyConfig;
use crate::physics::{Damageable, KinematicBody, Movable};

/// Stable identity of an enemy within one world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u32);

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub body: KinematicBody,
    hp: i32,
    max_hp: i32,
    /// Contact damage per attack, before armor
    pub damage: i32,
    /// Walk speed (pixels/second)
    pub speed: f32,
    /// Gold awarded to the killer
    pub coins: u32,
    pub state: AiState,
    /// Seconds until the next attack
    pub attack_cooldown: f32,
    /// Current chase threshold (pixels); only ever grows
    pub aggro_radius: f32,
    alerted_radius: f32,
    /// Patrol direction, -1 or +1
    pub patrol_dir: f32,
    pub patrol_timer: f32,
    /// Seconds left sliding from a knockback; the AI does not steer meanwhile
    pub stagger: f32,
    pub boss: Option<BossAbility>,
}

impl Enemy {
    /// Regular enemy with its top-left corner at `position`.
    pub fn new(id: EnemyId, kind: EnemyKind, position: Vec2, config: &EnemyConfig, tile_size: f32) -> Self {
        let stats = config.stats_for(kind);
        let size = Vec2::new(config.size_tiles.0, config.size_tiles.1) * tile_size;
        Self {
            id,
            kind,
            body: KinematicBody::new(position, size),
            hp: stats.hp,
            max_hp: stats.hp,
            damage: stats.damage,
            speed: stats.speed,
            coins: stats.coins,
            state: AiState::Patrol,
            attack_cooldown: 0.0,
            aggro_radius: config.aggro_radius,
            alerted_radius: config.alerted_aggro_radius,
            patrol_dir: 1.0,
            patrol_timer: 0.0,
            stagger: 0.0,
            boss: None,
        }
    }

    /// Boss variant: multiplied hp, damage and reward plus an area attack.
    pub fn boss(id: EnemyId, kind: EnemyKind, position: Vec2, config: &EnemyConfig, tile_size: f32) -> Self {
        let mut enemy = Self::new(id, kind, position, config, tile_size);
        enemy.max_hp *= config.boss_hp_multiplier;
        enemy.hp = enemy.max_hp;
        enemy.damage *= config.boss_damage_multiplier;
        enemy.coins *= config.boss_coin_multiplier;
        enemy.boss = Some(BossAbility::new(config.boss_special_cooldown, config.boss_special_radius));
        enemy
    }

    pub fn is_boss(&self) -> bool {
        self.boss.is_some()
    }

    /// Add a knockback impulse and let it carry the body for `duration` seconds.
    pub fn knock_back(&mut self, impulse: Vec2, duration: f32) {
        self.body.velocity += impulse;
        self.stagger = self.stagger.max(duration);
    }

    pub fn is_staggered(&self) -> bool {
        self.stagger > 0.0
    }

    /// Has been hit at least once.
    pub fn is_alerted(&self) -> bool {
        self.aggro_radius >= self.alerted_radius
    }
}

impl Movable for Enemy {
    fn body(&self) -> &KinematicBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }
}

impl Damageable for Enemy {
    fn hp(&self) -> i32 {
        self.hp
    }

    fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Any hit raises the aggro radius to the alerted value for good.
    fn take_damage(&mut self, amount: i32) -> i32 {
        let amount = amount.max(0);
        self.hp -= amount;
        self.aggro_radius = self.aggro_radius.max(self.alerted_radius);
        amount
    }
}

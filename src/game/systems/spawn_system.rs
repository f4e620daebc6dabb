//! Enemy spawn director.
//!
//! Each registered rule has its own attempt timer. When a timer elapses the
//! director checks the population cap, the rule's day/night and depth window,
//! then rolls against the rule's spawn rate. Spawns land on a random cell of
//! the active world; they are not biased toward the player.
//!
//! A kind may have two rules, one for regular enemies and one for bosses.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::area::World;
use crate::game::config::EnemyConfig;
use crate::game::enemy::{EnemyId, EnemyKind};

/// Spawn window and rate for one enemy kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnRule {
    pub kind: EnemyKind,
    /// May spawn during the day
    pub day: bool,
    /// May spawn at night
    pub night: bool,
    /// Inclusive minimum depth level
    #[serde(default)]
    pub min_depth: u32,
    /// Inclusive maximum depth level, unbounded when absent
    #[serde(default)]
    pub max_depth: Option<u32>,
    /// Probability that an attempt spawns (0..=1)
    pub rate: f64,
    /// Seconds between attempts
    pub interval: f32,
    /// Live population cap for this rule
    pub max_count: usize,
    /// Spawn the boss variant; counted apart from regular enemies
    #[serde(default)]
    pub boss: bool,
}

impl SpawnRule {
    /// The rule set used by a fresh game.
    pub fn defaults() -> Vec<SpawnRule> {
        vec![
            SpawnRule {
                kind: EnemyKind::Goblin,
                day: true,
                night: true,
                min_depth: 0,
                max_depth: None,
                rate: 0.3,
                interval: 5.0,
                max_count: 5,
                boss: false,
            },
            SpawnRule {
                kind: EnemyKind::Skeleton,
                day: false,
                night: true,
                min_depth: 5,
                max_depth: None,
                rate: 0.2,
                interval: 8.0,
                max_count: 4,
                boss: false,
            },
            SpawnRule {
                kind: EnemyKind::Orc,
                day: true,
                night: true,
                min_depth: 10,
                max_depth: None,
                rate: 0.15,
                interval: 10.0,
                max_count: 3,
                boss: false,
            },
            SpawnRule {
                kind: EnemyKind::Orc,
                day: false,
                night: true,
                min_depth: 20,
                max_depth: None,
                rate: 0.1,
                interval: 30.0,
                max_count: 1,
                boss: true,
            },
        ]
    }

    /// Whether the (day/night, depth) pair falls inside this rule's window.
    pub fn allows(&self, is_day: bool, depth: u32) -> bool {
        let time_ok = if is_day { self.day } else { self.night };
        time_ok && depth >= self.min_depth && self.max_depth.is_none_or(|max| depth <= max)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpawnDirector {
    rules: Vec<SpawnRule>,
    /// Seconds toward the next attempt, one per rule
    timers: Vec<f32>,
}

impl SpawnDirector {
    pub fn new(rules: Vec<SpawnRule>) -> Self {
        let mut director = Self::default();
        for rule in rules {
            director.register(rule);
        }
        director
    }

    /// Add or replace the rule for a kind and boss flag; its timer restarts.
    pub fn register(&mut self, rule: SpawnRule) {
        let existing = self
            .rules
            .iter()
            .position(|r| r.kind == rule.kind && r.boss == rule.boss);
        match existing {
            Some(index) => {
                self.rules[index] = rule;
                self.timers[index] = 0.0;
            }
            None => {
                self.rules.push(rule);
                self.timers.push(0.0);
            }
        }
    }

    pub fn rules(&self) -> &[SpawnRule] {
        &self.rules
    }

    /// Seconds accumulated toward the next regular attempt for `kind`.
    pub fn timer(&self, kind: EnemyKind) -> Option<f32> {
        self.rules
            .iter()
            .position(|r| r.kind == kind && !r.boss)
            .and_then(|index| self.timers.get(index).copied())
    }

    /// Advance every timer and run the attempts that came due.
    ///
    /// Returns the ids of enemies spawned this tick.
    pub fn update(
        &mut self,
        dt: f32,
        world: &mut World,
        is_day: bool,
        depth: u32,
        config: &EnemyConfig,
        rng: &mut impl Rng,
    ) -> Vec<EnemyId> {
        let mut spawned = Vec::new();

        for (rule, timer) in self.rules.iter().zip(self.timers.iter_mut()) {
            *timer += dt;
            if *timer < rule.interval {
                continue;
            }
            *timer = 0.0;

            if world.count_spawned(rule.kind, rule.boss) >= rule.max_count || !rule.allows(is_day, depth) {
                continue;
            }
            if rng.random::<f64>() >= rule.rate {
                continue;
            }

            let grid = *world.grid();
            // Bodies are two cells tall; keep them off the bottom border.
            let cell = IVec2::new(
                rng.random_range(0..grid.width),
                rng.random_range(0..(grid.height - 1).max(1)),
            );
            let id = if rule.boss {
                log::info!("Boss {} spawned at cell ({}, {})", rule.kind.name(), cell.x, cell.y);
                world.spawn_boss(rule.kind, cell, config)
            } else {
                log::debug!("Spawned {} at cell ({}, {})", rule.kind.name(), cell.x, cell.y);
                world.spawn_enemy(rule.kind, cell, config)
            };
            spawned.push(id);
        }

        spawned
    }
}

/// Depth level of a y position below an entry height.
pub fn depth_level(world: &World, origin_y: f32, y: f32) -> u32 {
    world.grid().depth_level(origin_y, y)
}

//! Projectile lifecycle management system.
//!
//! Owns the player's projectiles in flight and their tuning, providing
//! fire / update / hit resolution / iterate operations.
//!
//! A tick is two calls: [`ProjectileSystem::update`] moves every projectile
//! against the tile grid, then [`ProjectileSystem::resolve_hits`] tests the
//! survivors against enemies, detonates fireballs that went out this tick
//! and drops everything inactive.

use glam::Vec2;

use crate::game::config::ProjectileConfig;
use crate::game::enemy::{Enemy, EnemyId};
use crate::game::player::ProjectileKind;
use crate::physics::ballistics::Projectile;
use crate::physics::Damageable;
use crate::world::TileGrid;

#[derive(Debug, Clone)]
struct ActiveProjectile {
    projectile: Projectile,
    kind: ProjectileKind,
    damage: i32,
    /// Keeps flying after hitting an enemy
    piercing: bool,
    /// Area damage radius when the projectile goes out
    explosion_radius: Option<f32>,
    exploded: bool,
    /// Enemies already struck; a piercing projectile hits each one once
    struck: Vec<EnemyId>,
}

/// Damage a projectile dealt to one enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileHit {
    pub enemy: EnemyId,
    pub kind: ProjectileKind,
    pub damage: i32,
    /// Dealt by a fireball explosion rather than a direct hit
    pub splash: bool,
}

/// Manages the full lifecycle of the player's projectiles.
#[derive(Debug, Clone)]
pub struct ProjectileSystem {
    projectiles: Vec<ActiveProjectile>,
    config: ProjectileConfig,
    /// Maximum number of simultaneously active projectiles.
    pub max_projectiles: usize,
}

impl Default for ProjectileSystem {
    fn default() -> Self {
        Self::new(ProjectileConfig::default())
    }
}

impl ProjectileSystem {
    pub fn new(config: ProjectileConfig) -> Self {
        Self {
            projectiles: Vec::new(),
            max_projectiles: config.max_projectiles,
            config,
        }
    }

    /// Fire a projectile of `kind` from `origin` toward `target`.
    ///
    /// Returns `true` if the projectile was added.
    pub fn fire(&mut self, kind: ProjectileKind, origin: Vec2, target: Vec2, damage: i32) -> bool {
        let ballistics = &self.config.ballistics;
        let (projectile, explosion_radius) = match kind {
            ProjectileKind::Arrow => {
                let mut p = Projectile::aimed(origin, target, self.config.arrow_speed, ballistics);
                p.gravity_scale = self.config.arrow_gravity_scale;
                (p, None)
            }
            ProjectileKind::MagicBolt => (
                Projectile::aimed(origin, target, self.config.magic_bolt_speed, ballistics),
                None,
            ),
            ProjectileKind::Fireball => (
                Projectile::aimed(origin, target, self.config.fireball_speed, ballistics),
                Some(self.config.fireball_radius),
            ),
        };
        self.fire_projectile(projectile, kind, damage, false, explosion_radius)
    }

    /// Add a pre-built projectile.
    ///
    /// Returns `true` if the projectile was added.
    pub fn fire_projectile(
        &mut self,
        projectile: Projectile,
        kind: ProjectileKind,
        damage: i32,
        piercing: bool,
        explosion_radius: Option<f32>,
    ) -> bool {
        if self.projectiles.len() >= self.max_projectiles {
            return false;
        }
        self.projectiles.push(ActiveProjectile {
            projectile,
            kind,
            damage,
            piercing,
            explosion_radius,
            exploded: false,
            struck: Vec::new(),
        });
        true
    }

    /// Integrate every projectile against the tile grid.
    ///
    /// Projectiles that hit a tile or expire turn inactive here and are
    /// dropped by the next [`resolve_hits`](Self::resolve_hits).
    pub fn update(&mut self, grid: &TileGrid, dt: f32) {
        for active in &mut self.projectiles {
            active.projectile.integrate(&self.config.ballistics, grid, dt);
        }
    }

    /// Apply projectile damage to `enemies`, then remove spent projectiles.
    ///
    /// Each active projectile strikes every overlapping enemy it has not hit
    /// before; a non-piercing one stops at the first. Any projectile with an
    /// explosion radius that is inactive by the end of this step detonates
    /// once, damaging each not-yet-struck enemy whose center lies within
    /// the radius.
    pub fn resolve_hits(&mut self, enemies: &mut [Enemy]) -> Vec<ProjectileHit> {
        let mut hits = Vec::new();

        for active in &mut self.projectiles {
            if active.projectile.active {
                for enemy in enemies.iter_mut() {
                    if enemy.is_dead()
                        || active.struck.contains(&enemy.id)
                        || !active.projectile.rect.overlaps(&enemy.body.rect)
                    {
                        continue;
                    }
                    enemy.take_damage(active.damage);
                    active.struck.push(enemy.id);
                    hits.push(ProjectileHit {
                        enemy: enemy.id,
                        kind: active.kind,
                        damage: active.damage,
                        splash: false,
                    });
                    if !active.piercing {
                        active.projectile.active = false;
                        break;
                    }
                }
            }

            if active.projectile.active || active.exploded {
                continue;
            }
            let Some(radius) = active.explosion_radius else {
                continue;
            };
            active.exploded = true;
            let blast = active.projectile.center();
            for enemy in enemies.iter_mut() {
                if enemy.is_dead()
                    || active.struck.contains(&enemy.id)
                    || enemy.body.center().distance(blast) > radius
                {
                    continue;
                }
                enemy.take_damage(active.damage);
                active.struck.push(enemy.id);
                hits.push(ProjectileHit {
                    enemy: enemy.id,
                    kind: active.kind,
                    damage: active.damage,
                    splash: true,
                });
            }
            log::debug!("Fireball exploded at ({:.0}, {:.0})", blast.x, blast.y);
        }

        self.projectiles.retain(|p| p.projectile.active);
        hits
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }

    pub fn active_count(&self) -> usize {
        self.projectiles.len()
    }

    /// Iterate over live projectiles (e.g. for sprite drawing).
    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter().map(|active| &active.projectile)
    }

    pub fn iter_with_kind(&self) -> impl Iterator<Item = (&Projectile, ProjectileKind)> {
        self.projectiles
            .iter()
            .map(|active| (&active.projectile, active.kind))
    }

    pub fn config(&self) -> &ProjectileConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::EnemyConfig;
    use crate::game::enemy::EnemyKind;
    use crate::physics::ballistics::BallisticsConfig;
    use crate::world::{GridConfig, Material};
    use glam::IVec2;

    const DT: f32 = 1.0 / 60.0;

    fn open_grid() -> TileGrid {
        TileGrid::new(GridConfig::default().with_size(60, 30))
    }

    fn goblin(id: u32, x: f32, y: f32) -> Enemy {
        Enemy::new(EnemyId(id), EnemyKind::Goblin, Vec2::new(x, y), &EnemyConfig::default(), 32.0)
    }

    #[test]
    fn test_fire_respects_limit() {
        let mut system = ProjectileSystem::default();
        system.max_projectiles = 2;
        assert!(system.fire(ProjectileKind::Arrow, Vec2::ZERO, Vec2::X, 14));
        assert!(system.fire(ProjectileKind::MagicBolt, Vec2::ZERO, Vec2::X, 12));
        assert!(!system.fire(ProjectileKind::Arrow, Vec2::ZERO, Vec2::X, 14));
        assert_eq!(system.active_count(), 2);
    }

    #[test]
    fn test_arrow_drops_bolt_flies_straight() {
        let grid = open_grid();
        let mut system = ProjectileSystem::default();
        system.fire(ProjectileKind::Arrow, Vec2::new(100.0, 300.0), Vec2::new(500.0, 300.0), 14);
        system.fire(ProjectileKind::MagicBolt, Vec2::new(100.0, 300.0), Vec2::new(500.0, 300.0), 12);

        for _ in 0..30 {
            system.update(&grid, DT);
        }
        let mut flight = system.iter_with_kind();
        let (arrow, _) = flight.next().map(|(p, k)| (*p, k)).unwrap();
        let (bolt, _) = flight.next().map(|(p, k)| (*p, k)).unwrap();
        assert!(arrow.center().y > 300.0);
        assert!((bolt.center().y - 300.0).abs() < 1e-3);
        assert!(bolt.center().x > arrow.center().x);
    }

    #[test]
    fn test_non_piercing_stops_at_first_enemy() {
        let grid = open_grid();
        let mut system = ProjectileSystem::default();
        let mut enemies = vec![goblin(0, 200.0, 280.0), goblin(1, 200.0, 280.0)];
        system.fire(ProjectileKind::MagicBolt, Vec2::new(150.0, 300.0), Vec2::new(400.0, 300.0), 12);

        let mut hits = Vec::new();
        for _ in 0..10 {
            system.update(&grid, DT);
            hits.extend(system.resolve_hits(&mut enemies));
        }
        assert_eq!(hits.len(), 1);
        assert_eq!(enemies[0].hp(), 18);
        assert_eq!(enemies[1].hp(), 30);
        assert_eq!(system.active_count(), 0);
    }

    #[test]
    fn test_piercing_hits_each_enemy_once() {
        let grid = open_grid();
        let config = BallisticsConfig::default();
        let mut system = ProjectileSystem::default();
        let mut enemies = vec![goblin(0, 200.0, 280.0), goblin(1, 260.0, 280.0)];
        let bolt = Projectile::aimed(Vec2::new(150.0, 300.0), Vec2::new(400.0, 300.0), 500.0, &config);
        system.fire_projectile(bolt, ProjectileKind::MagicBolt, 5, true, None);

        for _ in 0..20 {
            system.update(&grid, DT);
            system.resolve_hits(&mut enemies);
        }
        assert_eq!(enemies[0].hp(), 25);
        assert_eq!(enemies[1].hp(), 25);
    }

    #[test]
    fn test_fireball_explodes_on_wall() {
        let mut grid = open_grid();
        for y in 0..30 {
            grid.add_tile(IVec2::new(10, y), Material::Stone, false);
        }
        let mut system = ProjectileSystem::default();
        // Standing next to the wall but out of the fireball's path
        let mut enemies = vec![goblin(0, 280.0, 310.0), goblin(1, 100.0, 500.0)];
        system.fire(ProjectileKind::Fireball, Vec2::new(200.0, 300.0), Vec2::new(400.0, 300.0), 20);

        let mut hits = Vec::new();
        for _ in 0..60 {
            system.update(&grid, DT);
            hits.extend(system.resolve_hits(&mut enemies));
        }
        assert_eq!(hits.len(), 1);
        assert!(hits[0].splash);
        assert_eq!(enemies[0].hp(), 10);
        assert_eq!(enemies[1].hp(), 30);
        assert_eq!(system.active_count(), 0);
    }
}

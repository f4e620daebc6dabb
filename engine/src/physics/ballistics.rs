//! Ballistics simulation for projectile trajectories
//!
//! Small square projectiles (arrows, bolts, fireballs) that fly in a straight
//! line or along a gravity-biased arc until they hit a tile or run out of
//! lifetime.
//!
//! # Example
//!
//! ```ignore
//! use eldoria_engine::physics::ballistics::{Projectile, BallisticsConfig, ProjectileState};
//! use glam::Vec2;
//!
//! let config = BallisticsConfig::default();
//! let mut arrow = Projectile::spawn(Vec2::new(0.0, 0.0), Vec2::X, 400.0, &config);
//! arrow.gravity_scale = 0.3;
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, collision_normal};
use crate::world::TileGrid;

/// A projectile in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Collision box (pixels)
    pub rect: Rect,
    /// Current velocity (pixels/second)
    pub velocity: Vec2,
    /// Fraction of world gravity applied (0 = straight line)
    pub gravity_scale: f32,
    /// Seconds left before the projectile expires
    pub lifetime: f32,
    /// Whether the projectile is still being simulated
    pub active: bool,
}

impl Projectile {
    /// Spawn a projectile centered on `origin` heading along `direction`.
    ///
    /// A zero direction produces a projectile that only falls (or hovers,
    /// without gravity) until it expires.
    pub fn spawn(origin: Vec2, direction: Vec2, speed: f32, config: &BallisticsConfig) -> Self {
        Self {
            rect: Rect::from_center(origin, Vec2::splat(config.size)),
            velocity: direction.normalize_or_zero() * speed,
            gravity_scale: 0.0,
            lifetime: config.lifetime,
            active: true,
        }
    }

    /// Spawn a projectile aimed from `origin` at `target`.
    pub fn aimed(origin: Vec2, target: Vec2, speed: f32, config: &BallisticsConfig) -> Self {
        Self::spawn(origin, target - origin, speed, config)
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Heading in radians, for sprite rotation.
    pub fn angle(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }

    /// Integrate one step: gravity, motion, lifetime, then tile contact.
    ///
    /// One-way platforms never stop projectiles.
    pub fn integrate(&mut self, config: &BallisticsConfig, grid: &TileGrid, dt: f32) -> ProjectileState {
        if !self.active {
            return ProjectileState::Expired;
        }

        self.velocity.y += config.gravity * self.gravity_scale * dt;
        self.rect.pos += self.velocity * dt;

        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            self.active = false;
            return ProjectileState::Expired;
        }

        let hit = grid
            .tiles_overlapping(&self.rect)
            .into_iter()
            .find(|tile| !tile.is_platform());
        if let Some(tile) = hit {
            self.active = false;
            return ProjectileState::Hit {
                position: self.center(),
                normal: collision_normal(&self.rect, &tile.rect),
            };
        }

        ProjectileState::Flying
    }
}

/// Global projectile parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallisticsConfig {
    /// Gravity before per-projectile scaling (pixels/second²)
    pub gravity: f32,
    /// Seconds a projectile may fly before expiring
    pub lifetime: f32,
    /// Edge length of the projectile box (pixels)
    pub size: f32,
}

impl Default for BallisticsConfig {
    fn default() -> Self {
        Self {
            gravity: 1200.0,
            lifetime: 5.0,
            size: 8.0,
        }
    }
}

/// The current state of a projectile in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ProjectileState {
    /// Projectile is still flying
    #[default]
    Flying,
    /// Projectile has struck a tile
    Hit {
        /// Projectile center at impact (pixels)
        position: Vec2,
        /// Axis normal of the struck tile face
        normal: Vec2,
    },
    /// Projectile has exceeded its lifetime or was already inactive
    Expired,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{GridConfig, Material};
    use glam::IVec2;

    fn open_grid() -> TileGrid {
        TileGrid::new(GridConfig::default().with_size(40, 20))
    }

    #[test]
    fn test_spawn_normalizes_direction() {
        let config = BallisticsConfig::default();
        let p = Projectile::spawn(Vec2::new(100.0, 100.0), Vec2::new(3.0, 4.0), 500.0, &config);
        assert!((p.velocity.length() - 500.0).abs() < 1e-3);
        assert_eq!(p.center(), Vec2::new(100.0, 100.0));
        assert!(p.active);
    }

    #[test]
    fn test_straight_flight_without_gravity() {
        let config = BallisticsConfig::default();
        let grid = open_grid();
        let mut p = Projectile::spawn(Vec2::new(100.0, 100.0), Vec2::X, 500.0, &config);
        let state = p.integrate(&config, &grid, 0.1);
        assert_eq!(state, ProjectileState::Flying);
        assert_eq!(p.velocity.y, 0.0);
        assert!((p.center().x - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_gravity_scale_bends_arc() {
        let config = BallisticsConfig::default();
        let grid = open_grid();
        let mut p = Projectile::spawn(Vec2::new(100.0, 100.0), Vec2::X, 400.0, &config);
        p.gravity_scale = 0.3;
        p.integrate(&config, &grid, 0.1);
        assert!((p.velocity.y - 36.0).abs() < 1e-3);
    }

    #[test]
    fn test_expires_after_lifetime() {
        let config = BallisticsConfig::default();
        let grid = open_grid();
        let mut p = Projectile::spawn(Vec2::new(100.0, 100.0), Vec2::ZERO, 0.0, &config);
        let mut state = ProjectileState::Flying;
        for _ in 0..51 {
            state = p.integrate(&config, &grid, 0.1);
        }
        assert_eq!(state, ProjectileState::Expired);
        assert!(!p.active);
    }

    #[test]
    fn test_hits_tile() {
        let config = BallisticsConfig::default();
        let mut grid = open_grid();
        grid.add_tile(IVec2::new(10, 3), Material::Stone, false);

        let mut p = Projectile::spawn(Vec2::new(300.0, 112.0), Vec2::X, 500.0, &config);
        let mut state = ProjectileState::Flying;
        for _ in 0..10 {
            state = p.integrate(&config, &grid, 1.0 / 60.0);
            if state != ProjectileState::Flying {
                break;
            }
        }
        match state {
            ProjectileState::Hit { normal, .. } => assert_eq!(normal, Vec2::NEG_X),
            other => panic!("expected hit, got {:?}", other),
        }
        assert!(!p.active);
    }
}

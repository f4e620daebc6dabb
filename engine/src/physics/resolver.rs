//! Axis-separated collision resolver
//!
//! Moves a [`KinematicBody`] through a [`TileGrid`] one axis at a time:
//!
//! 1. Horizontal pass: integrate x, clamp at the left world edge, then push
//!    out of every overlapping non-platform tile.
//! 2. Gravity: accelerate downward, capped at terminal velocity.
//! 3. Vertical pass: integrate y, clear `grounded`, then land on / bump into
//!    overlapping tiles. Platforms only catch bodies falling onto them.
//!
//! Tiles returned by an overlap query are resolved one after another in
//! insertion order. Once a tile zeroes the velocity on the current axis,
//! later tiles in the same pass see a stationary body and leave it alone.

use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::collision::Rect;
use crate::world::TileGrid;

/// Tuning for the kinematic integrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Downward acceleration (pixels/second²)
    pub gravity: f32,
    /// Maximum falling speed (pixels/second)
    pub terminal_velocity: f32,
    /// Vertical velocity applied by a jump (negative = up)
    pub jump_velocity: f32,
    /// Stop bodies at x = 0 before tile resolution
    pub clamp_left_edge: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            gravity: 1200.0,
            terminal_velocity: 1000.0,
            jump_velocity: -400.0,
            clamp_left_edge: true,
        }
    }
}

/// Stateless resolver parameterised by [`ResolverConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionResolver {
    pub config: ResolverConfig,
}

impl CollisionResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Advance `body` by `dt` seconds against `grid`.
    ///
    /// `drop_through` lets the body fall through one-way platforms.
    pub fn step(&self, body: &mut KinematicBody, grid: &TileGrid, drop_through: bool, dt: f32) {
        self.move_horizontal(body, grid, dt);
        self.apply_gravity(body, dt);
        self.move_vertical(body, grid, drop_through, dt);
    }

    /// Gravity and vertical resolution only, with horizontal motion stopped.
    ///
    /// Used while gameplay input is suspended so bodies still settle.
    pub fn settle(&self, body: &mut KinematicBody, grid: &TileGrid, drop_through: bool, dt: f32) {
        body.velocity.x = 0.0;
        self.apply_gravity(body, dt);
        self.move_vertical(body, grid, drop_through, dt);
    }

    /// Start a jump if the body is grounded. Returns whether it jumped.
    pub fn jump(&self, body: &mut KinematicBody) -> bool {
        if !body.grounded {
            return false;
        }
        body.velocity.y = self.config.jump_velocity;
        body.grounded = false;
        true
    }

    /// Same as [`jump`](Self::jump) with a caller-supplied impulse.
    pub fn jump_with(&self, body: &mut KinematicBody, velocity: f32) -> bool {
        if !body.grounded {
            return false;
        }
        body.velocity.y = velocity;
        body.grounded = false;
        true
    }

    pub fn apply_gravity(&self, body: &mut KinematicBody, dt: f32) {
        body.velocity.y += self.config.gravity * dt;
        body.velocity.y = body.velocity.y.min(self.config.terminal_velocity);
    }

    pub fn move_horizontal(&self, body: &mut KinematicBody, grid: &TileGrid, dt: f32) {
        body.rect.pos.x += body.velocity.x * dt;

        if self.config.clamp_left_edge && body.rect.left() < 0.0 {
            body.rect.set_left(0.0);
            body.velocity.x = 0.0;
            return;
        }

        for tile in grid.tiles_overlapping(&body.rect) {
            if tile.is_platform() {
                continue;
            }
            if body.velocity.x > 0.0 {
                body.rect.set_right(tile.rect.left());
            } else if body.velocity.x < 0.0 {
                body.rect.set_left(tile.rect.right());
            }
            body.velocity.x = 0.0;
        }
    }

    pub fn move_vertical(&self, body: &mut KinematicBody, grid: &TileGrid, drop_through: bool, dt: f32) {
        let previous_bottom = body.rect.bottom();
        let before = body.rect;
        body.rect.pos.y += body.velocity.y * dt;
        body.grounded = false;

        let moved = body.rect;
        // Platforms are thinner than a fast body's per-tick travel, so they are
        // gathered along the swept span; solid tiles use the end position.
        let swept = before.union(&moved);

        for tile in grid.tiles_overlapping(&swept) {
            if tile.is_platform() {
                let landing = body.velocity.y > 0.0
                    && !drop_through
                    && previous_bottom <= tile.rect.top()
                    && crosses_top(&moved, &tile.rect);
                if landing {
                    body.rect.set_bottom(tile.rect.top());
                    body.velocity.y = 0.0;
                    body.grounded = true;
                }
                continue;
            }

            if !tile.rect.overlaps(&moved) {
                continue;
            }
            if body.velocity.y > 0.0 {
                body.rect.set_bottom(tile.rect.top());
                body.velocity.y = 0.0;
                body.grounded = true;
            } else if body.velocity.y < 0.0 {
                body.rect.set_top(tile.rect.bottom());
                body.velocity.y = 0.0;
            }
        }
    }
}

/// Horizontal overlap plus the body's bottom edge having passed the tile's top.
fn crosses_top(body: &Rect, tile: &Rect) -> bool {
    body.left() < tile.right() && body.right() > tile.left() && body.bottom() > tile.top()
}

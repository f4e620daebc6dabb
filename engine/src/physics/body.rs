//! Kinematic bodies
//!
//! Shared motion state for everything that moves through a tile grid:
//! the player, enemies and projectiles. Bodies are arcade-style; there is no
//! mass or momentum, only a box, a velocity and a grounded flag.

use glam::Vec2;

use super::collision::Rect;

/// Horizontal facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(&self) -> Facing {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Position, velocity and ground contact of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicBody {
    /// Collision box (pixels, y down)
    pub rect: Rect,
    /// Velocity (pixels/second, positive y = falling)
    pub velocity: Vec2,
    /// Resting on a surface after the last vertical pass
    pub grounded: bool,
    pub facing: Facing,
}

impl KinematicBody {
    /// Body with its top-left corner at `position`.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect::new(position, size),
            ..Self::default()
        }
    }

    pub fn position(&self) -> Vec2 {
        self.rect.pos
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Teleport and drop all motion state.
    pub fn place_at(&mut self, position: Vec2) {
        self.rect.pos = position;
        self.velocity = Vec2::ZERO;
        self.grounded = false;
    }

    /// Set horizontal velocity and face the direction of travel.
    pub fn drive(&mut self, vx: f32) {
        self.velocity.x = vx;
        if vx > 0.0 {
            self.facing = Facing::Right;
        } else if vx < 0.0 {
            self.facing = Facing::Left;
        }
    }
}

/// Anything that owns a [`KinematicBody`].
pub trait Movable {
    fn body(&self) -> &KinematicBody;
    fn body_mut(&mut self) -> &mut KinematicBody;

    fn rect(&self) -> Rect {
        self.body().rect
    }

    fn center(&self) -> Vec2 {
        self.body().center()
    }

    fn facing(&self) -> Facing {
        self.body().facing
    }
}

/// Anything with hit points.
pub trait Damageable {
    fn hp(&self) -> i32;
    fn max_hp(&self) -> i32;

    /// Apply raw damage; returns the hit points actually removed.
    fn take_damage(&mut self, amount: i32) -> i32;

    fn is_dead(&self) -> bool {
        self.hp() <= 0
    }
}

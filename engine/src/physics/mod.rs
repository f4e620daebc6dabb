//! Physics module
//!
//! Arcade-style kinematics for a side-view tile world. Built from scratch
//! without external physics library dependencies.
//!
//! # Unit System
//!
//! **1 unit = 1 pixel**, y grows downward.
//!
//! - Distances in pixels
//! - Velocities in pixels/s (positive y = falling)
//! - Accelerations in pixels/s²
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`collision`] - Axis-aligned rects and overlap tests
//! - [`body`] - Kinematic bodies and the `Movable` / `Damageable` capabilities
//! - [`resolver`] - Axis-separated sweep-and-resolve against a tile grid
//! - [`ballistics`] - Projectile integration

pub mod ballistics;
pub mod body;
pub mod collision;
pub mod resolver;
pub mod types;

// Re-export commonly used types at the physics module level
pub use ballistics::{BallisticsConfig, Projectile, ProjectileState};
pub use body::{Damageable, Facing, KinematicBody, Movable};
pub use collision::{Rect, collision_normal};
pub use resolver::{CollisionResolver, ResolverConfig};
pub use types::{IVec2, Vec2};

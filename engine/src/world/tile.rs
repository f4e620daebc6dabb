//! Tile Module
//!
//! A tile is one piece of static collision geometry: structural stone,
//! a mineable 2x2 block, or a thin one-way platform.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::grid::GridConfig;
use crate::physics::collision::Rect;

/// Stable identity of a tile inside one [`TileGrid`](super::TileGrid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// Block material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Dirt,
    Stone,
    CopperOre,
}

impl Material {
    /// Hit points of a destructible block of this material
    pub fn durability(&self) -> i32 {
        match self {
            Material::Dirt => 10,
            Material::Stone => 50,
            Material::CopperOre => 75,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Material::Dirt => "dirt",
            Material::Stone => "stone",
            Material::CopperOre => "copper_ore",
        }
    }
}

/// Collision role of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Indestructible single-cell geometry (ground, borders)
    Solid,
    /// Mineable block with a 2x2 footprint
    Destructible,
    /// One-way platform: blocks only bodies falling onto it from above
    Platform,
}

/// Remaining hit points of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    Infinite,
    Finite { hp: i32, max: i32 },
}

/// A grid-aligned piece of collision geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: TileId,
    /// Top-left cell of the footprint
    pub cell: IVec2,
    pub material: Material,
    pub kind: TileKind,
    pub durability: Durability,
    /// Collision box in world space (pixels)
    pub rect: Rect,
}

impl Tile {
    /// Build a tile at `cell`; the footprint follows from `kind`.
    pub fn new(id: TileId, cell: IVec2, material: Material, kind: TileKind, grid: &GridConfig) -> Self {
        let origin = grid.grid_to_world(cell);
        let (size, durability) = match kind {
            TileKind::Solid => (Vec2::splat(grid.tile_size), Durability::Infinite),
            TileKind::Destructible => {
                let max = material.durability();
                (Vec2::splat(grid.block_size()), Durability::Finite { hp: max, max })
            }
            TileKind::Platform => (
                Vec2::new(grid.tile_size, grid.platform_thickness),
                Durability::Infinite,
            ),
        };

        Self {
            id,
            cell,
            material,
            kind,
            durability,
            rect: Rect::new(origin, size),
        }
    }

    pub fn is_platform(&self) -> bool {
        self.kind == TileKind::Platform
    }

    pub fn is_destructible(&self) -> bool {
        self.kind == TileKind::Destructible
    }

    /// Current hit points, `None` for indestructible tiles.
    pub fn hp(&self) -> Option<i32> {
        match self.durability {
            Durability::Infinite => None,
            Durability::Finite { hp, .. } => Some(hp),
        }
    }

    pub fn max_hp(&self) -> Option<i32> {
        match self.durability {
            Durability::Infinite => None,
            Durability::Finite { max, .. } => Some(max),
        }
    }

    /// Apply mining damage. Returns true once hit points reach zero.
    ///
    /// Indestructible tiles ignore damage and never report destruction.
    pub fn take_damage(&mut self, damage: i32) -> bool {
        match &mut self.durability {
            Durability::Infinite => false,
            Durability::Finite { hp, .. } => {
                *hp -= damage;
                *hp <= 0
            }
        }
    }
}

//! Buildings
//!
//! Interactive hub structures. They have no collision; the player walks in
//! front of them and presses interact.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::physics::Rect;
use crate::world::GridConfig;

/// Footprint edge length (cells)
pub const BUILDING_SPAN: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    /// Rest and save
    Bedroom,
    /// Weapon upgrades, selling resources
    Smith,
    /// Armor and backpacks
    Tailor,
    /// Potions
    Witch,
    /// Cooked food
    Fireplace,
}

impl BuildingKind {
    pub fn name(&self) -> &'static str {
        match self {
            BuildingKind::Bedroom => "bedroom",
            BuildingKind::Smith => "smith",
            BuildingKind::Tailor => "tailor",
            BuildingKind::Witch => "witch",
            BuildingKind::Fireplace => "fireplace",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub kind: BuildingKind,
    pub cell: IVec2,
    pub rect: Rect,
}

impl Building {
    pub fn new(kind: BuildingKind, cell: IVec2, grid: &GridConfig) -> Self {
        let size = Vec2::splat(BUILDING_SPAN as f32 * grid.tile_size);
        Self {
            kind,
            cell,
            rect: Rect::new(grid.grid_to_world(cell), size),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains_point(point)
    }

    /// Player box, grown by one tile overall, touches the building.
    pub fn is_player_near(&self, player: &Rect, tile_size: f32) -> bool {
        self.rect.overlaps(&player.inflate(Vec2::splat(tile_size)))
    }
}

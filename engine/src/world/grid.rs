//! Grid Configuration Module
//!
//! Tile-grid geometry shared by world generation, collision and combat.
//!
//! ## Coordinates
//! - Grid cells are integer `(x, y)` pairs; `y` grows downward.
//! - World positions are pixels; cell `(x, y)` starts at `(x, y) * tile_size`.
//! - The playable rectangle is `[0, width) x [0, height)` cells. Border walls
//!   live outside it at negative cells and at `width`/`height` onwards.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::physics::collision::Rect;

/// Grid and map configuration for one area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Edge length of one cell (pixels)
    pub tile_size: f32,
    /// Playable width (cells)
    pub width: i32,
    /// Playable height (cells)
    pub height: i32,
    /// Thickness of the invisible border walls (cells)
    pub border_thickness: i32,
    /// Height of the collision band of a one-way platform (pixels)
    pub platform_thickness: f32,
    /// Edge length of a destructible block footprint (cells)
    pub destructible_span: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_size: 32.0,
            width: 40,
            height: 22,
            border_thickness: 2,
            platform_thickness: 4.0,
            destructible_span: 2,
        }
    }
}

impl GridConfig {
    /// Same geometry, different playable size.
    pub fn with_size(self, width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Top-left pixel of a grid cell.
    pub fn grid_to_world(&self, cell: IVec2) -> Vec2 {
        cell.as_vec2() * self.tile_size
    }

    /// Cell containing a world position (floor division, so negatives stay negative).
    pub fn world_to_grid(&self, pos: Vec2) -> IVec2 {
        (pos / self.tile_size).floor().as_ivec2()
    }

    /// Edge length of a destructible block in pixels.
    pub fn block_size(&self) -> f32 {
        self.tile_size * self.destructible_span as f32
    }

    /// Snap a position to the top-left corner of its destructible-block cell.
    pub fn snap_to_block(&self, pos: Vec2) -> Vec2 {
        snap_to_grid(pos, self.block_size())
    }

    /// Playable area in pixels.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            Vec2::ZERO,
            Vec2::new(self.width as f32, self.height as f32) * self.tile_size,
        )
    }

    pub fn contains_cell(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Whole tiles `y` lies below `origin_y`; never negative.
    pub fn depth_level(&self, origin_y: f32, y: f32) -> u32 {
        ((y - origin_y) / self.tile_size).max(0.0) as u32
    }
}

/// Snap a position down to a multiple of `cell`.
///
/// Useful when you don't have a GridConfig but need basic snapping.
pub fn snap_to_grid(pos: Vec2, cell: f32) -> Vec2 {
    (pos / cell).floor() * cell
}

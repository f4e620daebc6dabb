//! World Module
//!
//! Tile-grid geometry and the authoritative tile store for an area.
//!
//! ## Default World
//! Cells are 32 px squares. Mineable blocks cover 2x2 cells, structural tiles
//! one cell, and one-way platforms a thin band at the top of one cell.

pub mod grid;
pub mod tile;
pub mod tile_grid;

pub use grid::{GridConfig, snap_to_grid};
pub use tile::{Durability, Material, Tile, TileId, TileKind};
pub use tile_grid::TileGrid;

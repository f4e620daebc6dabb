//! Tile Grid
//!
//! Authoritative store of static and destructible tiles for one area.
//!
//! ## Queries
//! Every query is a linear scan over the tiles in insertion order, so each
//! one costs O(tiles). Areas hold a few thousand tiles at most and the
//! collision resolver queries twice per body per tick, which is well within
//! budget. A uniform spatial hash keyed by cell would make neighbourhood
//! queries O(1) if areas grow much larger.
//!
//! ## Borders
//! A ring of invisible solid stone `border_thickness` cells thick surrounds
//! the playable rectangle. Border tiles are inserted first and are never
//! touched by [`TileGrid::clear_destructibles`].

use glam::{IVec2, Vec2};

use super::grid::GridConfig;
use super::tile::{Material, Tile, TileId, TileKind};
use crate::physics::collision::Rect;

#[derive(Debug, Clone)]
pub struct TileGrid {
    config: GridConfig,
    tiles: Vec<Tile>,
    next_id: u32,
}

impl TileGrid {
    /// Create an empty grid surrounded by its border walls.
    pub fn new(config: GridConfig) -> Self {
        let mut grid = Self {
            config,
            tiles: Vec::new(),
            next_id: 0,
        };
        grid.add_border();
        grid
    }

    fn add_border(&mut self) {
        let t = self.config.border_thickness;
        let (w, h) = (self.config.width, self.config.height);

        for y in 0..h {
            for x in -t..0 {
                self.insert(IVec2::new(x, y), Material::Stone, TileKind::Solid);
            }
            for x in w..w + t {
                self.insert(IVec2::new(x, y), Material::Stone, TileKind::Solid);
            }
        }
        for x in -t..w + t {
            for y in -t..0 {
                self.insert(IVec2::new(x, y), Material::Stone, TileKind::Solid);
            }
            for y in h..h + t {
                self.insert(IVec2::new(x, y), Material::Stone, TileKind::Solid);
            }
        }
    }

    fn insert(&mut self, cell: IVec2, material: Material, kind: TileKind) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        self.tiles.push(Tile::new(id, cell, material, kind, &self.config));
        id
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Insert a solid or destructible tile. Callers guarantee the footprint is free.
    pub fn add_tile(&mut self, cell: IVec2, material: Material, destructible: bool) -> TileId {
        let kind = if destructible {
            TileKind::Destructible
        } else {
            TileKind::Solid
        };
        self.insert(cell, material, kind)
    }

    /// Place a one-way platform if the one-cell footprint holds no non-platform tile.
    pub fn add_platform(&mut self, cell: IVec2) -> Option<TileId> {
        let origin = self.config.grid_to_world(cell);
        let footprint = Rect::new(origin, Vec2::splat(self.config.tile_size));
        if !self.is_footprint_empty(&footprint) {
            return None;
        }
        Some(self.insert(cell, Material::Stone, TileKind::Platform))
    }

    /// True when no solid or destructible tile overlaps `rect`. Platforms are ignored.
    pub fn is_footprint_empty(&self, rect: &Rect) -> bool {
        !self
            .tiles
            .iter()
            .any(|tile| !tile.is_platform() && tile.rect.overlaps(rect))
    }

    /// Remove a tile by id. Removing an absent id is a no-op.
    pub fn remove_tile(&mut self, id: TileId) -> Option<Tile> {
        let index = self.tiles.iter().position(|tile| tile.id == id)?;
        Some(self.tiles.remove(index))
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    pub fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|tile| tile.id == id)
    }

    /// First tile (in insertion order) whose box contains `point`.
    pub fn tile_at(&self, point: Vec2) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.rect.contains_point(point))
    }

    /// Every tile whose box strictly overlaps `rect`, in insertion order.
    pub fn tiles_overlapping(&self, rect: &Rect) -> Vec<&Tile> {
        self.tiles.iter().filter(|tile| tile.rect.overlaps(rect)).collect()
    }

    /// Drop every destructible tile, returning how many were removed.
    pub fn clear_destructibles(&mut self) -> usize {
        let before = self.tiles.len();
        self.tiles.retain(|tile| !tile.is_destructible());
        before - self.tiles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles of the given kind.
    pub fn count_kind(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|tile| tile.kind == kind).count()
    }
}

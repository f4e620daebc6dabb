//! Area generation
//!
//! Builds the village hub and the mining shaft. The shaft's destructible
//! blocks follow a [`GenerationRule`] so the world can regenerate them on a
//! periodic reset without touching structural ground.

use glam::{IVec2, Vec2};
use rand::Rng;

use super::building::BuildingKind;
use super::world::{AreaId, World};
use crate::game::config::GameConfig;
use crate::game::enemy::EnemyKind;
use crate::physics::Rect;
use crate::world::{Material, TileGrid};

/// Hub dimensions (cells)
pub const HUB_WIDTH: i32 = 50;
pub const HUB_HEIGHT: i32 = 30;
/// First row of the hub's solid ground
pub const HUB_GROUND_ROW: i32 = 25;

/// Shaft dimensions (cells)
pub const SHAFT_WIDTH: i32 = 80;
pub const SHAFT_HEIGHT: i32 = 60;

/// Layout of the shaft's mineable blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaftLayout {
    /// First block row; the player arrives standing on it
    pub surface_row: i32,
    /// Rows of indestructible floor at the bottom
    pub floor_rows: i32,
    /// Chance that a lattice position holds a block
    pub fill_probability: f64,
    /// Columns left of this always get a surface block under the entry
    pub landing_columns: i32,
    /// Depth (tiles below the surface) where the middle band starts
    pub middle_depth: i32,
    /// Depth where the deep band starts
    pub deep_depth: i32,
}

impl Default for ShaftLayout {
    fn default() -> Self {
        Self {
            surface_row: 20,
            floor_rows: 4,
            fill_probability: 0.6,
            landing_columns: 12,
            middle_depth: 12,
            deep_depth: 24,
        }
    }
}

impl ShaftLayout {
    /// Material for a block `depth` tiles below the surface.
    pub fn pick_material(&self, depth: i32, rng: &mut impl Rng) -> Material {
        let roll: f64 = rng.random();
        if depth < self.middle_depth {
            if roll < 0.7 { Material::Dirt } else { Material::Stone }
        } else if depth < self.deep_depth {
            if roll < 0.3 {
                Material::Dirt
            } else if roll < 0.9 {
                Material::Stone
            } else {
                Material::CopperOre
            }
        } else if roll < 0.6 {
            Material::Stone
        } else {
            Material::CopperOre
        }
    }
}

/// How an area's destructible tiles are (re)generated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GenerationRule {
    /// No destructible population
    #[default]
    None,
    /// Depth-banded 2x2 blocks on an even lattice
    Shaft(ShaftLayout),
}

/// Place destructible blocks per `rule`; returns how many were added.
///
/// Lattice positions already covered by other tiles are skipped.
pub fn populate(tiles: &mut TileGrid, rule: &GenerationRule, rng: &mut impl Rng) -> usize {
    let GenerationRule::Shaft(layout) = rule else {
        return 0;
    };
    let grid = *tiles.config();
    let span = grid.destructible_span;
    let last_row = grid.height - layout.floor_rows;
    let block_size = Vec2::splat(grid.block_size());

    let mut added = 0;
    for y in (layout.surface_row..last_row).step_by(span as usize) {
        for x in (0..grid.width).step_by(span as usize) {
            let landing = y == layout.surface_row && x < layout.landing_columns;
            if !landing && !rng.random_bool(layout.fill_probability) {
                continue;
            }
            let cell = IVec2::new(x, y);
            let footprint = Rect::new(grid.grid_to_world(cell), block_size);
            if !tiles.tiles_overlapping(&footprint).is_empty() {
                continue;
            }
            let material = layout.pick_material(y - layout.surface_row, rng);
            tiles.add_tile(cell, material, true);
            added += 1;
        }
    }
    added
}

/// The village hub: solid ground, five buildings and the exit to the shaft.
pub fn build_hub(config: &GameConfig) -> World {
    let grid = config.grid.with_size(HUB_WIDTH, HUB_HEIGHT);
    let mut world = World::new(AreaId::Hub, grid);

    for x in 0..HUB_WIDTH {
        for y in HUB_GROUND_ROW..HUB_HEIGHT {
            world.tiles.add_tile(IVec2::new(x, y), Material::Stone, false);
        }
    }

    let building_row = HUB_GROUND_ROW - 3;
    world.add_building(BuildingKind::Bedroom, IVec2::new(10, building_row));
    world.add_building(BuildingKind::Smith, IVec2::new(20, building_row));
    world.add_building(BuildingKind::Tailor, IVec2::new(30, building_row));
    world.add_building(BuildingKind::Witch, IVec2::new(40, building_row));
    world.add_building(BuildingKind::Fireplace, IVec2::new(15, building_row));

    world.add_exit(IVec2::new(45, HUB_GROUND_ROW - 2), AreaId::Shaft);

    // Centered, standing on the ground
    let player_height = config.player.size_tiles.1 * grid.tile_size;
    world.entry = Vec2::new(
        (HUB_WIDTH as f32 * grid.tile_size) / 2.0,
        HUB_GROUND_ROW as f32 * grid.tile_size - player_height,
    );
    world
}

/// The mining shaft: floor, banded blocks, three starting enemies and the
/// exit back to the hub.
pub fn build_shaft(config: &GameConfig, rng: &mut impl Rng) -> World {
    let grid = config.grid.with_size(SHAFT_WIDTH, SHAFT_HEIGHT);
    let layout = ShaftLayout::default();
    let mut world = World::new(AreaId::Shaft, grid);
    world.has_day_cycle = true;
    world.generation = GenerationRule::Shaft(layout);

    for x in 0..SHAFT_WIDTH {
        for y in SHAFT_HEIGHT - layout.floor_rows..SHAFT_HEIGHT {
            world.tiles.add_tile(IVec2::new(x, y), Material::Stone, false);
        }
    }
    populate(&mut world.tiles, &world.generation, rng);

    let above_surface = layout.surface_row - 2;
    for (kind, column) in [(EnemyKind::Goblin, 30), (EnemyKind::Skeleton, 50), (EnemyKind::Orc, 70)] {
        world.spawn_enemy(kind, IVec2::new(column, above_surface), &config.enemy);
    }

    world.add_exit(IVec2::new(4, above_surface), AreaId::Hub);
    world.entry = grid.grid_to_world(IVec2::new(8, above_surface));
    world
}

/// Build the area for `id`.
pub fn build_area(id: AreaId, config: &GameConfig, rng: &mut impl Rng) -> World {
    match id {
        AreaId::Hub => build_hub(config),
        AreaId::Shaft => build_shaft(config, rng),
    }
}

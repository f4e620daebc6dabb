//! World
//!
//! Everything that lives in one area: the tile grid, live enemies, hub
//! buildings and exit triggers. The world owns all of it; other systems only
//! borrow tiles and enemies for the duration of a query.

use glam::{IVec2, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::building::{Building, BuildingKind};
use super::generation::{self, GenerationRule};
use crate::game::config::EnemyConfig;
use crate::game::enemy::{Enemy, EnemyId, EnemyKind};
use crate::physics::{Damageable, Rect};
use crate::world::{GridConfig, TileGrid};

/// Identifier of an area. Serialized with the names save files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaId {
    /// Village hub
    #[serde(rename = "main")]
    Hub,
    /// Mining shaft
    #[serde(rename = "exploration")]
    Shaft,
}

impl AreaId {
    pub fn name(&self) -> &'static str {
        match self {
            AreaId::Hub => "main",
            AreaId::Shaft => "exploration",
        }
    }
}

/// Area-transition hot zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exit {
    pub rect: Rect,
    pub destination: AreaId,
}

/// Exit footprint edge length (cells)
pub const EXIT_SPAN: i32 = 2;

#[derive(Debug, Clone)]
pub struct World {
    pub id: AreaId,
    pub tiles: TileGrid,
    pub enemies: Vec<Enemy>,
    pub buildings: Vec<Building>,
    pub exits: Vec<Exit>,
    /// Where the player is placed on arrival (top-left, pixels)
    pub entry: Vec2,
    /// Clock and spawning run only in areas with a day cycle
    pub has_day_cycle: bool,
    pub generation: GenerationRule,
    next_enemy_id: u32,
}

impl World {
    /// Empty area with border walls.
    pub fn new(id: AreaId, grid: GridConfig) -> Self {
        Self {
            id,
            tiles: TileGrid::new(grid),
            enemies: Vec::new(),
            buildings: Vec::new(),
            exits: Vec::new(),
            entry: Vec2::ZERO,
            has_day_cycle: false,
            generation: GenerationRule::None,
            next_enemy_id: 0,
        }
    }

    pub fn grid(&self) -> &GridConfig {
        self.tiles.config()
    }

    pub fn add_building(&mut self, kind: BuildingKind, cell: IVec2) {
        let building = Building::new(kind, cell, self.tiles.config());
        self.buildings.push(building);
    }

    pub fn add_exit(&mut self, cell: IVec2, destination: AreaId) {
        let grid = self.tiles.config();
        let size = Vec2::splat(EXIT_SPAN as f32 * grid.tile_size);
        self.exits.push(Exit {
            rect: Rect::new(grid.grid_to_world(cell), size),
            destination,
        });
    }

    /// First building containing `point`.
    pub fn building_at(&self, point: Vec2) -> Option<&Building> {
        self.buildings.iter().find(|b| b.contains(point))
    }

    /// Building under the player's center, else the first one within reach.
    pub fn building_near(&self, player: &Rect) -> Option<&Building> {
        let tile = self.tiles.config().tile_size;
        self.building_at(player.center())
            .or_else(|| self.buildings.iter().find(|b| b.is_player_near(player, tile)))
    }

    /// Destination of the first exit containing `point`.
    pub fn exit_at(&self, point: Vec2) -> Option<AreaId> {
        self.exits
            .iter()
            .find(|e| e.rect.contains_point(point))
            .map(|e| e.destination)
    }

    fn next_id(&mut self) -> EnemyId {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;
        id
    }

    /// Spawn an enemy with its top-left corner at grid `cell`.
    pub fn spawn_enemy(&mut self, kind: EnemyKind, cell: IVec2, config: &EnemyConfig) -> EnemyId {
        let id = self.next_id();
        let grid = self.tiles.config();
        let enemy = Enemy::new(id, kind, grid.grid_to_world(cell), config, grid.tile_size);
        self.enemies.push(enemy);
        id
    }

    pub fn spawn_boss(&mut self, kind: EnemyKind, cell: IVec2, config: &EnemyConfig) -> EnemyId {
        let id = self.next_id();
        let grid = self.tiles.config();
        let enemy = Enemy::boss(id, kind, grid.grid_to_world(cell), config, grid.tile_size);
        self.enemies.push(enemy);
        id
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    /// Live enemies of one kind.
    pub fn count_enemies(&self, kind: EnemyKind) -> usize {
        self.enemies.iter().filter(|e| e.kind == kind).count()
    }

    /// Live enemies of one kind that are (or are not) bosses.
    pub fn count_spawned(&self, kind: EnemyKind, boss: bool) -> usize {
        self.enemies
            .iter()
            .filter(|e| e.kind == kind && e.is_boss() == boss)
            .count()
    }

    /// Remove enemies with hp <= 0 and hand them back (for rewards).
    pub fn sweep_dead(&mut self) -> Vec<Enemy> {
        let (dead, alive): (Vec<Enemy>, Vec<Enemy>) =
            std::mem::take(&mut self.enemies).into_iter().partition(|e| e.is_dead());
        self.enemies = alive;
        dead
    }

    /// Clear and regenerate destructible tiles per the area's rule.
    ///
    /// Borders, structural ground and platforms are kept.
    pub fn reset_destructibles(&mut self, rng: &mut impl Rng) {
        let removed = self.tiles.clear_destructibles();
        let added = generation::populate(&mut self.tiles, &self.generation, rng);
        log::info!(
            "Regenerated {}: removed {} blocks, placed {}",
            self.id.name(),
            removed,
            added
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::new(AreaId::Hub, GridConfig::default().with_size(50, 30))
    }

    #[test]
    fn test_exit_lookup() {
        let mut w = world();
        w.add_exit(IVec2::new(45, 23), AreaId::Shaft);
        assert_eq!(w.exit_at(Vec2::new(1450.0, 750.0)), Some(AreaId::Shaft));
        assert_eq!(w.exit_at(Vec2::new(1504.0, 750.0)), None);
    }

    #[test]
    fn test_building_near_prefers_contained() {
        let mut w = world();
        w.add_building(BuildingKind::Bedroom, IVec2::new(10, 22));
        w.add_building(BuildingKind::Fireplace, IVec2::new(13, 22));
        let player = Rect::from_xywh(420.0, 736.0, 32.0, 64.0);
        assert_eq!(w.building_near(&player).map(|b| b.kind), Some(BuildingKind::Fireplace));
        let far = Rect::from_xywh(1000.0, 736.0, 32.0, 64.0);
        assert!(w.building_near(&far).is_none());
    }

    #[test]
    fn test_sweep_dead() {
        let mut w = world();
        let config = EnemyConfig::default();
        let a = w.spawn_enemy(EnemyKind::Goblin, IVec2::new(5, 5), &config);
        let b = w.spawn_enemy(EnemyKind::Orc, IVec2::new(8, 5), &config);
        assert_ne!(a, b);

        if let Some(enemy) = w.enemy_mut(a) {
            enemy.take_damage(100);
        }
        let dead = w.sweep_dead();
        assert_eq!(dead.len(), 1);
        assert_eq!(dead[0].id, a);
        assert_eq!(w.enemies.len(), 1);
        assert_eq!(w.count_enemies(EnemyKind::Orc), 1);
    }

    #[test]
    fn test_bosses_counted_apart() {
        let mut w = world();
        let config = EnemyConfig::default();
        w.spawn_enemy(EnemyKind::Orc, IVec2::new(5, 5), &config);
        w.spawn_boss(EnemyKind::Orc, IVec2::new(10, 5), &config);

        assert_eq!(w.count_enemies(EnemyKind::Orc), 2);
        assert_eq!(w.count_spawned(EnemyKind::Orc, false), 1);
        assert_eq!(w.count_spawned(EnemyKind::Orc, true), 1);
    }
}

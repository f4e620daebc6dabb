//! Combat system: melee swings, block mining and platform placement.
//!
//! Stateless; every operation borrows the player and the active world for
//! the duration of the call. Rejections are returned as values and never
//! leave partial changes behind.

use glam::Vec2;
use rand::Rng;

use crate::game::area::World;
use crate::game::config::CombatConfig;
use crate::game::enemy::EnemyKind;
use crate::game::player::{ItemKind, Player};
use crate::physics::{Damageable, Facing, Rect};
use crate::world::{Material, TileId, TileKind};

/// Result of one melee swing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeleeOutcome {
    /// Enemies struck by the swing
    pub hits: usize,
    /// Damage dealt to each struck enemy
    pub damage: i32,
    pub critical: bool,
    /// Kinds of the enemies that died
    pub kills: Vec<EnemyKind>,
    /// Gold credited for the kills
    pub gold: u32,
}

/// Result of one mining action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MineOutcome {
    /// Pointer farther than the mining radius from the player center
    OutOfRange,
    /// No tile under the pointer
    NoTarget,
    /// Structural tile; nothing happens
    Indestructible,
    /// Block took damage and survives
    Damaged { remaining: i32 },
    /// Block destroyed and removed from the world
    Destroyed {
        material: Material,
        /// False when the inventory was full and the material was lost
        stored: bool,
        bonus_gold: u32,
    },
    /// Platforms break in one hit
    PlatformRemoved,
}

/// Why a platform could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// Target row is above the minimum placement row
    TooShallow,
    OutOfRange,
    /// No dirt in the inventory
    NoDirt,
    /// Footprint holds a solid or destructible tile
    Occupied,
}

/// Stateless combat rules.
pub struct CombatSystem;

impl CombatSystem {
    /// Hitbox of a melee swing: full body height, `reach_factor` body widths
    /// deep, on the side the body faces.
    pub fn melee_hitbox(body: &Rect, facing: Facing, reach_factor: f32) -> Rect {
        let reach = body.width() * reach_factor;
        let x = match facing {
            Facing::Right => body.right(),
            Facing::Left => body.left() - reach,
        };
        Rect::from_xywh(x, body.top(), reach, body.height())
    }

    /// Swing the player's weapon at every enemy in the hitbox.
    ///
    /// Dead enemies are swept from the world and their coins credited.
    /// Cooldown gating is the caller's job.
    pub fn melee_attack(
        player: &mut Player,
        world: &mut World,
        config: &CombatConfig,
        rng: &mut impl Rng,
    ) -> MeleeOutcome {
        let hitbox = Self::melee_hitbox(&player.body.rect, player.body.facing, config.melee_reach_factor);
        let critical = Self::roll_crit(config.crit_chance, rng);
        let mut damage = player.attack_damage();
        if critical {
            damage = (damage as f32 * config.crit_multiplier).round() as i32;
        }

        let origin = player.body.center();
        let mut outcome = MeleeOutcome {
            damage,
            critical,
            ..Default::default()
        };
        for enemy in world.enemies.iter_mut().filter(|e| e.body.rect.overlaps(&hitbox)) {
            enemy.take_damage(damage);
            let impulse = Self::knockback_vector(origin, enemy.body.center(), config.knockback_force);
            enemy.knock_back(impulse, config.knockback_duration);
            outcome.hits += 1;
        }

        for dead in world.sweep_dead() {
            log::debug!("Player killed {} for {} gold", dead.kind.name(), dead.coins);
            player.add_gold(dead.coins);
            outcome.gold += dead.coins;
            outcome.kills.push(dead.kind);
        }
        outcome
    }

    /// Mine the block under `pointer`.
    ///
    /// The pointer is snapped to the destructible-block lattice before the
    /// lookup. Platforms are thinner than a block, so when the snapped
    /// corner hits nothing the raw pointer is tried for a platform.
    pub fn mine(
        player: &mut Player,
        world: &mut World,
        pointer: Vec2,
        config: &CombatConfig,
        rng: &mut impl Rng,
    ) -> MineOutcome {
        let grid = *world.grid();
        let radius = config.mining_radius_tiles * grid.tile_size;
        if pointer.distance(player.body.center()) > radius {
            return MineOutcome::OutOfRange;
        }

        let snapped = grid.snap_to_block(pointer);
        let target = world
            .tiles
            .tile_at(snapped)
            .or_else(|| world.tiles.tile_at(pointer).filter(|t| t.is_platform()))
            .map(|t| (t.id, t.kind));
        let Some((id, kind)) = target else {
            return MineOutcome::NoTarget;
        };

        match kind {
            TileKind::Solid => MineOutcome::Indestructible,
            TileKind::Platform => {
                world.tiles.remove_tile(id);
                MineOutcome::PlatformRemoved
            }
            TileKind::Destructible => Self::damage_block(player, world, id, config, rng),
        }
    }

    fn damage_block(
        player: &mut Player,
        world: &mut World,
        id: TileId,
        config: &CombatConfig,
        rng: &mut impl Rng,
    ) -> MineOutcome {
        let Some(tile) = world.tiles.tile_mut(id) else {
            return MineOutcome::NoTarget;
        };
        if !tile.take_damage(config.mining_damage) {
            return MineOutcome::Damaged {
                remaining: tile.hp().unwrap_or_default(),
            };
        }

        let material = tile.material;
        world.tiles.remove_tile(id);

        let mut bonus_gold = 0;
        if rng.random::<f64>() < config.bonus_gold_chance {
            bonus_gold = rng.random_range(config.bonus_gold_min..=config.bonus_gold_max.max(config.bonus_gold_min));
            player.add_gold(bonus_gold);
        }

        let stored = player.inventory.add_item(ItemKind::from(material), 1);
        if !stored {
            log::debug!("Inventory full, {} lost", material.name());
        }
        log::debug!("Mined {} (bonus gold {})", material.name(), bonus_gold);

        MineOutcome::Destroyed {
            material,
            stored,
            bonus_gold,
        }
    }

    /// Check every placement rule without changing anything.
    pub fn can_place_platform(
        player: &Player,
        world: &World,
        pointer: Vec2,
        config: &CombatConfig,
    ) -> Result<(), PlaceError> {
        let grid = world.grid();
        let cell = grid.world_to_grid(pointer);
        if cell.y < config.placement_min_row {
            return Err(PlaceError::TooShallow);
        }

        let range = config.mining_radius_tiles * grid.tile_size * config.placement_range_factor;
        if pointer.distance(player.body.center()) > range {
            return Err(PlaceError::OutOfRange);
        }

        if !player.inventory.has_item(ItemKind::Dirt, 1) {
            return Err(PlaceError::NoDirt);
        }

        let footprint = Rect::new(grid.grid_to_world(cell), Vec2::splat(grid.tile_size));
        if !world.tiles.is_footprint_empty(&footprint) {
            return Err(PlaceError::Occupied);
        }
        Ok(())
    }

    /// Place a one-way platform in the cell under `pointer`, consuming one dirt.
    pub fn place_platform(
        player: &mut Player,
        world: &mut World,
        pointer: Vec2,
        config: &CombatConfig,
    ) -> Result<TileId, PlaceError> {
        if let Err(err) = Self::can_place_platform(player, world, pointer, config) {
            log::debug!("Platform placement rejected: {:?}", err);
            return Err(err);
        }

        let cell = world.grid().world_to_grid(pointer);
        let id = world.tiles.add_platform(cell).ok_or(PlaceError::Occupied)?;
        player.inventory.remove_item(ItemKind::Dirt, 1);
        log::debug!("Placed platform at ({}, {})", cell.x, cell.y);
        Ok(id)
    }

    /// Push direction from attacker to target scaled by `force`; the vertical
    /// component is halved.
    pub fn knockback_vector(attacker: Vec2, target: Vec2, force: f32) -> Vec2 {
        let delta = target - attacker;
        let distance = delta.length().max(1.0);
        let push = delta / distance * force;
        Vec2::new(push.x, push.y * 0.5)
    }

    pub fn roll_crit(chance: f64, rng: &mut impl Rng) -> bool {
        chance > 0.0 && rng.random::<f64>() < chance
    }
}

//! Game State
//!
//! Central state struct that holds all game systems together and runs one
//! simulation tick per [`GameState::update`] call.

use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::area::{AreaId, AreaManager, BuildingKind};
use crate::game::config::GameConfig;
use crate::game::economy::{self, Clock, CraftError, Offer, ShopError};
use crate::game::enemy::{EnemyId, EnemyKind, update_enemy};
use crate::game::player::{AttackStyle, ItemKind, Player, ProjectileKind};
use crate::game::save::{QuestProgress, SaveData, SaveError};
use crate::game::systems::{
    CombatSystem, MeleeOutcome, MineOutcome, PlaceError, ProjectileHit, ProjectileSystem, SpawnDirector,
    depth_level,
};
use crate::input::InputSnapshot;
use crate::physics::{CollisionResolver, Damageable};
use crate::world::TileId;

/// Aim distance for ranged attacks fired without a pointer (pixels)
const BLIND_AIM_DISTANCE: f32 = 100.0;

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default)]
pub struct TickEvents {
    pub days_passed: u32,
    /// The shaft's blocks were regenerated
    pub area_reset: bool,
    pub spawned: Vec<EnemyId>,
    pub melee: Option<MeleeOutcome>,
    pub fired: Option<ProjectileKind>,
    pub mined: Option<MineOutcome>,
    pub placed: Option<Result<TileId, PlaceError>>,
    pub projectile_hits: Vec<ProjectileHit>,
    /// Enemies killed by any means
    pub kills: Vec<EnemyKind>,
    /// Coins from kills
    pub gold_earned: u32,
    pub damage_taken: i32,
    pub area_changed: Option<AreaId>,
    pub menu_opened: Option<BuildingKind>,
    pub menu_closed: bool,
    pub consumed: Vec<ItemKind>,
    pub player_defeated: bool,
}

/// Central game state holding all systems
pub struct GameState {
    pub config: GameConfig,

    // === World ===
    pub areas: AreaManager,
    pub resolver: CollisionResolver,
    /// Entry height of the current area; depth is measured from here
    pub depth_origin: f32,

    // === Entities ===
    pub player: Player,
    pub projectiles: ProjectileSystem,

    // === Time and spawning ===
    pub clock: Clock,
    pub spawns: SpawnDirector,

    // === Progress ===
    pub quests: QuestProgress,
    /// Building whose menu is open; gameplay is suspended while set
    menu: Option<BuildingKind>,

    rng: StdRng,
}

impl GameState {
    /// New session in the hub. `seed` drives every random roll.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let areas = AreaManager::new(&config, &mut rng);
        let entry = areas.current().entry;
        let player = Player::new(entry, &config.player, config.grid.tile_size);

        Self {
            resolver: CollisionResolver::new(config.physics),
            projectiles: ProjectileSystem::new(config.projectiles),
            clock: Clock::new(config.clock),
            spawns: SpawnDirector::new(config.spawn.clone()),
            quests: QuestProgress::default(),
            menu: None,
            depth_origin: entry.y,
            areas,
            player,
            config,
            rng,
        }
    }

    pub fn current_area(&self) -> AreaId {
        self.areas.current_id()
    }

    pub fn open_menu(&self) -> Option<BuildingKind> {
        self.menu
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    /// Depth level of the player below the area entry.
    pub fn depth(&self) -> u32 {
        depth_level(self.areas.current(), self.depth_origin, self.player.body.position().y)
    }

    pub fn is_day(&self) -> bool {
        self.clock.is_day()
    }

    /// Move to area `id` and drop the player at its entry.
    pub fn travel(&mut self, id: AreaId) {
        let entry = self.areas.switch_to(id, &self.config, &mut self.rng);
        self.player.body.place_at(entry);
        self.depth_origin = entry.y;
        self.projectiles.clear();
        self.menu = None;
    }

    /// Advance the simulation by `dt` seconds.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) -> TickEvents {
        let mut events = TickEvents::default();

        if self.menu.is_some() {
            if input.escape {
                self.menu = None;
                events.menu_closed = true;
            }
            let world = self.areas.current();
            self.resolver.settle(&mut self.player.body, &world.tiles, false, dt);
            return events;
        }

        self.player.tick_timers(dt);

        // Clock and spawning only run in areas with a day cycle
        if self.areas.current().has_day_cycle {
            events.days_passed = self.clock.update(dt);
            if events.days_passed > 0 && self.clock.should_reset() {
                self.areas.current_mut().reset_destructibles(&mut self.rng);
                events.area_reset = true;
            }

            let depth = self.depth();
            let is_day = self.clock.is_day();
            let world = self.areas.current_mut();
            events.spawned = self
                .spawns
                .update(dt, world, is_day, depth, &self.config.enemy, &mut self.rng);
        }

        self.move_player(dt, input);

        let world = self.areas.current_mut();
        for enemy in world.enemies.iter_mut() {
            let outcome = update_enemy(
                enemy,
                &mut self.player,
                &world.tiles,
                &self.resolver,
                &self.config.enemy,
                dt,
            );
            events.damage_taken += outcome.damage_to_player;
        }

        if input.attack && self.player.can_attack() {
            self.attack(input.pointer, &mut events);
        }

        if let Some(pointer) = input.pointer {
            let world = self.areas.current_mut();
            if input.mine {
                events.mined = Some(CombatSystem::mine(
                    &mut self.player,
                    world,
                    pointer,
                    &self.config.combat,
                    &mut self.rng,
                ));
            }
            if input.place_platform {
                events.placed = Some(CombatSystem::place_platform(
                    &mut self.player,
                    world,
                    pointer,
                    &self.config.combat,
                ));
            }
        }

        let world = self.areas.current_mut();
        self.projectiles.update(&world.tiles, dt);
        events.projectile_hits = self.projectiles.resolve_hits(&mut world.enemies);
        for dead in world.sweep_dead() {
            log::debug!("Player killed {} for {} gold", dead.kind.name(), dead.coins);
            self.player.add_gold(dead.coins);
            events.gold_earned += dead.coins;
            events.kills.push(dead.kind);
        }

        let exit = self.areas.current().exit_at(self.player.body.center());
        if let Some(destination) = exit {
            self.travel(destination);
            events.area_changed = Some(destination);
        }

        if input.interact {
            self.interact(&mut events);
        }

        for (index, pressed) in input.use_consumable.iter().enumerate() {
            if *pressed {
                if let Some(item) = self.player.use_consumable(index) {
                    events.consumed.push(item);
                }
            }
        }

        events.player_defeated = self.player.is_dead();
        events
    }

    fn move_player(&mut self, dt: f32, input: &InputSnapshot) {
        let speed = self.player.move_speed(self.config.player.speed);
        self.player.body.drive(input.horizontal() * speed);
        if input.jump {
            self.resolver.jump(&mut self.player.body);
        }
        let world = self.areas.current();
        self.resolver
            .step(&mut self.player.body, &world.tiles, input.drop_through, dt);
    }

    fn attack(&mut self, pointer: Option<Vec2>, events: &mut TickEvents) {
        self.player.begin_attack(self.config.player.attack_cooldown);

        match self.player.weapon.style() {
            AttackStyle::Melee => {
                let world = self.areas.current_mut();
                let outcome = CombatSystem::melee_attack(&mut self.player, world, &self.config.combat, &mut self.rng);
                events.gold_earned += outcome.gold;
                events.kills.extend(outcome.kills.iter().copied());
                events.melee = Some(outcome);
            }
            AttackStyle::Ranged(kind) => {
                let origin = self.player.body.center();
                let target = pointer
                    .unwrap_or_else(|| origin + Vec2::new(self.player.body.facing.sign() * BLIND_AIM_DISTANCE, 0.0));
                if self.projectiles.fire(kind, origin, target, self.player.attack_damage()) {
                    events.fired = Some(kind);
                }
            }
        }
    }

    fn interact(&mut self, events: &mut TickEvents) {
        let building = self
            .areas
            .current()
            .building_near(&self.player.body.rect)
            .map(|b| b.kind);
        let Some(kind) = building else {
            return;
        };

        if kind == BuildingKind::Bedroom {
            self.player.rest();
        }
        log::info!("Opened {}", kind.name());
        self.menu = Some(kind);
        events.menu_opened = Some(kind);
    }

    /// Buy offer `index` from the open shop.
    pub fn buy(&mut self, index: usize) -> Result<Offer, ShopError> {
        let building = self.menu.ok_or(ShopError::Closed)?;
        economy::buy(&mut self.player, building, index)
    }

    /// Sell resources at the open smith.
    pub fn sell_resources(&mut self) -> Result<u32, ShopError> {
        match self.menu {
            Some(BuildingKind::Smith) => economy::sell_all_resources(&mut self.player),
            _ => Err(ShopError::Closed),
        }
    }

    /// Craft at the open building.
    pub fn craft(&mut self, recipe: &str) -> Result<ItemKind, CraftError> {
        let station = self.menu.ok_or(CraftError::NoStation)?;
        economy::craft(recipe, station, &mut self.player.inventory)
    }

    pub fn save_data(&self) -> SaveData {
        SaveData::capture(&self.player, &self.clock, &self.quests, self.areas.current_id())
    }

    /// Restore a saved session. On error the current session is untouched.
    pub fn load(&mut self, data: &SaveData) -> Result<(), SaveError> {
        data.validate()?;
        self.travel(data.game_state.current_map);
        data.apply(&mut self.player, &mut self.clock)?;
        self.quests = data.quests.clone();
        log::info!("Restored session in {}", data.game_state.current_map.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::player::WeaponKind;
    use crate::world::TileKind;

    const DT: f32 = 1.0 / 60.0;

    fn state() -> GameState {
        GameState::new(GameConfig::default(), 7)
    }

    #[test]
    fn test_new_game_state() {
        let state = state();
        assert_eq!(state.current_area(), AreaId::Hub);
        assert_eq!(state.player.body.position(), state.areas.current().entry);
        assert_eq!(state.player.gold, 0);
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn test_hub_is_timeless() {
        let mut state = state();
        for _ in 0..60 {
            state.update(DT, &InputSnapshot::new());
        }
        assert_eq!(state.clock.elapsed(), 0.0);
    }

    #[test]
    fn test_walk_into_shaft() {
        let mut state = state();
        let mut arrived = None;
        for _ in 0..300 {
            let events = state.update(DT, &InputSnapshot::new().with_right());
            if events.area_changed.is_some() {
                arrived = events.area_changed;
                break;
            }
        }
        assert_eq!(arrived, Some(AreaId::Shaft));
        assert_eq!(state.current_area(), AreaId::Shaft);
        assert_eq!(state.player.body.position(), state.areas.current().entry);
        assert_eq!(state.player.body.velocity, Vec2::ZERO);
        assert_eq!(state.depth(), 0);

        state.update(DT, &InputSnapshot::new());
        assert!(state.clock.elapsed() > 0.0);
    }

    #[test]
    fn test_menu_suspends_movement() {
        let mut state = state();
        state.player.gold = 150;
        state.player.body.place_at(Vec2::new(650.0, 736.0));

        let events = state.update(DT, &InputSnapshot::new().with_interact());
        assert_eq!(events.menu_opened, Some(BuildingKind::Smith));

        let x = state.player.body.position().x;
        state.update(DT, &InputSnapshot::new().with_right());
        assert_eq!(state.player.body.position().x, x);

        assert!(state.buy(0).is_ok());
        assert_eq!(state.player.weapon, WeaponKind::IronSword);
        assert_eq!(state.player.gold, 50);

        let events = state.update(DT, &InputSnapshot::new().with_escape());
        assert!(events.menu_closed);
        assert_eq!(state.buy(0), Err(ShopError::Closed));
    }

    #[test]
    fn test_bedroom_restores_health() {
        let mut state = state();
        state.player.set_hp(10);
        state.player.body.place_at(Vec2::new(330.0, 736.0));
        let events = state.update(DT, &InputSnapshot::new().with_interact());
        assert_eq!(events.menu_opened, Some(BuildingKind::Bedroom));
        assert_eq!(state.player.hp(), state.player.max_hp());
    }

    #[test]
    fn test_bow_fires_arrow() {
        let mut state = state();
        state.player.equip_weapon(WeaponKind::Bow);
        let target = state.player.body.center() + Vec2::new(200.0, 0.0);

        let events = state.update(DT, &InputSnapshot::new().with_attack(target));
        assert_eq!(events.fired, Some(ProjectileKind::Arrow));
        assert_eq!(state.projectiles.active_count(), 1);

        // Still cooling down
        let events = state.update(DT, &InputSnapshot::new().with_attack(target));
        assert_eq!(events.fired, None);
    }

    #[test]
    fn test_day_rollover_regenerates_shaft() {
        let mut config = GameConfig::default();
        config.clock.cycle_duration = 1.0;
        config.clock.reset_every_days = 1;
        config.spawn.clear();
        let mut state = GameState::new(config, 11);
        state.travel(AreaId::Shaft);

        state.areas.current_mut().tiles.clear_destructibles();
        assert_eq!(state.areas.current().tiles.count_kind(TileKind::Destructible), 0);

        let mut reset = false;
        for _ in 0..70 {
            reset |= state.update(DT, &InputSnapshot::new()).area_reset;
        }
        assert!(reset);
        assert_eq!(state.clock.day_count(), 1);
        assert!(state.areas.current().tiles.count_kind(TileKind::Destructible) > 0);
    }

    #[test]
    fn test_save_and_load() {
        let mut state = state();
        state.player.gold = 321;
        state.player.inventory.add_item(ItemKind::Stone, 4);
        state.travel(AreaId::Shaft);
        state.quests.complete("first_descent");
        let data = state.save_data();

        let mut restored = GameState::new(GameConfig::default(), 99);
        restored.load(&data).unwrap();
        assert_eq!(restored.current_area(), AreaId::Shaft);
        assert_eq!(restored.player.gold, 321);
        assert_eq!(restored.player.inventory.count_of(ItemKind::Stone), 4);
        assert!(restored.quests.is_completed("first_descent"));
    }

    #[test]
    fn test_bad_save_keeps_session() {
        let mut state = state();
        let mut data = state.save_data();
        data.player.hp = -5;
        data.game_state.current_map = AreaId::Shaft;

        assert!(state.load(&data).is_err());
        assert_eq!(state.current_area(), AreaId::Hub);
    }
}

//! Gameplay Tests - Mining, Melee, Placement, Spawning and AI
//!
//! Scenario tests against the public game API. Every probabilistic check
//! uses a seeded `StdRng`.

use eldoria_engine::game::area::{AreaId, World};
use eldoria_engine::game::config::{CombatConfig, EnemyConfig, GameConfig, PlayerConfig};
use eldoria_engine::game::enemy::{AiState, Enemy, EnemyId, EnemyKind, choose_state, update_enemy};
use eldoria_engine::game::player::{Inventory, ItemKind, Player, WeaponKind};
use eldoria_engine::game::systems::{CombatSystem, MineOutcome, PlaceError, SpawnDirector, SpawnRule};
use eldoria_engine::game::{BuildingKind, GameState};
use eldoria_engine::input::InputSnapshot;
use eldoria_engine::physics::{CollisionResolver, Damageable};
use eldoria_engine::world::{GridConfig, Material, TileKind};
use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

const DT: f32 = 1.0 / 60.0;

/// 40x30 shaft-like world with no tiles besides the border.
fn empty_world() -> World {
    World::new(AreaId::Shaft, GridConfig::default().with_size(40, 30))
}

/// Player whose center sits at (400, 400).
fn player() -> Player {
    Player::new(Vec2::new(384.0, 368.0), &PlayerConfig::default(), 32.0)
}

// ============================================================================
// Mining
// ============================================================================

#[test]
fn test_mining_radius_boundary() {
    let config = CombatConfig::default();
    let radius = config.mining_radius_tiles * 32.0;
    assert_eq!(radius, 144.0);

    let mut world = empty_world();
    // Block covering x 512..576, y 384..448
    world.tiles.add_tile(IVec2::new(16, 12), Material::Stone, true);
    let mut player = player();
    let mut rng = StdRng::seed_from_u64(1);

    let beyond = Vec2::new(400.0 + radius + 0.1, 400.0);
    assert_eq!(
        CombatSystem::mine(&mut player, &mut world, beyond, &config, &mut rng),
        MineOutcome::OutOfRange
    );

    let inside = Vec2::new(400.0 + radius - 0.1, 400.0);
    assert_eq!(
        CombatSystem::mine(&mut player, &mut world, inside, &config, &mut rng),
        MineOutcome::Damaged { remaining: 42 }
    );

    let exact = Vec2::new(400.0 + radius, 400.0);
    assert_eq!(
        CombatSystem::mine(&mut player, &mut world, exact, &config, &mut rng),
        MineOutcome::Damaged { remaining: 34 }
    );
}

#[test]
fn test_mining_dirt_to_depletion() {
    let config = CombatConfig::default();
    for seed in 0..20 {
        let mut world = empty_world();
        world.tiles.add_tile(IVec2::new(12, 12), Material::Dirt, true);
        let mut player = player();
        let mut rng = StdRng::seed_from_u64(seed);
        let pointer = Vec2::new(400.0, 400.0);

        let first = CombatSystem::mine(&mut player, &mut world, pointer, &config, &mut rng);
        assert_eq!(first, MineOutcome::Damaged { remaining: 2 });
        assert_eq!(world.tiles.count_kind(TileKind::Destructible), 1);
        assert_eq!(player.gold, 0);

        match CombatSystem::mine(&mut player, &mut world, pointer, &config, &mut rng) {
            MineOutcome::Destroyed {
                material,
                stored,
                bonus_gold,
            } => {
                assert_eq!(material, Material::Dirt);
                assert!(stored);
                assert_eq!(player.gold, bonus_gold);
                assert!(bonus_gold == 0 || (1..=5).contains(&bonus_gold));
            }
            other => panic!("expected destruction, got {other:?}"),
        }
        assert_eq!(world.tiles.count_kind(TileKind::Destructible), 0);
        assert_eq!(player.inventory.count_of(ItemKind::Dirt), 1);
        assert_eq!(
            CombatSystem::mine(&mut player, &mut world, pointer, &config, &mut rng),
            MineOutcome::NoTarget
        );
    }
}

#[test]
fn test_bonus_gold_frequency() {
    let config = CombatConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut rewarded = 0;
    let trials = 2000;

    for _ in 0..trials {
        let mut world = empty_world();
        world.tiles.add_tile(IVec2::new(12, 12), Material::Dirt, true);
        let mut player = player();
        let pointer = Vec2::new(400.0, 400.0);
        CombatSystem::mine(&mut player, &mut world, pointer, &config, &mut rng);
        if let MineOutcome::Destroyed { bonus_gold, .. } =
            CombatSystem::mine(&mut player, &mut world, pointer, &config, &mut rng)
        {
            if bonus_gold > 0 {
                rewarded += 1;
            }
        }
    }
    // 10 % chance; about 4.5 standard deviations of slack
    assert!((140..=260).contains(&rewarded), "rewarded {rewarded} of {trials}");
}

#[test]
fn test_full_inventory_forfeits_material() {
    let config = CombatConfig::default();
    let mut world = empty_world();
    world.tiles.add_tile(IVec2::new(12, 12), Material::Stone, true);
    let mut player = player();
    player.inventory = Inventory::new(1);
    player.inventory.add_item(ItemKind::Herb, 1);
    let mut rng = StdRng::seed_from_u64(4);

    let mut last = MineOutcome::NoTarget;
    for _ in 0..7 {
        last = CombatSystem::mine(&mut player, &mut world, Vec2::new(400.0, 400.0), &config, &mut rng);
    }
    assert!(matches!(last, MineOutcome::Destroyed { stored: false, .. }));
    assert_eq!(world.tiles.count_kind(TileKind::Destructible), 0);
    assert_eq!(player.inventory.count_of(ItemKind::Stone), 0);
}

#[test]
fn test_structural_tiles_cannot_be_mined() {
    let config = CombatConfig::default();
    let mut world = empty_world();
    world.tiles.add_tile(IVec2::new(12, 12), Material::Stone, false);
    let mut player = player();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        CombatSystem::mine(&mut player, &mut world, Vec2::new(400.0, 400.0), &config, &mut rng),
        MineOutcome::Indestructible
    );
    assert!(world.tiles.tile_at(Vec2::new(400.0, 400.0)).is_some());
}

// ============================================================================
// Platforms
// ============================================================================

#[test]
fn test_placement_rejected_above_row_ten() {
    let config = CombatConfig::default();
    let mut world = empty_world();
    // Player high up, with dirt, pointer right next to it
    let mut player = Player::new(Vec2::new(384.0, 64.0), &PlayerConfig::default(), 32.0);
    player.inventory.add_item(ItemKind::Dirt, 10);

    for row in 0..10 {
        let pointer = Vec2::new(420.0, row as f32 * 32.0 + 8.0);
        assert_eq!(
            CombatSystem::place_platform(&mut player, &mut world, pointer, &config),
            Err(PlaceError::TooShallow),
            "row {row}"
        );
    }
    assert_eq!(player.inventory.count_of(ItemKind::Dirt), 10);
    assert_eq!(world.tiles.count_kind(TileKind::Platform), 0);
}

#[test]
fn test_placement_rules_in_order() {
    let config = CombatConfig::default();
    let mut world = empty_world();
    let mut player = player();
    let pointer = Vec2::new(420.0, 460.0);

    assert_eq!(
        CombatSystem::place_platform(&mut player, &mut world, pointer, &config),
        Err(PlaceError::NoDirt)
    );

    player.inventory.add_item(ItemKind::Dirt, 2);
    let far = Vec2::new(400.0 + 300.0, 400.0);
    assert_eq!(
        CombatSystem::place_platform(&mut player, &mut world, far, &config),
        Err(PlaceError::OutOfRange)
    );

    assert!(CombatSystem::place_platform(&mut player, &mut world, pointer, &config).is_ok());
    assert_eq!(player.inventory.count_of(ItemKind::Dirt), 1);

    world.tiles.add_tile(IVec2::new(14, 16), Material::Dirt, true);
    let on_block = Vec2::new(470.0, 530.0);
    assert_eq!(
        CombatSystem::place_platform(&mut player, &mut world, on_block, &config),
        Err(PlaceError::Occupied)
    );
    assert_eq!(player.inventory.count_of(ItemKind::Dirt), 1);
}

#[test]
fn test_mining_removes_platform_in_one_hit() {
    let config = CombatConfig::default();
    let mut world = empty_world();
    world.tiles.add_platform(IVec2::new(13, 14));
    let mut player = player();
    let mut rng = StdRng::seed_from_u64(0);

    let pointer = Vec2::new(420.0, 449.0);
    assert_eq!(
        CombatSystem::mine(&mut player, &mut world, pointer, &config, &mut rng),
        MineOutcome::PlatformRemoved
    );
    assert_eq!(world.tiles.count_kind(TileKind::Platform), 0);
}

// ============================================================================
// Melee
// ============================================================================

#[test]
fn test_melee_kill_rewards_gold() {
    let config = CombatConfig::default();
    let enemy_config = EnemyConfig::default();
    let mut world = empty_world();
    let mut player = player();
    player.equip_weapon(WeaponKind::Sword);
    assert_eq!(player.attack_damage(), 15);

    // Directly ahead of the player, who faces right
    let id = world.spawn_enemy(EnemyKind::Goblin, IVec2::new(13, 12), &enemy_config);
    let mut rng = StdRng::seed_from_u64(8);

    let first = CombatSystem::melee_attack(&mut player, &mut world, &config, &mut rng);
    assert_eq!(first.hits, 1);
    assert!(first.kills.is_empty());
    assert_eq!(world.enemies.len(), 1);
    assert_eq!(world.enemy(id).map(|e| e.hp()), Some(15));
    assert_eq!(player.gold, 0);

    let second = CombatSystem::melee_attack(&mut player, &mut world, &config, &mut rng);
    assert_eq!(second.kills, vec![EnemyKind::Goblin]);
    assert_eq!(second.gold, 5);
    assert!(world.enemies.is_empty());
    assert_eq!(player.gold, 5);
}

#[test]
fn test_melee_misses_behind_player() {
    let config = CombatConfig::default();
    let mut world = empty_world();
    let mut player = player();
    world.spawn_enemy(EnemyKind::Goblin, IVec2::new(10, 12), &EnemyConfig::default());
    let mut rng = StdRng::seed_from_u64(8);

    let outcome = CombatSystem::melee_attack(&mut player, &mut world, &config, &mut rng);
    assert_eq!(outcome.hits, 0);

    player.body.drive(-1.0);
    let outcome = CombatSystem::melee_attack(&mut player, &mut world, &config, &mut rng);
    assert_eq!(outcome.hits, 1);
}

#[test]
fn test_melee_knockback_moves_enemy() {
    let config = CombatConfig::default();
    let enemy_config = EnemyConfig::default();
    let resolver = CollisionResolver::default();
    let mut world = empty_world();
    // Floor top at y = 640
    for x in 0..40 {
        world.tiles.add_tile(IVec2::new(x, 20), Material::Stone, false);
    }
    let mut player = Player::new(Vec2::new(384.0, 576.0), &PlayerConfig::default(), 32.0);
    let id = world.spawn_enemy(EnemyKind::Goblin, IVec2::new(13, 18), &enemy_config);
    let mut rng = StdRng::seed_from_u64(2);

    let outcome = CombatSystem::melee_attack(&mut player, &mut world, &config, &mut rng);
    assert_eq!(outcome.hits, 1);

    let Some(mut enemy) = world.enemy(id).cloned() else {
        panic!("goblin died to one swing");
    };
    let x = enemy.body.position().x;
    assert!(enemy.is_staggered());

    // Within attack range, but the knockback keeps it from hitting back
    let first = update_enemy(&mut enemy, &mut player, &world.tiles, &resolver, &enemy_config, DT);
    assert_eq!(first.damage_to_player, 0);
    let dx = enemy.body.position().x - x;
    assert!(dx > 1.0, "knockback moved the goblin {dx} px");

    // Steering resumes once the stagger runs out
    for _ in 0..30 {
        update_enemy(&mut enemy, &mut player, &world.tiles, &resolver, &enemy_config, DT);
    }
    assert!(!enemy.is_staggered());
    assert!(enemy.body.velocity.x <= 0.0);
}

// ============================================================================
// Spawning
// ============================================================================

fn night_rule(rate: f64, max_count: usize) -> SpawnRule {
    SpawnRule {
        kind: EnemyKind::Skeleton,
        day: false,
        night: true,
        min_depth: 5,
        max_depth: None,
        rate,
        interval: 8.0,
        max_count,
        boss: false,
    }
}

#[test]
fn test_spawn_gating_by_time_and_depth() {
    let enemy_config = EnemyConfig::default();
    let mut director = SpawnDirector::new(vec![night_rule(1.0, 1000)]);
    let mut world = empty_world();
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..200 {
        assert!(director.update(8.0, &mut world, true, 20, &enemy_config, &mut rng).is_empty());
        assert!(director.update(8.0, &mut world, false, 4, &enemy_config, &mut rng).is_empty());
    }
    assert!(world.enemies.is_empty());

    let spawned = director.update(8.0, &mut world, false, 5, &enemy_config, &mut rng);
    assert_eq!(spawned.len(), 1);
}

#[test]
fn test_spawn_rate_over_many_attempts() {
    let enemy_config = EnemyConfig::default();
    let mut director = SpawnDirector::new(vec![night_rule(0.2, 10_000)]);
    let mut world = empty_world();
    let mut rng = StdRng::seed_from_u64(77);

    let attempts = 2000;
    let mut spawned = 0;
    for _ in 0..attempts {
        spawned += director.update(8.0, &mut world, false, 6, &enemy_config, &mut rng).len();
    }
    // Expect 400; allow about 4.5 standard deviations
    assert!((320..=480).contains(&spawned), "spawned {spawned} of {attempts}");
}

#[test]
fn test_spawn_never_exceeds_cap() {
    let enemy_config = EnemyConfig::default();
    let mut director = SpawnDirector::new(vec![night_rule(1.0, 4)]);
    let mut world = empty_world();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        director.update(8.0, &mut world, false, 10, &enemy_config, &mut rng);
        assert!(world.count_enemies(EnemyKind::Skeleton) <= 4);
    }
    assert_eq!(world.count_enemies(EnemyKind::Skeleton), 4);

    // A kill frees a slot for the next attempt
    if let Some(enemy) = world.enemies.first_mut() {
        enemy.take_damage(1000);
    }
    world.sweep_dead();
    director.update(8.0, &mut world, false, 10, &enemy_config, &mut rng);
    assert_eq!(world.count_enemies(EnemyKind::Skeleton), 4);
}

#[test]
fn test_spawned_enemies_stay_inside_area() {
    let enemy_config = EnemyConfig::default();
    let rule = SpawnRule {
        kind: EnemyKind::Goblin,
        day: true,
        night: true,
        min_depth: 0,
        max_depth: None,
        rate: 1.0,
        interval: 1.0,
        max_count: 1000,
        boss: false,
    };
    let mut director = SpawnDirector::new(vec![rule]);
    let mut world = empty_world();
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..300 {
        director.update(1.0, &mut world, true, 0, &enemy_config, &mut rng);
    }
    let bounds = world.grid().bounds();
    for enemy in &world.enemies {
        let rect = enemy.body.rect;
        assert!(rect.left() >= bounds.left() && rect.right() <= bounds.right());
        assert!(rect.top() >= bounds.top() && rect.bottom() <= bounds.bottom());
    }
}

// ============================================================================
// Enemy AI
// ============================================================================

#[test]
fn test_ai_state_by_distance() {
    let config = EnemyConfig::default();
    assert_eq!(choose_state(0.0, config.aggro_radius, &config), AiState::Attack);
    assert_eq!(choose_state(150.0, config.aggro_radius, &config), AiState::Chase);
    assert_eq!(choose_state(1000.0, config.aggro_radius, &config), AiState::Patrol);
}

#[test]
fn test_damage_widens_aggro() {
    let config = EnemyConfig::default();
    let resolver = CollisionResolver::default();
    let mut world = empty_world();
    for x in 0..40 {
        world.tiles.add_tile(IVec2::new(x, 20), Material::Stone, false);
    }

    let mut enemy = Enemy::new(EnemyId(0), EnemyKind::Goblin, Vec2::new(100.0, 576.0), &config, 32.0);
    let mut player = Player::new(Vec2::new(500.0, 576.0), &PlayerConfig::default(), 32.0);

    update_enemy(&mut enemy, &mut player, &world.tiles, &resolver, &config, DT);
    assert_eq!(enemy.state, AiState::Patrol);

    enemy.take_damage(1);
    assert!(enemy.is_alerted());
    update_enemy(&mut enemy, &mut player, &world.tiles, &resolver, &config, DT);
    assert_eq!(enemy.state, AiState::Chase);
    assert!(enemy.body.velocity.x > 0.0);
}

#[test]
fn test_enemy_attack_respects_cooldown() {
    let config = EnemyConfig::default();
    let resolver = CollisionResolver::default();
    let world = empty_world();
    let mut enemy = Enemy::new(EnemyId(0), EnemyKind::Goblin, Vec2::new(400.0, 400.0), &config, 32.0);
    let mut player = Player::new(Vec2::new(420.0, 400.0), &PlayerConfig::default(), 32.0);

    let mut dealt = 0;
    // Two seconds at 60 Hz: hits at t = 0 and t = 1 s
    for _ in 0..120 {
        enemy.body.place_at(Vec2::new(400.0, 400.0));
        dealt += update_enemy(&mut enemy, &mut player, &world.tiles, &resolver, &config, DT).damage_to_player;
    }
    assert_eq!(dealt, 10);
    assert_eq!(player.hp(), 90);
}

// ============================================================================
// Full session
// ============================================================================

#[test]
fn test_session_shop_and_craft_flow() {
    let mut state = GameState::new(GameConfig::default(), 5);
    state.player.gold = 40;
    state.player.inventory.add_item(ItemKind::Herb, 2);
    state.player.inventory.add_item(ItemKind::Water, 1);

    // Witch hut at cell (40, 22)
    state.player.body.place_at(Vec2::new(1290.0, 736.0));
    let events = state.update(DT, &InputSnapshot::new().with_interact());
    assert_eq!(events.menu_opened, Some(BuildingKind::Witch));

    assert_eq!(state.craft("health_potion"), Ok(ItemKind::HealthPotion));
    assert!(state.buy(0).is_ok());
    assert_eq!(state.player.gold, 20);
    assert_eq!(state.player.inventory.count_of(ItemKind::HealthPotion), 2);
    assert!(state.sell_resources().is_err());

    state.update(DT, &InputSnapshot::new().with_escape());
    assert_eq!(state.open_menu(), None);
}

#[test]
fn test_session_dig_in_shaft() {
    let mut config = GameConfig::default();
    config.spawn.clear();
    let mut state = GameState::new(config, 21);
    state.travel(AreaId::Shaft);

    // Settle onto the landing pad
    for _ in 0..30 {
        state.update(DT, &InputSnapshot::new());
    }
    assert!(state.player.body.grounded);

    let mut destroyed = 0;
    for tick in 0..600 {
        let body = &state.player.body;
        let below = body.center() + Vec2::new(0.0, body.rect.height() / 2.0 + 16.0);
        let input = if tick % 10 == 0 {
            InputSnapshot::new().with_mine(below)
        } else {
            InputSnapshot::new()
        };
        let events = state.update(DT, &input);
        if matches!(events.mined, Some(MineOutcome::Destroyed { .. })) {
            destroyed += 1;
        }
    }
    assert!(destroyed >= 2);
    assert!(state.depth() >= 2);
    let mined = state.player.inventory.count_of(ItemKind::Dirt)
        + state.player.inventory.count_of(ItemKind::Stone)
        + state.player.inventory.count_of(ItemKind::CopperOre);
    assert_eq!(mined as usize, destroyed);
}

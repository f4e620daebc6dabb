//! Enemy AI
//!
//! Per-enemy state machine driven by distance to the player:
//!
//! - `Attack` when the player is within attack range (checked first)
//! - `Chase` when the player is within the enemy's aggro radius
//! - `Patrol` otherwise
//!
//! There is no terminal state; dead enemies are swept by the world. While
//! staggered by a knockback the enemy neither steers nor attacks.

use super::enemy::Enemy;
use super::kinds::AiState;
use crate::game::config::EnemyConfig;
use crate::game::player::Player;
use crate::physics::{CollisionResolver, Damageable};
use crate::world::TileGrid;

/// What one enemy did to the player this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AiOutcome {
    /// Hit points removed from the player
    pub damage_to_player: i32,
    /// Boss area attack fired
    pub special_used: bool,
}

/// Pick the state for a given center-to-center distance.
pub fn choose_state(distance: f32, aggro_radius: f32, config: &EnemyConfig) -> AiState {
    if distance < config.attack_range {
        AiState::Attack
    } else if distance < aggro_radius {
        AiState::Chase
    } else {
        AiState::Patrol
    }
}

/// Think, act and move one enemy for one tick.
pub fn update_enemy(
    enemy: &mut Enemy,
    player: &mut Player,
    grid: &TileGrid,
    resolver: &CollisionResolver,
    config: &EnemyConfig,
    dt: f32,
) -> AiOutcome {
    let mut outcome = AiOutcome::default();
    let to_player = player.body.center() - enemy.body.center();
    let distance = to_player.length();

    enemy.state = choose_state(distance, enemy.aggro_radius, config);

    // A knocked-back enemy slides on its impulse instead of steering.
    if enemy.is_staggered() {
        enemy.stagger = (enemy.stagger - dt).max(0.0);
    } else {
        match enemy.state {
            AiState::Patrol => patrol(enemy, config, dt),
            AiState::Chase => {
                if to_player.x.abs() > config.chase_deadzone {
                    enemy.body.drive(enemy.speed * to_player.x.signum());
                } else {
                    enemy.body.velocity.x = 0.0;
                }
                let player_above = to_player.y < -grid.config().tile_size / 2.0;
                if player_above && to_player.x.abs() < config.jump_band {
                    resolver.jump_with(&mut enemy.body, config.jump_velocity);
                }
            }
            AiState::Attack => {
                enemy.body.velocity.x = 0.0;
                // The player's swing takes priority over a simultaneous enemy hit.
                if enemy.attack_cooldown <= 0.0 && !player.is_attacking() {
                    outcome.damage_to_player += player.take_damage(enemy.damage);
                    enemy.attack_cooldown = config.attack_cooldown;
                }
            }
        }
    }

    if let Some(ability) = enemy.boss.as_mut() {
        ability.tick(dt);
        if ability.is_ready() && enemy.state != AiState::Patrol && distance <= ability.radius {
            outcome.damage_to_player += player.take_damage(enemy.damage);
            ability.trigger();
            outcome.special_used = true;
            log::debug!("Boss {} used its area attack", enemy.kind.name());
        }
    }

    if enemy.attack_cooldown > 0.0 {
        enemy.attack_cooldown -= dt;
    }

    resolver.step(&mut enemy.body, grid, false, dt);
    outcome
}

fn patrol(enemy: &mut Enemy, config: &EnemyConfig, dt: f32) {
    enemy.patrol_timer += dt;
    if enemy.patrol_timer >= config.patrol_flip_interval {
        enemy.patrol_timer = 0.0;
        enemy.patrol_dir = -enemy.patrol_dir;
    }
    enemy.body.drive(enemy.patrol_dir * enemy.speed * config.patrol_speed_factor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::PlayerConfig;
    use crate::game::enemy::{EnemyId, EnemyKind};
    use crate::world::{GridConfig, Material};
    use glam::{IVec2, Vec2};

    const DT: f32 = 1.0 / 60.0;

    fn flat_grid() -> TileGrid {
        let mut grid = TileGrid::new(GridConfig::default().with_size(60, 12));
        for x in 0..60 {
            grid.add_tile(IVec2::new(x, 10), Material::Stone, false);
        }
        grid
    }

    fn goblin_at(x: f32) -> Enemy {
        Enemy::new(EnemyId(0), EnemyKind::Goblin, Vec2::new(x, 256.0), &EnemyConfig::default(), 32.0)
    }

    fn player_at(x: f32) -> Player {
        Player::new(Vec2::new(x, 256.0), &PlayerConfig::default(), 32.0)
    }

    #[test]
    fn test_state_thresholds() {
        let config = EnemyConfig::default();
        assert_eq!(choose_state(0.0, 300.0, &config), AiState::Attack);
        assert_eq!(choose_state(150.0, 300.0, &config), AiState::Chase);
        assert_eq!(choose_state(1000.0, 300.0, &config), AiState::Patrol);
        assert_eq!(choose_state(400.0, 300.0, &config), AiState::Patrol);
        assert_eq!(choose_state(400.0, 500.0, &config), AiState::Chase);
    }

    #[test]
    fn test_patrol_flips_direction() {
        let config = EnemyConfig::default();
        let mut goblin = goblin_at(100.0);
        patrol(&mut goblin, &config, 1.0);
        assert_eq!(goblin.body.velocity.x, 40.0);
        patrol(&mut goblin, &config, 2.0);
        assert_eq!(goblin.body.velocity.x, -40.0);
    }

    #[test]
    fn test_chase_moves_toward_player() {
        let grid = flat_grid();
        let resolver = CollisionResolver::default();
        let config = EnemyConfig::default();
        let mut goblin = goblin_at(800.0);
        let mut player = player_at(600.0);

        update_enemy(&mut goblin, &mut player, &grid, &resolver, &config, DT);
        assert_eq!(goblin.state, AiState::Chase);
        assert!(goblin.body.velocity.x < 0.0);
        assert!(goblin.body.rect.left() < 800.0);
    }

    #[test]
    fn test_attack_damages_on_cooldown() {
        let grid = flat_grid();
        let resolver = CollisionResolver::default();
        let config = EnemyConfig::default();
        let mut goblin = goblin_at(340.0);
        let mut player = player_at(300.0);

        let first = update_enemy(&mut goblin, &mut player, &grid, &resolver, &config, DT);
        assert_eq!(goblin.state, AiState::Attack);
        assert_eq!(first.damage_to_player, 5);

        let second = update_enemy(&mut goblin, &mut player, &grid, &resolver, &config, DT);
        assert_eq!(second.damage_to_player, 0);
        assert_eq!(player.hp(), 95);
    }

    #[test]
    fn test_boss_special() {
        let grid = flat_grid();
        let resolver = CollisionResolver::default();
        let config = EnemyConfig::default();
        let mut boss = Enemy::boss(EnemyId(0), EnemyKind::Goblin, Vec2::new(380.0, 256.0), &config, 32.0);
        let mut player = player_at(300.0);
        if let Some(ability) = boss.boss.as_mut() {
            ability.timer = 0.0;
        }

        let outcome = update_enemy(&mut boss, &mut player, &grid, &resolver, &config, DT);
        assert!(outcome.special_used);
        assert_eq!(outcome.damage_to_player, 10);
        assert!(!boss.boss.map_or(true, |b| b.is_ready()));
    }
}

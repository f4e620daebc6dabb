//! Headless Simulation - scripted session without a window
//!
//! Run with: `cargo run --bin headless_sim -- [config.json] [save.json]`
//!
//! Walks from the hub into the shaft, digs straight down while swinging at
//! anything nearby, and logs a summary every simulated second. When a save
//! path is given the session is written there at the end.
//!
//! Set `RUST_LOG=debug` to see individual spawns, blocks and kills.

use eldoria_engine::game::{AreaId, GameConfig, GameState, ItemKind, MineOutcome, SaveFile, TickEvents};
use eldoria_engine::input::InputSnapshot;
use eldoria_engine::physics::{Damageable, Vec2};

const SEED: u64 = 42;
const TICK: f32 = 1.0 / 60.0;
const TICKS_PER_SECOND: u32 = 60;
/// Give up walking to the shaft after this many seconds
const WALK_LIMIT_SECONDS: u32 = 20;
const DIG_SECONDS: u32 = 90;

/// Running totals for the summary lines.
#[derive(Default)]
struct Tally {
    kills: usize,
    blocks: usize,
    damage_taken: i32,
}

impl Tally {
    fn record(&mut self, events: &TickEvents) {
        self.kills += events.kills.len();
        self.damage_taken += events.damage_taken;
        if matches!(events.mined, Some(MineOutcome::Destroyed { .. })) {
            self.blocks += 1;
        }
    }
}

fn summary(state: &GameState, second: u32, tally: &Tally) {
    let inventory = &state.player.inventory;
    log::info!(
        "t={:>3}s {} {} day={} area={} depth={} hp={}/{} gold={} dirt={} stone={} copper={} enemies={} blocks={} kills={} dmg_taken={}",
        second,
        state.clock.time_string(),
        state.clock.phase().name(),
        state.clock.day_count(),
        state.current_area().name(),
        state.depth(),
        state.player.hp(),
        state.player.max_hp(),
        state.player.gold,
        inventory.count_of(ItemKind::Dirt),
        inventory.count_of(ItemKind::Stone),
        inventory.count_of(ItemKind::CopperOre),
        state.areas.current().enemies.len(),
        tally.blocks,
        tally.kills,
        tally.damage_taken,
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };
    let save_path = args.next();

    let mut state = GameState::new(config, SEED);
    let mut tally = Tally::default();
    let mut second = 0;

    log::info!("Walking to the shaft");
    for tick in 0..WALK_LIMIT_SECONDS * TICKS_PER_SECOND {
        let events = state.update(TICK, &InputSnapshot::new().with_right());
        tally.record(&events);
        if tick % TICKS_PER_SECOND == 0 {
            summary(&state, second, &tally);
            second += 1;
        }
        if events.area_changed == Some(AreaId::Shaft) {
            break;
        }
    }
    if state.current_area() != AreaId::Shaft {
        log::warn!("Never reached the shaft");
        return;
    }

    log::info!("Digging");
    for tick in 0..DIG_SECONDS * TICKS_PER_SECOND {
        let body = &state.player.body;
        let below = body.center() + Vec2::new(0.0, body.rect.height() / 2.0 + 16.0);
        let ahead = body.center() + Vec2::new(body.facing.sign() * 48.0, 0.0);

        // Mining and swinging share the pointer, so they alternate ticks
        let mut input = InputSnapshot::new();
        if tick % 15 == 0 {
            input = input.with_mine(below);
        } else if tick % 30 == 7 {
            input = input.with_attack(ahead);
        }
        if state.player.hp() < state.player.max_hp() / 3 {
            input = input.with_consumable(0);
        }

        let events = state.update(TICK, &input);
        tally.record(&events);
        if events.player_defeated {
            log::warn!("Player defeated after {second}s");
            break;
        }
        if tick % TICKS_PER_SECOND == 0 {
            summary(&state, second, &tally);
            second += 1;
        }
    }
    summary(&state, second, &tally);

    if let Some(path) = save_path {
        if let Err(err) = SaveFile::new(path).write(&state.save_data()) {
            log::warn!("Could not save session: {err}");
        }
    }
}

//! Eldoria Engine Library
//!
//! Simulation core for a side-view survival game: a tile world, kinematic
//! bodies resolved against it, and the game rules layered on top.
//!
//! # Modules
//!
//! - [`physics`] - Rectangles, kinematic bodies, the collision resolver and ballistics
//! - [`world`] - Grid configuration, tiles and the tile grid
//! - [`input`] - Platform-agnostic keyboard and mouse state and the per-tick input snapshot
//! - [`game`] - Areas, player, enemies, combat, spawning, economy and saves
//!
//! # Example
//!
//! ```ignore
//! use eldoria_engine::game::{GameConfig, GameState};
//! use eldoria_engine::input::InputSnapshot;
//!
//! let mut state = GameState::new(GameConfig::default(), 42);
//! let events = state.update(1.0 / 60.0, &InputSnapshot::new().with_right());
//! if let Some(area) = events.area_changed {
//!     println!("now in {}", area.name());
//! }
//! ```

pub mod input;
pub mod physics;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export world types for convenience
pub use world::{GridConfig, TileGrid, snap_to_grid};
// Re-export commonly used input types
pub use input::{InputSnapshot, InputState, KeyCode, KeyboardState, MouseButton, MouseState};
// Re-export physics types
pub use physics::{CollisionResolver, KinematicBody, Rect};

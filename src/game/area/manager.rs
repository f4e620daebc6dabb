//! Area manager
//!
//! Keeps one [`World`] per [`AreaId`]. The active world is held by value and
//! the others wait in a cache, so switching is a pair of moves and a world is
//! only generated the first time it is visited.

use std::collections::HashMap;

use glam::Vec2;
use rand::Rng;

use super::generation::build_area;
use super::world::{AreaId, World};
use crate::game::config::GameConfig;

#[derive(Debug, Clone)]
pub struct AreaManager {
    active: World,
    worlds: HashMap<AreaId, World>,
}

impl AreaManager {
    /// Start in the hub.
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        Self::starting_in(AreaId::Hub, config, rng)
    }

    pub fn starting_in(id: AreaId, config: &GameConfig, rng: &mut impl Rng) -> Self {
        Self {
            active: build_area(id, config, rng),
            worlds: HashMap::new(),
        }
    }

    pub fn current(&self) -> &World {
        &self.active
    }

    pub fn current_mut(&mut self) -> &mut World {
        &mut self.active
    }

    pub fn current_id(&self) -> AreaId {
        self.active.id
    }

    /// A world by id, if it is active or has been visited.
    pub fn world(&self, id: AreaId) -> Option<&World> {
        if self.active.id == id {
            Some(&self.active)
        } else {
            self.worlds.get(&id)
        }
    }

    pub fn world_mut(&mut self, id: AreaId) -> Option<&mut World> {
        if self.active.id == id {
            Some(&mut self.active)
        } else {
            self.worlds.get_mut(&id)
        }
    }

    pub fn is_generated(&self, id: AreaId) -> bool {
        self.world(id).is_some()
    }

    /// Make `id` the active area and return its entry point.
    ///
    /// Switching to the area that is already active is a no-op.
    pub fn switch_to(&mut self, id: AreaId, config: &GameConfig, rng: &mut impl Rng) -> Vec2 {
        if self.active.id == id {
            return self.active.entry;
        }

        let next = match self.worlds.remove(&id) {
            Some(world) => world,
            None => {
                log::info!("Generating area {}", id.name());
                build_area(id, config, rng)
            }
        };
        let previous = std::mem::replace(&mut self.active, next);
        log::info!("Area transition: {} -> {}", previous.id.name(), id.name());
        self.worlds.insert(previous.id, previous);
        self.active.entry
    }
}

//! Area Module
//!
//! Areas are self-contained worlds (the village hub and the mining shaft)
//! linked by exit triggers.

pub mod building;
pub mod generation;
pub mod manager;
pub mod world;

pub use building::{BUILDING_SPAN, Building, BuildingKind};
pub use generation::{GenerationRule, ShaftLayout, build_area, build_hub, build_shaft, populate};
pub use manager::AreaManager;
pub use world::{AreaId, EXIT_SPAN, Exit, World};

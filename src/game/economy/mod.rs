//! Economy System
//!
//! Time, trade and crafting in the hub:
//! Day cycle: 10 minutes, shaft regenerates every 7 days
//! Shops: smith, tailor, witch, fireplace
//! Crafting: one recipe family per building

pub mod crafting;
pub mod day_cycle;
pub mod shop;

pub use crafting::{CraftError, RECIPES, Recipe, craft, recipe, recipes_for};
pub use day_cycle::{Clock, ClockSnapshot, DayPhase};
pub use shop::{BACKPACK_SLOTS, Goods, Offer, ShopError, buy, catalog, sell_all_resources};

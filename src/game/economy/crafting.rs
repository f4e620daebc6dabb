//! Crafting
//!
//! Recipes are tied to the hub building that offers them. Crafting removes
//! the ingredients, then adds the result; if the result does not fit the
//! ingredients are handed back.

use thiserror::Error;

use crate::game::area::BuildingKind;
use crate::game::player::{Inventory, ItemKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CraftError {
    #[error("unknown recipe: {0}")]
    UnknownRecipe(String),
    #[error("{recipe} is not crafted at the {station}")]
    WrongStation { recipe: &'static str, station: &'static str },
    #[error("missing {needed} x {item:?}")]
    MissingIngredient { item: ItemKind, needed: u32 },
    #[error("inventory is full")]
    InventoryFull,
    #[error("no crafting station is open")]
    NoStation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub name: &'static str,
    pub ingredients: &'static [(ItemKind, u32)],
    pub result: ItemKind,
    pub result_count: u32,
    pub station: BuildingKind,
}

pub static RECIPES: [Recipe; 4] = [
    Recipe {
        name: "wooden_sword",
        ingredients: &[(ItemKind::Wood, 2), (ItemKind::Stone, 1)],
        result: ItemKind::WoodenSword,
        result_count: 1,
        station: BuildingKind::Smith,
    },
    Recipe {
        name: "leather_helmet",
        ingredients: &[(ItemKind::Leather, 3)],
        result: ItemKind::LeatherHelmet,
        result_count: 1,
        station: BuildingKind::Tailor,
    },
    Recipe {
        name: "health_potion",
        ingredients: &[(ItemKind::Herb, 2), (ItemKind::Water, 1)],
        result: ItemKind::HealthPotion,
        result_count: 1,
        station: BuildingKind::Witch,
    },
    Recipe {
        name: "cooked_meat",
        ingredients: &[(ItemKind::RawMeat, 1)],
        result: ItemKind::CookedMeat,
        result_count: 1,
        station: BuildingKind::Fireplace,
    },
];

pub fn recipe(name: &str) -> Option<&'static Recipe> {
    RECIPES.iter().find(|r| r.name == name)
}

pub fn recipes_for(station: BuildingKind) -> impl Iterator<Item = &'static Recipe> {
    RECIPES.iter().filter(move |r| r.station == station)
}

impl Recipe {
    /// First ingredient the inventory is short of.
    pub fn missing(&self, inventory: &Inventory) -> Option<(ItemKind, u32)> {
        self.ingredients
            .iter()
            .copied()
            .find(|(item, count)| !inventory.has_item(*item, *count))
    }

    pub fn can_craft(&self, inventory: &Inventory) -> bool {
        self.missing(inventory).is_none()
    }
}

/// Craft `name` at `station`, returning the item made.
pub fn craft(name: &str, station: BuildingKind, inventory: &mut Inventory) -> Result<ItemKind, CraftError> {
    let recipe = recipe(name).ok_or_else(|| CraftError::UnknownRecipe(name.to_string()))?;
    if recipe.station != station {
        return Err(CraftError::WrongStation {
            recipe: recipe.name,
            station: station.name(),
        });
    }
    if let Some((item, needed)) = recipe.missing(inventory) {
        return Err(CraftError::MissingIngredient { item, needed });
    }

    // Work on a copy so a failed add leaves the inventory as it was.
    let mut staged = inventory.clone();
    for &(item, count) in recipe.ingredients {
        if !staged.remove_item(item, count) {
            return Err(CraftError::MissingIngredient { item, needed: count });
        }
    }
    if !staged.add_item(recipe.result, recipe.result_count) {
        log::debug!("No room for {}, ingredients kept", recipe.result.name());
        return Err(CraftError::InventoryFull);
    }

    *inventory = staged;
    log::debug!("Crafted {}", recipe.result.name());
    Ok(recipe.result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_craft_consumes_ingredients() {
        let mut inventory = Inventory::default();
        inventory.add_item(ItemKind::Herb, 3);
        inventory.add_item(ItemKind::Water, 1);

        assert_eq!(
            craft("health_potion", BuildingKind::Witch, &mut inventory),
            Ok(ItemKind::HealthPotion)
        );
        assert_eq!(inventory.count_of(ItemKind::Herb), 1);
        assert_eq!(inventory.count_of(ItemKind::Water), 0);
        assert_eq!(inventory.count_of(ItemKind::HealthPotion), 1);
    }

    #[test]
    fn test_missing_ingredient() {
        let mut inventory = Inventory::default();
        inventory.add_item(ItemKind::Wood, 2);
        assert_eq!(
            craft("wooden_sword", BuildingKind::Smith, &mut inventory),
            Err(CraftError::MissingIngredient {
                item: ItemKind::Stone,
                needed: 1
            })
        );
        assert_eq!(inventory.count_of(ItemKind::Wood), 2);
    }

    #[test]
    fn test_wrong_station() {
        let mut inventory = Inventory::default();
        inventory.add_item(ItemKind::RawMeat, 1);
        assert!(matches!(
            craft("cooked_meat", BuildingKind::Witch, &mut inventory),
            Err(CraftError::WrongStation { .. })
        ));
        assert!(matches!(
            craft("grilled_fish", BuildingKind::Fireplace, &mut inventory),
            Err(CraftError::UnknownRecipe(_))
        ));
    }

    #[test]
    fn test_full_inventory_refunds() {
        // Two slots: the ingredient stack cannot be freed because only part is used
        let mut inventory = Inventory::new(2);
        inventory.add_item(ItemKind::Leather, 4);
        inventory.add_item(ItemKind::Herb, 1);

        assert_eq!(
            craft("leather_helmet", BuildingKind::Tailor, &mut inventory),
            Err(CraftError::InventoryFull)
        );
        assert_eq!(inventory.count_of(ItemKind::Leather), 4);
    }

    #[test]
    fn test_recipes_per_station() {
        let names: Vec<_> = recipes_for(BuildingKind::Fireplace).map(|r| r.name).collect();
        assert_eq!(names, vec!["cooked_meat"]);
        assert_eq!(recipes_for(BuildingKind::Bedroom).count(), 0);
    }
}

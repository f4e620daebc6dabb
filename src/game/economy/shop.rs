//! Shops
//!
//! What each hub building sells and how a purchase is applied. Every
//! purchase is atomic: gold leaves the purse only when the goods land.

use thiserror::Error;

use crate::game::area::BuildingKind;
use crate::game::player::{EquipmentSlot, HIDDEN_SLOTS, ItemKind, Player, TOTAL_SLOTS, WeaponKind};

/// Slots added by the tailor's backpack
pub const BACKPACK_SLOTS: usize = HIDDEN_SLOTS;

/// Resources the smith buys
pub const SELLABLE_RESOURCES: [ItemKind; 3] = [ItemKind::Dirt, ItemKind::Stone, ItemKind::CopperOre];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("not enough gold: need {needed}, have {available}")]
    NotEnoughGold { needed: u32, available: u32 },
    #[error("inventory is full")]
    InventoryFull,
    #[error("already owned")]
    AlreadyOwned,
    #[error("current weapon is at least as strong")]
    NotAnUpgrade,
    #[error("this building sells nothing at slot {0}")]
    NoSuchOffer(usize),
    #[error("no resources to sell")]
    NothingToSell,
    #[error("no shop is open")]
    Closed,
}

/// What a shop offer delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goods {
    /// Replace the wielded weapon
    Weapon(WeaponKind),
    /// Four armor pieces, worn at once
    ArmorSet([ItemKind; 4]),
    /// Extra inventory slots
    Backpack,
    /// One unit into the inventory
    Item(ItemKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    pub name: &'static str,
    pub price: u32,
    pub goods: Goods,
}

const fn offer(name: &'static str, price: u32, goods: Goods) -> Offer {
    Offer { name, price, goods }
}

const LEATHER_SET: [ItemKind; 4] = [
    ItemKind::LeatherHelmet,
    ItemKind::LeatherChestplate,
    ItemKind::LeatherLeggings,
    ItemKind::LeatherBoots,
];

const IRON_SET: [ItemKind; 4] = [
    ItemKind::IronHelmet,
    ItemKind::IronChestplate,
    ItemKind::IronLeggings,
    ItemKind::IronBoots,
];

/// Offers of a building, in menu order.
pub fn catalog(building: BuildingKind) -> Vec<Offer> {
    match building {
        BuildingKind::Smith => vec![
            offer("Iron Sword", 100, Goods::Weapon(WeaponKind::IronSword)),
            offer("Steel Sword", 250, Goods::Weapon(WeaponKind::SteelSword)),
            offer("Legendary Sword", 500, Goods::Weapon(WeaponKind::LegendarySword)),
        ],
        BuildingKind::Tailor => vec![
            offer("Leather Armor Set", 150, Goods::ArmorSet(LEATHER_SET)),
            offer("Iron Armor Set", 400, Goods::ArmorSet(IRON_SET)),
            offer("Backpack Upgrade", 200, Goods::Backpack),
        ],
        BuildingKind::Witch => vec![
            offer("Health Potion", 20, Goods::Item(ItemKind::HealthPotion)),
            offer("Strength Potion", 30, Goods::Item(ItemKind::StrengthPotion)),
            offer("Speed Potion", 25, Goods::Item(ItemKind::SpeedPotion)),
        ],
        BuildingKind::Fireplace => vec![
            offer("Cooked Meat", 10, Goods::Item(ItemKind::CookedMeat)),
            offer("Bread", 5, Goods::Item(ItemKind::Bread)),
            offer("Stew", 20, Goods::Item(ItemKind::Stew)),
        ],
        BuildingKind::Bedroom => Vec::new(),
    }
}

/// Buy offer `index` from `building`.
pub fn buy(player: &mut Player, building: BuildingKind, index: usize) -> Result<Offer, ShopError> {
    let offer = catalog(building)
        .get(index)
        .copied()
        .ok_or(ShopError::NoSuchOffer(index))?;

    if player.gold < offer.price {
        return Err(ShopError::NotEnoughGold {
            needed: offer.price,
            available: player.gold,
        });
    }

    deliver(player, offer.goods)?;
    player.spend_gold(offer.price);
    log::info!("Bought {} for {} gold", offer.name, offer.price);
    Ok(offer)
}

fn deliver(player: &mut Player, goods: Goods) -> Result<(), ShopError> {
    match goods {
        Goods::Weapon(weapon) => {
            if player.weapon == weapon {
                return Err(ShopError::AlreadyOwned);
            }
            if weapon.base_damage() <= player.weapon.base_damage() {
                return Err(ShopError::NotAnUpgrade);
            }
            player.equip_weapon(weapon);
        }
        Goods::ArmorSet(pieces) => {
            let worn = pieces.iter().all(|piece| {
                piece
                    .armor()
                    .is_some_and(|(slot, _)| player.equipment.get(EquipmentSlot::from(slot)) == Some(*piece))
            });
            if worn {
                return Err(ShopError::AlreadyOwned);
            }

            // Replaced pieces go back to the inventory; check they fit first.
            let mut inventory = player.inventory.clone();
            for piece in pieces {
                let Some((slot, _)) = piece.armor() else { continue };
                let replaced = player.equipment.get(EquipmentSlot::from(slot));
                if let Some(old) = replaced.filter(|old| *old != piece) {
                    if !inventory.add_item(old, 1) {
                        return Err(ShopError::InventoryFull);
                    }
                }
            }
            player.inventory = inventory;
            for piece in pieces {
                player.wear(piece);
            }
        }
        Goods::Backpack => {
            if player.inventory.capacity() >= TOTAL_SLOTS + BACKPACK_SLOTS {
                return Err(ShopError::AlreadyOwned);
            }
            player.inventory.grow(BACKPACK_SLOTS);
        }
        Goods::Item(item) => {
            if !player.inventory.add_item(item, 1) {
                return Err(ShopError::InventoryFull);
            }
        }
    }
    Ok(())
}

/// Sell every mined resource to the smith. Returns the gold earned.
pub fn sell_all_resources(player: &mut Player) -> Result<u32, ShopError> {
    let mut earned = 0;
    for item in SELLABLE_RESOURCES {
        let price = item.sell_price().unwrap_or_default();
        earned += player.inventory.take_all(item) * price;
    }
    if earned == 0 {
        return Err(ShopError::NothingToSell);
    }
    player.add_gold(earned);
    log::info!("Sold resources for {} gold", earned);
    Ok(earned)
}

//! Tiered item factories.

use crate::item::Item;
use crate::rarity::Rarity;

/// Produces a matched set of items for one quality tier.
pub trait ItemFactory {
    fn create_weapon(&self) -> Item;
    fn create_armor(&self) -> Item;
    fn create_consumable(&self) -> Item;

    /// Tier name used in logs and demo output.
    fn tier(&self) -> &'static str;
}

/// Starter gear (Common rarity).
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonItemFactory;

impl ItemFactory for CommonItemFactory {
    fn create_weapon(&self) -> Item {
        Item::weapon("Wooden Sword", 2.5, Rarity::Common, 50, 5, "Slashing")
    }

    fn create_armor(&self) -> Item {
        Item::armor("Leather Armor", 5.0, Rarity::Common, 75, 3, "Leather")
    }

    fn create_consumable(&self) -> Item {
        Item::consumable("Minor Health Potion", 0.3, Rarity::Common, 25, "Restores 30 HP", 3)
    }

    fn tier(&self) -> &'static str {
        "common"
    }
}

/// Rare gear.
#[derive(Debug, Default, Clone, Copy)]
pub struct RareItemFactory;

impl ItemFactory for RareItemFactory {
    fn create_weapon(&self) -> Item {
        Item::weapon("Steel Sword of Fire", 3.0, Rarity::Rare, 500, 15, "Magic")
    }

    fn create_armor(&self) -> Item {
        Item::armor("Enchanted Armor", 8.0, Rarity::Rare, 800, 8, "Magic")
    }

    fn create_consumable(&self) -> Item {
        Item::consumable("Mana Elixir", 0.5, Rarity::Rare, 200, "Restores 100 mana", 1)
    }

    fn tier(&self) -> &'static str {
        "rare"
    }
}

/// Epic and legendary gear.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegendaryItemFactory;

impl ItemFactory for LegendaryItemFactory {
    fn create_weapon(&self) -> Item {
        Item::weapon("Excalibur", 3.5, Rarity::Legendary, 5000, 50, "Divine")
    }

    fn create_armor(&self) -> Item {
        Item::armor("Dragon Scale Armor", 12.0, Rarity::Legendary, 7500, 25, "Dragon")
    }

    fn create_consumable(&self) -> Item {
        Item::consumable("Phoenix Feather", 0.1, Rarity::Epic, 3000, "Revives on death", 1)
    }

    fn tier(&self) -> &'static str {
        "legendary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    fn kinds(factory: &dyn ItemFactory) -> [Item; 3] {
        [
            factory.create_weapon(),
            factory.create_armor(),
            factory.create_consumable(),
        ]
    }

    #[test]
    fn factories_produce_one_of_each_kind() {
        let factories: [&dyn ItemFactory; 3] =
            [&CommonItemFactory, &RareItemFactory, &LegendaryItemFactory];

        for factory in factories {
            let [weapon, armor, consumable] = kinds(factory);
            assert!(matches!(weapon.kind(), ItemKind::Weapon { .. }));
            assert!(matches!(armor.kind(), ItemKind::Armor { .. }));
            assert!(matches!(consumable.kind(), ItemKind::Consumable { .. }));
        }
    }

    #[test]
    fn tiers_match_rarity() {
        assert!(kinds(&CommonItemFactory).iter().all(|i| i.rarity() == Rarity::Common));
        assert!(kinds(&RareItemFactory).iter().all(|i| i.rarity() == Rarity::Rare));
        assert!(kinds(&LegendaryItemFactory).iter().all(|i| i.rarity() >= Rarity::Epic));
    }

    #[test]
    fn each_call_yields_a_distinct_item() {
        let factory = CommonItemFactory;
        assert_ne!(factory.create_weapon(), factory.create_weapon());
    }
}

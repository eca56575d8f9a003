//! End-to-end admission scenarios driven through the public API only.

use proptest::prelude::*;

use satchel_inventory::{
    Inventory, InventoryBuilder, InventoryState, OrganizationStrategy, StateKind,
};
use satchel_items::{CommonItemFactory, Item, ItemFactory, Rarity};

fn weapon(i: usize) -> Item {
    Item::weapon(format!("Sword {i}"), 2.0, Rarity::Common, 50, 5, "Slashing")
}

#[test]
fn fill_overflow_and_recover() {
    let mut inventory = Inventory::new("Tester", 500.0, None, false);

    let items: Vec<Item> = (0..20).map(weapon).collect();
    for item in &items {
        assert!(inventory.add_item(item.clone()));
    }
    assert_eq!(inventory.item_count(), 20);
    assert_eq!(inventory.state(), &InventoryState::Normal);
    assert!((inventory.total_weight() - 40.0).abs() < 1e-9);

    assert!(!inventory.add_item(weapon(20)));
    assert_eq!(inventory.state(), &InventoryState::Overflow);
    assert_eq!(inventory.item_count(), 20);

    assert!(inventory.remove_item(&items[7]));
    assert_eq!(inventory.state(), &InventoryState::Normal);
    assert_eq!(inventory.item_count(), 19);

    assert!(inventory.add_item(weapon(21)));
    assert_eq!(inventory.item_count(), 20);
}

#[test]
fn locked_inventory_keeps_its_state() {
    let mut inventory = InventoryBuilder::new()
        .owner_name("Guard")
        .initial_item(CommonItemFactory.create_weapon())
        .build()
        .unwrap();
    let held = inventory.items()[0].clone();

    inventory.lock_inventory("Arrested");
    for _ in 0..3 {
        assert!(!inventory.add_item(CommonItemFactory.create_armor()));
        assert!(!inventory.remove_item(&held));
        assert_eq!(inventory.state().kind(), StateKind::Locked);
    }

    inventory.unlock_inventory();
    assert!(inventory.remove_item(&held));
    assert_eq!(inventory.item_count(), 0);
}

#[test]
fn warehouse_then_back_to_normal() {
    let mut inventory =
        Inventory::new("Trader", 1000.0, Some(OrganizationStrategy::ByWeight), false);
    inventory.activate_warehouse_mode();
    for i in 0..40 {
        assert!(inventory.add_item(weapon(i)));
    }
    assert_eq!(inventory.state().kind(), StateKind::Warehouse);

    inventory.set_state(InventoryState::Normal);
    assert!(!inventory.add_item(weapon(40)));
    assert_eq!(inventory.state().kind(), StateKind::Overflow);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: adding then removing the same items restores the total weight.
    #[test]
    fn add_then_remove_restores_total_weight(
        base in prop::collection::vec(0.0f64..50.0, 0..10),
        extra in prop::collection::vec(0.0f64..50.0, 0..10),
    ) {
        let mut inventory = Inventory::new("Tester", 1000.0, None, false);
        for weight in base {
            inventory.add_item(Item::misc("base", weight, Rarity::Common, 1, ""));
        }
        let before = inventory.total_weight();

        let added: Vec<Item> = extra
            .into_iter()
            .map(|weight| Item::misc("extra", weight, Rarity::Rare, 1, ""))
            .collect();
        for item in &added {
            prop_assert!(inventory.add_item(item.clone()));
        }
        for item in &added {
            prop_assert!(inventory.remove_item(item));
        }

        prop_assert!((inventory.total_weight() - before).abs() < 1e-6);
    }

    /// Property: outside warehouse mode a Normal inventory never holds more
    /// than the slot ceiling through adds alone.
    #[test]
    fn adds_never_exceed_ceiling(count in 0usize..60) {
        let mut inventory = Inventory::new("Tester", 1000.0, None, false);
        let accepted = (0..count).filter(|i| inventory.add_item(weapon(*i))).count();

        prop_assert_eq!(accepted, count.min(satchel_inventory::MAX_SLOTS));
        prop_assert_eq!(inventory.item_count(), accepted);
    }
}

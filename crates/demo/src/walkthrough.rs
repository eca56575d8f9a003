//! Scripted tour of the inventory: factories, builder, strategies, state
//! transitions. Output goes to any writer so it can be captured in tests.

use std::io::Write;

use anyhow::Context;
use tracing::info;

use satchel_inventory::{Inventory, InventoryBuilder, MAX_SLOTS, Organize, OrganizationStrategy};
use satchel_items::{
    CommonItemFactory, Item, ItemFactory, LegendaryItemFactory, RareItemFactory, Rarity,
};

use crate::config::DemoConfig;

pub fn run(config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let factories: [&dyn ItemFactory; 3] =
        [&CommonItemFactory, &RareItemFactory, &LegendaryItemFactory];

    let starter_kit = factories.iter().flat_map(|factory| {
        info!(tier = factory.tier(), "creating items");
        [
            factory.create_weapon(),
            factory.create_armor(),
            factory.create_consumable(),
        ]
    });

    let mut inventory = InventoryBuilder::new()
        .owner_name(config.owner_name.clone())
        .max_weight(config.max_weight)
        .strategy(config.strategy)
        .warehouse_mode(config.warehouse_mode)
        .initial_items(starter_kit)
        .initial_item(Item::quest(
            "Ancient Map",
            0.1,
            Rarity::Epic,
            0,
            "Lost Treasure",
            false,
        ))
        .build()
        .context("building demo inventory")?;

    writeln!(out, "{}", inventory.report())?;

    section(out, "Organization strategies")?;
    for strategy in OrganizationStrategy::ALL {
        inventory.set_organization_strategy(strategy);
        writeln!(out, "{}", inventory.report())?;
    }

    section(out, "Statistics")?;
    writeln!(out, "{}", inventory.statistics())?;

    section(out, "Filling up")?;
    inventory.set_organization_strategy(OrganizationStrategy::NoSorting);
    let mut filler = 0;
    while inventory.add_item(Item::misc(
        format!("Pebble {filler}"),
        0.1,
        Rarity::Common,
        1,
        "A smooth pebble",
    )) {
        filler += 1;
        if filler > MAX_SLOTS * 2 {
            break;
        }
    }
    writeln!(
        out,
        "Added {filler} pebbles; {} items held, state: {}",
        inventory.item_count(),
        inventory.state_description()
    )?;

    if let Some(first) = inventory.items().first().cloned() {
        let removed = inventory.remove_item(&first);
        writeln!(
            out,
            "Removed {:?}: {removed}; state: {}",
            first.name(),
            inventory.state_description()
        )?;
    }

    section(out, "Lock")?;
    inventory.lock_inventory("Shop is closed");
    let refused = !inventory.add_item(CommonItemFactory.create_consumable());
    writeln!(
        out,
        "Add while locked refused: {refused}; state: {}",
        inventory.state_description()
    )?;
    inventory.unlock_inventory();
    writeln!(out, "Unlocked; state: {}", inventory.state_description())?;

    section(out, "Warehouse")?;
    inventory.activate_warehouse_mode();
    for _ in 0..5 {
        inventory.add_item(RareItemFactory.create_weapon());
    }
    inventory.set_organization_strategy(OrganizationStrategy::GroupByType);
    writeln!(out, "{}", inventory.report())?;

    summary(out, &inventory)?;
    Ok(())
}

fn section(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "### {title}")
}

fn summary(out: &mut impl Write, inventory: &Inventory) -> std::io::Result<()> {
    writeln!(
        out,
        "Final: {} items, {:.1} kg, listed {} ({})",
        inventory.item_count(),
        inventory.total_weight(),
        inventory.organized_items().len(),
        inventory.strategy().name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkthrough_runs_to_completion() {
        let mut out = Vec::new();
        run(&DemoConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("INVENTORY [Aragorn]"));
        assert!(text.contains("OVERFLOW (removal only)"));
        assert!(text.contains("Add while locked refused: true"));
        assert!(text.contains("WAREHOUSE (unlimited)"));
        assert!(text.contains("Final: 24 items"));
    }

    #[test]
    fn warehouse_config_never_overflows() {
        let config = DemoConfig {
            warehouse_mode: true,
            ..DemoConfig::default()
        };
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(&format!("Added {} pebbles", MAX_SLOTS * 2 + 1)));
    }
}

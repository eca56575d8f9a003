//! Read-only summaries of an inventory: statistics and a rendered listing.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use satchel_items::{Item, ItemKind, Rarity};

use crate::inventory::Inventory;
use crate::strategy::Organize;

const RULE_WIDTH: usize = 80;

/// Aggregate figures over the items currently held.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryStatistics {
    pub item_count: usize,
    pub total_value: u64,
    /// Mean item weight; `0.0` when empty.
    pub average_weight: f64,
    pub weapons: usize,
    pub armor: usize,
    pub consumables: usize,
    pub quest_items: usize,
    pub misc: usize,
    /// Counts for rarities that occur at least once, ordered by rarity.
    pub by_rarity: BTreeMap<Rarity, usize>,
}

impl InventoryStatistics {
    pub fn from_items(items: &[Item]) -> Self {
        let mut stats = Self {
            item_count: items.len(),
            total_value: 0,
            average_weight: 0.0,
            weapons: 0,
            armor: 0,
            consumables: 0,
            quest_items: 0,
            misc: 0,
            by_rarity: BTreeMap::new(),
        };

        let mut total_weight = 0.0;
        for item in items {
            stats.total_value += u64::from(item.value());
            total_weight += item.weight();
            *stats.by_rarity.entry(item.rarity()).or_default() += 1;
            match item.kind() {
                ItemKind::Weapon { .. } => stats.weapons += 1,
                ItemKind::Armor { .. } => stats.armor += 1,
                ItemKind::Consumable { .. } => stats.consumables += 1,
                ItemKind::Quest { .. } => stats.quest_items += 1,
                ItemKind::Misc { .. } => stats.misc += 1,
            }
        }

        if !items.is_empty() {
            stats.average_weight = total_weight / items.len() as f64;
        }
        stats
    }
}

impl core::fmt::Display for InventoryStatistics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "INVENTORY STATISTICS")?;
        writeln!(f, "  Total value: {}", self.total_value)?;
        writeln!(f, "  Average weight: {:.2} kg", self.average_weight)?;
        writeln!(f, "  Weapons: {}", self.weapons)?;
        writeln!(f, "  Armor: {}", self.armor)?;
        writeln!(f, "  Consumables: {}", self.consumables)?;
        writeln!(f, "  Quest items: {}", self.quest_items)?;
        writeln!(f, "  Misc: {}", self.misc)?;
        writeln!(f, "  By rarity:")?;
        for (rarity, count) in &self.by_rarity {
            writeln!(f, "    - {rarity}: {count}")?;
        }
        write!(f, "{}", "-".repeat(60))
    }
}

/// Point-in-time listing of an inventory, ordered by its active strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryReport {
    pub owner_name: String,
    pub state: String,
    pub strategy: String,
    pub item_count: usize,
    pub total_weight: f64,
    pub max_weight: f64,
    /// Item descriptions in presentation order.
    pub items: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl core::fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "INVENTORY [{}] | State: {}", self.owner_name, self.state)?;
        writeln!(
            f,
            "   Items: {} | Weight: {:.1} / {} kg",
            self.item_count, self.total_weight, self.max_weight
        )?;
        writeln!(f, "{rule}")?;

        if self.item_count == 0 {
            writeln!(f, "Inventory is empty")?;
        } else {
            writeln!(f, "Organized by: {}", self.strategy)?;
            writeln!(f)?;
            for (index, description) in self.items.iter().enumerate() {
                writeln!(f, "  {}. {description}", index + 1)?;
            }
        }
        write!(f, "{rule}")
    }
}

impl Inventory {
    pub fn statistics(&self) -> InventoryStatistics {
        InventoryStatistics::from_items(self.items())
    }

    /// Snapshot the inventory for display. Stored order is not affected.
    pub fn report(&self) -> InventoryReport {
        InventoryReport {
            owner_name: self.owner_name().to_string(),
            state: self.state_description(),
            strategy: self.strategy().name().to_string(),
            item_count: self.item_count(),
            total_weight: self.total_weight(),
            max_weight: self.max_weight(),
            items: self
                .organized_items()
                .into_iter()
                .map(Item::description)
                .collect(),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::OrganizationStrategy;

    fn stocked() -> Inventory {
        let mut inventory =
            Inventory::new("Hero", 50.0, Some(OrganizationStrategy::ByValue), false);
        inventory.add_item(Item::weapon("Sword", 2.0, Rarity::Common, 50, 5, "Slashing"));
        inventory.add_item(Item::armor("Plate", 8.0, Rarity::Rare, 800, 8, "Metal"));
        inventory.add_item(Item::consumable("Potion", 0.5, Rarity::Common, 25, "Heal", 2));
        inventory.add_item(Item::quest("Key", 0.5, Rarity::Legendary, 0, "Vault", false));
        inventory
    }

    #[test]
    fn statistics_of_empty_inventory() {
        let stats = Inventory::new("Nobody", 10.0, None, false).statistics();
        assert_eq!(stats.item_count, 0);
        assert_eq!(stats.total_value, 0);
        assert_eq!(stats.average_weight, 0.0);
        assert!(stats.by_rarity.is_empty());
    }

    #[test]
    fn statistics_count_kinds_and_rarities() {
        let stats = stocked().statistics();

        assert_eq!(stats.item_count, 4);
        assert_eq!(stats.total_value, 875);
        assert!((stats.average_weight - 2.75).abs() < 1e-9);
        assert_eq!(
            (stats.weapons, stats.armor, stats.consumables, stats.quest_items, stats.misc),
            (1, 1, 1, 1, 0)
        );

        let rarities: Vec<(Rarity, usize)> = stats.by_rarity.into_iter().collect();
        assert_eq!(
            rarities,
            vec![(Rarity::Common, 2), (Rarity::Rare, 1), (Rarity::Legendary, 1)]
        );
    }

    #[test]
    fn report_lists_items_in_strategy_order() {
        let inventory = stocked();
        let report = inventory.report();

        assert_eq!(report.owner_name, "Hero");
        assert_eq!(report.state, "NORMAL (max 20 slots)");
        assert_eq!(report.strategy, OrganizationStrategy::ByValue.name());
        assert_eq!(report.item_count, 4);
        assert!((report.total_weight - 11.0).abs() < 1e-9);
        assert!(report.items[0].contains("Plate"));
        assert!(report.items[3].contains("Key"));

        // Stored order untouched.
        assert_eq!(inventory.items()[0].name(), "Sword");
    }

    #[test]
    fn rendered_report() {
        let rendered = stocked().report().to_string();
        assert!(rendered.contains("INVENTORY [Hero] | State: NORMAL (max 20 slots)"));
        assert!(rendered.contains("Items: 4 | Weight: 11.0 / 50 kg"));
        assert!(rendered.contains("  1. [Rare] Plate"));

        let empty = Inventory::new("Nobody", 10.0, None, false).report().to_string();
        assert!(empty.contains("Inventory is empty"));
    }

    #[test]
    fn rendered_report_with_every_item_grouped_out() {
        let mut inventory =
            Inventory::new("Collector", 10.0, Some(OrganizationStrategy::GroupByType), false);
        inventory.add_item(Item::misc("Pebble", 0.1, Rarity::Common, 1, "Smooth"));

        let report = inventory.report();
        assert_eq!(report.item_count, 1);
        assert!(report.items.is_empty());

        let rendered = report.to_string();
        assert!(rendered.contains("Items: 1 | Weight: 0.1 / 10 kg"));
        assert!(rendered.contains(&format!(
            "Organized by: {}",
            OrganizationStrategy::GroupByType.name()
        )));
        assert!(!rendered.contains("Inventory is empty"));
    }

    #[test]
    fn report_serializes() {
        let json = serde_json::to_value(stocked().report()).unwrap();
        assert_eq!(json["owner_name"], "Hero");
        assert_eq!(json["items"].as_array().map(Vec::len), Some(4));
    }
}

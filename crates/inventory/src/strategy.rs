//! Organization strategies: how items are ordered for listing.
//!
//! Strategies never touch stored order. They borrow the stored items and
//! return a reordered list of references.

use core::cmp::Reverse;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use satchel_core::{DomainError, ValueObject};
use satchel_items::{Item, ItemKind};

/// Pure reordering of a sequence of items.
pub trait Organize {
    /// Return the items in presentation order. Must not drop or duplicate
    /// items unless the strategy documents otherwise.
    fn organize<'a>(&self, items: &'a [Item]) -> Vec<&'a Item>;

    /// Display name.
    fn name(&self) -> &'static str;
}

/// The available organization strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationStrategy {
    /// Rarest first.
    ByRarity,
    /// Lightest first.
    ByWeight,
    /// Most valuable first.
    ByValue,
    /// Weapons, armor, consumables, quest items. Other kinds are left out.
    GroupByType,
    /// Insertion order.
    #[default]
    NoSorting,
}

impl OrganizationStrategy {
    pub const ALL: [OrganizationStrategy; 5] = [
        OrganizationStrategy::ByRarity,
        OrganizationStrategy::ByWeight,
        OrganizationStrategy::ByValue,
        OrganizationStrategy::GroupByType,
        OrganizationStrategy::NoSorting,
    ];
}

impl ValueObject for OrganizationStrategy {}

impl Organize for OrganizationStrategy {
    fn organize<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let mut organized: Vec<&Item> = items.iter().collect();
        match self {
            // `sort_by` is stable, so ties keep insertion order.
            OrganizationStrategy::ByRarity => {
                organized.sort_by_key(|item| Reverse(item.rarity()));
            }
            OrganizationStrategy::ByWeight => {
                organized.sort_by(|a, b| a.weight().total_cmp(&b.weight()));
            }
            OrganizationStrategy::ByValue => {
                organized.sort_by_key(|item| Reverse(item.value()));
            }
            OrganizationStrategy::GroupByType => return group_by_type(items),
            OrganizationStrategy::NoSorting => {}
        }
        organized
    }

    fn name(&self) -> &'static str {
        match self {
            OrganizationStrategy::ByRarity => "By rarity (rarest first)",
            OrganizationStrategy::ByWeight => "By weight (lightest first)",
            OrganizationStrategy::ByValue => "By value (most valuable first)",
            OrganizationStrategy::GroupByType => {
                "Grouped by type (Weapons, Armor, Consumables, Quest items)"
            }
            OrganizationStrategy::NoSorting => "Unsorted (insertion order)",
        }
    }
}

fn group_by_type(items: &[Item]) -> Vec<&Item> {
    let mut weapons = Vec::new();
    let mut armor = Vec::new();
    let mut consumables = Vec::new();
    let mut quest_items = Vec::new();

    for item in items {
        if let Some(damage) = item.damage() {
            weapons.push((damage, item));
        } else if let Some(defense) = item.defense() {
            armor.push((defense, item));
        } else {
            match item.kind() {
                ItemKind::Consumable { .. } => consumables.push(item),
                ItemKind::Quest { .. } => quest_items.push(item),
                ItemKind::Weapon { .. } | ItemKind::Armor { .. } | ItemKind::Misc { .. } => {}
            }
        }
    }

    weapons.sort_by_key(|(damage, _)| Reverse(*damage));
    armor.sort_by_key(|(defense, _)| Reverse(*defense));

    weapons
        .into_iter()
        .map(|(_, item)| item)
        .chain(armor.into_iter().map(|(_, item)| item))
        .chain(consumables)
        .chain(quest_items)
        .collect()
}

impl core::fmt::Display for OrganizationStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrganizationStrategy {
    type Err = DomainError;

    /// Accepts the short names `rarity`, `weight`, `value`, `type` and `none`
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rarity" => Ok(Self::ByRarity),
            "weight" => Ok(Self::ByWeight),
            "value" => Ok(Self::ByValue),
            "type" => Ok(Self::GroupByType),
            "none" => Ok(Self::NoSorting),
            other => Err(DomainError::validation(format!(
                "unknown organization strategy: {other}"
            ))),
        }
    }
}

//! Validating builder for [`Inventory`].

use tracing::{debug, warn};

use satchel_core::{DomainError, DomainResult};
use satchel_items::Item;

use crate::inventory::Inventory;
use crate::strategy::OrganizationStrategy;

pub const DEFAULT_OWNER_NAME: &str = "Unknown";
pub const DEFAULT_MAX_WEIGHT: f64 = 50.0;

/// Collects construction parameters and validates them in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct InventoryBuilder {
    owner_name: String,
    max_weight: f64,
    strategy: OrganizationStrategy,
    initial_items: Vec<Item>,
    warehouse_mode: bool,
}

impl Default for InventoryBuilder {
    fn default() -> Self {
        Self {
            owner_name: DEFAULT_OWNER_NAME.to_string(),
            max_weight: DEFAULT_MAX_WEIGHT,
            strategy: OrganizationStrategy::NoSorting,
            initial_items: Vec::new(),
            warehouse_mode: false,
        }
    }
}

impl InventoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner_name(mut self, name: impl Into<String>) -> Self {
        self.owner_name = name.into();
        self
    }

    pub fn max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    pub fn strategy(mut self, strategy: OrganizationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn initial_item(mut self, item: Item) -> Self {
        self.initial_items.push(item);
        self
    }

    pub fn initial_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.initial_items.extend(items);
        self
    }

    pub fn warehouse_mode(mut self, enable: bool) -> Self {
        self.warehouse_mode = enable;
        self
    }

    /// Validate the parameters and assemble the inventory.
    ///
    /// Initial items go through [`Inventory::add_item`], so outside warehouse
    /// mode anything beyond the slot ceiling is refused. Initial items heavier
    /// than the weight cap only produce a warning.
    pub fn build(self) -> DomainResult<Inventory> {
        if self.owner_name.trim().is_empty() {
            return Err(DomainError::validation("owner name cannot be empty"));
        }
        if !(self.max_weight.is_finite() && self.max_weight > 0.0) {
            return Err(DomainError::validation(format!(
                "max weight must be positive, got {}",
                self.max_weight
            )));
        }

        let initial_weight: f64 = self.initial_items.iter().map(Item::weight).sum();
        if initial_weight > self.max_weight {
            warn!(
                owner = %self.owner_name,
                initial_weight,
                max_weight = self.max_weight,
                "initial items exceed max weight"
            );
        }

        let mut inventory = Inventory::new(
            self.owner_name,
            self.max_weight,
            Some(self.strategy),
            self.warehouse_mode,
        );

        let offered = self.initial_items.len();
        let accepted = self
            .initial_items
            .into_iter()
            .map(|item| inventory.add_item(item))
            .filter(|added| *added)
            .count();
        debug!(owner = inventory.owner_name(), offered, accepted, "inventory built");

        Ok(inventory)
    }
}

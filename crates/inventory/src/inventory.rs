//! The inventory: item storage coordinated by an admission state and an
//! organization strategy.

use tracing::{info, warn};

use satchel_items::Item;

use crate::state::{AdmissionPolicy, DEFAULT_LOCK_REASON, InventoryState};
use crate::strategy::{Organize, OrganizationStrategy};

/// A capacity-bounded item container.
///
/// Storage order is insertion order and is never changed by listing. All
/// mutations report refusal through their `bool` return; nothing here errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    owner_name: String,
    max_weight: f64,
    items: Vec<Item>,
    state: InventoryState,
    strategy: OrganizationStrategy,
}

impl Inventory {
    /// Create an empty inventory.
    ///
    /// A missing strategy falls back to [`OrganizationStrategy::NoSorting`].
    /// The initial state is `Warehouse` when `warehouse_mode` is set, `Normal`
    /// otherwise. `max_weight` is informational; admission only counts slots.
    pub fn new(
        owner_name: impl Into<String>,
        max_weight: f64,
        strategy: Option<OrganizationStrategy>,
        warehouse_mode: bool,
    ) -> Self {
        let state = if warehouse_mode {
            InventoryState::Warehouse
        } else {
            InventoryState::Normal
        };

        Self {
            owner_name: owner_name.into(),
            max_weight,
            items: Vec::new(),
            state,
            strategy: strategy.unwrap_or_default(),
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    pub fn strategy(&self) -> OrganizationStrategy {
        self.strategy
    }

    /// Items in storage (insertion) order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of item weights; `0.0` when empty.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(Item::weight).sum()
    }

    /// Add an item if the current state admits it.
    ///
    /// A state may request a transition even when it refuses the item (a full
    /// `Normal` inventory moves to `Overflow`).
    pub fn add_item(&mut self, item: impl Into<Option<Item>>) -> bool {
        let Some(item) = item.into() else {
            warn!(owner = %self.owner_name, "cannot add a missing item");
            return false;
        };

        let (allowed, transition) = self.state.try_add(&item, self.items.len()).into_parts();
        self.apply_transition(transition);

        if allowed {
            self.items.push(item);
        }
        allowed
    }

    /// Remove one occurrence of an item if it is held and the current state
    /// admits the removal.
    ///
    /// Missing or unknown items are refused before the state is consulted.
    pub fn remove_item<'a>(&mut self, item: impl Into<Option<&'a Item>>) -> bool {
        let Some(item) = item.into() else {
            warn!(owner = %self.owner_name, "cannot remove a missing item");
            return false;
        };
        let Some(position) = self.items.iter().position(|held| held == item) else {
            warn!(owner = %self.owner_name, item = item.name(), "item not found in inventory");
            return false;
        };

        let remaining = self.items.len() - 1;
        let (allowed, transition) = self.state.try_remove(item, remaining).into_parts();
        if allowed {
            self.items.remove(position);
        }
        self.apply_transition(transition);
        allowed
    }

    /// Replace the organization strategy. A missing strategy is ignored.
    pub fn set_organization_strategy(
        &mut self,
        strategy: impl Into<Option<OrganizationStrategy>>,
    ) {
        let Some(strategy) = strategy.into() else {
            warn!(
                owner = %self.owner_name,
                "organization strategy cannot be empty, keeping current"
            );
            return;
        };
        self.strategy = strategy;
        info!(
            owner = %self.owner_name,
            strategy = strategy.name(),
            "organization strategy changed"
        );
    }

    /// Replace the admission state unconditionally.
    pub fn set_state(&mut self, state: InventoryState) {
        self.state = state;
    }

    /// Lock with the default reason.
    pub fn lock(&mut self) {
        self.lock_inventory(DEFAULT_LOCK_REASON);
    }

    /// Lock against all additions and removals.
    pub fn lock_inventory(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        info!(owner = %self.owner_name, reason = %reason, "inventory locked");
        self.set_state(InventoryState::Locked { reason });
    }

    /// Return to `Normal`, whatever the current occupancy.
    pub fn unlock_inventory(&mut self) {
        self.set_state(InventoryState::Normal);
        info!(owner = %self.owner_name, "inventory unlocked");
    }

    pub fn activate_warehouse_mode(&mut self) {
        self.set_state(InventoryState::Warehouse);
        info!(owner = %self.owner_name, "warehouse mode activated");
    }

    /// Items in the order chosen by the active strategy.
    pub fn organized_items(&self) -> Vec<&Item> {
        self.strategy.organize(&self.items)
    }

    pub fn state_description(&self) -> String {
        self.state.description()
    }

    fn apply_transition(&mut self, transition: Option<InventoryState>) {
        let Some(next) = transition else {
            return;
        };
        if next != self.state {
            info!(
                owner = %self.owner_name,
                from = ?self.state.kind(),
                to = ?next.kind(),
                "inventory state changed"
            );
        }
        self.set_state(next);
    }
}

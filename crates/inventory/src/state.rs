//! Admission state machine.
//!
//! A state never touches the container. It inspects the request and returns
//! an [`Admission`]: whether the operation may proceed, plus an optional
//! state the container must switch to. The container applies both.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use satchel_core::ValueObject;
use satchel_items::Item;

/// Item count at which a `Normal` container stops admitting additions.
///
/// Independent of the container's declared weight cap.
pub const MAX_SLOTS: usize = 20;

/// Reason recorded by [`crate::Inventory::lock`].
pub const DEFAULT_LOCK_REASON: &str = "Inventory is locked";

/// Discriminant of [`InventoryState`], handy for comparisons and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateKind {
    Normal,
    Overflow,
    Warehouse,
    Locked,
}

/// Current admission state of an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum InventoryState {
    /// Slot-limited: additions allowed while fewer than [`MAX_SLOTS`] items are held.
    #[default]
    Normal,
    /// Full: only removals are allowed.
    Overflow,
    /// Unlimited storage.
    Warehouse,
    /// Administratively locked: nothing may be added or removed.
    Locked { reason: String },
}

impl InventoryState {
    pub fn locked(reason: impl Into<String>) -> Self {
        Self::Locked {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> StateKind {
        match self {
            InventoryState::Normal => StateKind::Normal,
            InventoryState::Overflow => StateKind::Overflow,
            InventoryState::Warehouse => StateKind::Warehouse,
            InventoryState::Locked { .. } => StateKind::Locked,
        }
    }

    pub fn lock_reason(&self) -> Option<&str> {
        match self {
            InventoryState::Locked { reason } => Some(reason),
            _ => None,
        }
    }
}

impl ValueObject for InventoryState {}

/// Outcome of consulting a state about an add or remove.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Admission {
    allowed: bool,
    transition: Option<InventoryState>,
}

impl Admission {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            transition: None,
        }
    }

    pub fn deny() -> Self {
        Self {
            allowed: false,
            transition: None,
        }
    }

    /// Request that the container switch to `next`, whatever the verdict.
    pub fn then(mut self, next: InventoryState) -> Self {
        self.transition = Some(next);
        self
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn transition(&self) -> Option<&InventoryState> {
        self.transition.as_ref()
    }

    pub fn into_parts(self) -> (bool, Option<InventoryState>) {
        (self.allowed, self.transition)
    }
}

/// Admission decisions for adds and removes.
///
/// Implementations must be pure: they decide, the container mutates.
pub trait AdmissionPolicy {
    /// Decide whether `item` may be added to a container currently holding
    /// `occupancy` items.
    fn try_add(&self, item: &Item, occupancy: usize) -> Admission;

    /// Decide whether `item` may be removed, given the count the container
    /// will hold once it is gone.
    fn try_remove(&self, item: &Item, remaining: usize) -> Admission;

    /// Human-readable description of the state.
    fn description(&self) -> String;
}

impl AdmissionPolicy for InventoryState {
    fn try_add(&self, item: &Item, occupancy: usize) -> Admission {
        match self {
            InventoryState::Normal => {
                if occupancy >= MAX_SLOTS {
                    warn!(
                        item = item.name(),
                        occupancy,
                        "inventory is full, remove something first"
                    );
                    return Admission::deny().then(InventoryState::Overflow);
                }
                debug!(item = item.name(), kind = item.kind().label(), "item added");
                Admission::allow()
            }
            InventoryState::Overflow => {
                warn!(item = item.name(), "inventory overflowing, cannot add");
                Admission::deny()
            }
            InventoryState::Warehouse => {
                debug!(
                    item = item.name(),
                    kind = item.kind().label(),
                    "item added to warehouse"
                );
                Admission::allow()
            }
            InventoryState::Locked { reason } => {
                warn!(item = item.name(), reason = %reason, "inventory locked");
                Admission::deny()
            }
        }
    }

    fn try_remove(&self, item: &Item, remaining: usize) -> Admission {
        match self {
            InventoryState::Normal => {
                debug!(item = item.name(), "item removed");
                if remaining < MAX_SLOTS {
                    Admission::allow().then(InventoryState::Normal)
                } else {
                    Admission::allow()
                }
            }
            // Any single removal leaves Overflow, even if the count is still
            // at or above the ceiling.
            InventoryState::Overflow => {
                info!(item = item.name(), remaining, "item removed, leaving overflow");
                Admission::allow().then(InventoryState::Normal)
            }
            InventoryState::Warehouse => {
                debug!(item = item.name(), "item removed from warehouse");
                Admission::allow()
            }
            InventoryState::Locked { reason } => {
                warn!(item = item.name(), reason = %reason, "inventory locked");
                Admission::deny()
            }
        }
    }

    fn description(&self) -> String {
        match self {
            InventoryState::Normal => format!("NORMAL (max {MAX_SLOTS} slots)"),
            InventoryState::Overflow => "OVERFLOW (removal only)".to_string(),
            InventoryState::Warehouse => "WAREHOUSE (unlimited)".to_string(),
            InventoryState::Locked { reason } => format!("LOCKED ({reason})"),
        }
    }
}

impl core::fmt::Display for InventoryState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.description())
    }
}

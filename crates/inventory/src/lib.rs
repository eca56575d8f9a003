//! Inventory domain module.
//!
//! A slot-limited item container whose admission rules are driven by a small
//! state machine (`Normal`, `Overflow`, `Warehouse`, `Locked`) and whose
//! listings are ordered by a pluggable organization strategy. Pure domain
//! logic: no IO, no storage.

pub mod builder;
pub mod inventory;
pub mod report;
pub mod state;
pub mod strategy;

pub use builder::{DEFAULT_MAX_WEIGHT, DEFAULT_OWNER_NAME, InventoryBuilder};
pub use inventory::Inventory;
pub use report::{InventoryReport, InventoryStatistics};
pub use state::{
    Admission, AdmissionPolicy, DEFAULT_LOCK_REASON, InventoryState, MAX_SLOTS, StateKind,
};
pub use strategy::{Organize, OrganizationStrategy};

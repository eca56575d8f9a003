//! Item records consumed by the inventory.
//!
//! Items are plain immutable data: the inventory only reads their weight,
//! rarity, value and kind.

pub mod factory;
pub mod item;
pub mod rarity;

pub use factory::{CommonItemFactory, ItemFactory, LegendaryItemFactory, RareItemFactory};
pub use item::{Item, ItemKind};
pub use rarity::Rarity;

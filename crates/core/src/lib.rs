//! `satchel-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the item and
//! inventory crates (no IO, no logging setup).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use value_object::ValueObject;

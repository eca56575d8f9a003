//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values
/// (`Rarity`, organization strategies, admission states). Two instances
/// with the same values are interchangeable.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy around.
/// - **PartialEq**: compared by attribute values.
/// - **Debug**: useful in logs and assertions.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

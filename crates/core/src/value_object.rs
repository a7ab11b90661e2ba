//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: board dimensions,
/// a price range or a calculation result have no identity of their own. To
/// "modify" one, build a new one.
///
/// The trait requires `Clone`, `PartialEq` and `Debug` so values can be copied,
/// compared and logged like primitives.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

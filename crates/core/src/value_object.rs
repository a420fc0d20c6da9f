//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, and two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: a tax rate, a catalog product (name + net price + rate)
/// - **Entity**: an invoice, identified by its number while its lines change
///
/// Value objects are **immutable**. To "modify" one, build a new one.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// enum TaxRate {
///     Exempt,
///     Ratio(Decimal),
/// }
///
/// impl ValueObject for TaxRate {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

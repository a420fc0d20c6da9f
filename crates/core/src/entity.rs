//! Entities: things tracked by identifier rather than by value.

/// A domain object with a stable identifier.
///
/// `Invoice` is the entity here: its number is drawn once at construction
/// and stays fixed while lines are added or merged. Products, by contrast,
/// are values and are matched on an invoice by name.
pub trait Entity {
    /// Identifier type, e.g. `InvoiceNumber`.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Identifier assigned at construction; never changes.
    fn id(&self) -> &Self::Id;
}

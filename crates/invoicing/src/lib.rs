//! Invoicing domain module.
//!
//! An invoice aggregates product lines, merges repeated products by name and
//! derives net, tax and gross totals with exact decimal arithmetic. Pure
//! domain logic: no IO, no storage.

pub mod invoice;

pub use invoice::{ITEM_COUNT_LABEL, Invoice, InvoiceLine, InvoiceSummary};

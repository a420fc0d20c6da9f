//! `invoicer-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{InvoiceNumber, NumberSource, RandomNumbers, SeededNumbers, SequentialNumbers};
pub use money::{exact_add, exact_mul, exact_sub, format_amount};
pub use value_object::ValueObject;

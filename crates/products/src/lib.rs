//! Product catalog model.
//!
//! A product knows its name, its net unit price and how it is taxed. Gross
//! prices are derived on demand with exact decimal arithmetic.

pub mod product;
pub mod tax;

pub use product::Product;
pub use tax::{EXCISE_SURCHARGE, ProductCategory, REDUCED_RATE, STANDARD_RATE, TaxRate};

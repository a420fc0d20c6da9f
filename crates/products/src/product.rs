use rust_decimal::Decimal;
use serde::Serialize;

use invoicer_core::{DomainError, DomainResult, ValueObject, exact_add, exact_mul};

use crate::tax::{ProductCategory, TaxRate};

/// A catalog entry: name, net unit price and tax treatment.
///
/// Immutable once built. For excise goods the surcharge is already part of
/// `price`, so every read sees the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    price: Decimal,
    tax_rate: TaxRate,
    category: Option<ProductCategory>,
}

impl Product {
    /// Build a product with an explicit tax rate. The price is stored as given.
    pub fn new(name: impl Into<String>, price: Decimal, tax_rate: TaxRate) -> DomainResult<Self> {
        Self::build(name.into(), price, tax_rate, None)
    }

    /// Build a product of a catalog category.
    ///
    /// Excise categories add their surcharge to `base_price` here, exactly once.
    pub fn of(category: ProductCategory, name: impl Into<String>, base_price: Decimal) -> DomainResult<Self> {
        ensure_price(base_price)?;

        let price = match category.excise() {
            Some(excise) => exact_add(base_price, excise)
                .ok_or_else(|| DomainError::invalid_argument("price out of range"))?,
            None => base_price,
        };

        Self::build(name.into(), price, category.tax_rate(), Some(category))
    }

    pub fn tax_free(name: impl Into<String>, price: Decimal) -> DomainResult<Self> {
        Self::of(ProductCategory::TaxFree, name, price)
    }

    pub fn other(name: impl Into<String>, price: Decimal) -> DomainResult<Self> {
        Self::of(ProductCategory::Other, name, price)
    }

    pub fn dairy(name: impl Into<String>, price: Decimal) -> DomainResult<Self> {
        Self::of(ProductCategory::Dairy, name, price)
    }

    pub fn bottle_of_wine(name: impl Into<String>, base_price: Decimal) -> DomainResult<Self> {
        Self::of(ProductCategory::BottleOfWine, name, base_price)
    }

    pub fn fuel_canister(name: impl Into<String>, base_price: Decimal) -> DomainResult<Self> {
        Self::of(ProductCategory::FuelCanister, name, base_price)
    }

    fn build(
        name: String,
        price: Decimal,
        tax_rate: TaxRate,
        category: Option<ProductCategory>,
    ) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("name cannot be empty"));
        }
        ensure_price(price)?;
        tax_rate.validate()?;

        // The exact gross price must be representable, so `price_with_tax`
        // neither overflows nor rounds.
        if exact_mul(price, Decimal::ONE + tax_rate.ratio()).is_none() {
            return Err(DomainError::invalid_argument("price out of range"));
        }

        Ok(Self {
            name,
            price,
            tax_rate,
            category,
        })
    }

    /// Deduplication key on an invoice (exact, case-sensitive).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Net unit price, excise included.
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// `None` when built through [`Product::new`].
    pub fn category(&self) -> Option<ProductCategory> {
        self.category
    }

    /// Gross unit price: `price * (1 + rate)`. Exempt products return `price` itself.
    pub fn price_with_tax(&self) -> Decimal {
        match self.tax_rate {
            TaxRate::Exempt => self.price,
            TaxRate::Ratio(ratio) => self.price * (Decimal::ONE + ratio),
        }
    }
}

impl ValueObject for Product {}

fn ensure_price(price: Decimal) -> DomainResult<()> {
    if price < Decimal::ZERO {
        return Err(DomainError::invalid_argument("price cannot be negative"));
    }
    Ok(())
}

//! Tax treatment of catalog products.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use invoicer_core::{DomainError, DomainResult, ValueObject};

/// Standard VAT ratio.
pub const STANDARD_RATE: Decimal = dec!(0.23);

/// Reduced VAT ratio (dairy and similar goods).
pub const REDUCED_RATE: Decimal = dec!(0.08);

/// Flat excise added to the net price of excise goods before tax.
pub const EXCISE_SURCHARGE: Decimal = dec!(5.56);

/// How a product is taxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRate {
    /// No tax at all. Gross price is the net price, untouched.
    Exempt,
    /// Tax as a ratio of the net price, e.g. `0.23`.
    Ratio(Decimal),
}

impl TaxRate {
    /// Build a ratio, rejecting anything outside `[0, 1]`.
    pub fn ratio_of(ratio: Decimal) -> DomainResult<Self> {
        let rate = Self::Ratio(ratio);
        rate.validate()?;
        Ok(rate)
    }

    /// The multiplier applied on top of the net price. `Exempt` is exactly zero.
    pub fn ratio(&self) -> Decimal {
        match self {
            TaxRate::Exempt => Decimal::ZERO,
            TaxRate::Ratio(r) => *r,
        }
    }

    pub fn is_exempt(&self) -> bool {
        matches!(self, TaxRate::Exempt)
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        if let TaxRate::Ratio(r) = self {
            if *r < Decimal::ZERO {
                return Err(DomainError::invalid_argument("tax rate cannot be negative"));
            }
            if *r > Decimal::ONE {
                return Err(DomainError::invalid_argument("tax rate cannot exceed 1"));
            }
        }
        Ok(())
    }
}

impl ValueObject for TaxRate {}

/// Closed set of catalog variants. Each fixes a tax rate and, for excise
/// goods, a surcharge folded into the net price at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    TaxFree,
    Other,
    Dairy,
    BottleOfWine,
    FuelCanister,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::TaxFree,
        ProductCategory::Other,
        ProductCategory::Dairy,
        ProductCategory::BottleOfWine,
        ProductCategory::FuelCanister,
    ];

    pub fn tax_rate(self) -> TaxRate {
        match self {
            ProductCategory::TaxFree => TaxRate::Exempt,
            ProductCategory::Dairy => TaxRate::Ratio(REDUCED_RATE),
            ProductCategory::Other | ProductCategory::BottleOfWine | ProductCategory::FuelCanister => {
                TaxRate::Ratio(STANDARD_RATE)
            }
        }
    }

    /// Excise surcharge for excise goods, `None` for everything else.
    pub fn excise(self) -> Option<Decimal> {
        match self {
            ProductCategory::BottleOfWine | ProductCategory::FuelCanister => Some(EXCISE_SURCHARGE),
            ProductCategory::TaxFree | ProductCategory::Other | ProductCategory::Dairy => None,
        }
    }
}

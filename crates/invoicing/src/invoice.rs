use rust_decimal::Decimal;
use serde::Serialize;

use invoicer_core::{
    DomainError, DomainResult, Entity, InvoiceNumber, NumberSource, RandomNumbers, exact_add,
    exact_mul, exact_sub, format_amount,
};
use invoicer_products::Product;

/// Label preceding the count of distinct lines on the last receipt line.
pub const ITEM_COUNT_LABEL: &str = "Liczba pozycji: ";

/// One invoice row: a product and how many units of it were sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceLine {
    product: Product,
    quantity: u64,
}

impl InvoiceLine {
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Always at least 1.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn net_amount(&self) -> DomainResult<Decimal> {
        exact_mul(self.product.price(), Decimal::from(self.quantity))
            .ok_or_else(|| DomainError::invariant("line net amount out of range"))
    }

    pub fn gross_amount(&self) -> DomainResult<Decimal> {
        exact_mul(self.product.price_with_tax(), Decimal::from(self.quantity))
            .ok_or_else(|| DomainError::invariant("line gross amount out of range"))
    }
}

/// A sales invoice.
///
/// Lines are kept in insertion order and are unique by product name. The
/// invoice only grows: lines are added or merged, never removed.
///
/// There is no internal locking. Share an invoice between threads only
/// behind external synchronization (e.g. a `Mutex`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    number: InvoiceNumber,
    lines: Vec<InvoiceLine>,
}

impl Invoice {
    /// Create an empty invoice numbered from the process-wide random source.
    pub fn new() -> Self {
        Self::with_number_source(&RandomNumbers)
    }

    pub fn with_number_source(source: &dyn NumberSource) -> Self {
        Self::with_number(source.next_number())
    }

    pub fn with_number(number: InvoiceNumber) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }

    pub fn number(&self) -> InvoiceNumber {
        self.number
    }

    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Number of distinct lines (not units).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, name: &str) -> Option<u64> {
        self.line_named(name).map(InvoiceLine::quantity)
    }

    fn line_named(&self, name: &str) -> Option<&InvoiceLine> {
        self.lines.iter().find(|line| line.product.name() == name)
    }

    /// Add a single unit of `product`.
    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        self.add_product_with_quantity(product, 1)
    }

    /// Add `quantity` units of `product`.
    ///
    /// When a line with the same product name exists, its quantity grows and
    /// its product (and price) is kept; the passed product is dropped.
    /// Otherwise a new line is appended. A rejected call changes nothing.
    pub fn add_product_with_quantity(&mut self, product: Product, quantity: i64) -> DomainResult<()> {
        if quantity < 1 {
            tracing::debug!(
                invoice = %self.number,
                product = product.name(),
                quantity,
                "rejected line: quantity below 1"
            );
            return Err(DomainError::invalid_argument("quantity must be at least 1"));
        }
        let quantity = u64::try_from(quantity)
            .map_err(|_| DomainError::invalid_argument("quantity must be at least 1"))?;

        let existing = self
            .lines
            .iter()
            .position(|line| line.product.name() == product.name());
        match existing {
            Some(index) => {
                let number = self.number;
                let line = &mut self.lines[index];
                let merged = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| DomainError::invariant("line quantity overflow"))?;
                line.quantity = merged;
                tracing::debug!(
                    invoice = %number,
                    product = line.product.name(),
                    quantity = merged,
                    "merged line"
                );
            }
            None => {
                tracing::debug!(
                    invoice = %self.number,
                    product = product.name(),
                    quantity,
                    "added line"
                );
                self.lines.push(InvoiceLine { product, quantity });
            }
        }
        Ok(())
    }

    /// Sum of net unit price times quantity over all lines. Zero when empty.
    ///
    /// Exact: a total that would need rounding to fit a `Decimal` is an
    /// `InvariantViolation`, never a silently shortened value.
    pub fn net_total(&self) -> DomainResult<Decimal> {
        self.sum_lines(InvoiceLine::net_amount, "net total out of range")
    }

    /// Sum of gross unit price times quantity over all lines.
    pub fn gross_total(&self) -> DomainResult<Decimal> {
        self.sum_lines(InvoiceLine::gross_amount, "gross total out of range")
    }

    /// Gross total minus net total.
    pub fn tax_total(&self) -> DomainResult<Decimal> {
        let gross = self.gross_total()?;
        let net = self.net_total()?;
        exact_sub(gross, net).ok_or_else(|| DomainError::invariant("tax total out of range"))
    }

    fn sum_lines(
        &self,
        amount: fn(&InvoiceLine) -> DomainResult<Decimal>,
        out_of_range: &'static str,
    ) -> DomainResult<Decimal> {
        self.lines.iter().try_fold(Decimal::ZERO, |total, line| {
            exact_add(total, amount(line)?)
                .ok_or_else(|| DomainError::invariant(out_of_range))
        })
    }

    /// Receipt text: number, one `name,net price,quantity` row per line,
    /// then the count of lines. Rows are newline-separated, no trailing newline.
    ///
    /// Names are not escaped, so a comma inside a name makes the row ambiguous.
    pub fn as_text(&self) -> String {
        self.to_string()
    }

    pub fn summary(&self) -> DomainResult<InvoiceSummary> {
        Ok(InvoiceSummary {
            number: self.number,
            lines: self.lines.clone(),
            item_count: self.lines.len(),
            net_total: self.net_total()?,
            tax_total: self.tax_total()?,
            gross_total: self.gross_total()?,
        })
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Invoice {
    type Id = InvoiceNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}

impl core::fmt::Display for Invoice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", self.number)?;
        for line in &self.lines {
            writeln!(
                f,
                "{},{},{}",
                line.product.name(),
                format_amount(line.product.price()),
                line.quantity
            )?;
        }
        write!(f, "{ITEM_COUNT_LABEL}{}", self.lines.len())
    }
}

/// Serializable snapshot of an invoice and its totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceSummary {
    pub number: InvoiceNumber,
    pub lines: Vec<InvoiceLine>,
    pub item_count: usize,
    pub net_total: Decimal,
    pub tax_total: Decimal,
    pub gross_total: Decimal,
}

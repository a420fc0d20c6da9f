//! Display helpers for exact decimal amounts.
//!
//! Amounts are never rounded while computing; scale is only fixed here, at
//! the rendering boundary.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits shown for amounts.
pub const DISPLAY_SCALE: u32 = 2;

/// Render `amount` with exactly two fractional digits.
///
/// Values with more precision are rounded half away from zero; shorter
/// values are padded (`200` renders as `"200.00"`).
pub fn format_amount(amount: Decimal) -> String {
    let mut shown = amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    shown.rescale(DISPLAY_SCALE);
    shown.to_string()
}

/// `a * b`, or `None` when the exact product does not fit a `Decimal`.
///
/// `checked_mul` only reports overflow; past 28 fractional digits or 96 bits
/// of mantissa it silently drops scale. A nonzero exact product always has
/// scale `a.scale() + b.scale()`.
pub fn exact_mul(a: Decimal, b: Decimal) -> Option<Decimal> {
    let product = a.checked_mul(b)?;
    exact_or_none(product, a.is_zero() || b.is_zero(), a.scale() + b.scale())
}

/// `a + b`, or `None` when the exact sum does not fit a `Decimal`.
pub fn exact_add(a: Decimal, b: Decimal) -> Option<Decimal> {
    let sum = a.checked_add(b)?;
    exact_or_none(sum, a.is_zero() || b.is_zero(), a.scale().max(b.scale()))
}

/// `a - b`, or `None` when the exact difference does not fit a `Decimal`.
pub fn exact_sub(a: Decimal, b: Decimal) -> Option<Decimal> {
    let difference = a.checked_sub(b)?;
    exact_or_none(difference, a.is_zero() || b.is_zero(), a.scale().max(b.scale()))
}

fn exact_or_none(result: Decimal, has_zero_operand: bool, expected_scale: u32) -> Option<Decimal> {
    // Zero operands short-circuit inside rust_decimal and are exact.
    if has_zero_operand || result.scale() == expected_scale {
        Some(result)
    } else {
        None
    }
}

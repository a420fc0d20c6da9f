//! Invoice numbers and the sources that hand them out.

use core::str::FromStr;
use core::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Largest number a source hands out. Keeps numbers readable by consumers
/// that parse them as signed 32-bit integers.
pub const MAX_INVOICE_NUMBER: u32 = i32::MAX as u32;

/// Identifier of an invoice, assigned once at construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(u32);

impl InvoiceNumber {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for InvoiceNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<InvoiceNumber> for u32 {
    fn from(value: InvoiceNumber) -> Self {
        value.0
    }
}

impl FromStr for InvoiceNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = u32::from_str(s.trim())
            .map_err(|e| DomainError::invalid_argument(format!("InvoiceNumber: {e}")))?;
        Ok(Self(value))
    }
}

/// Source of invoice numbers.
///
/// Implementations must be safe to call from several threads at once, since
/// invoices may be constructed concurrently even though a single invoice is
/// not shared.
pub trait NumberSource: Send + Sync {
    fn next_number(&self) -> InvoiceNumber;
}

/// Process-wide random source. Two invoices are overwhelmingly unlikely to
/// collide, but nothing guarantees it.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNumbers;

impl NumberSource for RandomNumbers {
    fn next_number(&self) -> InvoiceNumber {
        InvoiceNumber(rand::thread_rng().gen_range(1..=MAX_INVOICE_NUMBER))
    }
}

/// Deterministic source: the same seed yields the same sequence.
#[derive(Debug)]
pub struct SeededNumbers {
    rng: Mutex<StdRng>,
}

impl SeededNumbers {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl NumberSource for SeededNumbers {
    fn next_number(&self) -> InvoiceNumber {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        InvoiceNumber(rng.gen_range(1..=MAX_INVOICE_NUMBER))
    }
}

/// Monotonic counter, wrapping at `u32::MAX`.
#[derive(Debug)]
pub struct SequentialNumbers {
    next: AtomicU32,
}

impl SequentialNumbers {
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first),
        }
    }
}

impl Default for SequentialNumbers {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl NumberSource for SequentialNumbers {
    fn next_number(&self) -> InvoiceNumber {
        InvoiceNumber(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_numbers_are_positive_and_bounded() {
        let source = RandomNumbers;
        for _ in 0..1000 {
            let n = source.next_number().get();
            assert!(n >= 1);
            assert!(n <= MAX_INVOICE_NUMBER);
        }
    }

    #[test]
    fn seeded_numbers_do_not_repeat_within_a_run() {
        let source = SeededNumbers::new(42);
        let numbers: std::collections::HashSet<_> = (0..20).map(|_| source.next_number()).collect();
        assert_eq!(numbers.len(), 20);
    }

    #[test]
    fn seeded_numbers_are_reproducible() {
        let a = SeededNumbers::new(42);
        let b = SeededNumbers::new(42);
        let first: Vec<_> = (0..5).map(|_| a.next_number()).collect();
        let second: Vec<_> = (0..5).map(|_| b.next_number()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn sequential_numbers_count_up() {
        let source = SequentialNumbers::starting_at(100);
        assert_eq!(source.next_number(), InvoiceNumber::new(100));
        assert_eq!(source.next_number(), InvoiceNumber::new(101));
    }

    #[test]
    fn parse_invoice_number() {
        assert_eq!("  42 ".parse::<InvoiceNumber>().unwrap(), InvoiceNumber::new(42));
        match "-1".parse::<InvoiceNumber>().unwrap_err() {
            DomainError::InvalidArgument(msg) => assert!(msg.starts_with("InvoiceNumber")),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn sources_are_shareable_across_threads() {
        let source = std::sync::Arc::new(SequentialNumbers::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = source.clone();
                std::thread::spawn(move || source.next_number())
            })
            .collect();
        let mut numbers: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap().get()).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}

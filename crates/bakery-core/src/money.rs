//! # Money Module
//!
//! Provides the `Price` type and the truncating `Quantizer`.
//!
//! ## Why Fixed-Point Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Decimal prices, truncated at construction                │
//! │    "24.9599" quantized to 2 places = 24.95 (extra digits DROPPED,      │
//! │    never rounded up)                                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bakery_core::money::{Price, Quantizer};
//!
//! let quantizer = Quantizer::default(); // 2 decimal places
//!
//! // Parsing truncates toward zero:
//! let price = quantizer.parse("1.999").unwrap();
//! assert_eq!(price.to_string(), "1.99");
//!
//! // Arithmetic for line totals:
//! let total = quantizer.parse("24.95").unwrap() + quantizer.parse("9.95").unwrap() * 3;
//! assert_eq!(total.to_string(), "54.80");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::DEFAULT_PRICE_DECIMAL_PLACES;

// =============================================================================
// Price Type
// =============================================================================

/// A non-negative unit or total price with a fixed number of decimal places.
///
/// ## Design Decisions
/// - **Decimal inside**: exact fixed-point arithmetic, no float drift
/// - **Construction only via [`Quantizer`]**: every `Price` in the system has
///   already been truncated to the configured precision
/// - **Transparent serde**: serializes as the decimal string ("24.95")
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Returns zero price.
    #[inline]
    pub fn zero() -> Self {
        Price(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the bare decimal ("24.95").
///
/// ## Note
/// No currency symbol here; the CLI prepends `$` when printing receipts.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Addition of two Price values.
impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a pack count (for line totals).
impl Mul<u64> for Price {
    type Output = Self;

    #[inline]
    fn mul(self, count: u64) -> Self {
        Price(self.0 * Decimal::from(count))
    }
}

/// Summation over line items; an empty iterator sums to zero.
impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::zero(), |acc, p| acc + p)
    }
}

// =============================================================================
// Quantizer
// =============================================================================

/// Truncates prices to a configured number of decimal places.
///
/// This is an explicit value passed into catalogue construction, not a
/// process-wide default: two catalogues with different precisions can coexist
/// in one process.
///
/// ## Truncation Law
/// Extra digits are dropped, never rounded up:
/// - `1.999` at 2 places → `1.99`
/// - `24.9599` at 2 places → `24.95`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantizer {
    decimal_places: u32,
}

impl Quantizer {
    /// Creates a quantizer for the given number of decimal places.
    #[inline]
    pub const fn new(decimal_places: u32) -> Self {
        Quantizer { decimal_places }
    }

    /// Returns the configured number of decimal places.
    #[inline]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Truncates a decimal to the configured precision.
    ///
    /// The result is rescaled so its textual form always carries exactly the
    /// configured number of places (`5` → `5.00` at 2 places).
    pub fn quantize(&self, value: Decimal) -> Price {
        let mut truncated =
            value.round_dp_with_strategy(self.decimal_places, RoundingStrategy::ToZero);
        truncated.rescale(self.decimal_places);
        Price(truncated)
    }

    /// Parses a raw price string, truncating to the configured precision.
    ///
    /// Returns `None` when the input is not a decimal or is negative; the
    /// catalogue uses that as its silent-discard signal.
    pub fn parse(&self, raw: &str) -> Option<Price> {
        let value: Decimal = raw.trim().parse().ok()?;
        if value.is_sign_negative() {
            return None;
        }
        Some(self.quantize(value))
    }
}

/// Default quantizer uses [`DEFAULT_PRICE_DECIMAL_PLACES`].
impl Default for Quantizer {
    fn default() -> Self {
        Quantizer::new(DEFAULT_PRICE_DECIMAL_PLACES)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

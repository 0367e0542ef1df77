//! # Error Types
//!
//! Domain-specific error types for bakery-core.
//!
//! ## Error Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Raise vs. Suppress                                   │
//! │                                                                         │
//! │  Direct lookups RAISE:                                                  │
//! │  ├── Bakery::get_product(code)      → UnknownProductCode               │
//! │  ├── Product::pack_price(size)      → UnknownPackSize                  │
//! │  └── Order::get_line / record_*     → UnknownLine                      │
//! │                                                                         │
//! │  Bulk operations SKIP:                                                  │
//! │  ├── Bakery::process_order          skips codes not in the catalogue   │
//! │  └── Product::total_price           skips sizes not in the pack table  │
//! │                                                                         │
//! │  Malformed catalogue entries are dropped at construction, never raised │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, size, raw input)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Bakery Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent lookup misses and input-boundary failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum BakeryError {
    /// A requested quantity could not be coerced to a non-negative integer.
    ///
    /// ## When This Occurs
    /// - Non-digit input at the CLI prompt
    /// - A value beyond the platform's maximum representable integer
    ///
    /// This fires at the parsing boundary, before the breakdown engine runs.
    #[error("invalid quantity '{raw}', should be a non-negative integer")]
    InvalidQuantity { raw: String },

    /// A direct catalogue lookup was made for a code that does not exist.
    ///
    /// Bulk order processing deliberately does NOT raise this: unknown codes
    /// encountered while iterating an order are skipped and their lines left
    /// untouched.
    #[error("{0} is not a code of products")]
    UnknownProductCode(String),

    /// A price was requested for a pack size not in a product's catalogue.
    ///
    /// Only direct `pack_price` lookups raise this; the bulk pricer skips
    /// unknown sizes instead (defensive against stale breakdown results).
    #[error("{size} is not in {code}'s pack options")]
    UnknownPackSize { code: String, size: u64 },

    /// A breakdown result was recorded against an order line whose code was
    /// never registered on the order.
    #[error("{0} is not in this order")]
    UnknownLine(String),

    /// The pack search evaluated more candidates than the configured budget.
    ///
    /// The candidate space is exponential in the number of pack sizes, so a
    /// budgeted solver fails fast instead of running unbounded. Unbudgeted
    /// solvers never return this.
    #[error("pack search exceeded the budget of {budget} candidates")]
    SearchExceeded { budget: u64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BakeryError.
pub type BakeryResult<T> = Result<T, BakeryError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BakeryError::InvalidQuantity {
            raw: "twelve".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid quantity 'twelve', should be a non-negative integer"
        );

        let err = BakeryError::UnknownProductCode("XX".to_string());
        assert_eq!(err.to_string(), "XX is not a code of products");

        let err = BakeryError::UnknownPackSize {
            code: "MB11".to_string(),
            size: 100,
        };
        assert_eq!(err.to_string(), "100 is not in MB11's pack options");
    }

    #[test]
    fn test_search_exceeded_message() {
        let err = BakeryError::SearchExceeded { budget: 10 };
        assert_eq!(
            err.to_string(),
            "pack search exceeded the budget of 10 candidates"
        );
    }
}

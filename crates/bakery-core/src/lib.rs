//! # bakery-core: Pure Business Logic for Rubix Bakery
//!
//! This crate is the **heart** of Rubix Bakery. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rubix Bakery Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/terminal (CLI)                          │   │
//! │  │    env config ──► quantity prompts ──► receipt printing        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bakery-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  engine   │  │  catalog  │  │   order   │  │   │
//! │  │   │   Price   │  │PackSolver │  │  Product  │  │   Order   │  │   │
//! │  │   │ Quantizer │  │ Breakdown │  │  Bakery   │  │ OrderLine │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Price` and the truncating `Quantizer` (fixed-point, never rounds up)
//! - [`engine`] - the pack-breakdown search: minimal remainder, deterministic tie-break
//! - [`catalog`] - `Product` and `Bakery` (catalogue lookup, pricing, order processing)
//! - [`order`] - `Order` line bookkeeping and the quantity parsing boundary
//! - [`error`] - domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: breakdown results are deterministic - same input = same output
//! 2. **No I/O**: file system, network, terminal access is FORBIDDEN here
//! 3. **Decimal Money**: prices are fixed-point decimals, truncated, never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bakery_core::{Bakery, Order, Product, Quantizer};
//!
//! let quantizer = Quantizer::default();
//! let muffin = Product::new(
//!     "Blueberry Muffin",
//!     "MB11",
//!     &[("2", "9.95"), ("5", "16.95"), ("8", "24.95")],
//!     &quantizer,
//! );
//! let bakery = Bakery::new(vec![muffin]);
//!
//! let mut order = Order::new([("MB11".to_string(), 14)]);
//! bakery.process_order(&mut order).unwrap();
//!
//! let line = order.get_line("MB11").unwrap();
//! assert_eq!(line.remainder, Some(0));
//! assert_eq!(line.packs.get(&8), Some(&1));
//! assert_eq!(line.packs.get(&2), Some(&3));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod engine;
pub mod error;
pub mod money;
pub mod order;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bakery_core::Bakery` instead of
// `use bakery_core::catalog::Bakery`

pub use catalog::{Bakery, PackedLine, Product};
pub use engine::{Breakdown, PackSolver};
pub use error::{BakeryError, BakeryResult};
pub use money::{Price, Quantizer};
pub use order::{parse_quantity, Order, OrderLine};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default number of decimal places for pack prices.
///
/// ## Why a constant?
/// The precision is configurable per deployment (`PRICE_DECIMAL_PLACES` in the
/// CLI), but every code path that does not receive an explicit [`Quantizer`]
/// should agree on the same default.
pub const DEFAULT_PRICE_DECIMAL_PLACES: u32 = 2;

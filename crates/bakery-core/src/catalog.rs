//! # Catalogue Module
//!
//! `Product` (one pack-price table) and `Bakery` (the code→product catalogue
//! plus the order-processing loop).
//!
//! ## Lookup Policy
//! Direct lookups raise; bulk operations skip. `get_product` on a missing
//! code and `pack_price` on a missing size are errors, while `process_order`
//! leaves unknown codes untouched and `total_price` ignores unknown sizes.
//!
//! ## Construction Policy
//! Catalogue input is forgiving: an entry whose pack size is not an integer or
//! whose price is not a non-negative decimal is dropped silently (a `warn!`
//! trace is emitted so operators can see what fell out). Construction never
//! fails.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::{Breakdown, PackSolver};
use crate::error::{BakeryError, BakeryResult};
use crate::money::{Price, Quantizer};
use crate::order::Order;

// =============================================================================
// Product
// =============================================================================

/// A product sold only in fixed pack sizes, one price per size.
///
/// Immutable after construction: the pack table is a per-instance field,
/// populated once and only read afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Display name shown on prompts and receipts.
    name: String,

    /// Business code - unique key within a catalogue.
    code: String,

    /// Pack size → unit price, already quantized.
    packs: BTreeMap<u64, Price>,
}

impl Product {
    /// Builds a product from raw `(size, price)` string pairs.
    ///
    /// Entries that fail to parse - non-integer size, non-decimal or negative
    /// price - are skipped without error. Sizes of zero are rejected the same
    /// way; the breakdown engine requires strictly positive sizes.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        offers: &[(&str, &str)],
        quantizer: &Quantizer,
    ) -> Self {
        let name = name.into();
        let code = code.into();

        let mut packs = BTreeMap::new();
        for &(raw_size, raw_price) in offers {
            let size = match raw_size.trim().parse::<u64>() {
                Ok(size) if size > 0 => size,
                _ => {
                    warn!(code = %code, raw_size, "discarding pack with unparseable size");
                    continue;
                }
            };
            let price = match quantizer.parse(raw_price) {
                Some(price) => price,
                None => {
                    warn!(code = %code, size, raw_price, "discarding pack with unparseable price");
                    continue;
                }
            };
            packs.insert(size, price);
        }

        Product { name, code, packs }
    }

    /// Product display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product business code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The full pack table (size → unit price).
    #[inline]
    pub fn packs(&self) -> &BTreeMap<u64, Price> {
        &self.packs
    }

    /// Available pack sizes, sorted descending for the breakdown engine.
    pub fn pack_sizes(&self) -> Vec<u64> {
        self.packs.keys().rev().copied().collect()
    }

    /// Unit price for one pack size.
    ///
    /// Direct lookup: a missing size is an [`BakeryError::UnknownPackSize`].
    pub fn pack_price(&self, size: u64) -> BakeryResult<Price> {
        self.packs
            .get(&size)
            .copied()
            .ok_or_else(|| BakeryError::UnknownPackSize {
                code: self.code.clone(),
                size,
            })
    }

    /// Prices a pack combination: `Σ count × unit price`.
    ///
    /// This is the bulk pricer: sizes with no price in the table are skipped,
    /// not raised - a breakdown computed against a stale catalogue should
    /// still price the packs that do exist. Empty counts price to zero.
    pub fn total_price(&self, counts: &BTreeMap<u64, u64>) -> Price {
        counts
            .iter()
            .filter_map(|(size, &count)| self.packs.get(size).map(|&price| price * count))
            .sum()
    }

    /// Breaks a requested quantity into packs and prices the result.
    pub fn pack_order(&self, quantity: u64, solver: &PackSolver) -> BakeryResult<PackedLine> {
        let breakdown = solver.breakdown(quantity, &self.pack_sizes())?;
        let total_price = self.total_price(&breakdown.packs);
        Ok(PackedLine {
            breakdown,
            total_price,
        })
    }
}

/// One fully processed order line: the chosen packs and their price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedLine {
    pub breakdown: Breakdown,
    pub total_price: Price,
}

// =============================================================================
// Bakery
// =============================================================================

/// The product catalogue: code → [`Product`], read-only after construction.
#[derive(Debug, Clone)]
pub struct Bakery {
    products: BTreeMap<String, Product>,
    solver: PackSolver,
}

impl Bakery {
    /// Builds a catalogue from a list of products, keyed by code.
    ///
    /// Duplicate codes keep the last product seen.
    pub fn new(products: Vec<Product>) -> Self {
        Bakery::with_solver(products, PackSolver::new())
    }

    /// Builds a catalogue whose order processing uses the given solver
    /// (typically one with a candidate budget).
    pub fn with_solver(products: Vec<Product>, solver: PackSolver) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.code().to_string(), product))
            .collect();
        Bakery { products, solver }
    }

    /// All products in the catalogue, keyed by code.
    #[inline]
    pub fn products(&self) -> &BTreeMap<String, Product> {
        &self.products
    }

    /// Direct lookup by code; a missing code is an
    /// [`BakeryError::UnknownProductCode`].
    pub fn get_product(&self, code: &str) -> BakeryResult<&Product> {
        self.products
            .get(code)
            .ok_or_else(|| BakeryError::UnknownProductCode(code.to_string()))
    }

    /// Processes every line of an order against this catalogue.
    ///
    /// For each line whose code exists here: run the breakdown, price it, and
    /// record the result on the line. Lines with codes absent from the
    /// catalogue are left untouched - their packs stay empty and their
    /// remainder/total stay unset, and no error surfaces. Solver failures
    /// (budget exceeded) do propagate.
    pub fn process_order(&self, order: &mut Order) -> BakeryResult<()> {
        for code in order.codes() {
            let product = match self.products.get(&code) {
                Some(product) => product,
                None => {
                    debug!(code = %code, "skipping order line with unknown product code");
                    continue;
                }
            };

            let quantity = order.get_line(&code)?.quantity;
            let line = product.pack_order(quantity, &self.solver)?;
            order.record_breakdown(
                &code,
                line.breakdown.packs,
                line.breakdown.remainder,
                line.total_price,
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

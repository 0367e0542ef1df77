//! Order bookkeeping: requested quantities in, breakdown results recorded
//! back per line.
//!
//! An order is created once from a code→quantity mapping and each line is
//! mutated exactly once, by [`Order::record_breakdown`], when the catalogue
//! processes it. Lines whose code the catalogue does not know keep their
//! initial unset state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BakeryError, BakeryResult};
use crate::money::Price;

// =============================================================================
// Quantity Parsing Boundary
// =============================================================================

/// Parses a raw quantity string into a non-negative integer.
///
/// This is the coercion boundary: anything that reaches the breakdown engine
/// has already passed through here (or was born a `u64`). Non-digit input and
/// values beyond `u64::MAX` fail with [`BakeryError::InvalidQuantity`].
pub fn parse_quantity(raw: &str) -> BakeryResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| BakeryError::InvalidQuantity {
            raw: raw.trim().to_string(),
        })
}

// =============================================================================
// Order
// =============================================================================

/// One line of an order: the request, and the result once processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Requested quantity.
    pub quantity: u64,

    /// Chosen packs (size → count); empty until processed, and stays empty
    /// when no pack combination covers any of the quantity.
    pub packs: BTreeMap<u64, u64>,

    /// Unfulfilled quantity; `None` until processed.
    pub remainder: Option<u64>,

    /// Price of the chosen packs; `None` until processed.
    pub total_price: Option<Price>,
}

impl OrderLine {
    fn new(quantity: u64) -> Self {
        OrderLine {
            quantity,
            packs: BTreeMap::new(),
            remainder: None,
            total_price: None,
        }
    }

    /// Whether this line has been filled in by order processing.
    #[inline]
    pub fn is_processed(&self) -> bool {
        self.remainder.is_some()
    }
}

/// A customer order: product code → [`OrderLine`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    lines: BTreeMap<String, OrderLine>,
}

impl Order {
    /// Builds an order from a code→quantity mapping.
    ///
    /// Duplicate codes keep the last quantity seen.
    pub fn new(requests: impl IntoIterator<Item = (String, u64)>) -> Self {
        let lines = requests
            .into_iter()
            .map(|(code, quantity)| (code, OrderLine::new(quantity)))
            .collect();
        Order { lines }
    }

    /// All lines, keyed by product code.
    #[inline]
    pub fn lines(&self) -> &BTreeMap<String, OrderLine> {
        &self.lines
    }

    /// The product codes on this order.
    pub fn codes(&self) -> Vec<String> {
        self.lines.keys().cloned().collect()
    }

    /// Looks up one line; a code never registered is an
    /// [`BakeryError::UnknownLine`].
    pub fn get_line(&self, code: &str) -> BakeryResult<&OrderLine> {
        self.lines
            .get(code)
            .ok_or_else(|| BakeryError::UnknownLine(code.to_string()))
    }

    /// Records a breakdown result against one line.
    ///
    /// Fails with [`BakeryError::UnknownLine`] if `code` was never part of
    /// the order.
    pub fn record_breakdown(
        &mut self,
        code: &str,
        packs: BTreeMap<u64, u64>,
        remainder: u64,
        total_price: Price,
    ) -> BakeryResult<()> {
        let line = self
            .lines
            .get_mut(code)
            .ok_or_else(|| BakeryError::UnknownLine(code.to_string()))?;
        line.packs = packs;
        line.remainder = Some(remainder);
        line.total_price = Some(total_price);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Quantizer;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("10").unwrap(), 10);
        assert_eq!(parse_quantity(" 0 ").unwrap(), 0);

        assert!(matches!(
            parse_quantity("ten").unwrap_err(),
            BakeryError::InvalidQuantity { .. }
        ));
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("12.5").is_err());
        assert!(parse_quantity("").is_err());
        // Beyond u64::MAX
        assert!(parse_quantity("99999999999999999999999").is_err());
    }

    #[test]
    fn test_new_order_lines_start_unset() {
        let order = Order::new([
            ("VS5".to_string(), 10),
            ("MB11".to_string(), 14),
            ("CF".to_string(), 13),
        ]);

        assert_eq!(order.lines().len(), 3);
        let line = order.get_line("VS5").unwrap();
        assert_eq!(line.quantity, 10);
        assert!(line.packs.is_empty());
        assert_eq!(line.remainder, None);
        assert_eq!(line.total_price, None);
        assert!(!line.is_processed());
    }

    #[test]
    fn test_get_line_unknown_code() {
        let order = Order::new([("VS5".to_string(), 10)]);
        assert!(matches!(
            order.get_line("not_a_code").unwrap_err(),
            BakeryError::UnknownLine(_)
        ));
    }

    #[test]
    fn test_record_breakdown() {
        let mut order = Order::new([("MB11".to_string(), 14)]);
        let packs: BTreeMap<u64, u64> = [(8, 1), (2, 3)].into_iter().collect();
        let total = Quantizer::default().parse("54.80").unwrap();

        order
            .record_breakdown("MB11", packs.clone(), 0, total)
            .unwrap();

        let line = order.get_line("MB11").unwrap();
        assert_eq!(line.packs, packs);
        assert_eq!(line.remainder, Some(0));
        assert_eq!(line.total_price, Some(total));
        assert!(line.is_processed());
    }

    #[test]
    fn test_record_breakdown_unknown_line() {
        let mut order = Order::new([("MB11".to_string(), 14)]);
        let err = order
            .record_breakdown("VS5", BTreeMap::new(), 0, Price::zero())
            .unwrap_err();
        assert!(matches!(err, BakeryError::UnknownLine(_)));
    }
}

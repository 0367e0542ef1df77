//! # Pack-Breakdown Engine
//!
//! Finds the combination of fixed pack sizes that covers a requested quantity
//! with the smallest possible shortfall.
//!
//! ## Search Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quantity = 14, sizes = [8, 5, 2]                                       │
//! │                                                                         │
//! │  size 8: count 1 ──► size 5: count 1 ──► size 2: count 0   rem 1       │
//! │  │                   size 5: count 0 ──► size 2: count 3   rem 0 ★     │
//! │  size 8: count 0 ──► (not reached - exact fit short-circuits)          │
//! │                                                                         │
//! │  Depth-first, largest size first, largest count first. The FIRST       │
//! │  exact fit wins outright; otherwise the first candidate at the         │
//! │  smallest remainder wins. That generation order IS the tie-break:      │
//! │  among equal remainders the winner used the most of the biggest packs. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! At the smallest size no branching happens: only the greedy count is taken,
//! since using fewer of the last size can never reduce the remainder.
//!
//! The candidate space is exponential in the number of distinct pack sizes.
//! That is the defined behaviour, not an accident - callers that cannot
//! tolerate it attach a candidate budget via
//! [`PackSolver::with_candidate_budget`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BakeryError, BakeryResult};

// =============================================================================
// Breakdown Result
// =============================================================================

/// The chosen covering of a quantity by pack multiples.
///
/// Only strictly-positive counts are retained in `packs`; a quantity no pack
/// combination can touch comes back as an empty map with the full quantity as
/// remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Pack size → number of packs of that size.
    pub packs: BTreeMap<u64, u64>,

    /// Quantity left unfulfilled (always `< min(sizes)` for quantity > 0).
    pub remainder: u64,
}

impl Breakdown {
    /// Total quantity covered by the chosen packs.
    pub fn covered(&self) -> u64 {
        self.packs.iter().map(|(size, count)| size * count).sum()
    }

    /// Whether this breakdown covers the quantity exactly.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.remainder == 0
    }
}

// =============================================================================
// Pack Solver
// =============================================================================

/// The pack-breakdown search engine.
///
/// Stateless between calls: every [`breakdown`](PackSolver::breakdown) owns
/// its own recursion stack, so one solver can serve concurrent order lines
/// without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackSolver {
    /// Maximum number of complete candidates to evaluate before failing with
    /// [`BakeryError::SearchExceeded`]. `None` means unbounded.
    candidate_budget: Option<u64>,
}

impl PackSolver {
    /// Creates an unbounded solver.
    #[inline]
    pub const fn new() -> Self {
        PackSolver {
            candidate_budget: None,
        }
    }

    /// Creates a solver that gives up after evaluating `budget` candidates.
    ///
    /// The search space is the product of `floor(quantity / size) + 1` over
    /// all sizes but the smallest, so a budget turns a pathological catalogue
    /// into a fast failure instead of a stuck process.
    #[inline]
    pub const fn with_candidate_budget(budget: u64) -> Self {
        PackSolver {
            candidate_budget: Some(budget),
        }
    }

    /// Computes the best pack breakdown for `quantity` over `sizes`.
    ///
    /// Every size must be strictly positive; the catalogue guarantees that by
    /// discarding unparseable and zero entries at construction. `sizes` may
    /// be empty (a product whose offers were all discarded): nothing can be
    /// covered, so the full quantity comes back as the remainder. Duplicates
    /// are tolerated and collapse to one slot.
    ///
    /// Two-level objective:
    /// 1. minimize the remainder;
    /// 2. among equal remainders, prefer the candidate generated first
    ///    (most-of-largest-first, depth-first).
    ///
    /// The first exact fit returns immediately without generating the rest of
    /// the space. `quantity = 0` yields an empty breakdown with remainder 0.
    pub fn breakdown(&self, quantity: u64, sizes: &[u64]) -> BakeryResult<Breakdown> {
        debug_assert!(sizes.iter().all(|&s| s > 0), "pack sizes must be positive");

        let mut sizes: Vec<u64> = sizes.to_vec();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.dedup();

        debug!(quantity, ?sizes, "pack breakdown");

        if sizes.is_empty() {
            // No packs to offer: the whole quantity stays unfulfilled.
            return Ok(Breakdown {
                packs: BTreeMap::new(),
                remainder: quantity,
            });
        }

        let mut search = Search {
            sizes: &sizes,
            counts: vec![0; sizes.len()],
            best_counts: vec![0; sizes.len()],
            best_remainder: quantity,
            evaluated: 0,
            budget: self.candidate_budget,
        };
        search.descend(0, quantity)?;

        let packs = sizes
            .iter()
            .zip(&search.best_counts)
            .filter(|&(_, &count)| count > 0)
            .map(|(&size, &count)| (size, count))
            .collect();

        Ok(Breakdown {
            packs,
            remainder: search.best_remainder,
        })
    }
}

// =============================================================================
// Depth-First Search
// =============================================================================

/// One in-flight search; owns the mutable per-call state.
struct Search<'a> {
    /// Distinct pack sizes, descending.
    sizes: &'a [u64],
    /// Counts chosen so far along the current branch, indexed like `sizes`.
    counts: Vec<u64>,
    /// Best complete candidate seen so far.
    best_counts: Vec<u64>,
    /// Remainder of the best candidate; starts at the full quantity so the
    /// all-zero candidate is the standing answer until something beats it.
    best_remainder: u64,
    /// Complete candidates evaluated so far.
    evaluated: u64,
    /// Evaluation cap, if any.
    budget: Option<u64>,
}

impl<'a> Search<'a> {
    /// Tries every count of `sizes[level]` from the maximum down to zero,
    /// recursing into the smaller sizes with the reduced remaining quantity.
    ///
    /// Returns `Ok(true)` once an exact fit has been evaluated, which unwinds
    /// the whole recursion without generating further candidates.
    fn descend(&mut self, level: usize, rest: u64) -> BakeryResult<bool> {
        let size = self.sizes[level];

        if level + 1 == self.sizes.len() {
            // Smallest size: only the greedy count can minimize the remainder,
            // so this is a leaf, not a branch point.
            let count = rest / size;
            self.counts[level] = count;
            return self.evaluate(rest - count * size);
        }

        let max_count = rest / size;
        for count in (0..=max_count).rev() {
            self.counts[level] = count;
            if self.descend(level + 1, rest - count * size)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Scores one complete candidate; first strict improvement wins ties.
    fn evaluate(&mut self, remainder: u64) -> BakeryResult<bool> {
        self.evaluated += 1;
        if let Some(budget) = self.budget {
            if self.evaluated > budget {
                return Err(BakeryError::SearchExceeded { budget });
            }
        }

        if remainder < self.best_remainder {
            self.best_remainder = remainder;
            self.best_counts.copy_from_slice(&self.counts);
        }

        Ok(remainder == 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn packs(entries: &[(u64, u64)]) -> BTreeMap<u64, u64> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_exact_fit_prefers_most_of_largest() {
        let solver = PackSolver::new();

        let result = solver.breakdown(14, &[8, 5, 2]).unwrap();
        assert_eq!(result.packs, packs(&[(8, 1), (2, 3)]));
        assert_eq!(result.remainder, 0);

        let result = solver.breakdown(15, &[8, 5, 2]).unwrap();
        assert_eq!(result.packs, packs(&[(8, 1), (5, 1), (2, 1)]));
        assert_eq!(result.remainder, 0);
    }

    #[test]
    fn test_unfillable_quantity_keeps_full_remainder() {
        let solver = PackSolver::new();
        let result = solver.breakdown(1, &[8, 5, 2]).unwrap();
        assert!(result.packs.is_empty());
        assert_eq!(result.remainder, 1);
    }

    #[test]
    fn test_partial_fill() {
        let solver = PackSolver::new();
        let result = solver.breakdown(3, &[8, 5, 2]).unwrap();
        assert_eq!(result.packs, packs(&[(2, 1)]));
        assert_eq!(result.remainder, 1);
    }

    #[test]
    fn test_zero_quantity() {
        let solver = PackSolver::new();
        let result = solver.breakdown(0, &[8, 5, 2]).unwrap();
        assert!(result.packs.is_empty());
        assert_eq!(result.remainder, 0);
        assert!(result.is_exact());
    }

    #[test]
    fn test_sizes_order_does_not_matter() {
        let solver = PackSolver::new();
        let descending = solver.breakdown(14, &[8, 5, 2]).unwrap();
        let ascending = solver.breakdown(14, &[2, 5, 8]).unwrap();
        assert_eq!(descending, ascending);
    }

    #[test]
    fn test_tie_break_is_enumeration_order() {
        let solver = PackSolver::new();

        // 9 = 6+3 and 3+3+3; the 6-first candidate is generated first.
        let result = solver.breakdown(9, &[6, 3]).unwrap();
        assert_eq!(result.packs, packs(&[(6, 1), (3, 1)]));

        // 7 over {4, 2}: (1,1) and (0,3) both leave remainder 1; the first
        // generated candidate keeps the win (strict less-than tracking).
        let result = solver.breakdown(7, &[4, 2]).unwrap();
        assert_eq!(result.packs, packs(&[(4, 1), (2, 1)]));
        assert_eq!(result.remainder, 1);
    }

    #[test]
    fn test_backtracks_past_greedy_dead_end() {
        let solver = PackSolver::new();

        // Greedy would take 9+3 and strand 1; the search finds 5+5+3.
        let result = solver.breakdown(13, &[9, 5, 3]).unwrap();
        assert_eq!(result.packs, packs(&[(5, 2), (3, 1)]));
        assert_eq!(result.remainder, 0);
    }

    #[test]
    fn test_exact_fit_property() {
        // Any quantity constructible from the sizes must come back exact.
        let solver = PackSolver::new();
        let sizes = [7, 4, 3];
        for a in 0..4u64 {
            for b in 0..4u64 {
                for c in 0..4u64 {
                    let quantity = 7 * a + 4 * b + 3 * c;
                    let result = solver.breakdown(quantity, &sizes).unwrap();
                    assert_eq!(result.remainder, 0, "quantity {quantity} should fit exactly");
                }
            }
        }
    }

    #[test]
    fn test_no_overshoot_and_remainder_bound() {
        let solver = PackSolver::new();
        let sizes = [9, 5, 3];
        for quantity in 0..=60 {
            let result = solver.breakdown(quantity, &sizes).unwrap();
            let covered = result.covered();
            assert!(covered <= quantity, "overshoot at quantity {quantity}");
            assert_eq!(result.remainder, quantity - covered);
            if quantity > 0 {
                assert!(
                    result.remainder < 9,
                    "remainder {} not below max size at quantity {quantity}",
                    result.remainder
                );
            }
        }
    }

    #[test]
    fn test_duplicate_sizes_collapse() {
        let solver = PackSolver::new();
        let result = solver.breakdown(10, &[5, 5, 2]).unwrap();
        assert_eq!(result.packs, packs(&[(5, 2)]));
        assert_eq!(result.remainder, 0);
    }

    #[test]
    fn test_empty_sizes_cover_nothing() {
        let solver = PackSolver::new();

        let result = solver.breakdown(5, &[]).unwrap();
        assert!(result.packs.is_empty());
        assert_eq!(result.remainder, 5);

        let result = solver.breakdown(0, &[]).unwrap();
        assert!(result.packs.is_empty());
        assert_eq!(result.remainder, 0);
    }

    #[test]
    fn test_single_size() {
        let solver = PackSolver::new();
        let result = solver.breakdown(11, &[4]).unwrap();
        assert_eq!(result.packs, packs(&[(4, 2)]));
        assert_eq!(result.remainder, 3);
    }

    #[test]
    fn test_candidate_budget_exceeded() {
        // The first candidate for 50 over {7, 5, 3} leaves remainder 1, so a
        // one-candidate budget trips on the second evaluation.
        let solver = PackSolver::with_candidate_budget(1);
        let err = solver.breakdown(50, &[7, 5, 3]).unwrap_err();
        assert!(matches!(err, BakeryError::SearchExceeded { budget: 1 }));
    }

    #[test]
    fn test_candidate_budget_not_hit_on_quick_exact_fit() {
        // First candidate is 8+5+2 = exact, so one evaluation suffices.
        let solver = PackSolver::with_candidate_budget(1);
        let result = solver.breakdown(15, &[8, 5, 2]).unwrap();
        assert_eq!(result.remainder, 0);
    }
}

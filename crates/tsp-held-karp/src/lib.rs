#![deny(clippy::all)]

//! Exact TSP via Held-Karp dynamic programming.
//!
//! [`min_tour_cost`] computes the cost of the cheapest closed tour that
//! starts at city 0, visits every other city exactly once and returns
//! to city 0. A state is a (current city, visited-set bitmask) pair;
//! each of the n * 2^n states is evaluated once and memoized, which
//! collapses the naive O(n!) tour enumeration to O(n^2 * 2^n) time and
//! O(n * 2^n) space.
//!
//! Every call owns its memo table, so independent calls never share
//! mutable state.

mod context;
mod dp;

use tsp_core::{CostMatrix, SolveError, MAX_CITIES};

use context::SolverContext;

/// Minimum closed-tour cost from city 0.
///
/// Fails with [`SolveError::TooManyCities`] before allocating anything
/// when the instance exceeds [`MAX_CITIES`]. For a single city the tour
/// is just the closing edge, `cost(0, 0)`.
pub fn min_tour_cost(matrix: &CostMatrix) -> Result<u64, SolveError> {
    let n = matrix.n();
    if n > MAX_CITIES {
        return Err(SolveError::TooManyCities { n, max: MAX_CITIES });
    }
    let mut ctx = SolverContext::new(matrix);
    // Start at the origin with only bit 0 set.
    Ok(dp::solve(&mut ctx, 0, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_city_costs_nothing() {
        let matrix = CostMatrix::from_rows(vec![vec![0]]).unwrap();
        assert_eq!(min_tour_cost(&matrix), Ok(0));
    }

    #[test]
    fn two_cities_cost_the_round_trip() {
        let matrix = CostMatrix::from_rows(vec![vec![0, 13], vec![13, 0]]).unwrap();
        assert_eq!(min_tour_cost(&matrix), Ok(26));
    }

    #[test]
    fn oversized_instance_fails_before_allocating() {
        let n = MAX_CITIES + 1;
        let matrix = CostMatrix::from_rows(vec![vec![1; n]; n]).unwrap();
        assert_eq!(
            min_tour_cost(&matrix),
            Err(SolveError::TooManyCities { n, max: MAX_CITIES })
        );
    }
}

#![deny(clippy::all)]

//! Brute-force ground truth for exact TSP.
//!
//! Enumerates every ordering of the non-origin cities and keeps the
//! cheapest closed tour. Factorial growth limits this to tiny n; the
//! point is an obviously-correct reference to validate the dynamic
//! programming solver against, not a usable solver.

use tsp_core::CostMatrix;

/// Minimum closed-tour cost from city 0 by exhaustive permutation search.
pub fn min_tour_cost(matrix: &CostMatrix) -> u64 {
    let n = matrix.n();
    if n == 1 {
        return matrix.cost(0, 0);
    }
    let mut remaining: Vec<usize> = (1..n).collect();
    let mut best = u64::MAX;
    extend_tour(matrix, 0, &mut remaining, 0, &mut best);
    best
}

fn extend_tour(
    matrix: &CostMatrix,
    current: usize,
    remaining: &mut Vec<usize>,
    cost_so_far: u64,
    best: &mut u64,
) {
    // Pruning: a partial tour at or above the incumbent cannot improve,
    // costs being non-negative.
    if cost_so_far >= *best {
        return;
    }
    if remaining.is_empty() {
        let total = cost_so_far.saturating_add(matrix.cost(current, 0));
        if total < *best {
            *best = total;
        }
        return;
    }
    for i in 0..remaining.len() {
        let next = remaining.remove(i);
        let leg = matrix.cost(current, next);
        extend_tour(matrix, next, remaining, cost_so_far.saturating_add(leg), best);
        remaining.insert(i, next);
    }
}

use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// Hard cap on instance size.
///
/// The exact solver's memo table needs n * 2^n cells and the visited set
/// must fit in a u32 mask, so larger instances are rejected up front
/// instead of exhausting memory.
pub const MAX_CITIES: usize = 20;

/// Square matrix of directed travel costs, stored flattened row-major
/// for cache locality.
///
/// `cost(i, j)` is the cost of travelling directly from city `i` to
/// city `j`. No symmetry is assumed; the diagonal is expected to be
/// zero but not enforced. Costs are `u64`, so negative entries are
/// unrepresentable by construction.
///
/// Serializes as the nested-rows form, so a JSON array of arrays is a
/// complete instance document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u64>>", into = "Vec<Vec<u64>>")]
pub struct CostMatrix {
    n: usize,
    costs: Vec<u64>,
}

impl CostMatrix {
    /// Builds a matrix from nested rows, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, SolveError> {
        let n = rows.len();
        if n == 0 {
            return Err(SolveError::EmptyMatrix);
        }
        let mut costs = Vec::with_capacity(n * n);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != n {
                return Err(SolveError::NotSquare {
                    row,
                    expected: n,
                    actual: entries.len(),
                });
            }
            costs.extend(entries);
        }
        Ok(CostMatrix { n, costs })
    }

    /// Number of cities.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Direct travel cost from `from` to `to`. Panics if an index is out
    /// of range.
    #[inline(always)]
    pub fn cost(&self, from: usize, to: usize) -> u64 {
        self.costs[from * self.n + to]
    }

    /// The matrix in nested-rows form.
    pub fn rows(&self) -> Vec<Vec<u64>> {
        self.costs.chunks(self.n).map(<[u64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<u64>>> for CostMatrix {
    type Error = SolveError;

    fn try_from(rows: Vec<Vec<u64>>) -> Result<Self, Self::Error> {
        CostMatrix::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<u64>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.rows()
    }
}

use std::error::Error;
use std::fmt;

/// Failure modes shared by the solver crates.
///
/// Shape problems are caught when a [`crate::CostMatrix`] is built;
/// capacity problems are caught by the Held-Karp solver before it
/// allocates its memo table. No partial result is ever produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The instance has no cities at all.
    EmptyMatrix,
    /// A row's length disagrees with the number of rows.
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// The instance is too large for the n * 2^n state table.
    TooManyCities { n: usize, max: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::EmptyMatrix => write!(f, "cost matrix has no cities"),
            SolveError::NotSquare {
                row,
                expected,
                actual,
            } => write!(
                f,
                "cost matrix is not square: row {} has {} entries, expected {}",
                row, actual, expected
            ),
            SolveError::TooManyCities { n, max } => write!(
                f,
                "{} cities exceed the supported maximum of {}",
                n, max
            ),
        }
    }
}

impl Error for SolveError {}

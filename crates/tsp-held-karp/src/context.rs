use tsp_core::CostMatrix;

/// Per-call solver state: the borrowed instance plus the memo table.
///
/// The table has one cell per (city, mask) state, flattened as
/// `city * 2^n + mask`. `None` means "not yet computed"; a cell is
/// written at most once and never invalidated.
pub struct SolverContext<'a> {
    pub matrix: &'a CostMatrix,
    pub n: usize,
    pub full_mask: u32,
    pub memo: Vec<Option<u64>>,
}

impl<'a> SolverContext<'a> {
    pub fn new(matrix: &'a CostMatrix) -> Self {
        let n = matrix.n();
        SolverContext {
            matrix,
            n,
            full_mask: (1u32 << n) - 1,
            memo: vec![None; n * (1 << n)],
        }
    }
}

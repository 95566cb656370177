use super::context::SolverContext;

/// Minimum cost to complete the tour from `current` back to the origin,
/// having already visited exactly the cities in `mask`.
///
/// `mask` always contains bit 0 and bit `current`. It strictly grows
/// along any recursion path, so the state graph is acyclic and each
/// state settles exactly once.
pub fn solve(ctx: &mut SolverContext, current: usize, mask: u32) -> u64 {
    if mask == ctx.full_mask {
        // All cities visited; close the tour back to the origin.
        return ctx.matrix.cost(current, 0);
    }

    let cache_idx = current * (1 << ctx.n) + mask as usize;
    // Unchecked access is fine here: current < n and mask < 2^n, matching
    // the table sizing in SolverContext::new.
    if let Some(cached) = unsafe { *ctx.memo.get_unchecked(cache_idx) } {
        return cached;
    }

    // Saturating arithmetic keeps u64::MAX behaving as +infinity.
    let mut best = u64::MAX;
    for next in 0..ctx.n {
        if mask & (1 << next) == 0 {
            let candidate = ctx
                .matrix
                .cost(current, next)
                .saturating_add(solve(ctx, next, mask | (1 << next)));
            // Ties keep the first-found minimum, i.e. the lowest next index.
            if candidate < best {
                best = candidate;
            }
        }
    }

    unsafe { *ctx.memo.get_unchecked_mut(cache_idx) = Some(best) };
    best
}

#![deny(clippy::all)]

//! Support code for the validation harness: seeded random instance
//! generation. Kept as a library so the sweep binary and its tests share
//! one generator.

use rand::Rng;
use tsp_core::CostMatrix;

/// Random directed instance: uniform costs in `1..=99`, zero diagonal.
pub fn random_matrix<R: Rng>(rng: &mut R, n: usize) -> CostMatrix {
    let mut rows = vec![vec![0u64; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i != j {
                rows[i][j] = rng.gen_range(1..=99);
            }
        }
    }
    CostMatrix::from_rows(rows).expect("generated rows are square")
}

/// Random symmetric instance: the upper triangle is drawn, the lower
/// triangle mirrors it.
pub fn random_symmetric_matrix<R: Rng>(rng: &mut R, n: usize) -> CostMatrix {
    let mut rows = vec![vec![0u64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let cost = rng.gen_range(1..=99);
            rows[i][j] = cost;
            rows[j][i] = cost;
        }
    }
    CostMatrix::from_rows(rows).expect("generated rows are square")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn generated_matrices_have_zero_diagonal() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let m = random_matrix(&mut rng, 6);
        for i in 0..6 {
            assert_eq!(m.cost(i, i), 0);
        }
    }

    #[test]
    fn symmetric_generator_mirrors_the_triangle() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let m = random_symmetric_matrix(&mut rng, 6);
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(m.cost(i, j), m.cost(j, i));
            }
        }
    }
}

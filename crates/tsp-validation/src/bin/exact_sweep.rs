//! Demonstration and cross-check harness.
//!
//! With no arguments: prints the canonical 4-city instance and its
//! optimum, then sweeps seeded random instances for n = 3..=8, printing
//! one CSV line per instance comparing Held-Karp against brute-force
//! enumeration. Exits non-zero on any disagreement.
//!
//! With a path argument: reads a JSON array-of-arrays cost matrix from
//! that file and prints its optimal tour cost.

use std::env;
use std::fs;
use std::process::ExitCode;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tsp_core::{CostMatrix, SolveError};
use tsp_validation::{random_matrix, random_symmetric_matrix};

const DEMO_COSTS: [[u64; 4]; 4] = [
    [0, 10, 15, 20],
    [10, 0, 35, 25],
    [15, 35, 0, 30],
    [20, 25, 30, 0],
];

const SEEDS_PER_SIZE: u64 = 25;

fn demo() -> Result<(), SolveError> {
    let matrix = CostMatrix::from_rows(DEMO_COSTS.iter().map(|row| row.to_vec()).collect())?;

    println!("Cost matrix:");
    for (city, row) in matrix.rows().iter().enumerate() {
        let entries: Vec<String> = row.iter().map(u64::to_string).collect();
        println!("  city {}: {}", city, entries.join(" "));
    }
    println!();

    let cost = tsp_held_karp::min_tour_cost(&matrix)?;
    println!("Minimum tour cost: {}", cost);
    println!("Known optimum:     80 (tour 0 -> 1 -> 3 -> 2 -> 0)");
    println!();
    Ok(())
}

fn sweep() -> Result<bool, SolveError> {
    println!("n,seed,symmetric,held_karp,brute_force,agree");
    let mut all_agree = true;
    for n in 3..=8usize {
        for seed in 0..SEEDS_PER_SIZE {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed * 100 + n as u64);
            let symmetric = seed % 2 == 1;
            let matrix = if symmetric {
                random_symmetric_matrix(&mut rng, n)
            } else {
                random_matrix(&mut rng, n)
            };
            let held_karp = tsp_held_karp::min_tour_cost(&matrix)?;
            let brute_force = tsp_brute_force::min_tour_cost(&matrix);
            let agree = held_karp == brute_force;
            println!(
                "{},{},{},{},{},{}",
                n, seed, symmetric, held_karp, brute_force, agree
            );
            all_agree &= agree;
        }
    }
    Ok(all_agree)
}

fn solve_file(path: &str) -> Result<u64, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let matrix: CostMatrix = serde_json::from_str(&text)?;
    Ok(tsp_held_karp::min_tour_cost(&matrix)?)
}

fn main() -> ExitCode {
    if let Some(path) = env::args().nth(1) {
        return match solve_file(&path) {
            Ok(cost) => {
                println!("Minimum tour cost: {}", cost);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {}", err);
                ExitCode::FAILURE
            }
        };
    }

    if let Err(err) = demo() {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
    }
    match sweep() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("sweep found a disagreement between the solvers");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

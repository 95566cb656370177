//! Instances with hand-verifiable optima.

use tsp_core::CostMatrix;

fn matrix(rows: &[&[u64]]) -> CostMatrix {
    CostMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

#[test]
fn canonical_four_city_instance_costs_80() {
    // Optimal tour is 0 -> 1 -> 3 -> 2 -> 0: 10 + 25 + 30 + 15.
    let m = matrix(&[
        &[0, 10, 15, 20],
        &[10, 0, 35, 25],
        &[15, 35, 0, 30],
        &[20, 25, 30, 0],
    ]);
    assert_eq!(tsp_held_karp::min_tour_cost(&m), Ok(80));
}

#[test]
fn directed_triangle_uses_edge_direction() {
    // Going 0 -> 1 -> 2 -> 0 costs 3; the reverse direction costs 150.
    let m = matrix(&[&[0, 1, 50], &[50, 0, 1], &[1, 50, 0]]);
    assert_eq!(tsp_held_karp::min_tour_cost(&m), Ok(3));
}

#[test]
fn three_cities_have_no_choice_in_symmetric_case() {
    // Every 3-city tour of a symmetric matrix uses all three edges.
    let m = matrix(&[&[0, 2, 9], &[2, 0, 4], &[9, 4, 0]]);
    assert_eq!(tsp_held_karp::min_tour_cost(&m), Ok(15));
}

#[test]
fn json_instance_solves_like_the_hand_built_one() {
    let parsed: CostMatrix =
        serde_json::from_str("[[0, 10, 15, 20], [10, 0, 35, 25], [15, 35, 0, 30], [20, 25, 30, 0]]")
            .unwrap();
    assert_eq!(tsp_held_karp::min_tour_cost(&parsed), Ok(80));
}

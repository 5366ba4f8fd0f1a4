//! End-to-end solver tests, including the brute-force ground-truth bound.

use route_seq::distance::{haversine_km, DistanceMatrix};
use route_seq::models::{Algorithm, Point, Problem, TravelMode};
use route_seq::solver;

fn p(lat: f64, lng: f64) -> Point {
    Point::new(lat, lng).expect("valid point")
}

/// Scattered 8-point instance (6 waypoints) used for ground-truth checks.
fn scattered_problem() -> Problem {
    Problem::new(
        p(0.0, 0.0),
        p(0.1, 2.4),
        vec![
            p(0.4, 0.9),
            p(-0.3, 0.4),
            p(0.6, 0.3),
            p(-0.1, 1.2),
            p(0.5, 1.6),
            p(-0.2, 1.9),
        ],
    )
}

#[test]
fn end_to_end_two_opt_example() {
    let problem = Problem::new(
        p(30.00, 31.00),
        p(30.10, 31.20),
        vec![p(30.05, 31.05), p(30.08, 31.15)],
    );

    let first = solver::optimize(&problem);
    assert_eq!(first.tour().indices(), &[0, 1, 2, 3]);
    assert_eq!(first.route().len(), 4);

    // Total distance equals the three consecutive haversine legs
    let expected = haversine_km(p(30.00, 31.00), p(30.05, 31.05))
        + haversine_km(p(30.05, 31.05), p(30.08, 31.15))
        + haversine_km(p(30.08, 31.15), p(30.10, 31.20));
    assert!((first.total_distance() - expected).abs() < 0.005 + 1e-9);

    // Driving at 60 km/h means one km per minute
    assert!((first.estimated_duration() - first.total_distance() * 60.0).abs() < 0.5);

    // The default path has no randomness; repeated runs must agree exactly
    for _ in 0..5 {
        let again = solver::optimize(&problem);
        assert_eq!(again.tour(), first.tour());
        assert_eq!(again.total_distance(), first.total_distance());
        assert_eq!(again.estimated_duration(), first.estimated_duration());
    }
}

#[test]
fn degenerate_zero_waypoints() {
    let start = p(30.0, 31.0);
    let end = p(30.1, 31.2);
    for algorithm in [
        Algorithm::Nearest,
        Algorithm::TwoOpt,
        Algorithm::Simulated,
        Algorithm::Genetic,
    ] {
        let problem = Problem::new(start, end, vec![]).with_algorithm(algorithm);
        let solution = solver::optimize(&problem);
        assert_eq!(solution.route(), &[start, end]);
        let direct = (haversine_km(start, end) * 100.0).round() / 100.0;
        assert_eq!(solution.total_distance(), direct);
    }
}

#[test]
fn ground_truth_bound_all_strategies() {
    let problem = scattered_problem();
    let distances = DistanceMatrix::from_points(&problem.points());
    let optimal_cost = solver::brute_force(&distances).cost(&distances);
    assert!(optimal_cost > 0.0);

    for algorithm in [
        Algorithm::Nearest,
        Algorithm::TwoOpt,
        Algorithm::Simulated,
        Algorithm::Genetic,
    ] {
        for seed in 0..5 {
            let solution = solver::optimize_seeded(&problem.clone().with_algorithm(algorithm), seed);
            let cost = solution.tour().cost(&distances);
            assert!(
                cost >= optimal_cost - 1e-9,
                "{algorithm:?} beat the exact optimum"
            );
            assert!(
                cost <= optimal_cost * 1.25,
                "{algorithm:?} seed {seed}: {cost:.3} vs optimum {optimal_cost:.3}"
            );
        }
    }
}

#[test]
fn small_instance_genetic_matches_two_opt() {
    // With <= 2 free waypoints the genetic strategy short-circuits to
    // greedy + 2-opt, so the result is deterministic and identical
    for waypoints in [
        vec![],
        vec![p(0.2, 0.4)],
        vec![p(0.2, 0.4), p(-0.1, 0.9)],
    ] {
        let base = Problem::new(p(0.0, 0.0), p(0.0, 1.5), waypoints);
        let genetic = solver::optimize(&base.clone().with_algorithm(Algorithm::Genetic));
        let two_opt = solver::optimize(&base.with_algorithm(Algorithm::TwoOpt));
        assert_eq!(genetic.tour(), two_opt.tour());
        assert_eq!(genetic.total_distance(), two_opt.total_distance());
    }
}

#[test]
fn improving_strategies_never_worse_than_greedy() {
    let problem = scattered_problem();
    let distances = DistanceMatrix::from_points(&problem.points());
    let greedy = solver::optimize(&problem.clone().with_algorithm(Algorithm::Nearest));
    let greedy_cost = greedy.tour().cost(&distances);

    for algorithm in [Algorithm::TwoOpt, Algorithm::Simulated] {
        for seed in 0..5 {
            let solution = solver::optimize_seeded(&problem.clone().with_algorithm(algorithm), seed);
            assert!(
                solution.tour().cost(&distances) <= greedy_cost + 1e-9,
                "{algorithm:?} worse than its greedy seed"
            );
        }
    }
}

#[test]
fn duration_scales_with_travel_mode() {
    let problem = scattered_problem();
    let driving = solver::optimize(&problem.clone().with_travel_mode(TravelMode::Driving));
    let transit = solver::optimize(&problem.clone().with_travel_mode(TravelMode::Transit));
    let bicycling = solver::optimize(&problem.with_travel_mode(TravelMode::Bicycling));

    // Same deterministic tour, different speed divisors
    assert_eq!(driving.total_distance(), transit.total_distance());
    let transit_ratio = transit.estimated_duration() / driving.estimated_duration();
    let bike_ratio = bicycling.estimated_duration() / driving.estimated_duration();
    assert!((transit_ratio - 2.0).abs() < 0.01);
    assert!((bike_ratio - 4.0).abs() < 0.01);
}

#[test]
fn solution_serializes_response_shape() {
    let solution = solver::optimize(&scattered_problem());
    let json = serde_json::to_value(&solution).expect("serializable");

    let route = json["optimalRoute"].as_array().expect("route array");
    assert_eq!(route.len(), 8);
    assert!(route[0]["lat"].is_number());
    assert!(route[0]["lng"].is_number());
    assert!(json["totalDistance"].is_number());
    assert!(json["estimatedDuration"].is_number());
    assert_eq!(
        json["algorithm"].as_str().expect("name"),
        "Nearest Neighbor with 2-opt improvement"
    );
}

//! End-to-end solver behavior: result policy, known answers, caching.

mod common;

use common::*;
use menu_core::{
    MenuSolver, Money, Outcome, ParseError, SolveError, SolveHandler, SolveOptions, SolveResult,
    SAMPLE_MENU,
};

#[derive(Default)]
struct Calls {
    success: Vec<u64>,
    fail: Vec<u64>,
    malformed: Vec<ParseError>,
}

impl SolveHandler for Calls {
    fn on_success(&mut self, result: &SolveResult) {
        self.success.push(result.count);
    }

    fn on_fail(&mut self, result: &SolveResult) {
        self.fail.push(result.count);
    }

    fn on_malformed(&mut self, error: &ParseError) {
        self.malformed.push(error.clone());
    }
}

#[test]
fn parses_the_ten_dish_menu() {
    let solver = MenuSolver::new(TEN_DISHES);
    assert_eq!(solver.goal(), Some(Money::from_cents(1000)));
    assert_eq!(solver.items().len(), 10);
}

#[test]
fn finds_the_known_combinations() {
    let mut solver = MenuSolver::new(TEN_DISHES);
    let result = solver.solve(&SolveOptions::default());

    assert_eq!(result.count, 10);
    let solution = result.solution.expect("solution");

    let mut expected = vec![
        vec![10],
        vec![1, 9],
        vec![2, 8],
        vec![3, 7],
        vec![4, 6],
        vec![1, 2, 7],
        vec![1, 3, 6],
        vec![1, 4, 5],
        vec![2, 3, 5],
        vec![1, 2, 3, 4],
    ];
    expected.sort();
    assert_eq!(normalized(&solution), expected);
}

#[test]
fn every_subset_is_canonical_and_sums_to_goal() {
    let mut solver = MenuSolver::new(&counting_menu(20, 20));
    let result = solver.solve(&SolveOptions::default());
    let goal = result.goal;
    let solution = result.solution.expect("solution");

    assert_eq!(solution.len() as u64, result.count);
    for subset in &solution {
        assert_eq!(total(subset), goal);
        assert!(subset.windows(2).all(|w| w[0].price < w[1].price));
    }

    let mut seen = normalized(&solution);
    seen.dedup();
    assert_eq!(seen.len(), solution.len());
}

#[test]
fn counts_distinct_partitions_of_fifty() {
    let mut solver = MenuSolver::new(&counting_menu(50, 50));
    assert_eq!(solver.count().count, 3658);
    assert_eq!(solver.solve(&SolveOptions::default()).solution.map(|s| s.len()), Some(3658));
}

#[test]
fn missing_goal_takes_the_malformed_path() {
    let mut solver = MenuSolver::new(MISSING_GOAL);
    let mut calls = Calls::default();
    let result = solver.solve_with(&SolveOptions::default(), &mut calls);

    assert_eq!(calls.malformed.len(), 1);
    assert!(calls.success.is_empty() && calls.fail.is_empty());
    assert_eq!(result.outcome(), Outcome::Malformed);
    assert!(result.solution.is_none());

    // Terminal: a second solve short-circuits the same way.
    solver.solve_with(&SolveOptions::default(), &mut calls);
    assert_eq!(calls.malformed.len(), 2);
}

#[test]
fn item_lines_without_prices_leave_nothing_to_solve() {
    let mut solver = MenuSolver::new("10\ncarrots,fries,fruit");
    let result = solver.count();
    assert_eq!(
        result.error,
        Some(SolveError::Malformed {
            reason: ParseError::Empty
        })
    );
}

#[test]
fn unreachable_goal_takes_the_fail_path() {
    let mut solver = MenuSolver::new(ONE_CENT_GOAL);
    let mut calls = Calls::default();
    let result = solver.solve_with(&SolveOptions::default(), &mut calls);

    assert_eq!(calls.fail, vec![0]);
    assert_eq!(result.count, 0);
    assert_eq!(
        result.error,
        Some(SolveError::NoSolution {
            goal: Money::from_cents(1)
        })
    );
    assert_eq!(result.items.len(), 9);
}

#[test]
fn max_bounds_the_acceptable_count() {
    let mut solver = MenuSolver::new(TEN_DISHES);
    let mut calls = Calls::default();

    let result = solver.solve_with(&SolveOptions::default().with_max(5), &mut calls);
    assert_eq!(result.outcome(), Outcome::Fail);
    assert!(result.solution.is_none());

    let result = solver.solve_with(&SolveOptions::default().with_max(10), &mut calls);
    assert_eq!(result.outcome(), Outcome::Success);
    assert_eq!(result.count, 10);

    assert_eq!(calls.fail, vec![10]);
    assert_eq!(calls.success, vec![10]);
}

#[test]
fn count_only_returns_no_solution_field() {
    let mut solver = MenuSolver::new(TEN_DISHES);
    let result = solver.solve(&SolveOptions::default().count_only());
    assert!(result.solution.is_none());
    assert_eq!(result.count, 10);

    let result = solver.solve(&SolveOptions::default());
    assert!(!result.solution.expect("solution").is_empty());
}

#[test]
fn repeated_solves_are_identical_and_cached() {
    let mut solver = MenuSolver::new(&counting_menu(30, 30));
    let first = solver.solve(&SolveOptions::default());
    let tree = solver.tree_stats();
    let entries = solver.cache_stats();

    let second = solver.solve(&SolveOptions::default());
    assert_eq!(first, second);
    assert_eq!(solver.tree_stats(), tree);
    assert_eq!(solver.cache_stats().count_entries, entries.count_entries);
    assert_eq!(solver.cache_stats().solution_entries, entries.solution_entries);
}

#[test]
fn results_are_deterministic_across_engines() {
    let a = MenuSolver::new(TEN_DISHES).solve(&SolveOptions::default());
    let b = MenuSolver::new(TEN_DISHES).solve(&SolveOptions::default());
    assert_eq!(a, b);
}

#[test]
fn sample_menu_solves_within_default_limit() {
    let mut solver = MenuSolver::new(SAMPLE_MENU);
    let result = solver.solve(&SolveOptions::default().with_max(menu_core::DEFAULT_MAX_SOLUTIONS));
    assert!(result.is_success());
    assert_eq!(result.count, 9);
}

#[test]
fn result_serializes_to_the_output_contract() {
    let mut solver = MenuSolver::new("$3\nfries,$1\nsoda,$2\nsalad,$3");
    let json = serde_json::to_value(solver.solve(&SolveOptions::default())).unwrap();

    assert_eq!(json["goal"], 300);
    assert_eq!(json["count"], 2);
    assert_eq!(json["items"][0]["name"], "fries");
    assert_eq!(json["items"][0]["price"], 100);
    assert_eq!(json["solution"].as_array().map(Vec::len), Some(2));
    assert!(json.get("error").is_none());

    let json = serde_json::to_value(solver.count()).unwrap();
    assert!(json.get("solution").is_none());
}

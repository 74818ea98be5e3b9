//! Property tests: the tree-based solver against brute-force enumeration.

mod common;

use common::total;
use menu_core::{Item, MenuSolver, Money, SolveOptions};
use proptest::prelude::*;

/// Every subset of `items` with pairwise-distinct prices summing to `goal`,
/// as sorted price lists.
fn brute_force(items: &[Item], goal: Money) -> Vec<Vec<i64>> {
    let mut found = Vec::new();
    for mask in 1u32..(1 << items.len()) {
        let subset: Vec<&Item> = (0..items.len())
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| &items[i])
            .collect();
        let mut prices: Vec<i64> = subset.iter().map(|item| item.price.cents()).collect();
        prices.sort();
        let distinct = prices.windows(2).all(|w| w[0] < w[1]);
        if distinct && prices.iter().sum::<i64>() == goal.cents() {
            found.push(prices);
        }
    }
    found.sort();
    found
}

fn menu_text(goal: i64, prices: &[i64]) -> String {
    let mut text = format!("{}\n", Money::from_cents(goal));
    for (i, price) in prices.iter().enumerate() {
        text.push_str(&format!("dish{},{}\n", i, Money::from_cents(*price)));
    }
    text
}

proptest! {
    #[test]
    fn matches_brute_force(prices in prop::collection::vec(0i64..40, 1..12), goal in 0i64..120) {
        let text = menu_text(goal, &prices);
        let mut solver = MenuSolver::new(&text);
        let result = solver.solve(&SolveOptions::default());

        let expected = brute_force(&solver.items(), Money::from_cents(goal));
        prop_assert_eq!(result.count, expected.len() as u64);

        let mut actual: Vec<Vec<i64>> = result
            .solution
            .unwrap_or_default()
            .iter()
            .map(|s| s.iter().map(|item| item.price.cents()).collect())
            .collect();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn subsets_are_canonical(prices in prop::collection::vec(1i64..25, 1..14), goal in 1i64..80) {
        let mut solver = MenuSolver::new(&menu_text(goal, &prices));
        let result = solver.solve(&SolveOptions::default());
        let solution = result.solution.unwrap_or_default();

        prop_assert_eq!(solution.len() as u64, result.count);
        for subset in &solution {
            prop_assert_eq!(total(subset), Money::from_cents(goal));
            prop_assert!(subset.windows(2).all(|w| w[0].price < w[1].price));
        }
    }

    #[test]
    fn count_only_agrees_with_enumeration(prices in prop::collection::vec(1i64..30, 1..14), goal in 1i64..90) {
        let text = menu_text(goal, &prices);
        let counted = MenuSolver::new(&text).count().count;
        let listed = MenuSolver::new(&text).solve(&SolveOptions::default());
        prop_assert_eq!(counted, listed.count);
        prop_assert_eq!(listed.solution.map_or(0, |s| s.len() as u64), counted);
    }
}

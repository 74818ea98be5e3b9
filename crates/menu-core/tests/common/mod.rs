//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use menu_core::{Item, Money};

/// The ten-dish menu with a $10 goal: exactly ten combinations.
pub const TEN_DISHES: &str = "10\ncarrots,$1\nfries,$2\nfruit,$3\nsandwitch,$4\njuice,$5\nsteak,$6\nchicken,$7\ncoffee,$8\nice cream,$9\nchips,$10";

/// Nine dishes ($1..$9) and a one-cent goal: no combination.
pub const ONE_CENT_GOAL: &str = "$00.01\ncarrots,$1\nfries,$2\nfruit,$3\nsandwitch,$4\njuice,$5\nsteak,$6\nchicken,$7\ncoffee,$8\nice cream,$9";

/// The nine dishes with no goal line.
pub const MISSING_GOAL: &str = "carrots,$1\nfries,$2\nfruit,$3\nsandwitch,$4\njuice,$5\nsteak,$6\nchicken,$7\ncoffee,$8\nice cream,$9";

/// A goal of `goal` dollars and items priced 1..=n dollars.
pub fn counting_menu(goal: u32, n: u32) -> String {
    let mut text = format!("{}\n", goal);
    for price in 1..=n {
        text.push_str(&format!("item{},{}\n", price, price));
    }
    text
}

/// Prices of one subset, in whole dollars.
pub fn dollars(subset: &[Item]) -> Vec<i64> {
    subset.iter().map(|item| item.price.dollars()).collect()
}

pub fn total(subset: &[Item]) -> Money {
    subset.iter().map(|item| item.price).sum()
}

/// Sorted dollar-price lists for a whole solution, for order-free comparison.
pub fn normalized(solution: &[Vec<Item>]) -> Vec<Vec<i64>> {
    let mut out: Vec<Vec<i64>> = solution.iter().map(|s| dollars(s)).collect();
    out.sort();
    out
}

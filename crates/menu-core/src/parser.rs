//! # Menu Parser
//!
//! Turns raw menu text into a [`Menu`]: a goal amount and a price-sorted
//! item list.
//!
//! ## Input Format
//! ```text
//! $15.05              ← goal, currency symbol optional
//! mixed fruit,$2.15   ← name,price  (price currency symbol optional)
//! french fries,2.75
//!                     ← blank lines are skipped
//! side salad          ← no comma: skipped
//! hot wings,$free     ← price not an amount: skipped
//! ```
//!
//! ## Policy
//! Malformed ITEM lines are skipped. Only a bad GOAL line (or no surviving
//! items at all) fails the whole parse.

use tracing::debug;

use crate::error::ParseError;
use crate::money::Money;
use crate::types::{Item, Menu};

/// Result type for parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses menu text.
///
/// ## Example
/// ```rust
/// use menu_core::parser::parse;
///
/// let menu = parse("$3\nfries,$2\ncarrots,$1\n").unwrap();
/// assert_eq!(menu.goal.cents(), 300);
/// assert_eq!(menu.items[0].name, "carrots"); // sorted by price
/// ```
pub fn parse(text: &str) -> ParseResult<Menu> {
    let mut lines = text.lines();

    let goal_line = lines.next().unwrap_or("").trim();
    let goal = Money::parse_amount(goal_line).ok_or_else(|| ParseError::InvalidGoal {
        line: goal_line.to_string(),
    })?;

    let mut items = Vec::new();
    let mut skipped = 0usize;
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match parse_item(line) {
            Some(item) => items.push(item),
            None => skipped += 1,
        }
    }

    if items.is_empty() {
        return Err(ParseError::Empty);
    }

    // Stable: equal prices keep their input order.
    items.sort_by_key(|item| item.price);

    debug!(goal = %goal, items = items.len(), skipped, "Parsed menu");
    Ok(Menu { goal, items })
}

/// Parses one `name,price` line. Fields past the second are ignored.
fn parse_item(line: &str) -> Option<Item> {
    let mut fields = line.split(',');
    let name = fields.next()?.trim();
    let price = Money::parse_amount(fields.next()?)?;
    Some(Item::new(name, price))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn prices(menu: &Menu) -> Vec<i64> {
        menu.items.iter().map(|item| item.price.cents()).collect()
    }

    #[test]
    fn test_parse_basic_menu() {
        let menu = parse("10\ncarrots,$1\nfries,$2\nfruit,$3").unwrap();
        assert_eq!(menu.goal, Money::from_cents(1000));
        assert_eq!(prices(&menu), vec![100, 200, 300]);
        assert_eq!(menu.items[0].name, "carrots");
    }

    #[test]
    fn test_parse_sorts_by_price_stably() {
        let menu = parse("$5\nsteak,$6\nsoda,$1\ncola,$1\nchips,$0.5").unwrap();
        let names: Vec<&str> = menu.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["chips", "soda", "cola", "steak"]);
    }

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let menu = parse("  $4.00  \r\n\n   \n  fries , $2 \r\n\ncarrots,1\n").unwrap();
        assert_eq!(menu.goal.cents(), 400);
        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items[1].name, "fries");
    }

    #[test]
    fn test_parse_skips_malformed_items() {
        let menu = parse("$5\nside salad\nwings,$free\nfries,$2\nsoup,-3\nrolls,").unwrap();
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].name, "fries");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let menu = parse("$5\nfries,$2,large").unwrap();
        assert_eq!(menu.items[0].price.cents(), 200);
    }

    #[test]
    fn test_parse_allows_duplicate_names() {
        let menu = parse("$2\nfries,$1\nfries,$1").unwrap();
        assert_eq!(menu.items.len(), 2);
    }

    #[test]
    fn test_parse_invalid_goal() {
        let err = parse("carrots,$1\nfries,$2").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidGoal {
                line: "carrots,$1".to_string()
            }
        );
        assert!(matches!(parse("").unwrap_err(), ParseError::InvalidGoal { .. }));
    }

    #[test]
    fn test_parse_no_items() {
        assert_eq!(parse("$10").unwrap_err(), ParseError::Empty);
        assert_eq!(parse("$10\ncarrots,fries,fruit").unwrap_err(), ParseError::Empty);
    }
}

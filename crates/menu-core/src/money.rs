//! # Money Module
//!
//! Provides the `Money` type for menu prices and goal amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Scaling a float price to cents:                                        │
//! │    0.29 * 100 = 28.999999999999996  → truncates to 28  ❌ WRONG!        │
//! │                                                                         │
//! │  A subset-sum search needs EXACT equality on sums, so a single          │
//! │  lost cent turns a valid combination into a miss.                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents, parsed digit by digit                     │
//! │    "0.29" → 0 dollars + 29 cents = 29 cents                             │
//! │    "1.999" → 1 dollar + 99 cents (third digit truncated) = 199 cents    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use menu_core::money::Money;
//!
//! let price = Money::parse_amount("$10.99").unwrap();
//! assert_eq!(price.cents(), 1099);
//! assert_eq!(price.to_string(), "$10.99");
//!
//! let total = price + Money::from_cents(1);
//! assert_eq!(total.cents(), 1100);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ParseError;

/// Currency symbols that may prefix an amount. At most one is stripped.
pub const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction of two prices never wraps; the parser
///   is what keeps menu prices non-negative
/// - **Single field tuple struct**: serializes as a bare integer, which is
///   exactly the `price` / `goal` shape of the output contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use menu_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use menu_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on i64 overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Parses a human-written amount such as `10`, `$10.00`, `€0.5` or `.99`.
    ///
    /// ## Rules
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  "  $12.345  "                                                          │
    /// │       │                                                                 │
    /// │       ├── trim whitespace          → "$12.345"                          │
    /// │       ├── strip ONE currency sign  → "12.345"                           │
    /// │       ├── optional leading '+'                                          │
    /// │       ├── split on '.'             → "12" / "345"                       │
    /// │       ├── whole part × 100         → 1200                               │
    /// │       └── first two fraction digits, rest truncated → 34               │
    /// │                                                                         │
    /// │  Result: 1234 cents                                                    │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// Returns `None` for empty input, negative amounts, exponents, any
    /// non-digit character, or values that do not fit in i64 cents.
    ///
    /// ## Example
    /// ```rust
    /// use menu_core::money::Money;
    ///
    /// assert_eq!(Money::parse_amount("$00.01"), Some(Money::from_cents(1)));
    /// assert_eq!(Money::parse_amount("0.29"), Some(Money::from_cents(29)));
    /// assert_eq!(Money::parse_amount("fries"), None);
    /// ```
    pub fn parse_amount(text: &str) -> Option<Money> {
        let mut rest = text.trim();
        if let Some(first) = rest.chars().next() {
            if CURRENCY_SYMBOLS.contains(&first) {
                rest = &rest[first.len_utf8()..];
            }
        }
        rest = rest.strip_prefix('+').unwrap_or(rest);

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let mut cents: i64 = 0;
        for digit in whole.bytes() {
            cents = cents.checked_mul(10)?.checked_add(i64::from(digit - b'0'))?;
        }
        cents = cents.checked_mul(100)?;

        // Tenths then hundredths; anything past that is truncated.
        let mut scale = 10;
        for digit in fraction.bytes().take(2) {
            cents = cents.checked_add(i64::from(digit - b'0') * scale)?;
            scale /= 10;
        }

        Some(Money(cents))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the menu's own format: `$` and two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl FromStr for Money {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_amount(s).ok_or_else(|| ParseError::InvalidAmount {
            text: s.trim().to_string(),
        })
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

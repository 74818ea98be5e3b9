//! # Domain Types
//!
//! Value types shared by every stage of the solver.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │      Menu       │   │  SolveOptions   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  goal (Money)   │   │  max            │       │
//! │  │  price (Money)  │   │  items (sorted) │   │  count_only     │       │
//! │  └─────────────────┘   └─────────────────┘   │  include_tree   │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  SolveResult { items, goal, count, solution?, error?, tree? }   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Items are identified by POSITION in the sorted menu ([`ItemId`]), never by
//! name. Two items may share a name and still be distinct.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::SolveError;
use crate::money::Money;
use crate::tree::TreeSnapshot;

// =============================================================================
// Item
// =============================================================================

/// A priced menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Display name, trimmed.
    pub name: String,

    /// Price in cents.
    pub price: Money,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Item {
            name: name.into(),
            price,
        }
    }
}

/// Position of an item in the price-sorted menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemId(pub usize);

impl ItemId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One canonical subset, as item positions in strictly ascending price order.
pub type Subset = Vec<ItemId>;

// =============================================================================
// Menu
// =============================================================================

/// A successfully parsed menu: the goal and the items sorted by price.
///
/// ## Invariants
/// - `items` is sorted ascending by price (stable: ties keep input order)
/// - `items` is non-empty
/// - every price and the goal are non-negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub goal: Money,
    pub items: Vec<Item>,
}

impl Menu {
    /// Looks up an item by position.
    #[inline]
    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.index()]
    }

    /// Iterates `(ItemId, &Item)` in ascending price order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter().enumerate().map(|(i, item)| (ItemId(i), item))
    }

    /// Converts a subset of positions into owned items.
    pub fn materialize(&self, subset: &[ItemId]) -> Vec<Item> {
        subset.iter().map(|&id| self.item(id).clone()).collect()
    }
}

// =============================================================================
// Solve Options
// =============================================================================

/// Options for a single solve call.
///
/// ## Example
/// ```rust
/// use menu_core::SolveOptions;
///
/// let options = SolveOptions::default().with_max(500);
/// assert_eq!(options.max, Some(500));
/// assert!(!options.count_only);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveOptions {
    /// Upper bound on an acceptable number of subsets. `None` is unbounded.
    pub max: Option<u64>,

    /// Report only the count, skip enumeration.
    pub count_only: bool,

    /// Attach a snapshot of the partition tree to a successful result.
    pub include_tree: bool,
}

impl SolveOptions {
    pub fn with_max(mut self, max: u64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn count_only(mut self) -> Self {
        self.count_only = true;
        self
    }

    pub fn with_tree(mut self) -> Self {
        self.include_tree = true;
        self
    }
}

// =============================================================================
// Solve Result
// =============================================================================

/// Which delivery path a result took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Count is within bounds (solution attached unless count-only).
    Success,
    /// No subset, or more subsets than `max`.
    Fail,
    /// The menu text never parsed.
    Malformed,
}

/// The value object every solve call returns.
///
/// ## Output Contract
/// ```text
/// {
///   "items":    [{ "name": "carrots", "price": 100 }, ...],
///   "goal":     1000,
///   "count":    10,
///   "solution": [[{ "name": "chips", "price": 1000 }], ...]   // optional
/// }
/// ```
/// Every inner `solution` array has strictly increasing prices summing to `goal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    /// The parsed menu (empty when malformed).
    pub items: Vec<Item>,

    /// The parsed goal (zero when malformed).
    pub goal: Money,

    /// Number of canonical subsets summing to `goal`.
    pub count: u64,

    /// Present on success unless count-only was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub solution: Option<Vec<Vec<Item>>>,

    /// Present on the fail and malformed paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<SolveError>,

    /// Present on success when the caller asked for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub tree: Option<TreeSnapshot>,
}

impl SolveResult {
    /// Classifies the result by the path it was delivered on.
    pub fn outcome(&self) -> Outcome {
        match &self.error {
            None => Outcome::Success,
            Some(SolveError::Malformed { .. }) => Outcome::Malformed,
            Some(_) => Outcome::Fail,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome() == Outcome::Success
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

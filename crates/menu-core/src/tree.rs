//! # Partition Tree
//!
//! A compressed powerset of the menu: for every reachable sum up to the goal,
//! the list of edges that generate it.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items: a=$1  b=$2  c=$3        goal: $3                                │
//! │                                                                         │
//! │  sum $1 ── Leaf(a)                                                      │
//! │  sum $2 ── Leaf(b)                                                      │
//! │  sum $3 ── Compound($1, b)   "any subset summing to $1, then b"         │
//! │         ── Leaf(c)                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Compression
//! When a sum is reached for the first time it becomes a single new BASE.
//! Later items extend that one base rather than every concrete combination
//! that reaches the sum, so the tree grows with the number of distinct sums
//! instead of the number of subsets.
//!
//! ## Invariants
//! - a compound edge `(base, last)` satisfies `base + last.price == sum`
//! - the base bucket was created while processing items BEFORE `last`
//! - the tree is immutable once built; it depends only on (items, goal)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Item, ItemId, Menu};

// =============================================================================
// Edge
// =============================================================================

/// One generating step for a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// A single item whose own price is the sum.
    Leaf(ItemId),

    /// Any canonical subset summing to `base`, followed by `last`.
    Compound { base: Money, last: ItemId },
}

impl Edge {
    /// The item this edge appends last (the subset's maximum-price item).
    #[inline]
    pub fn last(&self) -> ItemId {
        match *self {
            Edge::Leaf(id) => id,
            Edge::Compound { last, .. } => last,
        }
    }
}

/// All edges producing one sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub sum: Money,
    pub edges: Vec<Edge>,
}

// =============================================================================
// Partition Tree
// =============================================================================

/// Append-only arena of buckets, indexed by sum.
///
/// Buckets are stored in creation order, which is also the order they join
/// the builder's worklist of bases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionTree {
    goal: Money,
    buckets: Vec<Bucket>,
    index: HashMap<Money, usize>,
}

impl PartitionTree {
    /// Builds the full tree for `items` (sorted ascending by price) and `goal`.
    ///
    /// ## Algorithm
    /// ```text
    /// bases = [empty]
    /// for item in items (ascending price):
    ///     for base in bases as of the start of this item:
    ///         sum = base.sum + item.price
    ///         sum > goal        → prune
    ///         sum is new        → new bucket, and a new base (used from the next item on)
    ///         base is empty     → tree[sum] += Leaf(item)
    ///         otherwise         → tree[sum] += Compound(base.sum, item)
    /// ```
    pub fn build(items: &[Item], goal: Money) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0].price <= w[1].price));

        let mut tree = PartitionTree {
            goal,
            buckets: Vec::new(),
            index: HashMap::new(),
        };

        for (position, item) in items.iter().enumerate() {
            let id = ItemId(position);

            // Bases created while handling this item join from the next one on.
            let bases = tree.buckets.len();

            tree.attach(item.price, Edge::Leaf(id));
            for base in 0..bases {
                let base_sum = tree.buckets[base].sum;
                if let Some(sum) = base_sum.checked_add(item.price) {
                    tree.attach(
                        sum,
                        Edge::Compound {
                            base: base_sum,
                            last: id,
                        },
                    );
                }
            }
        }

        let stats = tree.stats();
        info!(
            goal = %goal,
            items = items.len(),
            buckets = stats.buckets,
            edges = stats.edges,
            "Built partition tree"
        );
        tree
    }

    /// Convenience for [`PartitionTree::build`] on a parsed menu.
    pub fn for_menu(menu: &Menu) -> Self {
        Self::build(&menu.items, menu.goal)
    }

    fn attach(&mut self, sum: Money, edge: Edge) {
        if sum > self.goal {
            return;
        }
        let slot = match self.index.get(&sum) {
            Some(&slot) => slot,
            None => {
                self.buckets.push(Bucket {
                    sum,
                    edges: Vec::new(),
                });
                self.index.insert(sum, self.buckets.len() - 1);
                self.buckets.len() - 1
            }
        };
        self.buckets[slot].edges.push(edge);
    }

    /// The goal this tree was built for.
    #[inline]
    pub fn goal(&self) -> Money {
        self.goal
    }

    /// Edges generating `sum`, or `None` when no subset reaches it.
    pub fn edges(&self, sum: Money) -> Option<&[Edge]> {
        self.index
            .get(&sum)
            .map(|&slot| self.buckets[slot].edges.as_slice())
    }

    /// Buckets in creation order.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            buckets: self.buckets.len(),
            ..TreeStats::default()
        };
        for edge in self.buckets.iter().flat_map(|b| &b.edges) {
            stats.edges += 1;
            match edge {
                Edge::Leaf(_) => stats.leaf_edges += 1,
                Edge::Compound { .. } => stats.compound_edges += 1,
            }
        }
        stats
    }

    /// Serializable view of the tree, buckets ordered by ascending sum.
    pub fn snapshot(&self, menu: &Menu) -> TreeSnapshot {
        let mut buckets: Vec<BucketSnapshot> = self
            .buckets
            .iter()
            .map(|bucket| BucketSnapshot {
                sum: bucket.sum,
                edges: bucket
                    .edges
                    .iter()
                    .map(|edge| match *edge {
                        Edge::Leaf(id) => EdgeSnapshot::Leaf {
                            item: menu.item(id).clone(),
                        },
                        Edge::Compound { base, last } => EdgeSnapshot::Compound {
                            base_sum: base,
                            item: menu.item(last).clone(),
                        },
                    })
                    .collect(),
            })
            .collect();
        buckets.sort_by_key(|bucket| bucket.sum);
        TreeSnapshot {
            goal: self.goal,
            buckets,
        }
    }
}

// =============================================================================
// Inspection Types
// =============================================================================

/// Size summary of a built tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TreeStats {
    pub buckets: usize,
    pub edges: usize,
    pub leaf_edges: usize,
    pub compound_edges: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TreeSnapshot {
    pub goal: Money,
    pub buckets: Vec<BucketSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BucketSnapshot {
    pub sum: Money,
    pub edges: Vec<EdgeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EdgeSnapshot {
    Leaf {
        item: Item,
    },
    Compound {
        #[serde(rename = "baseSum")]
        base_sum: Money,
        item: Item,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================

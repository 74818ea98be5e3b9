//! # Tree Reducer
//!
//! One memoized walk over the [`PartitionTree`], parameterized by a
//! [`Reduction`] strategy. The solver runs it twice: once to count subsets
//! ([`Counting`]) and once to list them ([`Enumeration`]).
//!
//! ## Canonical Ordering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Compound edge at sum S:  (base B, last item L)                         │
//! │                                                                         │
//! │  Recurse into bucket B keeping ONLY edges whose last item is cheaper    │
//! │  than L. Every subset is therefore completed by its most expensive      │
//! │  item, and is produced exactly once:                                    │
//! │                                                                         │
//! │     {1, 2, 7}   =  ({1, 2}  then 7)   =  (({1} then 2) then 7)          │
//! │                                                                         │
//! │  Memo key: (B, L.price). Two compound edges sharing B but with          │
//! │  different last prices filter B differently, so they never share a      │
//! │  cache slot.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Recursion always moves to a smaller sum or a stricter price bound, so it
//! terminates. Each `(sum, bound)` pair is computed at most once per cache.

use std::collections::HashMap;

use crate::money::Money;
use crate::tree::{Edge, PartitionTree};
use crate::types::{Item, ItemId, Subset};

// =============================================================================
// Strategy
// =============================================================================

/// How partial results are formed and merged during a reduction.
pub trait Reduction {
    type Value;

    /// Result for a sum no subset reaches.
    fn empty(&self) -> Self::Value;

    /// Result contributed by a leaf edge.
    fn leaf(&self, item: ItemId) -> Self::Value;

    /// Result of appending `last` to every subset described by `base`.
    fn extend(&self, base: &Self::Value, last: ItemId) -> Self::Value;

    /// Folds `part` into `acc`.
    fn combine(&self, acc: &mut Self::Value, part: Self::Value);
}

/// Counts canonical subsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counting;

impl Reduction for Counting {
    type Value = u64;

    fn empty(&self) -> u64 {
        0
    }

    fn leaf(&self, _item: ItemId) -> u64 {
        1
    }

    fn extend(&self, base: &u64, _last: ItemId) -> u64 {
        *base
    }

    fn combine(&self, acc: &mut u64, part: u64) {
        *acc = acc.saturating_add(part);
    }
}

/// Materializes canonical subsets as item positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Enumeration;

impl Reduction for Enumeration {
    type Value = Vec<Subset>;

    fn empty(&self) -> Vec<Subset> {
        Vec::new()
    }

    fn leaf(&self, item: ItemId) -> Vec<Subset> {
        vec![vec![item]]
    }

    fn extend(&self, base: &Vec<Subset>, last: ItemId) -> Vec<Subset> {
        base.iter()
            .map(|subset| {
                let mut extended = Vec::with_capacity(subset.len() + 1);
                extended.extend_from_slice(subset);
                extended.push(last);
                extended
            })
            .collect()
    }

    fn combine(&self, acc: &mut Vec<Subset>, part: Vec<Subset>) {
        acc.extend(part);
    }
}

// =============================================================================
// Memo Cache
// =============================================================================

/// Cache slot: a sum, optionally restricted to edges whose last item costs
/// strictly less than `below`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReductionKey {
    pub sum: Money,
    pub below: Option<Money>,
}

impl ReductionKey {
    /// Every edge of `sum` participates.
    pub const fn unbounded(sum: Money) -> Self {
        ReductionKey { sum, below: None }
    }

    pub const fn bounded(sum: Money, below: Money) -> Self {
        ReductionKey {
            sum,
            below: Some(below),
        }
    }

    #[inline]
    fn admits(&self, price: Money) -> bool {
        match self.below {
            None => true,
            Some(bound) => price < bound,
        }
    }
}

/// Memoized reduction results. Grows monotonically; never invalidated, since
/// the tree it describes never changes.
#[derive(Debug, Clone)]
pub struct MemoCache<V> {
    values: HashMap<ReductionKey, V>,
    hits: u64,
}

impl<V> Default for MemoCache<V> {
    fn default() -> Self {
        MemoCache {
            values: HashMap::new(),
            hits: 0,
        }
    }
}

impl<V> MemoCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unfiltered result for `sum`, if already computed.
    pub fn get(&self, sum: Money) -> Option<&V> {
        self.values.get(&ReductionKey::unbounded(sum))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Walks a partition tree with a given strategy.
pub struct TreeReducer<'a, R> {
    tree: &'a PartitionTree,
    items: &'a [Item],
    strategy: R,
}

impl<'a, R: Reduction> TreeReducer<'a, R> {
    /// `items` must be the sorted list the tree was built from.
    pub fn new(tree: &'a PartitionTree, items: &'a [Item], strategy: R) -> Self {
        TreeReducer {
            tree,
            items,
            strategy,
        }
    }

    /// Reduces every canonical subset summing to `sum`.
    ///
    /// The result lives in `cache` under the unbounded key for `sum`, along
    /// with every intermediate `(sum, bound)` result visited on the way.
    pub fn reduce<'c>(&self, sum: Money, cache: &'c mut MemoCache<R::Value>) -> &'c R::Value {
        self.resolve(ReductionKey::unbounded(sum), cache)
    }

    fn resolve<'c>(
        &self,
        key: ReductionKey,
        cache: &'c mut MemoCache<R::Value>,
    ) -> &'c R::Value {
        if cache.values.contains_key(&key) {
            cache.hits += 1;
            return &cache.values[&key];
        }

        let mut acc = self.strategy.empty();
        if let Some(edges) = self.tree.edges(key.sum) {
            for edge in edges {
                if !key.admits(self.price(edge.last())) {
                    continue;
                }
                let part = match *edge {
                    Edge::Leaf(item) => self.strategy.leaf(item),
                    Edge::Compound { base, last } => {
                        let nested = ReductionKey::bounded(base, self.price(last));
                        let base_value = self.resolve(nested, cache);
                        self.strategy.extend(base_value, last)
                    }
                };
                self.strategy.combine(&mut acc, part);
            }
        }

        cache.values.entry(key).or_insert(acc)
    }

    #[inline]
    fn price(&self, id: ItemId) -> Money {
        self.items[id.index()].price
    }
}

/// Number of canonical subsets of `items` summing to `sum`.
pub fn count(tree: &PartitionTree, items: &[Item], sum: Money, cache: &mut MemoCache<u64>) -> u64 {
    *TreeReducer::new(tree, items, Counting).reduce(sum, cache)
}

/// Every canonical subset of `items` summing to `sum`.
pub fn enumerate(
    tree: &PartitionTree,
    items: &[Item],
    sum: Money,
    cache: &mut MemoCache<Vec<Subset>>,
) -> Vec<Subset> {
    TreeReducer::new(tree, items, Enumeration)
        .reduce(sum, cache)
        .clone()
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Menu Solver
//!
//! The public face of the engine. Owns the parsed menu, the lazily built
//! partition tree and both memo caches.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   MenuSolver::new(text)                                                 │
//! │          │                                                              │
//! │          ├── parse fails ──► MALFORMED  (terminal: every solve          │
//! │          │                              short-circuits to on_malformed) │
//! │          │                                                              │
//! │          └── parse ok ─────► READY                                      │
//! │                                │                                        │
//! │                   first solve: build tree                              │
//! │                   every solve: count (cached) ──┬── 0 or > max ► FAIL   │
//! │                                                 │                       │
//! │                                                 └── else ► SUCCESS      │
//! │                                                     (enumerate, cached, │
//! │                                                      unless count-only) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! FAIL is not a state: the solver stays READY and a later solve with a
//! larger `max` succeeds without recomputing anything.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{ParseError, SolveError};
use crate::money::Money;
use crate::parser;
use crate::reducer::{Counting, Enumeration, MemoCache, TreeReducer};
use crate::tree::{PartitionTree, TreeStats};
use crate::types::{Item, Menu, SolveOptions, SolveResult, Subset};

// =============================================================================
// Result Delivery
// =============================================================================

/// Receives a solve result on the path it was delivered on.
///
/// Every method defaults to a no-op, so implementors only override the
/// paths they care about. The same result is also returned from
/// [`MenuSolver::solve_with`].
pub trait SolveHandler {
    fn on_success(&mut self, _result: &SolveResult) {}

    fn on_fail(&mut self, _result: &SolveResult) {}

    fn on_malformed(&mut self, _error: &ParseError) {}
}

/// Discards every notification.
impl SolveHandler for () {}

/// Memo cache sizes, for inspection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub tree_built: bool,
    pub count_entries: usize,
    pub count_hits: u64,
    pub solution_entries: usize,
    pub solution_hits: u64,
}

// =============================================================================
// Solver
// =============================================================================

/// A subset-sum engine for one menu.
///
/// ## Example
/// ```rust
/// use menu_core::{MenuSolver, SolveOptions, SAMPLE_MENU};
///
/// let mut solver = MenuSolver::new(SAMPLE_MENU);
/// let result = solver.solve(&SolveOptions::default().with_max(500));
/// assert!(result.is_success());
/// assert_eq!(result.count, 9);
/// ```
#[derive(Debug)]
pub struct MenuSolver {
    state: SolverState,
}

#[derive(Debug)]
enum SolverState {
    Malformed(ParseError),
    Ready(Engine),
}

#[derive(Debug)]
struct Engine {
    menu: Menu,
    tree: Option<PartitionTree>,
    counts: MemoCache<u64>,
    solutions: MemoCache<Vec<Subset>>,
}

impl MenuSolver {
    /// Parses `text` and returns a solver in the READY or MALFORMED state.
    pub fn new(text: &str) -> Self {
        let state = match parser::parse(text) {
            Ok(menu) => SolverState::Ready(Engine {
                menu,
                tree: None,
                counts: MemoCache::new(),
                solutions: MemoCache::new(),
            }),
            Err(err) => {
                debug!(error = %err, "Menu rejected");
                SolverState::Malformed(err)
            }
        };
        MenuSolver { state }
    }

    /// Solves without notifications.
    pub fn solve(&mut self, options: &SolveOptions) -> SolveResult {
        self.solve_with(options, &mut ())
    }

    /// Solves and notifies `handler` on the matching path.
    pub fn solve_with<H: SolveHandler + ?Sized>(
        &mut self,
        options: &SolveOptions,
        handler: &mut H,
    ) -> SolveResult {
        match &mut self.state {
            SolverState::Malformed(err) => {
                debug!(error = %err, "Solve on malformed menu");
                handler.on_malformed(err);
                SolveResult {
                    items: Vec::new(),
                    goal: Money::zero(),
                    count: 0,
                    solution: None,
                    error: Some(err.clone().into()),
                    tree: None,
                }
            }
            SolverState::Ready(engine) => {
                let result = engine.solve(options);
                match result.error {
                    None => handler.on_success(&result),
                    Some(_) => handler.on_fail(&result),
                }
                result
            }
        }
    }

    /// Count-only solve with no bound.
    pub fn count(&mut self) -> SolveResult {
        self.solve(&SolveOptions::default().count_only())
    }

    /// A copy of the parsed, price-sorted items. Empty when malformed.
    pub fn items(&self) -> Vec<Item> {
        match &self.state {
            SolverState::Ready(engine) => engine.menu.items.clone(),
            SolverState::Malformed(_) => Vec::new(),
        }
    }

    /// The parsed goal, or `None` when malformed.
    pub fn goal(&self) -> Option<Money> {
        match &self.state {
            SolverState::Ready(engine) => Some(engine.menu.goal),
            SolverState::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self.state, SolverState::Malformed(_))
    }

    pub fn parse_error(&self) -> Option<&ParseError> {
        match &self.state {
            SolverState::Malformed(err) => Some(err),
            SolverState::Ready(_) => None,
        }
    }

    /// Size of the partition tree, once the first solve has built it.
    pub fn tree_stats(&self) -> Option<TreeStats> {
        match &self.state {
            SolverState::Ready(engine) => engine.tree.as_ref().map(PartitionTree::stats),
            SolverState::Malformed(_) => None,
        }
    }

    pub fn cache_stats(&self) -> CacheStats {
        match &self.state {
            SolverState::Ready(engine) => CacheStats {
                tree_built: engine.tree.is_some(),
                count_entries: engine.counts.len(),
                count_hits: engine.counts.hits(),
                solution_entries: engine.solutions.len(),
                solution_hits: engine.solutions.hits(),
            },
            SolverState::Malformed(_) => CacheStats::default(),
        }
    }
}

impl Engine {
    fn solve(&mut self, options: &SolveOptions) -> SolveResult {
        let goal = self.menu.goal;
        let menu = &self.menu;
        let tree = self.tree.get_or_insert_with(|| PartitionTree::for_menu(menu));

        let count = *TreeReducer::new(tree, &menu.items, Counting).reduce(goal, &mut self.counts);

        let mut result = SolveResult {
            items: menu.items.clone(),
            goal,
            count,
            solution: None,
            error: None,
            tree: None,
        };

        if count == 0 {
            debug!(goal = %goal, "No solution");
            result.error = Some(SolveError::NoSolution { goal });
            return result;
        }
        if let Some(max) = options.max {
            if count > max {
                debug!(goal = %goal, count, max, "Too many solutions");
                result.error = Some(SolveError::TooManySolutions { count, max });
                return result;
            }
        }

        if !options.count_only {
            let subsets =
                TreeReducer::new(tree, &menu.items, Enumeration).reduce(goal, &mut self.solutions);
            result.solution = Some(subsets.iter().map(|s| menu.materialize(s)).collect());
            if options.include_tree {
                result.tree = Some(tree.snapshot(menu));
            }
        }

        debug!(goal = %goal, count, count_only = options.count_only, "Solved");
        result
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;

    const MENU: &str = "10\ncarrots,$1\nfries,$2\nfruit,$3\nsandwitch,$4\njuice,$5\nsteak,$6\nchicken,$7\ncoffee,$8\nice cream,$9\nchips,$10";

    #[derive(Default)]
    struct Recorder {
        success: usize,
        fail: usize,
        malformed: usize,
    }

    impl SolveHandler for Recorder {
        fn on_success(&mut self, _result: &SolveResult) {
            self.success += 1;
        }

        fn on_fail(&mut self, _result: &SolveResult) {
            self.fail += 1;
        }

        fn on_malformed(&mut self, _error: &ParseError) {
            self.malformed += 1;
        }
    }

    #[test]
    fn test_accessors() {
        let solver = MenuSolver::new(MENU);
        assert_eq!(solver.goal(), Some(Money::from_cents(1000)));
        assert_eq!(solver.items().len(), 10);
        assert!(!solver.is_malformed());
        assert!(solver.tree_stats().is_none());
    }

    #[test]
    fn test_items_is_a_copy() {
        let solver = MenuSolver::new(MENU);
        let mut items = solver.items();
        items.clear();
        assert_eq!(solver.items().len(), 10);
    }

    #[test]
    fn test_malformed_short_circuits() {
        let mut solver = MenuSolver::new("carrots,$1\nfries,$2");
        let mut recorder = Recorder::default();
        let result = solver.solve_with(&SolveOptions::default(), &mut recorder);

        assert_eq!(recorder.malformed, 1);
        assert_eq!(recorder.fail + recorder.success, 0);
        assert_eq!(result.outcome(), Outcome::Malformed);
        assert_eq!(result.count, 0);
        assert!(result.solution.is_none());
        assert!(solver.goal().is_none());
        assert!(matches!(solver.parse_error(), Some(ParseError::InvalidGoal { .. })));
        assert!(!solver.cache_stats().tree_built);
    }

    #[test]
    fn test_max_policy() {
        let mut solver = MenuSolver::new(MENU);
        let mut recorder = Recorder::default();

        let result = solver.solve_with(&SolveOptions::default().with_max(5), &mut recorder);
        assert_eq!(recorder.fail, 1);
        assert_eq!(result.count, 10);
        assert!(result.solution.is_none());
        assert_eq!(
            result.error,
            Some(SolveError::TooManySolutions { count: 10, max: 5 })
        );

        let result = solver.solve_with(&SolveOptions::default().with_max(10), &mut recorder);
        assert_eq!(recorder.success, 1);
        assert_eq!(result.solution.map(|s| s.len()), Some(10));
    }

    #[test]
    fn test_count_only_skips_enumeration() {
        let mut solver = MenuSolver::new(MENU);
        let result = solver.count();
        assert_eq!(result.count, 10);
        assert!(result.solution.is_none());
        assert!(result.is_success());
        assert_eq!(solver.cache_stats().solution_entries, 0);
    }

    #[test]
    fn test_repeat_solve_uses_caches() {
        let mut solver = MenuSolver::new(MENU);
        let first = solver.solve(&SolveOptions::default());
        let stats = solver.cache_stats();
        let tree = solver.tree_stats();

        let second = solver.solve(&SolveOptions::default());
        let after = solver.cache_stats();

        assert_eq!(first, second);
        assert_eq!(solver.tree_stats(), tree);
        assert_eq!(after.count_entries, stats.count_entries);
        assert_eq!(after.solution_entries, stats.solution_entries);
        assert_eq!(after.count_hits, stats.count_hits + 1);
        assert_eq!(after.solution_hits, stats.solution_hits + 1);
    }

    #[test]
    fn test_include_tree() {
        let mut solver = MenuSolver::new(MENU);
        let result = solver.solve(&SolveOptions::default().with_tree());
        let tree = result.tree.unwrap();
        assert_eq!(tree.goal, Money::from_cents(1000));
        assert_eq!(tree.buckets.len(), solver.tree_stats().unwrap().buckets);

        let result = solver.solve(&SolveOptions::default().with_tree().count_only());
        assert!(result.tree.is_none());
    }
}

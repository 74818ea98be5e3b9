//! # Shared Solver
//!
//! A [`MenuSolver`] that can be handed to several threads.
//!
//! ## Thread Safety
//! The solver is wrapped in `Arc<Mutex<T>>` because:
//! 1. `solve` mutates the tree slot and both memo caches
//! 2. Two concurrent first solves must not both build the tree
//! 3. Solves are CPU-bound and short once cached, so one lock is enough
//!
//! A RwLock would add complexity with no benefit: almost every call writes.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::money::Money;
use crate::solver::{CacheStats, MenuSolver, SolveHandler};
use crate::types::{Item, SolveOptions, SolveResult};

/// Cloneable handle to one solver. Clones share the tree and caches.
#[derive(Debug, Clone)]
pub struct SharedSolver {
    solver: Arc<Mutex<MenuSolver>>,
}

impl SharedSolver {
    pub fn new(text: &str) -> Self {
        SharedSolver::from(MenuSolver::new(text))
    }

    /// Executes a function with exclusive access to the solver.
    ///
    /// ## Usage
    /// ```rust
    /// use menu_core::{SharedSolver, SAMPLE_MENU};
    ///
    /// let shared = SharedSolver::new(SAMPLE_MENU);
    /// let built = shared.with_solver(|solver| solver.tree_stats().is_some());
    /// assert!(!built);
    /// ```
    pub fn with_solver<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut MenuSolver) -> R,
    {
        let mut solver = self.lock();
        f(&mut solver)
    }

    pub fn solve(&self, options: &SolveOptions) -> SolveResult {
        self.lock().solve(options)
    }

    pub fn solve_with<H: SolveHandler + ?Sized>(
        &self,
        options: &SolveOptions,
        handler: &mut H,
    ) -> SolveResult {
        self.lock().solve_with(options, handler)
    }

    pub fn count(&self) -> SolveResult {
        self.lock().count()
    }

    pub fn items(&self) -> Vec<Item> {
        self.lock().items()
    }

    pub fn goal(&self) -> Option<Money> {
        self.lock().goal()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.lock().cache_stats()
    }

    // Caches only ever receive finished values, so a poisoned lock still
    // guards a consistent solver.
    fn lock(&self) -> MutexGuard<'_, MenuSolver> {
        self.solver.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<MenuSolver> for SharedSolver {
    fn from(solver: MenuSolver) -> Self {
        SharedSolver {
            solver: Arc::new(Mutex::new(solver)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

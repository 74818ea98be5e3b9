//! # menu-core: Subset-Sum Engine for Menu Knapsack
//!
//! Given a target price and a priced menu, finds every combination of
//! distinct items whose prices add up exactly to the target, or just how
//! many there are.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Menu Knapsack Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Front ends (menu-cli, visualisation page)             │   │
//! │  │      supply raw menu text ──► render SolveResult                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ menu-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐   │   │
//! │  │   │  parser  │──►│   tree   │──►│ reducer  │──►│  solver  │   │   │
//! │  │   │  text →  │   │ sum →    │   │ count /  │   │ policy + │   │   │
//! │  │   │  Menu    │   │ edges    │   │ enumerate│   │ caches   │   │   │
//! │  │   └──────────┘   └──────────┘   └──────────┘   └──────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer-cents Money type and amount parsing
//! - [`types`] - Item, Menu, SolveOptions, SolveResult
//! - [`error`] - Parse and solve error types
//! - [`parser`] - Menu text → Menu
//! - [`tree`] - Partition tree (compressed powerset)
//! - [`reducer`] - Memoized tree reductions (count, enumerate)
//! - [`solver`] - MenuSolver facade
//! - [`shared`] - Mutex-guarded solver for concurrent callers
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: prices are cents (i64), parsed digit by digit
//! 2. **Build Once**: the tree is built on the first solve and never changes
//! 3. **Memoize Everything**: repeated solves are answered from cache
//! 4. **Failures Are Data**: no panics, no thrown errors; see [`SolveResult::error`]
//!
//! ## Example Usage
//!
//! ```rust
//! use menu_core::{MenuSolver, SolveOptions};
//!
//! let mut solver = MenuSolver::new("$4\nfries,$1\nsoda,$3\nsalad,$4\n");
//! let result = solver.solve(&SolveOptions::default());
//!
//! assert_eq!(result.count, 2); // {fries, soda} and {salad}
//! let solution = result.solution.unwrap();
//! assert!(solution.iter().any(|s| s.len() == 2));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod parser;
pub mod reducer;
pub mod shared;
pub mod solver;
pub mod tree;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ParseError, SolveError};
pub use money::Money;
pub use shared::SharedSolver;
pub use solver::{CacheStats, MenuSolver, SolveHandler};
pub use tree::{PartitionTree, TreeSnapshot, TreeStats};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The demo menu: nine dishes from $1 to $9 and a $10.00 goal.
///
/// Front ends show this before the user supplies a menu of their own.
pub const SAMPLE_MENU: &str = "$10.00\ncarrots,$1\nfries,$2\nfruit,$3\nsandwitch,$4\njuice,$5\nsteak,$6\nchicken,$7\ncoffee,$8\nice cream,$9\n";

/// Largest number of combinations the demo front end would draw.
///
/// ## Why a limit?
/// Enumeration output grows with the count; beyond a few hundred subsets the
/// result is unreadable. Library callers pass their own `max` (or none).
pub const DEFAULT_MAX_SOLUTIONS: u64 = 500;

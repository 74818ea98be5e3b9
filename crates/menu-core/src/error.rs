//! # Error Types
//!
//! Domain-specific error types for menu-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  menu-core errors (this file)                                          │
//! │  ├── ParseError  - Menu text could not become a goal + item list       │
//! │  └── SolveError  - Why a solve did not deliver a solution              │
//! │                                                                         │
//! │  menu-cli errors (app crate)                                           │
//! │  └── CliError    - I/O, config, rendering                              │
//! │                                                                         │
//! │  Flow: ParseError → SolveError::Malformed → SolveResult.error          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Failures are returned as data, never panics
//! 3. Only `ParseError` is fatal for an engine; `SolveError::NoSolution`
//!    and `SolveError::TooManySolutions` leave the engine usable

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Parse Error
// =============================================================================

/// Menu text parsing errors.
///
/// A solver built from text that fails to parse stays in the malformed state
/// for its whole lifetime. Callers must build a new solver from corrected text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum ParseError {
    /// The first line is missing or is not an amount.
    ///
    /// ## When This Occurs
    /// ```text
    /// carrots,$1      ← first line must be the goal, e.g. "$10.00"
    /// fries,$2
    ///      │
    ///      ▼
    /// InvalidGoal { line: "carrots,$1" }
    /// ```
    #[error("Goal line is not a valid amount: '{line}'")]
    InvalidGoal { line: String },

    /// No item line survived filtering.
    #[error("Menu has no valid items")]
    Empty,

    /// A standalone amount could not be parsed (`Money::from_str`).
    #[error("Invalid amount: '{text}'")]
    InvalidAmount { text: String },
}

// =============================================================================
// Solve Error
// =============================================================================

/// Reasons a solve call did not produce a solution.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum SolveError {
    /// The engine was built from unparseable text.
    #[error("Malformed menu: {reason}")]
    Malformed { reason: ParseError },

    /// No subset of items sums to the goal.
    #[error("No combination of items adds up to {goal}")]
    NoSolution { goal: Money },

    /// More subsets than the caller is willing to receive.
    #[error("{count} combinations found, more than the maximum of {max}")]
    TooManySolutions { count: u64, max: u64 },
}

impl From<ParseError> for SolveError {
    fn from(err: ParseError) -> Self {
        SolveError::Malformed { reason: err }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

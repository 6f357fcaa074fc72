//! Payoff computation for options strategies.
//!
//! The pipeline is pure and stateless:
//! 1. Derive the underlying-price range covering every leg (range)
//! 2. Sample the range at a fixed 0.01 step (grid)
//! 3. Evaluate each leg's intrinsic payoff over the grid (engine)
//! 4. Sum elementwise into the aggregate PNL curve (engine)
//!
//! All prices and PNL values are `rust_decimal::Decimal`, so the grid
//! step and the payoff arithmetic are exact.

pub mod engine;
pub mod grid;
pub mod range;

pub use engine::{aggregate, break_even, compute_strategy_pnl, payoff_series, StrategyPnl};
pub use grid::{grid_len, price_grid};
pub use range::{derive_range, PriceRange};

use thiserror::Error;

/// Errors raised by the payoff pipeline.
///
/// All are raised synchronously at the point of detection and never
/// retried: the computation is deterministic, so a retry cannot change
/// the outcome.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Empty leg list, non-positive strike, or malformed numeric field.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unrecognized option-type or direction tag.
    #[error("unrecognized leg tag: {0}")]
    InvalidLegType(String),

    /// Grid and series lengths disagree. Indicates a range/grid
    /// inconsistency, a programming defect rather than a user error.
    #[error("series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

//! Per-leg payoff evaluation and strategy aggregation.
//!
//! Payoffs are intrinsic values at expiration with the premium netted
//! in. Long legs are floored at `-premium` (max loss is the premium
//! paid); short legs are capped at `+premium` (max gain is the premium
//! received).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::strategy::{Direction, OptionLeg, OptionType};

use super::grid::price_grid;
use super::range::{derive_range, PriceRange};
use super::EngineError;

/// Evaluate one leg's payoff at every grid price.
///
/// | direction | type | payoff |
/// |-----------|------|--------|
/// | Long  | Call | `max(-premium, price - strike - premium)` |
/// | Long  | Put  | `max(-premium, strike - price - premium)` |
/// | Short | Call | `min(premium, strike - price + premium)`  |
/// | Short | Put  | `min(premium, price - strike + premium)`  |
pub fn payoff_series(leg: &OptionLeg, grid: &[Decimal]) -> Vec<Decimal> {
    let premium = leg.premium();
    let strike = leg.strike_price;

    grid.iter()
        .map(|&price| match (leg.direction, leg.option_type) {
            (Direction::Long, OptionType::Call) => (price - strike - premium).max(-premium),
            (Direction::Long, OptionType::Put) => (strike - price - premium).max(-premium),
            (Direction::Short, OptionType::Call) => (strike - price + premium).min(premium),
            (Direction::Short, OptionType::Put) => (price - strike + premium).min(premium),
        })
        .collect()
}

/// Elementwise sum of per-leg payoff series.
///
/// Every series must share the same length (the grid length); a
/// mismatch is an internal invariant violation.
pub fn aggregate(series: &[Vec<Decimal>]) -> Result<Vec<Decimal>, EngineError> {
    let Some(first) = series.first() else {
        return Ok(Vec::new());
    };
    let expected = first.len();

    let mut total = vec![Decimal::ZERO; expected];
    for payoffs in series {
        if payoffs.len() != expected {
            return Err(EngineError::LengthMismatch {
                expected,
                actual: payoffs.len(),
            });
        }
        for (acc, value) in total.iter_mut().zip(payoffs) {
            *acc += *value;
        }
    }
    Ok(total)
}

/// Zero-valued reference series for the break-even line.
pub fn break_even(len: usize) -> Vec<Decimal> {
    vec![Decimal::ZERO; len]
}

/// Complete PNL profile for a strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyPnl {
    /// Derived underlying-price bounds.
    pub range: PriceRange,
    /// Sampled underlying prices (shared axis for every series).
    pub prices: Vec<Decimal>,
    /// One payoff series per leg, in input order.
    pub leg_payoffs: Vec<Vec<Decimal>>,
    /// Elementwise sum of all leg payoffs.
    pub aggregate: Vec<Decimal>,
    /// Zero reference series, same length as the grid.
    pub break_even: Vec<Decimal>,
}

/// Run the full pipeline: validate, derive range, sample the grid,
/// evaluate each leg, and aggregate.
///
/// Pure and referentially transparent: identical legs produce
/// identical output.
pub fn compute_strategy_pnl(legs: &[OptionLeg]) -> Result<StrategyPnl, EngineError> {
    let range = derive_range(legs)?;
    let prices = price_grid(&range);

    let leg_payoffs: Vec<Vec<Decimal>> = legs
        .iter()
        .map(|leg| payoff_series(leg, &prices))
        .collect();

    let total = aggregate(&leg_payoffs)?;
    if total.len() != prices.len() {
        return Err(EngineError::LengthMismatch {
            expected: prices.len(),
            actual: total.len(),
        });
    }

    Ok(StrategyPnl {
        range,
        break_even: break_even(prices.len()),
        prices,
        leg_payoffs,
        aggregate: total,
    })
}

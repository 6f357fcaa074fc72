//! Underlying-price grid generation.
//!
//! Samples the derived range at a fixed 0.01 step. The first point sits
//! one step above `min` and the last lands exactly on `max`, so the
//! grid length is `(max - min) * 100`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::range::PriceRange;

/// Grid points per unit of underlying price (step = 0.01).
pub const POINTS_PER_UNIT: Decimal = dec!(100);

/// Number of grid points for a range.
///
/// `(max - min) * 100`, rounded to the nearest integer (ties-to-even,
/// `Decimal::round`). With two-decimal bounds the product is already an
/// exact integer and the rounding rule never engages.
pub fn grid_len(range: &PriceRange) -> usize {
    (range.width() * POINTS_PER_UNIT)
        .round()
        .to_usize()
        .unwrap_or(0)
}

/// Generate the ordered price grid for a range.
///
/// Point `k` (1-indexed) is `min + k/100`, rounded to two decimal
/// places for axis stability. Points are strictly increasing with no
/// duplicates and the sequence is fully deterministic.
pub fn price_grid(range: &PriceRange) -> Vec<Decimal> {
    let len = grid_len(range);
    (1..=len)
        .map(|k| (range.min + Decimal::new(k as i64, 2)).round_dp(2))
        .collect()
}

//! Underlying-price range derivation.
//!
//! The range must make every leg's interesting region visible: the
//! strike itself, plus the premium buffer on the side where the payoff
//! still moves (below the strike for calls, above it for puts). A fixed
//! margin is then added on both ends and the lower bound is floored at
//! zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::strategy::{OptionLeg, OptionType};

use super::EngineError;

/// Margin added beyond the outermost candidate on both ends.
pub const RANGE_MARGIN: Decimal = dec!(10);

/// Inclusive bounds for the underlying-price axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound, never negative.
    pub min: Decimal,
    /// Upper bound, strictly greater than `min` for any valid leg set.
    pub max: Decimal,
}

impl PriceRange {
    pub fn width(&self) -> Decimal {
        self.max - self.min
    }
}

/// Derive the price range covering every leg's strike and premium buffer.
///
/// Runs an explicit fold seeded with `Decimal::MAX`/`MIN` sentinels. Each
/// leg contributes its own strike to both bounds plus a premium-adjusted
/// candidate on the side where its payoff is unbounded:
/// `strike - premium` below for calls, `strike + premium` above for puts.
///
/// An empty leg list or a leg with a non-positive strike or negative
/// quote is rejected with [`EngineError::InvalidInput`].
pub fn derive_range(legs: &[OptionLeg]) -> Result<PriceRange, EngineError> {
    if legs.is_empty() {
        return Err(EngineError::InvalidInput(
            "at least one leg is required".to_string(),
        ));
    }

    let mut lower = Decimal::MAX;
    let mut upper = Decimal::MIN;

    for leg in legs {
        leg.validate()?;
        let premium = leg.premium();

        let low_candidate = match leg.option_type {
            OptionType::Call => leg.strike_price - premium,
            OptionType::Put => leg.strike_price,
        };
        let high_candidate = match leg.option_type {
            OptionType::Put => leg.strike_price + premium,
            OptionType::Call => leg.strike_price,
        };

        lower = lower.min(leg.strike_price).min(low_candidate);
        upper = upper.max(leg.strike_price).max(high_candidate);
    }

    Ok(PriceRange {
        min: (lower - RANGE_MARGIN).max(Decimal::ZERO),
        max: upper + RANGE_MARGIN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Direction;
    use rust_decimal_macros::dec;

    fn leg(
        strike: Decimal,
        option_type: OptionType,
        bid: Decimal,
        ask: Decimal,
        direction: Direction,
    ) -> OptionLeg {
        OptionLeg {
            strike_price: strike,
            option_type,
            bid,
            ask,
            direction,
            expiration_date: "2025-12-17T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_single_long_call_range() {
        // premium = bid = 10.05; lower candidate 89.95, upper candidate 100
        let legs = vec![leg(
            dec!(100),
            OptionType::Call,
            dec!(10.05),
            dec!(12.04),
            Direction::Long,
        )];
        let range = derive_range(&legs).unwrap();
        assert_eq!(range.min, dec!(79.95));
        assert_eq!(range.max, dec!(110));
    }

    #[test]
    fn test_single_short_put_range() {
        // premium = ask = 18; lower candidate 105, upper candidate 123
        let legs = vec![leg(
            dec!(105),
            OptionType::Put,
            dec!(16),
            dec!(18),
            Direction::Short,
        )];
        let range = derive_range(&legs).unwrap();
        assert_eq!(range.min, dec!(95));
        assert_eq!(range.max, dec!(133));
    }

    #[test]
    fn test_four_leg_sample_range() {
        let legs = vec![
            leg(dec!(100), OptionType::Call, dec!(10.05), dec!(12.04), Direction::Long),
            leg(dec!(102.50), OptionType::Call, dec!(12.10), dec!(14), Direction::Long),
            leg(dec!(103), OptionType::Put, dec!(14), dec!(15.50), Direction::Short),
            leg(dec!(105), OptionType::Put, dec!(16), dec!(18), Direction::Long),
        ];
        let range = derive_range(&legs).unwrap();
        // lower = 100 - 10.05, upper = 105 + 16
        assert_eq!(range.min, dec!(79.95));
        assert_eq!(range.max, dec!(131));
    }

    #[test]
    fn test_lower_bound_floored_at_zero() {
        let legs = vec![leg(
            dec!(5),
            OptionType::Call,
            dec!(2),
            dec!(3),
            Direction::Long,
        )];
        let range = derive_range(&legs).unwrap();
        assert_eq!(range.min, Decimal::ZERO);
        assert_eq!(range.max, dec!(15));
    }

    #[test]
    fn test_range_never_degenerate() {
        // Margin on both ends keeps max > min even for one leg.
        let legs = vec![leg(
            dec!(50),
            OptionType::Put,
            dec!(0),
            dec!(0),
            Direction::Short,
        )];
        let range = derive_range(&legs).unwrap();
        assert!(range.max > range.min);
        assert!(range.min >= Decimal::ZERO);
        assert_eq!(range.width(), dec!(20));
    }

    #[test]
    fn test_empty_legs_rejected() {
        assert!(matches!(
            derive_range(&[]),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_strike_rejected() {
        let legs = vec![leg(
            dec!(0),
            OptionType::Call,
            dec!(1),
            dec!(2),
            Direction::Long,
        )];
        assert!(matches!(
            derive_range(&legs),
            Err(EngineError::InvalidInput(_))
        ));
    }
}

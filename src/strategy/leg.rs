//! Option leg record and premium resolution.
//!
//! The leg carries the quoted bid/ask alongside strike, type, and
//! direction. The premium used in payoff math is resolved from the
//! direction: long legs use the bid, short legs use the ask. That
//! mapping follows the upstream quoting rule and must not be swapped
//! without re-checking golden outputs (see DESIGN.md).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payoff::EngineError;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "C" | "CALL" => Ok(Self::Call),
            "P" | "PUT" => Ok(Self::Put),
            _ => Err(EngineError::InvalidLegType(s.to_string())),
        }
    }
}

// Wire tags parse through FromStr so an unrecognized tag surfaces as
// the InvalidLegType message rather than a generic variant error.
impl<'de> Deserialize<'de> for OptionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// Direction of the leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Buy premium.
    Long,
    /// Sell premium.
    Short,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long" | "buy" => Ok(Self::Long),
            "short" | "sell" => Ok(Self::Short),
            _ => Err(EngineError::InvalidLegType(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// A single option leg of a strategy.
///
/// Wire shape (camelCase): `{"strikePrice": 100, "type": "Call",
/// "bid": 10.05, "ask": 12.04, "direction": "long",
/// "expirationDate": "2025-12-17T00:00:00Z"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionLeg {
    /// Strike price (must be positive).
    pub strike_price: Decimal,

    /// Option type (call or put).
    #[serde(rename = "type")]
    pub option_type: OptionType,

    /// Quoted bid price.
    pub bid: Decimal,

    /// Quoted ask price.
    pub ask: Decimal,

    /// Long or short.
    pub direction: Direction,

    /// Expiration timestamp. Carried for display only; all legs are
    /// evaluated at a single expiration snapshot.
    pub expiration_date: DateTime<Utc>,
}

impl OptionLeg {
    /// Premium fixed at trade inception: bid for long legs, ask for short.
    pub fn premium(&self) -> Decimal {
        match self.direction {
            Direction::Long => self.bid,
            Direction::Short => self.ask,
        }
    }

    /// Check the leg's numeric fields against the input contract.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.strike_price <= Decimal::ZERO {
            return Err(EngineError::InvalidInput(format!(
                "strike price must be positive, got {}",
                self.strike_price
            )));
        }
        if self.bid < Decimal::ZERO || self.ask < Decimal::ZERO {
            return Err(EngineError::InvalidInput(format!(
                "bid and ask must be non-negative, got bid={} ask={}",
                self.bid, self.ask
            )));
        }
        Ok(())
    }
}

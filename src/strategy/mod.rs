//! Option strategy inputs.
//!
//! A strategy is an ordered list of option legs supplied by the host.
//! Legs are immutable input records; everything downstream is derived
//! from them on each computation.

pub mod leg;

pub use leg::{Direction, OptionLeg, OptionType};

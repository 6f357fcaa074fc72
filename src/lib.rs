pub mod chart;
pub mod payoff;
pub mod strategy;

// Re-export commonly used types
pub use chart::{build_chart_data, build_chart_payload, ChartData, ChartOptions, ChartPayload, Dataset};
pub use payoff::{
    compute_strategy_pnl, derive_range, price_grid, EngineError, PriceRange, StrategyPnl,
};
pub use strategy::{Direction, OptionLeg, OptionType};

//! Datasets and labels for the PNL line chart.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::payoff::StrategyPnl;
use crate::strategy::OptionLeg;

/// Display colors assigned to legs by index, wrapping past the end.
pub const PALETTE: [&str; 4] = ["blue", "red", "green", "orange"];

/// Chart title.
pub const CHART_TITLE: &str = "Risk & Reward for Options Strategies";
/// Vertical axis title.
pub const Y_AXIS_TITLE: &str = "Profit/Loss";
/// Horizontal axis title.
pub const X_AXIS_TITLE: &str = "Underlying Price at Expiry";
/// Legend placement.
pub const LEGEND_POSITION: &str = "top";

/// One renderable series.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Legend label.
    pub label: String,
    /// PNL value per grid point.
    pub data: Vec<Decimal>,
    /// Line color; the break-even line carries none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<&'static str>,
    /// Point fill color, same as the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<&'static str>,
    /// Area fill under the line (always off).
    pub fill: bool,
}

/// Everything the rendering collaborator needs to draw the chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    /// Grid prices used as the x-axis labels.
    pub labels: Vec<Decimal>,
    /// One dataset per leg plus the trailing break-even line.
    pub datasets: Vec<Dataset>,
}

/// Static display options passed through to the chart widget.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub title: &'static str,
    pub legend_position: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            title: CHART_TITLE,
            legend_position: LEGEND_POSITION,
            x_axis_title: X_AXIS_TITLE,
            y_axis_title: Y_AXIS_TITLE,
        }
    }
}

/// Complete boundary payload for the rendering collaborator: the
/// datasets plus the static display options.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPayload {
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Legend label for a leg.
///
/// Format: `"<direction> <type>, Strike Price: <strike>, Ask: <ask>,
/// Bid: <bid>"`, with trailing zeros trimmed from the quotes.
fn leg_label(leg: &OptionLeg) -> String {
    format!(
        "{} {}, Strike Price: {}, Ask: {}, Bid: {}",
        leg.direction,
        leg.option_type,
        leg.strike_price.normalize(),
        leg.ask.normalize(),
        leg.bid.normalize(),
    )
}

/// Shape a computed PNL profile into chart datasets.
///
/// Leg order is preserved; colors cycle through [`PALETTE`] by index.
pub fn build_chart_data(legs: &[OptionLeg], pnl: &StrategyPnl) -> ChartData {
    let mut datasets: Vec<Dataset> = legs
        .iter()
        .zip(&pnl.leg_payoffs)
        .enumerate()
        .map(|(index, (leg, payoffs))| {
            let color = PALETTE[index % PALETTE.len()];
            Dataset {
                label: leg_label(leg),
                data: payoffs.clone(),
                border_color: Some(color),
                background_color: Some(color),
                fill: false,
            }
        })
        .collect();

    datasets.push(Dataset {
        label: "Break Even".to_string(),
        data: pnl.break_even.clone(),
        border_color: None,
        background_color: None,
        fill: false,
    });

    ChartData {
        labels: pnl.prices.clone(),
        datasets,
    }
}

/// Shape a computed PNL profile into the full boundary payload.
pub fn build_chart_payload(legs: &[OptionLeg], pnl: &StrategyPnl) -> ChartPayload {
    ChartPayload {
        data: build_chart_data(legs, pnl),
        options: ChartOptions::default(),
    }
}

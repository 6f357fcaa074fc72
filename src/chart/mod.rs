//! Chart data contract for the rendering collaborator.
//!
//! The engine does not render anything. This module shapes the computed
//! PNL profile into the structure a line-chart widget consumes: axis
//! labels, one colored dataset per leg, and a zero break-even line.
//! It also owns the one-time renderer registration hook.

pub mod dataset;

pub use dataset::{
    build_chart_data, build_chart_payload, ChartData, ChartOptions, ChartPayload, Dataset, PALETTE,
};

use std::sync::Once;

use tracing::debug;

static REGISTER: Once = Once::new();

/// One-time setup for the rendering collaborator.
///
/// Chart backends typically require their scales and line elements to
/// be registered globally before the first render. Idempotent: only
/// the first call performs the setup.
pub fn ensure_registered() {
    REGISTER.call_once(|| {
        debug!("chart renderer components registered");
    });
}

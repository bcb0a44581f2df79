pub mod chart;
pub mod rate;

pub use chart::{ab_test_chart, BarSeries, ChartSpec};
pub use rate::{conversion_rate, Group};

use thiserror::Error;

/// Errors from rate and chart computations
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

use serde::{Deserialize, Serialize};

use super::rate::Group;
use super::AnalyticsResult;

pub const CHART_TITLE: &str = "A/B Test Conversion Rates Comparison";
pub const CHART_CATEGORY: &str = "Conversion Rate (%)";

const CONTROL_COLOR: &str = "lightblue";
const TREATMENT_COLOR: &str = "lightcoral";

/// Renderer-agnostic grouped-bar chart description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub barmode: String,
}

/// One bar series within a grouped chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: String,
}

/// Build the grouped-bar comparison of control vs treatment conversion
/// rates. Pure transform; rendering is the caller's concern.
pub fn ab_test_chart(control: &Group, treatment: &Group) -> AnalyticsResult<ChartSpec> {
    let control_rate = control.rate()?;
    let treatment_rate = treatment.rate()?;

    Ok(ChartSpec {
        title: CHART_TITLE.to_string(),
        categories: vec![CHART_CATEGORY.to_string()],
        series: vec![
            BarSeries {
                name: "Control".to_string(),
                values: vec![control_rate],
                color: CONTROL_COLOR.to_string(),
            },
            BarSeries {
                name: "Treatment".to_string(),
                values: vec![treatment_rate],
                color: TREATMENT_COLOR.to_string(),
            },
        ],
        barmode: "group".to_string(),
    })
}

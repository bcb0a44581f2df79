//! Prompt composition for the remote analysis model. The client itself
//! never builds prompts; callers pass complete instruction strings.

use crate::analytics::{AnalyticsResult, Group};

/// Canned research topics offered by the UI layer
pub const RESEARCH_EXAMPLES: &[(&str, &str)] = &[
    (
        "Mobile App Retention by Industry",
        "What are mobile app retention rates by industry in 2024? Include fintech, \
         gaming, and e-commerce benchmarks with day 1, day 7, and day 30 retention rates.",
    ),
    (
        "E-commerce Conversion Benchmarks",
        "E-commerce conversion rate benchmarks by device type and industry for 2024. \
         Include average order values and cart abandonment rates.",
    ),
    (
        "SaaS Pricing & Conversion Trends",
        "Current SaaS pricing trends for B2B software in 2024. Include average price \
         per seat, conversion rates by company size, and freemium vs paid model performance.",
    ),
    (
        "Email Marketing Benchmarks",
        "Email marketing benchmarks 2024: open rates, click rates, and conversion rates \
         by industry. Include data for B2B vs B2C and mobile vs desktop performance.",
    ),
];

/// Compose the A/B-test analysis prompt, embedding both cohorts and their
/// rates. Statistical work is requested from the model, never done locally.
pub fn ab_test_prompt(control: &Group, treatment: &Group) -> AnalyticsResult<String> {
    let control_rate = control.rate()?;
    let treatment_rate = treatment.rate()?;

    Ok(format!(
        "Analyze this A/B test with the following data:\n\
         \n\
         Control Group:\n\
         - Users: {}\n\
         - Conversions: {}\n\
         - Conversion Rate: {:.2}%\n\
         \n\
         Treatment Group:\n\
         - Users: {}\n\
         - Conversions: {}\n\
         - Conversion Rate: {:.2}%\n\
         \n\
         Please provide:\n\
         1. Statistical significance test with p-value\n\
         2. Confidence intervals for both groups\n\
         3. Practical significance and business impact\n\
         4. Recommendations based on results",
        control.users,
        control.conversions,
        control_rate,
        treatment.users,
        treatment.conversions,
        treatment_rate,
    ))
}

/// Compose the market research prompt for a free-text topic
pub fn research_prompt(topic: &str) -> String {
    format!(
        "Research this topic thoroughly and provide current, accurate information: {}\n\
         \n\
         Please include:\n\
         1. Current statistics and benchmarks\n\
         2. Industry trends and insights\n\
         3. Source citations for all data\n\
         4. Actionable recommendations\n\
         5. Relevant time periods and context",
        topic.trim()
    )
}

use serde::{Deserialize, Serialize};

use super::{AnalyticsError, AnalyticsResult};

/// One cohort of an A/B test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Total users in the cohort
    pub users: u64,
    /// Users that converted; must not exceed `users`
    pub conversions: u64,
}

impl Group {
    pub fn new(users: u64, conversions: u64) -> AnalyticsResult<Self> {
        let group = Self { users, conversions };
        group.rate()?;
        Ok(group)
    }

    /// Conversion rate of this cohort as a percentage
    pub fn rate(&self) -> AnalyticsResult<f64> {
        conversion_rate(self.conversions, self.users)
    }
}

/// Calculate conversion rate as a percentage.
///
/// A cohort with zero users has a rate of 0.0 by policy; this is a valid
/// empty cohort, not an error. Conversions exceeding users are rejected.
pub fn conversion_rate(conversions: u64, users: u64) -> AnalyticsResult<f64> {
    if conversions > users {
        return Err(AnalyticsError::InvalidInput(format!(
            "conversions ({}) cannot exceed users ({})",
            conversions, users
        )));
    }

    if users == 0 {
        return Ok(0.0);
    }

    Ok((conversions as f64 / users as f64) * 100.0)
}

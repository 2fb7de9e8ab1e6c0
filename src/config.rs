use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};

/// how a February 29 anniversary lands in a non-leap year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapDayPolicy {
    /// Feb 29 -> Feb 28
    #[default]
    ClampToFeb28,
    /// Feb 29 -> Mar 1
    RollToMar1,
}

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// anniversary rule used when stepping a compound calculation year by year
    pub leap_day_policy: LeapDayPolicy,
    /// year length used to count complete years before compounding
    pub segment_year_days: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            leap_day_policy: LeapDayPolicy::ClampToFeb28,
            segment_year_days: 365,
        }
    }
}

impl CalculatorConfig {
    pub fn new(leap_day_policy: LeapDayPolicy) -> Self {
        Self {
            leap_day_policy,
            ..Self::default()
        }
    }

    /// load from json, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig =
            serde_json::from_str(json).map_err(|e| CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.segment_year_days == 0 {
            return Err(CalculatorError::InvalidConfiguration {
                message: "segment_year_days must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

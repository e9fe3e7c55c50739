//! Timeframe selection model

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting window a dashboard shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Timeframe {
    /// All timeframes in display order
    pub const ALL: [Timeframe; 3] = [Timeframe::Daily, Timeframe::Weekly, Timeframe::Monthly];

    /// Lowercase key, as used in data files
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Daily => "daily",
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
        }
    }

    /// Capitalized button label
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Daily => "Daily",
            Timeframe::Weekly => "Weekly",
            Timeframe::Monthly => "Monthly",
        }
    }

    /// Human-readable name of the comparison period
    pub fn previous_label(&self) -> &'static str {
        match self {
            Timeframe::Daily => "Last Day",
            Timeframe::Weekly => "Last Week",
            Timeframe::Monthly => "Last Month",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Timeframe::Daily => 0,
            Timeframe::Weekly => 1,
            Timeframe::Monthly => 2,
        }
    }

    /// Next timeframe, wrapping from monthly back to daily
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous timeframe, wrapping from daily to monthly
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Timeframe::Daily),
            "weekly" => Ok(Timeframe::Weekly),
            "monthly" => Ok(Timeframe::Monthly),
            _ => Err(CoreError::InvalidTimeframe {
                value: s.to_string(),
            }),
        }
    }
}

//! Value Objects
//!
//! Small closed vocabularies shared by the driver and fleet screens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Drowsiness classification of a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrowsinessStatus {
    Safe,
    Warning,
    Critical,
}

impl DrowsinessStatus {
    pub const ALL: [DrowsinessStatus; 3] = [
        DrowsinessStatus::Safe,
        DrowsinessStatus::Warning,
        DrowsinessStatus::Critical,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            DrowsinessStatus::Safe => "safe",
            DrowsinessStatus::Warning => "warning",
            DrowsinessStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for DrowsinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roster status filter: `all` or one drowsiness status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(DrowsinessStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: DrowsinessStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        DrowsinessStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .map(StatusFilter::Only)
            .ok_or_else(|| DashboardError::InvalidQuery(format!("status={s}")))
    }
}

/// Analytics time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1d")]
    Day,
    #[default]
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

impl TimeRange {
    pub const fn code(&self) -> &'static str {
        match self {
            TimeRange::Day => "1d",
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
        }
    }
}

impl FromStr for TimeRange {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(TimeRange::Day),
            "7d" => Ok(TimeRange::Week),
            "30d" => Ok(TimeRange::Month),
            "90d" => Ok(TimeRange::Quarter),
            _ => Err(DashboardError::InvalidQuery(format!("range={s}"))),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Severity of a notification or alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Critical,
}

/// Direction of a headline stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

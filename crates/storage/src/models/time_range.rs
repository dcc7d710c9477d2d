use chrono::{DateTime, Months, TimeZone};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::StorageError;

/// Look-back window for progress charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum TimeRange {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    #[default]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "All")]
    AllTime,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::AllTime => "All",
        }
    }

    pub fn all() -> &'static [TimeRange] {
        &[
            Self::OneMonth,
            Self::ThreeMonths,
            Self::SixMonths,
            Self::OneYear,
            Self::AllTime,
        ]
    }

    /// Calendar months to step back from "now". Years are twelve months; all-time
    /// reaches back a century.
    pub fn months(&self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
            Self::AllTime => 12 * 100,
        }
    }

    /// Earliest timestamp included in the window ending at `now`.
    ///
    /// Month subtraction clamps to the last day of shorter months, so the window
    /// ending on May 31st with `OneMonth` starts on April 30th.
    pub fn cutoff<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateTime<Tz> {
        now.clone()
            .checked_sub_months(Months::new(self.months()))
            .unwrap_or_else(|| {
                DateTime::<chrono::Utc>::MIN_UTC.with_timezone(&now.timezone())
            })
    }

    fn parse_str(s: &str) -> Result<Self, StorageError> {
        match s.trim().to_uppercase().as_str() {
            "1M" => Ok(Self::OneMonth),
            "3M" => Ok(Self::ThreeMonths),
            "6M" => Ok(Self::SixMonths),
            "1Y" => Ok(Self::OneYear),
            "ALL" => Ok(Self::AllTime),
            _ => Err(StorageError::InvalidValue(format!(
                "Unknown time range: '{}'. Available: {}",
                s,
                Self::all()
                    .iter()
                    .map(|r| r.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

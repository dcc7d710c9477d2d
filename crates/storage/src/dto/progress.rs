use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::TimeRange;

/// One calendar day of a progress chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyProgress {
    pub day: NaiveDate,
    pub max_weight: Decimal,
    /// Total volume of the day, truncated to a whole number
    pub volume: i64,
}

/// Bests and totals over a progress window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProgressRecords {
    pub max_weight: Decimal,
    pub max_reps: u32,
    /// Highest single-day volume
    pub max_volume: i64,
    pub total_volume: Decimal,
    pub total_sets: usize,
    /// Best Epley estimate among the window's sets
    pub estimated_one_rep_max: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProgressReport {
    pub exercise_id: Uuid,
    pub range: TimeRange,
    pub points: Vec<DailyProgress>,
    pub records: ProgressRecords,
}

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

use crate::dto::progress::{DailyProgress, ProgressRecords, ProgressReport};
use crate::models::{TimeRange, WorkoutSet};
use crate::services::one_rep_max::estimate_one_rep_max;

/// Sets for `exercise_id` logged at or after the window's cutoff, oldest first.
pub fn window_filter<'a, Tz: TimeZone>(
    sets: impl IntoIterator<Item = &'a WorkoutSet>,
    exercise_id: Uuid,
    range: TimeRange,
    now: &DateTime<Tz>,
) -> Vec<&'a WorkoutSet> {
    let cutoff = range.cutoff(now).with_timezone(&Utc);

    let mut filtered: Vec<&WorkoutSet> = sets
        .into_iter()
        .filter(|set| set.exercise_id == Some(exercise_id) && set.timestamp >= cutoff)
        .collect();
    filtered.sort_by_key(|set| set.timestamp);
    filtered
}

/// Groups sets by calendar day in `tz`, ordered by day.
pub fn daily_buckets<'a, Tz: TimeZone>(
    sets: impl IntoIterator<Item = &'a WorkoutSet>,
    tz: &Tz,
) -> Vec<DailyProgress> {
    let mut days: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();

    for set in sets {
        let day = set.timestamp.with_timezone(tz).date_naive();
        let (max_weight, volume) = days.entry(day).or_insert((set.weight, Decimal::ZERO));
        if set.weight > *max_weight {
            *max_weight = set.weight;
        }
        *volume += set.volume();
    }

    days.into_iter()
        .map(|(day, (max_weight, volume))| DailyProgress {
            day,
            max_weight,
            volume: truncate_volume(volume),
        })
        .collect()
}

/// Same as [`daily_buckets`] using the system time zone.
pub fn daily_buckets_local<'a>(sets: impl IntoIterator<Item = &'a WorkoutSet>) -> Vec<DailyProgress> {
    daily_buckets(sets, &Local)
}

fn truncate_volume(volume: Decimal) -> i64 {
    volume.trunc().to_i64().unwrap_or(i64::MAX)
}

/// Bests and totals of the filtered sets. `max_volume` is the best single day.
pub fn personal_records(sets: &[&WorkoutSet], buckets: &[DailyProgress]) -> ProgressRecords {
    ProgressRecords {
        max_weight: sets
            .iter()
            .map(|set| set.weight)
            .max()
            .unwrap_or(Decimal::ZERO),
        max_reps: sets.iter().map(|set| set.reps).max().unwrap_or(0),
        max_volume: buckets.iter().map(|b| b.volume).max().unwrap_or(0),
        total_volume: sets.iter().map(|set| set.volume()).sum(),
        total_sets: sets.len(),
        estimated_one_rep_max: sets
            .iter()
            .map(|set| estimate_one_rep_max(set.weight, set.reps))
            .max()
            .unwrap_or(Decimal::ZERO),
    }
}

/// Window filter, daily series and records for one exercise. Days are cut in the
/// time zone of `now`.
pub fn build_report<'a, Tz: TimeZone>(
    sets: impl IntoIterator<Item = &'a WorkoutSet>,
    exercise_id: Uuid,
    range: TimeRange,
    now: &DateTime<Tz>,
) -> ProgressReport {
    let filtered = window_filter(sets, exercise_id, range, now);
    let points = daily_buckets(filtered.iter().copied(), &now.timezone());
    let records = personal_records(&filtered, &points);

    ProgressReport {
        exercise_id,
        range,
        points,
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn set(exercise: Uuid, reps: u32, weight: i64, when: DateTime<Utc>) -> WorkoutSet {
        WorkoutSet::new(reps, Decimal::from(weight), true, "")
            .for_exercise(exercise)
            .at(when)
    }

    #[test]
    fn test_window_filter_by_exercise_and_cutoff() {
        let squat = Uuid::new_v4();
        let bench = Uuid::new_v4();
        let now = at(2025, 6, 15, 12);

        let sets = vec![
            set(squat, 5, 200, at(2025, 6, 10, 9)),
            set(squat, 5, 190, at(2025, 5, 20, 9)),
            set(squat, 5, 180, at(2025, 5, 10, 9)),
            set(bench, 5, 150, at(2025, 6, 11, 9)),
            WorkoutSet::new(5, Decimal::from(100), true, "").at(at(2025, 6, 12, 9)),
        ];

        let month = window_filter(&sets, squat, TimeRange::OneMonth, &now);
        let weights: Vec<_> = month.iter().map(|s| s.weight).collect();
        assert_eq!(weights, vec![Decimal::from(190), Decimal::from(200)]);

        let all = window_filter(&sets, squat, TimeRange::AllTime, &now);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].weight, Decimal::from(180));
    }

    #[test]
    fn test_window_includes_cutoff_instant() {
        let squat = Uuid::new_v4();
        let now = at(2025, 6, 15, 12);
        let sets = vec![
            set(squat, 5, 200, at(2025, 5, 15, 12)),
            set(squat, 5, 200, at(2025, 5, 15, 12) - Duration::seconds(1)),
        ];

        assert_eq!(window_filter(&sets, squat, TimeRange::OneMonth, &now).len(), 1);
    }

    #[test]
    fn test_same_day_sets_share_a_bucket() {
        let squat = Uuid::new_v4();
        let sets = vec![
            set(squat, 5, 100, at(2025, 6, 1, 8)),
            set(squat, 3, 110, at(2025, 6, 1, 19)),
        ];

        let buckets = daily_buckets(&sets, &Utc);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].day, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(buckets[0].max_weight, Decimal::from(110));
        assert_eq!(buckets[0].volume, 830);
    }

    #[test]
    fn test_buckets_ordered_by_day() {
        let squat = Uuid::new_v4();
        let sets = vec![
            set(squat, 5, 120, at(2025, 6, 3, 8)),
            set(squat, 5, 100, at(2025, 6, 1, 8)),
            set(squat, 5, 110, at(2025, 6, 2, 8)),
        ];

        let days: Vec<_> = daily_buckets(&sets, &Utc)
            .into_iter()
            .map(|b| b.max_weight)
            .collect();
        assert_eq!(
            days,
            vec![Decimal::from(100), Decimal::from(110), Decimal::from(120)]
        );
    }

    #[test]
    fn test_buckets_follow_time_zone() {
        let squat = Uuid::new_v4();
        // 23:30 UTC is already the next day at UTC+2.
        let sets = vec![
            set(squat, 5, 100, at(2025, 6, 1, 12)),
            set(squat, 5, 100, at(2025, 6, 1, 23) + Duration::minutes(30)),
        ];

        assert_eq!(daily_buckets(&sets, &Utc).len(), 1);

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(daily_buckets(&sets, &plus_two).len(), 2);
    }

    #[test]
    fn test_local_buckets_follow_system_calendar() {
        let squat = Uuid::new_v4();
        let morning = Local
            .with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        let evening = Local
            .with_ymd_and_hms(2025, 6, 1, 18, 0, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        let sets = vec![set(squat, 5, 100, morning), set(squat, 5, 120, evening)];

        let buckets = daily_buckets_local(&sets);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].day, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(buckets[0].max_weight, Decimal::from(120));
        assert_eq!(buckets[0].volume, 1100);
    }

    #[test]
    fn test_bucket_volume_is_truncated() {
        let squat = Uuid::new_v4();
        let sets = vec![
            WorkoutSet::new(3, Decimal::new(1025, 1), true, "")
                .for_exercise(squat)
                .at(at(2025, 6, 1, 8)),
        ];

        // 102.5 × 3 = 307.5
        assert_eq!(daily_buckets(&sets, &Utc)[0].volume, 307);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: Vec<WorkoutSet> = Vec::new();
        let buckets = daily_buckets(&empty, &Utc);
        assert!(buckets.is_empty());
        assert_eq!(personal_records(&[], &buckets), ProgressRecords::default());
    }

    #[test]
    fn test_personal_records() {
        let squat = Uuid::new_v4();
        let sets = vec![
            set(squat, 10, 100, at(2025, 6, 1, 8)),
            set(squat, 8, 110, at(2025, 6, 1, 9)),
            set(squat, 3, 140, at(2025, 6, 4, 9)),
        ];
        let refs: Vec<&WorkoutSet> = sets.iter().collect();
        let buckets = daily_buckets(refs.iter().copied(), &Utc);
        let records = personal_records(&refs, &buckets);

        assert_eq!(records.max_weight, Decimal::from(140));
        assert_eq!(records.max_reps, 10);
        assert_eq!(records.max_volume, 1880);
        assert_eq!(records.total_volume, Decimal::from(1000 + 880 + 420));
        assert_eq!(records.total_sets, 3);
        // 110 × 38 / 30 = 139.33, 140 × 33 / 30 = 154
        assert_eq!(records.estimated_one_rep_max, Decimal::from(154));
    }

    #[test]
    fn test_build_report() {
        let squat = Uuid::new_v4();
        let now = at(2025, 6, 15, 12);
        let sets = vec![
            set(squat, 5, 100, at(2025, 6, 1, 8)),
            set(squat, 5, 110, at(2025, 6, 1, 9)),
            set(squat, 5, 90, at(2024, 1, 1, 9)),
        ];

        let report = build_report(&sets, squat, TimeRange::ThreeMonths, &now);
        assert_eq!(report.range, TimeRange::ThreeMonths);
        assert_eq!(report.points.len(), 1);
        assert_eq!(report.points[0].max_weight, Decimal::from(110));
        assert_eq!(report.records.total_sets, 2);

        let all_time = build_report(&sets, squat, TimeRange::AllTime, &now);
        assert_eq!(all_time.points.len(), 2);
        assert_eq!(all_time.records.total_sets, 3);
    }
}

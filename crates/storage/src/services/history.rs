use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate, TimeZone};
use uuid::Uuid;

use crate::dto::history::{ExerciseSetGroup, HistoryGroup};
use crate::models::{Exercise, WorkoutSession};

/// `"1h 5m"` from one hour up, `"45m"` below.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = total / 60 % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Completed sessions grouped by the calendar month of their date in `tz`,
/// newest month first.
pub fn group_by_month<Tz: TimeZone>(sessions: &[WorkoutSession], tz: &Tz) -> Vec<HistoryGroup> {
    let mut months: BTreeMap<(i32, u32), Vec<&WorkoutSession>> = BTreeMap::new();

    for session in sessions.iter().filter(|s| s.is_completed) {
        let date = session.date.with_timezone(tz);
        months
            .entry((date.year(), date.month()))
            .or_default()
            .push(session);
    }

    months
        .into_iter()
        .rev()
        .map(|((year, month), mut group)| {
            group.sort_by(|a, b| b.date.cmp(&a.date));
            HistoryGroup {
                label: month_label(year, month),
                year,
                month,
                sessions: group.into_iter().cloned().collect(),
            }
        })
        .collect()
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", year, month))
}

/// Session sets grouped per exercise and ordered by exercise name.
///
/// Sets without an exercise, or whose exercise is not in `exercises`, are left out.
pub fn group_sets_by_exercise(
    session: &WorkoutSession,
    exercises: &[Exercise],
) -> Vec<ExerciseSetGroup> {
    let by_id: HashMap<Uuid, &Exercise> = exercises.iter().map(|e| (e.id, e)).collect();
    let mut groups: HashMap<Uuid, ExerciseSetGroup> = HashMap::new();

    for set in &session.sets {
        let Some(exercise) = set.exercise_id.and_then(|id| by_id.get(&id)) else {
            continue;
        };
        groups
            .entry(exercise.id)
            .or_insert_with(|| ExerciseSetGroup {
                exercise: (*exercise).clone(),
                sets: Vec::new(),
            })
            .sets
            .push(set.clone());
    }

    let mut groups: Vec<ExerciseSetGroup> = groups.into_values().collect();
    for group in &mut groups {
        group.sets.sort_by_key(|set| set.timestamp);
    }
    groups.sort_by(|a, b| a.exercise.name.cmp(&b.exercise.name));
    groups
}

/// Distinct names of the exercises used in a session, sorted.
pub fn session_exercise_names(session: &WorkoutSession, exercises: &[Exercise]) -> Vec<String> {
    let ids: BTreeSet<Uuid> = session.sets.iter().filter_map(|s| s.exercise_id).collect();

    exercises
        .iter()
        .filter(|e| ids.contains(&e.id))
        .map(|e| e.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::dto::session::SessionSummary;
use crate::models::{WorkoutSession, WorkoutSet};

/// Sum of `weight × reps` over the sets, zero when there are none.
pub fn total_volume(sets: &[WorkoutSet]) -> Decimal {
    sets.iter().map(WorkoutSet::volume).sum()
}

pub fn total_sets(sets: &[WorkoutSet]) -> usize {
    sets.len()
}

/// Distinct exercises referenced by the sets. Sets without an exercise are not counted.
pub fn exercise_count(sets: &[WorkoutSet]) -> usize {
    sets.iter()
        .filter_map(|set| set.exercise_id)
        .collect::<HashSet<_>>()
        .len()
}

/// Volume across several sessions, e.g. everything logged in a week.
pub fn combined_volume<'a>(sessions: impl IntoIterator<Item = &'a WorkoutSession>) -> Decimal {
    sessions
        .into_iter()
        .map(|session| total_volume(&session.sets))
        .sum()
}

/// Marks the session completed and fixes its duration.
///
/// The duration spans the earliest to the latest set timestamp, independent of the
/// order sets were appended in. A session without sets gets a zero duration.
/// Finishing an already completed session changes nothing and returns `false`.
pub fn finish(session: &mut WorkoutSession) -> bool {
    if session.is_completed {
        return false;
    }

    session.is_completed = true;

    let first = session.sets.iter().map(|set| set.timestamp).min();
    let last = session.sets.iter().map(|set| set.timestamp).max();

    session.duration = match (first, last) {
        (Some(first), Some(last)) => (last - first).num_milliseconds() as f64 / 1000.0,
        _ => 0.0,
    };

    true
}

pub fn summarize(session: &WorkoutSession) -> SessionSummary {
    SessionSummary {
        session_id: session.id,
        state: session.state(),
        total_volume: total_volume(&session.sets),
        total_sets: total_sets(&session.sets),
        exercise_count: exercise_count(&session.sets),
        duration: session.duration,
    }
}

pub fn active_sessions(sessions: &[WorkoutSession]) -> Vec<&WorkoutSession> {
    sessions.iter().filter(|s| !s.is_completed).collect()
}

/// Completed sessions, newest first.
pub fn completed_sessions(sessions: &[WorkoutSession]) -> Vec<&WorkoutSession> {
    let mut completed: Vec<_> = sessions.iter().filter(|s| s.is_completed).collect();
    completed.sort_by(|a, b| b.date.cmp(&a.date));
    completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionState;
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    fn set(reps: u32, weight: i64) -> WorkoutSet {
        WorkoutSet::new(reps, Decimal::from(weight), true, "")
    }

    #[test]
    fn test_total_volume() {
        let sets = vec![set(10, 100), set(8, 110), set(6, 120)];
        assert_eq!(total_volume(&sets), Decimal::from(2600));
        assert_eq!(total_volume(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_total_sets() {
        let sets = vec![set(10, 100), set(10, 100), set(10, 100)];
        assert_eq!(total_sets(&sets), 3);
        assert_eq!(total_sets(&[]), 0);
    }

    #[test]
    fn test_exercise_count_ignores_unreferenced_sets() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let sets = vec![
            set(10, 135).for_exercise(a),
            set(10, 135).for_exercise(a),
            set(10, 225).for_exercise(b),
            set(10, 95),
        ];

        assert_eq!(exercise_count(&sets), 2);
        assert_eq!(exercise_count(&[]), 0);
    }

    #[test]
    fn test_combined_volume() {
        let mut first = WorkoutSession::new(Utc::now(), "");
        let mut second = WorkoutSession::new(Utc::now(), "");
        first.add_set(set(10, 100));
        second.add_set(set(10, 100));
        second.add_set(set(10, 100));

        assert_eq!(combined_volume([&first, &second]), Decimal::from(3000));
    }

    #[test]
    fn test_finish_uses_timestamp_order() {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let mut session = WorkoutSession::new(start, "");

        // Appended out of chronological order, as happens with backfilled sets.
        session.add_set(set(5, 100).at(start + Duration::minutes(10)));
        session.add_set(set(5, 100).at(start + Duration::minutes(45)));
        session.add_set(set(5, 100).at(start));

        assert!(finish(&mut session));
        assert!(session.is_completed);
        assert_eq!(session.duration, 45.0 * 60.0);
    }

    #[test]
    fn test_finish_is_idempotent() {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let mut session = WorkoutSession::new(start, "");
        session.add_set(set(5, 100).at(start));
        session.add_set(set(5, 100).at(start + Duration::minutes(30)));

        finish(&mut session);
        let duration = session.duration;

        // A set logged after finishing must not stretch the stored duration.
        session.sets.push(set(5, 100).at(start + Duration::hours(3)));
        assert!(!finish(&mut session));
        assert!(session.is_completed);
        assert_eq!(session.duration, duration);
    }

    #[test]
    fn test_finish_without_sets() {
        let mut session = WorkoutSession::new(Utc::now(), "");
        finish(&mut session);
        assert!(session.is_completed);
        assert_eq!(session.duration, 0.0);
    }

    #[test]
    fn test_summarize() {
        let exercise = Uuid::new_v4();
        let mut session = WorkoutSession::new(Utc::now(), "");
        session.add_set(set(10, 135).for_exercise(exercise));
        session.add_set(set(8, 140).for_exercise(exercise));
        session.add_set(set(6, 145).for_exercise(exercise));

        let summary = summarize(&session);
        assert_eq!(summary.state, SessionState::Active);
        assert_eq!(summary.total_sets, 3);
        assert_eq!(summary.exercise_count, 1);
        assert_eq!(summary.total_volume, Decimal::from(1350 + 1120 + 870));
    }

    #[test]
    fn test_active_and_completed_sessions() {
        let older = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap();

        let mut done_old = WorkoutSession::new(older, "old");
        let mut done_new = WorkoutSession::new(newer, "new");
        let open = WorkoutSession::new(newer, "open");
        done_old.finish();
        done_new.finish();

        let sessions = vec![done_old, open, done_new];

        let active = active_sessions(&sessions);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].notes, "open");

        let completed = completed_sessions(&sessions);
        let notes: Vec<_> = completed.iter().map(|s| s.notes.as_str()).collect();
        assert_eq!(notes, vec!["new", "old"]);
    }
}

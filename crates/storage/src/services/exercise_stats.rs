//! Lifetime statistics for a single exercise.
//!
//! Callers pass sets already narrowed to one exercise; nothing here filters.

use rust_decimal::Decimal;

use crate::dto::exercise::ExerciseStats;
use crate::models::WorkoutSet;

pub fn max_weight(sets: &[WorkoutSet]) -> Decimal {
    sets.iter().map(|set| set.weight).max().unwrap_or(Decimal::ZERO)
}

pub fn total_reps(sets: &[WorkoutSet]) -> u64 {
    sets.iter().map(|set| u64::from(set.reps)).sum()
}

pub fn total_volume(sets: &[WorkoutSet]) -> Decimal {
    sets.iter().map(WorkoutSet::volume).sum()
}

pub fn total_set_count(sets: &[WorkoutSet]) -> usize {
    sets.len()
}

/// The `limit` most recent sets, newest first.
pub fn recent_sets(sets: &[WorkoutSet], limit: usize) -> Vec<&WorkoutSet> {
    let mut recent: Vec<&WorkoutSet> = sets.iter().collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent.truncate(limit);
    recent
}

pub fn compute_stats(sets: &[WorkoutSet], recent_limit: usize) -> ExerciseStats {
    ExerciseStats {
        max_weight: max_weight(sets),
        total_reps: total_reps(sets),
        total_volume: total_volume(sets),
        total_sets: total_set_count(sets),
        recent_sets: recent_sets(sets, recent_limit)
            .into_iter()
            .cloned()
            .collect(),
    }
}

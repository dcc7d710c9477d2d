use rust_decimal::Decimal;

use crate::models::{Exercise, PersonalRecord, RecordType, WorkoutSet};
use crate::services::one_rep_max::estimate_one_rep_max;

/// Record snapshots for one exercise, one per [`RecordType`].
///
/// Each record keeps the weight, reps and time of the set that achieved it. For
/// `OneRepMax` that is the set with the highest Epley estimate. No sets, no records.
pub fn personal_records_for(exercise: &Exercise, sets: &[WorkoutSet]) -> Vec<PersonalRecord> {
    RecordType::all()
        .iter()
        .filter_map(|record_type| {
            best_set(sets, *record_type).map(|set| {
                let mut record = PersonalRecord::new(
                    exercise.id,
                    exercise.name.clone(),
                    set.weight,
                    set.reps,
                    *record_type,
                );
                record.date = set.timestamp;
                record
            })
        })
        .collect()
}

/// Earliest set holding the best value, so a later tie does not replace a record.
fn best_set(sets: &[WorkoutSet], record_type: RecordType) -> Option<&WorkoutSet> {
    let score = |set: &WorkoutSet| -> Decimal {
        match record_type {
            RecordType::OneRepMax => estimate_one_rep_max(set.weight, set.reps),
            RecordType::MaxWeight => set.weight,
            RecordType::MaxVolume => set.volume(),
            RecordType::MaxReps => Decimal::from(set.reps),
        }
    };

    let mut ordered: Vec<&WorkoutSet> = sets.iter().collect();
    ordered.sort_by_key(|set| set.timestamp);

    ordered.into_iter().fold(None, |best, set| match best {
        Some(current) if score(current) >= score(set) => Some(current),
        _ => Some(set),
    })
}

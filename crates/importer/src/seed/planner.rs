use storage::WorkoutStore;
use storage::models::{Exercise, ExerciseCategory};
use tracing::{info, warn};

use super::ExerciseSeedEntry;
use crate::Result;

/// What seeding would insert into the exercise library, and what it left out.
#[derive(Debug, Default)]
pub struct SeedPlan {
    pub exercises: Vec<Exercise>,
    pub skipped: Vec<SkippedEntry>,
    /// Set when the library already had exercises and nothing was planned.
    pub already_seeded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub entry: ExerciseSeedEntry,
    pub reason: String,
}

impl SeedPlan {
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn log_warnings(&self) {
        for skipped in &self.skipped {
            warn!("Skipping seed entry '{}': {}", skipped.entry.name, skipped.reason);
        }
    }
}

/// Plans the one-time seed of the exercise library.
///
/// Nothing is planned when `existing` already holds exercises. Otherwise every
/// entry with a recognised category becomes a non-custom exercise; entries with an
/// unknown category or a blank name are recorded in `skipped` and the rest of the
/// list is still processed.
pub fn plan_seed(existing: &[Exercise], entries: &[ExerciseSeedEntry]) -> SeedPlan {
    if !existing.is_empty() {
        return SeedPlan {
            already_seeded: true,
            ..SeedPlan::default()
        };
    }

    let mut plan = SeedPlan::default();

    for entry in entries {
        let name = entry.name.trim();
        if name.is_empty() {
            plan.skipped.push(SkippedEntry {
                entry: entry.clone(),
                reason: "name is empty".to_string(),
            });
            continue;
        }

        match entry.category.parse::<ExerciseCategory>() {
            Ok(category) => plan.exercises.push(Exercise::new(name, category, "", false)),
            Err(e) => plan.skipped.push(SkippedEntry {
                entry: entry.clone(),
                reason: e.to_string(),
            }),
        }
    }

    plan
}

/// Seeds `store` if its exercise library is empty. Returns the number inserted.
pub fn seed_store(store: &mut WorkoutStore, entries: &[ExerciseSeedEntry]) -> Result<usize> {
    let plan = plan_seed(store.exercises(), entries);

    if plan.already_seeded {
        info!("Exercise library already populated, skipping seed");
        return Ok(0);
    }

    plan.log_warnings();

    let count = plan.exercises.len();
    for exercise in plan.exercises {
        store.insert_exercise(exercise)?;
    }

    info!(
        "Seeded {} default exercises ({} skipped)",
        count,
        plan.skipped.len()
    );

    Ok(count)
}

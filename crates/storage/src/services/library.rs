use std::collections::BTreeMap;

use crate::models::{Exercise, ExerciseCategory};

/// Case-insensitive name search combined with an optional category filter.
/// An empty search matches every name.
pub fn filter_exercises<'a>(
    exercises: &'a [Exercise],
    search: &str,
    category: Option<ExerciseCategory>,
) -> Vec<&'a Exercise> {
    let needle = search.trim().to_lowercase();

    exercises
        .iter()
        .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
        .filter(|e| category.is_none_or(|c| e.category == c))
        .collect()
}

/// Exercises grouped by category name, each group sorted by exercise name.
pub fn group_by_category<'a>(
    exercises: impl IntoIterator<Item = &'a Exercise>,
) -> Vec<(ExerciseCategory, Vec<&'a Exercise>)> {
    let mut groups: BTreeMap<&'static str, (ExerciseCategory, Vec<&Exercise>)> = BTreeMap::new();

    for exercise in exercises {
        groups
            .entry(exercise.category.as_str())
            .or_insert_with(|| (exercise.category, Vec::new()))
            .1
            .push(exercise);
    }

    groups
        .into_values()
        .map(|(category, mut group)| {
            group.sort_by(|a, b| a.name.cmp(&b.name));
            (category, group)
        })
        .collect()
}

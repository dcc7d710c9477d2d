use serde::{Deserialize, Serialize};

/// One entry of the bundled default exercise list.
///
/// `category` is kept as the raw string from the file; it is only mapped onto
/// `ExerciseCategory` when the seed is planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSeedEntry {
    pub name: String,
    pub category: String,
}

impl ExerciseSeedEntry {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

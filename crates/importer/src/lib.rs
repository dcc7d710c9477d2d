pub mod error;
pub mod seed;
pub mod snapshot;
pub mod sources;
pub mod traits;

pub use error::{ImporterError, Result};
pub use seed::{ExerciseSeedEntry, SeedPlan, SkippedEntry, plan_seed, seed_store};
pub use sources::JsonFileSource;
pub use traits::ExerciseSource;

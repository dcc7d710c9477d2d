use crate::Result;
use crate::seed::ExerciseSeedEntry;

/// Where the default exercise list comes from.
#[async_trait::async_trait]
pub trait ExerciseSource: Send + Sync {
    async fn load(&self) -> Result<Vec<ExerciseSeedEntry>>;

    fn name(&self) -> &'static str;
}

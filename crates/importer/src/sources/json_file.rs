use std::path::{Path, PathBuf};

use tracing::debug;

use crate::seed::ExerciseSeedEntry;
use crate::traits::ExerciseSource;
use crate::{ImporterError, Result};

/// Reads the default exercise list from a JSON array of `{name, category}` objects.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ExerciseSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<ExerciseSeedEntry>> {
        debug!("Reading seed list from {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ImporterError::ImportError(format!(
                "Cannot read seed file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let entries: Vec<ExerciseSeedEntry> = serde_json::from_str(&content)?;
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "JSON file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_seed_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Squat", "category": "Legs"}}, {{"name": "X", "category": "Unknown"}}]"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let entries = source.load().await.unwrap();

        assert_eq!(
            entries,
            vec![
                ExerciseSeedEntry::new("Squat", "Legs"),
                ExerciseSeedEntry::new("X", "Unknown"),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_an_import_error() {
        let source = JsonFileSource::new("/nonexistent/default_exercises.json");
        let result = source.load().await;
        assert!(matches!(result, Err(ImporterError::ImportError(_))));
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Squat"}}"#).unwrap();

        let result = JsonFileSource::new(file.path()).load().await;
        assert!(matches!(result, Err(ImporterError::ParseError(_))));
    }
}

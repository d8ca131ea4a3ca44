//! State persistence layer.
//!
//! Loads and saves the tracker document. Unlike caches that may be rebuilt,
//! this document carries lifetime statistics, so a present-but-unreadable
//! file is surfaced as an error instead of being silently replaced with an
//! empty state. Only a genuinely missing file starts fresh.

use anyhow::Context;
use log::{info, warn};
use tokio::fs;

use crate::state::AppState;
use crate::store::document::StateDocument;

/// Handles loading and persisting the tracker state document.
///
/// # Examples
///
/// ```no_run
/// use grouper::store::StateLoader;
///
/// # async fn example() -> Result<(), anyhow::Error> {
/// let loader = StateLoader::new("tracker.json".to_string());
/// let mut state = loader.load().await?;
///
/// // ... mutate state ...
///
/// loader.persist(&state).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StateLoader {
    /// Path to the JSON document.
    path: String,
}

impl StateLoader {
    /// Creates a loader for the given file path.
    pub fn new(path: String) -> Self {
        StateLoader { path }
    }

    /// Loads the tracker state from disk.
    ///
    /// # Returns
    ///
    /// * A fresh default state when the file does not exist yet
    /// * The restored state when the file reads and parses
    /// * An error when the file exists but cannot be read or deserialized,
    ///   so stale lifetime statistics are never silently discarded
    pub async fn load(&self) -> Result<AppState, anyhow::Error> {
        let serialized = match fs::read_to_string(&self.path).await {
            Ok(serialized) => serialized,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("no persisted state at {}, starting fresh", self.path);
                return Ok(AppState::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read state file {}", self.path));
            }
        };

        let document: StateDocument = serde_json::from_str(&serialized)
            .with_context(|| format!("failed to deserialize state file {}", self.path))?;
        let state = document.into_state();

        info!(
            "loaded state for puzzle #{} with {} players",
            state.round.puzzle_number,
            state.roster.players().len()
        );

        Ok(state)
    }

    /// Persists the tracker state to disk.
    ///
    /// Write errors are returned to the caller so the triggering action can
    /// abort its acknowledgment rather than pretend the state is safe.
    pub async fn persist(&self, state: &AppState) -> Result<(), anyhow::Error> {
        let document = StateDocument::from_state(state);
        let serialized =
            serde_json::to_string_pretty(&document).context("failed to serialize state")?;

        fs::write(&self.path, &serialized)
            .await
            .with_context(|| format!("failed to persist state file {}", self.path))?;

        info!("persisted state for puzzle #{}", state.round.puzzle_number);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn loader_in(dir: &tempfile::TempDir) -> StateLoader {
        let path = dir.path().join("tracker.json");
        StateLoader::new(path.to_str().unwrap().to_string())
    }

    fn sample_state() -> AppState {
        let mut state = AppState::new();
        state.round.puzzle_number = 99;
        state.round.scored_today = true;
        state.round.last_scored = Some(Local.with_ymd_and_hms(2024, 6, 1, 23, 59, 59).unwrap());
        state.round.bound_channel = Some("general".to_owned());
        state.roster.register("Alice");
        state.roster.find_mut("Alice").unwrap().win_count = 7;
        state
    }

    #[tokio::test]
    async fn test_load_missing_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let loader = loader_in(&dir);

        let state = loader.load().await.unwrap();

        assert_eq!(state, AppState::new());
    }

    #[tokio::test]
    async fn test_persist_and_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let loader = loader_in(&dir);
        let mut state = sample_state();

        loader.persist(&state).await.unwrap();
        let loaded = loader.load().await.unwrap();

        // sent_warning never persists
        state.round.sent_warning = false;
        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn test_load_corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = loader_in(&dir);
        fs::write(dir.path().join("tracker.json"), "{ not valid json")
            .await
            .unwrap();

        assert!(loader.load().await.is_err());
    }

    #[tokio::test]
    async fn test_persist_to_unwritable_path_is_an_error() {
        let loader = StateLoader::new("/nonexistent-dir/tracker.json".to_string());

        assert!(loader.persist(&sample_state()).await.is_err());
    }
}

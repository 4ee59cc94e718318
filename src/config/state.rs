//! Persisted application state
//!
//! The only durable state in the application is a single boolean flag
//! recording whether the user has visited before, which decides whether
//! the onboarding tour is shown at startup.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// On-disk representation of the persisted state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PersistedState {
    /// Whether the user has launched the application before
    #[serde(default)]
    has_visited: bool,
}

impl PersistedState {
    /// Load the state from disk, or default when the file doesn't exist
    fn load_or_default(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let state_path = paths.state_file();

        if state_path.exists() {
            let contents = std::fs::read_to_string(&state_path)
                .map_err(|e| TrackerError::Io(format!("Failed to read state file: {}", e)))?;

            let state: PersistedState = serde_json::from_str(&contents)
                .map_err(|e| TrackerError::Config(format!("Failed to parse state file: {}", e)))?;

            Ok(state)
        } else {
            Ok(PersistedState::default())
        }
    }

    /// Save the state to disk
    fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize state: {}", e)))?;

        std::fs::write(paths.state_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write state file: {}", e)))?;

        Ok(())
    }
}

/// The first-visit flag
pub struct VisitFlag;

impl VisitFlag {
    /// Read the flag and set it, in one step.
    ///
    /// Returns true when this is the first visit (the tour should be
    /// shown). The flag is written back immediately so that subsequent
    /// launches suppress the tour; read and write happen within this
    /// single call.
    pub fn check_and_set(paths: &TrackerPaths) -> Result<bool, TrackerError> {
        let mut state = PersistedState::load_or_default(paths)?;

        if state.has_visited {
            return Ok(false);
        }

        state.has_visited = true;
        state.save(paths)?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_visit_sets_flag() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(VisitFlag::check_and_set(&paths).unwrap());
        assert!(paths.state_file().exists());

        // Second launch: flag already set
        assert!(!VisitFlag::check_and_set(&paths).unwrap());
    }

    #[test]
    fn test_missing_file_means_first_visit() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.state_file().exists());
        assert!(VisitFlag::check_and_set(&paths).unwrap());
    }

    #[test]
    fn test_explicit_false_means_first_visit() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.state_file(), r#"{"has_visited": false}"#).unwrap();

        assert!(VisitFlag::check_and_set(&paths).unwrap());
        assert!(!VisitFlag::check_and_set(&paths).unwrap());
    }
}

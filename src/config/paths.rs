//! Path management for the family planner
//!
//! ## Path Resolution Order
//!
//! 1. `FAMILY_PLANNER_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/family-planner` on Linux,
//!    `~/Library/Application Support/family-planner` on macOS,
//!    `%APPDATA%\family-planner\config` on Windows)

use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::PlannerError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "FAMILY_PLANNER_DIR";

/// Manages all paths used by the planner
#[derive(Debug, Clone)]
pub struct PlannerPaths {
    /// Base directory for settings, the default plan and exports
    base_dir: PathBuf,
}

impl PlannerPaths {
    /// Create a new PlannerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, PlannerError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PlannerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the default plan file
    pub fn plan_file(&self) -> PathBuf {
        self.base_dir.join("plan.yaml")
    }

    /// Get the default directory for exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), PlannerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PlannerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| PlannerError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if the planner has been initialized (plan file exists)
    pub fn is_initialized(&self) -> bool {
        self.plan_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PlannerError> {
    ProjectDirs::from("", "", "family-planner")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PlannerError::Config("Could not determine a config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.plan_file(), temp_dir.path().join("plan.yaml"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DIR_ENV_VAR, custom_path);

        let paths = PlannerPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DIR_ENV_VAR);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.export_dir().exists());
    }
}

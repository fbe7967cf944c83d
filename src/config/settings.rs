//! User settings for the family planner
//!
//! Display preferences and the projection defaults used when a plan file
//! does not carry its own projection block.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::PlannerPaths;
use crate::error::PlannerError;
use crate::models::money::DEFAULT_SYMBOL;
use crate::models::{ProjectionParams, DEFAULT_HORIZON_MONTHS};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default projection horizon in months
    #[serde(default = "default_horizon")]
    pub horizon_months: u32,

    /// Default monthly income growth (0.05 = 5%)
    #[serde(default)]
    pub monthly_growth_rate: f64,

    /// First projected month (YYYY-MM) for calendar labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_start: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_SYMBOL.to_string()
}

fn default_horizon() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            horizon_months: default_horizon(),
            monthly_growth_rate: 0.0,
            projection_start: None,
        }
    }
}

impl Settings {
    /// Projection parameters implied by these settings
    pub fn projection(&self) -> ProjectionParams {
        ProjectionParams::new(self.horizon_months, self.monthly_growth_rate)
    }

    /// Parsed projection start month, if configured
    pub fn projection_start_date(&self) -> Result<Option<NaiveDate>, PlannerError> {
        self.projection_start
            .as_deref()
            .map(parse_month)
            .transpose()
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PlannerPaths) -> Result<Self, PlannerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PlannerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PlannerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PlannerPaths) -> Result<(), PlannerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PlannerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            PlannerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

/// Parse a `YYYY-MM` month into the first day of that month
pub fn parse_month(s: &str) -> Result<NaiveDate, PlannerError> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| PlannerError::Parse(format!("Invalid month '{}'. Use YYYY-MM", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "Rp");
        assert_eq!(settings.horizon_months, 12);
        assert_eq!(settings.projection(), ProjectionParams::default());
        assert_eq!(settings.projection_start_date().unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.horizon_months = 24;
        settings.monthly_growth_rate = 0.01;
        settings.projection_start = Some("2026-01".into());

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(
            loaded.projection_start_date().unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 1)
        );
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2025-11").unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
        );
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("November").is_err());
    }
}

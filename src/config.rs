//! Configuration module
//!
//! Holds the few knobs the day strip exposes: which weekday starts a week
//! row and how many cells the viewport shows at once.

use crate::error::{CalendarError, CalendarResult};
use chrono::Weekday;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "HCAL_CONFIG";

/// A sequence must hold more than one full week of real days.
pub const MINIMUM_DAYS: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Weekday shown in the first column of a week row
    pub first_weekday: Weekday,
    /// Number of day cells visible at the same time
    pub viewport_width: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_weekday: Weekday::Sun,
            viewport_width: 7,
        }
    }
}

impl CalendarConfig {
    /// Validates the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(())` - the viewport shows at least one cell
    /// * `Err(CalendarError::Config)` - otherwise
    pub fn validate(&self) -> CalendarResult<()> {
        if self.viewport_width == 0 {
            return Err(CalendarError::config("viewport_width must be at least 1"));
        }
        Ok(())
    }

    pub fn load_from(path: &Path) -> CalendarResult<Self> {
        debug!("Loading calendar config from {}", path.display());
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config named by `HCAL_CONFIG`, then the per-user config
    /// file, then falls back to defaults.
    pub fn load() -> CalendarResult<Self> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                info!("No calendar config found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("horizontal-calendar").join("config.json"))
}

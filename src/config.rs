//! Configuration management for `TripPlan` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripPlanError;
use anyhow::{Context, Result};
use chrono::Month;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::trip_request::{DEFAULT_DAYS, DEFAULT_MONTH, FALLBACK_TARGET};

/// Root configuration structure for the `TripPlan` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripPlanConfig {
    /// Attraction dataset settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Defaults and limits used while planning
    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Attraction dataset settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the attractions CSV file
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Defaults and limits used while planning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Trip length when the request names none
    #[serde(default = "default_days")]
    pub default_days: u32,
    /// Travel month when the request names none
    #[serde(default = "default_month")]
    pub default_month: Month,
    /// Destination when no known locality or region is mentioned
    #[serde(default = "default_fallback_target")]
    pub fallback_target: String,
    /// Minimum rating for candidates when the target is not in the catalog
    #[serde(default = "default_fallback_min_rating")]
    pub fallback_min_rating: f64,
    /// Maximum attractions scheduled per day
    #[serde(default = "default_stops_per_day")]
    pub stops_per_day: usize,
}

// Default value functions
fn default_catalog_path() -> PathBuf {
    PathBuf::from("data").join("Top Indian Places to Visit.csv")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

fn default_month() -> Month {
    DEFAULT_MONTH
}

fn default_fallback_target() -> String {
    FALLBACK_TARGET.to_string()
}

fn default_fallback_min_rating() -> f64 {
    4.0
}

fn default_stops_per_day() -> usize {
    2
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_days: default_days(),
            default_month: default_month(),
            fallback_target: default_fallback_target(),
            fallback_min_rating: default_fallback_min_rating(),
            stops_per_day: default_stops_per_day(),
        }
    }
}

impl TripPlanConfig {
    /// Load configuration from a TOML file and `TRIPPLAN_` environment variables
    ///
    /// Without a path the per-user config file is tried; a missing file is not
    /// an error.
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRIPPLAN_PLANNER__DEFAULT_DAYS=4
        builder = builder.add_source(
            Environment::with_prefix("TRIPPLAN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripPlanConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("tripplan").join("config.toml"))
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        if self.catalog.path.as_os_str().is_empty() {
            self.catalog.path = default_catalog_path();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.planner.fallback_target.trim().is_empty() {
            self.planner.fallback_target = default_fallback_target();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_planner()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate planner limits
    fn validate_planner(&self) -> Result<()> {
        if self.planner.stops_per_day == 0 {
            return Err(TripPlanError::config("Stops per day must be at least 1").into());
        }

        if !(0.0..=5.0).contains(&self.planner.fallback_min_rating) {
            return Err(TripPlanError::config(
                "Fallback minimum rating must be between 0 and 5",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripPlanError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripPlanError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Visual theme of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StyleVariant {
    #[default]
    Dark,
    Light,
}

/// Granularity the widget renders at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Year,
    Month,
    Day,
}

impl ViewMode {
    /// Parse the value of a view selector; anything unknown yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "year" => Some(Self::Year),
            "month" => Some(Self::Month),
            "day" => Some(Self::Day),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First column of every rendered week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

/// Widget settings shared by the config file and the host option record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSettings {
    #[serde(default)]
    pub style: StyleVariant,

    /// Initial view mode
    #[serde(default)]
    pub view: ViewMode,

    #[serde(default)]
    pub week_start: WeekStart,

    /// Days before this date are rendered disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<NaiveDate>,

    /// Layout hint for the year grid
    #[serde(default = "default_months_per_row")]
    pub months_per_row: u32,

    #[serde(default = "default_true")]
    pub show_header: bool,

    #[serde(default = "default_true")]
    pub show_arrows: bool,

    #[serde(default = "default_true")]
    pub show_date_input: bool,

    /// Initial displayed year; `None` means the current year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_year: Option<i32>,

    /// Fade duration between views in milliseconds (0 disables the fade)
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

fn default_months_per_row() -> u32 {
    3
}

fn default_true() -> bool {
    true
}

fn default_transition_ms() -> u64 {
    180
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            style: StyleVariant::Dark,
            view: ViewMode::Year,
            week_start: WeekStart::Sunday,
            min_date: None,
            months_per_row: default_months_per_row(),
            show_header: true,
            show_arrows: true,
            show_date_input: true,
            display_year: None,
            transition_ms: default_transition_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber` filter directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: crate::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// JSON file holding the initial event map
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Widget defaults
    #[serde(default)]
    pub calendar: CalendarSettings,
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("yearview");

        Self {
            config_dir,
            events_file: None,
            logging: LoggingConfig::default(),
            calendar: CalendarSettings::default(),
        }
    }
}

/// Whether every date of `year` can be represented by the date backend.
pub fn is_renderable_year(year: i32) -> bool {
    year > NaiveDate::MIN.year() && year < NaiveDate::MAX.year()
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, writing defaults there if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings, which the caller
    /// logs once its subscriber is installed. Critical errors fail with
    /// `ConfigError::Invalid`.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config_path = Self::config_path()?;
        Self::load_validated_from(&config_path)
    }

    /// Same as [`Config::load_validated`] for an explicit path
    pub fn load_validated_from(config_path: &Path) -> Result<(Self, ValidationResult)> {
        let config = Self::load_from(config_path)?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        let calendar = &self.calendar;

        if calendar.months_per_row == 0 {
            result.add_error(
                "calendar.months_per_row",
                "Months per row must be greater than 0",
            );
        } else if calendar.months_per_row > 12 {
            result.add_warning(
                "calendar.months_per_row",
                "More than 12 months per row leaves empty columns",
            );
        }

        if let Some(year) = calendar.display_year {
            if !is_renderable_year(year) {
                result.add_error(
                    "calendar.display_year",
                    format!("Year {} is outside the supported date range", year),
                );
            }
        }

        if calendar.transition_ms > 2000 {
            result.add_warning(
                "calendar.transition_ms",
                "Transition is longer than 2 seconds",
            );
        }

        if let Some(path) = &self.events_file {
            if !path.exists() {
                result.add_warning(
                    "events_file",
                    format!("Path does not exist: {}", path.display()),
                );
            }
        }

        if self.logging.filter.trim().is_empty() {
            result.add_warning("logging.filter", "Empty log filter, using defaults");
        }

        result
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::NotFound("no user config directory".into()))?
            .join("yearview");

        Ok(config_dir.join("config.toml"))
    }
}

//! Widget options as supplied by the host, and the resolved configuration.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use yearview_core::{CalendarSettings, StyleVariant, ViewMode, WeekStart};

use crate::error::CalendarError;
use crate::store::EventMap;

/// Option record passed at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarOptions {
    #[serde(flatten)]
    pub settings: CalendarSettings,

    /// Initial events
    #[serde(default)]
    pub events: EventMap,
}

impl CalendarOptions {
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<CalendarSettings> for CalendarOptions {
    fn from(settings: CalendarSettings) -> Self {
        Self {
            settings,
            events: EventMap::new(),
        }
    }
}

/// Configuration fixed for the lifetime of a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    style: StyleVariant,
    initial_view: ViewMode,
    months_per_row: u32,
    week_start: WeekStart,
    min_date: Option<NaiveDate>,
    display_year: Option<i32>,
    show_header: bool,
    show_arrows: bool,
    show_date_input: bool,
    transition: Duration,
}

impl From<&CalendarSettings> for CalendarConfig {
    fn from(settings: &CalendarSettings) -> Self {
        Self {
            style: settings.style,
            initial_view: settings.view,
            months_per_row: settings.months_per_row.max(1),
            week_start: settings.week_start,
            min_date: settings.min_date,
            display_year: settings.display_year,
            show_header: settings.show_header,
            show_arrows: settings.show_arrows,
            show_date_input: settings.show_date_input,
            transition: Duration::from_millis(settings.transition_ms),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::from(&CalendarSettings::default())
    }
}

impl CalendarConfig {
    pub fn style(&self) -> StyleVariant {
        self.style
    }

    pub fn initial_view(&self) -> ViewMode {
        self.initial_view
    }

    /// Never zero.
    pub fn months_per_row(&self) -> u32 {
        self.months_per_row
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    pub fn display_year(&self) -> Option<i32> {
        self.display_year
    }

    pub fn show_header(&self) -> bool {
        self.show_header
    }

    pub fn show_arrows(&self) -> bool {
        self.show_arrows
    }

    pub fn show_date_input(&self) -> bool {
        self.show_date_input
    }

    /// Fade between renders; zero disables it.
    pub fn transition(&self) -> Duration {
        self.transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EventSpec;

    #[test]
    fn test_options_from_json() {
        let options = CalendarOptions::from_json(
            r##"{
                "style": "light",
                "view": "month",
                "week_start": "monday",
                "display_year": 2030,
                "show_arrows": false,
                "events": {
                    "2030-01-01": {"color": "#abc", "text": "Launch"}
                }
            }"##,
        )
        .unwrap();

        assert_eq!(options.settings.style, StyleVariant::Light);
        assert_eq!(options.settings.view, ViewMode::Month);
        assert_eq!(options.settings.display_year, Some(2030));
        assert!(!options.settings.show_arrows);
        assert!(options.settings.show_date_input);
        assert!(matches!(
            options.events.get("2030-01-01"),
            Some(EventSpec::One(_))
        ));
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let options = CalendarOptions::from_json("{}").unwrap();
        assert_eq!(options.settings, CalendarSettings::default());
        assert!(options.events.is_empty());
    }

    #[test]
    fn test_config_clamps_months_per_row() {
        let settings = CalendarSettings {
            months_per_row: 0,
            transition_ms: 0,
            ..CalendarSettings::default()
        };
        let config = CalendarConfig::from(&settings);
        assert_eq!(config.months_per_row(), 1);
        assert!(config.transition().is_zero());
    }
}

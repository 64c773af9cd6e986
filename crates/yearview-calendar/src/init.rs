//! Explicit opt-in initialization for host pages.

use chrono::{Datelike, Local};
use yearview_core::{CalendarSettings, StyleVariant};

use crate::config::CalendarOptions;
use crate::surface::Host;
use crate::widget::CalendarWidget;

/// Marker selector looked up by [`init_calendar`].
pub const CALENDAR_MARKER: &str = ".calendar";

#[derive(Debug, Clone)]
pub struct InitOptions {
    /// When false, [`init_calendar`] does nothing
    pub auto_init: bool,
    pub selector: String,
    pub calendar: CalendarOptions,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            auto_init: true,
            selector: CALENDAR_MARKER.to_string(),
            calendar: CalendarSettings {
                style: StyleVariant::Light,
                display_year: Some(Local::now().year()),
                ..CalendarSettings::default()
            }
            .into(),
        }
    }
}

/// Mount a calendar on the marker element if the host page has one.
///
/// Returns `None` when disabled or when no element matches.
pub fn init_calendar<H: Host>(
    host: &mut H,
    options: InitOptions,
) -> Option<CalendarWidget<H::Surface>> {
    if !options.auto_init {
        tracing::debug!("Calendar auto-init disabled");
        return None;
    }

    match CalendarWidget::mount(host, &options.selector, options.calendar) {
        Ok(widget) => Some(widget),
        Err(e) => {
            tracing::debug!("Calendar auto-init skipped: {}", e);
            None
        }
    }
}

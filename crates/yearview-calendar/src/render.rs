//! Declarative views built from widget state.

use chrono::{Datelike, NaiveDate};
use yearview_core::ViewMode;

use crate::cells::{describe_cell, CellDescription};
use crate::config::CalendarConfig;
use crate::grid::{month_grid, month_name, weekday_labels};
use crate::panel::DayPanel;
use crate::store::EventStore;
use crate::types::DateKey;
use crate::view::ViewState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub title: &'static str,
    pub weekdays: [&'static str; 7],
    /// Leading blank cells
    pub offset: u32,
    pub cells: Vec<CellDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearView {
    pub year: i32,
    pub months_per_row: u32,
    pub months: Vec<MonthView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Year(YearView),
    Month(MonthView),
    Day(DayPanel),
}

impl View {
    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Year(_) => ViewMode::Year,
            Self::Month(_) => ViewMode::Month,
            Self::Day(_) => ViewMode::Day,
        }
    }
}

/// Header above the calendar body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderModel {
    pub visible: bool,
    pub title: String,
    /// `YYYY-MM-DD` shown in the date input
    pub date_input: Option<String>,
    pub view: ViewMode,
    pub show_arrows: bool,
    pub show_date_input: bool,
}

pub fn build_month(
    year: i32,
    month: u32,
    config: &CalendarConfig,
    store: &EventStore,
    today: NaiveDate,
) -> MonthView {
    let grid = month_grid(year, month, config.week_start(), today, config.min_date());
    MonthView {
        year,
        month,
        title: month_name(month).unwrap_or_default(),
        weekdays: weekday_labels(config.week_start()),
        offset: grid.offset,
        cells: grid.days.iter().map(|cell| describe_cell(cell, store)).collect(),
    }
}

pub fn build_year(
    year: i32,
    config: &CalendarConfig,
    store: &EventStore,
    today: NaiveDate,
) -> YearView {
    YearView {
        year,
        months_per_row: config.months_per_row(),
        months: (1..=12)
            .map(|month| build_month(year, month, config, store, today))
            .collect(),
    }
}

/// Build the body for the current state.
///
/// Month and day views need a representable date; without one the year grid is shown.
pub fn build_view(
    state: &ViewState,
    config: &CalendarConfig,
    store: &EventStore,
    today: NaiveDate,
) -> View {
    match (state.mode, state.focused_date()) {
        (ViewMode::Month, Some(date)) => {
            View::Month(build_month(date.year(), date.month(), config, store, today))
        }
        (ViewMode::Day, Some(date)) => View::Day(DayPanel::build(DateKey::new(date), store)),
        _ => View::Year(build_year(state.current_year, config, store, today)),
    }
}

pub fn build_header(state: &ViewState, config: &CalendarConfig) -> HeaderModel {
    let focused = state.focused_date();

    let (title, input_date) = match (state.mode, focused) {
        (ViewMode::Month, Some(date)) => (
            format!("{} {}", month_name(date.month()).unwrap_or_default(), date.year()),
            date.with_day(1),
        ),
        (ViewMode::Day, Some(date)) => (
            format!(
                "{} {}, {}",
                month_name(date.month()).unwrap_or_default(),
                date.day(),
                date.year()
            ),
            Some(date),
        ),
        _ => (
            state.current_year.to_string(),
            NaiveDate::from_ymd_opt(state.current_year, 1, 1),
        ),
    };

    HeaderModel {
        visible: config.show_header(),
        title,
        date_input: input_date.map(|d| DateKey::new(d).to_string()),
        view: state.mode,
        show_arrows: config.show_arrows(),
        show_date_input: config.show_date_input(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::Background;
    use crate::types::EventEntry;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_view_has_twelve_months() {
        let config = CalendarConfig::default();
        let view = build_year(2024, &config, &EventStore::new(), date(2024, 1, 1));
        assert_eq!(view.months.len(), 12);
        assert_eq!(view.months[1].title, "February");
        assert_eq!(view.months[1].cells.len(), 29);
        assert_eq!(view.months_per_row, 3);
    }

    #[test]
    fn test_month_view_carries_events() {
        let config = CalendarConfig::default();
        let mut store = EventStore::new();
        store.add(
            DateKey::from_ymd(2024, 3, 8).unwrap(),
            EventEntry::new("#c0ffee", "Review"),
        );

        let view = build_month(2024, 3, &config, &store, date(2024, 3, 8));
        let cell = &view.cells[7];
        assert_eq!(cell.label, "8");
        assert!(cell.today);
        assert!(matches!(cell.background, Background::Solid(_)));
    }

    #[test]
    fn test_build_view_per_mode() {
        let config = CalendarConfig::default();
        let store = EventStore::new();
        let today = date(2024, 1, 1);

        let state = ViewState::new(ViewMode::Month, 2024, Some(date(2024, 9, 17)));
        assert!(matches!(build_view(&state, &config, &store, today), View::Month(m) if m.month == 9));

        let state = ViewState::new(ViewMode::Day, 2024, Some(date(2024, 9, 17)));
        let View::Day(panel) = build_view(&state, &config, &store, today) else {
            panic!("expected day view");
        };
        assert_eq!(panel.key.to_string(), "2024-09-17");
    }

    #[test]
    fn test_header_titles() {
        let config = CalendarConfig::default();

        let state = ViewState::new(ViewMode::Year, 2024, Some(date(2024, 6, 1)));
        let header = build_header(&state, &config);
        assert_eq!(header.title, "2024");
        assert_eq!(header.date_input.as_deref(), Some("2024-01-01"));

        let state = ViewState::new(ViewMode::Month, 2024, Some(date(2024, 6, 20)));
        let header = build_header(&state, &config);
        assert_eq!(header.title, "June 2024");
        assert_eq!(header.date_input.as_deref(), Some("2024-06-01"));

        let state = ViewState::new(ViewMode::Day, 2024, Some(date(2024, 1, 5)));
        let header = build_header(&state, &config);
        assert_eq!(header.title, "January 5, 2024");
        assert_eq!(header.date_input.as_deref(), Some("2024-01-05"));
        assert_eq!(header.view, ViewMode::Day);
    }

    #[test]
    fn test_header_for_unrepresentable_year() {
        let config = CalendarConfig::default();
        let state = ViewState::new(ViewMode::Year, i32::MAX, None);
        let header = build_header(&state, &config);
        assert_eq!(header.title, i32::MAX.to_string());
        assert_eq!(header.date_input, None);
    }
}

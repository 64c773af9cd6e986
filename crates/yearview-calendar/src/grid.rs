//! Month grid layout: leading blanks followed by one cell per day.

use chrono::{Datelike, NaiveDate};
use yearview_core::WeekStart;

use crate::types::DateKey;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS_SUNDAY_FIRST: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAYS_MONDAY_FIRST: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// English name of a 1-based month.
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
}

/// Column headings for a week.
pub fn weekday_labels(week_start: WeekStart) -> [&'static str; 7] {
    match week_start {
        WeekStart::Sunday => WEEKDAYS_SUNDAY_FIRST,
        WeekStart::Monday => WEEKDAYS_MONDAY_FIRST,
    }
}

/// Number of blank cells before day 1.
pub fn leading_offset(year: i32, month: u32, week_start: WeekStart) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = first.weekday().num_days_from_sunday();
    Some(match week_start {
        WeekStart::Sunday => offset,
        WeekStart::Monday => (offset + 6) % 7,
    })
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    // December ends on the 31st, even in the last year chrono can represent.
    let last = if month == 12 {
        NaiveDate::from_ymd_opt(year, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()?
    };
    (last.month() == month).then(|| last.day())
}

/// One rendered day slot bound to a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub key: DateKey,
    pub is_today: bool,
    pub is_disabled: bool,
}

/// Layout of a single month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    /// Leading blank cells, always in `0..7`
    pub offset: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Total slots: blanks plus days.
    pub fn cell_count(&self) -> usize {
        self.offset as usize + self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Compute the grid for `(year, month)`.
///
/// Dates the backend cannot represent produce an empty grid.
pub fn month_grid(
    year: i32,
    month: u32,
    week_start: WeekStart,
    today: NaiveDate,
    min_date: Option<NaiveDate>,
) -> MonthGrid {
    let empty = MonthGrid {
        year,
        month,
        offset: 0,
        days: Vec::new(),
    };

    let (Some(offset), Some(count)) = (
        leading_offset(year, month, week_start),
        days_in_month(year, month),
    ) else {
        return empty;
    };

    let days = (1..=count)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| DayCell {
            day: date.day(),
            key: DateKey::new(date),
            is_today: date == today,
            is_disabled: min_date.is_some_and(|min| date < min),
        })
        .collect();

    MonthGrid {
        year,
        month,
        offset,
        days,
    }
}

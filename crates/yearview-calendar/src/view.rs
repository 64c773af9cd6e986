//! View state controller: which granularity is shown and where.

use chrono::{Datelike, NaiveDate};
use yearview_core::ViewMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Back,
    Forward,
}

/// Active view mode plus the year and date it is positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub current_year: i32,
    /// Anchor for month and day views
    pub current_date: Option<NaiveDate>,
}

impl ViewState {
    pub fn new(mode: ViewMode, current_year: i32, current_date: Option<NaiveDate>) -> Self {
        Self {
            mode,
            current_year,
            current_date,
        }
    }

    /// The date month/day views render, falling back to Jan 1 of the current year.
    pub fn focused_date(&self) -> Option<NaiveDate> {
        self.current_date
            .or_else(|| NaiveDate::from_ymd_opt(self.current_year, 1, 1))
    }

    pub fn prev(&mut self) {
        self.step(Step::Back);
    }

    pub fn next(&mut self) {
        self.step(Step::Forward);
    }

    fn step(&mut self, step: Step) {
        match self.mode {
            ViewMode::Year => {
                let year = match step {
                    Step::Back => self.current_year.saturating_sub(1),
                    Step::Forward => self.current_year.saturating_add(1),
                };
                self.set_year(year);
            }
            ViewMode::Month => {
                let Some(anchor) = self.focused_date() else {
                    return;
                };
                let target = match step {
                    Step::Back => shift_month(anchor, -1),
                    Step::Forward => shift_month(anchor, 1),
                };
                if let Some(date) = target {
                    self.anchor_to(date);
                }
            }
            ViewMode::Day => {
                let Some(anchor) = self.focused_date() else {
                    return;
                };
                let target = match step {
                    Step::Back => anchor.pred_opt(),
                    Step::Forward => anchor.succ_opt(),
                };
                if let Some(date) = target {
                    self.anchor_to(date);
                }
            }
        }
    }

    /// Jump to `year`. The current date follows so it stays inside the year.
    pub fn set_year(&mut self, year: i32) {
        self.current_year = year;
        self.current_date = self.current_date.and_then(|d| with_year(d, year));
    }

    pub fn set_view(&mut self, mode: ViewMode) {
        self.mode = mode;
        if self.current_date.is_none() {
            self.current_date = NaiveDate::from_ymd_opt(self.current_year, 1, 1);
        }
    }

    /// Focus a single date in day view.
    pub fn focus_date(&mut self, date: NaiveDate) {
        self.mode = ViewMode::Day;
        self.anchor_to(date);
    }

    fn anchor_to(&mut self, date: NaiveDate) {
        self.current_date = Some(date);
        self.current_year = date.year();
    }
}

/// First day of the month `delta` months away from `date`'s month.
fn shift_month(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let index = date.year().checked_mul(12)? + date.month0() as i32 + delta;
    let year = index.div_euclid(12);
    let month0 = index.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

/// Same month and day in another year. Feb 29 rolls over to Mar 1.
fn with_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year).or_else(|| {
        NaiveDate::from_ymd_opt(year, date.month(), 1)
            .and_then(|first| first.checked_add_days(chrono::Days::new(u64::from(date.day0()))))
    })
}

//! The calendar widget: owns view state and events, drives a surface.

use std::collections::VecDeque;
use std::time::Instant;

use chrono::{Datelike, Local, NaiveDate};
use yearview_core::ViewMode;

use crate::config::{CalendarConfig, CalendarOptions};
use crate::error::CalendarError;
use crate::panel::DayPopover;
use crate::render::{build_header, build_view, HeaderModel, View};
use crate::store::EventStore;
use crate::surface::{Host, Surface};
use crate::types::{DateKey, EventEntry};
use crate::view::ViewState;

/// Stateful calendar bound to one surface.
///
/// Every mutation re-renders the whole view. After the first render, redraws
/// are deferred by the configured fade; the host drives them through
/// [`CalendarWidget::poll_transitions`].
pub struct CalendarWidget<S: Surface> {
    surface: S,
    config: CalendarConfig,
    events: EventStore,
    state: ViewState,
    today: NaiveDate,
    first_render: bool,
    pending: VecDeque<Instant>,
}

impl<S: Surface> CalendarWidget<S> {
    /// Create a widget on an already resolved surface.
    pub fn new(surface: S, options: CalendarOptions) -> Self {
        Self::with_today(surface, options, Local::now().date_naive())
    }

    /// Like [`CalendarWidget::new`] with an explicit "today".
    pub fn with_today(mut surface: S, options: CalendarOptions, today: NaiveDate) -> Self {
        let config = CalendarConfig::from(&options.settings);
        let events = EventStore::from_map(options.events);

        let (current_year, current_date) = match config.display_year() {
            Some(year) => (year, NaiveDate::from_ymd_opt(year, 1, 1)),
            None => (today.year(), Some(today)),
        };
        let state = ViewState::new(config.initial_view(), current_year, current_date);

        surface.apply_style(config.style());

        let mut widget = Self {
            surface,
            config,
            events,
            state,
            today,
            first_render: true,
            pending: VecDeque::new(),
        };
        widget.render();
        widget
    }

    /// Resolve `selector` through the host and mount on it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MountNotFound`] when the host has no such element.
    pub fn mount<H>(host: &mut H, selector: &str, options: CalendarOptions) -> Result<Self, CalendarError>
    where
        H: Host<Surface = S>,
    {
        let surface = host
            .resolve(selector)
            .ok_or_else(|| CalendarError::MountNotFound(selector.to_string()))?;
        tracing::info!("Mounting calendar on {}", selector);
        Ok(Self::new(surface, options))
    }

    pub fn prev(&mut self) {
        self.state.prev();
        tracing::debug!("Navigated back: {:?}", self.state);
        self.render();
    }

    pub fn next(&mut self) {
        self.state.next();
        tracing::debug!("Navigated forward: {:?}", self.state);
        self.render();
    }

    pub fn set_year(&mut self, year: i32) {
        self.state.set_year(year);
        tracing::debug!("Year set to {}", year);
        self.render();
    }

    pub fn set_view(&mut self, mode: ViewMode) {
        self.state.set_view(mode);
        tracing::debug!("View set to {}", mode);
        self.render();
    }

    /// Handle a change of the header view selector.
    pub fn select_view(&mut self, value: &str) {
        match ViewMode::parse(value) {
            Some(mode) => self.set_view(mode),
            None => tracing::debug!("Ignoring unknown view {:?}", value),
        }
    }

    /// Handle a change of the header date input: focus that date in day view.
    pub fn on_date_input(&mut self, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        match DateKey::parse(value) {
            Ok(key) => {
                self.state.focus_date(key.date());
                tracing::debug!("Focused {}", key);
                self.render();
            }
            Err(e) => tracing::debug!("Ignoring date input: {}", e),
        }
    }

    /// Handle a click or Enter/Space on a day cell.
    ///
    /// Returns the popover to show, or `None` for disabled and malformed
    /// dates. With `shift` held in month view the day is opened in day view.
    pub fn activate_day(&mut self, date: &str, shift: bool) -> Option<DayPopover> {
        let key = self.parse_key(date)?;
        if self.is_disabled(key) {
            return None;
        }

        let popover = DayPopover::build(key, &self.events);
        if shift && self.state.mode == ViewMode::Month {
            self.state.focus_date(key.date());
            self.render();
        }
        Some(popover)
    }

    pub fn add_event(&mut self, date: &str, entry: EventEntry) {
        let Some(key) = self.parse_key(date) else {
            return;
        };
        self.events.add(key, entry);
        tracing::debug!("Added event on {}", key);
        self.render();
    }

    /// Remove all events of a date, or the one at `index`.
    pub fn remove_event(&mut self, date: &str, index: Option<usize>) {
        let Some(key) = self.parse_key(date) else {
            return;
        };
        if !self.events.contains(key) {
            return;
        }
        if self.events.remove(key, index) {
            tracing::debug!("Removed event(s) on {}", key);
        }
        self.render();
    }

    pub fn get_event(&self, date: &str) -> Option<&[EventEntry]> {
        DateKey::parse(date)
            .ok()
            .and_then(|key| self.events.get(key))
    }

    /// Rebuild the view. The first render is drawn at once, later ones fade.
    pub fn render(&mut self) {
        let fade = self.config.transition();
        if self.first_render || fade.is_zero() {
            self.first_render = false;
            self.draw();
            return;
        }

        self.surface.begin_fade(fade);
        self.pending.push_back(Instant::now() + fade);
    }

    /// Perform every redraw due at `now`. Returns how many were drawn.
    pub fn poll_transitions(&mut self, now: Instant) -> usize {
        let mut drawn = 0;
        while self.pending.front().is_some_and(|due| *due <= now) {
            self.pending.pop_front();
            self.draw();
            drawn += 1;
        }
        drawn
    }

    /// Perform all queued redraws immediately.
    pub fn flush_transitions(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        for _ in 0..count {
            self.draw();
        }
        count
    }

    /// When the earliest queued redraw is due.
    pub fn next_transition_due(&self) -> Option<Instant> {
        self.pending.front().copied()
    }

    pub fn header(&self) -> HeaderModel {
        build_header(&self.state, &self.config)
    }

    pub fn view(&self) -> View {
        build_view(&self.state, &self.config, &self.events, self.today)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn is_disabled(&self, key: DateKey) -> bool {
        self.config.min_date().is_some_and(|min| key.date() < min)
    }

    fn parse_key(&self, date: &str) -> Option<DateKey> {
        DateKey::parse(date)
            .map_err(|e| tracing::debug!("Ignoring input: {}", e))
            .ok()
    }

    fn draw(&mut self) {
        let header = self.header();
        let view = self.view();
        self.surface.draw(&header, &view);
    }
}

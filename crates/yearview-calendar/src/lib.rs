//! Embeddable year/month/day calendar widget.
//!
//! Computes date grids, maps dated events to declarative cell descriptions
//! and drives a host-provided surface.

pub mod cells;
pub mod config;
pub mod error;
pub mod grid;
pub mod html;
pub mod init;
pub mod panel;
pub mod render;
pub mod store;
pub mod surface;
pub mod types;
pub mod view;
pub mod widget;

pub use cells::{contrast_color, describe_cell, Background, Band, CellDescription, Fill, Foreground};
pub use config::{CalendarConfig, CalendarOptions};
pub use error::CalendarError;
pub use grid::{month_grid, DayCell, MonthGrid};
pub use html::{HtmlHost, HtmlSurface};
pub use init::{init_calendar, InitOptions, CALENDAR_MARKER};
pub use panel::{place_tooltip, DayPanel, DayPopover, Placement, Rect};
pub use render::{HeaderModel, MonthView, View, YearView};
pub use store::{EventMap, EventSpec, EventStore};
pub use surface::{Host, Surface};
pub use types::{DateKey, EventEntry};
pub use view::ViewState;
pub use widget::CalendarWidget;
pub use yearview_core::{StyleVariant, ViewMode, WeekStart};

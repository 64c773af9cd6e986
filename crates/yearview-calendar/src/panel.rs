//! Day-focus panel, day click popover and tooltip placement.

use crate::cells::{contrast_color, Foreground};
use crate::store::EventStore;
use crate::types::DateKey;

pub const NO_EVENTS_MESSAGE: &str = "No events for this date.";
pub const POPOVER_FOOTER: &str = "Click outside to close";

/// Distance kept between the tooltip and the viewport edge.
const TOOLTIP_MARGIN: f64 = 8.0;
/// Gap between the pointer and the tooltip.
const TOOLTIP_GAP: f64 = 12.0;
const DEFAULT_TOOLTIP_WIDTH: f64 = 200.0;
const DEFAULT_TOOLTIP_HEIGHT: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub label: String,
    pub background: Option<String>,
    pub foreground: Option<Foreground>,
}

/// Events of the focused date, listed in stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPanel {
    pub key: DateKey,
    pub entries: Vec<PanelEntry>,
}

impl DayPanel {
    pub fn build(key: DateKey, store: &EventStore) -> Self {
        let entries = store
            .events_on(key)
            .iter()
            .enumerate()
            .map(|(i, entry)| PanelEntry {
                label: entry
                    .text()
                    .map_or_else(|| format!("Event {}", i + 1), str::to_string),
                background: entry.color().map(str::to_string),
                foreground: entry.color().and_then(contrast_color),
            })
            .collect();

        Self { key, entries }
    }

    /// Message to show instead of the list when the date has no events.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.entries.is_empty().then_some(NO_EVENTS_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopoverItem {
    /// Swatch color, `transparent` when the event has none
    pub swatch: String,
    pub text: String,
}

/// Popover shown when a day is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPopover {
    pub key: DateKey,
    pub items: Vec<PopoverItem>,
    pub empty_message: Option<&'static str>,
    pub footer: &'static str,
}

impl DayPopover {
    pub fn build(key: DateKey, store: &EventStore) -> Self {
        let items: Vec<PopoverItem> = store
            .events_on(key)
            .iter()
            .map(|entry| PopoverItem {
                swatch: entry.color().unwrap_or("transparent").to_string(),
                text: entry.text().unwrap_or_default().to_string(),
            })
            .collect();

        Self {
            key,
            empty_message: items.is_empty().then_some(NO_EVENTS_MESSAGE),
            items,
            footer: POPOVER_FOOTER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Top-left corner for a tooltip, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

/// Place a tooltip near the pointer, or the anchor center for keyboard input.
///
/// Horizontally centered and clamped to the viewport; above the pointer
/// unless that would leave the top margin, then below.
pub fn place_tooltip(
    pointer: Option<(f64, f64)>,
    anchor: Rect,
    size: Option<(f64, f64)>,
    viewport_width: f64,
) -> Placement {
    let (width, height) = size.unwrap_or((DEFAULT_TOOLTIP_WIDTH, DEFAULT_TOOLTIP_HEIGHT));
    let (px, py) = pointer.unwrap_or_else(|| anchor.center());

    let left = (px - width / 2.0).round();
    let left = left
        .min(viewport_width - width - TOOLTIP_MARGIN)
        .max(TOOLTIP_MARGIN);

    let mut top = (py - height - TOOLTIP_GAP).round();
    if top < TOOLTIP_MARGIN {
        top = (py + TOOLTIP_GAP).round();
    }

    Placement { left, top }
}

//! Event rendering policy.
//!
//! Maps a day cell and the event store to a declarative description that a
//! surface can draw without knowing anything about events.

use crate::grid::DayCell;
use crate::store::EventStore;
use crate::types::{DateKey, EventEntry};

/// Separator between event texts in a cell tooltip.
pub const TOOLTIP_SEPARATOR: &str = " | ";

/// Luminance above which text on the color switches to the dark foreground.
const LUMINANCE_THRESHOLD: f64 = 0.6;

/// Text color drawn on top of an event color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foreground {
    Dark,
    Light,
}

impl Foreground {
    pub fn as_hex(&self) -> &'static str {
        match self {
            Self::Dark => "#0b1220",
            Self::Light => "#ffffff",
        }
    }
}

/// A fill is either the theme accent or an explicit event color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    Accent,
    Color(String),
}

impl Fill {
    fn for_entry(entry: &EventEntry) -> Self {
        entry
            .color()
            .map_or(Self::Accent, |c| Self::Color(c.to_string()))
    }
}

/// Horizontal band covering `start..end` percent of the cell width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub fill: Fill,
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    None,
    Solid(Fill),
    Bands(Vec<Band>),
}

/// Everything a surface needs to draw one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellDescription {
    pub key: DateKey,
    pub label: String,
    pub background: Background,
    pub foreground: Option<Foreground>,
    pub tooltip: Option<String>,
    pub disabled: bool,
    pub today: bool,
}

/// Relative luminance of a `#rgb` / `#rrggbb` color in `[0, 1]`.
///
/// Other color formats are not understood and yield `None`.
pub fn luminance(color: &str) -> Option<f64> {
    let hex = color.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);

    Some((0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) / 255.0)
}

/// Foreground that stays readable on `color`.
pub fn contrast_color(color: &str) -> Option<Foreground> {
    let lum = luminance(color)?;
    Some(if lum > LUMINANCE_THRESHOLD {
        Foreground::Dark
    } else {
        Foreground::Light
    })
}

/// Split the cell into equal bands, one per event in stored order.
pub fn event_bands(events: &[EventEntry]) -> Vec<Band> {
    if events.is_empty() {
        return Vec::new();
    }
    let slice = 100.0 / events.len() as f64;
    events
        .iter()
        .enumerate()
        .map(|(i, entry)| Band {
            fill: Fill::for_entry(entry),
            start: (i as f64 * slice).round() as u32,
            end: ((i + 1) as f64 * slice).round() as u32,
        })
        .collect()
}

/// Event texts joined for a hover tooltip, skipping empty ones.
pub fn tooltip_text(events: &[EventEntry]) -> Option<String> {
    let texts: Vec<&str> = events.iter().filter_map(EventEntry::text).collect();
    (!texts.is_empty()).then(|| texts.join(TOOLTIP_SEPARATOR))
}

pub fn describe_cell(cell: &DayCell, store: &EventStore) -> CellDescription {
    let events = store.events_on(cell.key);

    let (background, foreground) = match events {
        [] => (Background::None, None),
        [single] => {
            let foreground = single.color().and_then(|c| {
                let fg = contrast_color(c);
                if fg.is_none() {
                    tracing::debug!("No contrast rule for color {:?} on {}", c, cell.key);
                }
                fg
            });
            (Background::Solid(Fill::for_entry(single)), foreground)
        }
        many => (Background::Bands(event_bands(many)), None),
    };

    CellDescription {
        key: cell.key,
        label: cell.day.to_string(),
        background,
        foreground,
        tooltip: tooltip_text(events),
        disabled: cell.is_disabled,
        today: cell.is_today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(key: &str) -> DayCell {
        let key = DateKey::parse(key).unwrap();
        DayCell {
            day: chrono::Datelike::day(&key.date()),
            key,
            is_today: false,
            is_disabled: false,
        }
    }

    #[test]
    fn test_contrast_extremes() {
        assert_eq!(contrast_color("#ffffff"), Some(Foreground::Dark));
        assert_eq!(contrast_color("#000000"), Some(Foreground::Light));
        assert_eq!(contrast_color("#fff"), Some(Foreground::Dark));
        assert_eq!(contrast_color("000"), Some(Foreground::Light));
    }

    #[test]
    fn test_contrast_threshold_uses_weighted_channels() {
        // Pure green: 0.7152 > 0.6
        assert_eq!(contrast_color("#00ff00"), Some(Foreground::Dark));
        // Pure red: 0.2126
        assert_eq!(contrast_color("#ff0000"), Some(Foreground::Light));
        assert!((luminance("#ffffff").unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_unknown_formats() {
        assert_eq!(contrast_color("red"), None);
        assert_eq!(contrast_color("rgb(0,0,0)"), None);
        assert_eq!(contrast_color("#12345"), None);
        assert_eq!(contrast_color("#ggg"), None);
        assert_eq!(contrast_color("#+0+0+0"), None);
    }

    #[test]
    fn test_three_bands_split_in_thirds() {
        let events = vec![
            EventEntry::new("#f00", "a"),
            EventEntry::new("#0f0", "b"),
            EventEntry::new("#00f", "c"),
        ];
        let bands = event_bands(&events);
        let bounds: Vec<_> = bands.iter().map(|b| (b.start, b.end)).collect();
        assert_eq!(bounds, vec![(0, 33), (33, 67), (67, 100)]);
        assert_eq!(bands[0].fill, Fill::Color("#f00".into()));
        assert_eq!(bands[2].fill, Fill::Color("#00f".into()));
    }

    #[test]
    fn test_plain_cell() {
        let desc = describe_cell(&cell("2024-02-10"), &EventStore::new());
        assert_eq!(desc.background, Background::None);
        assert_eq!(desc.foreground, None);
        assert_eq!(desc.tooltip, None);
        assert_eq!(desc.label, "10");
    }

    #[test]
    fn test_single_event_cell() {
        let c = cell("2024-02-10");
        let mut store = EventStore::new();
        store.add(c.key, EventEntry::new("#ffffff", "Snow day"));

        let desc = describe_cell(&c, &store);
        assert_eq!(desc.background, Background::Solid(Fill::Color("#ffffff".into())));
        assert_eq!(desc.foreground, Some(Foreground::Dark));
        assert_eq!(desc.tooltip.as_deref(), Some("Snow day"));
    }

    #[test]
    fn test_single_event_without_color_uses_accent() {
        let c = cell("2024-02-10");
        let mut store = EventStore::new();
        store.add(c.key, EventEntry::default().with_text("Plain"));

        let desc = describe_cell(&c, &store);
        assert_eq!(desc.background, Background::Solid(Fill::Accent));
        assert_eq!(desc.foreground, None);
    }

    #[test]
    fn test_multi_event_tooltip_skips_empty_texts() {
        let c = cell("2024-02-10");
        let mut store = EventStore::new();
        store.add(c.key, EventEntry::new("#111", "One"));
        store.add(c.key, EventEntry::default().with_color("#222"));
        store.add(c.key, EventEntry::new("#333", "Three"));

        let desc = describe_cell(&c, &store);
        assert_eq!(desc.tooltip.as_deref(), Some("One | Three"));
        assert!(matches!(desc.background, Background::Bands(ref b) if b.len() == 3));
        assert_eq!(desc.foreground, None);
    }
}

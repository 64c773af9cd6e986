//! HTML surface: renders views to markup using the widget's class names.

use std::collections::HashSet;
use std::time::Duration;

use askama::Template;
use yearview_core::{StyleVariant, ViewMode};

use crate::cells::{Background, CellDescription, Fill};
use crate::panel::{DayPanel, DayPopover};
use crate::render::{HeaderModel, MonthView, View, YearView};
use crate::surface::{Host, Surface};

const ACCENT: &str = "var(--accent)";

/// CSS functions an event color may use.
const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color",
];

/// Return the color when it is safe to place in a `style` declaration.
///
/// Accepts hex colors, plain keywords (`red`, `transparent`) and a single
/// color function over numeric arguments. Anything that could close the
/// declaration or pull in a resource is rejected.
pub fn css_color(color: &str) -> Option<&str> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        let valid =
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit());
        return valid.then_some(color);
    }

    if !color.is_empty() && color.bytes().all(|b| b.is_ascii_alphabetic() || b == b'-') {
        return Some(color);
    }

    let (name, rest) = color.split_once('(')?;
    let args = rest.strip_suffix(')')?;
    let known = COLOR_FUNCTIONS.iter().any(|f| f.eq_ignore_ascii_case(name));
    let plain_args = args.bytes().all(|b| {
        b.is_ascii_alphanumeric() || matches!(b, b' ' | b',' | b'.' | b'%' | b'/' | b'-' | b'+')
    });
    (known && plain_args).then_some(color)
}

fn fill_css(fill: &Fill) -> &str {
    match fill {
        Fill::Accent => ACCENT,
        Fill::Color(color) => css_color(color).unwrap_or_else(|| {
            tracing::debug!("Rejected event color {:?}, using accent", color);
            ACCENT
        }),
    }
}

/// Inline `background` value for a cell, if any.
pub fn background_css(background: &Background) -> Option<String> {
    match background {
        Background::None => None,
        Background::Solid(fill) => Some(fill_css(fill).to_string()),
        Background::Bands(bands) => {
            let stops: Vec<String> = bands
                .iter()
                .map(|b| format!("{} {}% {}%", fill_css(&b.fill), b.start, b.end))
                .collect();
            Some(format!("linear-gradient(90deg, {})", stops.join(", ")))
        }
    }
}

/// Whether every color in the background passed `css_color`.
fn background_is_verbatim(background: &Background) -> bool {
    let verbatim = |fill: &Fill| match fill {
        Fill::Accent => true,
        Fill::Color(color) => css_color(color).is_some(),
    };
    match background {
        Background::None => true,
        Background::Solid(fill) => verbatim(fill),
        Background::Bands(bands) => bands.iter().all(|b| verbatim(&b.fill)),
    }
}

struct ViewOption {
    value: ViewMode,
    label: &'static str,
    selected: bool,
}

struct HeaderMarkup {
    title: String,
    options: Vec<ViewOption>,
    show_arrows: bool,
    show_date_input: bool,
    date_input: String,
}

impl HeaderMarkup {
    fn new(header: &HeaderModel) -> Self {
        let options = [
            (ViewMode::Year, "Year"),
            (ViewMode::Month, "Month"),
            (ViewMode::Day, "Day"),
        ]
        .into_iter()
        .map(|(value, label)| ViewOption {
            value,
            label,
            selected: value == header.view,
        })
        .collect();

        Self {
            title: header.title.clone(),
            options,
            show_arrows: header.show_arrows,
            show_date_input: header.show_date_input,
            date_input: header.date_input.clone().unwrap_or_default(),
        }
    }
}

struct CellMarkup {
    class: &'static str,
    key: String,
    label: String,
    disabled: bool,
    tooltip: Option<String>,
    style: Option<String>,
}

impl CellMarkup {
    fn new(cell: &CellDescription) -> Self {
        let mut style = Vec::new();
        if let Some(bg) = background_css(&cell.background) {
            style.push(format!("background: {}", bg));
        }
        // A replaced color no longer matches the computed contrast.
        if let Some(fg) = cell.foreground.filter(|_| background_is_verbatim(&cell.background)) {
            style.push(format!("color: {}", fg.as_hex()));
        }

        Self {
            class: if cell.today { "day today" } else { "day" },
            key: cell.key.to_string(),
            label: cell.label.clone(),
            disabled: cell.disabled,
            tooltip: cell.tooltip.clone(),
            style: (!style.is_empty()).then(|| style.join("; ")),
        }
    }
}

struct MonthMarkup {
    class: &'static str,
    title: &'static str,
    year: i32,
    weekdays: Vec<&'static str>,
    blanks: u32,
    cells: Vec<CellMarkup>,
}

impl MonthMarkup {
    fn new(month: &MonthView, single: bool) -> Self {
        Self {
            class: if single { "month single-month" } else { "month" },
            title: month.title,
            year: month.year,
            weekdays: month.weekdays.to_vec(),
            blanks: month.offset,
            cells: month.cells.iter().map(CellMarkup::new).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "calendar.html")]
struct CalendarTemplate<'a> {
    wrapper_class: &'static str,
    header: Option<HeaderMarkup>,
    body: &'a str,
}

#[derive(Template)]
#[template(path = "year.html")]
struct YearTemplate {
    months_per_row: u32,
    months: Vec<MonthMarkup>,
}

#[derive(Template)]
#[template(path = "month_view.html")]
struct MonthTemplate {
    month: MonthMarkup,
}

struct EntryMarkup {
    label: String,
    style: Option<String>,
}

#[derive(Template)]
#[template(path = "day.html")]
struct DayTemplate {
    placeholder: Option<&'static str>,
    entries: Vec<EntryMarkup>,
}

impl DayTemplate {
    fn new(panel: &DayPanel) -> Self {
        let entries = panel
            .entries
            .iter()
            .map(|entry| {
                let mut style = Vec::new();
                let mut foreground = entry.foreground;
                if let Some(bg) = &entry.background {
                    match css_color(bg) {
                        Some(color) => style.push(format!("background: {}", color)),
                        None => {
                            style.push(format!("background: {}", ACCENT));
                            foreground = None;
                        }
                    }
                }
                if let Some(fg) = foreground {
                    style.push(format!("color: {}", fg.as_hex()));
                }
                EntryMarkup {
                    label: entry.label.clone(),
                    style: (!style.is_empty()).then(|| style.join("; ")),
                }
            })
            .collect();

        Self {
            placeholder: panel.placeholder(),
            entries,
        }
    }
}

struct SwatchMarkup {
    swatch: String,
    text: String,
}

#[derive(Template)]
#[template(path = "popover.html")]
struct PopoverTemplate {
    key: String,
    empty_message: Option<&'static str>,
    items: Vec<SwatchMarkup>,
    footer: &'static str,
}

/// Markup for the calendar body.
pub fn render_view(view: &View) -> askama::Result<String> {
    match view {
        View::Year(year) => render_year(year),
        View::Month(month) => MonthTemplate {
            month: MonthMarkup::new(month, true),
        }
        .render(),
        View::Day(panel) => DayTemplate::new(panel).render(),
    }
}

fn render_year(year: &YearView) -> askama::Result<String> {
    YearTemplate {
        months_per_row: year.months_per_row,
        months: year
            .months
            .iter()
            .map(|month| MonthMarkup::new(month, false))
            .collect(),
    }
    .render()
}

/// Markup for a day click popover.
pub fn render_popover(popover: &DayPopover) -> askama::Result<String> {
    PopoverTemplate {
        key: popover.key.to_string(),
        empty_message: popover.empty_message,
        items: popover
            .items
            .iter()
            .map(|item| SwatchMarkup {
                swatch: css_color(&item.swatch).unwrap_or("transparent").to_string(),
                text: item.text.clone(),
            })
            .collect(),
        footer: popover.footer,
    }
    .render()
}

fn render_calendar(
    style: StyleVariant,
    header: &HeaderModel,
    view: &View,
) -> askama::Result<String> {
    let body = render_view(view)?;
    CalendarTemplate {
        wrapper_class: match style {
            StyleVariant::Light => "calendar-wrapper light",
            StyleVariant::Dark => "calendar-wrapper",
        },
        header: header.visible.then(|| HeaderMarkup::new(header)),
        body: &body,
    }
    .render()
}

/// Surface holding the latest rendered markup.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    selector: String,
    style: StyleVariant,
    opacity: f32,
    last_fade: Option<Duration>,
    markup: String,
    draws: usize,
}

impl HtmlSurface {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            style: StyleVariant::default(),
            opacity: 1.0,
            last_fade: None,
            markup: String::new(),
            draws: 0,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Latest full markup, wrapper included.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn last_fade(&self) -> Option<Duration> {
        self.last_fade
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }
}

impl Surface for HtmlSurface {
    fn apply_style(&mut self, style: StyleVariant) {
        self.style = style;
    }

    fn begin_fade(&mut self, duration: Duration) {
        self.opacity = 0.0;
        self.last_fade = Some(duration);
    }

    fn draw(&mut self, header: &HeaderModel, view: &View) {
        match render_calendar(self.style, header, view) {
            Ok(html) => {
                self.markup = html;
                self.draws += 1;
            }
            Err(e) => tracing::error!("Failed to render calendar into {}: {:?}", self.selector, e),
        }
        self.opacity = 1.0;
    }
}

/// Host exposing a fixed set of mount points. Each can be claimed once.
#[derive(Debug, Clone, Default)]
pub struct HtmlHost {
    roots: HashSet<String>,
    claimed: HashSet<String>,
}

impl HtmlHost {
    pub fn with_roots<I, T>(roots: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            claimed: HashSet::new(),
        }
    }

    pub fn is_claimed(&self, selector: &str) -> bool {
        self.claimed.contains(selector)
    }
}

impl Host for HtmlHost {
    type Surface = HtmlSurface;

    fn resolve(&mut self, selector: &str) -> Option<HtmlSurface> {
        if !self.roots.contains(selector) || self.claimed.contains(selector) {
            return None;
        }
        self.claimed.insert(selector.to_string());
        Some(HtmlSurface::new(selector))
    }
}

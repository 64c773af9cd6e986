use anyhow::{Context, Result};
use yearview_calendar::{CalendarOptions, CalendarWidget, EventStore, HtmlHost, CALENDAR_MARKER};
use yearview_core::{AppError, Config};

fn main() -> Result<()> {
    let (config, validation) = match Config::load_validated() {
        Ok(loaded) => loaded,
        Err(e) => {
            let err = AppError::classify(e);
            eprintln!("{}", err.user_message());
            return Err(err.into());
        }
    };
    yearview_core::init(&config.logging.filter)?;

    for warning in &validation.warnings {
        tracing::warn!("Config warning: {}", warning);
    }

    let mut options = CalendarOptions::from(config.calendar.clone());
    if let Some(path) = config.events_file.as_deref().filter(|p| p.exists()) {
        options.events = EventStore::load_file(path)?.to_map();
    }

    let mut host = HtmlHost::with_roots([CALENDAR_MARKER]);
    let mut widget = CalendarWidget::mount(&mut host, CALENDAR_MARKER, options)
        .map_err(AppError::from)
        .context("Failed to mount calendar")?;

    // Optional year to jump to, e.g. `yearview 1969`
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse::<i32>() {
            Ok(year) => widget.set_year(year),
            Err(_) => tracing::warn!("Ignoring non-numeric year {:?}", arg),
        }
    }
    widget.flush_transitions();

    tracing::info!(
        "Rendered {} view for {}",
        widget.state().mode,
        widget.header().title
    );
    println!("{}", widget.surface().markup());

    Ok(())
}

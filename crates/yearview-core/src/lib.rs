pub mod config;
pub mod error;

pub use config::{
    is_renderable_year, CalendarSettings, Config, LoggingConfig, StyleVariant, ValidationResult,
    ViewMode, WeekStart,
};
pub use error::{AppError, ConfigError, WidgetError};

use anyhow::Result;

/// Default log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initialize logging for the host process.
///
/// `RUST_LOG` wins over `filter`; an unparseable filter falls back to `info`.
pub fn init(filter: &str) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(filter))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    tracing::info!("Yearview core initialized");
    Ok(())
}

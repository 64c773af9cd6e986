//! Calendar-specific error types.

use thiserror::Error;
use yearview_core::{AppError, WidgetError};

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Mount point not found: {0}")]
    MountNotFound(String),

    #[error("Invalid date key: {0}")]
    InvalidDateKey(String),

    #[error("Invalid event map: {0}")]
    InvalidEventMap(#[from] serde_json::Error),
}

impl CalendarError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::MountNotFound(target) => format!("Nothing matches \"{}\" on this page", target),
            Self::InvalidDateKey(key) => format!("\"{}\" is not a YYYY-MM-DD date", key),
            Self::InvalidEventMap(_) => "Calendar events could not be read".to_string(),
        }
    }
}

impl From<CalendarError> for AppError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::MountNotFound(s) => AppError::Widget(WidgetError::MountNotFound(s)),
            CalendarError::InvalidEventMap(err) => {
                AppError::Widget(WidgetError::InvalidEventMap(err.to_string()))
            }
            CalendarError::InvalidDateKey(s) => {
                AppError::Other(anyhow::anyhow!("Invalid date key: {}", s))
            }
        }
    }
}

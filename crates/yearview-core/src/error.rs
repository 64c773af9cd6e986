//! Centralized error types for the Yearview application.
//!
//! This module provides a typed error hierarchy that:
//! - Separates configuration failures from widget failures
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

/// Top-level application error type.
///
/// Errors from the calendar crate convert into this type.
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Widget error: {0}")]
    Widget(#[from] WidgetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Recover the typed error carried by an `anyhow` chain.
    pub fn classify(err: anyhow::Error) -> Self {
        let err = match err.downcast::<ConfigError>() {
            Ok(config) => return AppError::Config(config),
            Err(err) => err,
        };
        match err.downcast::<std::io::Error>() {
            Ok(io) => AppError::Io(io),
            Err(other) => AppError::Other(other),
        }
    }

    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Widget(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration directory not found.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Widget errors surfaced to the host page.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Mount point not found: {0}")]
    MountNotFound(String),

    #[error("Invalid event map: {0}")]
    InvalidEventMap(String),
}

impl WidgetError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WidgetError::MountNotFound(_) => "The calendar could not find its place on the page.",
            WidgetError::InvalidEventMap(_) => "Calendar events could not be loaded.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_conversion() {
        let err = WidgetError::MountNotFound("#cal".into());
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::Widget(WidgetError::MountNotFound(_))));
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Config(ConfigError::ParseError("line 3".into()));
        assert_eq!(
            app_err.user_message(),
            "Configuration file is malformed. Check your settings."
        );
    }

    #[test]
    fn test_classify_recovers_typed_errors() {
        let config = anyhow::Error::from(ConfigError::Invalid("months_per_row".into()))
            .context("Failed to load config");
        assert!(matches!(
            AppError::classify(config),
            AppError::Config(ConfigError::Invalid(_))
        ));

        let io = anyhow::Error::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        let io = AppError::classify(io);
        assert!(matches!(io, AppError::Io(_)));
        assert_eq!(io.user_message(), "A file operation failed. Please try again.");

        let other = AppError::classify(anyhow::anyhow!("boom"));
        assert!(matches!(other, AppError::Other(_)));
    }

    #[test]
    fn test_display_keeps_detail() {
        let err = WidgetError::MountNotFound(".calendar".into());
        assert!(err.to_string().contains(".calendar"));
    }
}

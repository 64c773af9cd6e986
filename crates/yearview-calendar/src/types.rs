//! Calendar date keys and event annotations.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A local calendar date, written as `YYYY-MM-DD` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a key from year, 1-based month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Parse `YYYY-MM-DD`. Every part must be plain digits and the date must exist.
    ///
    /// The year may carry a leading `-`, so every key produced by `Display`
    /// parses back.
    pub fn parse(value: &str) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidDateKey(value.to_string());

        let trimmed = value.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = unsigned.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if [y, m, d]
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(invalid());
        }

        let year: i32 = y.parse().map_err(|_| invalid())?;
        let year = if negative { -year } else { year };
        let month: u32 = m.parse().map_err(|_| invalid())?;
        let day: u32 = d.parse().map_err(|_| invalid())?;

        Self::from_ymd(year, month, day).ok_or_else(invalid)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for DateKey {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

/// A user-supplied annotation attached to a date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl EventEntry {
    pub fn new(color: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            text: Some(text.into()),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Display color, treating an empty string as unset.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref().filter(|c| !c.is_empty())
    }

    /// Label, treating an empty string as unset.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_is_zero_padded() {
        let key = DateKey::from_ymd(2024, 3, 5).unwrap();
        assert_eq!(key.to_string(), "2024-03-05");

        let key = DateKey::from_ymd(987, 1, 1).unwrap();
        assert_eq!(key.to_string(), "0987-01-01");
    }

    #[test]
    fn test_date_key_parse() {
        let key: DateKey = "2024-02-29".parse().unwrap();
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        // Unpadded parts are accepted, output is always padded
        let key = DateKey::parse("2024-2-9").unwrap();
        assert_eq!(key.to_string(), "2024-02-09");
    }

    #[test]
    fn test_date_key_display_parses_back() {
        for (year, text) in [
            (-5, "-005-01-01"),
            (-2024, "-2024-01-01"),
            (0, "0000-01-01"),
            (10000, "10000-01-01"),
        ] {
            let key = DateKey::from_ymd(year, 1, 1).unwrap();
            assert_eq!(key.to_string(), text);
            assert_eq!(DateKey::parse(text).unwrap(), key);
        }
    }

    #[test]
    fn test_date_key_rejects_malformed() {
        for bad in [
            "",
            "2024",
            "2024-01",
            "2024-01-01-01",
            "2023-02-29",
            "2024-13-01",
            "2024-00-10",
            "2024-+1-01",
            "abcd-ef-gh",
            "2024-01-01T00:00",
            "--2024-01-01",
            "-",
            "+2024-01-01",
        ] {
            assert!(DateKey::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_event_entry_empty_strings_are_unset() {
        let entry = EventEntry {
            color: Some(String::new()),
            text: Some("Standup".into()),
        };
        assert_eq!(entry.color(), None);
        assert_eq!(entry.text(), Some("Standup"));
    }

    #[test]
    fn test_event_entry_json() {
        let entry: EventEntry = serde_json::from_str(r##"{"color": "#f00"}"##).unwrap();
        assert_eq!(entry.color(), Some("#f00"));
        assert_eq!(entry.text, None);

        let json = serde_json::to_string(&EventEntry::default().with_text("Off")).unwrap();
        assert_eq!(json, r#"{"text":"Off"}"#);
    }
}

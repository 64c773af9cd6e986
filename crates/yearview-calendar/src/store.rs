//! In-memory event store keyed by calendar date.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::types::{DateKey, EventEntry};

/// One entry or a list of entries for a date, as accepted in event maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventSpec {
    Many(Vec<EventEntry>),
    One(EventEntry),
}

impl EventSpec {
    fn into_entries(self) -> Vec<EventEntry> {
        match self {
            Self::Many(entries) => entries,
            Self::One(entry) => vec![entry],
        }
    }
}

/// Event map as supplied by the host: `{ "YYYY-MM-DD": entry | [entry, ...] }`.
pub type EventMap = BTreeMap<String, EventSpec>;

/// Date to events mapping. Per-date order is insertion order and a date
/// never maps to an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    entries: BTreeMap<DateKey, Vec<EventEntry>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a host event map.
    ///
    /// Keys that are not valid dates are skipped, empty lists are dropped.
    pub fn from_map(map: EventMap) -> Self {
        let mut store = Self::new();
        for (raw_key, spec) in map {
            let key = match DateKey::parse(&raw_key) {
                Ok(key) => key,
                Err(e) => {
                    tracing::warn!("Skipping events: {}", e);
                    continue;
                }
            };
            for entry in spec.into_entries() {
                store.add(key, entry);
            }
        }
        store
    }

    /// Parse a JSON event map.
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        let map: EventMap = serde_json::from_str(json)?;
        Ok(Self::from_map(map))
    }

    /// Read a JSON event map from disk.
    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read events file {}", path.display()))?;
        let store = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse events file {}", path.display()))?;
        tracing::debug!("Loaded {} dated events from {}", store.len(), path.display());
        Ok(store)
    }

    /// Append an entry to the date's list, creating it if needed.
    pub fn add(&mut self, key: DateKey, entry: EventEntry) {
        self.entries.entry(key).or_default().push(entry);
    }

    /// Remove the whole date (`index == None`) or a single entry.
    ///
    /// Returns whether anything was removed. Unknown dates and out-of-range
    /// indexes leave the store untouched.
    pub fn remove(&mut self, key: DateKey, index: Option<usize>) -> bool {
        let Some(index) = index else {
            return self.entries.remove(&key).is_some();
        };

        let Some(list) = self.entries.get_mut(&key) else {
            return false;
        };
        if index >= list.len() {
            return false;
        }
        list.remove(index);
        if list.is_empty() {
            self.entries.remove(&key);
        }
        true
    }

    pub fn get(&self, key: DateKey) -> Option<&[EventEntry]> {
        self.entries.get(&key).map(Vec::as_slice)
    }

    /// Events for a date, empty when there are none.
    pub fn events_on(&self, key: DateKey) -> &[EventEntry] {
        self.get(key).unwrap_or_default()
    }

    pub fn contains(&self, key: DateKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of dates carrying at least one event.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DateKey, &[EventEntry])> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Convert back to the host event map shape.
    pub fn to_map(&self) -> EventMap {
        self.entries
            .iter()
            .map(|(k, v)| (k.to_string(), EventSpec::Many(v.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut store = EventStore::new();
        let k = key("2024-05-01");
        store.add(k, EventEntry::new("#f00", "first"));
        store.add(k, EventEntry::new("#0f0", "second"));
        store.add(k, EventEntry::new("#00f", "third"));

        let texts: Vec<_> = store.events_on(k).iter().filter_map(|e| e.text()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_add_then_get_single() {
        let mut store = EventStore::new();
        let entry = EventEntry::new("#123456", "Dentist");
        store.add(key("2024-06-10"), entry.clone());
        assert_eq!(store.get(key("2024-06-10")), Some(&[entry][..]));
    }

    #[test]
    fn test_remove_last_entry_deletes_date() {
        let mut store = EventStore::new();
        let k = key("2024-07-04");
        store.add(k, EventEntry::default().with_text("Fireworks"));

        assert!(store.remove(k, Some(0)));
        assert_eq!(store.get(k), None);
        assert!(!store.contains(k));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_whole_date() {
        let mut store = EventStore::new();
        let k = key("2024-07-04");
        store.add(k, EventEntry::default());
        store.add(k, EventEntry::default());

        assert!(store.remove(k, None));
        assert_eq!(store.get(k), None);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut store = EventStore::new();
        let k = key("2024-07-04");
        store.add(k, EventEntry::default().with_text("a"));

        assert!(!store.remove(k, Some(3)));
        assert!(!store.remove(key("2024-07-05"), None));
        assert_eq!(store.events_on(k).len(), 1);
    }

    #[test]
    fn test_from_json_accepts_one_or_many() {
        let store = EventStore::from_json(
            r##"{
                "2024-01-01": {"color": "#ff0000", "text": "New Year"},
                "2024-01-02": [{"text": "a"}, {"text": "b"}],
                "2024-01-03": [],
                "not-a-date": {"text": "ignored"}
            }"##,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.events_on(key("2024-01-01"))[0].text(), Some("New Year"));
        assert_eq!(store.events_on(key("2024-01-02")).len(), 2);
        assert!(!store.contains(key("2024-01-03")));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(
            EventStore::from_json("[1, 2]"),
            Err(CalendarError::InvalidEventMap(_))
        ));
    }

    #[test]
    fn test_to_map_uses_wire_keys() {
        let mut store = EventStore::new();
        store.add(key("2024-1-9"), EventEntry::default().with_text("x"));
        let map = store.to_map();
        assert!(map.contains_key("2024-01-09"));
    }
}

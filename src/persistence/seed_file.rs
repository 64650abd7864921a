//! Startup seed file: a JSON array of event records.

use std::path::Path;

use anyhow::Context;

use crate::domain::NewEvent;

/// Reads and decodes the seed file at `path`.
///
/// Entries that do not decode as an event are skipped with a warning; any
/// `id` carried by an entry is ignored.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array.
pub fn read_seed_file(path: &Path) -> anyhow::Result<Vec<NewEvent>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let entries: Vec<serde_json::Value> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing seed file {}", path.display()))?;

    let total = entries.len();
    let events: Vec<NewEvent> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(event) => Some(event),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping malformed seed entry");
                None
            }
        })
        .collect();

    tracing::debug!(total, loaded = events.len(), "seed file decoded");
    Ok(events)
}

/// Loads seed events, logging and swallowing any failure.
///
/// Startup must not abort because of a missing or broken seed file, so an
/// error yields an empty list.
#[must_use]
pub fn load_seed_events(path: &Path) -> Vec<NewEvent> {
    match read_seed_file(path) {
        Ok(events) => {
            tracing::info!(path = %path.display(), count = events.len(), "seed events loaded");
            events
        }
        Err(err) => {
            tracing::error!(path = %path.display(), error = ?err, "failed to load seed events");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::EventCategory;

    fn seed_file(contents: &str) -> tempfile::NamedTempFile {
        let Ok(mut file) = tempfile::NamedTempFile::new() else {
            panic!("temp file");
        };
        let Ok(()) = file.write_all(contents.as_bytes()) else {
            panic!("write temp file");
        };
        file
    }

    const VALID_ENTRY: &str = r#"{
        "id": 17,
        "title": "Full Moon Sound Bath",
        "description": "Crystal bowls and gongs under the full moon.",
        "shortDescription": "Sound bath at the full moon.",
        "date": "2031-02-14T19:00:00Z",
        "time": "7:00 PM - 8:30 PM",
        "category": "Healing",
        "location": "Studio 3",
        "isFeatured": 1,
        "tags": ["gong", "moon"]
    }"#;

    #[test]
    fn reads_valid_entries() {
        let file = seed_file(&format!("[{VALID_ENTRY}]"));
        let Ok(events) = read_seed_file(file.path()) else {
            panic!("seed should load");
        };
        assert_eq!(events.len(), 1);
        let Some(event) = events.first() else {
            panic!("missing event");
        };
        assert_eq!(event.category, EventCategory::Healing);
        assert_eq!(event.is_featured, 1);
        assert_eq!(event.tags, ["gong", "moon"]);
    }

    #[test]
    fn skips_malformed_entries() {
        let bad = r#"{ "title": "No date", "category": "Dance" }"#;
        let file = seed_file(&format!("[{bad}, {VALID_ENTRY}]"));
        let Ok(events) = read_seed_file(file.path()) else {
            panic!("seed should load");
        };
        assert_eq!(events.len(), 1);
    }

    /// Loads a one-entry seed file built from [`VALID_ENTRY`] with `field`
    /// replaced by `value`, asserting the entry survives.
    fn load_variant(field: &str, value: serde_json::Value) -> NewEvent {
        let Ok(mut entry) = serde_json::from_str::<serde_json::Value>(VALID_ENTRY) else {
            panic!("fixture should parse");
        };
        entry[field] = value;
        let file = seed_file(&serde_json::Value::Array(vec![entry]).to_string());
        let Ok(mut events) = read_seed_file(file.path()) else {
            panic!("seed should load");
        };
        assert_eq!(events.len(), 1, "entry with {field} variant was skipped");
        let Some(event) = events.pop() else {
            panic!("missing event");
        };
        event
    }

    #[test]
    fn naive_datetime_is_read_as_utc() {
        let event = load_variant("date", "2031-01-01T19:00:00".into());
        assert_eq!(event.date.to_rfc3339(), "2031-01-01T19:00:00+00:00");
    }

    #[test]
    fn date_only_is_read_as_utc_midnight() {
        let event = load_variant("date", "2031-01-01".into());
        assert_eq!(event.date.to_rfc3339(), "2031-01-01T00:00:00+00:00");
    }

    #[test]
    fn null_tags_default_to_empty() {
        let event = load_variant("tags", serde_json::Value::Null);
        assert!(event.tags.is_empty());
    }

    #[test]
    fn null_featured_flag_defaults_to_zero() {
        let event = load_variant("isFeatured", serde_json::Value::Null);
        assert_eq!(event.is_featured, 0);
    }

    #[test]
    fn unparseable_date_skips_the_entry() {
        let Ok(mut entry) = serde_json::from_str::<serde_json::Value>(VALID_ENTRY) else {
            panic!("fixture should parse");
        };
        entry["date"] = "sometime in spring".into();
        let file = seed_file(&format!("[{entry}, {VALID_ENTRY}]"));
        let Ok(events) = read_seed_file(file.path()) else {
            panic!("seed should load");
        };
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn missing_file_is_an_error_but_load_swallows_it() {
        let path = Path::new("/definitely/not/here/events.json");
        assert!(read_seed_file(path).is_err());
        assert!(load_seed_events(path).is_empty());
    }

    #[test]
    fn non_array_document_yields_empty_store() {
        let file = seed_file(r#"{ "events": [] }"#);
        assert!(read_seed_file(file.path()).is_err());
        assert!(load_seed_events(file.path()).is_empty());
    }

    #[test]
    fn bundled_seed_file_decodes() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/events.json");
        let Ok(events) = read_seed_file(&path) else {
            panic!("bundled seed file should load");
        };
        assert!(!events.is_empty());
        assert!(events.iter().filter(|e| e.is_featured == 1).count() <= 1);
    }
}

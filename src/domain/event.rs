//! Event record, its insert form, and partial updates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_with::{DefaultOnNull, serde_as};
use utoipa::ToSchema;

use super::{EventCategory, EventId};

/// Value of [`Event::is_featured`] marking an event for homepage promotion.
pub const FEATURED: i32 = 1;

/// A single schedulable item in the catalog.
///
/// Serialized in camelCase to match the seed file and the site's frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier (immutable after creation).
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Long-form description for the detail page.
    pub description: String,
    /// Teaser used on cards and lists.
    pub short_description: String,
    /// Start timestamp.
    pub date: DateTime<Utc>,
    /// Display string for the time of day (e.g. `"7:00 PM - 9:00 PM"`).
    pub time: String,
    /// Event category.
    pub category: EventCategory,
    /// Optional hero image.
    pub image_url: Option<String>,
    /// Venue or address.
    pub location: String,
    /// Optional price display string (e.g. `"$25"`).
    pub price: Option<String>,
    /// Optional external ticketing link.
    pub ticket_url: Option<String>,
    /// Featured flag stored as an integer (`1` = featured).
    pub is_featured: i32,
    /// Free-text tags, in display order.
    pub tags: Vec<String>,
}

impl Event {
    /// Builds a stored record from an insert payload and its assigned id.
    #[must_use]
    pub fn from_new(id: EventId, new: NewEvent) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            short_description: new.short_description,
            date: new.date,
            time: new.time,
            category: new.category,
            image_url: new.image_url,
            location: new.location,
            price: new.price,
            ticket_url: new.ticket_url,
            is_featured: new.is_featured,
            tags: new.tags,
        }
    }

    /// Returns `true` if the event carries the featured flag.
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.is_featured == FEATURED
    }

    /// Shallow-merges `patch` into this record. Fields absent from the
    /// patch are left untouched; the identifier never changes.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(short_description) = patch.short_description {
            self.short_description = short_description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(ticket_url) = patch.ticket_url {
            self.ticket_url = ticket_url;
        }
        if let Some(is_featured) = patch.is_featured {
            self.is_featured = is_featured;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

/// An event that has not been assigned an identifier yet.
///
/// This is the shape of seed file records (any `id` there is ignored) and
/// the validated output of a create request. Seed dates may omit the
/// offset or the time of day; both are read as UTC.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    /// Event title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Teaser text.
    pub short_description: String,
    /// Start timestamp.
    #[serde(deserialize_with = "deserialize_lenient_utc")]
    pub date: DateTime<Utc>,
    /// Time-of-day display string.
    pub time: String,
    /// Event category.
    pub category: EventCategory,
    /// Optional hero image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Venue or address.
    pub location: String,
    /// Optional price display string.
    #[serde(default)]
    pub price: Option<String>,
    /// Optional ticketing link.
    #[serde(default)]
    pub ticket_url: Option<String>,
    /// Featured flag (`1` = featured).
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub is_featured: i32,
    /// Free-text tags.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tags: Vec<String>,
}

fn deserialize_lenient_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_lenient_utc(&raw).ok_or_else(|| de::Error::custom(format!("invalid date {raw:?}")))
}

/// Parses an RFC 3339 timestamp, a naive date-time or a bare `YYYY-MM-DD`
/// date. Values without an offset are taken as UTC; bare dates as midnight.
fn parse_lenient_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A partial update with per-field presence.
///
/// `None` means "leave unchanged". Nullable fields use a nested option so
/// that `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    /// New title.
    pub title: Option<String>,
    /// New long description.
    pub description: Option<String>,
    /// New teaser text.
    pub short_description: Option<String>,
    /// New start timestamp.
    pub date: Option<DateTime<Utc>>,
    /// New time-of-day display string.
    pub time: Option<String>,
    /// New category.
    pub category: Option<EventCategory>,
    /// New image URL, or `Some(None)` to clear.
    pub image_url: Option<Option<String>>,
    /// New location.
    pub location: Option<String>,
    /// New price, or `Some(None)` to clear.
    pub price: Option<Option<String>>,
    /// New ticket URL, or `Some(None)` to clear.
    pub ticket_url: Option<Option<String>>,
    /// New featured flag.
    pub is_featured: Option<i32>,
    /// Replacement tag list.
    pub tags: Option<Vec<String>>,
}

impl EventPatch {
    /// Returns `true` if the patch would not change anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, Utc};

    use super::NewEvent;
    use crate::domain::EventCategory;

    /// Minimal valid event for tests.
    pub(crate) fn new_event(title: &str, category: EventCategory, date: DateTime<Utc>) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            description: "A long description of the evening.".to_string(),
            short_description: "A short teaser text.".to_string(),
            date,
            time: "7:00 PM".to_string(),
            category,
            image_url: Some("https://example.com/hero.jpg".to_string()),
            location: "Riverside Hall".to_string(),
            price: Some("$20".to_string()),
            ticket_url: None,
            is_featured: 0,
            tags: vec!["music".to_string(), "evening".to_string()],
        }
    }
}

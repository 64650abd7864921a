//! Event request bodies and their boundary validation.
//!
//! Requests deserialize from camelCase JSON and are checked here before
//! anything reaches the repository.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::event::FEATURED;
use crate::domain::{EventCategory, EventPatch, NewEvent};
use crate::error::CatalogError;

/// Minimum title length in characters.
pub const TITLE_MIN_CHARS: usize = 3;
/// Minimum long description length in characters.
pub const DESCRIPTION_MIN_CHARS: usize = 10;
/// Minimum short description length in characters.
pub const SHORT_DESCRIPTION_MIN_CHARS: usize = 10;

/// Request body for `POST /api/events`.
///
/// An `id` field, if sent, is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Event title (at least 3 characters).
    pub title: String,
    /// Long description (at least 10 characters).
    pub description: String,
    /// Teaser text (at least 10 characters).
    pub short_description: String,
    /// Start timestamp (RFC 3339).
    pub date: DateTime<Utc>,
    /// Time-of-day display string.
    pub time: String,
    /// Event category.
    pub category: EventCategory,
    /// Optional hero image URL.
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
    /// Featured flag, `0` or `1`. Defaults to `0`.
    #[serde(default)]
    pub is_featured: i32,
    /// Free-text tags. Defaults to empty.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateEventRequest {
    /// Validates the request and converts it into a [`NewEvent`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRequest`] naming the first field that
    /// violates a length or value rule.
    pub fn validate(self) -> Result<NewEvent, CatalogError> {
        check_min_chars("title", &self.title, TITLE_MIN_CHARS)?;
        check_min_chars("description", &self.description, DESCRIPTION_MIN_CHARS)?;
        check_min_chars(
            "shortDescription",
            &self.short_description,
            SHORT_DESCRIPTION_MIN_CHARS,
        )?;
        check_featured_flag(self.is_featured)?;

        Ok(NewEvent {
            title: self.title,
            description: self.description,
            short_description: self.short_description,
            date: self.date,
            time: self.time,
            category: self.category,
            image_url: self.image_url,
            location: self.location,
            price: self.price,
            ticket_url: self.ticket_url,
            is_featured: self.is_featured,
            tags: self.tags,
        })
    }
}

/// Request body for `PATCH /api/events/{id}`.
///
/// Omitted fields are left unchanged. For `imageUrl`, `price` and
/// `ticketUrl` an explicit `null` clears the stored value; `null` on any
/// other field is rejected by [`UpdateEventRequest::validate`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    /// New title.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    /// New long description.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    /// New teaser text.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub short_description: Option<Option<String>>,
    /// New start timestamp.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub date: Option<Option<DateTime<Utc>>>,
    /// New time-of-day display string.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub time: Option<Option<String>>,
    /// New category.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<EventCategory>)]
    pub category: Option<Option<EventCategory>>,
    /// New image URL; `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    /// New location.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub location: Option<Option<String>>,
    /// New price; `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub price: Option<Option<String>>,
    /// New ticket URL; `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub ticket_url: Option<Option<String>>,
    /// New featured flag, `0` or `1`.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub is_featured: Option<Option<i32>>,
    /// Replacement tag list.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: Option<Option<Vec<String>>>,
}

impl UpdateEventRequest {
    /// Validates the fields present and converts them into an [`EventPatch`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRequest`] naming the first present
    /// field that is `null` without being clearable, or that violates a
    /// length or value rule.
    pub fn validate(self) -> Result<EventPatch, CatalogError> {
        let title = reject_null("title", self.title)?;
        let description = reject_null("description", self.description)?;
        let short_description = reject_null("shortDescription", self.short_description)?;
        let date = reject_null("date", self.date)?;
        let time = reject_null("time", self.time)?;
        let category = reject_null("category", self.category)?;
        let location = reject_null("location", self.location)?;
        let is_featured = reject_null("isFeatured", self.is_featured)?;
        let tags = reject_null("tags", self.tags)?;

        if let Some(title) = &title {
            check_min_chars("title", title, TITLE_MIN_CHARS)?;
        }
        if let Some(description) = &description {
            check_min_chars("description", description, DESCRIPTION_MIN_CHARS)?;
        }
        if let Some(short_description) = &short_description {
            check_min_chars(
                "shortDescription",
                short_description,
                SHORT_DESCRIPTION_MIN_CHARS,
            )?;
        }
        if let Some(flag) = is_featured {
            check_featured_flag(flag)?;
        }

        Ok(EventPatch {
            title,
            description,
            short_description,
            date,
            time,
            category,
            image_url: self.image_url,
            location,
            price: self.price,
            ticket_url: self.ticket_url,
            is_featured,
            tags,
        })
    }
}

/// Collapses a patch field to "unchanged" or "set", refusing explicit `null`.
fn reject_null<T>(field: &str, value: Option<Option<T>>) -> Result<Option<T>, CatalogError> {
    match value {
        Some(None) => Err(CatalogError::InvalidRequest(format!(
            "{field} must not be null"
        ))),
        other => Ok(other.flatten()),
    }
}

fn check_min_chars(field: &str, value: &str, min: usize) -> Result<(), CatalogError> {
    if value.chars().count() < min {
        return Err(CatalogError::InvalidRequest(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

fn check_featured_flag(flag: i32) -> Result<(), CatalogError> {
    if flag != 0 && flag != FEATURED {
        return Err(CatalogError::InvalidRequest(format!(
            "isFeatured must be 0 or {FEATURED}, got {flag}"
        )));
    }
    Ok(())
}

//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::EventCategory;

/// Query parameters for `GET /api/events/upcoming`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpcomingParams {
    /// Maximum number of events to return. Omit for no limit.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Category metadata for `GET /config/categories`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryInfo {
    /// Category name as used in URLs and payloads.
    pub category: EventCategory,
    /// Human-readable description.
    pub description: String,
}

impl CategoryInfo {
    /// Returns the catalog entry for `category`.
    #[must_use]
    pub fn for_category(category: EventCategory) -> Self {
        let description = match category {
            EventCategory::Performance => "Live performances and concerts",
            EventCategory::Healing => "Sound healing and wellness sessions",
            EventCategory::Workshop => "Hands-on workshops and classes",
        };
        Self {
            category,
            description: description.to_string(),
        }
    }
}

//! The fixed set of event categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::CatalogError;

/// Classification of an event. Serialized with its display name
/// (`"Performance"`, `"Healing"`, `"Workshop"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EventCategory {
    /// Live performances and concerts.
    Performance,
    /// Sound healing and wellness sessions.
    Healing,
    /// Hands-on workshops and classes.
    Workshop,
}

impl EventCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::Performance, Self::Healing, Self::Workshop];

    /// Returns the canonical name used on the wire and in URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Performance => "Performance",
            Self::Healing => "Healing",
            Self::Workshop => "Workshop",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = CatalogError;

    /// Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_canonical_name() {
        for category in EventCategory::ALL {
            assert_eq!(category.as_str().parse::<EventCategory>().ok(), Some(category));
        }
    }

    #[test]
    fn rejects_unknown_and_miscased_names() {
        for bad in ["healing", "HEALING", "Dance", ""] {
            assert!(bad.parse::<EventCategory>().is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&EventCategory::Workshop).unwrap_or_default();
        assert_eq!(json, "\"Workshop\"");
        let parsed: Result<EventCategory, _> = serde_json::from_str("\"Healing\"");
        assert_eq!(parsed.ok(), Some(EventCategory::Healing));
    }
}

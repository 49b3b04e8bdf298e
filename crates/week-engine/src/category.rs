//! Categories -- reusable activity kinds an entry can link to by id for a
//! fallback title, color, and default location.
//!
//! The link is weak: a category may be deleted independently of the entries
//! referencing it, and a dangling id simply resolves as "no category".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::ColorTag;
use crate::entry::ScheduleEntry;
use crate::error::{Result, ScheduleError};

/// Stable identifier for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        CategoryId(Uuid::new_v4())
    }

    /// Parse the canonical hyphenated form.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidId` when `s` is not a UUID.
    pub fn parse(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(CategoryId)
            .map_err(|_| ScheduleError::InvalidId(s.to_string()))
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A reusable activity kind. Owned by the caller layer; the engine only
/// reads categories during display resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub default_location: String,
    #[serde(default)]
    pub color: ColorTag,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Category {
            id: CategoryId::new(),
            name: name.into(),
            default_location: String::new(),
            color: ColorTag::default(),
            created_at,
        }
    }

    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = location.into();
        self
    }

    pub fn with_color(mut self, color: ColorTag) -> Self {
        self.color = color;
        self
    }
}

/// Display fields of an entry after category fallback resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDisplay {
    pub title: String,
    pub location: String,
    pub color: ColorTag,
}

/// Resolve what a display layer should show for `entry`.
///
/// A linked category supplies the title and color. The entry's own location
/// wins when non-blank, then the category's default location, then empty.
/// A dangling category id falls back to the entry's own fields throughout.
/// Text fields are whitespace-trimmed.
pub fn resolve_display(entry: &ScheduleEntry, categories: &[Category]) -> ResolvedDisplay {
    let category = entry
        .category_id
        .and_then(|id| categories.iter().find(|c| c.id == id));

    let title = match category {
        Some(c) => c.name.trim().to_string(),
        None => entry.title.trim().to_string(),
    };

    let own_location = entry.location.trim();
    let location = if !own_location.is_empty() {
        own_location.to_string()
    } else {
        category
            .map(|c| c.default_location.trim().to_string())
            .unwrap_or_default()
    };

    let color = match category {
        Some(c) => c.color.clone(),
        None => entry.color.clone(),
    };

    ResolvedDisplay {
        title,
        location,
        color,
    }
}

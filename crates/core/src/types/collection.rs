//! Collection records.

use serde::{Deserialize, Serialize};

use super::id::CollectionId;

/// A curated group of products (e.g., "Running", "Formal").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection ID.
    pub id: CollectionId,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Highlighted with a badge.
    #[serde(default)]
    pub featured: bool,
}

impl Collection {
    /// Cover image, treating blank URLs as missing.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Description, treating blank text as missing.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

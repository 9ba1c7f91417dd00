//! Blog post summaries.

use serde::{Deserialize, Serialize};

use super::id::BlogPostId;

/// Summary of a blog post as listed by the catalog.
///
/// The landing page accepts these alongside products and collections but
/// does not render them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostSummary {
    /// Post ID.
    pub id: BlogPostId,
    /// Post title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Teaser text.
    #[serde(default)]
    pub excerpt: Option<String>,
}

//! Collection tile.

use askama::Template;
use solestyle_core::{Collection, CollectionId};

/// Card for one collection with a "View products" action.
#[derive(Debug, Clone, Template)]
#[template(path = "components/collection_tile.html")]
pub struct CollectionTile {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    /// Target of the "View products" control.
    pub href: String,
}

impl CollectionTile {
    /// Build a tile; `on_view` turns the collection id into the action target.
    #[must_use]
    pub fn new(collection: &Collection, on_view: impl Fn(&CollectionId) -> String) -> Self {
        Self {
            id: collection.id.to_string(),
            name: collection.name.clone(),
            description: collection.description_text().map(String::from),
            image: collection.image_url().map(String::from),
            featured: collection.featured,
            href: on_view(&collection.id),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn collection(image: Option<&str>) -> Collection {
        Collection {
            id: CollectionId::new("running"),
            name: "Running".to_string(),
            description: Some("  ".to_string()),
            image: image.map(String::from),
            featured: true,
        }
    }

    #[test]
    fn test_missing_image_renders_placeholder() {
        let html = CollectionTile::new(&collection(None), |id| format!("/c/{id}"))
            .render()
            .unwrap();
        assert!(!html.contains("<img"));
        assert!(html.contains("collection-tile__placeholder"));
    }

    #[test]
    fn test_blank_image_renders_placeholder() {
        let html = CollectionTile::new(&collection(Some(" ")), |id| format!("/c/{id}"))
            .render()
            .unwrap();
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_image_featured_badge_and_action() {
        let tile = CollectionTile::new(
            &collection(Some("https://cdn.example/running.jpg")),
            |id| format!("/?collection={id}"),
        );
        assert!(tile.description.is_none());
        let html = tile.render().unwrap();
        assert!(html.contains(r#"src="https://cdn.example/running.jpg""#));
        assert!(html.contains("Featured"));
        assert!(html.contains(r#"href="/?collection=running""#));
        assert!(html.contains("View products"));
    }

    #[test]
    fn test_action_called_once_with_collection_id() {
        let calls = std::cell::RefCell::new(Vec::new());
        let _ = CollectionTile::new(&collection(None), |id| {
            calls.borrow_mut().push(id.clone());
            String::new()
        });
        assert_eq!(calls.into_inner(), vec![CollectionId::new("running")]);
    }
}

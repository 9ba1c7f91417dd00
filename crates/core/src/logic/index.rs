//! Landing page state.
//!
//! [`IndexLogic`] bundles everything the landing page renders: loading
//! flags, the collection list, the search term, the selected collection and
//! the products left after filtering. The page itself only branches on these
//! fields.

use crate::types::{BlogPostSummary, Collection, CollectionId, Product};

/// A catalog section that is either still loading or settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    /// Initial load has not finished.
    Loading,
    /// Load finished (possibly with an empty result after a failure).
    Ready(T),
}

impl<T> Loadable<T> {
    /// Whether the section is still loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Borrow the settled value.
    #[must_use]
    pub const fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Ready(value) => Some(value),
        }
    }

    /// Map the settled value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Self::Loading => Loadable::Loading,
            Self::Ready(value) => Loadable::Ready(f(value)),
        }
    }
}

/// State and derived data for the landing page.
#[derive(Debug, Clone, Default)]
pub struct IndexLogic {
    /// Products are still loading.
    pub loading: bool,
    /// Collections are still loading.
    pub loading_collections: bool,
    /// Blog posts are still loading.
    pub loading_blogs: bool,
    /// All collections.
    pub collections: Vec<Collection>,
    /// Blog post summaries (accepted, not rendered).
    pub blogs: Vec<BlogPostSummary>,
    /// Current search text, as typed.
    pub search_term: String,
    /// Collection the visitor drilled into.
    pub selected_collection_id: Option<CollectionId>,
    /// Products after collection and search filtering.
    pub filtered_products: Vec<Product>,
}

impl IndexLogic {
    /// Build landing page state from catalog sections and visitor input.
    ///
    /// A selected collection id that is not in a settled collection list is
    /// dropped. Without a search term or selection the featured products are
    /// shown, or every product when nothing is featured.
    #[must_use]
    pub fn build(
        products: Loadable<&[Product]>,
        collections: Loadable<&[Collection]>,
        blogs: Loadable<&[BlogPostSummary]>,
        search_term: &str,
        selected_collection_id: Option<&CollectionId>,
    ) -> Self {
        let selected_collection_id = match (&collections, selected_collection_id) {
            (Loadable::Ready(list), Some(id)) if !list.iter().any(|c| &c.id == id) => None,
            (_, selected) => selected.cloned(),
        };

        let filtered_products = products.as_ready().map_or_else(Vec::new, |all| {
            filter_products(all, search_term, selected_collection_id.as_ref())
        });

        Self {
            loading: products.is_loading(),
            loading_collections: collections.is_loading(),
            loading_blogs: blogs.is_loading(),
            collections: collections.as_ready().map_or_else(Vec::new, |c| c.to_vec()),
            blogs: blogs.as_ready().map_or_else(Vec::new, |b| b.to_vec()),
            search_term: search_term.to_string(),
            selected_collection_id,
            filtered_products,
        }
    }

    /// The selected collection record, if known.
    #[must_use]
    pub fn selected_collection(&self) -> Option<&Collection> {
        let id = self.selected_collection_id.as_ref()?;
        self.collections.iter().find(|c| &c.id == id)
    }

    /// Whether a non-blank search term is active.
    #[must_use]
    pub fn has_search_term(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    /// Target of the "view collection" action, keeping the search term.
    #[must_use]
    pub fn view_collection_href(&self, id: &CollectionId) -> String {
        landing_href(self.search_term.trim(), Some(id.as_str()))
    }

    /// Target of the "show all" action: clears the collection, keeps the search.
    #[must_use]
    pub fn show_all_href(&self) -> String {
        landing_href(self.search_term.trim(), None)
    }
}

fn landing_href(search_term: &str, collection: Option<&str>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if !search_term.is_empty() {
        query.append_pair("q", search_term);
    }
    if let Some(id) = collection {
        query.append_pair("collection", id);
    }
    let query = query.finish();

    if query.is_empty() {
        "/#products".to_string()
    } else {
        format!("/?{query}#products")
    }
}

fn filter_products(
    products: &[Product],
    search_term: &str,
    selected: Option<&CollectionId>,
) -> Vec<Product> {
    let needle = search_term.trim().to_lowercase();

    if needle.is_empty() && selected.is_none() {
        let featured: Vec<Product> = products.iter().filter(|p| p.featured).cloned().collect();
        return if featured.is_empty() {
            products.to_vec()
        } else {
            featured
        };
    }

    products
        .iter()
        .filter(|p| selected.is_none_or(|id| p.in_collection(id)))
        .filter(|p| needle.is_empty() || matches_search(p, &needle))
        .cloned()
        .collect()
}

fn matches_search(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product
            .plain_description()
            .is_some_and(|text| text.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlogPostId, CurrencyCode, Price, ProductId};

    fn product(id: &str, title: &str, featured: bool, collections: &[&str]) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            slug: id.to_string(),
            description: Some(format!("<p>{title} in <em>leather</em></p>")),
            images: Vec::new(),
            featured,
            in_stock: true,
            price: Price::from_minor_units(5_000, CurrencyCode::USD),
            compare_at_price: None,
            options: Vec::new(),
            variants: Vec::new(),
            collection_ids: collections.iter().map(|c| CollectionId::new(*c)).collect(),
        }
    }

    fn collection(id: &str, name: &str) -> Collection {
        Collection {
            id: CollectionId::new(id),
            name: name.to_string(),
            description: None,
            image: None,
            featured: false,
        }
    }

    fn catalog() -> (Vec<Product>, Vec<Collection>, Vec<BlogPostSummary>) {
        (
            vec![
                product("oxford", "Oxford Classic", true, &["formal"]),
                product("runner", "Road Runner", false, &["sport"]),
                product("loafer", "Penny Loafer", true, &["formal"]),
            ],
            vec![collection("formal", "Formal"), collection("sport", "Sport")],
            vec![BlogPostSummary {
                id: BlogPostId::new("b-1"),
                title: "Care guide".to_string(),
                slug: "care-guide".to_string(),
                excerpt: None,
            }],
        )
    }

    #[test]
    fn test_default_shows_featured() {
        let (products, collections, blogs) = catalog();
        let logic = IndexLogic::build(
            Loadable::Ready(products.as_slice()),
            Loadable::Ready(collections.as_slice()),
            Loadable::Ready(blogs.as_slice()),
            "",
            None,
        );
        let ids: Vec<&str> = logic.filtered_products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["oxford", "loafer"]);
        assert!(!logic.loading);
        assert_eq!(logic.blogs.len(), 1);
    }

    #[test]
    fn test_no_featured_falls_back_to_all() {
        let (mut products, collections, blogs) = catalog();
        for p in &mut products {
            p.featured = false;
        }
        let logic = IndexLogic::build(
            Loadable::Ready(products.as_slice()),
            Loadable::Ready(collections.as_slice()),
            Loadable::Ready(blogs.as_slice()),
            "",
            None,
        );
        assert_eq!(logic.filtered_products.len(), 3);
    }

    #[test]
    fn test_collection_selection_filters() {
        let (products, collections, blogs) = catalog();
        let sport = CollectionId::new("sport");
        let logic = IndexLogic::build(
            Loadable::Ready(products.as_slice()),
            Loadable::Ready(collections.as_slice()),
            Loadable::Ready(blogs.as_slice()),
            "",
            Some(&sport),
        );
        assert_eq!(logic.filtered_products.len(), 1);
        assert_eq!(logic.selected_collection().map(|c| c.name.as_str()), Some("Sport"));
    }

    #[test]
    fn test_search_matches_title_and_description_case_insensitive() {
        let (products, collections, blogs) = catalog();
        let logic = IndexLogic::build(
            Loadable::Ready(products.as_slice()),
            Loadable::Ready(collections.as_slice()),
            Loadable::Ready(blogs.as_slice()),
            "  LOAFER ",
            None,
        );
        assert_eq!(logic.filtered_products.len(), 1);
        assert!(logic.has_search_term());

        let logic = IndexLogic::build(
            Loadable::Ready(products.as_slice()),
            Loadable::Ready(collections.as_slice()),
            Loadable::Ready(blogs.as_slice()),
            "leather",
            None,
        );
        assert_eq!(logic.filtered_products.len(), 3);
    }

    #[test]
    fn test_search_within_collection() {
        let (products, collections, blogs) = catalog();
        let formal = CollectionId::new("formal");
        let logic = IndexLogic::build(
            Loadable::Ready(products.as_slice()),
            Loadable::Ready(collections.as_slice()),
            Loadable::Ready(blogs.as_slice()),
            "oxford",
            Some(&formal),
        );
        assert_eq!(logic.filtered_products.len(), 1);
    }

    #[test]
    fn test_unknown_collection_is_dropped() {
        let (products, collections, blogs) = catalog();
        let missing = CollectionId::new("missing");
        let logic = IndexLogic::build(
            Loadable::Ready(products.as_slice()),
            Loadable::Ready(collections.as_slice()),
            Loadable::Ready(blogs.as_slice()),
            "",
            Some(&missing),
        );
        assert!(logic.selected_collection_id.is_none());
        assert_eq!(logic.filtered_products.len(), 2);
    }

    #[test]
    fn test_selection_kept_while_collections_load() {
        let (products, _, blogs) = catalog();
        let formal = CollectionId::new("formal");
        let logic = IndexLogic::build(
            Loadable::Ready(products.as_slice()),
            Loadable::Loading,
            Loadable::Ready(blogs.as_slice()),
            "",
            Some(&formal),
        );
        assert!(logic.loading_collections);
        assert_eq!(logic.selected_collection_id, Some(formal));
        assert!(logic.selected_collection().is_none());
        assert_eq!(logic.filtered_products.len(), 2);
    }

    #[test]
    fn test_action_hrefs() {
        let (products, collections, blogs) = catalog();
        let logic = IndexLogic::build(
            Loadable::Ready(products.as_slice()),
            Loadable::Ready(collections.as_slice()),
            Loadable::Ready(blogs.as_slice()),
            "",
            None,
        );
        assert_eq!(
            logic.view_collection_href(&CollectionId::new("sport")),
            "/?collection=sport#products"
        );
        assert_eq!(logic.show_all_href(), "/#products");

        let logic = IndexLogic {
            search_term: "trail shoe".to_string(),
            ..logic
        };
        assert_eq!(
            logic.view_collection_href(&CollectionId::new("a&b")),
            "/?q=trail+shoe&collection=a%26b#products"
        );
        assert_eq!(logic.show_all_href(), "/?q=trail+shoe#products");
    }

    #[test]
    fn test_loading_products_yields_empty_list() {
        let logic = IndexLogic::build(
            Loadable::Loading,
            Loadable::Loading,
            Loadable::Loading,
            "boots",
            None,
        );
        assert!(logic.loading);
        assert!(logic.loading_collections);
        assert!(logic.loading_blogs);
        assert!(logic.filtered_products.is_empty());
    }
}

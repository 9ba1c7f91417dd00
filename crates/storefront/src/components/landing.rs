//! Landing page.
//!
//! Every branch on the page is a single condition on [`IndexLogic`]:
//! the collections grid hides while collections load, the products section
//! shows skeletons while products load, then tiles, then an empty state.

use askama::Template;
use askama_web::WebTemplate;
use solestyle_core::logic::{IndexLogic, OptionSelection, ProductLogic};
use url::form_urlencoded;

use super::collection_tile::CollectionTile;
use super::product_tile::ProductTile;
use super::shell::PageShell;
use crate::filters;

/// Placeholder cards shown while products load.
pub const SKELETON_COUNT: usize = 8;

/// Static selling point shown under the hero.
#[derive(Debug, Clone)]
pub struct FeatureHighlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

const FEATURES: [FeatureHighlight; 3] = [
    FeatureHighlight {
        icon: "truck",
        title: "Free shipping",
        body: "On every order over $100, delivered in 3-5 business days.",
    },
    FeatureHighlight {
        icon: "shield",
        title: "1-year warranty",
        body: "Stitching, soles and hardware are covered for a full year.",
    },
    FeatureHighlight {
        icon: "return",
        title: "30-day returns",
        body: "Not the right fit? Send them back free within 30 days.",
    },
];

/// The products section; also served alone as an HTMX fragment.
#[derive(Debug, Clone, Template, WebTemplate)]
#[template(path = "components/products_section.html")]
pub struct ProductsSection {
    pub heading: String,
    pub subheading: &'static str,
    /// Present only while a collection is selected.
    pub show_all_href: Option<String>,
    pub loading: bool,
    pub skeleton_count: usize,
    pub tiles: Vec<ProductTile>,
    pub search_active: bool,
    pub search_term: String,
    /// Fragment URL reproducing this section's filters.
    pub refresh_href: String,
}

impl ProductsSection {
    #[must_use]
    pub fn new(logic: &IndexLogic) -> Self {
        let (heading, subheading, show_all_href) = match &logic.selected_collection_id {
            Some(_) => (
                logic
                    .selected_collection()
                    .map_or_else(|| "Collection".to_string(), |c| c.name.clone()),
                "The best shoes in this collection",
                Some(logic.show_all_href()),
            ),
            None => (
                "Featured products".to_string(),
                "Our most popular, best-rated shoes",
                None,
            ),
        };

        let tiles = logic
            .filtered_products
            .iter()
            .map(|product| ProductTile::new(&ProductLogic::resolve(product, OptionSelection::new())))
            .collect();

        let mut query = form_urlencoded::Serializer::new(String::new());
        if logic.has_search_term() {
            query.append_pair("q", logic.search_term.trim());
        }
        if let Some(id) = &logic.selected_collection_id {
            query.append_pair("collection", id.as_str());
        }
        let query = query.finish();
        let refresh_href = if query.is_empty() {
            "/fragments/products".to_string()
        } else {
            format!("/fragments/products?{query}")
        };

        Self {
            heading,
            subheading,
            show_all_href,
            loading: logic.loading,
            skeleton_count: SKELETON_COUNT,
            tiles,
            search_active: logic.has_search_term(),
            search_term: logic.search_term.trim().to_string(),
            refresh_href,
        }
    }
}

/// The landing page.
#[derive(Debug, Clone, Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingPage {
    pub shell: PageShell,
    pub search_term: String,
    pub selected_collection_id: Option<String>,
    pub features: Vec<FeatureHighlight>,
    pub show_collections: bool,
    pub collection_tiles: Vec<CollectionTile>,
    pub products: ProductsSection,
}

impl LandingPage {
    #[must_use]
    pub fn new(logic: &IndexLogic, shell: PageShell) -> Self {
        let show_collections = !logic.loading_collections && !logic.collections.is_empty();

        Self {
            shell,
            search_term: logic.search_term.clone(),
            selected_collection_id: logic.selected_collection_id.as_ref().map(ToString::to_string),
            features: FEATURES.to_vec(),
            show_collections,
            collection_tiles: logic
                .collections
                .iter()
                .map(|c| CollectionTile::new(c, |id| logic.view_collection_href(id)))
                .collect(),
            products: ProductsSection::new(logic),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::middleware::CartContext;
    use solestyle_core::{Collection, CollectionId, CurrencyCode, Price, Product, ProductId};

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Shoe {id}"),
            slug: id.to_string(),
            description: None,
            images: Vec::new(),
            featured: true,
            in_stock: true,
            price: Price::from_minor_units(7_000, CurrencyCode::USD),
            compare_at_price: None,
            options: Vec::new(),
            variants: Vec::new(),
            collection_ids: vec![CollectionId::new("boots")],
        }
    }

    fn boots() -> Collection {
        Collection {
            id: CollectionId::new("boots"),
            name: "Boots".to_string(),
            description: None,
            image: None,
            featured: false,
        }
    }

    fn settled() -> IndexLogic {
        IndexLogic {
            collections: vec![boots()],
            filtered_products: vec![product("a"), product("b")],
            ..IndexLogic::default()
        }
    }

    fn render(logic: &IndexLogic) -> String {
        LandingPage::new(logic, PageShell::new(&CartContext::default()))
            .render()
            .unwrap()
    }

    #[test]
    fn test_collections_hidden_while_loading() {
        let logic = IndexLogic {
            loading_collections: true,
            ..settled()
        };
        let html = render(&logic);
        assert!(!html.contains(r#"id="collections""#));
        assert!(!html.contains("collection-tile"));
    }

    #[test]
    fn test_collections_hidden_when_empty() {
        let logic = IndexLogic {
            collections: Vec::new(),
            ..settled()
        };
        assert!(!render(&logic).contains(r#"id="collections""#));
    }

    #[test]
    fn test_collections_shown_when_settled() {
        let html = render(&settled());
        assert!(html.contains(r#"id="collections""#));
        assert!(html.contains(r#"href="/?collection=boots#products""#));
    }

    #[test]
    fn test_selected_collection_heading_and_show_all() {
        let logic = IndexLogic {
            selected_collection_id: Some(CollectionId::new("boots")),
            ..settled()
        };
        let section = ProductsSection::new(&logic);
        assert_eq!(section.heading, "Boots");
        let html = section.render().unwrap();
        assert!(html.contains("View all products"));
        assert!(html.contains("The best shoes in this collection"));

        let cleared = ProductsSection::new(&settled());
        assert_eq!(cleared.heading, "Featured products");
        assert_eq!(cleared.subheading, "Our most popular, best-rated shoes");
        assert!(cleared.show_all_href.is_none());
        assert!(!cleared.render().unwrap().contains("View all products"));
    }

    #[test]
    fn test_unknown_selected_collection_heading_falls_back() {
        let logic = IndexLogic {
            selected_collection_id: Some(CollectionId::new("boots")),
            collections: Vec::new(),
            ..settled()
        };
        assert_eq!(ProductsSection::new(&logic).heading, "Collection");
    }

    #[test]
    fn test_loading_renders_exactly_eight_skeletons() {
        let logic = IndexLogic {
            loading: true,
            filtered_products: Vec::new(),
            ..settled()
        };
        let html = ProductsSection::new(&logic).render().unwrap();
        assert_eq!(html.matches(r#"class="product-skeleton""#).count(), 8);
        assert!(html.contains(r#"hx-trigger="load delay:1s""#));
        assert!(!html.contains("product-tile"));
    }

    #[test]
    fn test_tiles_rendered_when_loaded() {
        let html = ProductsSection::new(&settled()).render().unwrap();
        assert_eq!(html.matches(r#"class="product-tile""#).count(), 2);
        assert!(!html.contains("product-skeleton"));
        assert!(!html.contains("hx-trigger"));
    }

    #[test]
    fn test_empty_state_depends_on_search() {
        let logic = IndexLogic {
            filtered_products: Vec::new(),
            search_term: "sandal".to_string(),
            ..settled()
        };
        let html = ProductsSection::new(&logic).render().unwrap();
        assert!(html.contains("No products match"));
        assert!(html.contains("sandal"));

        let logic = IndexLogic {
            filtered_products: Vec::new(),
            ..settled()
        };
        let html = ProductsSection::new(&logic).render().unwrap();
        assert!(html.contains("No products yet"));
    }

    #[test]
    fn test_page_order() {
        let html = render(&settled());
        let hero = html.find("landing-hero").unwrap();
        let features = html.find("landing-features").unwrap();
        let collections = html.find(r#"id="collections""#).unwrap();
        let products = html.find(r#"id="products""#).unwrap();
        let newsletter = html.find("landing-newsletter").unwrap();
        assert!(hero < features && features < collections);
        assert!(collections < products && products < newsletter);
    }

    #[test]
    fn test_hero_actions_and_collections_intro() {
        let html = render(&settled());
        assert!(html.contains(r#"href="/collections">View collection</a>"#));
        assert!(html.contains(r#"href="/offers">Special offers</a>"#));
        assert!(html.contains("hand-picked categories"));
    }

    #[test]
    fn test_search_input_bound_to_term() {
        let logic = IndexLogic {
            search_term: "derby".to_string(),
            ..settled()
        };
        let html = render(&logic);
        assert!(html.contains(r#"value="derby""#));
        assert!(html.contains(r#"hx-get="/fragments/products""#));
    }
}

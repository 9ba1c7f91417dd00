//! Product tile.
//!
//! The tile is a view over a resolved [`ProductLogic`]; prices, stock and
//! option availability all come from there. Option clicks re-request the
//! tile from `/products/{slug}/tile` with the toggled selection in the query
//! string and swap it in place.

use askama::Template;
use askama_web::WebTemplate;
use solestyle_core::logic::ProductLogic;
use url::form_urlencoded;

/// One selectable value of an option group.
#[derive(Debug, Clone)]
pub struct OptionValueView {
    pub value: String,
    /// Swatch colour, only on the colour axis.
    pub swatch: Option<String>,
    pub selected: bool,
    /// Another value in this group is selected.
    pub dimmed: bool,
    /// Tile URL with this value toggled.
    pub href: String,
}

/// An option group and its still-selectable values.
#[derive(Debug, Clone)]
pub struct OptionGroupView {
    pub name: String,
    pub values: Vec<OptionValueView>,
}

/// Card for one product.
#[derive(Debug, Clone, Template, WebTemplate)]
#[template(path = "components/product_tile.html")]
pub struct ProductTile {
    pub dom_id: String,
    pub product_id: String,
    pub title: String,
    pub href: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    pub in_stock: bool,
    pub discount_percentage: Option<u32>,
    pub price: String,
    pub compare_at: Option<String>,
    pub option_groups: Vec<OptionGroupView>,
    pub variant_id: Option<String>,
    pub can_add_to_cart: bool,
}

impl ProductTile {
    /// Build a tile from resolved product logic.
    #[must_use]
    pub fn new(logic: &ProductLogic<'_>) -> Self {
        let product = logic.product;

        Self {
            dom_id: dom_id(&product.slug),
            product_id: product.id.to_string(),
            title: product.title.clone(),
            href: format!("/products/{}", product.slug),
            description: product.plain_description(),
            image: logic.display_image().map(String::from),
            featured: product.featured,
            in_stock: logic.in_stock,
            discount_percentage: logic.discount_percentage,
            price: logic.format_money(&logic.current_price),
            compare_at: logic
                .visible_compare_at()
                .map(|compare_at| logic.format_money(&compare_at)),
            option_groups: option_groups(logic),
            variant_id: logic.matching_variant.map(|v| v.id.to_string()),
            can_add_to_cart: logic.can_add_to_cart,
        }
    }

    /// Label of the add-to-cart control.
    #[must_use]
    pub const fn add_label(&self) -> &'static str {
        if self.in_stock { "Add" } else { "Sold out" }
    }
}

/// Element id for a tile, usable as a bare `#id` selector.
fn dom_id(slug: &str) -> String {
    let safe: String = slug
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    format!("product-{safe}")
}

fn option_groups(logic: &ProductLogic<'_>) -> Vec<OptionGroupView> {
    if !logic.has_variants {
        return Vec::new();
    }

    let product = logic.product;
    product
        .options
        .iter()
        .map(|option| {
            let group_selected = logic.selected.has(&option.name);
            let values = option
                .values
                .iter()
                .filter(|value| logic.is_option_value_available(&option.name, value))
                .map(|value| {
                    let selected = logic.selected.is_selected(&option.name, value);
                    OptionValueView {
                        value: value.clone(),
                        swatch: option.swatch_for(value).map(String::from),
                        selected,
                        dimmed: group_selected && !selected,
                        href: tile_href(
                            &product.slug,
                            logic.selected.toggled(&option.name, value).query_pairs(),
                        ),
                    }
                })
                .collect();

            OptionGroupView {
                name: option.name.clone(),
                values,
            }
        })
        .collect()
}

fn tile_href<'a>(slug: &str, pairs: impl Iterator<Item = (String, &'a str)>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        query.append_pair(&key, value);
    }
    let query = query.finish();

    if query.is_empty() {
        format!("/products/{slug}/tile")
    } else {
        format!("/products/{slug}/tile?{query}")
    }
}

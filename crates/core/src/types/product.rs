//! Product records as delivered by the catalog.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::id::{CollectionId, OptionId, ProductId, VariantId};
use super::price::Price;

#[allow(clippy::expect_used)]
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("HTML tag pattern is valid"));

/// Remove markup tags from rich-text descriptions.
///
/// Only tags are removed; entities are left for the template engine to
/// escape like any other text.
#[must_use]
pub fn strip_html_tags(html: &str) -> String {
    HTML_TAG.replace_all(html, "").trim().to_string()
}

/// Product option definition (e.g., "Size" with values 40-45).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Option ID.
    pub id: OptionId,
    /// Option name (e.g., "Size", "Color").
    pub name: String,
    /// Allowed values in display order.
    pub values: Vec<String>,
    /// Colour swatches keyed by value (CSS colour strings).
    #[serde(default)]
    pub swatches: BTreeMap<String, String>,
}

impl ProductOption {
    /// Whether this option is the colour axis (rendered as swatches).
    #[must_use]
    pub fn is_color(&self) -> bool {
        self.name.eq_ignore_ascii_case("color")
    }

    /// Swatch colour for a value, only for the colour axis.
    #[must_use]
    pub fn swatch_for(&self, value: &str) -> Option<&str> {
        if !self.is_color() {
            return None;
        }
        self.swatches
            .get(value)
            .map(String::as_str)
            .filter(|swatch| !swatch.trim().is_empty())
    }
}

/// A purchasable combination of option values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID.
    pub id: VariantId,
    /// Option name → value for this variant.
    pub options: BTreeMap<String, String>,
    /// Current price.
    pub price: Price,
    /// Compare-at price (original price if on sale).
    #[serde(default)]
    pub compare_at_price: Option<Price>,
    /// Variant image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Whether this variant can be sold.
    #[serde(default = "default_true")]
    pub available: bool,
}

/// A product in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// URL slug used in `/products/{slug}`.
    pub slug: String,
    /// Description, possibly containing HTML.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URLs, first one is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Highlighted on the landing page.
    #[serde(default)]
    pub featured: bool,
    /// Stock flag for the product as a whole.
    #[serde(default = "default_true")]
    pub in_stock: bool,
    /// Base price.
    pub price: Price,
    /// Base compare-at price.
    #[serde(default)]
    pub compare_at_price: Option<Price>,
    /// Option groups (may be empty).
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// Variants (may be empty).
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    /// Collections this product belongs to.
    #[serde(default)]
    pub collection_ids: Vec<CollectionId>,
}

impl Product {
    /// Whether the product exposes variant options.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        !self.options.is_empty() && !self.variants.is_empty()
    }

    /// The primary image, if any.
    #[must_use]
    pub fn first_image(&self) -> Option<&str> {
        self.images
            .iter()
            .map(String::as_str)
            .find(|url| !url.trim().is_empty())
    }

    /// Description with markup removed, `None` when nothing is left.
    #[must_use]
    pub fn plain_description(&self) -> Option<String> {
        self.description
            .as_deref()
            .map(strip_html_tags)
            .filter(|text| !text.is_empty())
    }

    /// Look up an option group by name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&ProductOption> {
        self.options.iter().find(|opt| opt.name == name)
    }

    /// Variant label in option order, such as "42 / Black".
    #[must_use]
    pub fn variant_label(&self, variant: &ProductVariant) -> String {
        self.options
            .iter()
            .filter_map(|opt| variant.options.get(&opt.name))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// Whether the product belongs to a collection.
    #[must_use]
    pub fn in_collection(&self, collection_id: &CollectionId) -> bool {
        self.collection_ids.contains(collection_id)
    }
}

const fn default_true() -> bool {
    true
}

//! Row types returned by the REST catalog and their conversion to domain types.
//!
//! Rows are flat: prices are plain numbers in the store currency and option
//! groups, variants and images are embedded JSON columns.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;
use solestyle_core::{
    BlogPostId, BlogPostSummary, Collection, CollectionId, CurrencyCode, OptionId, Price, Product,
    ProductId, ProductOption, ProductVariant, VariantId,
};

#[derive(Debug, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    pub price: Decimal,
    #[serde(default)]
    pub compare_at_price: Option<Decimal>,
    #[serde(default)]
    pub options: Option<Vec<OptionRow>>,
    #[serde(default)]
    pub variants: Option<Vec<VariantRow>>,
    #[serde(default)]
    pub collection_ids: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct OptionRow {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub swatches: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
pub struct VariantRow {
    pub id: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub compare_at_price: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default)]
    pub inventory_quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct BlogPostRow {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
}

/// Convert a product row, pricing everything in `currency`.
pub fn convert_product(row: ProductRow, currency: CurrencyCode) -> Product {
    let price = Price::new(row.price, currency);
    let compare_at_price = row.compare_at_price.map(|amount| Price::new(amount, currency));

    let options = row
        .options
        .unwrap_or_default()
        .into_iter()
        .map(convert_option)
        .collect();

    let variants = row
        .variants
        .unwrap_or_default()
        .into_iter()
        .map(|variant| convert_variant(variant, price, compare_at_price, currency))
        .collect();

    Product {
        id: ProductId::new(row.id),
        title: row.title,
        slug: row.slug,
        description: row.description,
        images: row.images.unwrap_or_default(),
        featured: row.featured.unwrap_or(false),
        in_stock: row.in_stock.unwrap_or(true),
        price,
        compare_at_price,
        options,
        variants,
        collection_ids: row
            .collection_ids
            .unwrap_or_default()
            .into_iter()
            .map(CollectionId::new)
            .collect(),
    }
}

fn convert_option(row: OptionRow) -> ProductOption {
    let id = row
        .id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| row.name.to_lowercase());

    ProductOption {
        id: OptionId::new(id),
        name: row.name,
        values: row.values,
        swatches: row.swatches.unwrap_or_default(),
    }
}

/// Variants without their own price inherit the product's.
fn convert_variant(
    row: VariantRow,
    product_price: Price,
    product_compare_at: Option<Price>,
    currency: CurrencyCode,
) -> ProductVariant {
    let price = row
        .price
        .map_or(product_price, |amount| Price::new(amount, currency));
    let compare_at_price = row
        .compare_at_price
        .map(|amount| Price::new(amount, currency))
        .or(if row.price.is_none() {
            product_compare_at
        } else {
            None
        });
    let available = row
        .available
        .unwrap_or_else(|| row.inventory_quantity.is_none_or(|qty| qty > 0));

    ProductVariant {
        id: VariantId::new(row.id),
        options: row.options,
        price,
        compare_at_price,
        image: row.image,
        available,
    }
}

pub fn convert_collection(row: CollectionRow) -> Collection {
    Collection {
        id: CollectionId::new(row.id),
        name: row.name,
        description: row.description,
        image: row.image,
        featured: row.featured.unwrap_or(false),
    }
}

pub fn convert_blog_post(row: BlogPostRow) -> BlogPostSummary {
    BlogPostSummary {
        id: BlogPostId::new(row.id),
        title: row.title,
        slug: row.slug,
        excerpt: row.excerpt,
    }
}

//! Product display state: variant matching, pricing and availability.
//!
//! [`ProductLogic::resolve`] maps a product and the visitor's partial option
//! selection to everything a product tile needs. Tiles never compute prices
//! or availability themselves.

use std::collections::BTreeMap;

use crate::types::{Price, Product, ProductVariant};

/// Query-string prefix carrying option selections (`option.Size=42`).
pub const OPTION_QUERY_PREFIX: &str = "option.";

/// Partial selection of option values, keyed by option name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSelection(BTreeMap<String, String>);

impl OptionSelection {
    /// An empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from query pairs, keeping only options and values the
    /// product actually defines.
    pub fn from_query<'a, I>(product: &Product, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut selected = BTreeMap::new();
        for (key, value) in pairs {
            let Some(name) = key.strip_prefix(OPTION_QUERY_PREFIX) else {
                continue;
            };
            let known = product
                .option(name)
                .is_some_and(|opt| opt.values.iter().any(|v| v == value));
            if known {
                selected.insert(name.to_string(), value.to_string());
            }
        }
        Self(selected)
    }

    /// Add or replace the value for one option.
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    /// Selection after the visitor clicks `value` in group `name`.
    ///
    /// Clicking the current value clears the group.
    #[must_use]
    pub fn toggled(&self, name: &str, value: &str) -> Self {
        let mut next = self.clone();
        if self.is_selected(name, value) {
            next.0.remove(name);
        } else {
            next.0.insert(name.to_string(), value.to_string());
        }
        next
    }

    /// Selected value for an option group.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether the group has any selection.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Whether `value` is the selection for `name`.
    #[must_use]
    pub fn is_selected(&self, name: &str, value: &str) -> bool {
        self.get(name) == Some(value)
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Query pairs encoding this selection.
    pub fn query_pairs(&self) -> impl Iterator<Item = (String, &str)> {
        self.iter()
            .map(|(name, value)| (format!("{OPTION_QUERY_PREFIX}{name}"), value))
    }

    fn matches(&self, variant: &ProductVariant) -> bool {
        self.iter()
            .all(|(name, value)| variant.options.get(name).map(String::as_str) == Some(value))
    }
}

/// Display-ready state for one product under a selection.
#[derive(Debug, Clone)]
pub struct ProductLogic<'a> {
    /// The product being displayed.
    pub product: &'a Product,
    /// Current partial selection.
    pub selected: OptionSelection,
    /// Whether the product exposes variant options.
    pub has_variants: bool,
    /// Variant matching a complete selection (or the default variant).
    pub matching_variant: Option<&'a ProductVariant>,
    /// Price to show.
    pub current_price: Price,
    /// Compare-at price to show, if any.
    pub current_compare_at: Option<Price>,
    /// Percentage off, present only for a real discount.
    pub discount_percentage: Option<u32>,
    /// Whether the product (or matched variant) is in stock.
    pub in_stock: bool,
    /// Whether the add-to-cart action is enabled.
    pub can_add_to_cart: bool,
}

impl<'a> ProductLogic<'a> {
    /// Resolve display state for `product` under `selected`.
    #[must_use]
    pub fn resolve(product: &'a Product, selected: OptionSelection) -> Self {
        let has_variants = product.has_variants();

        let matching_variant = if has_variants {
            let complete = product.options.iter().all(|opt| selected.has(&opt.name));
            if complete {
                product.variants.iter().find(|v| selected.matches(v))
            } else {
                None
            }
        } else {
            product.variants.first()
        };

        let (current_price, current_compare_at) = matching_variant.map_or(
            (product.price, product.compare_at_price),
            |variant| (variant.price, variant.compare_at_price),
        );

        let discount_percentage = current_compare_at
            .as_ref()
            .and_then(|compare_at| current_price.discount_percentage(compare_at));

        let in_stock = product.in_stock && matching_variant.is_none_or(|v| v.available);
        let can_add_to_cart = in_stock && (!has_variants || matching_variant.is_some());

        Self {
            product,
            selected,
            has_variants,
            matching_variant,
            current_price,
            current_compare_at,
            discount_percentage,
            in_stock,
            can_add_to_cart,
        }
    }

    /// Whether `value` can still be chosen for option `name`.
    ///
    /// A value is available when some sellable variant carries it and agrees
    /// with every selection made on the *other* option groups. The value
    /// currently selected for `name` always stays listed so it can be
    /// cleared.
    #[must_use]
    pub fn is_option_value_available(&self, name: &str, value: &str) -> bool {
        if !self.has_variants || self.selected.is_selected(name, value) {
            return true;
        }

        self.product.variants.iter().any(|variant| {
            variant.available
                && variant.options.get(name).map(String::as_str) == Some(value)
                && self
                    .selected
                    .iter()
                    .filter(|(other, _)| *other != name)
                    .all(|(other, chosen)| {
                        variant.options.get(other).map(String::as_str) == Some(chosen)
                    })
        })
    }

    /// Image to show: matched variant image, then the product's first image.
    #[must_use]
    pub fn display_image(&self) -> Option<&'a str> {
        self.matching_variant
            .and_then(|v| v.image.as_deref())
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.product.first_image())
    }

    /// Compare-at price worth striking through.
    ///
    /// Shown exactly when there is a discount, so the struck price and the
    /// badge never disagree (a compare-at in another currency shows neither).
    #[must_use]
    pub fn visible_compare_at(&self) -> Option<Price> {
        self.current_compare_at
            .filter(|_| self.discount_percentage.is_some())
    }

    /// Format a price for display.
    #[must_use]
    pub fn format_money(&self, price: &Price) -> String {
        price.display()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{CurrencyCode, OptionId, ProductId, ProductOption, VariantId};

    fn usd(cents: i64) -> Price {
        Price::from_minor_units(cents, CurrencyCode::USD)
    }

    fn option(name: &str, values: &[&str]) -> ProductOption {
        ProductOption {
            id: OptionId::new(name.to_lowercase()),
            name: name.to_string(),
            values: values.iter().map(ToString::to_string).collect(),
            swatches: BTreeMap::new(),
        }
    }

    fn variant(id: &str, size: &str, color: &str, available: bool) -> ProductVariant {
        ProductVariant {
            id: VariantId::new(id),
            options: BTreeMap::from([
                ("Size".to_string(), size.to_string()),
                ("Color".to_string(), color.to_string()),
            ]),
            price: usd(9_000),
            compare_at_price: Some(usd(12_000)),
            image: Some(format!("https://cdn.example/{id}.jpg")),
            available,
        }
    }

    fn sneaker() -> Product {
        Product {
            id: ProductId::new("p-1"),
            title: "Court Sneaker".to_string(),
            slug: "court-sneaker".to_string(),
            description: None,
            images: vec!["https://cdn.example/main.jpg".to_string()],
            featured: false,
            in_stock: true,
            price: usd(10_000),
            compare_at_price: None,
            options: vec![
                option("Size", &["41", "42", "43"]),
                option("Color", &["Black", "White"]),
            ],
            variants: vec![
                variant("v-41-b", "41", "Black", true),
                variant("v-42-b", "42", "Black", true),
                variant("v-42-w", "42", "White", false),
                variant("v-43-w", "43", "White", true),
            ],
            collection_ids: Vec::new(),
        }
    }

    fn simple(in_stock: bool, compare_at: Option<Price>) -> Product {
        Product {
            options: Vec::new(),
            variants: Vec::new(),
            in_stock,
            compare_at_price: compare_at,
            ..sneaker()
        }
    }

    #[test]
    fn test_partial_selection_has_no_matching_variant() {
        let product = sneaker();
        let logic = ProductLogic::resolve(&product, OptionSelection::new().with("Size", "42"));
        assert!(logic.has_variants);
        assert!(logic.matching_variant.is_none());
        assert!(!logic.can_add_to_cart);
        assert_eq!(logic.current_price, usd(10_000));
        assert_eq!(logic.display_image(), Some("https://cdn.example/main.jpg"));
    }

    #[test]
    fn test_complete_selection_uses_variant_price_and_image() {
        let product = sneaker();
        let selection = OptionSelection::new()
            .with("Size", "42")
            .with("Color", "Black");
        let logic = ProductLogic::resolve(&product, selection);
        assert_eq!(logic.matching_variant.unwrap().id, VariantId::new("v-42-b"));
        assert_eq!(logic.current_price, usd(9_000));
        assert_eq!(logic.discount_percentage, Some(25));
        assert!(logic.can_add_to_cart);
        assert_eq!(
            logic.display_image(),
            Some("https://cdn.example/v-42-b.jpg")
        );
    }

    #[test]
    fn test_unavailable_variant_is_out_of_stock() {
        let product = sneaker();
        let selection = OptionSelection::new()
            .with("Size", "42")
            .with("Color", "White");
        let logic = ProductLogic::resolve(&product, selection);
        assert!(!logic.in_stock);
        assert!(!logic.can_add_to_cart);
    }

    #[test]
    fn test_option_availability_respects_other_groups() {
        let product = sneaker();
        let logic = ProductLogic::resolve(&product, OptionSelection::new().with("Size", "41"));
        assert!(logic.is_option_value_available("Color", "Black"));
        assert!(!logic.is_option_value_available("Color", "White"));
        // Other sizes stay available because Size is the axis being changed.
        assert!(logic.is_option_value_available("Size", "43"));
    }

    #[test]
    fn test_sold_out_combination_is_not_offered() {
        let product = sneaker();
        let logic = ProductLogic::resolve(&product, OptionSelection::new().with("Color", "White"));
        assert!(!logic.is_option_value_available("Size", "42"));
        assert!(logic.is_option_value_available("Size", "43"));
        assert!(!logic.is_option_value_available("Size", "41"));
    }

    #[test]
    fn test_selected_value_stays_listed() {
        let product = sneaker();
        let selection = OptionSelection::new()
            .with("Size", "41")
            .with("Color", "White");
        let logic = ProductLogic::resolve(&product, selection);
        assert!(logic.is_option_value_available("Color", "White"));
    }

    #[test]
    fn test_stock_flag_false_disables_regardless_of_variants() {
        let mut product = sneaker();
        product.in_stock = false;
        let selection = OptionSelection::new()
            .with("Size", "42")
            .with("Color", "Black");
        let logic = ProductLogic::resolve(&product, selection);
        assert!(!logic.in_stock);
        assert!(!logic.can_add_to_cart);
    }

    #[test]
    fn test_simple_product_without_variants() {
        let product = simple(true, Some(usd(10_000)));
        let logic = ProductLogic::resolve(&product, OptionSelection::new());
        assert!(!logic.has_variants);
        assert!(logic.can_add_to_cart);
        assert_eq!(logic.discount_percentage, None);
        assert_eq!(logic.visible_compare_at(), None);
        assert!(logic.is_option_value_available("Size", "anything"));
    }

    #[test]
    fn test_discount_iff_compare_at_greater() {
        let product = simple(true, Some(usd(12_500)));
        let logic = ProductLogic::resolve(&product, OptionSelection::new());
        assert_eq!(logic.discount_percentage, Some(20));
        assert_eq!(logic.visible_compare_at(), Some(usd(12_500)));

        let product = simple(true, Some(usd(8_000)));
        let logic = ProductLogic::resolve(&product, OptionSelection::new());
        assert_eq!(logic.discount_percentage, None);
        assert_eq!(logic.visible_compare_at(), None);
    }

    #[test]
    fn test_compare_at_in_other_currency_is_ignored() {
        let product = simple(
            true,
            Some(Price::from_minor_units(15_000, CurrencyCode::EUR)),
        );
        let logic = ProductLogic::resolve(&product, OptionSelection::new());
        assert_eq!(logic.discount_percentage, None);
        assert_eq!(logic.visible_compare_at(), None);
    }

    #[test]
    fn test_from_query_drops_unknown_options() {
        let product = sneaker();
        let pairs = [
            ("option.Size", "42"),
            ("option.Size", "99"),
            ("option.Width", "Wide"),
            ("q", "shoes"),
        ];
        let selection = OptionSelection::from_query(&product, pairs);
        assert_eq!(selection.get("Size"), Some("42"));
        assert!(!selection.has("Width"));
        assert_eq!(selection.iter().count(), 1);
    }

    #[test]
    fn test_toggle_clears_current_value() {
        let selection = OptionSelection::new().with("Size", "42");
        assert!(selection.toggled("Size", "42").is_empty());
        assert_eq!(selection.toggled("Size", "43").get("Size"), Some("43"));
    }

    #[test]
    fn test_query_pairs_round_trip() {
        let product = sneaker();
        let selection = OptionSelection::new().with("Color", "Black");
        let pairs: Vec<(String, &str)> = selection.query_pairs().collect();
        assert_eq!(pairs, vec![("option.Color".to_string(), "Black")]);
        let parsed = OptionSelection::from_query(
            &product,
            pairs.iter().map(|(k, v)| (k.as_str(), *v)),
        );
        assert_eq!(parsed, selection);
    }
}

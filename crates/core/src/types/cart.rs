//! Cart aggregate kept in the visitor session.
//!
//! Lines carry a snapshot of what was displayed when the item was added so
//! the cart panel can render without another catalog round trip.

use serde::{Deserialize, Serialize};

use super::id::{ProductId, VariantId};
use super::price::Price;

/// A single line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product added.
    pub product_id: ProductId,
    /// Variant added, `None` for products without variants.
    pub variant_id: Option<VariantId>,
    /// Product title at the time of adding.
    pub title: String,
    /// Variant label such as "42 / Black".
    pub variant_title: Option<String>,
    /// Unit price at the time of adding.
    pub unit_price: Price,
    /// Image shown in the cart panel.
    pub image: Option<String>,
    /// Number of units.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }

    fn same_item(&self, other: &Self) -> bool {
        self.product_id == other.product_id && self.variant_id == other.variant_id
    }
}

/// The visitor's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a line, merging with an existing line for the same item.
    ///
    /// Zero-quantity lines are ignored.
    pub fn add(&mut self, line: CartLine) {
        if line.quantity == 0 {
            return;
        }
        if let Some(existing) = self.lines.iter_mut().find(|l| l.same_item(&line)) {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
        } else {
            self.lines.push(line);
        }
    }

    /// Sum of line totals, `None` for an empty cart.
    #[must_use]
    pub fn subtotal(&self) -> Option<Price> {
        let first = self.lines.first()?;
        let mut total = Price::new(rust_decimal::Decimal::ZERO, first.unit_price.currency_code);
        for line in &self.lines {
            total.amount += line.line_total().amount;
        }
        Some(total)
    }
}

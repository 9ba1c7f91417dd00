//! Session keys.
//!
//! The cart itself ([`solestyle_core::Cart`]) is stored as JSON under
//! [`keys::CART`].

/// Session keys.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";
}

//! Page shell: header, footer and the chrome around page content.
//!
//! Pages embed a [`PageShell`] as `shell` and extend `base.html`, which
//! renders the header, the `content` block, the floating cart and the footer
//! in that order.

use super::cart::CartCount;
use super::floating_cart::FloatingCart;
use crate::middleware::CartContext;

/// Store name shown in the header, footer and document title.
pub const BRAND_NAME: &str = "SoleStyle";

/// Width treatment of the main content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Default,
    FullWidth,
    Centered,
}

impl Layout {
    /// CSS modifier class for the main element.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "page-main--default",
            Self::FullWidth => "page-main--full-width",
            Self::Centered => "page-main--centered",
        }
    }
}

/// A navigation link.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

impl NavLink {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            active: false,
        }
    }
}

/// Shell configuration for one page.
#[derive(Debug, Clone)]
pub struct PageShell {
    pub page_title: Option<String>,
    pub show_cart: bool,
    pub class_name: String,
    pub header_class_name: String,
    pub footer_class_name: String,
    pub layout: Layout,
    pub nav: Vec<NavLink>,
    pub support_links: Vec<NavLink>,
    pub social_links: Vec<NavLink>,
    pub cart_count: CartCount,
    pub floating_cart: FloatingCart,
    /// Open-cart action of the header cart button.
    pub open_cart_href: &'static str,
}

impl PageShell {
    /// Shell with the default chrome and the visitor's cart.
    #[must_use]
    pub fn new(cart: &CartContext) -> Self {
        Self {
            page_title: None,
            show_cart: true,
            class_name: String::new(),
            header_class_name: String::new(),
            footer_class_name: String::new(),
            layout: Layout::Default,
            nav: vec![
                NavLink::new("Home", "/"),
                NavLink::new("Collections", "/collections"),
                NavLink::new("Offers", "/offers"),
                NavLink::new("Blog", "/blog"),
            ],
            support_links: vec![
                NavLink::new("Contact us", "/contact"),
                NavLink::new("Shipping", "/shipping"),
                NavLink::new("Returns", "/returns"),
                NavLink::new("Size guide", "/size-guide"),
            ],
            social_links: vec![
                NavLink::new("Instagram", "https://instagram.com/solestyle"),
                NavLink::new("Facebook", "https://facebook.com/solestyle"),
                NavLink::new("X", "https://x.com/solestyle"),
            ],
            cart_count: CartCount::new(cart.total_items()),
            floating_cart: FloatingCart::new(cart),
            open_cart_href: cart.open_cart_href(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = Some(title.into());
        self
    }

    /// Hide the header cart icon and the floating cart.
    #[must_use]
    pub const fn without_cart(mut self) -> Self {
        self.show_cart = false;
        self
    }

    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn with_header_class(mut self, class_name: impl Into<String>) -> Self {
        self.header_class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn with_footer_class(mut self, class_name: impl Into<String>) -> Self {
        self.footer_class_name = class_name.into();
        self
    }

    /// Mark the nav link for `path` as current.
    #[must_use]
    pub fn with_active(mut self, path: &str) -> Self {
        for link in &mut self.nav {
            link.active = link.href == path;
        }
        self
    }

    /// Contents of the `<title>` element.
    #[must_use]
    pub fn document_title(&self) -> String {
        match &self.page_title {
            Some(title) => format!("{title} | {BRAND_NAME}"),
            None => BRAND_NAME.to_string(),
        }
    }

    /// Classes for the main content element.
    #[must_use]
    pub fn main_class(&self) -> String {
        let mut class = format!("page-main {}", self.layout.class());
        if !self.class_name.trim().is_empty() {
            class.push(' ');
            class.push_str(self.class_name.trim());
        }
        class
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use askama::Template;
    use solestyle_core::{Cart, CartLine, CurrencyCode, Price, ProductId};

    use super::*;
    use crate::filters;

    #[derive(Template)]
    #[template(
        source = "{% extends \"base.html\" %}{% block content %}<p>Body</p>{% endblock %}",
        ext = "html"
    )]
    struct ShellPage {
        shell: PageShell,
    }

    fn cart_with_items(quantity: u32) -> CartContext {
        CartContext::new(Cart {
            lines: vec![CartLine {
                product_id: ProductId::new("p-1"),
                variant_id: None,
                title: "Oxford".to_string(),
                variant_title: None,
                unit_price: Price::from_minor_units(14_900, CurrencyCode::USD),
                image: None,
                quantity,
            }],
        })
    }

    fn render(shell: PageShell) -> String {
        ShellPage { shell }.render().unwrap()
    }

    #[test]
    fn test_defaults() {
        let shell = PageShell::new(&CartContext::default());
        assert!(shell.show_cart);
        assert_eq!(shell.layout, Layout::Default);
        assert_eq!(shell.document_title(), "SoleStyle");
        assert_eq!(shell.open_cart_href, "/cart/panel");
        let labels: Vec<&str> = shell.nav.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Home", "Collections", "Offers", "Blog"]);
    }

    #[test]
    fn test_builder_options() {
        let shell = PageShell::new(&CartContext::default())
            .with_title("Collections")
            .with_layout(Layout::Centered)
            .with_class(" narrow ")
            .with_active("/collections")
            .without_cart();
        assert!(!shell.show_cart);
        assert_eq!(shell.document_title(), "Collections | SoleStyle");
        assert_eq!(shell.main_class(), "page-main page-main--centered narrow");
        assert!(shell.nav.iter().any(|l| l.active && l.href == "/collections"));
        assert_eq!(shell.nav.iter().filter(|l| l.active).count(), 1);
    }

    #[test]
    fn test_render_with_cart() {
        let html = render(PageShell::new(&cart_with_items(2)));
        assert!(html.contains("cart-button"));
        assert!(html.contains(r#"hx-get="/cart/panel""#));
        assert!(html.contains(r#"id="cart-count""#));
        assert!(html.contains(r#"id="floating-cart""#));
        assert!(html.contains(r#"<span class="floating-cart__count">2</span>"#));
        assert!(!html.contains("<h1>"));
        assert!(html.contains("<p>Body</p>"));
    }

    #[test]
    fn test_render_without_cart_and_with_title() {
        let shell = PageShell::new(&cart_with_items(2))
            .without_cart()
            .with_title("Size guide");
        let html = render(shell);
        assert!(!html.contains("cart-button"));
        assert!(!html.contains("cart-count"));
        assert!(!html.contains(r#"id="floating-cart""#));
        assert!(!html.contains(r#"id="cart-panel""#));
        assert!(html.contains("<h1>Size guide</h1>"));
        assert!(html.contains("<title>Size guide | SoleStyle</title>"));
        // chrome is still there
        assert!(html.contains("site-nav__link"));
        assert!(html.contains("site-footer__copyright"));
    }

    #[test]
    fn test_render_style_overrides() {
        let shell = PageShell::new(&CartContext::default())
            .with_layout(Layout::FullWidth)
            .with_header_class("site-header--dark")
            .with_footer_class("site-footer--compact");
        let html = render(shell);
        assert!(html.contains(r#"class="page-main page-main--full-width""#));
        assert!(html.contains("site-header site-header--dark"));
        assert!(html.contains("site-footer site-footer--compact"));
    }
}

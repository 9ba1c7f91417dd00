//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions with in-memory store)
//!
//! [`CartContext`] is an extractor rather than a layer: handlers that render
//! cart state ask for it explicitly.

pub mod cart_context;
pub mod request_id;
pub mod session;

pub use cart_context::{CartContext, load_cart, save_cart};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use session::create_session_layer;

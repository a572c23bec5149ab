//! product-rec — demo product-recommendation backend.
//!
//! A thin actix-web layer over an in-memory catalog engine plus a wrapper
//! around a public demo product API. The engine is where the design lives:
//!
//! ```text
//! loader ──► Catalog (immutable snapshot)
//!                 │
//!                 ├──► search_products (keyword + price heuristics + scoring)
//!                 ├──► smart_search_products (five-tier fallback cascade)
//!                 └──► index views (categories, brands, top-N, id lookup)
//! ```
//!
//! The catalog is built once at service construction and never mutated;
//! every query is a bounded scan, so concurrent reads need no locks.

pub mod api;
pub mod catalog;
pub mod external;
pub mod service;
pub mod tracing;

pub mod util {
    pub mod env;
}

pub use catalog::Product;
pub use service::ProductService;

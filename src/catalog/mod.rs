//! Catalog layer: the canonical product model, the resilient loader, and the
//! built-in fallback data.
//!
//! The catalog is built once at service construction and treated as an
//! immutable snapshot from then on; nothing in this crate mutates it.

pub mod fallback;
pub mod loader;
pub mod product;

pub use fallback::fallback_catalog;
pub use loader::{default_products_path, load_catalog, CatalogSource, LoadOutcome};
pub use product::Product;

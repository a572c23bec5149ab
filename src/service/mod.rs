//! Catalog search & ranking engine.
//!
//! `ProductService` owns one immutable catalog snapshot built at
//! construction. Every query is a bounded scan over that snapshot; nothing
//! here performs I/O, blocks, or mutates state, so concurrent reads need no
//! coordination. Queries degrade to empty results instead of propagating
//! faults.

pub mod price;
pub mod score;
pub mod smart;

use std::cmp::Ordering;
use std::path::Path;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::catalog::{load_catalog, CatalogSource, Product};
use price::extract_price_ceiling;
use score::relevance_score;

pub struct ProductService {
    catalog: Vec<Product>,
    source: CatalogSource,
}

impl ProductService {
    /// Build the service from a catalog file. Never fails: any load problem
    /// resolves to the built-in fallback catalog.
    pub fn from_path(path: &Path) -> Self {
        Self::from_path_with_rng(path, &mut StdRng::from_entropy())
    }

    /// Same as [`from_path`](Self::from_path) with an injected random source,
    /// so `sold` synthesis is reproducible under test.
    pub fn from_path_with_rng<R: Rng>(path: &Path, rng: &mut R) -> Self {
        let outcome = load_catalog(path, rng);
        info!(
            source = ?outcome.source,
            products = outcome.products.len(),
            issues = outcome.issues.len(),
            "product service ready"
        );
        Self {
            catalog: outcome.products,
            source: outcome.source,
        }
    }

    /// Build directly from already-canonical products (tests, fixtures).
    pub fn with_catalog(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            source: CatalogSource::File,
        }
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    /// Keyword search: candidates match by text or fall under a price
    /// ceiling derived from the query, ranked by relevance.
    ///
    /// The text test is token-wise: any whitespace token of the lowered
    /// keyword appearing in the product's searchable text is a hit, and the
    /// empty keyword matches everything. Sorting is stable, so equal scores
    /// keep catalog order.
    pub fn search_products(&self, keyword: &str, limit: usize) -> Vec<Product> {
        let ceiling = extract_price_ceiling(keyword);
        let lowered = keyword.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();

        let mut scored: Vec<(f64, &Product)> = self
            .catalog
            .iter()
            .filter(|p| {
                let text_hit =
                    tokens.is_empty() || text_matches(&p.searchable_text(), &tokens);
                let price_hit = ceiling.is_some_and(|c| p.price <= c);
                text_hit || price_hit
            })
            .map(|p| (relevance_score(keyword, p, ceiling), p))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, p)| p.clone())
            .collect()
    }

    /// First `limit` products in catalog order.
    pub fn get_products(&self, limit: usize) -> Vec<Product> {
        self.catalog.iter().take(limit).cloned().collect()
    }

    /// First product with the given id, if any.
    pub fn get_product_details(&self, id: &str) -> Option<Product> {
        self.catalog.iter().find(|p| p.id == id).cloned()
    }

    /// Distinct categories, sorted. A product without a category contributes
    /// the empty string.
    pub fn get_categories(&self) -> Vec<String> {
        self.catalog
            .iter()
            .map(|p| p.category.clone())
            .unique()
            .sorted()
            .collect()
    }

    /// Distinct brands, sorted.
    pub fn get_brands(&self) -> Vec<String> {
        self.catalog
            .iter()
            .map(|p| p.brand.clone())
            .unique()
            .sorted()
            .collect()
    }

    pub fn get_products_by_category(&self, name: &str) -> Vec<Product> {
        self.catalog
            .iter()
            .filter(|p| eq_ignore_case(&p.category, name))
            .cloned()
            .collect()
    }

    pub fn get_products_by_brand(&self, name: &str) -> Vec<Product> {
        self.catalog
            .iter()
            .filter(|p| eq_ignore_case(&p.brand, name))
            .cloned()
            .collect()
    }

    /// Top `limit` by rating, descending; missing ratings count as 0 and
    /// ties keep catalog order.
    pub fn get_top_rated_products(&self, limit: usize) -> Vec<Product> {
        rank_desc(&self.catalog, limit, |p| p.rating())
    }

    /// Top `limit` by units sold, descending; same tie rules as top-rated.
    pub fn get_best_selling_products(&self, limit: usize) -> Vec<Product> {
        rank_desc(&self.catalog, limit, |p| p.sold() as f64)
    }
}

fn text_matches(searchable: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|t| searchable.contains(t))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Stable descending sort of the whole catalog by a numeric key, capped.
fn rank_desc<F>(catalog: &[Product], limit: usize, key: F) -> Vec<Product>
where
    F: Fn(&Product) -> f64,
{
    let mut ranked: Vec<&Product> = catalog.iter().collect();
    ranked.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    ranked.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use indexmap::IndexMap;
    use serde_json::json;

    use crate::catalog::Product;

    /// Minimal canonical product for engine tests.
    pub fn product(
        id: &str,
        name: &str,
        category: &str,
        brand: &str,
        price: u64,
        rating: f64,
        sold: i64,
    ) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            brand: brand.into(),
            description: String::new(),
            price,
            currency: "IDR".into(),
            specifications: IndexMap::from([
                ("rating".to_string(), json!(rating)),
                ("sold".to_string(), json!(sold)),
            ]),
            availability: "in_stock".into(),
            reviews_count: 0,
            images: vec![],
            url: String::new(),
        }
    }
}

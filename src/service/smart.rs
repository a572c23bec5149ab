// Smart search: five-tier cascading resolver.
//
// Natural-language queries routinely over-constrain (category + budget +
// keyword with an empty intersection). Instead of returning nothing, the
// constraints are relaxed in a fixed order so a usable list is surfaced
// whenever the catalog is non-empty. Each tier pairs its ordering with its
// own explanatory message; that pairing is part of the contract.

use tracing::debug;

use super::price::extract_price_ceiling;
use super::ProductService;
use crate::catalog::Product;

/// Marker words that route a query into the best-products tier.
const BEST_MARKERS: [&str; 2] = ["terbaik", "best"];

impl ProductService {
    /// Resolve `(keyword, category?, max_price?, limit)` into a product list
    /// plus a message explaining what the list is.
    ///
    /// Tiers, attempted strictly in order:
    /// 1. best-request — keyword carries a "best" marker → top by rating
    /// 2. exact match — intersection of the supplied constraints, catalog order
    /// 3. category fallback — everything in the category, cheapest first
    /// 4. budget fallback — everything under the ceiling, catalog order
    /// 5. popularity — top by units sold (terminal, always answers)
    ///
    /// The ceiling is the explicit `max_price`, or one derived from the
    /// keyword when none was given.
    pub fn smart_search_products(
        &self,
        keyword: &str,
        category: Option<&str>,
        max_price: Option<u64>,
        limit: usize,
    ) -> (Vec<Product>, String) {
        let ceiling = max_price.or_else(|| extract_price_ceiling(keyword));
        let lowered = keyword.to_lowercase();

        // Tier 1: explicit request for the best products.
        if BEST_MARKERS.iter().any(|m| lowered.contains(m)) {
            debug!(keyword, "smart search: best-request tier");
            if let Some(cat) = category {
                let in_category = self.get_products_by_category(cat);
                if !in_category.is_empty() {
                    let top = top_by_rating(in_category, limit);
                    return (
                        top,
                        format!("Berikut produk {cat} terbaik berdasarkan rating:"),
                    );
                }
                return (
                    self.get_top_rated_products(limit),
                    format!(
                        "Kategori {cat} belum tersedia, berikut produk terbaik dari semua kategori:"
                    ),
                );
            }
            return (
                self.get_top_rated_products(limit),
                "Berikut produk terbaik berdasarkan rating:".to_string(),
            );
        }

        // Tier 2: intersection of whichever constraints were supplied. The
        // keyword here is a literal substring test; the empty keyword
        // trivially matches.
        let exact: Vec<Product> = self
            .catalog()
            .iter()
            .filter(|p| {
                let text_hit = p.searchable_text().contains(&lowered);
                let category_hit = category
                    .is_none_or(|c| p.category.to_lowercase() == c.to_lowercase());
                let price_hit = ceiling.is_none_or(|c| p.price <= c);
                text_hit && category_hit && price_hit
            })
            .take(limit)
            .cloned()
            .collect();
        if !exact.is_empty() {
            debug!(count = exact.len(), "smart search: exact-match tier");
            return (
                exact,
                "Berikut produk yang sesuai dengan kriteria pencarian Anda:".to_string(),
            );
        }

        // Tier 3: relax the budget, keep the category, cheapest first.
        if let Some(cat) = category {
            let mut in_category = self.get_products_by_category(cat);
            if !in_category.is_empty() {
                debug!(category = cat, "smart search: category-fallback tier");
                in_category.sort_by_key(|p| p.price);
                in_category.truncate(limit);
                return (
                    in_category,
                    format!(
                        "Tidak ada produk {cat} di bawah budget Anda, berikut pilihan paling murah di kategori tersebut:"
                    ),
                );
            }
        }

        // Tier 4: relax the category, keep the budget, catalog order.
        if let Some(max) = ceiling {
            let within: Vec<Product> = self
                .catalog()
                .iter()
                .filter(|p| p.price <= max)
                .take(limit)
                .cloned()
                .collect();
            if !within.is_empty() {
                debug!(ceiling = max, "smart search: budget-fallback tier");
                return (
                    within,
                    "Tidak ada produk di kategori itu, berikut produk lain yang masuk budget Anda:"
                        .to_string(),
                );
            }
        }

        // Tier 5: nothing matched anything; surface what sells.
        debug!("smart search: popularity tier");
        (
            self.get_best_selling_products(limit),
            "Tidak ada produk yang cocok, berikut produk terlaris kami:".to_string(),
        )
    }
}

fn top_by_rating(mut products: Vec<Product>, limit: usize) -> Vec<Product> {
    products.sort_by(|a, b| {
        b.rating()
            .partial_cmp(&a.rating())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    products.truncate(limit);
    products
}

#[cfg(test)]
mod tests {
    use super::super::test_support::product;
    use super::*;

    fn service() -> ProductService {
        ProductService::with_catalog(vec![
            product("1", "Smartphone G", "Electronics", "GBrand", 4_000_000, 4.1, 300),
            product("2", "Smartphone H", "Electronics", "HBrand", 6_000_000, 4.8, 900),
            product("3", "Sepatu Lari", "Fashion", "Nike", 700_000, 4.5, 1500),
            product("4", "Rice Cooker", "Home Appliances", "Miyako", 300_000, 4.2, 5000),
        ])
    }

    #[test]
    fn best_marker_with_category_returns_top_rated_in_category() {
        let svc = service();
        let (products, message) =
            svc.smart_search_products("hp terbaik", Some("Electronics"), None, 5);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "2");
        assert!(message.contains("Electronics"));
        assert!(message.contains("terbaik"));
    }

    #[test]
    fn best_marker_with_empty_category_falls_back_to_overall() {
        let svc = service();
        let (products, message) =
            svc.smart_search_products("best laptop", Some("Groceries"), None, 5);
        // Never empty on a non-empty catalog; the message names the missing category.
        assert!(!products.is_empty());
        assert_eq!(products[0].id, "2");
        assert!(message.contains("Groceries"));
        assert!(message.contains("belum tersedia"));
    }

    #[test]
    fn best_marker_without_category_returns_overall_top_rated() {
        let svc = service();
        let (products, message) = svc.smart_search_products("terbaik", None, None, 2);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "2");
        assert_eq!(message, "Berikut produk terbaik berdasarkan rating:");
    }

    #[test]
    fn exact_tier_intersects_all_supplied_constraints() {
        let svc = service();
        let (products, message) = svc.smart_search_products(
            "smartphone",
            Some("Electronics"),
            Some(5_000_000),
            10,
        );
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "1");
        assert!(message.contains("sesuai"));
    }

    #[test]
    fn exact_tier_keeps_catalog_order() {
        let svc = service();
        let (products, _) = svc.smart_search_products("smartphone", None, None, 10);
        let ids: Vec<String> = products.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn category_fallback_sorts_by_price_ascending() {
        let svc = service();
        // Nothing in Electronics is under 100, so tier 3 fires.
        let (products, message) =
            svc.smart_search_products("zzzz", Some("Electronics"), Some(100), 10);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "1");
        assert_eq!(products[1].id, "2");
        assert!(message.contains("paling murah"));
    }

    #[test]
    fn budget_fallback_uses_derived_ceiling() {
        let svc = service();
        // No text match, no category; ceiling comes from the keyword.
        let (products, message) = svc.smart_search_products("zzzz 1 juta", None, None, 10);
        let ids: Vec<String> = products.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["3", "4"]);
        assert!(message.contains("budget"));
    }

    #[test]
    fn budget_fallback_uses_explicit_max_price() {
        let svc = service();
        // No text match, no category; the explicit ceiling keeps tier 4 alive.
        let (products, message) = svc.smart_search_products("zzzz", None, Some(1_000_000), 10);
        let ids: Vec<String> = products.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["3", "4"]);
        assert!(message.contains("budget"));
    }

    #[test]
    fn explicit_max_price_under_everything_lands_in_popularity_tier() {
        let svc = service();
        // Nothing matches the keyword and nothing is under budget, so the
        // explicit ceiling skips through tier 4 into the terminal tier.
        let (products, message) = svc.smart_search_products("zzzz", None, Some(100), 10);
        assert_eq!(products.len(), 4);
        for pair in products.windows(2) {
            assert!(pair[0].sold() >= pair[1].sold());
        }
        assert_eq!(products[0].id, "4");
        assert!(message.contains("terlaris"));
    }

    #[test]
    fn popularity_tier_is_terminal() {
        let svc = service();
        let (products, message) = svc.smart_search_products("zzzz", None, None, 3);
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].id, "4");
        assert!(message.contains("terlaris"));
    }

    #[test]
    fn popularity_tier_on_empty_catalog_is_empty_but_answers() {
        let svc = ProductService::with_catalog(vec![]);
        let (products, message) = svc.smart_search_products("anything", None, None, 5);
        assert!(products.is_empty());
        assert!(message.contains("terlaris"));
    }
}

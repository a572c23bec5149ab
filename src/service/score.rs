// Relevance scoring: rank-only scalar for one (keyword, product, ceiling).

use crate::catalog::Product;

const NAME_WEIGHT: f64 = 10.0;
const BRAND_WEIGHT: f64 = 5.0;
const CATEGORY_WEIGHT: f64 = 3.0;

/// Anchor for the budget-sensitivity term: cheaper than this scores up,
/// pricier scores down.
const BUDGET_REFERENCE_PRICE: f64 = 10_000_000.0;
const BUDGET_SCALE: f64 = 1_000_000.0;

/// Score a product against a keyword and an optional price ceiling.
///
/// The three substring weights are independent and additive. The budget term
/// only applies when a ceiling was derived from the query, and it can go
/// negative: an over-budget product that matches by name can still rank
/// below a cheap product that matches nothing. The absolute value carries no
/// meaning; callers use it solely for descending sort.
pub fn relevance_score(keyword: &str, product: &Product, ceiling: Option<u64>) -> f64 {
    let lowered = keyword.to_lowercase();
    let mut score = 0.0;

    if product.name.to_lowercase().contains(&lowered) {
        score += NAME_WEIGHT;
    }
    if product.brand.to_lowercase().contains(&lowered) {
        score += BRAND_WEIGHT;
    }
    if product.category.to_lowercase().contains(&lowered) {
        score += CATEGORY_WEIGHT;
    }

    if ceiling.is_some() {
        score += (BUDGET_REFERENCE_PRICE - product.price as f64) / BUDGET_SCALE;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn product(name: &str, brand: &str, category: &str, price: u64) -> Product {
        Product {
            id: "t".into(),
            name: name.into(),
            category: category.into(),
            brand: brand.into(),
            description: String::new(),
            price,
            currency: "IDR".into(),
            specifications: IndexMap::new(),
            availability: "in_stock".into(),
            reviews_count: 0,
            images: vec![],
            url: String::new(),
        }
    }

    #[test]
    fn name_outranks_brand_outranks_category() {
        let by_name = product("Kamera Mirrorless", "X", "Y", 0);
        let by_brand = product("X", "Kamera Nusantara", "Y", 0);
        let by_category = product("X", "Y", "Kamera", 0);
        let name_score = relevance_score("kamera", &by_name, None);
        let brand_score = relevance_score("kamera", &by_brand, None);
        let category_score = relevance_score("kamera", &by_category, None);
        assert!(name_score > brand_score);
        assert!(brand_score > category_score);
    }

    #[test]
    fn weights_are_additive() {
        let all = product("Sony Kamera", "Sony", "Elektronik Sony", 0);
        assert_eq!(relevance_score("sony", &all, None), 18.0);
    }

    #[test]
    fn budget_term_only_applies_with_ceiling() {
        let p = product("Laptop", "A", "B", 4_000_000);
        assert_eq!(relevance_score("laptop", &p, None), 10.0);
        assert_eq!(relevance_score("laptop", &p, Some(5_000_000)), 16.0);
    }

    #[test]
    fn over_budget_match_can_score_below_cheap_non_match() {
        let pricey_match = product("Smartphone Flagship", "A", "B", 25_000_000);
        let cheap_miss = product("Charger", "A", "B", 100_000);
        let ceiling = Some(5_000_000);
        assert!(
            relevance_score("smartphone", &pricey_match, ceiling)
                < relevance_score("smartphone", &cheap_miss, ceiling)
        );
    }
}

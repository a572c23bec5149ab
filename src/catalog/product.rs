// Canonical product model shared by the loader, the search engine, and the API.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A fully normalized catalog product.
///
/// Every field is guaranteed present after normalization; the loader fills
/// documented defaults for anything the source record omits. `specifications`
/// is an open map — the loader seeds the well-known keys (`rating`, `sold`,
/// `stock`, `condition`, `shop_location`, `shop_name`) and merges any extra
/// source keys in untouched, preserving their order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub description: String,
    /// Price in whole currency units (IDR has no minor unit in practice).
    pub price: u64,
    pub currency: String,
    pub specifications: IndexMap<String, Value>,
    pub availability: String,
    pub reviews_count: u64,
    pub images: Vec<String>,
    pub url: String,
}

impl Product {
    /// Rating out of the specifications map; absent or non-numeric reads as 0.
    pub fn rating(&self) -> f64 {
        self.specifications
            .get("rating")
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    /// Units-sold counter out of the specifications map; defaults to 0.
    pub fn sold(&self) -> i64 {
        self.specifications
            .get("sold")
            .and_then(Value::as_i64)
            .unwrap_or(0)
    }

    /// Lower-cased concatenation of every text facet a keyword can hit:
    /// name, description, category, brand, and a rendering of the
    /// specifications map.
    pub fn searchable_text(&self) -> String {
        let specs =
            serde_json::to_string(&self.specifications).unwrap_or_default();
        format!(
            "{} {} {} {} {}",
            self.name, self.description, self.category, self.brand, specs
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Product {
        Product {
            id: "p1".into(),
            name: "Laptop Pro 14".into(),
            category: "Electronics".into(),
            brand: "Lenovo".into(),
            description: "Ultrabook ringan".into(),
            price: 15_000_000,
            currency: "IDR".into(),
            specifications: IndexMap::from([
                ("rating".to_string(), json!(4.6)),
                ("sold".to_string(), json!(120)),
                ("ram".to_string(), json!("16GB")),
            ]),
            availability: "in_stock".into(),
            reviews_count: 34,
            images: vec!["https://example.com/p1.jpg".into()],
            url: "https://shop.example.com/products/p1".into(),
        }
    }

    #[test]
    fn rating_and_sold_read_from_specifications() {
        let p = sample();
        assert_eq!(p.rating(), 4.6);
        assert_eq!(p.sold(), 120);
    }

    #[test]
    fn missing_rating_reads_as_zero() {
        let mut p = sample();
        p.specifications.shift_remove("rating");
        assert_eq!(p.rating(), 0.0);
    }

    #[test]
    fn searchable_text_covers_specification_values() {
        let p = sample();
        let text = p.searchable_text();
        assert!(text.contains("laptop pro 14"));
        assert!(text.contains("lenovo"));
        assert!(text.contains("16gb"));
    }
}

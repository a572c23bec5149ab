// Built-in catalog used whenever the external resource cannot be loaded.

use indexmap::IndexMap;
use serde_json::{json, Value};

use super::product::Product;

struct Seed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    brand: &'static str,
    description: &'static str,
    price: u64,
    rating: f64,
    sold: i64,
    stock: i64,
}

const SEEDS: [Seed; 8] = [
    Seed {
        id: "fb-001",
        name: "Samsung Galaxy A54 5G",
        category: "Electronics",
        brand: "Samsung",
        description: "Smartphone 5G dengan layar Super AMOLED 6.4 inci",
        price: 5_499_000,
        rating: 4.7,
        sold: 1250,
        stock: 35,
    },
    Seed {
        id: "fb-002",
        name: "Xiaomi Redmi Note 12",
        category: "Electronics",
        brand: "Xiaomi",
        description: "Smartphone murah dengan baterai 5000mAh",
        price: 2_399_000,
        rating: 4.5,
        sold: 3400,
        stock: 120,
    },
    Seed {
        id: "fb-003",
        name: "ASUS VivoBook 14",
        category: "Electronics",
        brand: "ASUS",
        description: "Laptop kerja ringan dengan Ryzen 5 dan SSD 512GB",
        price: 7_899_000,
        rating: 4.6,
        sold: 480,
        stock: 18,
    },
    Seed {
        id: "fb-004",
        name: "Sepatu Lari Nike Revolution 6",
        category: "Fashion",
        brand: "Nike",
        description: "Sepatu lari ringan untuk pemakaian harian",
        price: 699_000,
        rating: 4.4,
        sold: 2100,
        stock: 64,
    },
    Seed {
        id: "fb-005",
        name: "Kemeja Flanel Uniqlo",
        category: "Fashion",
        brand: "Uniqlo",
        description: "Kemeja flanel lengan panjang bahan katun",
        price: 399_000,
        rating: 4.3,
        sold: 890,
        stock: 200,
    },
    Seed {
        id: "fb-006",
        name: "Rice Cooker Miyako 1.8L",
        category: "Home Appliances",
        brand: "Miyako",
        description: "Penanak nasi 1.8 liter dengan fungsi warm",
        price: 289_000,
        rating: 4.5,
        sold: 5600,
        stock: 150,
    },
    Seed {
        id: "fb-007",
        name: "Blender Philips HR2115",
        category: "Home Appliances",
        brand: "Philips",
        description: "Blender 2 liter dengan 5 kecepatan",
        price: 549_000,
        rating: 4.6,
        sold: 1700,
        stock: 42,
    },
    Seed {
        id: "fb-008",
        name: "TWS Earbuds JBL Wave 100",
        category: "Electronics",
        brand: "JBL",
        description: "Earbuds nirkabel dengan JBL Deep Bass Sound",
        price: 499_000,
        rating: 4.2,
        sold: 950,
        stock: 77,
    },
];

/// The fixed 8-item fallback catalog. Fully canonical: every product carries
/// the same guaranteed fields the loader would have produced.
pub fn fallback_catalog() -> Vec<Product> {
    SEEDS.iter().map(build).collect()
}

fn build(seed: &Seed) -> Product {
    let specifications: IndexMap<String, Value> = IndexMap::from([
        ("rating".to_string(), json!(seed.rating)),
        ("sold".to_string(), json!(seed.sold)),
        ("stock".to_string(), json!(seed.stock)),
        ("condition".to_string(), json!("Baru")),
        ("shop_location".to_string(), json!("Indonesia")),
        (
            "shop_name".to_string(),
            json!(format!("{} Store", seed.brand)),
        ),
    ]);

    Product {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        category: seed.category.to_string(),
        brand: seed.brand.to_string(),
        description: seed.description.to_string(),
        price: seed.price,
        currency: "IDR".to_string(),
        specifications,
        availability: "in_stock".to_string(),
        reviews_count: 0,
        images: vec![format!(
            "https://via.placeholder.com/300x300?text={}",
            urlencoding::encode(seed.name)
        )],
        url: format!("https://shop.example.com/products/{}", seed.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_eight_products() {
        let catalog = fallback_catalog();
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn fallback_products_are_canonical() {
        for p in fallback_catalog() {
            assert!(!p.id.is_empty());
            assert_eq!(p.currency, "IDR");
            assert!(p.rating() > 0.0);
            assert!(p.sold() > 0);
            assert!(p.specifications.contains_key("shop_name"));
            assert!(!p.images.is_empty());
            assert!(p.url.contains(&p.id));
        }
    }
}

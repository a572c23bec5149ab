// Client for the public DummyJSON demo product API.
//
// This is a thin collaborator next to the local catalog engine: results are
// mapped into the canonical `Product` so API consumers see one shape
// regardless of origin.

use anyhow::Result;
use indexmap::IndexMap;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tokio::time::Duration;
use tracing::debug;

use crate::catalog::Product;

#[derive(Debug, Clone)]
pub struct DummyJsonClient {
    base_url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct ProductListResponse {
    #[serde(default)]
    products: Vec<RemoteProduct>,
}

#[derive(Debug, Deserialize)]
struct RemoteProduct {
    id: i64,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    stock: i64,
    #[serde(default)]
    images: Vec<String>,
}

impl DummyJsonClient {
    pub fn new(base_url: Option<&str>, timeout_secs: Option<u64>) -> Result<Self> {
        let base_url = base_url
            .unwrap_or("https://dummyjson.com")
            .trim_end_matches('/')
            .to_string();
        let http = Client::builder()
            .user_agent("product-rec/0.1")
            .timeout(Duration::from_secs(timeout_secs.unwrap_or(10)))
            .build()?;
        Ok(Self { base_url, http })
    }

    /// Keyword search against the remote demo catalog.
    pub async fn search_products(&self, query: &str, limit: usize) -> Result<Vec<Product>> {
        let url = format!(
            "{}/products/search?q={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        );
        debug!(%url, "dummyjson search");
        let resp: ProductListResponse = self.http.get(&url).send().await?.json().await?;
        Ok(resp.products.iter().map(to_product).collect())
    }

    /// First `limit` remote products.
    pub async fn get_products(&self, limit: usize) -> Result<Vec<Product>> {
        let url = format!("{}/products?limit={}", self.base_url, limit);
        debug!(%url, "dummyjson list");
        let resp: ProductListResponse = self.http.get(&url).send().await?.json().await?;
        Ok(resp.products.iter().map(to_product).collect())
    }

    /// Single remote product by numeric id.
    pub async fn get_product(&self, id: i64) -> Result<Product> {
        let url = format!("{}/products/{}", self.base_url, id);
        debug!(%url, "dummyjson detail");
        let remote: RemoteProduct = self.http.get(&url).send().await?.json().await?;
        Ok(to_product(&remote))
    }
}

/// Map a DummyJSON payload into the canonical product. Remote prices are USD
/// with cents; they are kept in whole dollars since the score and budget
/// heuristics never apply to external results.
fn to_product(remote: &RemoteProduct) -> Product {
    let brand = remote.brand.clone().unwrap_or_default();
    let shop_name = if brand.is_empty() {
        "Unknown Store".to_string()
    } else {
        format!("{brand} Store")
    };

    let specifications: IndexMap<String, serde_json::Value> = IndexMap::from([
        ("rating".to_string(), json!(remote.rating)),
        ("sold".to_string(), json!(0)),
        ("stock".to_string(), json!(remote.stock)),
        ("condition".to_string(), json!("Baru")),
        ("shop_location".to_string(), json!("International")),
        ("shop_name".to_string(), json!(shop_name)),
    ]);

    Product {
        id: format!("ext-{}", remote.id),
        name: remote.title.clone(),
        category: remote.category.clone(),
        brand,
        description: remote.description.clone(),
        price: remote.price.max(0.0) as u64,
        currency: "USD".to_string(),
        specifications,
        availability: if remote.stock > 0 {
            "in_stock".to_string()
        } else {
            "out_of_stock".to_string()
        },
        reviews_count: 0,
        images: if remote.images.is_empty() {
            vec![format!(
                "https://via.placeholder.com/300x300?text={}",
                urlencoding::encode(&remote.title)
            )]
        } else {
            remote.images.clone()
        },
        url: format!("https://dummyjson.com/products/{}", remote.id),
    }
}

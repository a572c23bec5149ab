// Catalog loader: file → ordered encoding probe → JSON → normalized products.
//
// Loading never fails the caller. Every failure mode (missing file, decode
// error, parse error, unreadable file) is recorded and resolves to the
// built-in fallback catalog.

use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use indexmap::IndexMap;
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::fallback::fallback_catalog;
use super::product::Product;

/// Decode attempts in priority order: multi-byte encodings before the legacy
/// single-byte one, because Windows-1252 decodes any byte soup "successfully"
/// and would otherwise shadow UTF-16 payloads with mojibake.
const ENCODINGS: [&Encoding; 4] = [UTF_8, UTF_16LE, UTF_16BE, WINDOWS_1252];

/// Synthesized units-sold range for records that do not carry one.
const SOLD_RANGE: std::ops::RangeInclusive<i64> = 50..=500;

/// Where the catalog snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    File,
    Fallback,
}

/// Result of a load: the products plus everything that went wrong on the way.
#[derive(Debug)]
pub struct LoadOutcome {
    pub products: Vec<Product>,
    pub source: CatalogSource,
    /// One entry per failed step (missing path, per-encoding decode/parse
    /// failures, unreadable file).
    pub issues: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    products: Vec<Value>,
}

/// Resolve the catalog path: `PRODUCTS_PATH` env override, else the bundled
/// relative default.
pub fn default_products_path() -> PathBuf {
    crate::util::env::env_opt("PRODUCTS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/products.json"))
}

/// Load and normalize the catalog from `path`.
///
/// The random source drives `sold` synthesis for records missing an explicit
/// value; inject a seeded one to make loads reproducible.
pub fn load_catalog<R: Rng>(path: &Path, rng: &mut R) -> LoadOutcome {
    let mut issues = Vec::new();

    if !path.exists() {
        issues.push(format!("catalog file not found: {}", path.display()));
        return fall_back(issues);
    }

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            issues.push(format!("catalog file unreadable: {err}"));
            return fall_back(issues);
        }
    };

    let raw = match decode_and_parse(&bytes, &mut issues) {
        Some(raw) => raw,
        None => return fall_back(issues),
    };

    let products: Vec<Product> = raw
        .products
        .iter()
        .map(|record| normalize_record(record, rng))
        .collect();

    info!(
        path = %path.display(),
        count = products.len(),
        "catalog loaded"
    );
    LoadOutcome {
        products,
        source: CatalogSource::File,
        issues,
    }
}

/// Probe the encoding list in order; the first attempt that both decodes and
/// parses wins. Each failed attempt is recorded individually.
fn decode_and_parse(bytes: &[u8], issues: &mut Vec<String>) -> Option<RawCatalog> {
    for encoding in ENCODINGS {
        let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
        if had_errors {
            issues.push(format!("{}: decode failed", encoding.name()));
            continue;
        }
        // A BOM may survive as U+FEFF for any of the probed encodings.
        let text = text.trim_start_matches('\u{feff}');
        match serde_json::from_str::<RawCatalog>(text) {
            Ok(raw) => {
                debug!(encoding = encoding.name(), "catalog decoded");
                return Some(raw);
            }
            Err(err) => {
                issues.push(format!("{}: parse failed: {err}", encoding.name()));
            }
        }
    }
    None
}

fn fall_back(issues: Vec<String>) -> LoadOutcome {
    for issue in &issues {
        warn!(issue = %issue, "catalog load issue");
    }
    warn!("using built-in fallback catalog");
    LoadOutcome {
        products: fallback_catalog(),
        source: CatalogSource::Fallback,
        issues,
    }
}

/// Build the canonical product from a loosely-typed source record. Every
/// canonical field gets its documented default when absent; source values
/// always win over defaults.
fn normalize_record<R: Rng>(raw: &Value, rng: &mut R) -> Product {
    let id = str_field(raw, "id");
    let name = str_field(raw, "name");
    let brand = str_field(raw, "brand");

    let shop_name = if brand.is_empty() {
        "Unknown Store".to_string()
    } else {
        format!("{brand} Store")
    };

    let sold = raw
        .get("sold")
        .cloned()
        .unwrap_or_else(|| json!(rng.gen_range(SOLD_RANGE)));

    let mut specifications: IndexMap<String, Value> = IndexMap::from([
        ("rating".to_string(), raw.get("rating").cloned().unwrap_or(json!(0))),
        ("sold".to_string(), sold),
        ("stock".to_string(), json!(0)),
        ("condition".to_string(), json!("Baru")),
        ("shop_location".to_string(), json!("Indonesia")),
        ("shop_name".to_string(), json!(shop_name)),
    ]);
    if let Some(source_specs) = raw.get("specifications").and_then(Value::as_object) {
        for (key, value) in source_specs {
            specifications.insert(key.clone(), value.clone());
        }
    }

    let images = raw
        .get("images")
        .and_then(Value::as_array)
        .map(|urls| {
            urls.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|urls| !urls.is_empty())
        .unwrap_or_else(|| {
            vec![format!(
                "https://via.placeholder.com/300x300?text={}",
                urlencoding::encode(&name)
            )]
        });

    let url = raw
        .get("url")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("https://shop.example.com/products/{id}"));

    Product {
        url,
        images,
        specifications,
        category: str_field(raw, "category"),
        description: str_field(raw, "description"),
        price: uint_field(raw, "price"),
        currency: raw
            .get("currency")
            .and_then(Value::as_str)
            .unwrap_or("IDR")
            .to_string(),
        availability: raw
            .get("availability")
            .and_then(Value::as_str)
            .unwrap_or("in_stock")
            .to_string(),
        reviews_count: uint_field(raw, "reviews_count"),
        id,
        name,
        brand,
    }
}

fn str_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn uint_field(raw: &Value, key: &str) -> u64 {
    let value = match raw.get(key) {
        Some(v) => v,
        None => return 0,
    };
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
        .unwrap_or(0)
}

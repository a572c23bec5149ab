// HTTP request handlers for API endpoints

use actix_web::{web, HttpResponse, Result};
use tracing::warn;

use crate::api::models::*;
use crate::catalog::CatalogSource;
use crate::external::DummyJsonClient;
use crate::service::ProductService;

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 50;

fn cap(limit: Option<usize>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT)
}

/// Health check endpoint
pub async fn health_check(svc: web::Data<ProductService>) -> Result<HttpResponse> {
    let source = match svc.source() {
        CatalogSource::File => "file",
        CatalogSource::Fallback => "fallback",
    };
    let response = ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        catalog_source: source.to_string(),
        catalog_size: svc.catalog().len(),
    });
    Ok(HttpResponse::Ok().json(response))
}

/// List catalog products in original order
pub async fn get_products(
    query: web::Query<ListQuery>,
    svc: web::Data<ProductService>,
) -> Result<HttpResponse> {
    let products = svc.get_products(cap(query.limit));
    Ok(HttpResponse::Ok().json(ApiResponse::success(products)))
}

/// Single product by id
pub async fn get_product_details(
    path: web::Path<String>,
    svc: web::Data<ProductService>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    match svc.get_product_details(&id) {
        Some(product) => Ok(HttpResponse::Ok().json(ApiResponse::success(product))),
        None => Ok(HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("product {id} not found")))),
    }
}

/// Keyword search over the local catalog
pub async fn search_products(
    query: web::Query<SearchQuery>,
    svc: web::Data<ProductService>,
) -> Result<HttpResponse> {
    let products = svc.search_products(&query.q, cap(query.limit));
    Ok(HttpResponse::Ok().json(ApiResponse::success(products)))
}

/// Smart recommendations: five-tier resolver with an explanatory message
pub async fn get_recommendations(
    query: web::Query<RecommendQuery>,
    svc: web::Data<ProductService>,
) -> Result<HttpResponse> {
    let (products, message) = svc.smart_search_products(
        &query.q,
        query.category.as_deref(),
        query.max_price,
        cap(query.limit),
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(RecommendationData {
        message,
        products,
    })))
}

pub async fn get_categories(svc: web::Data<ProductService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(svc.get_categories())))
}

pub async fn get_brands(svc: web::Data<ProductService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(svc.get_brands())))
}

pub async fn get_products_by_category(
    path: web::Path<String>,
    svc: web::Data<ProductService>,
) -> Result<HttpResponse> {
    let products = svc.get_products_by_category(&path.into_inner());
    Ok(HttpResponse::Ok().json(ApiResponse::success(products)))
}

pub async fn get_products_by_brand(
    path: web::Path<String>,
    svc: web::Data<ProductService>,
) -> Result<HttpResponse> {
    let products = svc.get_products_by_brand(&path.into_inner());
    Ok(HttpResponse::Ok().json(ApiResponse::success(products)))
}

pub async fn get_top_rated(
    query: web::Query<ListQuery>,
    svc: web::Data<ProductService>,
) -> Result<HttpResponse> {
    let products = svc.get_top_rated_products(cap(query.limit));
    Ok(HttpResponse::Ok().json(ApiResponse::success(products)))
}

pub async fn get_best_selling(
    query: web::Query<ListQuery>,
    svc: web::Data<ProductService>,
) -> Result<HttpResponse> {
    let products = svc.get_best_selling_products(cap(query.limit));
    Ok(HttpResponse::Ok().json(ApiResponse::success(products)))
}

/// Keyword search over the external demo catalog. Remote failures degrade to
/// an empty list rather than a 5xx.
pub async fn search_external(
    query: web::Query<SearchQuery>,
    client: web::Data<DummyJsonClient>,
) -> Result<HttpResponse> {
    let products = match client.search_products(&query.q, cap(query.limit)).await {
        Ok(products) => products,
        Err(err) => {
            warn!(error = %err, "external search failed; returning empty list");
            Vec::new()
        }
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(products)))
}

/// First N products of the external demo catalog, same degradation as search.
pub async fn list_external(
    query: web::Query<ListQuery>,
    client: web::Data<DummyJsonClient>,
) -> Result<HttpResponse> {
    let products = match client.get_products(cap(query.limit)).await {
        Ok(products) => products,
        Err(err) => {
            warn!(error = %err, "external listing failed; returning empty list");
            Vec::new()
        }
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(products)))
}

/// Single external product by numeric id. Any remote failure (unreachable,
/// unknown id, malformed payload) maps to a 404 so callers see one shape.
pub async fn get_external_product(
    path: web::Path<i64>,
    client: web::Data<DummyJsonClient>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    match client.get_product(id).await {
        Ok(product) => Ok(HttpResponse::Ok().json(ApiResponse::success(product))),
        Err(err) => {
            warn!(error = %err, id, "external detail failed");
            Ok(HttpResponse::NotFound()
                .json(ApiResponse::<()>::error(format!("external product {id} not found"))))
        }
    }
}

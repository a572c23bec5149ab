// API route configuration

use actix_web::web;

use crate::api::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(handlers::health_check))
        .route("/", web::get().to(handlers::health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                // Local catalog
                .route("/products", web::get().to(handlers::get_products))
                .route("/products/search", web::get().to(handlers::search_products))
                .route("/products/top-rated", web::get().to(handlers::get_top_rated))
                .route(
                    "/products/best-selling",
                    web::get().to(handlers::get_best_selling),
                )
                .route("/products/{id}", web::get().to(handlers::get_product_details))
                // Smart recommendations
                .route(
                    "/recommendations",
                    web::get().to(handlers::get_recommendations),
                )
                // Index views
                .route("/categories", web::get().to(handlers::get_categories))
                .route(
                    "/categories/{name}/products",
                    web::get().to(handlers::get_products_by_category),
                )
                .route("/brands", web::get().to(handlers::get_brands))
                .route(
                    "/brands/{name}/products",
                    web::get().to(handlers::get_products_by_brand),
                )
                // External demo catalog
                .route(
                    "/external/search",
                    web::get().to(handlers::search_external),
                )
                .route(
                    "/external/products",
                    web::get().to(handlers::list_external),
                )
                .route(
                    "/external/products/{id}",
                    web::get().to(handlers::get_external_product),
                ),
        );
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use super::configure_routes;
    use crate::api::models::ApiResponse;
    use crate::catalog::Product;
    use crate::external::DummyJsonClient;
    use crate::service::ProductService;

    // The external client points at a closed local port, so every remote call
    // fails fast and the handlers take their degradation paths.
    fn app_data() -> (web::Data<ProductService>, web::Data<DummyJsonClient>) {
        let svc = ProductService::with_catalog(vec![]);
        let client = DummyJsonClient::new(Some("http://127.0.0.1:9"), Some(1)).unwrap();
        (web::Data::new(svc), web::Data::new(client))
    }

    #[actix_web::test]
    async fn external_listing_degrades_to_empty_list() {
        let (svc, client) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(svc)
                .app_data(client)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/external/products?limit=5")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body: ApiResponse<Vec<Product>> = test::read_body_json(resp).await;
        assert!(body.success);
        assert_eq!(body.data.unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn external_detail_maps_remote_failure_to_not_found() {
        let (svc, client) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(svc)
                .app_data(client)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/external/products/7")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body: ApiResponse<Product> = test::read_body_json(resp).await;
        assert!(!body.success);
        assert!(body.error.unwrap().contains("7"));
    }
}

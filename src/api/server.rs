// API server implementation using actix-web

use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use tracing::info;

use crate::api::{middleware, routes};
use crate::external::DummyJsonClient;
use crate::service::ProductService;
use crate::util::env::{env_opt, env_parse};

pub struct ApiServer {
    pub host: String,
    pub port: u16,
    pub allowed_origins: String,
}

impl ApiServer {
    /// Create server from environment variables
    pub fn from_env() -> Result<Self> {
        crate::util::env::init_env();

        let host = env_opt("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = env_parse("API_PORT", 8080);
        let allowed_origins = env_opt("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000,http://localhost:8000".to_string());

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }

    /// Start the HTTP server around an already-built catalog service
    pub async fn run(self, service: ProductService) -> Result<()> {
        let bind_addr = format!("{}:{}", self.host, self.port);

        info!(
            host = %self.host,
            port = %self.port,
            catalog_size = service.catalog().len(),
            "starting product-rec API server"
        );

        let external = DummyJsonClient::new(
            env_opt("DUMMYJSON_BASE_URL").as_deref(),
            Some(env_parse("DUMMYJSON_TIMEOUT", 10u64)),
        )
        .context("failed to build external demo-API client")?;

        let service_data = web::Data::new(service);
        let external_data = web::Data::new(external);
        let allowed_origins = self.allowed_origins.clone();

        HttpServer::new(move || {
            let (logger, compress) = middleware::setup_middleware();
            let cors = middleware::setup_cors(&allowed_origins);

            App::new()
                .app_data(service_data.clone())
                .app_data(external_data.clone())
                .wrap(logger)
                .wrap(compress)
                .wrap(cors)
                .configure(routes::configure_routes)
        })
        .bind(&bind_addr)
        .with_context(|| format!("Failed to bind to {}", bind_addr))?
        .run()
        .await
        .context("HTTP server error")?;

        Ok(())
    }
}

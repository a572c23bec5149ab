// HTTP API server binary for the product-recommendation backend

use anyhow::Result;
use product_rec::api::ApiServer;
use product_rec::catalog::default_products_path;
use product_rec::service::ProductService;
use product_rec::util::env as env_util;

#[actix_web::main]
async fn main() -> Result<()> {
    env_util::init_env();
    product_rec::tracing::init_tracing("info")?;

    tracing::info!("initializing product-rec API server");

    let server = ApiServer::from_env()?;

    // Catalog construction never fails; a broken or missing data file
    // resolves to the built-in fallback catalog.
    let path = default_products_path();
    let service = ProductService::from_path(&path);

    server.run(service).await?;

    Ok(())
}

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fiorente::catalog::Catalog;
use fiorente::config::Config;
use fiorente::api;
use fiorente::db::{Database, OrderStore, PgOrderStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fiorente=debug")),
        )
        .init();

    tracing::info!("🍕 Starting Fiorente storefront API");

    let config = Config::load();
    if config.database_url.is_none() {
        tracing::warn!("DATABASE_URL not configured; orders will not be persisted");
    }

    // The pool is established lazily by the first request that needs it, so
    // the server comes up even when Postgres is unreachable.
    let database = Arc::new(Database::new(config.database_url.clone()));
    let store: Arc<dyn OrderStore> = Arc::new(PgOrderStore::new(database));
    let store = web::Data::from(store);
    let catalog = web::Data::new(Catalog::standard());

    let port = config.port;
    tracing::info!(port, "Listening for orders");

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(catalog.clone())
            .configure(api::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}

use std::net::SocketAddr;

use anyhow::Context;
use stockroom_api::{app, AppState};
use stockroom_catalog::CatalogLoader;
use stockroom_order::{DocumentNumber, Requester, RequisitionManager};
use stockroom_store::{Config, HttpCatalogSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockroom_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Stockroom API on port {}", config.server.port);

    let requester = Requester {
        location_code: config.requisition.location_code.clone(),
        location_name: config.requisition.location_name.clone(),
        person_id: config.requisition.person_id.clone(),
        person_name: config.requisition.person_name.clone(),
    };
    let manager = RequisitionManager::new(
        requester,
        DocumentNumber::new(config.requisition.first_document_number),
    );
    let app_state = AppState::new(manager);

    // Catalog loads in the background; requests see LOADING until it resolves
    let loader = CatalogLoader::new(config.catalog.default_stock);
    let source = HttpCatalogSource::new(
        config.catalog.url.clone(),
        config.catalog.request_timeout_seconds,
    );
    tracing::info!("Loading catalog from {}", source.url());
    let loading_state = app_state.clone();
    tokio::spawn(async move {
        loading_state.load_catalog(&loader, &source).await;
    });

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

// Define data modules
mod config; // Runtime configuration (port, file paths)
mod models; // Data structures (Analytics, VisitRecord)
mod store;  // Persistent storage (load/save analytics.json)
mod logic;  // Core visit-recording logic
mod routes_visits; // HTTP handler for the visit-logging API
mod routes_report; // HTTP handler for the analytics report API

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir}; // Static files + cross-origin requests
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "visit_analytics=info,tower_http=info".into()),
        )
        .init();

    let config = config::Config::from_env();
    let store = Arc::new(store::Store::new(&config.data_file));

    let app = Router::new()
        // visits
        .route("/log_visit", get(routes_visits::log_visit))
        // report
        .route("/analytics", get(routes_report::get_analytics))
        // everything else is the static site (HTML/CSS/JS)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .with_state(store);

    info!("server running at http://{}", config.addr);
    info!("analytics file: {}", config.data_file.display());
    info!("static files:   {}", config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("bind failed");

    axum::serve(listener, app).await.expect("server error");
}

use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod catalog;
pub mod equipment;
pub mod error;
pub mod history;
pub mod requisition;
pub mod shell;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .merge(shell::routes())
        .merge(equipment::routes())
        .merge(catalog::routes())
        .merge(requisition::routes())
        .merge(history::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

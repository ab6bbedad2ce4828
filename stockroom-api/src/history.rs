use std::convert::Infallible;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use futures_util::stream::{Stream, StreamExt};
use stockroom_order::OrderHistory;
use tokio_stream::wrappers::BroadcastStream;
use tracing::warn;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/history", get(list_history))
        .route("/v1/history/stream", get(stream_history))
        .route("/v1/history/{id}", get(get_history))
}

/// GET /v1/history
pub async fn list_history(State(state): State<AppState>) -> Json<Vec<OrderHistory>> {
    let manager = state.requisition.read().await;
    Json(manager.history().records().to_vec())
}

/// GET /v1/history/{id}
pub async fn get_history(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, AppError>,
) -> Result<Json<OrderHistory>, AppError> {
    let manager = state.requisition.read().await;
    manager
        .history()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Requisition not found: {}", id)))
}

/// GET /v1/history/stream
/// Server-sent `requisition_saved` events
pub async fn stream_history(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.events_tx.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| async move {
        match result {
            Ok(event) => Event::default()
                .event("requisition_saved")
                .json_data(&event)
                .ok()
                .map(Ok::<_, Infallible>),
            Err(e) => {
                warn!(error = %e, "History stream lagged");
                None
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

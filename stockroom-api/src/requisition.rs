use axum::{
    extract::State,
    response::Html,
    routing::{get, post, put},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stockroom_catalog::CatalogStatus;
use stockroom_order::{CartItem, OrderHistory, Requester, RequisitionError, RequisitionManager};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Unit of measure shown next to every product
const UNIT: &str = "ชิ้น";

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RequisitionResponse {
    pub document_no: String,
    pub date: NaiveDate,
    pub requester: Requester,
    pub catalog_status: CatalogStatus,
    pub selection: SelectionResponse,
    pub items: Vec<CartLineResponse>,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub product_id: Option<String>,
    pub quantity: u32,
    pub unit: &'static str,
    pub unit_price: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CartLineResponse {
    #[serde(flatten)]
    pub item: CartItem,
    pub line_total: f64,
}

#[derive(Debug, Deserialize)]
pub struct SetDateRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct SelectProductRequest {
    pub product_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SetQuantityRequest {
    pub quantity: u32,
}

/// Missing fields fall back to the current form selection
#[derive(Debug, Default, Deserialize)]
pub struct AddItemRequest {
    pub product_id: Option<String>,
    pub quantity: Option<u32>,
}

fn view(manager: &RequisitionManager) -> RequisitionResponse {
    let selection = manager.selection();
    RequisitionResponse {
        document_no: manager.document_number().to_string(),
        date: manager.requisition_date(),
        requester: manager.requester().clone(),
        catalog_status: manager.catalog().status().clone(),
        selection: SelectionResponse {
            product_id: selection.product_id.clone(),
            quantity: selection.quantity,
            unit: UNIT,
            unit_price: manager.selected_product().map(|p| p.price),
        },
        items: manager
            .cart()
            .items()
            .iter()
            .map(|item| CartLineResponse {
                item: item.clone(),
                line_total: item.line_total(),
            })
            .collect(),
        total: manager.total(),
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/requisition", get(get_requisition))
        .route("/v1/requisition/date", put(set_date))
        .route("/v1/requisition/selection", put(select_product))
        .route("/v1/requisition/search", post(search_product))
        .route("/v1/requisition/quantity", put(set_quantity))
        .route("/v1/requisition/items", post(add_item).delete(clear_items))
        .route("/v1/requisition/save", post(save_requisition))
        .route("/v1/requisition/new", post(new_requisition))
        .route("/v1/requisition/print", get(print_requisition))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/requisition
pub async fn get_requisition(State(state): State<AppState>) -> Json<RequisitionResponse> {
    let manager = state.requisition.read().await;
    Json(view(&manager))
}

/// PUT /v1/requisition/date
pub async fn set_date(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<SetDateRequest>, AppError>,
) -> Result<Json<RequisitionResponse>, AppError> {
    let mut manager = state.requisition.write().await;
    manager.set_requisition_date(req.date);
    Ok(Json(view(&manager)))
}

/// PUT /v1/requisition/selection
pub async fn select_product(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<SelectProductRequest>, AppError>,
) -> Result<Json<RequisitionResponse>, AppError> {
    let mut manager = state.requisition.write().await;
    manager.select_product(&req.product_id)?;
    Ok(Json(view(&manager)))
}

/// POST /v1/requisition/search
/// Select the first catalog match; no match leaves the selection as it was
pub async fn search_product(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<SearchRequest>, AppError>,
) -> Result<Json<RequisitionResponse>, AppError> {
    let mut manager = state.requisition.write().await;
    manager.search_and_select(&req.query);
    Ok(Json(view(&manager)))
}

/// PUT /v1/requisition/quantity
pub async fn set_quantity(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<SetQuantityRequest>, AppError>,
) -> Result<Json<RequisitionResponse>, AppError> {
    let mut manager = state.requisition.write().await;
    manager.set_quantity(req.quantity);
    Ok(Json(view(&manager)))
}

/// POST /v1/requisition/items
/// A request without a body adds the current selection
pub async fn add_item(
    State(state): State<AppState>,
    WithRejection(body, _): WithRejection<Option<Json<AddItemRequest>>, AppError>,
) -> Result<Json<RequisitionResponse>, AppError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let mut manager = state.requisition.write().await;

    match (req.product_id, req.quantity) {
        (None, None) => {
            manager.add_selected()?;
        }
        (product_id, quantity) => {
            let product_id = product_id
                .or_else(|| manager.selection().product_id.clone())
                .ok_or(RequisitionError::NoProductSelected)?;
            let quantity = quantity.unwrap_or(manager.selection().quantity);
            manager.add_to_cart(&product_id, quantity)?;
        }
    }

    Ok(Json(view(&manager)))
}

/// DELETE /v1/requisition/items
pub async fn clear_items(State(state): State<AppState>) -> Json<RequisitionResponse> {
    let mut manager = state.requisition.write().await;
    manager.clear();
    Json(view(&manager))
}

/// POST /v1/requisition/save
pub async fn save_requisition(
    State(state): State<AppState>,
) -> Result<Json<OrderHistory>, AppError> {
    let mut manager = state.requisition.write().await;
    let record = manager.save()?;

    // Published under the lock so subscribers see saves in history order.
    // Nobody listening is fine.
    let _ = state.events_tx.send(record.saved_event());

    Ok(Json(record))
}

/// POST /v1/requisition/new
pub async fn new_requisition(
    State(state): State<AppState>,
) -> Result<Json<RequisitionResponse>, AppError> {
    let mut manager = state.requisition.write().await;
    let document_no = manager.new_order()?;
    info!(document_no = %document_no, "Started new requisition");
    Ok(Json(view(&manager)))
}

/// GET /v1/requisition/print
pub async fn print_requisition(State(state): State<AppState>) -> Html<String> {
    Html(state.requisition.read().await.print())
}

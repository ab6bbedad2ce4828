use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use stockroom_catalog::{CatalogStatus, Product};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Product code or part of the name
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub label: String,
    pub image: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            label: product.label(),
            image: product.image.clone(),
            price: product.price,
            quantity: product.quantity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub status: CatalogStatus,
    pub products: Vec<ProductResponse>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/catalog", get(list_catalog))
}

/// GET /v1/catalog?q=
pub async fn list_catalog(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<CatalogQuery>, AppError>,
) -> Result<Json<CatalogResponse>, AppError> {
    let manager = state.requisition.read().await;
    let catalog = manager.catalog();
    let q = query.q.as_deref().unwrap_or("");

    Ok(Json(CatalogResponse {
        status: catalog.status().clone(),
        products: catalog.search(q).into_iter().map(ProductResponse::from).collect(),
    }))
}

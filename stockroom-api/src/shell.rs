use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Top-level navigation tabs
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Requisition,
    Equipment,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Requisition => "เบิกสินค้า",
            Tab::Equipment => "อุปกรณ์",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TabEntry {
    pub id: Tab,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ShellResponse {
    pub title: &'static str,
    pub greeting: &'static str,
    pub active_tab: Tab,
    pub tabs: Vec<TabEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SetTabRequest {
    pub tab: Tab,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/shell", get(get_shell))
        .route("/v1/shell/tab", put(set_tab))
}

fn shell(active_tab: Tab) -> ShellResponse {
    ShellResponse {
        title: "Inventory System",
        greeting: "Welcome, User",
        active_tab,
        tabs: [Tab::Requisition, Tab::Equipment]
            .into_iter()
            .map(|id| TabEntry { id, label: id.label() })
            .collect(),
    }
}

/// GET /v1/shell
pub async fn get_shell(State(state): State<AppState>) -> Json<ShellResponse> {
    let active = *state.active_tab.read().await;
    Json(shell(active))
}

/// PUT /v1/shell/tab
pub async fn set_tab(
    State(state): State<AppState>,
    Json(req): Json<SetTabRequest>,
) -> Json<ShellResponse> {
    *state.active_tab.write().await = req.tab;
    Json(shell(req.tab))
}

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Pickup item shown on the equipment tab
#[derive(Debug, Clone, Serialize)]
pub struct Equipment {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub status: &'static str,
    pub pickup_time: &'static str,
}

const PICKUP_HOURS: &str = "9:00 AM - 5:00 PM";

pub const EQUIPMENT: [Equipment; 3] = [
    Equipment {
        id: 1,
        name: "Safety Helmet",
        image: "https://images.unsplash.com/photo-1601726653156-ee0aa87c7474?auto=format&fit=crop&q=80&w=400",
        status: "Available",
        pickup_time: PICKUP_HOURS,
    },
    Equipment {
        id: 2,
        name: "Work Gloves",
        image: "https://images.unsplash.com/photo-1583624729978-1a0aa814a2e8?auto=format&fit=crop&q=80&w=400",
        status: "Available",
        pickup_time: PICKUP_HOURS,
    },
    Equipment {
        id: 3,
        name: "Safety Vest",
        image: "https://images.unsplash.com/photo-1618517047922-d18a5a36c109?auto=format&fit=crop&q=80&w=400",
        status: "Available",
        pickup_time: PICKUP_HOURS,
    },
];

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/equipment", get(list_equipment))
}

/// GET /v1/equipment
pub async fn list_equipment() -> Json<Vec<Equipment>> {
    Json(EQUIPMENT.to_vec())
}

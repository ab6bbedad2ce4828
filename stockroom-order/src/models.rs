use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use stockroom_catalog::{InventoryError, Product};
use stockroom_shared::models::events::RequisitionSavedEvent;
use uuid::Uuid;

/// One product/quantity pairing in the active requisition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub order_quantity: u32,
}

impl CartItem {
    pub fn new(product: &Product, order_quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            order_quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * self.order_quantity as f64
    }
}

/// Who is withdrawing the goods, and for which location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Requester {
    pub location_code: String,
    pub location_name: String,
    pub person_id: String,
    pub person_name: String,
}

impl Default for Requester {
    fn default() -> Self {
        Self {
            location_code: "122".to_string(),
            location_name: "บจก.ซีเอเชียน อินเตอร์เนชั่นแนล (ไทยแลนด์)ฯ".to_string(),
            person_id: "0003".to_string(),
            person_name: "นายเอกพล โจมา".to_string(),
        }
    }
}

/// A saved requisition. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderHistory {
    pub id: Uuid,
    pub date: NaiveDate,
    pub document_no: String,
    pub location: String,
    pub person_id: String,
    pub person_name: String,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub saved_at: DateTime<Utc>,
}

impl OrderHistory {
    pub fn saved_event(&self) -> RequisitionSavedEvent {
        RequisitionSavedEvent {
            requisition_id: self.id,
            document_no: self.document_no.clone(),
            person_id: self.person_id.clone(),
            line_count: self.items.len(),
            total: self.total,
            timestamp: self.saved_at.timestamp(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequisitionError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        requested: u32,
        available: u32,
    },

    #[error("No product selected")]
    NoProductSelected,

    #[error("Cannot save an empty requisition")]
    EmptyCart,

    #[error("Document numbers exhausted after {0}")]
    DocumentNumbersExhausted(String),
}

impl From<InventoryError> for RequisitionError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NotFound(id) => RequisitionError::ProductNotFound(id),
            InventoryError::InsufficientStock { requested, available } => {
                RequisitionError::InsufficientStock { requested, available }
            }
        }
    }
}

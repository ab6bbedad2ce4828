use uuid::Uuid;

/// Published once per saved requisition.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct RequisitionSavedEvent {
    pub requisition_id: Uuid,
    pub document_no: String,
    pub person_id: String,
    pub line_count: usize,
    pub total: f64,
    pub timestamp: i64,
}

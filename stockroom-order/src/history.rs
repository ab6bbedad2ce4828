use uuid::Uuid;

use crate::models::OrderHistory;

/// Saved requisitions, oldest first. Lives only for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: Vec<OrderHistory>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: OrderHistory) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[OrderHistory] {
        &self.records
    }

    pub fn get(&self, id: &Uuid) -> Option<&OrderHistory> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn record(document_no: &str) -> OrderHistory {
        OrderHistory {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            document_no: document_no.to_string(),
            location: "122".to_string(),
            person_id: "0003".to_string(),
            person_name: "Somchai".to_string(),
            items: vec![],
            total: 0.0,
            saved_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_keeps_order() {
        let mut store = HistoryStore::new();
        store.append(record("IB-000004"));
        store.append(record("IB-000005"));

        let numbers: Vec<&str> = store.records().iter().map(|r| r.document_no.as_str()).collect();
        assert_eq!(numbers, vec!["IB-000004", "IB-000005"]);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut store = HistoryStore::new();
        let saved = record("IB-000004");
        let id = saved.id;
        store.append(saved);

        assert_eq!(store.get(&id).unwrap().document_no, "IB-000004");
        assert!(store.get(&Uuid::new_v4()).is_none());
    }
}

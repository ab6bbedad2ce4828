use chrono::{NaiveDate, Utc};
use stockroom_catalog::{Catalog, Product};
use tracing::{info, warn};
use uuid::Uuid;

use crate::cart::Cart;
use crate::document::DocumentNumber;
use crate::history::HistoryStore;
use crate::models::{CartItem, OrderHistory, Requester, RequisitionError};
use crate::print::PrintDocument;

/// Form inputs for the next add-to-cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub product_id: Option<String>,
    pub quantity: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            product_id: None,
            quantity: 1,
        }
    }
}

/// State of one requisition session: catalog stock, the cart being built,
/// saved history and the running document counter.
pub struct RequisitionManager {
    catalog: Catalog,
    cart: Cart,
    history: HistoryStore,
    document_number: DocumentNumber,
    requisition_date: NaiveDate,
    requester: Requester,
    selection: Selection,
}

impl RequisitionManager {
    pub fn new(requester: Requester, first_document: DocumentNumber) -> Self {
        Self {
            catalog: Catalog::loading(),
            cart: Cart::new(),
            history: HistoryStore::new(),
            document_number: first_document,
            requisition_date: Utc::now().date_naive(),
            requester,
            selection: Selection::default(),
        }
    }

    /// Replace the catalog once the startup fetch resolves
    pub fn install_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn document_number(&self) -> DocumentNumber {
        self.document_number
    }

    pub fn requisition_date(&self) -> NaiveDate {
        self.requisition_date
    }

    pub fn set_requisition_date(&mut self, date: NaiveDate) {
        self.requisition_date = date;
    }

    pub fn requester(&self) -> &Requester {
        &self.requester
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selection
            .product_id
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    pub fn select_product(&mut self, product_id: &str) -> Result<&Product, RequisitionError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| RequisitionError::ProductNotFound(product_id.to_string()))?;
        self.selection.product_id = Some(product.id.clone());
        Ok(product)
    }

    /// Select the first product matching `query`. Leaves the selection alone
    /// when nothing matches.
    pub fn search_and_select(&mut self, query: &str) -> Option<&Product> {
        let product = self.catalog.first_match(query)?;
        self.selection.product_id = Some(product.id.clone());
        Some(product)
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.selection.quantity = quantity;
    }

    /// Add to the cart and reset the form inputs
    pub fn add_to_cart(&mut self, product_id: &str, quantity: u32) -> Result<CartItem, RequisitionError> {
        let line = match self.cart.add(&mut self.catalog, product_id, quantity) {
            Ok(line) => line.clone(),
            Err(e) => {
                warn!(product_id, quantity, error = %e, "Add to cart rejected");
                return Err(e);
            }
        };
        self.selection = Selection::default();
        Ok(line)
    }

    /// Add the selected product with the quantity currently in the form
    pub fn add_selected(&mut self) -> Result<CartItem, RequisitionError> {
        let product_id = self
            .selection
            .product_id
            .clone()
            .ok_or(RequisitionError::NoProductSelected)?;
        let quantity = self.selection.quantity;
        self.add_to_cart(&product_id, quantity)
    }

    /// Empty the cart and reset the form inputs
    pub fn clear(&mut self) {
        self.cart.clear();
        self.selection = Selection::default();
    }

    /// Record the current cart in history, advance the document counter and
    /// start a fresh cart.
    pub fn save(&mut self) -> Result<OrderHistory, RequisitionError> {
        if self.cart.is_empty() {
            warn!(document_no = %self.document_number, "Save rejected: cart is empty");
            return Err(RequisitionError::EmptyCart);
        }

        let next_document = self.next_document_number()?;

        let record = OrderHistory {
            id: Uuid::new_v4(),
            date: self.requisition_date,
            document_no: self.document_number.to_string(),
            location: self.requester.location_code.clone(),
            person_id: self.requester.person_id.clone(),
            person_name: self.requester.person_name.clone(),
            items: self.cart.items().to_vec(),
            total: self.cart.total(),
            saved_at: Utc::now(),
        };

        self.history.append(record.clone());
        self.document_number = next_document;
        self.clear();

        info!(
            document_no = %record.document_no,
            lines = record.items.len(),
            total = record.total,
            "Requisition saved"
        );
        Ok(record)
    }

    /// Abandon the current requisition and move on to the next number
    pub fn new_order(&mut self) -> Result<DocumentNumber, RequisitionError> {
        let next_document = self.next_document_number()?;
        self.clear();
        self.document_number = next_document;
        Ok(next_document)
    }

    fn next_document_number(&self) -> Result<DocumentNumber, RequisitionError> {
        self.document_number.next().ok_or_else(|| {
            warn!(document_no = %self.document_number, "Document counter exhausted");
            RequisitionError::DocumentNumbersExhausted(self.document_number.to_string())
        })
    }

    pub fn print(&self) -> String {
        PrintDocument {
            date: self.requisition_date,
            document_no: self.document_number,
            requester: &self.requester,
            items: self.cart.items(),
            total: self.cart.total(),
        }
        .render()
    }
}

impl Default for RequisitionManager {
    fn default() -> Self {
        Self::new(Requester::default(), DocumentNumber::new(4))
    }
}

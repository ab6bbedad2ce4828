pub mod models;
pub mod cart;
pub mod document;
pub mod history;
pub mod print;
pub mod manager;

pub use models::{CartItem, OrderHistory, Requester, RequisitionError};
pub use cart::Cart;
pub use document::DocumentNumber;
pub use history::HistoryStore;
pub use print::PrintDocument;
pub use manager::{RequisitionManager, Selection};
